use std::fmt::Write as _;

/// Renders the first `size` bytes of `data` as rows of `chunk_size`
/// space-separated uppercase hex bytes, one `\n`-terminated row per chunk.
///
/// `size` is clamped to the buffer. A zero `size` or `chunk_size` yields an
/// empty string.
///
/// ```
/// use linelog::log::hex_dump::log_binary_data;
///
/// assert_eq!(log_binary_data(&[0x0A, 0x1B, 0x2C], 3, 2), "0A 1B\n2C\n");
/// ```
#[must_use]
pub fn log_binary_data(data: &[u8], size: usize, chunk_size: usize) -> String {
    let size = size.min(data.len());
    if size == 0 || chunk_size == 0 {
        return String::new();
    }

    // "XX " per byte already covers the row terminators.
    let mut out = String::with_capacity(size * 3);
    for chunk in data[..size].chunks(chunk_size) {
        for (i, byte) in chunk.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{byte:02X}");
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_chunk_may_be_shorter() {
        assert_eq!(log_binary_data(&[0x0A, 0x1B, 0x2C], 3, 2), "0A 1B\n2C\n");
    }

    #[test]
    fn wide_chunk_gives_single_row() {
        assert_eq!(log_binary_data(&[0xde, 0xad, 0xbe, 0xef], 4, 16), "DE AD BE EF\n");
    }

    #[test]
    fn exact_multiple_has_no_empty_row() {
        assert_eq!(log_binary_data(&[1, 2, 3, 4], 4, 2), "01 02\n03 04\n");
    }

    #[test]
    fn zero_inputs_are_empty() {
        assert_eq!(log_binary_data(&[1, 2, 3], 0, 2), "");
        assert_eq!(log_binary_data(&[1, 2, 3], 3, 0), "");
        assert_eq!(log_binary_data(&[], 5, 2), "");
    }

    #[test]
    fn size_limits_and_is_clamped() {
        assert_eq!(log_binary_data(&[0xff, 0x00, 0x10], 2, 1), "FF\n00\n");
        assert_eq!(log_binary_data(&[0xff], 10, 4), "FF\n");
    }
}
