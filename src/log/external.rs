//! Entry points for callers outside the templated macros.

use std::path::Path;

use crate::log::{log_file, log_level::LogLevel, logger};

/// Sets the process-wide log file and reports whether it exists right after
/// the assignment. A missing file is still used and gets created by the first
/// line written to it.
pub fn set_log_file<P: AsRef<Path>>(path: P) -> bool {
    log_file::set_log_file(path)
}

/// Logs pre-formatted text through the process-wide logger's sink, without
/// placeholder substitution and without a call site.
pub fn external_log(level: LogLevel, text: &str) {
    logger::global().log_str(level, text, None);
}
