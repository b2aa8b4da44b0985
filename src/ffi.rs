//! C-compatible entry points.
//!
//! ```c
//! bool linelog_set_log_file(const char *path);
//! void linelog_external_log(char level_tag, const char *text);
//! ```
//!
//! `level_tag` is one of `T D I W E F`; anything else logs at Info. Strings are
//! read as UTF-8 with invalid sequences replaced.

use std::{
    ffi::{CStr, c_char},
    path::PathBuf,
};

use crate::log::{
    external, log_arg::RUNTIME_NULL, log_file, log_level::LogLevel,
};

/// ABI version of the entry points below.
#[unsafe(no_mangle)]
pub extern "C" fn linelog_api_version() -> u32 {
    1
}

/// Sets the log file; returns whether it exists after the assignment.
/// A null `path` clears the log file and returns false.
///
/// # Safety
///
/// `path` must be null or point to a NUL-terminated string that stays valid
/// for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linelog_set_log_file(path: *const c_char) -> bool {
    if path.is_null() {
        log_file::global().clear_log_file();
        return false;
    }
    let path = unsafe { CStr::from_ptr(path) }.to_string_lossy();
    external::set_log_file(PathBuf::from(path.as_ref()))
}

/// Logs `text` without placeholder substitution. A null `text` logs the null
/// pointer token.
///
/// # Safety
///
/// `text` must be null or point to a NUL-terminated string that stays valid
/// for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn linelog_external_log(level_tag: c_char, text: *const c_char) {
    let level = level_from_tag(level_tag);
    if text.is_null() {
        external::external_log(level, RUNTIME_NULL);
        return;
    }
    let text = unsafe { CStr::from_ptr(text) }.to_string_lossy();
    external::external_log(level, &text);
}

fn level_from_tag(tag: c_char) -> LogLevel {
    // c_char is i8 or u8 depending on the target.
    #[allow(clippy::cast_sign_loss, clippy::unnecessary_cast)]
    let byte = tag as u8;
    LogLevel::from_tag(char::from(byte)).unwrap_or(LogLevel::Info)
}
