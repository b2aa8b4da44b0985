//! linelog is a process-wide logging facility.
//!
//! A call names a severity, a `%` template and its arguments; the template is
//! expanded, decorated with timestamp, severity, thread and call site, and
//! written as one line to the configured log file or, without one, to stdout.
//! Alternatively every message can be routed to the `tracing` facade.
//!
//! ```rust,ignore
//! use linelog::log::LogLevel;
//!
//! linelog::log::set_log_file("/tmp/app.log");
//! linelog::log!(LogLevel::Info, "value=%", 42);
//! ```

/// INI configuration for the logger.
pub mod config;
/// C ABI entry points.
pub mod ffi;
/// Formatting, decoration and dispatch.
pub mod log;
