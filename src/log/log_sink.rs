use crate::log::{call_site::CallSite, log_level::LogLevel};

/// Destination of already formatted messages.
pub trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, msg: &str, site: Option<&CallSite>);
}
