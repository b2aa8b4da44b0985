use tracing::Level;

use crate::log::{call_site::CallSite, log_level::LogLevel, log_sink::LogSink};

/// Tag attached to every structured event unless configured otherwise.
pub const DEFAULT_TAG: &str = "Log";

/// Structured backend: forwards each message as one `tracing` event.
///
/// The event carries the configured `tag` and the level's backend `priority`;
/// decoration (timestamp, thread, location) is left to the installed
/// subscriber, so the call site is not forwarded.
#[derive(Debug, Clone)]
pub struct TracingSink {
    tag: String,
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(DEFAULT_TAG)
    }
}

impl TracingSink {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

// `tracing::event!` needs the level as a constant.
macro_rules! event_at {
    ($level:expr, $tag:expr, $priority:expr, $msg:expr) => {
        tracing::event!(target: "linelog", $level, tag = $tag, priority = $priority, "{}", $msg)
    };
}

impl LogSink for TracingSink {
    fn log(&self, level: LogLevel, msg: &str, _site: Option<&CallSite>) {
        let tag = self.tag.as_str();
        let priority = level.priority();
        match level.as_tracing() {
            Level::TRACE => event_at!(Level::TRACE, tag, priority, msg),
            Level::DEBUG => event_at!(Level::DEBUG, tag, priority, msg),
            Level::INFO => event_at!(Level::INFO, tag, priority, msg),
            Level::WARN => event_at!(Level::WARN, tag, priority, msg),
            _ => event_at!(Level::ERROR, tag, priority, msg),
        }
    }
}
