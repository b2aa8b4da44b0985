use std::{path::PathBuf, str::FromStr, sync::OnceLock};

use crate::{
    config::LoggerConfig,
    log::{
        call_site::CallSite,
        formatter::FormatStrategy,
        line_sink::LineSink,
        log_arg::LogArg,
        log_error::LogError,
        log_file,
        log_level::LogLevel,
        log_sink::LogSink,
        tracing_sink::TracingSink,
    },
};

/// Which sink receives the formatted messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    /// Decorated text lines to the log file or the console.
    Line,
    /// Events on the `tracing` facade.
    Structured,
}

impl Default for Backend {
    /// `Structured` when built with the `structured` feature, `Line` otherwise.
    fn default() -> Self {
        if cfg!(feature = "structured") {
            Backend::Structured
        } else {
            Backend::Line
        }
    }
}

impl FromStr for Backend {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" | "internal" => Ok(Backend::Line),
            "structured" | "tracing" => Ok(Backend::Structured),
            other => Err(LogError::UnknownBackend(other.to_string())),
        }
    }
}

/// Template formatter plus the sink its output goes to.
///
/// The process-wide instance is chosen once, either explicitly through
/// [`init`] or lazily from the build defaults on first use.
pub struct Logger {
    strategy: FormatStrategy,
    sink: Box<dyn LogSink>,
    log_file: Option<PathBuf>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("strategy", &self.strategy)
            .field("log_file", &self.log_file)
            .finish_non_exhaustive()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::from_config(&LoggerConfig::default())
    }
}

impl Logger {
    #[must_use]
    pub fn new(strategy: FormatStrategy, sink: Box<dyn LogSink>) -> Self {
        Self {
            strategy,
            sink,
            log_file: None,
        }
    }

    /// Builds the logger described by `config`.
    ///
    /// The line backend writes through the process-wide sink state. A
    /// configured `log_file` is stored there by [`init`], once this logger is
    /// the installed one.
    #[must_use]
    pub fn from_config(config: &LoggerConfig) -> Self {
        match config.backend {
            Backend::Line => Self {
                log_file: config.log_file.clone(),
                ..Self::new(config.format, Box::new(LineSink::default()))
            },
            Backend::Structured => {
                Self::new(config.format, Box::new(TracingSink::new(config.tag.clone())))
            }
        }
    }

    /// Log file this logger points the sink state at when installed.
    #[must_use]
    pub fn log_file(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    #[must_use]
    pub fn strategy(&self) -> FormatStrategy {
        self.strategy
    }

    /// Expands `template` with `args` and hands the message to the sink.
    pub fn log(
        &self,
        level: LogLevel,
        template: &str,
        args: &[LogArg<'_>],
        site: Option<&CallSite>,
    ) {
        let msg = self.strategy.format(template, args);
        self.sink.log(level, &msg, site);
    }

    /// Hands `text` to the sink as is, without placeholder substitution.
    pub fn log_str(&self, level: LogLevel, text: &str, site: Option<&CallSite>) {
        self.sink.log(level, text, site);
    }
}

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Installs the process-wide logger.
///
/// # Errors
///
/// Returns [`LogError::AlreadyInitialized`] if a logger was already installed,
/// explicitly or by an earlier logging call. The sink state is left untouched
/// in that case.
pub fn init(logger: Logger) -> Result<(), LogError> {
    let path = logger.log_file.clone();
    GLOBAL
        .set(logger)
        .map_err(|_| LogError::AlreadyInitialized)?;
    if let Some(path) = path {
        log_file::set_log_file(path);
    }
    Ok(())
}

/// Installs the logger described by a config file.
///
/// # Errors
///
/// Fails if the file cannot be read or holds invalid values, or if a logger
/// was already installed.
pub fn init_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<(), LogError> {
    let config = LoggerConfig::load(path)?;
    init(Logger::from_config(&config))
}

/// The process-wide logger, built from the build defaults if [`init`] was
/// never called.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::default)
}
