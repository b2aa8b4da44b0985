use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while setting up logging.
///
/// Emitting a log line never fails; these only come out of configuration and
/// initialisation paths.
#[derive(Debug, Error)]
pub enum LogError {
    /// The process-wide logger was already installed.
    #[error("logger already initialized")]
    AlreadyInitialized,
    /// A level name that is neither a known name nor a tag character.
    #[error("unknown log level: {0:?}")]
    UnknownLevel(String),
    /// A template strategy name that is not `scan` or `native`.
    #[error("unknown format strategy: {0:?}")]
    UnknownFormat(String),
    /// A backend name that is not `line` or `structured`.
    #[error("unknown backend: {0:?}")]
    UnknownBackend(String),
    /// The logging configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
