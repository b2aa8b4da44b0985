//! INI-style configuration for the logger.
//!
//! ```text
//! # linelog.conf
//! [Logging]
//! log_file = ~/logs/app.log
//! backend  = line        # line | structured
//! format   = native      # scan | native
//! tag      = app
//! ```
//!
//! Keys missing from the file keep their build defaults. The `LINELOG_FILE`
//! environment variable overrides `log_file`.

use std::{
    collections::HashMap,
    fs,
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::log::{formatter::FormatStrategy, logger::Backend, tracing_sink::DEFAULT_TAG};

/// Section holding the logger keys.
pub const LOGGING_SECTION: &str = "Logging";

/// Environment variable overriding `log_file`.
pub const LOG_FILE_ENV: &str = "LINELOG_FILE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("error reading file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid value {value:?} for [{section}] {key}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
    },
}

#[derive(Debug, Default)]
pub struct Config {
    pub globals: HashMap<String, String>,
    pub sections: HashMap<String, HashMap<String, String>>,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut globals = HashMap::new();
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current_section: Option<String> = None;

        for line in content.lines() {
            let line = strip_comment(line).trim();
            if line.is_empty() {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                let name = &line[1..line.len() - 1];
                current_section = Some(name.trim().to_string());
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_string();
                let value = value.trim().trim_matches('"').to_string();

                match &current_section {
                    None => {
                        globals.insert(key, value);
                    }
                    Some(sec) => {
                        sections.entry(sec.clone()).or_default().insert(key, value);
                    }
                }
            }
        }
        Config { globals, sections }
    }

    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|sec| sec.get(key))
            .map(|s| s.as_str())
    }

    /// Section value, then global value; empty strings count as missing.
    #[must_use]
    pub fn get_non_empty(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section, key)
            .filter(|s| !s.is_empty())
            .or_else(|| self.get_global(key).filter(|s| !s.is_empty()))
    }

    #[must_use]
    pub fn get_global(&self, key: &str) -> Option<&str> {
        self.globals.get(key).map(|s| s.as_str())
    }

    /// Parses a `[Logging]` value with `FromStr`, mapping failures to
    /// [`ConfigError::InvalidValue`].
    fn parse_logging<T: std::str::FromStr>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        self.get_non_empty(LOGGING_SECTION, key)
            .map(|raw| {
                raw.parse().map_err(|_| ConfigError::InvalidValue {
                    section: LOGGING_SECTION.to_string(),
                    key: key.to_string(),
                    value: raw.to_string(),
                })
            })
            .transpose()
    }
}

/// Settings the logger is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub log_file: Option<PathBuf>,
    pub backend: Backend,
    pub format: FormatStrategy,
    pub tag: String,
}

impl Default for LoggerConfig {
    /// Build defaults: console output, backend and strategy chosen by cargo
    /// features.
    fn default() -> Self {
        Self {
            log_file: None,
            backend: Backend::default(),
            format: FormatStrategy::default(),
            tag: DEFAULT_TAG.to_string(),
        }
    }
}

impl LoggerConfig {
    /// Reads `[Logging]` from a config file, then applies the environment.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Ok(Self::from_config(&Config::load(path)?)?.with_env_overrides())
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            log_file: config
                .get_non_empty(LOGGING_SECTION, "log_file")
                .map(expand_path),
            backend: config.parse_logging("backend")?.unwrap_or(defaults.backend),
            format: config.parse_logging("format")?.unwrap_or(defaults.format),
            tag: config
                .get_non_empty(LOGGING_SECTION, "tag")
                .map_or(defaults.tag, str::to_string),
        })
    }

    /// `LINELOG_FILE`, when set and non-empty, replaces `log_file`.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(path) = std::env::var(LOG_FILE_ENV).ok().filter(|s| !s.is_empty()) {
            self.log_file = Some(expand_path(&path));
        }
        self
    }
}

fn strip_comment(line: &str) -> &str {
    let trimmed = line.trim_start();
    if trimmed.starts_with('#') || trimmed.starts_with(';') {
        return "";
    }
    // Inline comments need whitespace before the '#'.
    match line.find(" #") {
        Some(at) => &line[..at],
        None => line,
    }
}

/// Expands tilde (`~`) in file paths to the user's home directory.
fn expand_path(path_str: &str) -> PathBuf {
    if path_str.starts_with('~') {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .ok()
            .map(PathBuf::from);

        if let Some(mut home_path) = home {
            if path_str == "~" {
                return home_path;
            }
            if path_str.starts_with("~/") || path_str.starts_with("~\\") {
                home_path.push(&path_str[2..]);
                return home_path;
            }
        }
    }
    PathBuf::from(path_str)
}
