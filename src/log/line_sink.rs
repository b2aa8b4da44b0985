use std::{
    fmt::Write as _,
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
    thread,
};

use chrono::Local;

use crate::log::{
    call_site::CallSite,
    log_file::{self, SinkState},
    log_level::LogLevel,
    log_sink::LogSink,
};

/// Where a composed line ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    File(PathBuf),
    Console,
}

/// Internal formatter: decorates each message into one text line and appends
/// it to the log file of its [`SinkState`], or prints it on stdout.
///
/// Line layout:
///
/// ```text
/// 2025-11-02 02:30:45 [I][thread 3] src/net.rs(41,9,"app::net::connect"): connected
/// ```
///
/// The file is opened and closed for every line; no handle is kept between
/// calls. A file that cannot be opened silently falls back to the console,
/// which is stdout unless [`LineSink::with_console`] replaced it. A write
/// that fails once the file is open drops the line.
#[derive(Clone)]
pub struct LineSink {
    state: Arc<SinkState>,
    console: Option<Arc<Mutex<Box<dyn Write + Send>>>>,
}

impl std::fmt::Debug for LineSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineSink")
            .field("state", &self.state)
            .field("console", &if self.console.is_some() { "custom" } else { "stdout" })
            .finish()
    }
}

impl Default for LineSink {
    fn default() -> Self {
        Self::new(log_file::global())
    }
}

impl LineSink {
    #[must_use]
    pub fn new(state: Arc<SinkState>) -> Self {
        Self {
            state,
            console: None,
        }
    }

    /// Sends console output to `writer` instead of stdout.
    #[must_use]
    pub fn with_console(mut self, writer: impl Write + Send + 'static) -> Self {
        self.console = Some(Arc::new(Mutex::new(Box::new(writer))));
        self
    }

    #[must_use]
    pub fn state(&self) -> &Arc<SinkState> {
        &self.state
    }

    /// Composes and writes one line, reporting where it went.
    pub fn emit(&self, level: LogLevel, msg: &str, site: Option<&CallSite>) -> Destination {
        let line = compose_line(&timestamp(), level, &current_thread_id(), site, msg);
        self.write_line(&line)
    }

    /// Writes an already composed line with a single write call.
    pub fn write_line(&self, line: &str) -> Destination {
        if let Some(path) = self.state.log_file() {
            if let Ok(mut file) = open_append(&path) {
                let _ = file.write_all(line.as_bytes());
                return Destination::File(path.to_path_buf());
            }
        }
        self.write_console(line.as_bytes());
        Destination::Console
    }

    fn write_console(&self, bytes: &[u8]) {
        match &self.console {
            Some(console) => {
                let mut writer = console.lock().unwrap_or_else(PoisonError::into_inner);
                let _ = writer.write_all(bytes);
                let _ = writer.flush();
            }
            None => {
                let _ = io::stdout().lock().write_all(bytes);
            }
        }
    }
}

impl LogSink for LineSink {
    #[inline]
    fn log(&self, level: LogLevel, msg: &str, site: Option<&CallSite>) {
        let _ = self.emit(level, msg, site);
    }
}

/// Builds `<timestamp> [<tag>][thread <id>] [<site>: ]<msg>\n`.
#[must_use]
pub fn compose_line(
    timestamp: &str,
    level: LogLevel,
    thread: &str,
    site: Option<&CallSite>,
    msg: &str,
) -> String {
    let mut line = String::with_capacity(timestamp.len() + msg.len() + 96);
    let _ = write!(line, "{timestamp} [{}][thread {thread}] ", level.tag());
    if let Some(site) = site {
        let _ = write!(line, "{site}: ");
    }
    line.push_str(msg);
    line.push('\n');
    line
}

/// Local wall-clock time, second precision.
#[must_use]
pub fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Numeric id of the calling thread.
#[must_use]
pub fn current_thread_id() -> String {
    let raw = format!("{:?}", thread::current().id());
    raw.strip_prefix("ThreadId(")
        .and_then(|s| s.strip_suffix(')'))
        .map_or_else(|| raw.clone(), str::to_string)
}

fn open_append(path: &Path) -> io::Result<File> {
    let open = || OpenOptions::new().create(true).append(true).open(path);
    match open() {
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            // Missing parent directories are created on first use.
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            open()
        }
        other => other,
    }
}
