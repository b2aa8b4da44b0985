//! Where the line sink writes: an optional log file path.
//!
//! The path is swapped as a whole, so a reader sees either the previous or the
//! new path. Nothing orders a setter against writers already in flight: a
//! line being written while the path changes may still land in the old file.

use std::{
    path::{Path, PathBuf},
    sync::{Arc, LazyLock},
};

use arc_swap::ArcSwapOption;

/// Holder of the active log file path. Empty means console output.
#[derive(Debug, Default)]
pub struct SinkState {
    path: ArcSwapOption<PathBuf>,
}

impl SinkState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `path` the target of subsequent writes and reports whether it
    /// exists right after the assignment.
    ///
    /// A missing file is still accepted; the first append creates it. An empty
    /// path clears the target.
    pub fn set_log_file<P: AsRef<Path>>(&self, path: P) -> bool {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            self.clear_log_file();
            return false;
        }
        self.path.store(Some(Arc::new(path.to_path_buf())));
        path.exists()
    }

    /// Routes subsequent writes back to the console.
    pub fn clear_log_file(&self) {
        self.path.store(None);
    }

    /// Current target, if any.
    #[must_use]
    pub fn log_file(&self) -> Option<Arc<PathBuf>> {
        self.path.load_full()
    }
}

static GLOBAL: LazyLock<Arc<SinkState>> = LazyLock::new(|| Arc::new(SinkState::new()));

/// The process-wide sink state shared by the entry points and the default
/// line sink.
#[must_use]
pub fn global() -> Arc<SinkState> {
    Arc::clone(&GLOBAL)
}

/// Sets the process-wide log file. See [`SinkState::set_log_file`].
pub fn set_log_file<P: AsRef<Path>>(path: P) -> bool {
    GLOBAL.set_log_file(path)
}
