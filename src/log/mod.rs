pub mod call_site;
pub mod external;
pub mod formatter;
pub mod hex_dump;
pub mod line_sink;
pub mod log_arg;
pub mod log_error;
pub mod log_file;
pub mod log_level;
pub mod log_macros;
pub mod log_sink;
pub mod logger;
pub mod tracing_sink;

pub use external::{external_log, set_log_file};
pub use log_arg::{NULL, shown};
pub use log_level::LogLevel;
