use std::{
    io::{self, Read},
    path::PathBuf,
    process,
};

use clap::Parser;
use linelog::{
    config::LoggerConfig,
    log::{
        external_log, hex_dump::log_binary_data, log_level::LogLevel, logger, logger::Backend,
        logger::Logger,
    },
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Writes one decorated line to a log file (or stdout) from the shell.
#[derive(Parser)]
#[command(name = "linelog")]
#[command(about = "Append a severity-tagged line to a log file", long_about = None)]
struct Cli {
    /// INI file with a [Logging] section
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file; overrides the config file and LINELOG_FILE
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Severity name or tag (trace, debug, info, warning, error, fatal)
    #[arg(short, long, default_value = "info")]
    level: LogLevel,

    /// Dump stdin as hex rows instead of logging MESSAGE
    #[arg(long)]
    hex: bool,

    /// Bytes per hex row
    #[arg(long, default_value_t = 16)]
    chunk: usize,

    /// Message text, logged verbatim
    message: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    // --- Resolve configuration ---------------------------------------------
    let mut config = match &cli.config {
        Some(path) => LoggerConfig::load(path).unwrap_or_else(|e| {
            eprintln!("linelog: {e}");
            process::exit(2);
        }),
        None => LoggerConfig::default().with_env_overrides(),
    };
    if let Some(file) = cli.file {
        config.log_file = Some(file);
    }

    if config.backend == Backend::Structured {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "linelog=trace".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    if let Err(e) = logger::init(Logger::from_config(&config)) {
        eprintln!("linelog: {e}");
        process::exit(2);
    }

    // --- Log ---------------------------------------------------------------
    if cli.hex {
        let mut bytes = Vec::new();
        if let Err(e) = io::stdin().read_to_end(&mut bytes) {
            eprintln!("linelog: reading stdin: {e}");
            process::exit(1);
        }
        let dump = log_binary_data(&bytes, bytes.len(), cli.chunk);
        let text = dump.strip_suffix('\n').unwrap_or(&dump);
        external_log(cli.level, &format!("{} bytes\n{text}", bytes.len()));
    } else {
        external_log(cli.level, &cli.message.join(" "));
    }
}
