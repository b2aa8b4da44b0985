#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    sync::{Mutex, MutexGuard, Once},
    thread,
};

use linelog::log::{
    LogLevel, NULL, external_log,
    formatter::FormatStrategy,
    line_sink::LineSink,
    logger::{self, Logger},
    set_log_file,
};

// The log file path is process-wide; tests touching it take turns.
static SERIAL: Mutex<()> = Mutex::new(());
static INIT: Once = Once::new();
static CONSOLE: Mutex<Vec<u8>> = Mutex::new(Vec::new());

// Console writer of the installed logger.
struct ConsoleTap;

impl Write for ConsoleTap {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        CONSOLE.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn setup() -> MutexGuard<'static, ()> {
    INIT.call_once(|| {
        logger::init(Logger::new(
            FormatStrategy::Scan,
            Box::new(LineSink::default().with_console(ConsoleTap)),
        ))
        .expect("first init succeeds");
    });
    SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

fn take_console() -> String {
    String::from_utf8(std::mem::take(&mut *CONSOLE.lock().unwrap())).unwrap()
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "linelog-it-{}-{}-{name}",
        std::process::id(),
        rand::random::<u32>()
    ))
}

fn read_lines(path: &PathBuf) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn missing_file_is_reported_and_created_on_first_line() {
    let _guard = setup();
    let path = temp_path("created.log");

    assert!(!set_log_file(&path));
    linelog::log!(LogLevel::Info, "value=%", 42);
    assert!(path.exists());
    assert!(set_log_file(&path));

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with("value=42"), "{}", lines[0]);
    assert!(lines[0].contains(" [I][thread "), "{}", lines[0]);
    assert!(
        lines[0].contains("missing_file_is_reported_and_created_on_first_line\"): "),
        "{}",
        lines[0]
    );
    assert!(lines[0].contains(file!()), "{}", lines[0]);

    set_log_file("");
    let _ = fs::remove_file(&path);
}

#[test]
fn cleared_file_routes_to_console_and_creates_nothing() {
    let _guard = setup();
    let path = temp_path("never.log");

    set_log_file(&path);
    set_log_file("");
    take_console();
    linelog::log!(LogLevel::Info, "value=%", 42);

    let console = take_console();
    assert!(console.ends_with("value=42\n"), "{console:?}");
    assert!(console.contains(" [I][thread "), "{console:?}");
    assert_eq!(console.lines().count(), 1);
    assert!(!path.exists());
}

#[test]
fn setting_the_same_path_twice_changes_nothing() {
    let _guard = setup();
    let path = temp_path("twice.log");

    set_log_file(&path);
    set_log_file(&path);
    linelog::log_warning!("first % of %", 1, 2);
    linelog::log_error!("second");

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("[W]") && lines[0].ends_with("first 1of 2"));
    assert!(lines[1].contains("[E]") && lines[1].ends_with("second"));

    set_log_file("");
    let _ = fs::remove_file(&path);
}

#[test]
fn null_arguments_render_sentinels() {
    let _guard = setup();
    let path = temp_path("nulls.log");
    set_log_file(&path);

    let missing: Option<&str> = None;
    linelog::log_debug!("lit=%s ptr=%s", NULL, missing);

    let lines = read_lines(&path);
    assert!(
        lines[0].ends_with("lit=(compile-time nullptr) ptr=(runtime nullptr)"),
        "{}",
        lines[0]
    );

    set_log_file("");
    let _ = fs::remove_file(&path);
}

#[test]
fn external_log_skips_substitution_and_call_site() {
    let _guard = setup();
    let path = temp_path("external.log");
    set_log_file(&path);

    external_log(LogLevel::Fatal, "100% literal %d");

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 1);
    let (_, rest) = lines[0].split_once("[F][thread ").unwrap();
    let (_, message) = rest.split_once("] ").unwrap();
    assert_eq!(message, "100% literal %d");

    set_log_file("");
    let _ = fs::remove_file(&path);
}

#[test]
fn second_init_is_rejected() {
    let _guard = setup();
    let err = logger::init(Logger::default()).unwrap_err();
    assert!(matches!(err, linelog::log::log_error::LogError::AlreadyInitialized));
}

#[test]
fn concurrent_writers_each_land_one_line() {
    let _guard = setup();
    let path = temp_path("threads.log");
    set_log_file(&path);

    let handles: Vec<_> = (0..4)
        .map(|t| {
            thread::spawn(move || {
                for i in 0..25 {
                    linelog::log_info!("thread % line %", t, i);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 100);
    assert!(lines.iter().all(|l| l.contains("[I][thread ")));

    set_log_file("");
    let _ = fs::remove_file(&path);
}

#[cfg(debug_assertions)]
#[test]
fn check_variable_logs_name_and_value() {
    let _guard = setup();
    let path = temp_path("check.log");
    set_log_file(&path);

    let retries = 3;
    linelog::check_variable!(retries, "%d");
    linelog::trace_point!("reached");

    let lines = read_lines(&path);
    assert!(lines[0].contains("[D]") && lines[0].ends_with("retries: 3"), "{}", lines[0]);
    assert!(lines[1].contains("[T]") && lines[1].ends_with("reached"), "{}", lines[1]);

    set_log_file("");
    let _ = fs::remove_file(&path);
}

#[test]
fn display_values_log_without_wrapping() {
    let _guard = setup();
    let path = temp_path("display.log");
    set_log_file(&path);

    let peer = std::net::Ipv4Addr::LOCALHOST;
    linelog::log_info!("peer %s port %d", peer, 8080u16);

    let lines = read_lines(&path);
    assert!(lines[0].ends_with("peer 127.0.0.1 port 8080"), "{}", lines[0]);

    set_log_file("");
    let _ = fs::remove_file(&path);
}
