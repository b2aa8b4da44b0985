#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;

use linelog::log::{
    log_error::LogError,
    log_file,
    logger::{self, Logger},
};

// Own test binary: the global logger starts out uninstalled here.
#[test]
fn rejected_init_keeps_the_current_log_file() {
    let _ = logger::global();
    let before = log_file::global().log_file();

    let dir = std::env::temp_dir().join(format!(
        "linelog-init-{}-{}",
        std::process::id(),
        rand::random::<u32>()
    ));
    fs::create_dir_all(&dir).unwrap();
    let target = dir.join("redirect.log");
    let conf = dir.join("linelog.conf");
    fs::write(
        &conf,
        format!("[Logging]\nlog_file = {}\nbackend = line\n", target.display()),
    )
    .unwrap();

    let err = logger::init_from_file(&conf).unwrap_err();
    assert!(matches!(err, LogError::AlreadyInitialized));
    assert_eq!(log_file::global().log_file(), before);

    let logger = Logger::default();
    assert!(logger::init(logger).is_err());
    assert_eq!(log_file::global().log_file(), before);
    assert!(!target.exists());

    let _ = fs::remove_dir_all(&dir);
}
