#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::{
    ffi::{CString, c_char},
    fs,
    sync::Once,
};

use linelog::{
    ffi::{linelog_external_log, linelog_set_log_file},
    log::{
        formatter::FormatStrategy,
        line_sink::LineSink,
        log_file,
        logger::{self, Logger},
    },
};

static INIT: Once = Once::new();

fn setup() {
    INIT.call_once(|| {
        logger::init(Logger::new(
            FormatStrategy::Scan,
            Box::new(LineSink::default()),
        ))
        .expect("first init succeeds");
    });
}

// One test: the C entry points share the process-wide log file.
#[test]
fn c_callers_set_the_file_and_log_verbatim() {
    setup();
    let path = std::env::temp_dir().join(format!(
        "linelog-abi-{}-{}.log",
        std::process::id(),
        rand::random::<u32>()
    ));
    let c_path = CString::new(path.to_str().unwrap()).unwrap();

    let existed = unsafe { linelog_set_log_file(c_path.as_ptr()) };
    assert!(!existed);

    let text = CString::new("from C: 50% done").unwrap();
    unsafe {
        linelog_external_log(b'E' as c_char, text.as_ptr());
        linelog_external_log(b'?' as c_char, std::ptr::null());
    }

    let body = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("[E]") && lines[0].ends_with("] from C: 50% done"));
    assert!(lines[1].contains("[I]") && lines[1].ends_with("] (runtime nullptr)"));

    assert!(unsafe { linelog_set_log_file(c_path.as_ptr()) });
    assert!(!unsafe { linelog_set_log_file(std::ptr::null()) });
    assert!(log_file::global().log_file().is_none());

    let _ = fs::remove_file(&path);
}
