//! Templated logging macros.
//!
//! Every macro captures its own call site (file, line, column and enclosing
//! function) and hands the arguments to the formatter as [`LogArg`]s, so
//! callers only write the level, the template and the values. Values without
//! a `LogValue` impl are logged through `Display`:
//!
//! ```rust,ignore
//! use linelog::log::log_level::LogLevel;
//!
//! linelog::log!(LogLevel::Info, "value=%", 42);
//! linelog::log_warning!("retrying % in %d ms", name, delay);
//! ```
//!
//! # Debug helpers
//! `check_variable!` and `trace_point!` only do something when this crate is
//! built with debug assertions; otherwise they expand to `()`.
//!
//! [`LogArg`]: crate::log::log_arg::LogArg

// ============================================================================
// 1. CALL-SITE CAPTURE
// ============================================================================

/// Path of the enclosing function, e.g. `my_crate::net::connect`.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __probe() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::log::call_site::trim_function_name(__type_name_of(__probe))
    }};
}

/// [`CallSite`](crate::log::call_site::CallSite) of the invocation.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::log::call_site::CallSite::new(
            file!(),
            line!(),
            column!(),
            $crate::function_name!(),
        )
    };
}

// ============================================================================
// 2. GENERIC MACROS (The "Workers")
// ============================================================================

/// Logs through an explicit [`Logger`](crate::log::logger::Logger).
#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $lvl:expr, $template:expr $(, $arg:expr)* $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::log::log_arg::{ViaDisplay as _, ViaLogValue as _};
        $logger.log(
            $lvl,
            $template,
            &[$((&$crate::log::log_arg::ArgRef(&$arg)).to_log_arg()),*],
            Some(&$crate::call_site!()),
        );
    }};
}

/// Logs through the process-wide logger.
#[macro_export]
macro_rules! log {
    ($lvl:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::logger_log!($crate::log::logger::global(), $lvl, $template $(, $arg)*)
    };
}

// ============================================================================
// 3. LEVEL-SPECIFIC MACROS
// ============================================================================

#[macro_export]
macro_rules! log_trace   { ($($arg:tt)*) => { $crate::log!($crate::log::log_level::LogLevel::Trace, $($arg)*) } }
#[macro_export]
macro_rules! log_debug   { ($($arg:tt)*) => { $crate::log!($crate::log::log_level::LogLevel::Debug, $($arg)*) } }
#[macro_export]
macro_rules! log_info    { ($($arg:tt)*) => { $crate::log!($crate::log::log_level::LogLevel::Info, $($arg)*) } }
#[macro_export]
macro_rules! log_warning { ($($arg:tt)*) => { $crate::log!($crate::log::log_level::LogLevel::Warning, $($arg)*) } }
#[macro_export]
macro_rules! log_error   { ($($arg:tt)*) => { $crate::log!($crate::log::log_level::LogLevel::Error, $($arg)*) } }
#[macro_export]
macro_rules! log_fatal   { ($($arg:tt)*) => { $crate::log!($crate::log::log_level::LogLevel::Fatal, $($arg)*) } }

// ============================================================================
// 4. DEBUG HELPERS (debug_assertions only)
// ============================================================================

/// Logs `"<expr>: <template>"` at Debug with the expression's value.
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! check_variable {
    ($x:expr, $template:literal) => {
        $crate::log!(
            $crate::log::log_level::LogLevel::Debug,
            concat!(stringify!($x), ": ", $template),
            $x
        )
    };
}

/// Logs a fixed message at Trace.
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! trace_point {
    ($msg:expr) => {
        $crate::log!($crate::log::log_level::LogLevel::Trace, $msg)
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! check_variable {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! trace_point {
    ($($arg:tt)*) => {
        ()
    };
}
