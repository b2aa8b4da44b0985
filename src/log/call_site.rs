use std::{fmt, panic::Location};

/// Source location of a logging call.
///
/// Built by [`call_site!`](crate::call_site) at the point of the call; lives
/// only as long as that call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallSite {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
    pub function: &'static str,
}

impl CallSite {
    #[must_use]
    pub const fn new(file: &'static str, line: u32, column: u32, function: &'static str) -> Self {
        Self {
            file,
            line,
            column,
            function,
        }
    }

    /// Location of the caller of a `#[track_caller]` function. The function
    /// name is not available there, so `function` is supplied by the caller.
    #[must_use]
    #[track_caller]
    pub fn caller(function: &'static str) -> Self {
        let loc = Location::caller();
        Self::new(loc.file(), loc.line(), loc.column(), function)
    }
}

/// `file(line,col,"function")`, the segment written before the message.
impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({},{},{:?})",
            self.file, self.line, self.column, self.function
        )
    }
}

/// Strips the probe suffix and any closure frames from a `type_name` path.
#[doc(hidden)]
#[must_use]
pub fn trim_function_name(raw: &'static str) -> &'static str {
    let mut name = raw.strip_suffix("::__probe").unwrap_or(raw);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}
