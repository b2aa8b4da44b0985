//! Typed arguments accepted by the templated logging calls.
//!
//! Every value handed to [`log!`](crate::log!) is turned into a [`LogArg`]
//! through [`LogValue`]. Types without a `LogValue` impl that implement
//! `Display` are accepted too and render their `Display` text. Nullable
//! pointers are modelled as `Option`: `None` renders [`RUNTIME_NULL`], while
//! the [`NULL`] literal renders [`COMPILE_TIME_NULL`].

use std::{borrow::Cow, ffi::CStr, fmt, path::Path, rc::Rc, sync::Arc};

/// Token written in place of the [`NULL`] literal.
pub const COMPILE_TIME_NULL: &str = "(compile-time nullptr)";

/// Token written in place of a pointer-like argument that holds nothing.
pub const RUNTIME_NULL: &str = "(runtime nullptr)";

/// The null literal, usable as a logging argument.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Null;

/// Shorthand for [`Null`].
pub const NULL: Null = Null;

/// One argument of a templated log call.
#[derive(Clone, Copy)]
pub enum LogArg<'a> {
    Signed(i128),
    Unsigned(u128),
    Float(f64),
    Char(char),
    Bool(bool),
    Str(&'a str),
    Bytes(&'a [u8]),
    Display(&'a dyn fmt::Display),
    NullLiteral,
    NullPointer,
}

impl fmt::Debug for LogArg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogArg::Signed(v) => f.debug_tuple("Signed").field(v).finish(),
            LogArg::Unsigned(v) => f.debug_tuple("Unsigned").field(v).finish(),
            LogArg::Float(v) => f.debug_tuple("Float").field(v).finish(),
            LogArg::Char(v) => f.debug_tuple("Char").field(v).finish(),
            LogArg::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            LogArg::Str(v) => f.debug_tuple("Str").field(v).finish(),
            LogArg::Bytes(v) => f.debug_tuple("Bytes").field(v).finish(),
            LogArg::Display(v) => f.debug_tuple("Display").field(&v.to_string()).finish(),
            LogArg::NullLiteral => f.write_str("NullLiteral"),
            LogArg::NullPointer => f.write_str("NullPointer"),
        }
    }
}

/// Default textual form, as used by the scanning formatter.
impl fmt::Display for LogArg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogArg::Signed(v) => write!(f, "{v}"),
            LogArg::Unsigned(v) => write!(f, "{v}"),
            LogArg::Float(v) => write!(f, "{v}"),
            LogArg::Char(v) => write!(f, "{v}"),
            LogArg::Bool(v) => write!(f, "{v}"),
            LogArg::Str(v) => f.write_str(v),
            LogArg::Bytes(v) => f.write_str(&String::from_utf8_lossy(v)),
            LogArg::Display(v) => write!(f, "{v}"),
            LogArg::NullLiteral => f.write_str(COMPILE_TIME_NULL),
            LogArg::NullPointer => f.write_str(RUNTIME_NULL),
        }
    }
}

/// Conversion of a value into a [`LogArg`].
pub trait LogValue {
    fn log_arg(&self) -> LogArg<'_>;
}

/// Wraps any [`Display`](fmt::Display) value that has no [`LogValue`] impl.
pub struct Shown<T>(pub T);

/// Logs `value` through its `Display` impl.
pub fn shown<T: fmt::Display>(value: T) -> Shown<T> {
    Shown(value)
}

impl<T: fmt::Display> LogValue for Shown<T> {
    fn log_arg(&self) -> LogArg<'_> {
        LogArg::Display(&self.0)
    }
}

/// Argument slot used by the logging macros.
///
/// Method lookup on `&ArgRef(&value)` tries [`ViaLogValue`] before
/// [`ViaDisplay`], so a `LogValue` impl always wins over `Display`.
#[doc(hidden)]
pub struct ArgRef<'a, T: ?Sized>(pub &'a T);

#[doc(hidden)]
pub trait ViaLogValue<'a> {
    fn to_log_arg(&self) -> LogArg<'a>;
}

impl<'a, T: LogValue + ?Sized> ViaLogValue<'a> for ArgRef<'a, T> {
    fn to_log_arg(&self) -> LogArg<'a> {
        T::log_arg(self.0)
    }
}

#[doc(hidden)]
pub trait ViaDisplay<'a> {
    fn to_log_arg(&self) -> LogArg<'a>;
}

impl<'a, T: fmt::Display> ViaDisplay<'a> for &ArgRef<'a, T> {
    fn to_log_arg(&self) -> LogArg<'a> {
        LogArg::Display(self.0)
    }
}

macro_rules! impl_log_value {
    ($variant:ident as $wide:ty: $($t:ty),+) => {
        $(
            impl LogValue for $t {
                fn log_arg(&self) -> LogArg<'_> {
                    LogArg::$variant(<$wide>::from(*self))
                }
            }
        )+
    };
}

impl_log_value!(Signed as i128: i8, i16, i32, i64, i128);
impl_log_value!(Unsigned as u128: u8, u16, u32, u64, u128);
impl_log_value!(Float as f64: f32, f64);

impl LogValue for isize {
    fn log_arg(&self) -> LogArg<'_> {
        LogArg::Signed(*self as i128)
    }
}

impl LogValue for usize {
    fn log_arg(&self) -> LogArg<'_> {
        LogArg::Unsigned(*self as u128)
    }
}

impl LogValue for char {
    fn log_arg(&self) -> LogArg<'_> {
        LogArg::Char(*self)
    }
}

impl LogValue for bool {
    fn log_arg(&self) -> LogArg<'_> {
        LogArg::Bool(*self)
    }
}

impl LogValue for str {
    fn log_arg(&self) -> LogArg<'_> {
        LogArg::Str(self)
    }
}

impl LogValue for String {
    fn log_arg(&self) -> LogArg<'_> {
        LogArg::Str(self)
    }
}

impl LogValue for Cow<'_, str> {
    fn log_arg(&self) -> LogArg<'_> {
        LogArg::Str(self)
    }
}

impl LogValue for CStr {
    fn log_arg(&self) -> LogArg<'_> {
        match self.to_str() {
            Ok(s) => LogArg::Str(s),
            Err(_) => LogArg::Bytes(self.to_bytes()),
        }
    }
}

impl LogValue for Path {
    fn log_arg(&self) -> LogArg<'_> {
        match self.to_str() {
            Some(s) => LogArg::Str(s),
            None => LogArg::Bytes(self.as_os_str().as_encoded_bytes()),
        }
    }
}

impl LogValue for Null {
    fn log_arg(&self) -> LogArg<'_> {
        LogArg::NullLiteral
    }
}

impl<T: LogValue> LogValue for Option<T> {
    fn log_arg(&self) -> LogArg<'_> {
        match self {
            Some(inner) => inner.log_arg(),
            None => LogArg::NullPointer,
        }
    }
}

impl<T: LogValue + ?Sized> LogValue for &T {
    fn log_arg(&self) -> LogArg<'_> {
        (**self).log_arg()
    }
}

impl<T: LogValue + ?Sized> LogValue for &mut T {
    fn log_arg(&self) -> LogArg<'_> {
        (**self).log_arg()
    }
}

impl<T: LogValue + ?Sized> LogValue for Box<T> {
    fn log_arg(&self) -> LogArg<'_> {
        (**self).log_arg()
    }
}

impl<T: LogValue + ?Sized> LogValue for Rc<T> {
    fn log_arg(&self) -> LogArg<'_> {
        (**self).log_arg()
    }
}

impl<T: LogValue + ?Sized> LogValue for Arc<T> {
    fn log_arg(&self) -> LogArg<'_> {
        (**self).log_arg()
    }
}

impl LogValue for std::path::PathBuf {
    fn log_arg(&self) -> LogArg<'_> {
        self.as_path().log_arg()
    }
}
