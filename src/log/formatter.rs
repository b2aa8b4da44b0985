//! Template expansion.
//!
//! Templates carry `%` placeholders that bind positionally to the call's
//! arguments. Two interchangeable strategies exist:
//!
//! * [`FormatStrategy::Scan`] walks the template, replacing each `%` and the
//!   specifier character after it with the next argument's default text.
//! * [`FormatStrategy::Native`] recognises full printf conversion specifiers
//!   (`%-08.3lf`, `%x`, ...) and turns each into a `{}`-style placeholder,
//!   keeping alignment, sign, width and precision.
//!
//! When every conversion is a single character (`%d`, `%x`, `%f`, ...) both
//! strategies produce the same bytes. Neither ever fails: missing arguments
//! leave the rest of the template as literal text, surplus arguments are
//! ignored and a template without arguments is emitted unchanged.

use std::{fmt::Write as _, str::FromStr, sync::LazyLock};

use regex::{Captures, Regex};

use crate::log::{log_arg::LogArg, log_error::LogError};

/// How a template is expanded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatStrategy {
    /// Character scan with a two-character skip per placeholder.
    Scan,
    /// printf conversion grammar, rendered as `{}` placeholders.
    Native,
}

impl Default for FormatStrategy {
    /// `Native` when built with the `native-format` feature, `Scan` otherwise.
    fn default() -> Self {
        if cfg!(feature = "native-format") {
            FormatStrategy::Native
        } else {
            FormatStrategy::Scan
        }
    }
}

impl FromStr for FormatStrategy {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scan" | "manual" => Ok(FormatStrategy::Scan),
            "native" | "printf" => Ok(FormatStrategy::Native),
            other => Err(LogError::UnknownFormat(other.to_string())),
        }
    }
}

impl FormatStrategy {
    /// Expands `template` with `args`.
    #[must_use]
    pub fn format(self, template: &str, args: &[LogArg<'_>]) -> String {
        match self {
            FormatStrategy::Scan => scan(template, args),
            FormatStrategy::Native => native(template, args),
        }
    }
}

/// Manual scan: every `%` takes the next argument and swallows the character
/// that follows it.
pub fn scan(template: &str, args: &[LogArg<'_>]) -> String {
    if args.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len() + 8 * args.len());
    let mut rest = args.iter();
    let mut chars = template.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match rest.next() {
            Some(arg) => {
                let _ = write!(out, "{arg}");
                // A trailing '%' has no specifier to skip.
                let _ = chars.next();
            }
            None => {
                out.push('%');
                out.push_str(chars.as_str());
                break;
            }
        }
    }
    out
}

// flags, width, precision, length modifier, conversion
#[allow(clippy::expect_used)]
static CONVERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%([-+ #0]*)([0-9]+)?(?:\.([0-9]*))?(?:hh|h|ll|l|L|q|j|z|t)?([diouxXeEfFgGcsp%])")
        .expect("conversion pattern is valid")
});

/// Upper bound for a width or precision written in a template.
pub const MAX_FIELD: usize = 4096;

/// Expansion through the printf conversion grammar. Each conversion becomes a
/// `{}` placeholder: the argument's default text, padded or truncated when the
/// conversion carries flags, a width or a precision. The conversion letter
/// itself does not change the text. Anything that does not match the grammar
/// stays literal, as do conversions past the last argument.
pub fn native(template: &str, args: &[LogArg<'_>]) -> String {
    if args.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len() + 8 * args.len());
    let mut rest = args.iter();
    let mut last = 0;

    for caps in CONVERSION.captures_iter(template) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&template[last..whole.start()]);
        last = whole.end();

        let spec = Placeholder::from_captures(&caps);
        if spec.conversion == '%' {
            out.push('%');
            continue;
        }
        match rest.next() {
            Some(arg) => spec.render(arg, &mut out),
            None => out.push_str(whole.as_str()),
        }
    }
    out.push_str(&template[last..]);
    out
}

/// A printf conversion translated to `{:<flags><width>.<precision>}` terms.
/// The `' '` and `#` flags have no counterpart and are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Placeholder {
    left: bool,
    plus: bool,
    zero: bool,
    width: usize,
    precision: Option<usize>,
    conversion: char,
}

impl Placeholder {
    fn from_captures(caps: &Captures<'_>) -> Self {
        let flags = caps.get(1).map_or("", |m| m.as_str());
        let field = |m: regex::Match<'_>| {
            m.as_str()
                .parse()
                .map_or(MAX_FIELD, |n: usize| n.min(MAX_FIELD))
        };
        Self {
            left: flags.contains('-'),
            plus: flags.contains('+'),
            zero: flags.contains('0'),
            width: caps.get(2).map_or(0, field),
            // "%.f" means precision zero.
            precision: caps
                .get(3)
                .map(|m| if m.as_str().is_empty() { 0 } else { field(m) }),
            conversion: caps
                .get(4)
                .and_then(|m| m.as_str().chars().next())
                .unwrap_or('s'),
        }
    }

    fn is_plain(&self) -> bool {
        !self.plus && !self.zero && self.width == 0 && self.precision.is_none()
    }

    fn render(&self, arg: &LogArg<'_>, out: &mut String) {
        if self.is_plain() {
            let _ = write!(out, "{arg}");
            return;
        }
        match *arg {
            LogArg::Signed(v) => {
                self.pad(out, self.sign(v < 0), &v.unsigned_abs().to_string(), true);
            }
            LogArg::Unsigned(v) => self.pad(out, self.sign(false), &v.to_string(), true),
            LogArg::Float(v) => {
                let magnitude = v.abs();
                let body = match self.precision {
                    Some(p) => format!("{magnitude:.p$}"),
                    None => magnitude.to_string(),
                };
                let negative = v.is_sign_negative() && !v.is_nan();
                self.pad(out, self.sign(negative), &body, v.is_finite());
            }
            _ => {
                let text = arg.to_string();
                let body = match self.precision {
                    Some(p) => text.chars().take(p).collect::<String>(),
                    None => text,
                };
                self.pad(out, "", &body, false);
            }
        }
    }

    fn sign(&self, negative: bool) -> &'static str {
        match (negative, self.plus) {
            (true, _) => "-",
            (false, true) => "+",
            (false, false) => "",
        }
    }

    fn pad(&self, out: &mut String, prefix: &str, body: &str, zero_allowed: bool) {
        let len = prefix.chars().count() + body.chars().count();
        let fill = self.width.saturating_sub(len);
        if self.left {
            out.push_str(prefix);
            out.push_str(body);
            out.extend(std::iter::repeat_n(' ', fill));
        } else if self.zero && zero_allowed {
            out.push_str(prefix);
            out.extend(std::iter::repeat_n('0', fill));
            out.push_str(body);
        } else {
            out.extend(std::iter::repeat_n(' ', fill));
            out.push_str(prefix);
            out.push_str(body);
        }
    }
}
