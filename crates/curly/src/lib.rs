//! Curly - brace-placeholder string templating.
//!
//! A mini formatting language embedded in ordinary strings: placeholders
//! delimited by `{` `}` bind positionally, by automatic index, or by name,
//! with an optional per-placeholder specifier controlling padding and
//! alignment, numeric base, fractional digits, and base prefixes.
//!
//! # Usage
//!
//! ```
//! use curly::{args, format};
//!
//! // automatic field numbering
//! assert_eq!(format("{},{}", &args![1, 2]).unwrap(), "1,2");
//! // manual field specification
//! assert_eq!(format("{0},{1}", &args![1, 2]).unwrap(), "1,2");
//! // escape: "{{" for '{', "}}" for '}'
//! assert_eq!(format("{{", &[]).unwrap(), "{");
//! // padding: < left, > right, ^ center; a fill rune may precede the sign
//! assert_eq!(format("{:<2}", &args![1]).unwrap(), "1 ");
//! assert_eq!(format("{:^3}", &args![1]).unwrap(), " 1 ");
//! assert_eq!(format("{:0>3}", &args![1]).unwrap(), "001");
//! // numeric verbs: b binary, o octal, d decimal, x/X hex, f float
//! assert_eq!(format("{:X}", &args![160]).unwrap(), "A0");
//! assert_eq!(format("{:.2f}", &args![1.0]).unwrap(), "1.00");
//! // '#' adds a 0b/0o/0x prefix
//! assert_eq!(format("{:#x}", &args![160]).unwrap(), "0xa0");
//! ```
//!
//! Named placeholders resolve through a [`ParamSource`]; any map of
//! [`Value`]s works, and [`params!`] builds one:
//!
//! ```
//! use curly::{format_named, params};
//!
//! let out = format_named(
//!     "{name}: {score}",
//!     &params! { "name" => "ada", "score" => 42 },
//! )
//! .unwrap();
//! assert_eq!(out, "ada: 42");
//! ```
//!
//! Structs become named sources with `#[derive(Params)]`. A field holding
//! its type's zero value (empty string, `false`, `0`, `0.0`) reads as
//! not-present: format a zero field and the call fails with
//! [`FormatError::ParameterNotFound`]:
//!
//! ```
//! use curly::{format_named, Params};
//!
//! #[derive(Params)]
//! struct Job {
//!     name: String,
//!     retries: i32,
//! }
//!
//! let job = Job {
//!     name: "sync".into(),
//!     retries: 3,
//! };
//! assert_eq!(format_named("{name} x{retries}", &job).unwrap(), "sync x3");
//! ```
//!
//! # Errors and panics
//!
//! Grammar violations (unterminated `{`, lone `}`, mixed `{}`/`{N}`
//! numbering, unknown verbs, type/verb mismatches, `#` on an unprefixable
//! verb, missing named parameters) fail the whole call with a
//! [`FormatError`]; no partial output is returned. A positional index past
//! the end of the argument slice is a bug at the call site and panics like
//! any slice indexing error.
//!
//! # Concurrency
//!
//! Each call is self-contained and holds no shared state; calls are safe
//! from multiple threads as long as the [`ParamSource`] itself is.

mod engine;
mod error;
mod params;
mod render;
mod spec;
mod value;

pub use error::{FormatError, FormatResult};
pub use params::{NamedParams, ParamSource};
pub use value::Value;

#[cfg(feature = "derive")]
pub use curly_macros::Params;

use engine::Binding;

/// Format `pattern` with positional or automatic field numbering.
///
/// Bare `{}` placeholders number fields automatically left to right;
/// `{N}` selects an argument explicitly (and may repeat). The two styles
/// cannot be mixed within one pattern. Unused trailing arguments are fine.
///
/// # Errors
///
/// Returns the first grammar violation of the left-to-right scan.
///
/// # Panics
///
/// Panics if a placeholder's index is out of range of `args`.
pub fn format(pattern: &str, args: &[Value]) -> FormatResult<String> {
    let mut out = String::with_capacity(pattern.len());
    format_into(&mut out, pattern, args)?;
    Ok(out)
}

/// Like [`format`], but appends to a caller-owned buffer.
///
/// # Errors
///
/// Returns the first grammar violation of the left-to-right scan. Output
/// already appended for earlier placeholders is left in `out`.
///
/// # Panics
///
/// Panics if a placeholder's index is out of range of `args`.
pub fn format_into(out: &mut String, pattern: &str, args: &[Value]) -> FormatResult<()> {
    engine::run(out, pattern, Binding::Indexed(args))
}

/// Format `pattern` with named placeholders resolved through `params`.
///
/// Placeholder names begin with an ASCII letter or `_` and continue with
/// ASCII letters, digits, or `_`.
///
/// # Errors
///
/// Returns the first grammar violation of the left-to-right scan, or
/// [`FormatError::ParameterNotFound`] when a lookup fails.
pub fn format_named<P: ParamSource>(pattern: &str, params: &P) -> FormatResult<String> {
    let mut out = String::with_capacity(pattern.len());
    format_named_into(&mut out, pattern, params)?;
    Ok(out)
}

/// Like [`format_named`], but appends to a caller-owned buffer.
///
/// # Errors
///
/// Returns the first grammar violation of the left-to-right scan, or
/// [`FormatError::ParameterNotFound`] when a lookup fails. Output already
/// appended for earlier placeholders is left in `out`.
pub fn format_named_into<P: ParamSource>(
    out: &mut String,
    pattern: &str,
    params: &P,
) -> FormatResult<()> {
    engine::run(out, pattern, Binding::Named(params))
}

/// Build a `[Value; N]` array from heterogeneous renderable values.
///
/// ```
/// use curly::{args, format};
///
/// assert_eq!(format("{} {} {}", &args![1, "two", 3.0]).unwrap(), "1 two 3");
/// ```
#[macro_export]
macro_rules! args {
    ($($value:expr),* $(,)?) => {
        [$($crate::Value::from($value)),*]
    };
}

/// Build a [`NamedParams`] map from `"name" => value` pairs.
///
/// ```
/// use curly::{format_named, params};
///
/// let p = params! { "a" => 1, "b" => "x" };
/// assert_eq!(format_named("{a},{b}", &p).unwrap(), "1,x");
/// ```
#[macro_export]
macro_rules! params {
    ($($name:expr => $value:expr),* $(,)?) => {{
        let mut map = $crate::NamedParams::default();
        $(map.insert(::std::string::String::from($name), $crate::Value::from($value));)*
        map
    }};
}
