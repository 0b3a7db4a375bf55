//! Placeholder rendering: numeric bases, float precision, prefixes, padding.
//!
//! Rendering happens in two layers. `render_body` turns the resolved value
//! into its digit/text form and reports the base prefix the verb would
//! carry; [`render`] then handles the `#` flag (prefix is written ahead of
//! the padded field and consumes width budget) and applies alignment over
//! rune counts.

use crate::error::{FormatError, FormatResult};
use crate::spec::{Align, FieldSpec, Verb};
use crate::value::Value;

/// Fractional digits for the float verb when the spec leaves them unset.
const DEFAULT_FLOAT_PRECISION: usize = 6;

/// Render `value` into `out` according to `spec`.
pub(crate) fn render(out: &mut String, value: &Value, spec: &FieldSpec) -> FormatResult<()> {
    let (body, prefix) = render_body(value, spec)?;

    let mut width = spec.width;
    if spec.alternate {
        let Some(prefix) = prefix else {
            return Err(FormatError::InvalidPrefixUsage);
        };
        // The prefix lands ahead of the padded field and shrinks the
        // remaining width budget.
        out.push_str(prefix);
        width = width.saturating_sub(prefix.chars().count());
    }

    pad(out, &body, spec.fill, spec.align, width);
    Ok(())
}

/// Render the value body and the verb's prefix candidate.
fn render_body(
    value: &Value,
    spec: &FieldSpec,
) -> FormatResult<(String, Option<&'static str>)> {
    let Some(verb) = spec.verb else {
        return Ok((value.to_string(), None));
    };

    match verb {
        Verb::Binary | Verb::Octal | Verb::Decimal | Verb::HexLower | Verb::HexUpper => {
            let Some((negative, magnitude)) = value.as_int() else {
                return Err(FormatError::TypeMismatch {
                    expected: "int",
                    verb: verb.rune(),
                });
            };
            Ok((render_int(negative, magnitude, verb), verb.prefix()))
        }
        Verb::Float => {
            let Some(x) = value.as_float() else {
                return Err(FormatError::TypeMismatch {
                    expected: "float",
                    verb: verb.rune(),
                });
            };
            let prec = spec.precision.unwrap_or(DEFAULT_FLOAT_PRECISION);
            Ok((format!("{x:.prec$}"), None))
        }
    }
}

/// Sign plus magnitude digits in the verb's base.
///
/// The sign is rendered manually ahead of the magnitude so that negative
/// values come out as `-a0`, not as two's-complement bit patterns.
fn render_int(negative: bool, magnitude: u128, verb: Verb) -> String {
    let digits = match verb {
        Verb::Decimal => format!("{magnitude}"),
        Verb::Binary => format!("{magnitude:b}"),
        Verb::Octal => format!("{magnitude:o}"),
        Verb::HexLower => format!("{magnitude:x}"),
        Verb::HexUpper => format!("{magnitude:X}"),
        Verb::Float => unreachable!("float verb handled by the caller"),
    };
    if negative {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Apply width and alignment, counting runes rather than bytes.
fn pad(out: &mut String, body: &str, fill: char, align: Option<Align>, width: usize) {
    let Some(align) = align else {
        out.push_str(body);
        return;
    };

    let len = body.chars().count();
    let padding = width.saturating_sub(len);

    match align {
        Align::Right => {
            push_fill(out, fill, padding);
            out.push_str(body);
        }
        Align::Left => {
            out.push_str(body);
            push_fill(out, fill, padding);
        }
        Align::Center => {
            let left = padding / 2;
            push_fill(out, fill, left);
            out.push_str(body);
            push_fill(out, fill, padding - left);
        }
    }
}

fn push_fill(out: &mut String, fill: char, count: usize) {
    for _ in 0..count {
        out.push(fill);
    }
}
