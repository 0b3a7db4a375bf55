//! Cursor over a pattern's decoded runes with single-rune put-back.
//!
//! The tokenizer advances through the pattern rune-by-rune. Lookahead works
//! by consuming a rune, inspecting it, and putting it back for the next
//! state to re-consume. Put-back is positional, so it composes with the
//! specialized scanners ([`Tokenizer::next_unsigned_int`],
//! [`Tokenizer::next_identifier`]), which stop by putting back the first
//! rune they reject.
//!
//! # Contract
//!
//! `next_rune` must only be called while `has_next` is `true`, and callers
//! never put back more runes than they have consumed. Both are enforced by
//! index bounds.

/// Returns `true` if `c` can start an identifier (ASCII alpha or `_`).
#[inline]
#[must_use]
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns `true` if `c` can continue an identifier (ASCII alphanumeric or `_`).
#[inline]
#[must_use]
pub fn is_identifier_part(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Cursor over the decoded runes of a pattern string.
///
/// Construction decodes the pattern once; all subsequent positions are
/// rune indices, never byte offsets.
#[derive(Clone, Debug)]
pub struct Tokenizer {
    runes: Vec<char>,
    idx: usize,
}

impl Tokenizer {
    /// Create a tokenizer positioned at the first rune of `pattern`.
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        Self {
            runes: pattern.chars().collect(),
            idx: 0,
        }
    }

    /// Returns `true` while runes remain.
    #[inline]
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.idx < self.runes.len()
    }

    /// Returns the rune at the cursor and advances by one.
    ///
    /// # Panics
    ///
    /// Panics if the input is exhausted; callers check [`has_next`] first.
    ///
    /// [`has_next`]: Tokenizer::has_next
    #[inline]
    pub fn next_rune(&mut self) -> char {
        let r = self.runes[self.idx];
        self.idx += 1;
        r
    }

    /// Steps the cursor back by one rune.
    ///
    /// Each call undoes one [`next_rune`](Tokenizer::next_rune); callers
    /// never rewind past runes they have not consumed.
    #[inline]
    pub fn put_back(&mut self) {
        debug_assert!(self.idx > 0, "put_back before any next_rune");
        self.idx -= 1;
    }

    /// Current cursor position in runes, for diagnostics.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.idx
    }

    /// Consumes consecutive ASCII digits, accumulating a base-10 value.
    ///
    /// Stops at (and puts back) the first non-digit rune. Zero digits
    /// consumed yields 0. Accumulation saturates at `usize::MAX` rather
    /// than wrapping.
    pub fn next_unsigned_int(&mut self) -> usize {
        let mut value: usize = 0;
        while self.has_next() {
            let c = self.next_rune();
            let Some(digit) = c.to_digit(10) else {
                self.put_back();
                break;
            };
            value = value.saturating_mul(10).saturating_add(digit as usize);
        }
        value
    }

    /// Consumes consecutive identifier runes (ASCII alphanumeric or `_`).
    ///
    /// Stops at (and puts back) the first disqualifying rune. The leading
    /// rune is not validated here; whether the result may start with a
    /// digit is a grammar question for the caller.
    pub fn next_identifier(&mut self) -> String {
        let mut name = String::new();
        while self.has_next() {
            let c = self.next_rune();
            if !is_identifier_part(c) {
                self.put_back();
                break;
            }
            name.push(c);
        }
        name
    }
}

#[cfg(test)]
mod tests;
