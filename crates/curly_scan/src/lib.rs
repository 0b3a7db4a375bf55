//! Curly Scan - rune-level tokenizer for curly patterns.
//!
//! This crate provides the low-level scanning primitives for the `curly`
//! format engine:
//! - [`Tokenizer`]: a cursor over the pattern's decoded runes with
//!   single-rune put-back
//! - Identifier classification helpers ([`is_identifier_start`],
//!   [`is_identifier_part`])
//!
//! The tokenizer addresses *runes* (Unicode code points), not bytes: every
//! grammar decision in the format language (lookahead, put-back, width
//! counting, diagnostic positions) is defined in code-point units. The
//! pattern is decoded once at construction.
//!
//! The tokenizer itself has no error states. Malformed numeric or identifier
//! input yields an empty/zero result; validity is enforced by the caller via
//! the surrounding grammar.

mod tokenizer;

pub use tokenizer::{is_identifier_part, is_identifier_start, Tokenizer};
