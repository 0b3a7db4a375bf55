//! Error types for pattern formatting.
//!
//! Every grammar violation is fatal for the call: the entry points return
//! the first violation encountered during the left-to-right scan and no
//! partial output escapes. These are template-authoring errors, not runtime
//! data errors: callers constructing patterns dynamically must test them
//! in advance, since there is no separate compile step.

use thiserror::Error;

/// Result of a formatting call.
pub type FormatResult<T> = Result<T, FormatError>;

/// A fatal formatting error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Structural grammar violation: unterminated `{`, lone `}`, unknown
    /// verb or alignment rune, or a non-`}` placeholder terminator.
    /// `position` is the rune index of the scan cursor.
    #[error("malformed pattern at rune {position}")]
    MalformedPattern {
        /// Rune index of the cursor when the violation was detected.
        position: usize,
    },

    /// The pattern mixes bare `{}` automatic numbering with explicit `{N}`
    /// manual indexing.
    #[error("cannot switch between automatic and manual field numbering")]
    IndexingModeConflict,

    /// A named placeholder's lookup returned nothing.
    #[error("named param `{name}` not found")]
    ParameterNotFound {
        /// The identifier that failed to resolve.
        name: String,
    },

    /// A numeric verb was applied to an incompatible value type.
    #[error("non-{expected} value used with {expected} format `{verb}`")]
    TypeMismatch {
        /// `"int"` or `"float"`.
        expected: &'static str,
        /// The verb rune that was applied.
        verb: char,
    },

    /// The `#` flag was combined with a verb that has no base prefix.
    #[error("only int values with hex/octal/binary format can have a leading prefix")]
    InvalidPrefixUsage,
}
