//! Placeholder descriptor types.
//!
//! [`FieldSpec`] is the per-placeholder scratch state the engine fills
//! while scanning a format spec and consumes when the placeholder closes.
//! It is rebuilt (reset) for every placeholder; nothing here outlives one
//! `{...}` span.

/// Alignment direction for field padding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Align {
    /// `<`: pad on the right.
    Left,
    /// `>`: pad on the left.
    Right,
    /// `^`: pad both sides, remainder on the right.
    Center,
}

/// Numeric rendering verb.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Verb {
    /// `b`: binary integer.
    Binary,
    /// `o`: octal integer.
    Octal,
    /// `d`: decimal integer.
    Decimal,
    /// `x`: lowercase hexadecimal integer.
    HexLower,
    /// `X`: uppercase hexadecimal integer.
    HexUpper,
    /// `f`: fixed-point float.
    Float,
}

impl Verb {
    /// Map a verb rune to its verb, if it is one.
    pub(crate) fn from_rune(c: char) -> Option<Self> {
        Some(match c {
            'b' => Self::Binary,
            'o' => Self::Octal,
            'd' => Self::Decimal,
            'x' => Self::HexLower,
            'X' => Self::HexUpper,
            'f' => Self::Float,
            _ => return None,
        })
    }

    /// The verb's rune, for error messages.
    pub(crate) fn rune(self) -> char {
        match self {
            Self::Binary => 'b',
            Self::Octal => 'o',
            Self::Decimal => 'd',
            Self::HexLower => 'x',
            Self::HexUpper => 'X',
            Self::Float => 'f',
        }
    }

    /// Base-indicating prefix requested by `#`, if this verb has one.
    ///
    /// Upper-hex keeps the lowercase `0x` prefix.
    pub(crate) fn prefix(self) -> Option<&'static str> {
        match self {
            Self::Binary => Some("0b"),
            Self::Octal => Some("0o"),
            Self::HexLower | Self::HexUpper => Some("0x"),
            Self::Decimal | Self::Float => None,
        }
    }
}

/// Per-placeholder formatting state, rebuilt for every placeholder.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FieldSpec {
    /// Padding rune (default space).
    pub fill: char,
    /// Alignment; `None` disables padding regardless of width.
    pub align: Option<Align>,
    /// Minimum field width in runes; 0 means no padding.
    pub width: usize,
    /// Fractional digits for the float verb.
    pub precision: Option<usize>,
    /// `#`: request a base prefix.
    pub alternate: bool,
    /// Numeric verb, if any.
    pub verb: Option<Verb>,
}

impl FieldSpec {
    /// The defaults every placeholder starts from.
    pub(crate) const DEFAULT: Self = Self {
        fill: ' ',
        align: None,
        width: 0,
        precision: None,
        alternate: false,
        verb: None,
    };

    /// Reset to defaults after a placeholder is emitted.
    pub(crate) fn reset(&mut self) {
        *self = Self::DEFAULT;
    }
}
