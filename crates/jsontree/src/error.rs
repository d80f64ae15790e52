use thiserror::Error;

/// A failed parse.
///
/// `position` is the 1-based number of characters the cursor had consumed
/// when the problem was detected. Reading end of input counts as one
/// character, so an error at end of input on `[1,` reports position 4.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at character {position}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Where it went wrong.
    pub position: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}

/// The ways a JSON text can be rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input ended where the grammar required another character.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// A character that cannot start or continue the current production.
    #[error("unexpected character '{}'", .0.escape_debug())]
    UnexpectedCharacter(char),
    /// A malformed escape sequence inside a string.
    #[error("invalid escape: {0}")]
    InvalidEscape(#[from] EscapeError),
    /// Non-whitespace input after a complete top-level value.
    #[error("trailing content starting with '{}'", .0.escape_debug())]
    TrailingContent(char),
    /// Arrays and objects nested deeper than the configured limit.
    #[error("nesting deeper than {0} levels")]
    NestingTooDeep(usize),
    /// An integer that does not fit in `i64`, or a real that is not finite.
    #[error("number out of range")]
    NumberOutOfRange,
}

/// Why an escape sequence was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeError {
    /// The character after `\` is not a JSON escape.
    #[error("unknown escape '\\{}'", .0.escape_debug())]
    UnknownEscape(char),
    /// A `\u` escape contained something other than a hex digit.
    #[error("invalid hex digit '{}' in unicode escape", .0.escape_debug())]
    InvalidHexDigit(char),
    /// Input ended inside a `\u` escape.
    #[error("truncated unicode escape")]
    Truncated,
    /// A surrogate code unit without its partner.
    #[error("unpaired surrogate \\u{0:04X}")]
    UnpairedSurrogate(u16),
}

/// A failure from one of the file or reader entry points.
#[cfg(feature = "std")]
#[derive(Error, Debug)]
pub enum ReadError {
    /// The input could not be read. The grammar never ran.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    /// The input was read but is not valid JSON.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
