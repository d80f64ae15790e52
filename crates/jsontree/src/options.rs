/// Nesting limit applied by [`ParserOptions::default`].
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 128;

/// Configuration options for the JSON parser.
///
/// # Examples
///
/// ```rust
/// use jsontree::{ErrorKind, Parser, ParserOptions};
///
/// let options = ParserOptions {
///     max_nesting_depth: Some(2),
///     ..Default::default()
/// };
/// let err = Parser::with_options("[[[]]]".chars(), options).parse().unwrap_err();
/// assert_eq!(err.kind, ErrorKind::NestingTooDeep(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum number of arrays and objects that may be open at once.
    ///
    /// The parser recurses once per level, so this bounds stack usage on
    /// hostile input. `None` removes the bound.
    ///
    /// # Default
    ///
    /// `Some(128)`
    pub max_nesting_depth: Option<usize>,

    /// Whether to accept raw control characters (U+0000 through U+001F)
    /// inside string literals.
    ///
    /// RFC 8259 requires them to be escaped, so by default an unescaped tab
    /// or newline inside a string is rejected.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_control_characters: bool,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_nesting_depth: Some(DEFAULT_MAX_NESTING_DEPTH),
            allow_control_characters: false,
        }
    }
}
