/// Nesting depth allowed by [`ParserOptions::default`].
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 128;

/// Configuration options for the JSON parser.
///
/// # Examples
///
/// ```rust
/// use exactjson::{Parser, ParserOptions};
///
/// let options = ParserOptions {
///     max_nesting_depth: 2,
///     ..Default::default()
/// };
/// let mut parser = Parser::new(b"[[[]]]", options);
/// assert!(parser.parse_embedded_array().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum number of objects and arrays that may be open at once.
    ///
    /// The parser recurses once per level, so this bounds its stack usage on
    /// hostile input. Exceeding it fails with
    /// [`SyntaxError::NestingTooDeep`](crate::SyntaxError::NestingTooDeep).
    /// `usize::MAX` effectively disables the check, which leaves stack use
    /// proportional to the input's nesting; only do that for trusted input
    /// or on a thread with a stack sized for it.
    ///
    /// # Default
    ///
    /// [`DEFAULT_MAX_NESTING_DEPTH`]
    pub max_nesting_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}
