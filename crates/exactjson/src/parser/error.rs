use core::fmt;

use thiserror::Error;

use super::reader::Position;

/// A failed parse: what went wrong, where it went wrong, and which enclosing
/// productions were being parsed at the time.
///
/// The `Display` form reads outermost context first, for example
/// `failed to parse value of member "a": failed to parse element 0:
/// unexpected identifier "nul" at 1:7`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub(crate) source: SyntaxError,
    /// Innermost first.
    pub(crate) context: Vec<ParseContext>,
    /// 1-based line of the failure.
    pub line: usize,
    /// 1-based column of the failure, counted in characters.
    pub column: usize,
}

impl ParseError {
    pub(crate) fn new(source: SyntaxError, at: Position) -> Self {
        Self {
            source,
            context: Vec::new(),
            line: at.line,
            column: at.column,
        }
    }

    /// Records that the failure happened while parsing `context`.
    pub(crate) fn within(mut self, context: ParseContext) -> Self {
        self.context.push(context);
        self
    }

    /// The specific syntax error.
    #[must_use]
    pub fn kind(&self) -> &SyntaxError {
        &self.source
    }

    /// The enclosing productions, outermost first.
    pub fn context(&self) -> impl DoubleEndedIterator<Item = &ParseContext> {
        self.context.iter().rev()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for context in self.context() {
            write!(f, "{context}: ")?;
        }
        write!(f, "{} at {}:{}", self.source, self.line, self.column)
    }
}

impl core::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// A production enclosing a parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseContext {
    /// An object member name.
    MemberName,
    /// The value of the named object member.
    Member(String),
    /// The array element at this index.
    Element(usize),
}

impl fmt::Display for ParseContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MemberName => f.write_str("failed to parse member name"),
            Self::Member(name) => write!(f, "failed to parse value of member {name:?}"),
            Self::Element(index) => write!(f, "failed to parse element {index}"),
        }
    }
}

/// The ways JSON text can be malformed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A character that cannot appear at this point of the grammar.
    #[error("unexpected character {0:?}")]
    UnexpectedCharacter(char),
    /// Input ended in the middle of a value.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// Non-whitespace after the top-level value.
    #[error("unexpected trailing character {0:?}")]
    UnexpectedTrailingCharacter(char),
    /// The input is not valid UTF-8.
    #[error("invalid UTF-8 encoding")]
    InvalidEncoding,
    /// A raw control character inside a string.
    #[error("invalid character U+{:04X} in string", code_point(.0))]
    InvalidCharacter(char),
    /// A backslash followed by a letter that is not a JSON escape.
    #[error("unexpected escape character {0:?}")]
    UnexpectedEscapeCharacter(char),
    /// A `\u` escape with a non-hex digit.
    #[error("invalid hex encoding: {0:?} is not a hex digit")]
    InvalidHexEncoding(char),
    /// A high surrogate escape not followed by another `\u` escape.
    #[error("expected hex encoding of a low surrogate")]
    ExpectedHexEncoding,
    /// An unpaired low surrogate, or a high surrogate followed by a `\u`
    /// escape that is not a low surrogate.
    #[error("invalid character encoding: unpaired UTF-16 surrogate")]
    InvalidCharacterEncoding,
    /// A bare word other than `true`, `false` or `null`.
    #[error("unexpected identifier {0:?}")]
    UnexpectedIdentifier(String),
    /// The same member name appears twice in one object.
    #[error("duplicate member name {0:?}")]
    DuplicateMemberName(String),
    /// More nested objects and arrays than the configured limit.
    #[error("nesting deeper than {0} levels")]
    NestingTooDeep(usize),
}

fn code_point(c: &char) -> u32 {
    u32::from(*c)
}
