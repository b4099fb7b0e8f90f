//! Character-at-a-time access to UTF-8 input.
//!
//! The parser needs exactly one character of lookahead, so the reader offers
//! [`Reader::peek`] to decode the next character without consuming it and
//! [`Reader::bump`] to step over a character that was peeked. Malformed UTF-8
//! is reported on every read as [`SyntaxError::InvalidEncoding`], at the
//! position of the first bad byte.

use bstr::decode_utf8;

use super::error::SyntaxError;

/// 1-based line and column (in characters) of the next unread character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Position {
    pub(crate) line: usize,
    pub(crate) column: usize,
}

#[derive(Debug)]
pub(crate) struct Reader<'src> {
    src: &'src [u8],
    offset: usize,
    position: Position,
}

impl<'src> Reader<'src> {
    pub(crate) fn new(src: &'src [u8]) -> Self {
        Self {
            src,
            offset: 0,
            position: Position { line: 1, column: 1 },
        }
    }

    #[inline]
    pub(crate) fn position(&self) -> Position {
        self.position
    }

    /// Decodes the next character without consuming it. `Ok(None)` at the end
    /// of input.
    #[inline]
    pub(crate) fn peek(&self) -> Result<Option<char>, SyntaxError> {
        let rest = self.src.get(self.offset..).unwrap_or_default();
        if rest.is_empty() {
            return Ok(None);
        }
        match decode_utf8(rest) {
            (Some(c), _) => Ok(Some(c)),
            (None, _) => Err(SyntaxError::InvalidEncoding),
        }
    }

    /// Consumes `c`, which must be the character last returned by `peek`.
    #[inline]
    pub(crate) fn bump(&mut self, c: char) {
        self.offset += c.len_utf8();
        if c == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
    }

    /// Decodes and consumes the next character.
    #[inline]
    pub(crate) fn next_char(&mut self) -> Result<Option<char>, SyntaxError> {
        let next = self.peek()?;
        if let Some(c) = next {
            self.bump(c);
        }
        Ok(next)
    }
}
