//! Recursive-descent JSON parser.
//!
//! Overview
//! - The parser reads UTF-8 input one character at a time with a single
//!   character of lookahead. The lookahead alone decides which production to
//!   enter: `{` object, `[` array, `"` string, `-` or a digit number, anything
//!   else an identifier (`true`, `false`, `null`).
//! - Parsing is all-or-nothing. The first error aborts the parse and is
//!   returned with the line and column where it was detected plus the chain of
//!   enclosing members/elements.
//! - Numbers are validated against the JSON grammar character by character
//!   and kept as text; nothing is converted to a float.
//! - Member names are compared after escape resolution, so `{"a":1,"a":2}`
//!   is a duplicate. Unlike [`Object::set`], which overwrites, the parser
//!   rejects duplicates.
//!
//! Termination
//! - Every loop either consumes at least one character or returns, and
//!   recursion is bounded by [`ParserOptions::max_nesting_depth`].

mod error;
mod escape_buffer;
mod options;
mod reader;

pub use error::{ParseContext, ParseError, SyntaxError};
use escape_buffer::UnicodeEscapeBuffer;
pub use options::{DEFAULT_MAX_NESTING_DEPTH, ParserOptions};
use reader::Reader;

use crate::{Array, Number, Object, Value};

/// Parses a JSON object, ignoring leading and trailing whitespace.
///
/// # Errors
///
/// Fails if `text` is not a single JSON object, or if any object in it has
/// duplicate member names.
///
/// # Examples
///
/// ```
/// let object = exactjson::parse_object(r#" {"x": 1.50, "y": [true, null]} "#).unwrap();
/// assert_eq!(object.get_number("x").unwrap().as_str(), "1.50");
/// assert_eq!(object.to_string(), r#"{"x":1.50,"y":[true,null]}"#);
///
/// assert!(exactjson::parse_object(r#"{"a":1,"a":2}"#).is_err());
/// ```
pub fn parse_object(text: &str) -> Result<Object, ParseError> {
    parse_object_bytes(text.as_bytes())
}

/// Parses a JSON array, ignoring leading and trailing whitespace.
///
/// # Errors
///
/// Fails if `text` is not a single JSON array, or if any object in it has
/// duplicate member names.
pub fn parse_array(text: &str) -> Result<Array, ParseError> {
    parse_array_bytes(text.as_bytes())
}

/// Like [`parse_object`], for input that has not been checked to be UTF-8.
///
/// # Errors
///
/// As [`parse_object`], plus [`SyntaxError::InvalidEncoding`] on malformed
/// UTF-8.
pub fn parse_object_bytes(bytes: &[u8]) -> Result<Object, ParseError> {
    let mut parser = Parser::new(bytes, ParserOptions::default());
    let object = parser.parse_embedded_object()?;
    parser.finish()?;
    Ok(object)
}

/// Like [`parse_array`], for input that has not been checked to be UTF-8.
///
/// # Errors
///
/// As [`parse_array`], plus [`SyntaxError::InvalidEncoding`] on malformed
/// UTF-8.
pub fn parse_array_bytes(bytes: &[u8]) -> Result<Array, ParseError> {
    let mut parser = Parser::new(bytes, ParserOptions::default());
    let array = parser.parse_embedded_array()?;
    parser.finish()?;
    Ok(array)
}

/// A JSON parser over a byte slice.
///
/// The `parse_embedded_*` methods each skip leading whitespace and read one
/// value, leaving the parser just past it, so values embedded in a larger
/// input can be read in sequence. [`Parser::finish`] checks that only
/// whitespace remains. A failed read does not poison the parser: the nesting
/// count starts from zero on every `parse_embedded_*` call.
///
/// # Examples
///
/// ```
/// use exactjson::{Parser, ParserOptions};
///
/// let mut parser = Parser::new(b"[1] {\"a\":2}", ParserOptions::default());
/// let first = parser.parse_embedded_array().unwrap();
/// let second = parser.parse_embedded_object().unwrap();
/// parser.finish().unwrap();
///
/// assert_eq!(first.get_int::<u8>(0), Ok(1));
/// assert_eq!(second.get_int::<u8>("a"), Ok(2));
/// ```
#[derive(Debug)]
pub struct Parser<'src> {
    reader: Reader<'src>,
    options: ParserOptions,
    depth: usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser positioned at the start of `src`.
    #[must_use]
    pub fn new(src: &'src [u8], options: ParserOptions) -> Self {
        Self {
            reader: Reader::new(src),
            options,
            depth: 0,
        }
    }

    /// Skips whitespace and parses one object.
    ///
    /// # Errors
    ///
    /// Any [`SyntaxError`]; [`SyntaxError::UnexpectedCharacter`] if the next
    /// value is not an object.
    pub fn parse_embedded_object(&mut self) -> Result<Object, ParseError> {
        self.depth = 0;
        self.skip_whitespace()?;
        self.parse_object()
    }

    /// Skips whitespace and parses one array.
    ///
    /// # Errors
    ///
    /// Any [`SyntaxError`]; [`SyntaxError::UnexpectedCharacter`] if the next
    /// value is not an array.
    pub fn parse_embedded_array(&mut self) -> Result<Array, ParseError> {
        self.depth = 0;
        self.skip_whitespace()?;
        self.parse_array()
    }

    /// Skips whitespace and parses one value of any kind.
    ///
    /// # Errors
    ///
    /// Any [`SyntaxError`].
    pub fn parse_embedded_value(&mut self) -> Result<Value, ParseError> {
        self.depth = 0;
        self.skip_whitespace()?;
        self.parse_value()
    }

    /// Consumes the parser, checking that nothing but whitespace remains.
    ///
    /// # Errors
    ///
    /// [`SyntaxError::UnexpectedTrailingCharacter`] on anything else, or
    /// [`SyntaxError::InvalidEncoding`].
    pub fn finish(mut self) -> Result<(), ParseError> {
        self.skip_whitespace()?;
        self.expect_end_of_input()
    }

    pub(crate) fn expect_end_of_input(&mut self) -> Result<(), ParseError> {
        match self.peek()? {
            Some(c) => Err(self.fail(SyntaxError::UnexpectedTrailingCharacter(c))),
            None => Ok(()),
        }
    }

    // --------------------------------------------------------------------------------------------
    // Lookahead
    // --------------------------------------------------------------------------------------------

    #[cold]
    #[inline(never)]
    fn fail(&self, source: SyntaxError) -> ParseError {
        ParseError::new(source, self.reader.position())
    }

    /// The error for finding `found` where something else was required.
    #[cold]
    fn unexpected(&self, found: Option<char>) -> ParseError {
        match found {
            Some(c) => self.fail(SyntaxError::UnexpectedCharacter(c)),
            None => self.fail(SyntaxError::UnexpectedEndOfInput),
        }
    }

    #[inline]
    fn peek(&self) -> Result<Option<char>, ParseError> {
        self.reader.peek().map_err(|e| self.fail(e))
    }

    #[inline]
    fn next_char(&mut self) -> Result<Option<char>, ParseError> {
        self.reader.next_char().map_err(|e| self.fail(e))
    }

    fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        match self.peek()? {
            Some(c) if c == expected => {
                self.reader.bump(c);
                Ok(())
            }
            found => Err(self.unexpected(found)),
        }
    }

    fn skip_whitespace(&mut self) -> Result<(), ParseError> {
        while let Some(c @ (' ' | '\t' | '\n' | '\r')) = self.peek()? {
            self.reader.bump(c);
        }
        Ok(())
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.options.max_nesting_depth {
            return Err(self.fail(SyntaxError::NestingTooDeep(
                self.options.max_nesting_depth,
            )));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    // --------------------------------------------------------------------------------------------
    // Productions
    // --------------------------------------------------------------------------------------------

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.peek()? {
            Some('{') => self.parse_object().map(Value::Object),
            Some('[') => self.parse_array().map(Value::Array),
            Some('"') => self.parse_string().map(Value::String),
            Some('-' | '0'..='9') => self.parse_number().map(Value::Number),
            Some(_) => self.parse_identifier(),
            None => Err(self.fail(SyntaxError::UnexpectedEndOfInput)),
        }
    }

    fn parse_object(&mut self) -> Result<Object, ParseError> {
        self.enter()?;
        self.expect('{')?;
        let mut object = Object::new();

        self.skip_whitespace()?;
        if self.peek()? == Some('}') {
            self.reader.bump('}');
            self.leave();
            return Ok(object);
        }

        loop {
            self.skip_whitespace()?;
            let name_at = self.reader.position();
            let name = self
                .parse_string()
                .map_err(|e| e.within(ParseContext::MemberName))?;
            if object.has(&name) {
                return Err(ParseError::new(
                    SyntaxError::DuplicateMemberName(name),
                    name_at,
                ));
            }

            self.skip_whitespace()?;
            self.expect(':')?;
            self.skip_whitespace()?;
            let value = self
                .parse_value()
                .map_err(|e| e.within(ParseContext::Member(name.clone())))?;
            object.set(name, value);

            self.skip_whitespace()?;
            match self.peek()? {
                Some(',') => self.reader.bump(','),
                Some('}') => {
                    self.reader.bump('}');
                    break;
                }
                found => return Err(self.unexpected(found)),
            }
        }

        self.leave();
        Ok(object)
    }

    fn parse_array(&mut self) -> Result<Array, ParseError> {
        self.enter()?;
        self.expect('[')?;
        let mut array = Array::new();

        self.skip_whitespace()?;
        if self.peek()? == Some(']') {
            self.reader.bump(']');
            self.leave();
            return Ok(array);
        }

        loop {
            self.skip_whitespace()?;
            let index = array.len();
            let value = self
                .parse_value()
                .map_err(|e| e.within(ParseContext::Element(index)))?;
            array.add(value);

            self.skip_whitespace()?;
            match self.peek()? {
                Some(',') => self.reader.bump(','),
                Some(']') => {
                    self.reader.bump(']');
                    break;
                }
                found => return Err(self.unexpected(found)),
            }
        }

        self.leave();
        Ok(array)
    }

    fn parse_string(&mut self) -> Result<String, ParseError> {
        self.expect('"')?;
        let mut out = String::new();
        // High surrogate from a `\u` escape, waiting for its low half.
        let mut pending: Option<u16> = None;

        loop {
            let at = self.reader.position();
            let Some(c) = self.next_char()? else {
                return Err(self.fail(SyntaxError::UnexpectedEndOfInput));
            };

            if c == '\\' {
                let escape_at = self.reader.position();
                let Some(escape) = self.next_char()? else {
                    return Err(self.fail(SyntaxError::UnexpectedEndOfInput));
                };
                if escape == 'u' {
                    let unit = self.parse_hex_escape()?;
                    let decoded = match (pending.take(), unit) {
                        (None, 0xD800..=0xDBFF) => {
                            pending = Some(unit);
                            continue;
                        }
                        (None, 0xDC00..=0xDFFF) | (Some(_), 0..=0xDBFF | 0xE000..) => None,
                        (None, _) => char::from_u32(u32::from(unit)),
                        (Some(high), low) => combine_surrogates(high, low),
                    };
                    match decoded {
                        Some(ch) => out.push(ch),
                        None => {
                            return Err(ParseError::new(SyntaxError::InvalidCharacterEncoding, at));
                        }
                    }
                    continue;
                }
                if pending.is_some() {
                    return Err(ParseError::new(SyntaxError::ExpectedHexEncoding, at));
                }
                out.push(match escape {
                    '"' => '"',
                    '\\' => '\\',
                    '/' => '/',
                    'b' => '\u{08}',
                    'f' => '\u{0C}',
                    'n' => '\n',
                    'r' => '\r',
                    't' => '\t',
                    other => {
                        return Err(ParseError::new(
                            SyntaxError::UnexpectedEscapeCharacter(other),
                            escape_at,
                        ));
                    }
                });
                continue;
            }

            if pending.is_some() {
                return Err(ParseError::new(SyntaxError::ExpectedHexEncoding, at));
            }
            if c == '"' {
                return Ok(out);
            }
            if c < '\u{20}' {
                return Err(ParseError::new(SyntaxError::InvalidCharacter(c), at));
            }
            out.push(c);
        }
    }

    /// Reads the four hex digits following `\u`.
    fn parse_hex_escape(&mut self) -> Result<u16, ParseError> {
        let mut buffer = UnicodeEscapeBuffer::new();
        loop {
            let at = self.reader.position();
            let Some(c) = self.next_char()? else {
                return Err(self.fail(SyntaxError::UnexpectedEndOfInput));
            };
            if let Some(unit) = buffer.feed(c).map_err(|e| ParseError::new(e, at))? {
                return Ok(unit);
            }
        }
    }

    pub(crate) fn parse_number(&mut self) -> Result<Number, ParseError> {
        let mut text = String::new();

        if self.peek()? == Some('-') {
            self.reader.bump('-');
            text.push('-');
        }

        match self.peek()? {
            Some('0') => {
                self.reader.bump('0');
                text.push('0');
            }
            Some('1'..='9') => self.take_digits(&mut text)?,
            found => return Err(self.unexpected(found)),
        }

        if self.peek()? == Some('.') {
            self.reader.bump('.');
            text.push('.');
            self.take_required_digits(&mut text)?;
        }

        if let Some(e @ ('e' | 'E')) = self.peek()? {
            self.reader.bump(e);
            text.push(e);
            if let Some(sign @ ('+' | '-')) = self.peek()? {
                self.reader.bump(sign);
                text.push(sign);
            }
            self.take_required_digits(&mut text)?;
        }

        Ok(Number::from_lexeme(text))
    }

    fn take_digits(&mut self, text: &mut String) -> Result<(), ParseError> {
        while let Some(c @ '0'..='9') = self.peek()? {
            self.reader.bump(c);
            text.push(c);
        }
        Ok(())
    }

    fn take_required_digits(&mut self, text: &mut String) -> Result<(), ParseError> {
        match self.peek()? {
            Some('0'..='9') => self.take_digits(text),
            found => Err(self.unexpected(found)),
        }
    }

    fn parse_identifier(&mut self) -> Result<Value, ParseError> {
        let start = self.reader.position();
        let mut ident = String::new();
        while let Some(c) = self.peek()? {
            if !c.is_ascii_alphabetic() {
                break;
            }
            self.reader.bump(c);
            ident.push(c);
        }

        match ident.as_str() {
            "" => Err(self.unexpected(self.peek()?)),
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            "null" => Ok(Value::Null),
            _ => Err(ParseError::new(
                SyntaxError::UnexpectedIdentifier(ident),
                start,
            )),
        }
    }
}

fn combine_surrogates(high: u16, low: u16) -> Option<char> {
    let code = 0x1_0000 + ((u32::from(high) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
    char::from_u32(code)
}
