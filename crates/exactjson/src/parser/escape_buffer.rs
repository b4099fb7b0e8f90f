//! Decoding of the four hex digits of a `\uXXXX` escape.
//!
//! The [`UnicodeEscapeBuffer`] type accumulates exactly four ASCII hexadecimal
//! digits (`0-9`, `A-F`, `a-f`) and yields the UTF-16 code unit they spell
//! once the fourth digit arrives. The unit is deliberately not converted to a
//! `char`: surrogate halves are legal here and are paired up by the string
//! parser.

use super::error::SyntaxError;

#[derive(Debug)]
pub(crate) struct UnicodeEscapeBuffer {
    acc: u16,
    len: u8,
}

impl UnicodeEscapeBuffer {
    pub(crate) fn new() -> Self {
        Self { acc: 0, len: 0 }
    }

    /// Convert a single ASCII hex digit into its 0..=15 value.
    #[inline]
    fn hex_val(c: char) -> Option<u16> {
        // `to_digit` only ever returns values below the radix.
        c.to_digit(16).and_then(|d| u16::try_from(d).ok())
    }

    /// Feeds one hex digit.
    ///
    /// Returns `Ok(None)` until four digits have been seen, then the decoded
    /// code unit, resetting for the next escape.
    pub(crate) fn feed(&mut self, c: char) -> Result<Option<u16>, SyntaxError> {
        let d = Self::hex_val(c).ok_or(SyntaxError::InvalidHexEncoding(c))?;

        self.acc = (self.acc << 4) | d;
        self.len += 1;

        if self.len < 4 {
            return Ok(None);
        }

        let unit = self.acc;
        self.acc = 0;
        self.len = 0;
        Ok(Some(unit))
    }
}
