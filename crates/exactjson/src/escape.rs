//! String escaping for JSON output.
//!
//! Every string that reaches the output (object member names and string
//! values alike) goes through [`write_escaped_string`]. For each character the
//! writer asks an [`EscapePolicy`] two questions, in order:
//!
//! 1. May a character that JSON allows unescaped be written literally?
//! 2. If the character has a two-character shorthand (`\n`, `\"`, ...), should
//!    the shorthand be used?
//!
//! When both answers are "no", the character is written as a `\uxxxx` escape
//! (two of them, as a UTF-16 surrogate pair, outside the Basic Multilingual
//! Plane). Characters JSON forbids unescaped (`"`, `\` and everything below
//! U+0020) never reach the first question.

use core::fmt::{self, Write};

/// Decides how characters are written inside JSON string literals.
///
/// # Examples
///
/// ```
/// use exactjson::{AsciiOnly, Minimal, encode_string};
///
/// assert_eq!(encode_string("é\n", &Minimal), "\"é\\n\"");
/// assert_eq!(encode_string("é\n", &AsciiOnly), "\"\\u00e9\\n\"");
/// ```
pub trait EscapePolicy {
    /// Returns `true` to write `c` literally.
    ///
    /// Only consulted for characters JSON permits unescaped.
    fn use_character(&self, c: char) -> bool;

    /// Returns `true` to write `c` with its two-character escape sequence.
    ///
    /// Only consulted for characters that have one: `"`, `\`, `/`, backspace,
    /// form feed, line feed, carriage return and tab.
    fn use_shorthand_escape_sequence(&self, c: char) -> bool;
}

impl<P: EscapePolicy + ?Sized> EscapePolicy for &P {
    fn use_character(&self, c: char) -> bool {
        (**self).use_character(c)
    }

    fn use_shorthand_escape_sequence(&self, c: char) -> bool {
        (**self).use_shorthand_escape_sequence(c)
    }
}

/// Compact output: literal characters wherever JSON allows them, shorthand
/// escapes wherever they exist.
///
/// This is the policy used by `to_json()` and `Display`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Minimal;

impl EscapePolicy for Minimal {
    fn use_character(&self, _c: char) -> bool {
        true
    }

    fn use_shorthand_escape_sequence(&self, _c: char) -> bool {
        true
    }
}

/// 7-bit clean output: printable ASCII is written literally, everything else
/// is escaped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsciiOnly;

impl EscapePolicy for AsciiOnly {
    fn use_character(&self, c: char) -> bool {
        c.is_ascii() && !c.is_ascii_control()
    }

    fn use_shorthand_escape_sequence(&self, _c: char) -> bool {
        true
    }
}

/// Every character is written as a `\uxxxx` escape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnicodeEscapes;

impl EscapePolicy for UnicodeEscapes {
    fn use_character(&self, _c: char) -> bool {
        false
    }

    fn use_shorthand_escape_sequence(&self, _c: char) -> bool {
        false
    }
}

/// A policy assembled from two plain predicates.
///
/// # Examples
///
/// ```
/// use exactjson::{EscapeFn, encode_string};
///
/// // Keep everything literal, but never use shorthand escapes.
/// let policy = EscapeFn {
///     use_character: |_| true,
///     use_shorthand_escape_sequence: |_| false,
/// };
/// assert_eq!(encode_string("a\"b", &policy), r#""a\u0022b""#);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EscapeFn {
    /// See [`EscapePolicy::use_character`].
    pub use_character: fn(char) -> bool,
    /// See [`EscapePolicy::use_shorthand_escape_sequence`].
    pub use_shorthand_escape_sequence: fn(char) -> bool,
}

impl EscapePolicy for EscapeFn {
    fn use_character(&self, c: char) -> bool {
        (self.use_character)(c)
    }

    fn use_shorthand_escape_sequence(&self, c: char) -> bool {
        (self.use_shorthand_escape_sequence)(c)
    }
}

/// The character following the backslash in `c`'s shorthand escape.
fn shorthand(c: char) -> Option<char> {
    match c {
        '"' => Some('"'),
        '\\' => Some('\\'),
        '/' => Some('/'),
        '\u{08}' => Some('b'),
        '\u{0C}' => Some('f'),
        '\n' => Some('n'),
        '\r' => Some('r'),
        '\t' => Some('t'),
        _ => None,
    }
}

#[inline]
fn allowed_unescaped(c: char) -> bool {
    c != '"' && c != '\\' && c >= '\u{20}'
}

/// Writes `src` as a quoted JSON string literal to `f`, escaping according to
/// `policy`.
///
/// # Errors
///
/// Only propagates errors from the underlying writer.
pub fn write_escaped_string<W, P>(src: &str, policy: &P, f: &mut W) -> fmt::Result
where
    W: Write + ?Sized,
    P: EscapePolicy + ?Sized,
{
    f.write_char('"')?;
    for c in src.chars() {
        if allowed_unescaped(c) && policy.use_character(c) {
            f.write_char(c)?;
            continue;
        }
        if let Some(short) = shorthand(c) {
            if policy.use_shorthand_escape_sequence(c) {
                f.write_char('\\')?;
                f.write_char(short)?;
                continue;
            }
        }
        let mut units = [0u16; 2];
        for unit in c.encode_utf16(&mut units) {
            write!(f, "\\u{unit:04x}")?;
        }
    }
    f.write_char('"')
}

/// Encodes `src` as a quoted JSON string literal under `policy`.
#[must_use]
pub fn encode_string<P: EscapePolicy + ?Sized>(src: &str, policy: &P) -> String {
    let mut out = String::with_capacity(src.len() + 2);
    // Writing into a `String` cannot fail.
    let _ = write_escaped_string(src, policy, &mut out);
    out
}
