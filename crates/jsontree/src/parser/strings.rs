//! The string production and escape decoding.
use alloc::string::String;

use super::{Parser, escape_buffer::UnicodeEscapeBuffer};
use crate::{
    CharSource,
    error::{ErrorKind, EscapeError, ParseError},
};

impl<S: CharSource> Parser<S> {
    /// Reads the rest of a string literal whose opening quote has been
    /// consumed, returning the decoded text.
    pub(super) fn parse_string(&mut self) -> Result<String, ParseError> {
        let mut text = String::new();
        loop {
            match self.read() {
                Some('"') => return Ok(text),
                Some('\\') => {
                    let decoded = self.parse_escape()?;
                    text.push(decoded);
                }
                Some(c) if c < '\u{20}' && !self.options.allow_control_characters => {
                    return Err(self.error(ErrorKind::UnexpectedCharacter(c)));
                }
                Some(c) => text.push(c),
                None => return Err(self.error(ErrorKind::UnexpectedEndOfInput)),
            }
        }
    }

    fn parse_escape(&mut self) -> Result<char, ParseError> {
        match self.read() {
            Some('"') => Ok('"'),
            Some('\\') => Ok('\\'),
            Some('/') => Ok('/'),
            Some('b') => Ok('\u{0008}'),
            Some('f') => Ok('\u{000C}'),
            Some('n') => Ok('\n'),
            Some('r') => Ok('\r'),
            Some('t') => Ok('\t'),
            Some('u') => self.parse_unicode_escape(),
            Some(c) => Err(self.escape_error(EscapeError::UnknownEscape(c))),
            None => Err(self.error(ErrorKind::UnexpectedEndOfInput)),
        }
    }

    /// Decodes `XXXX` after `\u`. A high surrogate must be followed directly
    /// by a `\uXXXX` low surrogate; the two combine into one character.
    fn parse_unicode_escape(&mut self) -> Result<char, ParseError> {
        let first = self.read_code_unit()?;
        if let Some(Ok(c)) = char::decode_utf16([first]).next() {
            return Ok(c);
        }
        if !is_high_surrogate(first) {
            return Err(self.escape_error(EscapeError::UnpairedSurrogate(first)));
        }

        if self.read() != Some('\\') || self.read() != Some('u') {
            return Err(self.escape_error(EscapeError::UnpairedSurrogate(first)));
        }
        let second = self.read_code_unit()?;
        match char::decode_utf16([first, second]).next() {
            Some(Ok(c)) => Ok(c),
            _ => Err(self.escape_error(EscapeError::UnpairedSurrogate(first))),
        }
    }

    fn read_code_unit(&mut self) -> Result<u16, ParseError> {
        let mut buffer = UnicodeEscapeBuffer::new();
        loop {
            let Some(c) = self.read() else {
                return Err(self.escape_error(EscapeError::Truncated));
            };
            match buffer.feed(c) {
                Ok(Some(unit)) => return Ok(unit),
                Ok(None) => {}
                Err(err) => return Err(self.escape_error(err)),
            }
        }
    }
}

fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..0xDC00).contains(&unit)
}
