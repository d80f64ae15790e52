//! The number production.
//!
//! Grammar: `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`.
//!
//! The token is classified by its shape alone. A fraction or an exponent
//! makes it [`Value::Real`]; otherwise it is [`Value::Integer`], whatever its
//! sign. Magnitude never changes the variant: an integer literal that does
//! not fit in `i64` is an error rather than a real.
use alloc::string::String;

use super::Parser;
use crate::{
    CharSource, Value,
    error::{ErrorKind, ParseError},
};

/// Lexical classification of a complete number token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberLexeme<'a> {
    Integer(&'a str), // no '.' and no exponent
    Real(&'a str),    // has '.' or exponent
}

impl NumberLexeme<'_> {
    fn into_value(self) -> Result<Value, ErrorKind> {
        match self {
            Self::Integer(text) => text
                .parse()
                .map(Value::Integer)
                .map_err(|_| ErrorKind::NumberOutOfRange),
            Self::Real(text) => match text.parse::<f64>() {
                Ok(x) if x.is_finite() => Ok(Value::Real(x)),
                _ => Err(ErrorKind::NumberOutOfRange),
            },
        }
    }
}

impl<S: CharSource> Parser<S> {
    /// Reads a number whose first character (`-` or a digit) has been
    /// consumed. The first character after the token is pushed back.
    pub(super) fn parse_number(&mut self, first: char) -> Result<Value, ParseError> {
        let mut lexeme = String::new();
        lexeme.push(first);

        let leading = if first == '-' {
            self.require_digit(&mut lexeme)?
        } else {
            first
        };
        // No digits may follow a leading zero.
        let mut next = if leading == '0' {
            self.read()
        } else {
            self.read_digits(&mut lexeme)
        };

        let mut real = false;
        if next == Some('.') {
            lexeme.push('.');
            self.require_digit(&mut lexeme)?;
            next = self.read_digits(&mut lexeme);
            real = true;
        }

        if let Some(marker @ ('e' | 'E')) = next {
            lexeme.push(marker);
            let mut c = self.read();
            if let Some(sign @ ('+' | '-')) = c {
                lexeme.push(sign);
                c = self.read();
            }
            match c {
                Some(digit @ '0'..='9') => lexeme.push(digit),
                other => return Err(self.unexpected(other)),
            }
            next = self.read_digits(&mut lexeme);
            real = true;
        }

        if let Some(boundary) = next {
            self.unread(boundary);
        }

        let token = if real {
            NumberLexeme::Real(&lexeme)
        } else {
            NumberLexeme::Integer(&lexeme)
        };
        token.into_value().map_err(|kind| self.error(kind))
    }

    /// Reads one character that must be a digit.
    fn require_digit(&mut self, lexeme: &mut String) -> Result<char, ParseError> {
        match self.read() {
            Some(digit @ '0'..='9') => {
                lexeme.push(digit);
                Ok(digit)
            }
            other => Err(self.unexpected(other)),
        }
    }

    /// Reads digits until something else turns up, returning that.
    fn read_digits(&mut self, lexeme: &mut String) -> Option<char> {
        loop {
            match self.read() {
                Some(digit @ '0'..='9') => lexeme.push(digit),
                other => return other,
            }
        }
    }
}
