//! The recursive-descent JSON reader.
//!
//! [`Parser`] pulls characters from a [`CharSource`] one at a time and builds
//! a [`Value`] tree. JSON is LL(1) at the value level, so every production is
//! chosen from a single lookahead character:
//!
//! | Lookahead        | Production |
//! |------------------|------------|
//! | `"`              | string     |
//! | `[`              | array      |
//! | `{`              | object     |
//! | `-`, `0`..=`9`   | number     |
//! | `t`, `f`, `n`    | literal    |
//!
//! Containers recurse back into the value dispatcher. The only production
//! that reads past its own end is the number, which pushes the boundary
//! character back so the enclosing production sees it as its lookahead.
//!
//! The cursor counts every character consumed, plus one for the read that
//! observes end of input. Errors carry that count as their position.
//!
//! # Examples
//!
//! ```rust
//! use jsontree::{Parser, Value};
//!
//! let value = Parser::new(r#"[null, true, 3.14]"#.chars()).parse().unwrap();
//! assert_eq!(
//!     value,
//!     Value::Array(vec![Value::Null, Value::True, Value::Real(3.14)])
//! );
//! ```
use crate::{
    Array, CharSource, Map, ParserOptions, Value,
    error::{ErrorKind, EscapeError, ParseError},
};

mod escape_buffer;
mod literal;
mod numbers;
mod strings;

/// A single-use JSON parser over one character source.
///
/// Each parser owns its cursor, so independent parsers never share state.
#[derive(Debug)]
pub struct Parser<S> {
    source: S,
    /// Characters consumed so far, including one for end of input.
    position: usize,
    /// A character the number production read past and handed back.
    pending: Option<char>,
    exhausted: bool,
    /// Containers currently open.
    depth: usize,
    options: ParserOptions,
}

impl<S: CharSource> Parser<S> {
    /// Creates a parser with default [`ParserOptions`].
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_options(source, ParserOptions::default())
    }

    /// Creates a parser with the given options.
    #[must_use]
    pub fn with_options(source: S, options: ParserOptions) -> Self {
        Self {
            source,
            position: 0,
            pending: None,
            exhausted: false,
            depth: 0,
            options,
        }
    }

    /// Number of characters consumed so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Parses exactly one JSON value, surrounded by optional whitespace.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the input is not a single valid JSON
    /// text. Anything other than whitespace after the value is
    /// [`ErrorKind::TrailingContent`].
    ///
    /// ```rust
    /// use jsontree::{ErrorKind, Parser};
    ///
    /// let err = Parser::new("{} garbage".chars()).parse().unwrap_err();
    /// assert_eq!(err.kind, ErrorKind::TrailingContent('g'));
    /// assert_eq!(err.position, 4);
    /// ```
    pub fn parse(mut self) -> Result<Value, ParseError> {
        let lookahead = self.next_significant();
        let value = self.parse_value(lookahead)?;
        match self.next_significant() {
            None => Ok(value),
            Some(c) => Err(self.error(ErrorKind::TrailingContent(c))),
        }
    }

    // ------------------------------------------------------------------------------------------------
    // Cursor
    // ------------------------------------------------------------------------------------------------

    fn read(&mut self) -> Option<char> {
        if let Some(c) = self.pending.take() {
            return Some(c);
        }
        if self.exhausted {
            return None;
        }
        self.position += 1;
        let next = self.source.read();
        self.exhausted = next.is_none();
        next
    }

    /// Hands `c` back so the next [`read`](Self::read) returns it again.
    fn unread(&mut self, c: char) {
        debug_assert!(self.pending.is_none(), "only one character of pushback");
        self.pending = Some(c);
    }

    /// Reads up to and including the next non-whitespace character.
    fn next_significant(&mut self) -> Option<char> {
        loop {
            match self.read() {
                Some(c) if is_whitespace(c) => {}
                next => return next,
            }
        }
    }

    // ------------------------------------------------------------------------------------------------
    // Productions
    // ------------------------------------------------------------------------------------------------

    fn parse_value(&mut self, lookahead: Option<char>) -> Result<Value, ParseError> {
        match lookahead {
            Some('"') => self.parse_string().map(Value::String),
            Some('[') => self.parse_array(),
            Some('{') => self.parse_object(),
            Some(c @ ('-' | '0'..='9')) => self.parse_number(c),
            Some(c @ ('t' | 'f' | 'n')) => self.parse_literal(c),
            other => Err(self.unexpected(other)),
        }
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        let mut items = Array::new();

        let mut next = self.next_significant();
        if next != Some(']') {
            loop {
                items.push(self.parse_value(next)?);
                match self.next_significant() {
                    // A value must follow, so `,]` fails in `parse_value`.
                    Some(',') => next = self.next_significant(),
                    Some(']') => break,
                    other => return Err(self.unexpected(other)),
                }
            }
        }

        self.leave();
        Ok(Value::Array(items))
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        let mut map = Map::new();

        let mut next = self.next_significant();
        if next != Some('}') {
            loop {
                if next != Some('"') {
                    return Err(self.unexpected(next));
                }
                let key = self.parse_string()?;

                match self.next_significant() {
                    Some(':') => {}
                    other => return Err(self.unexpected(other)),
                }

                let lookahead = self.next_significant();
                let value = self.parse_value(lookahead)?;
                map.insert(key, value);

                match self.next_significant() {
                    Some(',') => next = self.next_significant(),
                    Some('}') => break,
                    other => return Err(self.unexpected(other)),
                }
            }
        }

        self.leave();
        Ok(Value::Object(map))
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        match self.options.max_nesting_depth {
            Some(limit) if self.depth > limit => Err(self.error(ErrorKind::NestingTooDeep(limit))),
            _ => Ok(()),
        }
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    // ------------------------------------------------------------------------------------------------
    // Errors
    // ------------------------------------------------------------------------------------------------

    fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError::new(kind, self.position)
    }

    fn unexpected(&self, c: Option<char>) -> ParseError {
        match c {
            Some(c) => self.error(ErrorKind::UnexpectedCharacter(c)),
            None => self.error(ErrorKind::UnexpectedEndOfInput),
        }
    }

    fn escape_error(&self, err: EscapeError) -> ParseError {
        self.error(ErrorKind::InvalidEscape(err))
    }
}

/// JSON whitespace: space, tab, line feed, carriage return.
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}
