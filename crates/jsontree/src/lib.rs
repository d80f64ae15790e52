//! A small, strict JSON reader.
//!
//! `jsontree` parses one JSON text ([RFC 8259]) into an owned [`Value`]
//! tree. It is a recursive-descent parser that reads one character at a
//! time from any [`CharSource`] and keeps a single cursor for error
//! positions.
//!
//! - Numbers keep their lexical kind: `1` is [`Value::Integer`], `1.0` and
//!   `1e0` are [`Value::Real`].
//! - Objects are [`Map`]s that preserve insertion order. A repeated key
//!   overwrites the earlier value but keeps the earlier position.
//! - String escapes, including UTF-16 surrogate pairs, are fully decoded.
//! - Nesting depth is bounded (128 by default, see [`ParserOptions`]).
//!
//! There is no writer: the crate only reads.
//!
//! # Examples
//!
//! ```
//! use jsontree::{ErrorKind, Value};
//!
//! let value = jsontree::parse(r#"{"a": 1, "b": [true, -2.5], "a": 3}"#).unwrap();
//! let keys: Vec<&str> = value.as_object().unwrap().keys().collect();
//! assert_eq!(keys, ["a", "b"]);
//! assert_eq!(value.get("a"), Some(&Value::Integer(3)));
//!
//! let err = jsontree::parse("[1, 2,]").unwrap_err();
//! assert_eq!(err.kind, ErrorKind::UnexpectedCharacter(']'));
//! assert_eq!(err.position, 7);
//! ```
//!
//! [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;
mod map;
mod options;
mod pair;
mod parser;
#[cfg(feature = "std")]
mod read;
mod source;
mod value;

#[cfg(test)]
mod tests;

#[cfg(feature = "std")]
pub use error::ReadError;
pub use error::{ErrorKind, EscapeError, ParseError};
pub use map::{IntoIter, Iter, Map};
pub use options::{DEFAULT_MAX_NESTING_DEPTH, ParserOptions};
pub use pair::Pair;
pub use parser::Parser;
#[cfg(feature = "std")]
pub use read::{parse_file, parse_reader};
pub use source::{CharSource, Utf8Bytes};
pub use value::{Array, Value};

/// Parses a JSON text held in a string.
///
/// # Errors
///
/// Returns a [`ParseError`] if `text` is not exactly one JSON value with
/// optional surrounding whitespace.
///
/// # Examples
///
/// ```
/// use jsontree::Value;
///
/// assert_eq!(jsontree::parse("-5"), Ok(Value::Integer(-5)));
/// assert_eq!(jsontree::parse("-5.0"), Ok(Value::Real(-5.0)));
/// ```
pub fn parse(text: &str) -> Result<Value, ParseError> {
    parse_source(text.chars())
}

/// Parses UTF-8 bytes, replacing invalid sequences with U+FFFD.
///
/// # Errors
///
/// Returns a [`ParseError`] if the decoded text is not valid JSON.
///
/// # Examples
///
/// ```
/// let value = jsontree::parse_slice(br#"{"k": "v"}"#).unwrap();
/// assert_eq!(value.get("k").and_then(|v| v.as_str()), Some("v"));
/// ```
pub fn parse_slice(bytes: &[u8]) -> Result<Value, ParseError> {
    parse_source(Utf8Bytes::new(bytes))
}

/// Parses from any character source with default options.
///
/// # Errors
///
/// Returns a [`ParseError`] if the characters are not valid JSON.
pub fn parse_source<S: CharSource>(source: S) -> Result<Value, ParseError> {
    Parser::new(source).parse()
}
