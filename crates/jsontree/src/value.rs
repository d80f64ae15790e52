//! JSON value types.
//!
//! This module defines the [`Value`] enum, the tree every successful parse
//! produces, along with its array alias and accessors.
//!
use alloc::{string::String, vec::Vec};

use crate::Map;

/// An ordered sequence of values, in source order.
pub type Array = Vec<Value>;

/// A JSON value as defined by [RFC 8259].
///
/// Numbers are split by their lexical form: a literal with a fraction or an
/// exponent is [`Real`], anything else is [`Integer`]. The sign never
/// matters, so `-5` is an integer and `-5.0` a real.
///
/// The three literals `true`, `false` and `null` are unit variants.
///
/// # Examples
///
/// ```
/// use jsontree::{Map, Value};
///
/// let v = jsontree::parse(r#"{"key": [1, 2.5, null]}"#).unwrap();
///
/// let expected = Value::Object(Map::from([(
///     "key",
///     Value::Array(vec![Value::Integer(1), Value::Real(2.5), Value::Null]),
/// )]));
/// assert_eq!(v, expected);
/// ```
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
/// [`Real`]: Value::Real
/// [`Integer`]: Value::Integer
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// A string with escapes already decoded.
    String(String),
    /// A number written without fraction or exponent.
    Integer(i64),
    /// A number written with a fraction and/or an exponent.
    Real(f64),
    /// An array.
    Array(Array),
    /// An object, in insertion order.
    Object(Map),
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    #[default]
    Null,
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        if v { Self::True } else { Self::False }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::False.is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`True`] or [`False`].
    ///
    /// [`True`]: Value::True
    /// [`False`]: Value::False
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::True | Self::False)
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Integer`].
    ///
    /// [`Integer`]: Value::Integer
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::Value;
    ///
    /// assert!(jsontree::parse("-5").unwrap().is_integer());
    /// assert!(!jsontree::parse("-5.0").unwrap().is_integer());
    /// ```
    #[must_use]
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is [`Real`].
    ///
    /// [`Real`]: Value::Real
    #[must_use]
    pub fn is_real(&self) -> bool {
        matches!(self, Self::Real(..))
    }

    /// Returns `true` for either kind of number.
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Integer(..) | Self::Real(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// The boolean behind [`True`](Value::True) or [`False`](Value::False).
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            _ => None,
        }
    }

    /// The text of a [`String`](Value::String).
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The payload of an [`Integer`](Value::Integer).
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Any number as `f64`. Integers are widened and may lose precision
    /// beyond 2^53.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Real(x) => Some(*x),
            _ => None,
        }
    }

    /// The elements of an [`Array`](Value::Array).
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The entries of an [`Object`](Value::Object).
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up `key` if this is an object.
    ///
    /// ```
    /// let v = jsontree::parse(r#"{"a": {"b": true}}"#).unwrap();
    /// assert_eq!(v.get("a").and_then(|a| a.get("b")).and_then(|b| b.as_bool()), Some(true));
    /// assert!(v.get("missing").is_none());
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object()?.get(key)
    }

    /// Returns element `index` if this is an array.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array()?.get(index)
    }
}
