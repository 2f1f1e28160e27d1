// SPDX-License-Identifier: Apache-2.0

use alloc::boxed::Box;

use crate::parse_error::ParseError;

/// The type of a parsed [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    True,
    False,
    Number,
    String,
    /// Reserved; the parser never produces arrays.
    Array,
    /// Reserved; the parser never produces objects.
    Object,
}

impl core::fmt::Display for Kind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::True => "true",
            Kind::False => "false",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        };
        f.write_str(name)
    }
}

/// A parsed JSON value.
///
/// Each variant carries only its own payload, and a `String` value
/// exclusively owns its bytes. Replacing the variant drops the old payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    True,
    False,
    Number(f64),
    String(Box<[u8]>),
}

impl Value {
    /// Creates a `Null` value.
    pub const fn new() -> Self {
        Value::Null
    }

    /// Parses `input` into a fresh value.
    ///
    /// # Example
    /// ```
    /// use leptjson::{Kind, Value};
    /// let v = Value::from_json(" true ").unwrap();
    /// assert_eq!(v.kind(), Kind::True);
    /// ```
    pub fn from_json(input: impl AsRef<[u8]>) -> Result<Self, ParseError> {
        let mut value = Value::Null;
        crate::parse(&mut value, input)?;
        Ok(value)
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::True => Kind::True,
            Value::False => Kind::False,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
        }
    }

    /// Releases any owned payload and resets to `Null`. Calling it again is a no-op.
    pub fn free(&mut self) {
        *self = Value::Null;
    }

    pub fn set_null(&mut self) {
        self.free();
    }

    /// Returns the boolean this value holds.
    ///
    /// # Panics
    /// If the value is neither `True` nor `False`.
    pub fn boolean(&self) -> bool {
        match self {
            Value::True => true,
            Value::False => false,
            other => panic!("boolean() called on a {} value", other.kind()),
        }
    }

    pub fn set_boolean(&mut self, b: bool) {
        *self = if b { Value::True } else { Value::False };
    }

    /// Returns the number this value holds.
    ///
    /// # Panics
    /// If the value is not a `Number`.
    pub fn number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            other => panic!("number() called on a {} value", other.kind()),
        }
    }

    pub fn set_number(&mut self, n: f64) {
        *self = Value::Number(n);
    }

    /// Returns the decoded bytes of a string value.
    ///
    /// # Panics
    /// If the value is not a `String`.
    pub fn string(&self) -> &[u8] {
        match self {
            Value::String(s) => s,
            other => panic!("string() called on a {} value", other.kind()),
        }
    }

    /// Byte length of a string value.
    ///
    /// # Panics
    /// If the value is not a `String`.
    pub fn string_len(&self) -> usize {
        self.string().len()
    }

    /// Views the string payload as UTF-8.
    ///
    /// # Panics
    /// If the value is not a `String`.
    pub fn string_str(&self) -> Result<&str, core::str::Utf8Error> {
        core::str::from_utf8(self.string())
    }

    /// Replaces the current payload with a copy of `s`.
    pub fn set_string(&mut self, s: &[u8]) {
        *self = Value::String(Box::from(s));
    }
}
