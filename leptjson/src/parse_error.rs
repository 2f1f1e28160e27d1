// SPDX-License-Identifier: Apache-2.0

use crate::slice_input_buffer;

/// Errors that can occur during JSON parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input is empty or contains only whitespace.
    ExpectValue,
    /// The lead byte does not start a value, or a literal/number is malformed.
    InvalidValue,
    /// A value was parsed but non-whitespace content follows it.
    RootNotSingular,
    /// A well-formed number does not fit in an f64.
    NumberTooBig,
    /// End of input was reached before the closing quote of a string.
    MissingQuotationMark,
    /// A backslash inside a string is followed by an unknown escape character.
    InvalidStringEscape,
    /// An unescaped control character (< 0x20) appeared inside a string.
    InvalidStringChar,
}

impl ParseError {
    /// Numeric result code for this error. `0` is reserved for success.
    pub const fn code(&self) -> i32 {
        match self {
            ParseError::ExpectValue => 1,
            ParseError::InvalidValue => 2,
            ParseError::RootNotSingular => 3,
            ParseError::NumberTooBig => 4,
            ParseError::MissingQuotationMark => 5,
            ParseError::InvalidStringEscape => 6,
            ParseError::InvalidStringChar => 7,
        }
    }
}

impl From<slice_input_buffer::Error> for ParseError {
    fn from(err: slice_input_buffer::Error) -> Self {
        match err {
            // Running out of input while matching a literal or number
            slice_input_buffer::Error::ReachedEnd => ParseError::InvalidValue,
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ParseError::ExpectValue => "expected a value",
            ParseError::InvalidValue => "invalid value",
            ParseError::RootNotSingular => "root is not singular",
            ParseError::NumberTooBig => "number too big",
            ParseError::MissingQuotationMark => "missing closing quotation mark",
            ParseError::InvalidStringEscape => "invalid string escape",
            ParseError::InvalidStringChar => "invalid character in string",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct_and_nonzero() {
        let all = [
            ParseError::ExpectValue,
            ParseError::InvalidValue,
            ParseError::RootNotSingular,
            ParseError::NumberTooBig,
            ParseError::MissingQuotationMark,
            ParseError::InvalidStringEscape,
            ParseError::InvalidStringChar,
        ];
        for (i, a) in all.iter().enumerate() {
            assert_ne!(a.code(), 0);
            for b in &all[i + 1..] {
                assert_ne!(a.code(), b.code(), "{a:?} and {b:?} share a code");
            }
        }
    }

    #[test]
    fn test_reached_end_conversion() {
        let error: ParseError = slice_input_buffer::Error::ReachedEnd.into();
        assert_eq!(error, ParseError::InvalidValue);
    }

    #[test]
    fn test_display() {
        assert_eq!(ParseError::NumberTooBig.to_string(), "number too big");
        assert_eq!(
            ParseError::MissingQuotationMark.to_string(),
            "missing closing quotation mark"
        );
    }
}
