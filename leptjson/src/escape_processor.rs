// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::ParseError;

/// Pure helpers for decoding string escape sequences.
pub struct EscapeProcessor;

impl EscapeProcessor {
    /// Process a simple escape sequence character and return the unescaped byte.
    ///
    /// # Arguments
    /// * `escape_char` - The character following the backslash in an escape sequence
    ///
    /// # Returns
    /// The unescaped byte value, or `InvalidStringEscape` for anything outside
    /// the eight single-character escapes. `\u` is not decoded.
    pub fn process_simple_escape(escape_char: u8) -> Result<u8, ParseError> {
        match escape_char {
            b'"' => Ok(b'"'),
            b'\\' => Ok(b'\\'),
            b'/' => Ok(b'/'),
            b'b' => Ok(0x08), // Backspace
            b'f' => Ok(0x0C), // Form feed
            b'n' => Ok(b'\n'),
            b'r' => Ok(b'\r'),
            b't' => Ok(b'\t'),
            _ => Err(ParseError::InvalidStringEscape),
        }
    }

    /// Bytes below 0x20 must be escaped inside a string.
    pub fn is_control_char(byte: u8) -> bool {
        byte < 0x20
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_escapes() {
        assert_eq!(EscapeProcessor::process_simple_escape(b'n'), Ok(b'\n'));
        assert_eq!(EscapeProcessor::process_simple_escape(b't'), Ok(b'\t'));
        assert_eq!(EscapeProcessor::process_simple_escape(b'r'), Ok(b'\r'));
        assert_eq!(EscapeProcessor::process_simple_escape(b'\\'), Ok(b'\\'));
        assert_eq!(EscapeProcessor::process_simple_escape(b'"'), Ok(b'"'));
        assert_eq!(EscapeProcessor::process_simple_escape(b'/'), Ok(b'/'));
        assert_eq!(EscapeProcessor::process_simple_escape(b'b'), Ok(0x08));
        assert_eq!(EscapeProcessor::process_simple_escape(b'f'), Ok(0x0C));
    }

    #[test]
    fn test_invalid_simple_escape() {
        for c in [b'x', b'z', b'1', b'0', b'u', b'\'', b'N', b'T', b' '] {
            assert_eq!(
                EscapeProcessor::process_simple_escape(c),
                Err(ParseError::InvalidStringEscape),
                "escape {:?} should be rejected",
                c as char
            );
        }
    }

    #[test]
    fn test_control_char_boundary() {
        assert!(EscapeProcessor::is_control_char(0x00));
        assert!(EscapeProcessor::is_control_char(0x1F));
        assert!(!EscapeProcessor::is_control_char(0x20));
        assert!(!EscapeProcessor::is_control_char(0x7F));
        assert!(!EscapeProcessor::is_control_char(0x80));
    }
}
