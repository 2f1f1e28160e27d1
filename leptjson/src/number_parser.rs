// SPDX-License-Identifier: Apache-2.0

//! Number scanning and conversion.
//!
//! The grammar is validated byte by byte before any conversion happens:
//!
//! ```text
//! number = [ "-" ] int [ frac ] [ exp ]
//! int    = "0" / digit1-9 *digit
//! frac   = "." 1*digit
//! exp    = ( "e" / "E" ) [ "-" / "+" ] 1*digit
//! ```
//!
//! A lone leading `0` ends the integer part, so `0123` scans as `0` and the
//! caller sees the trailing `123` as extra content.

use core::str::FromStr;

use crate::parse_error::ParseError;

fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

fn is_digit_1_to_9(byte: u8) -> bool {
    matches!(byte, b'1'..=b'9')
}

/// Advances past a run of digits starting at `pos`, returning the new position.
fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).copied().is_some_and(is_digit) {
        pos += 1;
    }
    pos
}

/// Requires at least one digit at `pos` and skips the whole run.
fn expect_digits(bytes: &[u8], pos: usize) -> Result<usize, ParseError> {
    match bytes.get(pos) {
        Some(&b) if is_digit(b) => Ok(skip_digits(bytes, pos + 1)),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Returns the length of the grammar-valid number at the start of `bytes`.
///
/// Stops at the first byte that cannot extend the number; whatever follows is
/// left for the caller.
pub fn scan_number(bytes: &[u8]) -> Result<usize, ParseError> {
    let mut pos = 0;
    if bytes.first() == Some(&b'-') {
        pos += 1;
    }

    match bytes.get(pos) {
        Some(b'0') => pos += 1,
        Some(&b) if is_digit_1_to_9(b) => pos = skip_digits(bytes, pos + 1),
        _ => return Err(ParseError::InvalidValue),
    }

    if bytes.get(pos) == Some(&b'.') {
        pos = expect_digits(bytes, pos + 1)?;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        pos = expect_digits(bytes, pos)?;
    }

    Ok(pos)
}

/// Converts a span already accepted by [`scan_number`] into the nearest f64.
///
/// Magnitudes that round to infinity are rejected instead of saturating.
pub fn convert_number(span: &[u8]) -> Result<f64, ParseError> {
    // The scanner only accepts ASCII, so this never fails for a scanned span
    let text = core::str::from_utf8(span).map_err(|_| ParseError::InvalidValue)?;
    let n = f64::from_str(text).map_err(|_| ParseError::InvalidValue)?;
    if n.is_infinite() {
        return Err(ParseError::NumberTooBig);
    }
    Ok(n)
}

/// Scans and converts the number at the start of `bytes`.
///
/// Returns the value together with the number of bytes it occupies.
pub fn parse_number(bytes: &[u8]) -> Result<(f64, usize), ParseError> {
    let len = scan_number(bytes)?;
    let n = convert_number(&bytes[..len])?;
    Ok((n, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_stops_at_span_end() {
        assert_eq!(scan_number(b"0"), Ok(1));
        assert_eq!(scan_number(b"-12.5e+3 "), Ok(8));
        assert_eq!(scan_number(b"1x"), Ok(1));
        assert_eq!(scan_number(b"3.14]"), Ok(4));
    }

    #[test]
    fn test_leading_zero_consumes_only_zero() {
        assert_eq!(scan_number(b"0123"), Ok(1));
        assert_eq!(scan_number(b"-0123"), Ok(2));
        assert_eq!(scan_number(b"0x0"), Ok(1));
    }

    #[test]
    fn test_scan_rejects_bad_grammar() {
        for input in [
            &b""[..],
            b"-",
            b"+1",
            b".5",
            b"1.",
            b"1.e5",
            b"1e",
            b"1e+",
            b"1E-",
            b"-a",
            b"inf",
            b"NaN",
        ] {
            assert_eq!(
                scan_number(input),
                Err(ParseError::InvalidValue),
                "input {:?}",
                core::str::from_utf8(input)
            );
        }
    }

    #[test]
    fn test_convert_overflow() {
        assert_eq!(convert_number(b"1e309"), Err(ParseError::NumberTooBig));
        assert_eq!(convert_number(b"-1e309"), Err(ParseError::NumberTooBig));
        assert_eq!(
            convert_number(b"1.7976931348623157e308"),
            Ok(f64::MAX)
        );
    }

    #[test]
    fn test_underflow_is_not_an_error() {
        assert_eq!(convert_number(b"1e-10000"), Ok(0.0));
    }

    #[test]
    fn test_parse_number_pair() {
        assert_eq!(parse_number(b"-1E10,"), Ok((-1e10, 5)));
        assert_eq!(parse_number(b"1e+"), Err(ParseError::InvalidValue));
    }
}
