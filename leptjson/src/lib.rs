// SPDX-License-Identifier: Apache-2.0

//! A small recursive-descent JSON value parser.
//!
//! Parses `null`, `true`, `false`, numbers and strings into a [`Value`].
//! String escapes are decoded through a growable scratch stack owned by the
//! [`Parser`] for the duration of one parse.
//!
//! ```
//! use leptjson::{parse, Kind, ParseError, Value};
//!
//! let mut v = Value::new();
//! parse(&mut v, " -1.5e3 ").unwrap();
//! assert_eq!(v.kind(), Kind::Number);
//! assert_eq!(v.number(), -1500.0);
//!
//! assert_eq!(parse(&mut v, "null x"), Err(ParseError::RootNotSingular));
//! assert_eq!(v.kind(), Kind::Null);
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod config;
pub use config::ParserConfig;

mod escape_processor;

mod number_parser;

mod parse_error;
pub use parse_error::ParseError;

mod parser;
pub use parser::Parser;

mod scratch_buffer;

mod slice_input_buffer;

mod value;
pub use value::{Kind, Value};

/// Parses `input` as a single JSON value into `value`.
///
/// `value` is reset to `Null` before parsing and stays `Null` if parsing fails.
pub fn parse(value: &mut Value, input: impl AsRef<[u8]>) -> Result<(), ParseError> {
    Parser::new_from_slice(input.as_ref()).parse_into(value)
}
