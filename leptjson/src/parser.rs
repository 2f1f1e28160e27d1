// SPDX-License-Identifier: Apache-2.0

use log::{debug, trace};

use crate::config::ParserConfig;
use crate::escape_processor::EscapeProcessor;
use crate::number_parser;
use crate::parse_error::ParseError;
use crate::scratch_buffer::ScratchBuffer;
use crate::slice_input_buffer::SliceInputBuffer;
use crate::value::Value;

/// A recursive-descent parser for a single JSON value.
///
/// Holds the read cursor over the borrowed input and the scratch stack used
/// while decoding strings. Both live only as long as the parser.
// Lifetime 'a is the input buffer lifetime
pub struct Parser<'a> {
    input: SliceInputBuffer<'a>,
    scratch: ScratchBuffer,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given JSON text.
    ///
    /// # Example
    /// ```
    /// use leptjson::{Kind, Parser, Value};
    /// let mut v = Value::new();
    /// Parser::new("\"hi\"").parse_into(&mut v).unwrap();
    /// assert_eq!(v.kind(), Kind::String);
    /// ```
    pub fn new(input: &'a str) -> Self {
        Self::new_from_slice(input.as_bytes())
    }

    /// Creates a new parser from a byte slice.
    pub fn new_from_slice(input: &'a [u8]) -> Self {
        Self::with_config(input, ParserConfig::default())
    }

    /// Creates a new parser from a byte slice with a custom [`ParserConfig`].
    pub fn with_config(input: &'a [u8], config: ParserConfig) -> Self {
        Self {
            input: SliceInputBuffer::new(input),
            scratch: ScratchBuffer::with_initial_capacity(config.initial_scratch_capacity),
        }
    }

    /// Logical depth of the scratch stack. Zero whenever `parse_into` has returned.
    pub fn scratch_len(&self) -> usize {
        self.scratch.len()
    }

    /// Bytes currently allocated for the scratch stack.
    pub fn scratch_capacity(&self) -> usize {
        self.scratch.capacity()
    }

    /// Parses the whole input as exactly one value, surrounded by optional
    /// whitespace, and stores it in `value`.
    ///
    /// `value` is reset to `Null` first and is left `Null` on any error.
    /// The input is consumed; a second call reports `ExpectValue`.
    pub fn parse_into(&mut self, value: &mut Value) -> Result<(), ParseError> {
        value.set_null();
        let result = self.parse_root(value);
        debug_assert!(
            self.scratch.is_empty(),
            "scratch stack not unwound: {} bytes left",
            self.scratch.len()
        );
        if let Err(err) = result {
            debug!(
                "Parse failed at byte {}: {:?}",
                self.input.current_pos(),
                err
            );
            value.set_null();
        }
        result
    }

    fn parse_root(&mut self, value: &mut Value) -> Result<(), ParseError> {
        self.parse_whitespace();
        self.parse_value(value)?;
        self.parse_whitespace();
        if !self.input.is_at_end() {
            return Err(ParseError::RootNotSingular);
        }
        Ok(())
    }

    fn parse_whitespace(&mut self) {
        while matches!(self.input.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.input.advance(1);
        }
    }

    fn parse_value(&mut self, value: &mut Value) -> Result<(), ParseError> {
        let lead = self.input.peek();
        trace!(
            "Dispatching value at byte {} on {:?}",
            self.input.current_pos(),
            lead.map(char::from)
        );
        match lead {
            None => Err(ParseError::ExpectValue),
            Some(b'n') => self.parse_literal(value, b"null", Value::Null),
            Some(b't') => self.parse_literal(value, b"true", Value::True),
            Some(b'f') => self.parse_literal(value, b"false", Value::False),
            Some(b'"') => self.parse_string(value),
            Some(_) => self.parse_number(value),
        }
    }

    /// Matches `literal` byte by byte; the lead byte has already been dispatched on.
    fn parse_literal(
        &mut self,
        value: &mut Value,
        literal: &[u8],
        parsed: Value,
    ) -> Result<(), ParseError> {
        for &expected in literal {
            if self.input.consume_byte()? != expected {
                return Err(ParseError::InvalidValue);
            }
        }
        *value = parsed;
        Ok(())
    }

    fn parse_number(&mut self, value: &mut Value) -> Result<(), ParseError> {
        let (n, len) = number_parser::parse_number(self.input.remaining())?;
        trace!("Number {} spans {} bytes", n, len);
        self.input.advance(len);
        value.set_number(n);
        Ok(())
    }

    fn parse_string(&mut self, value: &mut Value) -> Result<(), ParseError> {
        let height = self.scratch.len();
        match self.scan_string() {
            Ok(()) => {
                let len = self.scratch.len() - height;
                value.set_string(self.scratch.release(len));
                Ok(())
            }
            Err(err) => {
                self.scratch.truncate(height);
                Err(err)
            }
        }
    }

    /// Decodes string content onto the scratch stack up to the closing quote.
    fn scan_string(&mut self) -> Result<(), ParseError> {
        // Opening quote
        self.input.advance(1);
        loop {
            let byte = self
                .input
                .consume_byte()
                .map_err(|_| ParseError::MissingQuotationMark)?;
            match byte {
                b'"' => return Ok(()),
                b'\\' => {
                    let escape = self
                        .input
                        .consume_byte()
                        .map_err(|_| ParseError::MissingQuotationMark)?;
                    let unescaped = EscapeProcessor::process_simple_escape(escape)?;
                    self.scratch.push(unescaped);
                }
                b if EscapeProcessor::is_control_char(b) => {
                    return Err(ParseError::InvalidStringChar)
                }
                b => self.scratch.push(b),
            }
        }
    }
}
