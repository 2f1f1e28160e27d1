// SPDX-License-Identifier: Apache-2.0

/// Error type for SliceInputBuffer operations.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Reached the end of input data.
    ReachedEnd,
}

/// Read cursor over the borrowed input text.
///
/// The cursor never owns the text. Reading past the end is reported as
/// `None` or [`Error::ReachedEnd`] and never moves the position beyond
/// `data.len()`.
#[derive(Debug)]
pub struct SliceInputBuffer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceInputBuffer<'a> {
    /// Creates a new SliceInputBuffer with the given data.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn current_pos(&self) -> usize {
        self.pos
    }

    /// True once every byte of the input has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Returns the byte under the cursor without consuming it.
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    pub fn consume_byte(&mut self) -> Result<u8, Error> {
        let byte = self.peek().ok_or(Error::ReachedEnd)?;
        self.pos += 1;
        Ok(byte)
    }

    /// Moves the cursor forward by `n` bytes, clamped to the end of input.
    pub fn advance(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.data.len());
    }

    /// Unconsumed input from the cursor onward.
    pub fn remaining(&self) -> &'a [u8] {
        self.data.get(self.pos..).unwrap_or(&[])
    }
}
