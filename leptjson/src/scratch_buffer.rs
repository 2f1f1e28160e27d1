// SPDX-License-Identifier: Apache-2.0

//! Growable byte stack used to stage decoded string content.
//!
//! Sub-parsers push bytes onto the top of the stack while scanning and pop
//! the same number of bytes when they finish, either to move the content
//! into a [`crate::Value`] or to roll back after an error. The backing
//! storage only grows; it is released when the owning parser is dropped.

use alloc::vec::Vec;

use log::debug;

/// Backing storage size used on the first push when none is configured.
pub const DEFAULT_INITIAL_CAPACITY: usize = 256;

#[derive(Debug)]
pub struct ScratchBuffer {
    /// Backing storage; `data.len()` is the usable capacity.
    data: Vec<u8>,
    /// Logical top of the stack.
    top: usize,
    /// Capacity allocated on first use.
    initial_capacity: usize,
}

impl ScratchBuffer {
    /// Creates an empty buffer. Nothing is allocated until the first push.
    pub fn with_initial_capacity(initial_capacity: usize) -> Self {
        Self {
            data: Vec::new(),
            top: 0,
            initial_capacity: initial_capacity.max(1),
        }
    }

    /// Logical stack depth in bytes.
    pub fn len(&self) -> usize {
        self.top
    }

    pub fn is_empty(&self) -> bool {
        self.top == 0
    }

    /// Size of the backing storage.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns a writable region of `n` bytes at the top of the stack,
    /// growing the backing storage by 1.5x steps until it fits.
    ///
    /// Allocation failure aborts the process; it is not a parse error.
    pub fn reserve(&mut self, n: usize) -> &mut [u8] {
        let needed = self.top.saturating_add(n);
        if needed > self.data.len() {
            self.grow_to(needed);
        }
        let start = self.top;
        self.top = needed;
        &mut self.data[start..needed]
    }

    /// Pushes a single byte.
    pub fn push(&mut self, byte: u8) {
        self.reserve(1)[0] = byte;
    }

    /// Pops `n` bytes off the top and returns them.
    ///
    /// The returned slice stays readable until the next `reserve`.
    pub fn release(&mut self, n: usize) -> &[u8] {
        debug_assert!(n <= self.top, "release({n}) exceeds stack depth {}", self.top);
        let n = n.min(self.top);
        self.top -= n;
        &self.data[self.top..self.top + n]
    }

    /// Rolls the stack back to `height`, discarding everything pushed since.
    pub fn truncate(&mut self, height: usize) {
        if height < self.top {
            self.top = height;
        }
    }

    fn grow_to(&mut self, needed: usize) {
        let mut capacity = if self.data.is_empty() {
            self.initial_capacity
        } else {
            self.data.len()
        };
        while capacity < needed {
            capacity = capacity.saturating_add(capacity >> 1).max(capacity + 1);
        }
        debug!(
            "Scratch buffer grows from {} to {} bytes",
            self.data.len(),
            capacity
        );
        self.data.resize(capacity, 0);
    }
}
