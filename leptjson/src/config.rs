// SPDX-License-Identifier: Apache-2.0

//! Parser configuration.

use crate::scratch_buffer::DEFAULT_INITIAL_CAPACITY;

// Compile-time check that the default scratch allocation is usable
const _: () = assert!(
    DEFAULT_INITIAL_CAPACITY > 0,
    "DEFAULT_INITIAL_CAPACITY must be non-zero"
);

/// Tunables for a [`crate::Parser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Bytes allocated for the scratch stack on its first use.
    /// The stack grows by 1.5x from there. Zero is treated as one.
    pub initial_scratch_capacity: usize,
}

impl ParserConfig {
    pub const fn new() -> Self {
        Self {
            initial_scratch_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }

    pub const fn with_initial_scratch_capacity(mut self, capacity: usize) -> Self {
        self.initial_scratch_capacity = capacity;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity() {
        assert_eq!(ParserConfig::default().initial_scratch_capacity, 256);
    }

    #[test]
    fn test_builder() {
        let config = ParserConfig::new().with_initial_scratch_capacity(8);
        assert_eq!(config.initial_scratch_capacity, 8);
    }
}
