//! # Memory Tests

/// Word buffer and memory port tests.
pub mod memory;
