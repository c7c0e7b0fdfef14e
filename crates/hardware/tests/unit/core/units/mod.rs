//! # Execution Unit Tests

/// ALU operation tests.
pub mod alu;

/// Branch resolution tests.
pub mod bru;
