//! Common types and constants shared across the pipeline simulator.
//!
//! This module provides the small building blocks every other component leans on:
//! 1. **Constants:** Word size, register count, memory defaults, and the halt word.
//! 2. **Error Handling:** The simulator-level error type and result alias.

/// Common constants used throughout the simulator.
pub mod constants;

/// Simulator error type and result alias.
pub mod error;

pub use constants::{HALT_WORD, INSTRUCTION_BYTES, NOP, NUM_REGS};
pub use error::{SimError, SimResult};
