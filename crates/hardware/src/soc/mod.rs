//! Memory subsystem.
//!
//! The core sees two independent word-addressed memories through the
//! port traits defined here.

/// Instruction and data memory implementations.
pub mod memory;

/// Memory port trait definitions.
pub mod traits;

pub use memory::{DataMemory, InstructionMemory};
pub use traits::{DataPort, InstructionPort, MemWrite};
