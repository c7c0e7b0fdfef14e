//! RISC-V architectural state.
//!
//! The pipeline's only architectural storage besides the PC is the integer
//! register file.

/// General-Purpose Register file implementation.
pub mod gpr;

pub use gpr::{Gpr, WritePort};
