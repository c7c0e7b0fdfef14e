//! Execution units.
//!
//! This module contains the combinational units used by the Execute stage:
//! the integer ALU and the branch resolution unit.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit for conditional branches and jumps.
pub mod bru;
