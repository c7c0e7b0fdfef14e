//! Core processor implementation.
//!
//! This module contains the five-stage pipeline core: architectural state,
//! the pipeline latches and stages, the execution units, and the orchestrator
//! that clocks them.

/// Architectural state (integer register file).
pub mod arch;

/// CPU core state and per-cycle execution.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, hazards, signals).
pub mod pipeline;

/// Execution units (ALU, branch resolution).
pub mod units;

pub use self::cpu::Cpu;
