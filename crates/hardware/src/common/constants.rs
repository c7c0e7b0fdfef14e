//! Global Simulator Constants.
//!
//! This module defines the constants shared across the simulator. It includes:
//! 1. **Instruction Constants:** Instruction width and the canonical NOP encoding.
//! 2. **Register Constants:** Size of the integer register file.
//! 3. **Memory Constants:** Word addressing shift and default memory depth.
//! 4. **Simulation Constants:** Halt sentinel and cycle limits.

/// Size of an RV32I instruction in bytes.
pub const INSTRUCTION_BYTES: u32 = 4;

/// Number of integer registers (`x0`-`x31`).
pub const NUM_REGS: usize = 32;

/// Shift converting a byte address into a word index.
pub const WORD_SHIFT: u32 = 2;

/// Default depth, in 32-bit words, of instruction and data memory.
pub const DEFAULT_MEM_WORDS: usize = 1024;

/// Fetched word that stops a simulation run.
///
/// The all-zero word is not a valid RV32I encoding, so programs end by running
/// off into zero-initialized instruction memory.
pub const HALT_WORD: u32 = 0;

/// Canonical NOP encoding (`addi x0, x0, 0`).
pub const NOP: u32 = 0x0000_0013;

/// Default upper bound on simulated cycles for a single run.
pub const DEFAULT_MAX_CYCLES: u64 = 1_000_000;
