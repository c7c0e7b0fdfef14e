//! RV32I Function Codes (funct7).
//!
//! The `funct7` field (bits 31-25) selects the alternate encoding of
//! `add`/`sub` and the logical/arithmetic right shifts. Only bit 30 of the
//! instruction (bit 5 of `funct7`) carries meaning in the base ISA.

/// Default encoding (`add`, `srl`, `slli`, ...).
pub const DEFAULT: u32 = 0b000_0000;
/// Subtract.
pub const SUB: u32 = 0b010_0000;
/// Shift Right Arithmetic.
pub const SRA: u32 = 0b010_0000;
