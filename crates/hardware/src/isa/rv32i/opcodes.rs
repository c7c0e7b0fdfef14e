//! RV32I major opcodes (bits 6-0).

/// Load instructions (`lw`).
pub const OP_LOAD: u32 = 0b000_0011;
/// Register-immediate ALU instructions (`addi`, `slti`, `slli`, ...).
pub const OP_IMM: u32 = 0b001_0011;
/// Add upper immediate to PC.
pub const OP_AUIPC: u32 = 0b001_0111;
/// Store instructions (`sw`).
pub const OP_STORE: u32 = 0b010_0011;
/// Register-register ALU instructions (`add`, `sub`, ...).
pub const OP_REG: u32 = 0b011_0011;
/// Load upper immediate.
pub const OP_LUI: u32 = 0b011_0111;
/// Conditional branches.
pub const OP_BRANCH: u32 = 0b110_0011;
/// Jump and link register.
pub const OP_JALR: u32 = 0b110_0111;
/// Jump and link.
pub const OP_JAL: u32 = 0b110_1111;
