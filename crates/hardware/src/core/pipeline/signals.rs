//! Pipeline control signals and operation types.
//!
//! This module defines the signals that steer an instruction through the
//! pipeline. It provides:
//! 1. **Operation Classification:** The ALU operation selected in decode.
//! 2. **Control Bundle:** Register-write, memory, operand-select, and control-flow flags.
//! 3. **Register Addresses:** The source and destination indices carried alongside.

/// ALU operation selected by the decoder.
///
/// Arithmetic, logic, and shift operations produce a data result. Branch
/// operations produce a taken flag and a target; jumps produce both a link
/// value and a target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// No operation; result 0, never taken. Carried by bubbles.
    #[default]
    Nop,

    /// Integer addition (also the address adder for loads and stores).
    Add,

    /// Integer subtraction.
    Sub,

    /// Bitwise AND.
    And,

    /// Bitwise OR.
    Or,

    /// Bitwise XOR.
    Xor,

    /// Set less than (signed).
    Slt,

    /// Shift left logical.
    Sll,

    /// Shift right logical.
    Srl,

    /// Shift right arithmetic.
    Sra,

    /// Branch if equal.
    Beq,

    /// Branch if not equal.
    Bne,

    /// Branch if less than (signed).
    Blt,

    /// Branch if greater or equal (signed).
    Bge,

    /// Jump and link (PC-relative).
    Jal,

    /// Jump and link register.
    Jalr,

    /// Load upper immediate.
    Lui,

    /// Add upper immediate to PC.
    Auipc,
}

impl AluOp {
    /// Returns `true` for the four conditional branch operations.
    pub const fn is_branch(self) -> bool {
        matches!(self, Self::Beq | Self::Bne | Self::Blt | Self::Bge)
    }

    /// Returns `true` for `Jal` and `Jalr`.
    pub const fn is_jump(self) -> bool {
        matches!(self, Self::Jal | Self::Jalr)
    }
}

/// Control signals generated by the decoder.
///
/// The all-false bundle with [`AluOp::Nop`] is the bubble: it writes no
/// register, touches no memory, and never redirects the PC.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ControlSignals {
    /// Enable write to the destination register.
    pub reg_write: bool,
    /// Enable memory read operation (load).
    pub mem_read: bool,
    /// Enable memory write operation (store).
    pub mem_write: bool,
    /// ALU operand B takes the immediate instead of `rs2`.
    pub alu_src_imm: bool,
    /// Instruction is a conditional branch.
    pub branch: bool,
    /// Instruction is an unconditional jump (`JAL`/`JALR`).
    pub jump: bool,
    /// Write-back value comes from memory rather than the ALU.
    pub mem_to_reg: bool,
    /// ALU operation to perform.
    pub alu_op: AluOp,
}

impl ControlSignals {
    /// The bubble: every control line deasserted.
    pub const BUBBLE: Self = Self {
        reg_write: false,
        mem_read: false,
        mem_write: false,
        alu_src_imm: false,
        branch: false,
        jump: false,
        mem_to_reg: false,
        alu_op: AluOp::Nop,
    };

    /// Returns `true` if these signals describe a bubble.
    pub fn is_bubble(&self) -> bool {
        *self == Self::BUBBLE
    }
}

/// Register indices extracted from an instruction.
///
/// All three fields are extracted for every format; fields that a format
/// does not use hold whatever bits occupy that position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RegisterAddress {
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Destination register index.
    pub rd: usize,
}
