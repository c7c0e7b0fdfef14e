//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage. Besides
//! data operations it evaluates control flow: branch and jump operations are
//! handed to the branch resolution unit, and the ALU reports its outcome.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Lui, Auipc
//! - [`logic`]:      Or, And, Xor, Slt
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer arithmetic operations (add, subtract, upper immediates).
pub mod arithmetic;

/// Bitwise logical and comparison operations (or, and, xor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::core::pipeline::signals::AluOp;
use crate::core::units::bru::BranchUnit;

/// Result of one ALU evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AluOutput {
    /// Data result: computed value, effective address, or link address (`pc + 4`).
    pub result: u32,
    /// The instruction redirects the PC.
    pub branch_taken: bool,
    /// Redirect target. Meaningful for branch and jump operations only.
    pub branch_target: u32,
}

/// Arithmetic Logic Unit (ALU) for integer operations.
///
/// Pure and combinational: the same inputs always give the same output.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op`   - The ALU operation to perform
    /// * `src1` - First operand (forwarded `rs1`)
    /// * `src2` - Second operand (forwarded `rs2` or the immediate)
    /// * `pc`   - Address of the instruction
    /// * `imm`  - Sign-extended immediate
    ///
    /// # Returns
    ///
    /// The data result plus the taken flag and redirect target.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvpipe_core::core::units::alu::Alu;
    /// use rvpipe_core::core::pipeline::signals::AluOp;
    ///
    /// // Wrapping addition
    /// let out = Alu::execute(AluOp::Add, 0xFFFF_FFFF, 1, 0, 0);
    /// assert_eq!(out.result, 0);
    ///
    /// // Signed comparison
    /// let out = Alu::execute(AluOp::Slt, -5_i32 as u32, 10, 0, 0);
    /// assert_eq!(out.result, 1);
    ///
    /// // Taken branch
    /// let out = Alu::execute(AluOp::Beq, 7, 7, 0x100, -8);
    /// assert!(out.branch_taken);
    /// assert_eq!(out.branch_target, 0xF8);
    /// ```
    pub const fn execute(op: AluOp, src1: u32, src2: u32, pc: u32, imm: i32) -> AluOutput {
        let result = match op {
            AluOp::Add | AluOp::Sub | AluOp::Lui | AluOp::Auipc => {
                arithmetic::execute(op, src1, src2, pc, imm)
            }

            AluOp::Or | AluOp::And | AluOp::Xor | AluOp::Slt => logic::execute(op, src1, src2),

            AluOp::Sll | AluOp::Srl | AluOp::Sra => shifts::execute(op, src1, src2),

            AluOp::Beq
            | AluOp::Bne
            | AluOp::Blt
            | AluOp::Bge
            | AluOp::Jal
            | AluOp::Jalr => {
                let outcome = BranchUnit::resolve(op, src1, src2, pc, imm);
                return AluOutput {
                    result: outcome.link,
                    branch_taken: outcome.taken,
                    branch_target: outcome.target,
                };
            }

            AluOp::Nop => 0,
        };

        AluOutput { result, branch_taken: false, branch_target: 0 }
    }
}
