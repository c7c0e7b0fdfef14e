//! Branch Resolution Unit (BRU).
//!
//! Resolves conditional branches and jumps in the Execute stage. There is no
//! prediction: fetch always continues at `pc + 4`, and every taken branch or
//! jump discovered here costs a two-instruction flush.

use crate::common::constants::INSTRUCTION_BYTES;
use crate::core::pipeline::signals::AluOp;

/// Mask clearing bit 0 of a `jalr` target.
const JALR_TARGET_MASK: u32 = !1;

/// Outcome of resolving a control-flow operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BranchOutcome {
    /// The PC is redirected to `target`.
    pub taken: bool,
    /// Redirect target.
    pub target: u32,
    /// Link value written to `rd` (`pc + 4` for jumps, 0 for branches).
    pub link: u32,
}

/// Branch resolution unit.
#[derive(Debug)]
pub struct BranchUnit;

impl BranchUnit {
    /// Evaluates a branch condition.
    ///
    /// `Beq`/`Bne` compare for equality; `Blt`/`Bge` compare as signed
    /// integers. Non-branch operations never take.
    pub const fn condition(op: AluOp, a: u32, b: u32) -> bool {
        match op {
            AluOp::Beq => a == b,
            AluOp::Bne => a != b,
            AluOp::Blt => (a as i32) < (b as i32),
            AluOp::Bge => (a as i32) >= (b as i32),
            _ => false,
        }
    }

    /// Resolves a branch or jump.
    ///
    /// # Arguments
    ///
    /// * `op`   - Branch or jump operation.
    /// * `src1` - Forwarded `rs1` (base register for `jalr`).
    /// * `src2` - Forwarded `rs2` (comparison operand for branches).
    /// * `pc`   - Address of the instruction.
    /// * `imm`  - Sign-extended offset.
    ///
    /// # Returns
    ///
    /// The taken flag, the target, and the link value. Non-control
    /// operations resolve to the default (not taken) outcome.
    pub const fn resolve(op: AluOp, src1: u32, src2: u32, pc: u32, imm: i32) -> BranchOutcome {
        let link = pc.wrapping_add(INSTRUCTION_BYTES);
        match op {
            _ if op.is_branch() => BranchOutcome {
                taken: Self::condition(op, src1, src2),
                target: pc.wrapping_add_signed(imm),
                link: 0,
            },
            AluOp::Jal => BranchOutcome { taken: true, target: pc.wrapping_add_signed(imm), link },
            AluOp::Jalr => BranchOutcome {
                taken: true,
                target: src1.wrapping_add_signed(imm) & JALR_TARGET_MASK,
                link,
            },
            _ => BranchOutcome { taken: false, target: 0, link: 0 },
        }
    }
}
