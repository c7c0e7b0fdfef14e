//! ALU arithmetic operations.
//!
//! Addition and subtraction wrap modulo 2^32. The upper-immediate
//! operations take their operands from the immediate and the PC rather
//! than from the register sources.

use crate::core::pipeline::signals::AluOp;

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `op`   - The ALU operation to perform (must be an arithmetic variant).
/// * `a`    - First operand.
/// * `b`    - Second operand.
/// * `pc`   - Instruction address, used by `Auipc`.
/// * `imm`  - Immediate, used by `Lui` and `Auipc`.
///
/// # Returns
///
/// The 32-bit result. Returns `0` for non-arithmetic opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32, pc: u32, imm: i32) -> u32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        AluOp::Lui => imm as u32,
        AluOp::Auipc => pc.wrapping_add_signed(imm),
        _ => 0,
    }
}
