//! Execute (EX) Stage.
//!
//! This module implements the third stage of the pipeline. It performs the following:
//! 1. **Forwarding:** Selects the freshest value of each source from EX/MEM, MEM/WB,
//!    or the register-file read made in decode.
//! 2. **Operand Selection:** Replaces operand B with the immediate when `alu_src_imm` is set.
//! 3. **Execution:** Runs the ALU, which also resolves branches and jumps.

use crate::core::pipeline::hazards::{self, ForwardingSignals};
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, MemWbEntry};
use crate::core::units::alu::Alu;

/// Result of the execute stage for one cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecuteOutput {
    /// Entry presented to the EX/MEM register.
    pub entry: ExMemEntry,
    /// Redirect target when a branch is taken or a jump executes.
    pub redirect: Option<u32>,
    /// Forwarding selects used this cycle.
    pub forwarding: ForwardingSignals,
}

/// Executes the execute stage.
///
/// All three latches are read as they stood at the start of the cycle.
///
/// # Arguments
///
/// * `id_ex` - Instruction being executed.
/// * `ex_mem` - One-cycle-older instruction, a forwarding source.
/// * `mem_wb` - Two-cycle-older instruction, a forwarding source.
pub fn execute_stage(id_ex: &IdExEntry, ex_mem: &ExMemEntry, mem_wb: &MemWbEntry) -> ExecuteOutput {
    let forwarding = hazards::forwarding_unit(id_ex, ex_mem, mem_wb);
    let (rs1_val, rs2_val) = hazards::forward_rs(id_ex, ex_mem, mem_wb, forwarding);

    let ctrl = id_ex.ctrl;
    let op_b = if ctrl.alu_src_imm { id_ex.imm as u32 } else { rs2_val };

    let out = Alu::execute(ctrl.alu_op, rs1_val, op_b, id_ex.pc, id_ex.imm);

    let redirect = (out.branch_taken && (ctrl.branch || ctrl.jump)).then_some(out.branch_target);

    ExecuteOutput {
        entry: ExMemEntry {
            pc: id_ex.pc,
            alu: out.result,
            store_data: rs2_val,
            rd: id_ex.regs.rd,
            ctrl,
        },
        redirect,
        forwarding,
    }
}
