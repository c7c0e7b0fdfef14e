//! Instruction Fetch (IF) Stage.
//!
//! Reads the word at the current PC from instruction memory. There is no
//! branch prediction: the next sequential PC is always `pc + 4`, and the
//! orchestrator decides whether the PC advances, holds, or is redirected.

use crate::core::pipeline::latches::IfIdEntry;
use crate::soc::traits::InstructionPort;

/// Executes the instruction fetch stage.
///
/// # Arguments
///
/// * `pc` - Current program counter.
/// * `imem` - Instruction memory; reads are combinational.
///
/// # Returns
///
/// The entry presented to the IF/ID register.
pub fn fetch_stage<I: InstructionPort + ?Sized>(pc: u32, imem: &I) -> IfIdEntry {
    IfIdEntry { pc, inst: imem.fetch(pc) }
}
