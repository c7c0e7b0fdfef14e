//! Writeback (WB) Stage.
//!
//! Selects the value to commit (memory data for loads, the ALU result
//! otherwise) and drives the register file's write port. The port is also
//! visible to decode in the same cycle through the register-file bypass.

use crate::core::arch::gpr::WritePort;
use crate::core::pipeline::latches::MemWbEntry;

/// Executes the writeback stage of the pipeline.
///
/// # Arguments
///
/// * `mem_wb` - Current MEM/WB latch contents.
///
/// # Returns
///
/// The register write port for this cycle. The register file ignores the
/// port when `rd` is 0.
pub const fn wb_stage(mem_wb: &MemWbEntry) -> WritePort {
    WritePort { enable: mem_wb.ctrl.reg_write, rd: mem_wb.rd, data: mem_wb.wb_value() }
}
