//! Memory Access (MEM) Stage.
//!
//! Drives data memory from the EX/MEM latch. Loads and stores access whole
//! words at the ALU-computed address; instructions that do neither pass
//! through untouched.

use crate::core::pipeline::latches::{ExMemEntry, MemWbEntry};
use crate::soc::traits::{DataPort, DataRequest, MemWrite};

/// Executes the memory access stage.
///
/// # Arguments
///
/// * `ex_mem` - Current EX/MEM latch contents.
/// * `dmem` - Data memory. A store is applied immediately; no other
///   instruction touches data memory in the same cycle.
///
/// # Returns
///
/// The entry presented to the MEM/WB register and the write observation for
/// this cycle.
pub fn mem_stage<D: DataPort + ?Sized>(ex_mem: &ExMemEntry, dmem: &mut D) -> (MemWbEntry, MemWrite) {
    let req = DataRequest {
        read_enable: ex_mem.ctrl.mem_read,
        write_enable: ex_mem.ctrl.mem_write,
        addr: ex_mem.alu,
        data_in: ex_mem.store_data,
    };
    let resp = dmem.access(&req);

    let entry = MemWbEntry {
        pc: ex_mem.pc,
        alu: ex_mem.alu,
        load_data: resp.data_out,
        rd: ex_mem.rd,
        ctrl: ex_mem.ctrl,
    };

    (entry, resp.write)
}
