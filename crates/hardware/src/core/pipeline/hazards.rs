//! Data Hazard Detection and Forwarding.
//!
//! This module implements the logic for maintaining pipeline consistency when data
//! dependencies exist between instructions. It provides:
//! 1. **Hazard Detection:** Identifies load-use hazards that require a one-cycle stall.
//! 2. **Operand Forwarding:** Resolves Read-After-Write (RAW) hazards by bypassing the
//!    register file from the EX/MEM and MEM/WB latches.

use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, MemWbEntry};
use crate::core::pipeline::signals::RegisterAddress;

/// Checks if a pipeline stall is needed due to a load-use data hazard.
///
/// A load-use hazard occurs when an instruction in the Decode (ID) stage depends on
/// data that is currently being loaded from memory by an instruction in the Execute (EX) stage.
/// The loaded value only exists after MEM, too late for EX/MEM forwarding.
///
/// Both `rs1` and `rs2` are compared even when the decoding instruction's format
/// has no such operand, so a few stalls are spurious but never wrong.
///
/// # Arguments
///
/// * `id_ex` - The ID/EX latch holding the instruction currently in execution.
/// * `decoded` - Register indices of the instruction being decoded.
///
/// # Returns
///
/// `true` if a stall is required to resolve the load-use hazard, `false` otherwise.
///
/// # Examples
///
/// ```ignore
/// // ID/EX stage: lw x1, 0(x2)    <- loads into x1 (in execute)
/// // IF/ID stage: add x3, x1, x4  <- uses x1 (in decode)
/// //
/// // This creates a load-use hazard requiring a 1-cycle stall
/// let stall_needed = need_stall_load_use(&id_ex, &decoded);
/// ```
pub const fn need_stall_load_use(id_ex: &IdExEntry, decoded: &RegisterAddress) -> bool {
    let rd = id_ex.regs.rd;
    id_ex.ctrl.mem_read && rd != 0 && (rd == decoded.rs1 || rd == decoded.rs2)
}

/// Source selected for one ALU operand.
///
/// The discriminants are the two-bit mux select encodings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ForwardSel {
    /// Value read from the register file in decode.
    #[default]
    None = 0b00,
    /// Write-back value of the MEM/WB latch.
    MemWb = 0b01,
    /// ALU result of the EX/MEM latch.
    ExMem = 0b10,
}

/// Forwarding selects for both ALU operands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ForwardingSignals {
    /// Select for operand A (`rs1`).
    pub forward_a: ForwardSel,
    /// Select for operand B (`rs2`).
    pub forward_b: ForwardSel,
}

/// Computes the forwarding selects for the instruction in EX.
///
/// EX/MEM has priority over MEM/WB because it holds the younger result.
/// A source of `x0` is never forwarded.
///
/// # Arguments
///
/// * `id_ex` - The instruction entering the ALU.
/// * `ex_mem` - One-cycle-older instruction.
/// * `mem_wb` - Two-cycle-older instruction.
pub const fn forwarding_unit(
    id_ex: &IdExEntry,
    ex_mem: &ExMemEntry,
    mem_wb: &MemWbEntry,
) -> ForwardingSignals {
    ForwardingSignals {
        forward_a: select(id_ex.regs.rs1, ex_mem, mem_wb),
        forward_b: select(id_ex.regs.rs2, ex_mem, mem_wb),
    }
}

const fn select(rs: usize, ex_mem: &ExMemEntry, mem_wb: &MemWbEntry) -> ForwardSel {
    if rs == 0 {
        ForwardSel::None
    } else if ex_mem.ctrl.reg_write && ex_mem.rd == rs {
        ForwardSel::ExMem
    } else if mem_wb.ctrl.reg_write && mem_wb.rd == rs {
        ForwardSel::MemWb
    } else {
        ForwardSel::None
    }
}

/// Resolves the forwarded operand values for the instruction in EX.
///
/// # Arguments
///
/// * `id_ex` - The ID/EX entry requiring forwarded register values.
/// * `ex_mem` - The EX/MEM latch containing one-cycle-old results.
/// * `mem_wb` - The MEM/WB latch containing two-cycle-old results.
/// * `fwd` - Selects from [`forwarding_unit`].
///
/// # Returns
///
/// A tuple `(rs1_val, rs2_val)` containing the most recent available register values.
pub const fn forward_rs(
    id_ex: &IdExEntry,
    ex_mem: &ExMemEntry,
    mem_wb: &MemWbEntry,
    fwd: ForwardingSignals,
) -> (u32, u32) {
    (
        forwarded_value(fwd.forward_a, id_ex.rv1, ex_mem, mem_wb),
        forwarded_value(fwd.forward_b, id_ex.rv2, ex_mem, mem_wb),
    )
}

const fn forwarded_value(
    sel: ForwardSel,
    reg_value: u32,
    ex_mem: &ExMemEntry,
    mem_wb: &MemWbEntry,
) -> u32 {
    match sel {
        ForwardSel::None => reg_value,
        ForwardSel::ExMem => ex_mem.alu,
        ForwardSel::MemWb => mem_wb.wb_value(),
    }
}
