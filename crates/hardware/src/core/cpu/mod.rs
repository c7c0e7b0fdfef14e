//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which holds the entire
//! processor state. It coordinates the following:
//! 1. **State Management:** Maintains the register file and program counter.
//! 2. **Pipeline Control:** Owns the four clocked inter-stage registers.
//!
//! The per-cycle step lives in [`execution`].

/// Per-cycle pipeline orchestration.
pub mod execution;

use crate::core::arch::gpr::Gpr;
use crate::core::pipeline::latches::{
    ExMemEntry, IdExEntry, IfIdEntry, MemWbEntry, PipelineRegister,
};
use crate::core::pipeline::traits::PipelineLatch;

pub use self::execution::{CycleReport, PipelineSnapshot};

/// Main CPU structure containing all processor state.
///
/// Memories are not owned by the core; they are passed to [`Cpu::tick`] each cycle.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// Program Counter of the next fetch.
    pub pc: u32,
    /// Integer register file.
    pub regs: Gpr,
    /// Emit a pipeline snapshot at `debug` level every cycle.
    pub trace: bool,

    pub(crate) if_id: PipelineRegister<IfIdEntry>,
    pub(crate) id_ex: PipelineRegister<IdExEntry>,
    pub(crate) ex_mem: PipelineRegister<ExMemEntry>,
    pub(crate) mem_wb: PipelineRegister<MemWbEntry>,
}

impl Cpu {
    /// Creates a core in its reset state: zeroed registers and all latches
    /// holding bubbles.
    ///
    /// # Arguments
    ///
    /// * `start_pc` - Address of the first fetch.
    pub fn new(start_pc: u32) -> Self {
        Self {
            pc: start_pc,
            regs: Gpr::new(),
            trace: false,
            if_id: PipelineRegister::new(),
            id_ex: PipelineRegister::new(),
            ex_mem: PipelineRegister::new(),
            mem_wb: PipelineRegister::new(),
        }
    }

    /// Returns the core to its reset state with the PC at `start_pc`.
    pub fn reset(&mut self, start_pc: u32) {
        self.pc = start_pc;
        self.regs = Gpr::new();
        self.if_id.reset();
        self.id_ex.reset();
        self.ex_mem.reset();
        self.mem_wb.reset();
    }

    /// Current IF/ID latch contents.
    pub const fn if_id(&self) -> &IfIdEntry {
        self.if_id.output()
    }

    /// Current ID/EX latch contents.
    pub const fn id_ex(&self) -> &IdExEntry {
        self.id_ex.output()
    }

    /// Current EX/MEM latch contents.
    pub const fn ex_mem(&self) -> &ExMemEntry {
        self.ex_mem.output()
    }

    /// Current MEM/WB latch contents.
    pub const fn mem_wb(&self) -> &MemWbEntry {
        self.mem_wb.output()
    }

    /// Returns `true` when ID/EX, EX/MEM and MEM/WB all hold bubbles, so no
    /// instruction past fetch can still change state.
    pub fn is_drained(&self) -> bool {
        self.id_ex().is_bubble() && self.ex_mem().is_bubble() && self.mem_wb().is_bubble()
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(0)
    }
}
