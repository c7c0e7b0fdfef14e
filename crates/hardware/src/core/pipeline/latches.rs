//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entry types carried between the five stages:
//! Fetch → Decode → Execute → Memory → Writeback.
//!
//! 1. **Instruction Flow:** One entry type per inter-stage boundary.
//! 2. **Register Semantics:** A generic clocked register applying the flush/stall rule.

use crate::core::pipeline::signals::{ControlSignals, RegisterAddress};
use crate::core::pipeline::traits::PipelineLatch;

/// Entry in the IF/ID pipeline latch (Fetch to Decode stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IfIdEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
}

/// Entry in the ID/EX pipeline latch (Decode to Execute stage).
///
/// Contains decoded instruction information, including register indices,
/// register-file values, the immediate, and control signals.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IdExEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Value read from the rs1 register (after write-back bypass).
    pub rv1: u32,
    /// Value read from the rs2 register (after write-back bypass).
    pub rv2: u32,
    /// Sign-extended immediate value.
    pub imm: i32,
    /// Source and destination register indices.
    pub regs: RegisterAddress,
    /// Control signals for downstream pipeline stages.
    pub ctrl: ControlSignals,
}

/// Entry in the EX/MEM pipeline latch (Execute to Memory stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct ExMemEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// ALU result: data value, effective address, or link address.
    pub alu: u32,
    /// Data to be stored (forwarded rs2).
    pub store_data: u32,
    /// Destination register index (rd).
    pub rd: usize,
    /// Control signals for downstream pipeline stages.
    pub ctrl: ControlSignals,
}

/// Entry in the MEM/WB pipeline latch (Memory to Writeback stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct MemWbEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// ALU computation result (for non-load instructions).
    pub alu: u32,
    /// Data loaded from memory (for load instructions).
    pub load_data: u32,
    /// Destination register index (rd).
    pub rd: usize,
    /// Control signals for the writeback stage.
    pub ctrl: ControlSignals,
}

impl MemWbEntry {
    /// Value this entry writes back: loaded data when `mem_to_reg`, otherwise the ALU result.
    ///
    /// The MEM/WB forwarding path uses the same selection.
    pub const fn wb_value(&self) -> u32 {
        if self.ctrl.mem_to_reg { self.load_data } else { self.alu }
    }
}

impl PipelineLatch for IfIdEntry {
    fn is_bubble(&self) -> bool {
        *self == Self::default()
    }
}

impl PipelineLatch for IdExEntry {
    fn is_bubble(&self) -> bool {
        self.ctrl.is_bubble()
    }
}

impl PipelineLatch for ExMemEntry {
    fn is_bubble(&self) -> bool {
        self.ctrl.is_bubble()
    }
}

impl PipelineLatch for MemWbEntry {
    fn is_bubble(&self) -> bool {
        self.ctrl.is_bubble()
    }
}

/// Per-cycle control inputs of a pipeline register.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LatchControl {
    /// Hold the current value.
    pub stall: bool,
    /// Load the bubble. Dominates `stall`.
    pub flush: bool,
}

impl LatchControl {
    /// Neither stalled nor flushed: the register takes its input.
    pub const PASS: Self = Self { stall: false, flush: false };
}

/// A clocked pipeline register.
///
/// On each clock edge the register loads the bubble when flushed, keeps its
/// value when stalled, and otherwise takes its input. It resets to the bubble.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipelineRegister<T> {
    current: T,
}

impl<T: PipelineLatch> PipelineRegister<T> {
    /// Creates a register holding the bubble.
    pub fn new() -> Self {
        Self { current: T::bubble() }
    }

    /// Returns the value latched on the previous clock edge.
    pub const fn output(&self) -> &T {
        &self.current
    }

    /// Computes the value the register would hold after the next edge.
    ///
    /// # Arguments
    ///
    /// * `ctrl` - Stall and flush inputs for this cycle.
    /// * `input` - Value presented by the upstream stage.
    pub fn next_state(&self, ctrl: LatchControl, input: T) -> T {
        if ctrl.flush {
            T::bubble()
        } else if ctrl.stall {
            self.current
        } else {
            input
        }
    }

    /// Applies one clock edge.
    pub fn clock(&mut self, ctrl: LatchControl, input: T) {
        self.current = self.next_state(ctrl, input);
    }

    /// Forces the register back to the bubble.
    pub fn reset(&mut self) {
        self.current = T::bubble();
    }
}
