//! Main Execution Loop.
//!
//! This module implements one clock cycle of the core. It performs the following:
//! 1. **Evaluation:** Runs every stage against the latches as they stood at the
//!    start of the cycle, back to front.
//! 2. **Hazard Resolution:** Combines the load-use stall and the EX redirect into
//!    per-register stall and flush controls.
//! 3. **Commit:** Clocks the PC, the four pipeline registers, and the register file.
//! 4. **Observability:** Reports the cycle's observable outputs and traces them.

use std::fmt;

use tracing::{debug, trace};

use super::Cpu;
use crate::common::constants::{HALT_WORD, INSTRUCTION_BYTES};
use crate::core::arch::gpr::WritePort;
use crate::core::pipeline::hazards::{self, ForwardSel, ForwardingSignals};
use crate::core::pipeline::latches::{IdExEntry, LatchControl};
use crate::core::pipeline::signals::ControlSignals;
use crate::core::pipeline::stages;
use crate::isa::disasm::disassemble;
use crate::soc::traits::{DataPort, InstructionPort, MemWrite};

/// Observable outputs of one clock cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// PC fetched from this cycle.
    pub pc: u32,
    /// Word fetched this cycle.
    pub instruction: u32,
    /// Register write performed by writeback.
    pub writeback: WritePort,
    /// Data memory write observation.
    pub mem_write: MemWrite,
    /// Control signals of the instruction that left the pipeline through writeback.
    pub retired: ControlSignals,
    /// A load-use stall held PC and IF/ID and flushed ID/EX.
    pub stall: bool,
    /// Target of a taken branch or jump resolved in EX; IF/ID and ID/EX were flushed.
    pub redirect: Option<u32>,
    /// The redirect came from a conditional branch rather than a jump.
    pub branch_taken: bool,
    /// Forwarding selects used by EX.
    pub forwarding: ForwardingSignals,
}

impl CycleReport {
    /// IF/ID was flushed this cycle.
    pub const fn flush_if_id(&self) -> bool {
        self.redirect.is_some()
    }

    /// ID/EX was flushed this cycle, by a redirect or a stall.
    pub const fn flush_id_ex(&self) -> bool {
        self.redirect.is_some() || self.stall
    }
}

impl Cpu {
    /// Advances the core by one clock cycle.
    ///
    /// Every stage reads only state committed at the end of the previous cycle;
    /// nothing is mutated until all next values are known. A redirect takes
    /// priority over a load-use stall for the PC, and a flush takes priority
    /// over a stall for IF/ID.
    ///
    /// Fetching the halt word holds the PC on it, so nothing past the halt
    /// enters the pipeline while older instructions drain. Only a redirect
    /// from an older branch or jump moves the PC off a halt word fetched on
    /// the wrong path.
    ///
    /// # Arguments
    ///
    /// * `imem` - Instruction memory.
    /// * `dmem` - Data memory; the memory stage's store is applied during the call.
    ///
    /// # Returns
    ///
    /// The cycle's observable outputs.
    pub fn tick<I, D>(&mut self, imem: &I, dmem: &mut D) -> CycleReport
    where
        I: InstructionPort + ?Sized,
        D: DataPort + ?Sized,
    {
        if self.trace {
            debug!("{}", self.pipeline_snapshot());
        }

        let if_id = *self.if_id.output();
        let id_ex = *self.id_ex.output();
        let ex_mem = *self.ex_mem.output();
        let mem_wb = *self.mem_wb.output();

        let wb_port = stages::wb_stage(&mem_wb);
        let (mem_wb_next, mem_write) = stages::mem_stage(&ex_mem, dmem);
        let exec = stages::execute_stage(&id_ex, &ex_mem, &mem_wb);
        let id_ex_next = stages::decode_stage(&if_id, &self.regs, &wb_port);
        let stall = hazards::need_stall_load_use(&id_ex, &id_ex_next.regs);
        let fetched = stages::fetch_stage(self.pc, imem);

        trace!(pc = self.pc, inst = fetched.inst, "fetch {}", disassemble(fetched.inst));

        let redirect = exec.redirect;
        let flush = redirect.is_some();

        if stall {
            debug!(
                pc = if_id.pc,
                rd = id_ex.regs.rd,
                "load-use stall: {} waits on load in EX",
                disassemble(if_id.inst)
            );
        }
        if let Some(target) = redirect {
            debug!(pc = id_ex.pc, target, "control flush: IF/ID and ID/EX squashed");
        }
        log_forwarding(&id_ex, exec.forwarding);

        let halt_fetched = fetched.inst == HALT_WORD;
        let next_pc = match redirect {
            Some(target) => target,
            None if stall || halt_fetched => self.pc,
            None => self.pc.wrapping_add(INSTRUCTION_BYTES),
        };

        self.if_id.clock(LatchControl { stall, flush }, fetched);
        self.id_ex.clock(LatchControl { stall: false, flush: flush || stall }, id_ex_next);
        self.ex_mem.clock(LatchControl::PASS, exec.entry);
        self.mem_wb.clock(LatchControl::PASS, mem_wb_next);
        self.regs.commit(&wb_port);

        let report = CycleReport {
            pc: fetched.pc,
            instruction: fetched.inst,
            writeback: wb_port,
            mem_write,
            retired: mem_wb.ctrl,
            stall,
            redirect,
            branch_taken: redirect.is_some() && id_ex.ctrl.branch,
            forwarding: exec.forwarding,
        };
        self.pc = next_pc;
        report
    }

    /// Returns a view of the PC and the four latches that renders as one
    /// line per latch.
    pub const fn pipeline_snapshot(&self) -> PipelineSnapshot<'_> {
        PipelineSnapshot { cpu: self }
    }
}

/// Multi-line rendering of the PC and the four pipeline latches.
#[derive(Clone, Copy, Debug)]
pub struct PipelineSnapshot<'a> {
    cpu: &'a Cpu,
}

impl fmt::Display for PipelineSnapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cpu = self.cpu;
        writeln!(f, "PC     {:#010x}", cpu.pc)?;

        let if_id = cpu.if_id();
        writeln!(f, "IF/ID  pc={:#010x} {}", if_id.pc, disassemble(if_id.inst))?;

        let id_ex = cpu.id_ex();
        writeln!(
            f,
            "ID/EX  pc={:#010x} {:?} rd=x{} rs1=x{} rs2=x{} imm={}",
            id_ex.pc, id_ex.ctrl.alu_op, id_ex.regs.rd, id_ex.regs.rs1, id_ex.regs.rs2, id_ex.imm
        )?;

        let ex_mem = cpu.ex_mem();
        writeln!(
            f,
            "EX/MEM pc={:#010x} {:?} rd=x{} alu={:#010x}",
            ex_mem.pc, ex_mem.ctrl.alu_op, ex_mem.rd, ex_mem.alu
        )?;

        let mem_wb = cpu.mem_wb();
        write!(
            f,
            "MEM/WB pc={:#010x} {:?} rd=x{} value={:#010x}",
            mem_wb.pc,
            mem_wb.ctrl.alu_op,
            mem_wb.rd,
            mem_wb.wb_value()
        )
    }
}

fn log_forwarding(id_ex: &IdExEntry, fwd: ForwardingSignals) {
    if fwd.forward_a != ForwardSel::None {
        debug!(rs = id_ex.regs.rs1, source = ?fwd.forward_a, "forward operand A");
    }
    if fwd.forward_b != ForwardSel::None {
        debug!(rs = id_ex.regs.rs2, source = ?fwd.forward_b, "forward operand B");
    }
}
