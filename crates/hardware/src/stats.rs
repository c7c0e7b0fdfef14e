//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the pipeline simulator. It provides:
//! 1. **Cycle and CPI:** Total cycles, retired instructions, and derived metrics.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, jump).
//! 3. **Hazards:** Load-use stall cycles, control flushes, and forwarding activity.

use std::fmt;
use std::time::Instant;

use crate::core::cpu::CycleReport;
use crate::core::pipeline::hazards::ForwardSel;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions that left the pipeline through writeback.
    pub instructions_retired: u64,

    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of conditional branch instructions retired.
    pub inst_branch: u64,
    /// Count of jump instructions (`jal`/`jalr`) retired.
    pub inst_jump: u64,
    /// Count of ALU instructions (including `lui`/`auipc`) retired.
    pub inst_alu: u64,

    /// Conditional branches resolved as taken.
    pub branches_taken: u64,
    /// Cycles stalled on a load-use hazard.
    pub stalls_data: u64,
    /// Cycles in which a taken branch or jump flushed IF/ID and ID/EX.
    pub flushes_control: u64,
    /// Operands forwarded from EX/MEM.
    pub forwards_ex_mem: u64,
    /// Operands forwarded from MEM/WB.
    pub forwards_mem_wb: u64,
    /// Data memory writes.
    pub mem_writes: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_jump: 0,
            inst_alu: 0,
            branches_taken: 0,
            stalls_data: 0,
            flushes_control: 0,
            forwards_ex_mem: 0,
            forwards_mem_wb: 0,
            mem_writes: 0,
        }
    }
}

impl SimStats {
    /// Creates an empty statistics record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulates one cycle's report.
    pub fn record(&mut self, report: &CycleReport) {
        self.cycles += 1;

        let retired = report.retired;
        if !retired.is_bubble() {
            self.instructions_retired += 1;
            if retired.mem_read {
                self.inst_load += 1;
            } else if retired.mem_write {
                self.inst_store += 1;
            } else if retired.branch {
                self.inst_branch += 1;
            } else if retired.jump {
                self.inst_jump += 1;
            } else {
                self.inst_alu += 1;
            }
        }

        if report.stall {
            self.stalls_data += 1;
        }
        if report.redirect.is_some() {
            self.flushes_control += 1;
        }
        if report.branch_taken {
            self.branches_taken += 1;
        }
        for sel in [report.forwarding.forward_a, report.forwarding.forward_b] {
            match sel {
                ForwardSel::ExMem => self.forwards_ex_mem += 1,
                ForwardSel::MemWb => self.forwards_mem_wb += 1,
                ForwardSel::None => {}
            }
        }
        if report.mem_write.wrote {
            self.mem_writes += 1;
        }
    }

    /// Cycles per retired instruction, or 0 when nothing retired.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Prints the statistics summary to stdout.
    pub fn print(&self) {
        print!("{self}");
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.start_time.elapsed().as_secs_f64();
        writeln!(f, "==========================================================")?;
        writeln!(f, "RV32I PIPELINE SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "host_seconds             {seconds:.4} s")?;
        writeln!(f, "sim_cycles               {}", self.cycles)?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "sim_cpi                  {:.4}", self.cpi())?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        writeln!(f, "  op.alu                 {}", self.inst_alu)?;
        writeln!(f, "  op.load                {}", self.inst_load)?;
        writeln!(f, "  op.store               {}", self.inst_store)?;
        writeln!(f, "  op.branch              {} ({} taken)", self.inst_branch, self.branches_taken)?;
        writeln!(f, "  op.jump                {}", self.inst_jump)?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "HAZARDS")?;
        writeln!(f, "  stall.load_use         {}", self.stalls_data)?;
        writeln!(f, "  flush.control          {}", self.flushes_control)?;
        writeln!(f, "  forward.ex_mem         {}", self.forwards_ex_mem)?;
        writeln!(f, "  forward.mem_wb         {}", self.forwards_mem_wb)?;
        writeln!(f, "  mem.writes             {}", self.mem_writes)?;
        writeln!(f, "==========================================================")
    }
}
