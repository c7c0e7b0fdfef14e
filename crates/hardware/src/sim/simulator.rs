//! Simulator: owns the core and both memories side by side.
//!
//! The simulator is the harness around the pipeline. It clocks the core,
//! watches for the halt word, enforces the cycle budget, keeps a log of data
//! memory writes, and checks the final memory against a reference.

use tracing::{debug, info};

use crate::common::constants::HALT_WORD;
use crate::common::error::{SimError, SimResult};
use crate::config::Config;
use crate::core::Cpu;
use crate::core::cpu::CycleReport;
use crate::soc::{DataMemory, InstructionMemory, MemWrite};
use crate::stats::SimStats;

/// Outcome of a completed run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Cycles simulated.
    pub cycles: u64,
    /// Instructions retired.
    pub retired: u64,
}

/// Top-level simulator: core state plus instruction and data memory.
#[derive(Debug)]
pub struct Simulator {
    /// Pipeline core.
    pub cpu: Cpu,
    /// Instruction memory.
    pub imem: InstructionMemory,
    /// Data memory.
    pub dmem: DataMemory,
    /// Statistics accumulated over every tick.
    pub stats: SimStats,
    max_cycles: u64,
    drain_on_halt: bool,
    halted: bool,
    writes: Vec<MemWrite>,
}

impl Simulator {
    /// Creates a simulator with `image` loaded into instruction memory.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ImageTooLarge`] if the image exceeds the configured
    /// instruction memory.
    pub fn new(config: &Config, image: &[u32]) -> SimResult<Self> {
        let imem = InstructionMemory::with_image(config.memory.imem_words, image)?;
        let mut cpu = Cpu::new(config.general.start_pc);
        cpu.trace = config.general.trace_instructions;

        debug!(
            words = image.len(),
            imem_words = imem.capacity(),
            dmem_words = config.memory.dmem_words,
            "simulator initialized"
        );

        Ok(Self {
            cpu,
            imem,
            dmem: DataMemory::new(config.memory.dmem_words),
            stats: SimStats::new(),
            max_cycles: config.general.max_cycles,
            drain_on_halt: config.general.drain_on_halt,
            halted: false,
            writes: Vec::new(),
        })
    }

    /// Preloads data memory from address 0.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ImageTooLarge`] if the image exceeds data memory.
    pub fn load_data(&mut self, image: &[u32]) -> SimResult<()> {
        self.dmem.load(image)
    }

    /// Advances the simulation by one clock cycle.
    ///
    /// Ticking after the halt condition keeps clocking the core; the halt
    /// flag stays set.
    pub fn tick(&mut self) -> CycleReport {
        let report = self.cpu.tick(&self.imem, &mut self.dmem);
        self.stats.record(&report);

        if report.mem_write.wrote {
            self.writes.push(report.mem_write);
        }

        if report.instruction == HALT_WORD && (!self.drain_on_halt || self.cpu.is_drained()) {
            self.halted = true;
        }

        report
    }

    /// Returns `true` once the halt word has been fetched and, with draining
    /// enabled, every in-flight instruction has retired.
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// Runs until the halt condition.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::CycleLimit`] if the configured cycle budget is
    /// exhausted first.
    pub fn run(&mut self) -> SimResult<RunSummary> {
        while !self.halted {
            if self.stats.cycles >= self.max_cycles {
                return Err(SimError::CycleLimit { cycles: self.max_cycles });
            }
            let _ = self.tick();
        }

        let summary =
            RunSummary { cycles: self.stats.cycles, retired: self.stats.instructions_retired };
        info!(
            cycles = summary.cycles,
            retired = summary.retired,
            cpi = self.stats.cpi(),
            "program completed"
        );
        Ok(summary)
    }

    /// Data memory writes observed so far, oldest first.
    pub fn memory_writes(&self) -> &[MemWrite] {
        &self.writes
    }

    /// Compares data memory against a reference image starting at address 0.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MemoryMismatch`] for the lowest differing word, or
    /// [`SimError::ImageTooLarge`] if the reference is larger than data memory.
    pub fn verify_memory(&self, reference: &[u32]) -> SimResult<()> {
        let actual = self.dmem.words();
        if reference.len() > actual.len() {
            return Err(SimError::ImageTooLarge { words: reference.len(), capacity: actual.len() });
        }

        match reference.iter().zip(actual).position(|(expected, found)| expected != found) {
            Some(idx) => Err(SimError::MemoryMismatch {
                addr: (idx as u32) << 2,
                expected: reference[idx],
                actual: actual[idx],
            }),
            None => Ok(()),
        }
    }
}
