//! Cycle-accurate RV32I pipeline simulator library.
//!
//! This crate models a classic five-stage in-order RISC-V core, one clock at a time:
//! 1. **Core:** Fetch, decode, execute, memory, and writeback stages separated by
//!    clocked pipeline registers, with load-use stalls, EX/MEM and MEM/WB forwarding,
//!    and flush on taken branches and jumps.
//! 2. **ISA:** Field extraction, immediate decoding, and disassembly for the supported
//!    RV32I subset.
//! 3. **Memory:** Word-addressed instruction and data memories behind port traits.
//! 4. **Simulation:** Image loader, run loop with halt detection, configuration, and
//!    statistics collection.
//!
//! # Examples
//!
//! ```
//! use rvpipe_core::{Config, Simulator};
//!
//! // addi x1, x0, 5 ; addi x2, x1, 10 ; sw x2, 0(x0)
//! let program = [0x0050_0093, 0x00A0_8113, 0x0020_2023];
//! let mut sim = Simulator::new(&Config::default(), &program).unwrap();
//! let summary = sim.run().unwrap();
//! assert_eq!(summary.retired, 3);
//! assert_eq!(sim.cpu.regs.read(2), 15);
//! assert_eq!(sim.dmem.read_word(0), 15);
//! ```

/// Common types and constants (word size, halt word, errors).
pub mod common;
/// Simulator configuration (defaults and JSON-deserializable structures).
pub mod config;
/// CPU core (pipeline, register file, execution units, per-cycle orchestration).
pub mod core;
/// Instruction set (field extraction, immediates, RV32I encodings, disassembly).
pub mod isa;
/// Image loader and simulator loop.
pub mod sim;
/// Instruction and data memories and their port traits.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Error type for every fallible harness operation.
pub use crate::common::error::{SimError, SimResult};
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds the register file, PC, and pipeline registers.
pub use crate::core::Cpu;
/// Top-level simulator owning the core and both memories.
pub use crate::sim::Simulator;
