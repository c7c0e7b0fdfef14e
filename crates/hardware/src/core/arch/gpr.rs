//! RISC-V General-Purpose Register File.
//!
//! This module implements the integer register file of the pipeline. It performs
//! the following:
//! 1. **Storage:** Maintains 32 integer registers (`x0`-`x31`).
//! 2. **Invariant Enforcement:** Ensures that register `x0` is hardwired to zero.
//! 3. **Write Bypass:** Lets decode observe the value being written back in the same cycle.
//! 4. **Debugging:** Provides utilities for dumping the complete register state.

use std::fmt;

use crate::common::constants::NUM_REGS;

/// Write port of the register file, driven by the writeback stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WritePort {
    /// Write enable.
    pub enable: bool,
    /// Destination register index.
    pub rd: usize,
    /// Value to write.
    pub data: u32,
}

impl WritePort {
    /// Returns `true` if this port will change architectural state.
    pub const fn is_effective(&self) -> bool {
        self.enable && self.rd != 0
    }
}

/// General-Purpose Register file.
///
/// Contains 32 general-purpose registers used for integer operations. Register `x0`
/// is hardwired to zero and cannot be modified.
#[derive(Clone, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; NUM_REGS],
}

impl Gpr {
    /// Creates a new general-purpose register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self { regs: [0; NUM_REGS] }
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the specified register. Register `x0` always returns 0.
    pub const fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx % NUM_REGS] }
    }

    /// Reads a register as seen by decode during a cycle with a pending write.
    ///
    /// If the write port targets `idx` and is enabled, its data is returned in
    /// place of the stored value. `x0` reads as zero regardless of the port.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `port` - The writeback stage's write port for the current cycle.
    pub const fn read_bypassed(&self, idx: usize, port: &WritePort) -> u32 {
        if idx == 0 {
            0
        } else if port.enable && port.rd == idx {
            port.data
        } else {
            self.regs[idx % NUM_REGS]
        }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    pub const fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx % NUM_REGS] = val;
        }
    }

    /// Applies the write port at the clock edge.
    pub const fn commit(&mut self, port: &WritePort) {
        if port.enable {
            self.write(port.rd, port.data);
        }
    }

    /// Returns a copy of all 32 registers, `x0` included.
    pub const fn snapshot(&self) -> [u32; NUM_REGS] {
        self.regs
    }

    /// Dumps the contents of all general-purpose registers to stdout.
    ///
    /// Displays registers in pairs with hexadecimal formatting for debugging purposes.
    pub fn dump(&self) {
        print!("{self}");
    }
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Gpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.regs.iter()).finish()
    }
}

impl fmt::Display for Gpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..NUM_REGS).step_by(2) {
            writeln!(
                f,
                "x{:<2}={:#010x} x{:<2}={:#010x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1]
            )?;
        }
        Ok(())
    }
}
