//! Memory port traits.
//!
//! This module defines the interfaces the core uses to reach its two memories. It provides:
//! 1. **Instruction Port:** A combinational, read-only word fetch.
//! 2. **Data Port:** One word access per cycle with independent read and write enables,
//!    reporting an observation of every write.

/// Read-only instruction memory interface.
pub trait InstructionPort {
    /// Returns the word at byte address `addr`.
    ///
    /// The low two address bits are ignored. Implementations must not panic
    /// for any address.
    fn fetch(&self, addr: u32) -> u32;
}

/// One data memory access, as driven by the memory stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DataRequest {
    /// Read enable.
    pub read_enable: bool,
    /// Write enable.
    pub write_enable: bool,
    /// Byte address; the low two bits are ignored.
    pub addr: u32,
    /// Word to write when `write_enable` is set.
    pub data_in: u32,
}

/// Observation of a data memory write.
///
/// `wrote` is asserted exactly on cycles that perform a write; `addr` and
/// `data` are zero otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemWrite {
    /// A write happened this cycle.
    pub wrote: bool,
    /// Byte address written.
    pub addr: u32,
    /// Word written.
    pub data: u32,
}

/// Response of a data memory access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DataResponse {
    /// Word read; 0 when `read_enable` was clear.
    pub data_out: u32,
    /// Write observation for this access.
    pub write: MemWrite,
}

/// Data memory interface.
pub trait DataPort {
    /// Performs one access. When both enables are set the read returns the
    /// value stored before the write.
    fn access(&mut self, req: &DataRequest) -> DataResponse;
}
