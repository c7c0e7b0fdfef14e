//! Instruction and Data Memories.
//!
//! This module implements the two memories of the Harvard-style core. It provides:
//! 1. **Buffer:** Word-addressed backing storage with wrap-around addressing.
//! 2. **Instruction Memory:** Read-only after loading; fetch is combinational.
//! 3. **Data Memory:** One read or write per cycle, with write observation.

/// Word buffer used as backing storage for both memories.
pub mod buffer;

use tracing::trace;

use self::buffer::WordBuffer;
use crate::common::error::SimResult;
use crate::soc::traits::{DataPort, DataRequest, DataResponse, InstructionPort, MemWrite};

/// Instruction memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstructionMemory {
    buffer: WordBuffer,
}

impl InstructionMemory {
    /// Creates a zero-filled instruction memory of `capacity` words.
    pub fn new(capacity: usize) -> Self {
        Self { buffer: WordBuffer::new(capacity) }
    }

    /// Creates an instruction memory and loads `image` at address 0.
    ///
    /// # Errors
    ///
    /// Fails if the image does not fit.
    pub fn with_image(capacity: usize, image: &[u32]) -> SimResult<Self> {
        let mut mem = Self::new(capacity);
        mem.buffer.load(image)?;
        Ok(mem)
    }

    /// Returns the capacity in words.
    pub const fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the memory contents.
    pub fn words(&self) -> &[u32] {
        self.buffer.as_slice()
    }
}

impl InstructionPort for InstructionMemory {
    fn fetch(&self, addr: u32) -> u32 {
        self.buffer.read(addr)
    }
}

/// Data memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataMemory {
    buffer: WordBuffer,
}

impl DataMemory {
    /// Creates a zero-filled data memory of `capacity` words.
    pub fn new(capacity: usize) -> Self {
        Self { buffer: WordBuffer::new(capacity) }
    }

    /// Preloads `image` at address 0.
    ///
    /// # Errors
    ///
    /// Fails if the image does not fit.
    pub fn load(&mut self, image: &[u32]) -> SimResult<()> {
        self.buffer.load(image)
    }

    /// Reads the word at byte address `addr` outside of the pipeline.
    pub fn read_word(&self, addr: u32) -> u32 {
        self.buffer.read(addr)
    }

    /// Returns the capacity in words.
    pub const fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the memory contents.
    pub fn words(&self) -> &[u32] {
        self.buffer.as_slice()
    }
}

impl DataPort for DataMemory {
    fn access(&mut self, req: &DataRequest) -> DataResponse {
        let data_out = if req.read_enable { self.buffer.read(req.addr) } else { 0 };

        let write = if req.write_enable {
            self.buffer.write(req.addr, req.data_in);
            trace!(addr = req.addr, data = req.data_in, "dmem write");
            MemWrite { wrote: true, addr: req.addr, data: req.data_in }
        } else {
            MemWrite::default()
        };

        DataResponse { data_out, write }
    }
}
