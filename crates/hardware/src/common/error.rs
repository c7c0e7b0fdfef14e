//! Simulator error definitions.
//!
//! The pipeline itself never fails: undecodable words become bubbles and
//! memory addresses wrap. Errors only arise at the edges of a run:
//! 1. **Loading:** Reading and parsing program images.
//! 2. **Configuration:** Parsing JSON configuration documents.
//! 3. **Execution Limits:** Runs that never reach the halt word.
//! 4. **Verification:** Comparing final data memory against a reference image.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while preparing, running, or checking a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// An image or configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A line of a hex image is not a valid word or address directive.
    #[error("invalid image line {line}: {text:?}")]
    ImageParse {
        /// 1-based line number.
        line: usize,
        /// Offending line, trimmed.
        text: String,
    },

    /// An image does not fit in the target memory.
    #[error("image of {words} words exceeds memory capacity of {capacity} words")]
    ImageTooLarge {
        /// Number of words in the image.
        words: usize,
        /// Capacity of the target memory in words.
        capacity: usize,
    },

    /// A configuration document failed to deserialize.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The run hit its cycle budget before halting.
    #[error("cycle limit of {cycles} reached before halt")]
    CycleLimit {
        /// Configured cycle limit.
        cycles: u64,
    },

    /// Final data memory differs from the expected image.
    #[error("memory mismatch at {addr:#010x}: expected {expected:#010x}, found {actual:#010x}")]
    MemoryMismatch {
        /// Byte address of the first differing word.
        addr: u32,
        /// Word from the reference image.
        expected: u32,
        /// Word found in data memory.
        actual: u32,
    },
}

/// Result alias for fallible simulator operations.
pub type SimResult<T> = Result<T, SimError>;
