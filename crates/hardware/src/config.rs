//! Configuration system for the pipeline simulator.
//!
//! This module defines the configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Baseline values for the PC, cycle budget, and memory depth.
//! 2. **Structures:** General simulation settings and memory sizing.
//!
//! Configuration is supplied as JSON (every field optional) or built with
//! `Config::default()`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::{SimError, SimResult};

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants::{DEFAULT_MAX_CYCLES, DEFAULT_MEM_WORDS};

    /// Address of the first fetch.
    pub const START_PC: u32 = 0;

    /// Cycle budget before a run is abandoned.
    pub const MAX_CYCLES: u64 = DEFAULT_MAX_CYCLES;

    /// Instruction memory depth in words.
    pub const IMEM_WORDS: usize = DEFAULT_MEM_WORDS;

    /// Data memory depth in words.
    pub const DMEM_WORDS: usize = DEFAULT_MEM_WORDS;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use rvpipe_core::config::Config;
///
/// let json = r#"{
///     "general": {
///         "trace_instructions": true,
///         "max_cycles": 5000
///     },
///     "memory": {
///         "dmem_words": 256
///     }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_cycles, 5000);
/// assert_eq!(config.memory.imem_words, 1024);
/// assert_eq!(config.memory.dmem_words, 256);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General simulation settings
    pub general: GeneralConfig,
    /// Memory sizing
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the document is not valid.
    pub fn from_json(json: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read and
    /// [`SimError::Config`] if it does not parse.
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| SimError::Io { path: path.to_path_buf(), source })?;
        Self::from_json(&text)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeneralConfig {
    /// Log a snapshot of all pipeline latches every cycle at `debug` level
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u32,

    /// Cycle budget; exceeding it is an error
    #[serde(default = "GeneralConfig::default_max_cycles")]
    pub max_cycles: u64,

    /// After fetching the halt word, keep clocking until in-flight instructions retire
    #[serde(default = "GeneralConfig::default_drain_on_halt")]
    pub drain_on_halt: bool,
}

impl GeneralConfig {
    const fn default_start_pc() -> u32 {
        defaults::START_PC
    }

    const fn default_max_cycles() -> u64 {
        defaults::MAX_CYCLES
    }

    const fn default_drain_on_halt() -> bool {
        true
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
            max_cycles: defaults::MAX_CYCLES,
            drain_on_halt: true,
        }
    }
}

/// Instruction and data memory sizing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemoryConfig {
    /// Instruction memory depth in 32-bit words
    #[serde(default = "MemoryConfig::default_imem_words")]
    pub imem_words: usize,

    /// Data memory depth in 32-bit words
    #[serde(default = "MemoryConfig::default_dmem_words")]
    pub dmem_words: usize,
}

impl MemoryConfig {
    const fn default_imem_words() -> usize {
        defaults::IMEM_WORDS
    }

    const fn default_dmem_words() -> usize {
        defaults::DMEM_WORDS
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self { imem_words: defaults::IMEM_WORDS, dmem_words: defaults::DMEM_WORDS }
    }
}
