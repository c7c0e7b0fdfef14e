//! Simulation harness.
//!
//! Provides program image loading and the simulator loop that drives the
//! core to completion.

/// Program image parsing and file loading.
pub mod loader;

/// Simulator loop, halt detection, and memory verification.
pub mod simulator;

pub use loader::{load_image, parse_binary_image, parse_hex_image};
pub use simulator::{RunSummary, Simulator};
