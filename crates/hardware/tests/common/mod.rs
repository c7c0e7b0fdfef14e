//! # Shared Test Infrastructure

/// Instruction encoders.
pub mod builder;
