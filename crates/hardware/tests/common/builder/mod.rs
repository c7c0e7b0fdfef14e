//! # Builders
