//! # Pipeline Tests
