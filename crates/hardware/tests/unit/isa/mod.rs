//! # ISA Tests
