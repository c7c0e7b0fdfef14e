//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the encodings, field extraction, immediate decoding, and
//! disassembly for the subset of RV32I the pipeline executes.
//!
//! # Supported instruction classes
//!
//! * R-type ALU: `add`, `sub`, `and`, `or`, `xor`, `slt`, `sll`, `srl`, `sra`.
//! * I-type ALU: `addi`, `slti`, `slli`, `srli`, `srai`.
//! * Memory: `lw`, `sw`.
//! * Control flow: `beq`, `bne`, `blt`, `bge`, `jal`, `jalr`.
//! * Upper immediates: `lui`, `auipc`.

/// Immediate extraction for all RV32I instruction formats.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction field extraction utilities.
pub mod instruction;

/// Base integer instruction set (32-bit RISC-V core instructions).
pub mod rv32i;
