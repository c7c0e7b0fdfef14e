//! Instruction Disassembler for the supported RV32I subset.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for debug tracing, logging, and test diagnostics. Encodings the
//! pipeline does not execute render as `unknown`.
//!
//! # Usage
//!
//! ```
//! use rvpipe_core::isa::disasm::disassemble;
//! let text = disassemble(0x00A00513); // ADDI x10, x0, 10
//! assert_eq!(text, "addi a0, zero, 10");
//! ```

use crate::isa::decode::decode;
use crate::isa::rv32i::{funct3 as f3, funct7 as f7, opcodes as op};

/// ABI register names for x0–x31.
const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Mask for the shift amount of an RV32 immediate shift.
const SHAMT_MASK: i32 = 0x1F;

/// Returns the ABI name for an integer register index.
#[inline]
pub fn xreg(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("x??")
}

/// Disassembles a 32-bit RISC-V instruction into a human-readable string.
///
/// Returns a mnemonic like `"add a0, a1, a2"` or `"unknown (0x...)"` for
/// encodings outside the supported subset.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> String {
    let d = decode(inst);
    let (rd, rs1, rs2, imm) = (xreg(d.rd), xreg(d.rs1), xreg(d.rs2), d.imm);

    let text = match d.opcode {
        op::OP_REG => reg_mnemonic(d.funct3, d.funct7).map(|mn| format!("{mn} {rd}, {rs1}, {rs2}")),
        op::OP_IMM => imm_mnemonic(d.funct3, d.funct7).map(|mn| match d.funct3 {
            f3::SLL | f3::SRL_SRA => format!("{mn} {rd}, {rs1}, {}", imm & SHAMT_MASK),
            _ => format!("{mn} {rd}, {rs1}, {imm}"),
        }),
        op::OP_LOAD => Some(format!("lw {rd}, {imm}({rs1})")),
        op::OP_STORE => Some(format!("sw {rs2}, {imm}({rs1})")),
        op::OP_BRANCH => branch_mnemonic(d.funct3).map(|mn| format!("{mn} {rs1}, {rs2}, {imm}")),
        op::OP_LUI => Some(format!("lui {rd}, {:#x}", (imm as u32) >> 12)),
        op::OP_AUIPC => Some(format!("auipc {rd}, {:#x}", (imm as u32) >> 12)),
        op::OP_JAL => Some(format!("jal {rd}, {imm}")),
        op::OP_JALR => Some(format!("jalr {rd}, {imm}({rs1})")),
        _ => None,
    };

    text.unwrap_or_else(|| format!("unknown ({inst:#010x})"))
}

const fn reg_mnemonic(funct3: u32, funct7: u32) -> Option<&'static str> {
    match (funct3, funct7) {
        (f3::ADD_SUB, f7::DEFAULT) => Some("add"),
        (f3::ADD_SUB, f7::SUB) => Some("sub"),
        (f3::SLL, f7::DEFAULT) => Some("sll"),
        (f3::SLT, f7::DEFAULT) => Some("slt"),
        (f3::XOR, f7::DEFAULT) => Some("xor"),
        (f3::SRL_SRA, f7::DEFAULT) => Some("srl"),
        (f3::SRL_SRA, f7::SRA) => Some("sra"),
        (f3::OR, f7::DEFAULT) => Some("or"),
        (f3::AND, f7::DEFAULT) => Some("and"),
        _ => None,
    }
}

const fn imm_mnemonic(funct3: u32, funct7: u32) -> Option<&'static str> {
    match (funct3, funct7) {
        (f3::ADD_SUB, _) => Some("addi"),
        (f3::SLT, _) => Some("slti"),
        (f3::SLL, f7::DEFAULT) => Some("slli"),
        (f3::SRL_SRA, f7::DEFAULT) => Some("srli"),
        (f3::SRL_SRA, f7::SRA) => Some("srai"),
        _ => None,
    }
}

const fn branch_mnemonic(funct3: u32) -> Option<&'static str> {
    match funct3 {
        f3::BEQ => Some("beq"),
        f3::BNE => Some("bne"),
        f3::BLT => Some("blt"),
        f3::BGE => Some("bge"),
        _ => None,
    }
}
