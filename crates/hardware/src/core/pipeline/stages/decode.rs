//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the pipeline. It performs the following:
//! 1. **Decoding:** Converts raw 32-bit instruction bits into control signals.
//! 2. **Register Read:** Reads `rs1` and `rs2`, bypassing the value being written back
//!    in the same cycle.
//!
//! Load-use hazard detection runs alongside, on the register indices produced here.

use crate::core::arch::gpr::{Gpr, WritePort};
use crate::core::pipeline::latches::{IdExEntry, IfIdEntry};
use crate::core::pipeline::signals::{AluOp, ControlSignals, RegisterAddress};
use crate::isa::decode::decode as field_decode;
use crate::isa::instruction::Decoded;
use crate::isa::rv32i::{funct3, funct7, opcodes};

/// Output of the instruction decoder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeOutput {
    /// Control bundle; the bubble for unsupported encodings.
    pub ctrl: ControlSignals,
    /// Register indices, extracted for every word.
    pub regs: RegisterAddress,
    /// Sign-extended immediate; 0 for the bubble.
    pub imm: i32,
}

/// Decodes an instruction word into control signals, register addresses, and immediate.
///
/// Unsupported opcodes and out-of-table `funct3`/`funct7` combinations decode
/// to the bubble. This is not an error: the word flows through the pipeline
/// as a NOP.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding.
pub fn decode(inst: u32) -> DecodeOutput {
    let d = field_decode(inst);
    let regs = RegisterAddress { rs1: d.rs1, rs2: d.rs2, rd: d.rd };

    control_signals(&d).map_or(DecodeOutput { regs, ..DecodeOutput::default() }, |ctrl| {
        DecodeOutput { ctrl, regs, imm: d.imm }
    })
}

/// Builds the control bundle for a decoded word, or `None` if it is not supported.
fn control_signals(d: &Decoded) -> Option<ControlSignals> {
    let mut c = ControlSignals::BUBBLE;

    match d.opcode {
        opcodes::OP_REG => {
            c.reg_write = true;
            c.alu_op = match (d.funct3, d.funct7) {
                (funct3::ADD_SUB, funct7::DEFAULT) => AluOp::Add,
                (funct3::ADD_SUB, funct7::SUB) => AluOp::Sub,
                (funct3::SLL, funct7::DEFAULT) => AluOp::Sll,
                (funct3::SLT, funct7::DEFAULT) => AluOp::Slt,
                (funct3::XOR, funct7::DEFAULT) => AluOp::Xor,
                (funct3::SRL_SRA, funct7::DEFAULT) => AluOp::Srl,
                (funct3::SRL_SRA, funct7::SRA) => AluOp::Sra,
                (funct3::OR, funct7::DEFAULT) => AluOp::Or,
                (funct3::AND, funct7::DEFAULT) => AluOp::And,
                _ => return None,
            };
        }
        opcodes::OP_IMM => {
            c.reg_write = true;
            c.alu_src_imm = true;
            c.alu_op = match (d.funct3, d.funct7) {
                (funct3::ADD_SUB, _) => AluOp::Add,
                (funct3::SLT, _) => AluOp::Slt,
                (funct3::SLL, funct7::DEFAULT) => AluOp::Sll,
                (funct3::SRL_SRA, funct7::DEFAULT) => AluOp::Srl,
                (funct3::SRL_SRA, funct7::SRA) => AluOp::Sra,
                _ => return None,
            };
        }
        opcodes::OP_LOAD => {
            c.reg_write = true;
            c.mem_read = true;
            c.alu_src_imm = true;
            c.mem_to_reg = true;
            c.alu_op = AluOp::Add;
        }
        opcodes::OP_STORE => {
            c.mem_write = true;
            c.alu_src_imm = true;
            c.alu_op = AluOp::Add;
        }
        opcodes::OP_BRANCH => {
            c.alu_op = match d.funct3 {
                funct3::BEQ => AluOp::Beq,
                funct3::BNE => AluOp::Bne,
                funct3::BLT => AluOp::Blt,
                funct3::BGE => AluOp::Bge,
                _ => return None,
            };
        }
        opcodes::OP_JAL => {
            c.reg_write = true;
            c.alu_op = AluOp::Jal;
        }
        opcodes::OP_JALR => {
            c.reg_write = true;
            c.alu_src_imm = true;
            c.alu_op = AluOp::Jalr;
        }
        opcodes::OP_LUI => {
            c.reg_write = true;
            c.alu_op = AluOp::Lui;
        }
        opcodes::OP_AUIPC => {
            c.reg_write = true;
            c.alu_op = AluOp::Auipc;
        }
        _ => return None,
    }

    c.branch = c.alu_op.is_branch();
    c.jump = c.alu_op.is_jump();
    Some(c)
}

/// Executes the instruction decode stage.
///
/// Decodes the IF/ID entry and reads its source registers. Reads observe the
/// writeback stage's port for this cycle, so an instruction three slots behind
/// a producer sees the new value without forwarding.
///
/// # Arguments
///
/// * `if_id` - Current IF/ID latch contents.
/// * `regs` - Register file state before this cycle's write.
/// * `wb_port` - This cycle's register write port.
///
/// # Returns
///
/// The entry presented to the ID/EX register.
pub fn decode_stage(if_id: &IfIdEntry, regs: &Gpr, wb_port: &WritePort) -> IdExEntry {
    let out = decode(if_id.inst);

    IdExEntry {
        pc: if_id.pc,
        rv1: regs.read_bypassed(out.regs.rs1, wb_port),
        rv2: regs.read_bypassed(out.regs.rs2, wb_port),
        imm: out.imm,
        regs: out.regs,
        ctrl: out.ctrl,
    }
}
