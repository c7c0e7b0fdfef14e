//! # Execute Stage Tests

use pretty_assertions::assert_eq;
use rvpipe_core::core::pipeline::hazards::ForwardSel;
use rvpipe_core::core::pipeline::latches::{ExMemEntry, IdExEntry, MemWbEntry};
use rvpipe_core::core::pipeline::signals::{AluOp, ControlSignals, RegisterAddress};
use rvpipe_core::core::pipeline::stages::execute_stage;

fn entry(op: AluOp, rv1: u32, rv2: u32, imm: i32) -> IdExEntry {
    IdExEntry {
        pc: 0x20,
        rv1,
        rv2,
        imm,
        regs: RegisterAddress { rs1: 1, rs2: 2, rd: 3 },
        ctrl: ControlSignals { reg_write: true, alu_op: op, ..ControlSignals::BUBBLE },
    }
}

fn idle() -> (ExMemEntry, MemWbEntry) {
    (ExMemEntry::default(), MemWbEntry::default())
}

#[test]
fn test_register_operands() {
    let (exm, mwb) = idle();
    let out = execute_stage(&entry(AluOp::Sub, 10, 3, 0), &exm, &mwb);
    assert_eq!(out.entry.alu, 7);
    assert_eq!(out.entry.rd, 3);
    assert_eq!(out.entry.pc, 0x20);
    assert_eq!(out.redirect, None);
}

#[test]
fn test_immediate_replaces_operand_b() {
    let (exm, mwb) = idle();
    let mut id_ex = entry(AluOp::Add, 10, 1000, -4);
    id_ex.ctrl.alu_src_imm = true;
    let out = execute_stage(&id_ex, &exm, &mwb);
    assert_eq!(out.entry.alu, 6);
}

#[test]
fn test_store_data_is_forwarded_rs2_even_with_immediate() {
    let mwb = MemWbEntry::default();
    let exm = ExMemEntry {
        rd: 2,
        alu: 0xBEEF,
        ctrl: ControlSignals { reg_write: true, ..ControlSignals::BUBBLE },
        ..Default::default()
    };
    let id_ex = IdExEntry {
        rv1: 0x100,
        rv2: 0,
        imm: 8,
        regs: RegisterAddress { rs1: 1, rs2: 2, rd: 0 },
        ctrl: ControlSignals {
            mem_write: true,
            alu_src_imm: true,
            alu_op: AluOp::Add,
            ..ControlSignals::BUBBLE
        },
        ..Default::default()
    };

    let out = execute_stage(&id_ex, &exm, &mwb);
    assert_eq!(out.entry.alu, 0x108);
    assert_eq!(out.entry.store_data, 0xBEEF);
    assert_eq!(out.forwarding.forward_b, ForwardSel::ExMem);
}

#[test]
fn test_taken_branch_redirects() {
    let (exm, mwb) = idle();
    let mut id_ex = entry(AluOp::Beq, 5, 5, 12);
    id_ex.ctrl = ControlSignals { branch: true, alu_op: AluOp::Beq, ..ControlSignals::BUBBLE };
    let out = execute_stage(&id_ex, &exm, &mwb);
    assert_eq!(out.redirect, Some(0x2C));
}

#[test]
fn test_not_taken_branch_continues() {
    let (exm, mwb) = idle();
    let mut id_ex = entry(AluOp::Bne, 5, 5, 12);
    id_ex.ctrl = ControlSignals { branch: true, alu_op: AluOp::Bne, ..ControlSignals::BUBBLE };
    assert_eq!(execute_stage(&id_ex, &exm, &mwb).redirect, None);
}

#[test]
fn test_jal_links_and_redirects() {
    let (exm, mwb) = idle();
    let mut id_ex = entry(AluOp::Jal, 0, 0, 0x40);
    id_ex.ctrl.jump = true;
    let out = execute_stage(&id_ex, &exm, &mwb);
    assert_eq!(out.entry.alu, 0x24);
    assert_eq!(out.redirect, Some(0x60));
}

#[test]
fn test_jalr_clears_target_bit_zero() {
    let (exm, mwb) = idle();
    let mut id_ex = entry(AluOp::Jalr, 0x101, 0, 2);
    id_ex.ctrl.jump = true;
    id_ex.ctrl.alu_src_imm = true;
    let out = execute_stage(&id_ex, &exm, &mwb);
    assert_eq!(out.redirect, Some(0x102));
    assert_eq!(out.entry.alu, 0x24);
}

#[test]
fn test_bubble_produces_bubble() {
    let (exm, mwb) = idle();
    let out = execute_stage(&IdExEntry::default(), &exm, &mwb);
    assert!(out.entry.ctrl.is_bubble());
    assert_eq!(out.redirect, None);
}
