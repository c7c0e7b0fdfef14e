//! # ALU Tests
//!
//! Table tests for every operation, plus properties for wrapping arithmetic
//! and shift-amount masking.

use proptest::prelude::*;
use rstest::rstest;
use rvpipe_core::core::pipeline::signals::AluOp;
use rvpipe_core::core::units::alu::Alu;

fn exec(op: AluOp, a: u32, b: u32) -> u32 {
    Alu::execute(op, a, b, 0, 0).result
}

#[rstest]
#[case::add(AluOp::Add, 7, 5, 12)]
#[case::add_wraps(AluOp::Add, 0xFFFF_FFFF, 2, 1)]
#[case::sub(AluOp::Sub, 7, 5, 2)]
#[case::sub_wraps(AluOp::Sub, 0, 1, 0xFFFF_FFFF)]
#[case::and(AluOp::And, 0b1100, 0b1010, 0b1000)]
#[case::or(AluOp::Or, 0b1100, 0b1010, 0b1110)]
#[case::xor(AluOp::Xor, 0b1100, 0b1010, 0b0110)]
#[case::slt_true(AluOp::Slt, (-1_i32) as u32, 0, 1)]
#[case::slt_false(AluOp::Slt, 0, (-1_i32) as u32, 0)]
#[case::slt_equal(AluOp::Slt, 3, 3, 0)]
#[case::sll(AluOp::Sll, 1, 4, 16)]
#[case::srl(AluOp::Srl, 0x8000_0000, 4, 0x0800_0000)]
#[case::sra(AluOp::Sra, 0x8000_0000, 4, 0xF800_0000)]
#[case::nop(AluOp::Nop, 123, 456, 0)]
fn test_alu_ops(#[case] op: AluOp, #[case] a: u32, #[case] b: u32, #[case] want: u32) {
    assert_eq!(exec(op, a, b), want);
}

#[test]
fn test_shift_amount_masked_to_five_bits() {
    assert_eq!(exec(AluOp::Sll, 1, 33), 2);
    assert_eq!(exec(AluOp::Srl, 4, 0x21), 2);
    // An SRAI immediate carries funct7 in bits 10..5.
    assert_eq!(exec(AluOp::Sra, 0x8000_0000, 0x404), 0xF800_0000);
}

#[test]
fn test_lui_and_auipc_use_immediate() {
    assert_eq!(Alu::execute(AluOp::Lui, 9, 9, 0x40, 0x1234_5000).result, 0x1234_5000);
    assert_eq!(Alu::execute(AluOp::Auipc, 9, 9, 0x40, 0x1000).result, 0x1040);
}

#[test]
fn test_non_control_ops_never_redirect() {
    for op in [AluOp::Add, AluOp::Sub, AluOp::Lui, AluOp::Auipc, AluOp::Sll, AluOp::Nop] {
        let out = Alu::execute(op, 1, 1, 0x80, 16);
        assert!(!out.branch_taken, "{op:?}");
        assert_eq!(out.branch_target, 0, "{op:?}");
    }
}

#[test]
fn test_branch_result_is_zero() {
    let out = Alu::execute(AluOp::Blt, (-2_i32) as u32, 1, 0x100, 0x20);
    assert!(out.branch_taken);
    assert_eq!(out.branch_target, 0x120);
    assert_eq!(out.result, 0);
}

proptest! {
    #[test]
    fn prop_add_sub_inverse(a: u32, b: u32) {
        prop_assert_eq!(exec(AluOp::Sub, exec(AluOp::Add, a, b), b), a);
    }

    #[test]
    fn prop_slt_matches_signed_compare(a: i32, b: i32) {
        prop_assert_eq!(exec(AluOp::Slt, a as u32, b as u32), u32::from(a < b));
    }

    #[test]
    fn prop_shift_ignores_upper_amount_bits(a: u32, b: u32) {
        prop_assert_eq!(exec(AluOp::Srl, a, b), a >> (b & 0x1F));
        prop_assert_eq!(exec(AluOp::Sra, a, b), ((a as i32) >> (b & 0x1F)) as u32);
    }
}
