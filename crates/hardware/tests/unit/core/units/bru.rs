//! # Branch Resolution Unit Tests

use rstest::rstest;
use rvpipe_core::core::pipeline::signals::AluOp;
use rvpipe_core::core::units::bru::{BranchOutcome, BranchUnit};

#[rstest]
#[case::beq_taken(AluOp::Beq, 4, 4, true)]
#[case::beq_not_taken(AluOp::Beq, 4, 5, false)]
#[case::bne_taken(AluOp::Bne, 4, 5, true)]
#[case::bne_not_taken(AluOp::Bne, 4, 4, false)]
#[case::blt_signed(AluOp::Blt, (-1_i32) as u32, 1, true)]
#[case::blt_not_taken(AluOp::Blt, 1, (-1_i32) as u32, false)]
#[case::bge_equal(AluOp::Bge, 3, 3, true)]
#[case::bge_signed(AluOp::Bge, (-1_i32) as u32, 1, false)]
fn test_conditions(#[case] op: AluOp, #[case] a: u32, #[case] b: u32, #[case] taken: bool) {
    assert_eq!(BranchUnit::condition(op, a, b), taken);
}

#[test]
fn test_branch_target_is_pc_relative() {
    let out = BranchUnit::resolve(AluOp::Bne, 1, 2, 0x40, -0x10);
    assert_eq!(out, BranchOutcome { taken: true, target: 0x30, link: 0 });
}

#[test]
fn test_not_taken_branch_still_reports_target() {
    let out = BranchUnit::resolve(AluOp::Beq, 1, 2, 0x40, 8);
    assert!(!out.taken);
    assert_eq!(out.target, 0x48);
}

#[test]
fn test_jal_links_pc_plus_four() {
    let out = BranchUnit::resolve(AluOp::Jal, 0, 0, 0x40, 0x100);
    assert_eq!(out, BranchOutcome { taken: true, target: 0x140, link: 0x44 });
}

#[test]
fn test_jalr_target_from_register() {
    let out = BranchUnit::resolve(AluOp::Jalr, 0x1001, 0, 0x40, 4);
    assert_eq!(out, BranchOutcome { taken: true, target: 0x1004, link: 0x44 });
}

#[test]
fn test_non_control_op_is_never_taken() {
    assert_eq!(BranchUnit::resolve(AluOp::Add, 1, 1, 0x40, 4), BranchOutcome::default());
}
