//! # Statistics Verification Tests
//!
//! Feeds hand-built cycle reports into `SimStats` and checks each counter,
//! then cross-checks the totals of a real run.

use pretty_assertions::assert_eq;
use rvpipe_core::config::Config;
use rvpipe_core::core::cpu::CycleReport;
use rvpipe_core::core::pipeline::hazards::{ForwardSel, ForwardingSignals};
use rvpipe_core::core::pipeline::signals::{AluOp, ControlSignals};
use rvpipe_core::sim::Simulator;
use rvpipe_core::soc::MemWrite;
use rvpipe_core::stats::SimStats;

fn retiring(ctrl: ControlSignals) -> CycleReport {
    CycleReport { retired: ctrl, ..Default::default() }
}

#[test]
fn test_new_stats_are_zero() {
    let stats = SimStats::new();
    assert_eq!(stats.cycles, 0);
    assert_eq!(stats.instructions_retired, 0);
    assert!(stats.cpi().abs() < f64::EPSILON);
}

#[test]
fn test_bubbles_count_cycles_not_instructions() {
    let mut stats = SimStats::new();
    stats.record(&CycleReport::default());
    stats.record(&CycleReport::default());
    assert_eq!(stats.cycles, 2);
    assert_eq!(stats.instructions_retired, 0);
}

#[test]
fn test_instruction_mix() {
    let mut stats = SimStats::new();
    let alu = ControlSignals { reg_write: true, alu_op: AluOp::Add, ..ControlSignals::BUBBLE };
    let load = ControlSignals { mem_read: true, reg_write: true, ..alu };
    let store = ControlSignals { mem_write: true, ..ControlSignals::BUBBLE };
    let branch = ControlSignals { branch: true, alu_op: AluOp::Beq, ..ControlSignals::BUBBLE };
    let jump = ControlSignals { jump: true, reg_write: true, alu_op: AluOp::Jal, ..ControlSignals::BUBBLE };

    for ctrl in [alu, alu, load, store, branch, jump] {
        stats.record(&retiring(ctrl));
    }

    assert_eq!(stats.instructions_retired, 6);
    assert_eq!(stats.inst_alu, 2);
    assert_eq!(stats.inst_load, 1);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.inst_branch, 1);
    assert_eq!(stats.inst_jump, 1);
    assert!((stats.cpi() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_hazard_counters() {
    let mut stats = SimStats::new();
    stats.record(&CycleReport { stall: true, ..Default::default() });
    stats.record(&CycleReport { redirect: Some(0x40), branch_taken: true, ..Default::default() });
    stats.record(&CycleReport { redirect: Some(0x80), ..Default::default() });
    stats.record(&CycleReport {
        forwarding: ForwardingSignals { forward_a: ForwardSel::ExMem, forward_b: ForwardSel::MemWb },
        mem_write: MemWrite { wrote: true, addr: 0, data: 1 },
        ..Default::default()
    });

    assert_eq!(stats.stalls_data, 1);
    assert_eq!(stats.flushes_control, 2);
    assert_eq!(stats.branches_taken, 1);
    assert_eq!(stats.forwards_ex_mem, 1);
    assert_eq!(stats.forwards_mem_wb, 1);
    assert_eq!(stats.mem_writes, 1);
}

#[test]
fn test_run_totals() {
    // addi x1, x0, 5 / addi x2, x1, 10 / sw x2, 0(x0)
    let program = [0x0050_0093, 0x00A0_8113, 0x0020_2023];
    let mut sim = Simulator::new(&Config::default(), &program).unwrap();
    let _ = sim.run().unwrap();

    let stats = &sim.stats;
    assert_eq!(stats.cycles, 7);
    assert_eq!(stats.inst_alu, 2);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.forwards_ex_mem, 2);
    assert_eq!(stats.mem_writes, 1);
    assert!((stats.cpi() - 7.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_report_sections() {
    let text = SimStats::new().to_string();
    assert!(text.contains("sim_cycles"));
    assert!(text.contains("stall.load_use"));
    assert!(text.contains("forward.mem_wb"));
}
