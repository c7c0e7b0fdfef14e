//! # Fetch, Memory, and Writeback Stage Tests

use rvpipe_core::core::pipeline::latches::{ExMemEntry, MemWbEntry};
use rvpipe_core::core::pipeline::signals::{AluOp, ControlSignals};
use rvpipe_core::core::pipeline::stages::{fetch_stage, mem_stage, wb_stage};
use rvpipe_core::soc::{DataMemory, InstructionMemory, MemWrite};

#[test]
fn test_fetch_reads_word_at_pc() {
    let imem = InstructionMemory::with_image(16, &[0x11, 0x22, 0x33]).unwrap();
    let out = fetch_stage(8, &imem);
    assert_eq!(out.pc, 8);
    assert_eq!(out.inst, 0x33);
}

#[test]
fn test_fetch_past_program_reads_zero() {
    let imem = InstructionMemory::with_image(16, &[0x11]).unwrap();
    assert_eq!(fetch_stage(4, &imem).inst, 0);
}

#[test]
fn test_mem_stage_load() {
    let mut dmem = DataMemory::new(16);
    dmem.load(&[0, 0, 0xABCD]).unwrap();
    let ex_mem = ExMemEntry {
        pc: 0x10,
        alu: 8,
        rd: 4,
        ctrl: ControlSignals {
            reg_write: true,
            mem_read: true,
            mem_to_reg: true,
            alu_op: AluOp::Add,
            ..ControlSignals::BUBBLE
        },
        ..Default::default()
    };

    let (mem_wb, write) = mem_stage(&ex_mem, &mut dmem);
    assert_eq!(mem_wb.load_data, 0xABCD);
    assert_eq!(mem_wb.alu, 8);
    assert_eq!(mem_wb.rd, 4);
    assert_eq!(mem_wb.pc, 0x10);
    assert_eq!(write, MemWrite::default());
}

#[test]
fn test_mem_stage_store() {
    let mut dmem = DataMemory::new(16);
    let ex_mem = ExMemEntry {
        alu: 12,
        store_data: 0x55,
        ctrl: ControlSignals { mem_write: true, alu_op: AluOp::Add, ..ControlSignals::BUBBLE },
        ..Default::default()
    };

    let (mem_wb, write) = mem_stage(&ex_mem, &mut dmem);
    assert_eq!(write, MemWrite { wrote: true, addr: 12, data: 0x55 });
    assert_eq!(dmem.read_word(12), 0x55);
    assert_eq!(mem_wb.load_data, 0);
}

#[test]
fn test_mem_stage_passes_alu_results_through() {
    let mut dmem = DataMemory::new(4);
    let ex_mem = ExMemEntry {
        alu: 0x99,
        rd: 2,
        ctrl: ControlSignals { reg_write: true, alu_op: AluOp::Add, ..ControlSignals::BUBBLE },
        ..Default::default()
    };
    let (mem_wb, write) = mem_stage(&ex_mem, &mut dmem);
    assert!(!write.wrote);
    assert_eq!(mem_wb.wb_value(), 0x99);
    assert!(dmem.words().iter().all(|&w| w == 0));
}

#[test]
fn test_wb_stage_drives_write_port() {
    let load = MemWbEntry {
        rd: 7,
        alu: 0x40,
        load_data: 0x1234,
        ctrl: ControlSignals { reg_write: true, mem_to_reg: true, ..ControlSignals::BUBBLE },
        ..Default::default()
    };
    let port = wb_stage(&load);
    assert!(port.enable);
    assert_eq!(port.rd, 7);
    assert_eq!(port.data, 0x1234);

    assert!(!wb_stage(&MemWbEntry::default()).enable);
}
