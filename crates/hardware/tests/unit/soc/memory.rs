//! # Memory Tests
//!
//! Word buffer addressing and the two memory ports built on it.

use rvpipe_core::SimError;
use rvpipe_core::soc::memory::buffer::WordBuffer;
use rvpipe_core::soc::traits::{DataPort, DataRequest, InstructionPort, MemWrite};
use rvpipe_core::soc::{DataMemory, InstructionMemory};

#[test]
fn test_buffer_starts_zeroed() {
    let buf = WordBuffer::new(8);
    assert_eq!(buf.len(), 8);
    assert!(!buf.is_empty());
    assert!(buf.as_slice().iter().all(|&w| w == 0));
}

#[test]
fn test_buffer_zero_capacity_is_raised() {
    assert_eq!(WordBuffer::new(0).len(), 1);
}

#[test]
fn test_buffer_ignores_low_address_bits() {
    let mut buf = WordBuffer::new(8);
    buf.write(4, 0xAA);
    assert_eq!(buf.read(4), 0xAA);
    assert_eq!(buf.read(5), 0xAA);
    assert_eq!(buf.read(7), 0xAA);
    assert_eq!(buf.index(7), 1);
}

#[test]
fn test_buffer_wraps_past_capacity() {
    let mut buf = WordBuffer::new(4);
    buf.write(16, 0x55);
    assert_eq!(buf.read(0), 0x55);
    assert_eq!(buf.index(u32::MAX), 3);
}

#[test]
fn test_buffer_load() {
    let mut buf = WordBuffer::new(4);
    buf.load(&[1, 2]).unwrap();
    assert_eq!(buf.as_slice(), &[1, 2, 0, 0]);
    assert!(matches!(
        buf.load(&[1, 2, 3, 4, 5]),
        Err(SimError::ImageTooLarge { words: 5, capacity: 4 })
    ));
}

#[test]
fn test_instruction_memory_fetch() {
    let imem = InstructionMemory::with_image(4, &[0x13, 0x33]).unwrap();
    assert_eq!(imem.capacity(), 4);
    assert_eq!(imem.fetch(4), 0x33);
    assert_eq!(imem.fetch(8), 0);
    assert_eq!(imem.words(), &[0x13, 0x33, 0, 0]);
}

#[test]
fn test_data_read_requires_enable() {
    let mut dmem = DataMemory::new(4);
    dmem.load(&[7]).unwrap();

    let idle = dmem.access(&DataRequest { addr: 0, ..Default::default() });
    assert_eq!(idle.data_out, 0);

    let read = dmem.access(&DataRequest { read_enable: true, addr: 0, ..Default::default() });
    assert_eq!(read.data_out, 7);
    assert!(!read.write.wrote);
}

#[test]
fn test_data_write_is_observed() {
    let mut dmem = DataMemory::new(4);
    let resp = dmem.access(&DataRequest {
        write_enable: true,
        addr: 8,
        data_in: 0x1234,
        ..Default::default()
    });
    assert_eq!(resp.write, MemWrite { wrote: true, addr: 8, data: 0x1234 });
    assert_eq!(dmem.read_word(8), 0x1234);
    assert_eq!(dmem.capacity(), 4);
}
