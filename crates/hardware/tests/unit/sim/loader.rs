//! # Image Loading Tests
//!
//! Hex text parsing, raw binary parsing, and loading either from disk.

use pretty_assertions::assert_eq;
use rvpipe_core::SimError;
use rvpipe_core::sim::loader::{load_image, parse_binary_image, parse_hex_image};
use std::io::Write;
use tempfile::{Builder, NamedTempFile};

/// Helper function to create a temporary image file with the given suffix.
fn create_temp_image(suffix: &str, data: &[u8]) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_hex_one_word_per_line() {
    let words = parse_hex_image("00500093\n00a08113\n00202023\n").unwrap();
    assert_eq!(words, vec![0x0050_0093, 0x00A0_8113, 0x0020_2023]);
}

#[test]
fn test_hex_multiple_words_and_prefixes() {
    let words = parse_hex_image("0x13 0X33\tdead_beef\n").unwrap();
    assert_eq!(words, vec![0x13, 0x33, 0xDEAD_BEEF]);
}

#[test]
fn test_hex_comments_and_blank_lines() {
    let text = "# header\n\n00000013 // nop\n  \n00000033 # add\n";
    assert_eq!(parse_hex_image(text).unwrap(), vec![0x13, 0x33]);
}

#[test]
fn test_hex_address_directive_zero_fills() {
    let words = parse_hex_image("11\n@3\n22\n@1\n33\n").unwrap();
    assert_eq!(words, vec![0x11, 0x33, 0, 0x22]);
}

#[test]
fn test_hex_empty_input() {
    assert!(parse_hex_image("").unwrap().is_empty());
}

#[test]
fn test_hex_bad_token_reports_line() {
    match parse_hex_image("00000013\n0000zz13\n") {
        Err(SimError::ImageParse { line, text }) => {
            assert_eq!(line, 2);
            assert_eq!(text, "0000zz13");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_hex_word_too_wide_is_rejected() {
    assert!(matches!(parse_hex_image("1_0000_0000"), Err(SimError::ImageParse { line: 1, .. })));
}

#[test]
fn test_hex_address_out_of_range() {
    assert!(matches!(parse_hex_image("@200000\n13\n"), Err(SimError::ImageTooLarge { .. })));
}

#[test]
fn test_binary_little_endian_words() {
    let bytes = [0x93, 0x00, 0x50, 0x00, 0x13, 0x00, 0x00, 0x00];
    assert_eq!(parse_binary_image(&bytes), vec![0x0050_0093, 0x13]);
}

#[test]
fn test_binary_partial_tail_is_zero_padded() {
    assert_eq!(parse_binary_image(&[0x13, 0x00, 0x00, 0x00, 0xAB]), vec![0x13, 0xAB]);
    assert!(parse_binary_image(&[]).is_empty());
}

#[test]
fn test_load_hex_file() {
    let file = create_temp_image(".hex", b"00500093\n00000000\n");
    assert_eq!(load_image(file.path()).unwrap(), vec![0x0050_0093, 0]);
}

#[test]
fn test_load_binary_file() {
    let file = create_temp_image(".bin", &[0x13, 0x00, 0x00, 0x00]);
    assert_eq!(load_image(file.path()).unwrap(), vec![0x13]);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.hex");
    match load_image(&path) {
        Err(SimError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected io error, got {other:?}"),
    }
}
