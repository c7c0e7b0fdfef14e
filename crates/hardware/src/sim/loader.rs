//! Program Image Loader.
//!
//! This module turns program images on disk into word vectors. It performs:
//! 1. **Hex parsing:** `$readmemh`-style text, one or more hex words per line,
//!    with `@addr` directives setting the word address.
//! 2. **Binary parsing:** Raw little-endian words.
//! 3. **File loading:** Picks the parser by file extension.

use std::fs;
use std::path::Path;

use crate::common::error::{SimError, SimResult};

/// Largest word address an `@addr` directive may select.
const MAX_IMAGE_WORDS: usize = 1 << 20;

/// Bytes per word in a binary image.
const WORD_BYTES: usize = 4;

/// Parses a hex image.
///
/// Each whitespace-separated token is a 32-bit hex word, with an optional
/// `0x` prefix and `_` digit separators. A token `@N` moves the write cursor
/// to word address `N` (hex); skipped words are zero. `#` and `//` start a
/// comment running to the end of the line.
///
/// # Errors
///
/// Returns [`SimError::ImageParse`] for a token that is not a valid word or
/// address, and [`SimError::ImageTooLarge`] for an address past the loader limit.
///
/// # Examples
///
/// ```
/// use rvpipe_core::sim::loader::parse_hex_image;
///
/// let image = parse_hex_image("00500093 // addi x1, x0, 5\n@4\n0x00000013\n").unwrap();
/// assert_eq!(image, vec![0x0050_0093, 0, 0, 0, 0x13]);
/// ```
pub fn parse_hex_image(text: &str) -> SimResult<Vec<u32>> {
    let mut words = Vec::new();
    let mut cursor = 0usize;

    for (idx, raw) in text.lines().enumerate() {
        let line = strip_comment(raw);
        let parse_err = || SimError::ImageParse { line: idx + 1, text: raw.trim().to_string() };

        for token in line.split_whitespace() {
            if let Some(addr) = token.strip_prefix('@') {
                cursor = parse_hex(addr).ok_or_else(parse_err)? as usize;
                if cursor > MAX_IMAGE_WORDS {
                    return Err(SimError::ImageTooLarge {
                        words: cursor,
                        capacity: MAX_IMAGE_WORDS,
                    });
                }
                continue;
            }

            let word = parse_hex(token).ok_or_else(parse_err)?;
            if cursor >= words.len() {
                words.resize(cursor + 1, 0);
            }
            words[cursor] = word;
            cursor += 1;
        }
    }

    Ok(words)
}

/// Parses a raw binary image of little-endian 32-bit words.
///
/// A trailing partial word is zero-padded.
pub fn parse_binary_image(bytes: &[u8]) -> Vec<u32> {
    bytes
        .chunks(WORD_BYTES)
        .map(|chunk| {
            let mut word = [0u8; WORD_BYTES];
            word[..chunk.len()].copy_from_slice(chunk);
            u32::from_le_bytes(word)
        })
        .collect()
}

/// Loads an image file.
///
/// Files with a `.bin` extension are parsed as raw binary; anything else is
/// parsed as a hex image.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read, or any error from
/// [`parse_hex_image`].
pub fn load_image(path: impl AsRef<Path>) -> SimResult<Vec<u32>> {
    let path = path.as_ref();
    let io_err = |source| SimError::Io { path: path.to_path_buf(), source };

    let is_binary = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("bin"));
    if is_binary {
        let bytes = fs::read(path).map_err(io_err)?;
        Ok(parse_binary_image(&bytes))
    } else {
        let text = fs::read_to_string(path).map_err(io_err)?;
        parse_hex_image(&text)
    }
}

fn strip_comment(line: &str) -> &str {
    let end = [line.find('#'), line.find("//")].into_iter().flatten().min().unwrap_or(line.len());
    &line[..end]
}

fn parse_hex(token: &str) -> Option<u32> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token)
        .replace('_', "");
    if digits.is_empty() {
        return None;
    }
    u32::from_str_radix(&digits, 16).ok()
}
