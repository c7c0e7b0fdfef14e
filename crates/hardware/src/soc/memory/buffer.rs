//! Word Buffer Implementation.
//!
//! Backing storage shared by instruction and data memory: a fixed number of
//! 32-bit words, addressed by byte address. Addresses wrap modulo the
//! capacity, so no address can fault or panic.

use crate::common::constants::WORD_SHIFT;
use crate::common::error::{SimError, SimResult};

/// Fixed-capacity word-addressed storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordBuffer {
    words: Vec<u32>,
}

impl WordBuffer {
    /// Creates a zero-filled buffer of `capacity` words.
    ///
    /// A capacity of 0 is raised to 1 so that every address maps to a word.
    pub fn new(capacity: usize) -> Self {
        Self { words: vec![0; capacity.max(1)] }
    }

    /// Returns the capacity in words.
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; a buffer holds at least one word.
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Maps a byte address to a word index.
    #[inline]
    pub const fn index(&self, addr: u32) -> usize {
        (addr >> WORD_SHIFT) as usize % self.words.len()
    }

    /// Reads the word containing byte address `addr`.
    #[inline]
    pub fn read(&self, addr: u32) -> u32 {
        self.words[self.index(addr)]
    }

    /// Writes the word containing byte address `addr`.
    #[inline]
    pub fn write(&mut self, addr: u32, val: u32) {
        let idx = self.index(addr);
        self.words[idx] = val;
    }

    /// Copies an image into the buffer starting at word 0.
    ///
    /// Words past the image keep their previous contents.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ImageTooLarge`] if the image has more words than the buffer.
    pub fn load(&mut self, image: &[u32]) -> SimResult<()> {
        if image.len() > self.words.len() {
            return Err(SimError::ImageTooLarge { words: image.len(), capacity: self.words.len() });
        }
        self.words[..image.len()].copy_from_slice(image);
        Ok(())
    }

    /// Returns the contents as a slice, word 0 first.
    pub fn as_slice(&self) -> &[u32] {
        &self.words
    }
}
