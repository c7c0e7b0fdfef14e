//! Pipeline Latch Interface.
//!
//! This module defines the common trait implemented by every inter-stage
//! latch entry, so the generic pipeline register can flush and inspect them.

/// Represents the contents of a pipeline latch (inter-stage buffer).
///
/// The default value of an implementor is its bubble: zeroed fields and
/// deasserted control, behaviorally a NOP.
pub trait PipelineLatch: Copy + Default {
    /// Returns the bubble value loaded on a flush.
    fn bubble() -> Self {
        Self::default()
    }

    /// Checks if the latch holds a bubble.
    ///
    /// # Returns
    ///
    /// `true` if the entry cannot write state or redirect control flow.
    fn is_bubble(&self) -> bool;
}
