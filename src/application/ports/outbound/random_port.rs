//! Randomness port used for fallback selection

/// Source of uniform random choices
pub trait RandomPort: Send + Sync {
    /// A uniformly chosen index in `0..len`. `len` is never zero.
    fn pick_index(&self, len: usize) -> usize;
}
