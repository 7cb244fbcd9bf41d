//! A monotonic high-water mark cell.

use core::fmt;

use crate::max_swap::max_swap;
use crate::sync::{AtomicU64, Ordering};

/// A shared `u64` cell that only moves upward.
///
/// `Watermark` is a thin wrapper over `AtomicU64` whose only write path is
/// [`raise`](Watermark::raise), so the stored value is monotonically
/// non-decreasing for as long as nothing stores through
/// [`as_atomic`](Watermark::as_atomic) directly.
#[repr(transparent)]
pub struct Watermark {
    inner: AtomicU64,
}

impl Default for Watermark {
    #[inline(always)]
    fn default() -> Self {
        Self::new(0)
    }
}

impl Watermark {
    /// Creates a new watermark holding `value`.
    #[cfg(not(loom))]
    #[inline(always)]
    pub const fn new(value: u64) -> Self {
        Self {
            inner: AtomicU64::new(value),
        }
    }

    /// Creates a new watermark holding `value`.
    #[cfg(loom)]
    #[inline(always)]
    pub fn new(value: u64) -> Self {
        Self {
            inner: AtomicU64::new(value),
        }
    }

    /// Loads the current value with `Acquire` ordering.
    #[inline(always)]
    pub fn get(&self) -> u64 {
        self.inner.load(Ordering::Acquire)
    }

    /// Loads the current value with the given ordering.
    #[inline(always)]
    pub fn load(&self, order: Ordering) -> u64 {
        self.inner.load(order)
    }

    /// Raises the watermark to `max(current, value)`.
    ///
    /// Lock-free; if `value` is not larger than the current value, no store
    /// occurs.
    #[inline(always)]
    pub fn raise(&self, value: u64) {
        max_swap(Some(&self.inner), value);
    }

    /// Returns the underlying atomic.
    ///
    /// Storing a smaller value through this reference breaks the
    /// monotonicity of the watermark; it exists so a `Watermark` embedded in
    /// a larger structure can be handed to [`max_swap`] alongside plain
    /// cells.
    #[inline(always)]
    pub fn as_atomic(&self) -> &AtomicU64 {
        &self.inner
    }

    /// Consumes the watermark, returning the contained value.
    #[cfg(not(loom))]
    #[inline(always)]
    pub fn into_inner(self) -> u64 {
        self.inner.into_inner()
    }
}

impl From<u64> for Watermark {
    #[inline(always)]
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for Watermark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Watermark")
            .field(&self.load(Ordering::Relaxed))
            .finish()
    }
}
