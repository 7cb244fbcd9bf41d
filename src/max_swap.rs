//! The atomic max-swap operation.

use crate::sync::{AtomicU64, Ordering};

/// Atomically raises `target` to `max(*target, value)`.
///
/// This is a classic optimistic CAS loop:
/// - load the current value as `prev`
/// - if `value <= prev`, the cell already holds the maximum; return with no
///   store
/// - otherwise attempt to exchange `prev` for `value`; a failed exchange
///   yields the freshly observed value, which becomes the new `prev` for the
///   next round
///
/// The loop is lock-free: an exchange only fails because another thread's
/// update landed first, and each retry re-checks whether that update already
/// made the cell large enough.
///
/// An absent `target` is a deliberate no-op, not an error. Call sites that
/// cannot guarantee a live cell rely on the silent-return contract; do not
/// panic or report here.
///
/// Orderings are `AcqRel` on a successful exchange and `Acquire` on loads,
/// so the final maximum is visible to any thread that subsequently reads the
/// cell with `Acquire` or stronger.
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicU64, Ordering};
/// use watermark::max_swap;
///
/// let cell = AtomicU64::new(5);
/// max_swap(Some(&cell), 3);
/// assert_eq!(cell.load(Ordering::Acquire), 5);
/// max_swap(Some(&cell), 9);
/// assert_eq!(cell.load(Ordering::Acquire), 9);
/// max_swap(None, 42); // silent no-op
/// ```
#[inline]
pub fn max_swap(target: Option<&AtomicU64>, value: u64) {
    let Some(target) = target else {
        return;
    };
    let mut prev = target.load(Ordering::Acquire);
    while value > prev {
        match target.compare_exchange_weak(prev, value, Ordering::AcqRel, Ordering::Acquire) {
            Ok(_) => return,
            Err(current) => prev = current,
        }
    }
}
