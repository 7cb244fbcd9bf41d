//! # `watermark` - Lock-Free Atomic Max-Swap
//!
//! A single concurrency primitive: atomically raise a shared unsigned 64-bit
//! cell to the larger of its current value and a proposed value, with no
//! external locking.
//!
//! ## Guarantees
//!
//! - **Lock-free**: the operation never blocks, sleeps, or yields. Under
//!   contention it retries a compare-and-swap; each failed attempt means some
//!   other thread's update succeeded, so the system as a whole always makes
//!   progress.
//! - **Monotonic**: the cell's value never decreases across [`max_swap`] /
//!   [`Watermark::raise`] calls. Once every concurrent call touching a cell
//!   has returned, the cell holds the maximum of the initial value and every
//!   proposed value.
//! - **Allocation-free**: the primitive operates on a caller-owned cell and
//!   never allocates.
//! - **Unsigned throughout**: comparison and storage are plain `u64`; values
//!   with the top bit set compare as large unsigned numbers.
//!
//! ## Example
//!
//! ```rust
//! use watermark::Watermark;
//!
//! let peak = Watermark::new(0);
//!
//! std::thread::scope(|s| {
//!     for sample in [17_u64, 4, 99, 23] {
//!         let peak = &peak;
//!         s.spawn(move || peak.raise(sample));
//!     }
//! });
//!
//! assert_eq!(peak.get(), 99);
//! ```
//!
//! The free function [`max_swap`] is the raw form, taking an optional
//! reference to any caller-owned `AtomicU64`; an absent target is a silent
//! no-op by contract.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod max_swap;
pub mod watermark;

pub(crate) mod sync;

pub use max_swap::max_swap;
pub use watermark::Watermark;

// Compile-time layout assertions: `Watermark` is a thin wrapper and must
// match the underlying atomic exactly.
#[cfg(not(loom))]
const _: () = {
    use core::mem;
    use core::sync::atomic::AtomicU64;

    assert!(mem::size_of::<Watermark>() == mem::size_of::<AtomicU64>());
    assert!(mem::align_of::<Watermark>() == mem::align_of::<AtomicU64>());
};
