//! Loom model checking of the CAS retry loop.
//!
//! Run with: `RUSTFLAGS="--cfg loom" cargo test --test loom --release`

#![cfg(loom)]

use loom::sync::atomic::{AtomicU64, Ordering};
use loom::thread;

use watermark::max_swap;

#[test]
fn loom_two_racing_proposals_end_at_max() {
    loom::model(|| {
        let cell = loom::sync::Arc::new(AtomicU64::new(1));

        let a = cell.clone();
        let t1 = thread::spawn(move || max_swap(Some(&a), 7));
        let b = cell.clone();
        let t2 = thread::spawn(move || max_swap(Some(&b), 4));

        t1.join().unwrap();
        t2.join().unwrap();

        assert_eq!(cell.load(Ordering::Acquire), 7);
    });
}

#[test]
fn loom_loser_retries_and_value_survives() {
    loom::model(|| {
        let cell = loom::sync::Arc::new(AtomicU64::new(0));

        let a = cell.clone();
        let t1 = thread::spawn(move || max_swap(Some(&a), 2));
        let b = cell.clone();
        let t2 = thread::spawn(move || max_swap(Some(&b), 3));

        t1.join().unwrap();
        t2.join().unwrap();

        // Whichever CAS wins a round, no proposal is lost: 3 dominates.
        assert_eq!(cell.load(Ordering::Acquire), 3);
    });
}

#[test]
fn loom_dominated_proposal_never_writes() {
    loom::model(|| {
        let cell = loom::sync::Arc::new(AtomicU64::new(9));

        let a = cell.clone();
        let t1 = thread::spawn(move || max_swap(Some(&a), 5));
        let b = cell.clone();
        let t2 = thread::spawn(move || max_swap(Some(&b), 9));

        t1.join().unwrap();
        t2.join().unwrap();

        assert_eq!(cell.load(Ordering::Acquire), 9);
    });
}
