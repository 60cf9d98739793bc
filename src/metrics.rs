//! Request hit counting.
//!
//! [`HitCounter`] is an owned, injectable handle rather than a global: the
//! app creates one, hands clones to the middleware and the admin handlers,
//! and every clone observes the same count. Two `HitCounter::new()` values
//! never share state, so tests can run in parallel without interfering.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// A shared, monotonically increasing request counter with reset.
///
/// Nothing else is published through the counter, so relaxed atomics are
/// enough: every `increment` is still counted exactly once.
#[derive(Clone, Debug, Default)]
pub struct HitCounter {
    hits: Arc<AtomicU64>,
}

impl HitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Sets the count back to zero. Callers decide who may do this.
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
    }

    pub fn value(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_counts() {
        let hits = HitCounter::new();
        assert_eq!(hits.value(), 0);
        hits.increment();
        hits.increment();
        assert_eq!(hits.value(), 2);
    }

    #[test]
    fn reset_is_unconditional() {
        let hits = HitCounter::new();
        for _ in 0..5 {
            hits.increment();
        }
        hits.reset();
        assert_eq!(hits.value(), 0);
        hits.reset();
        assert_eq!(hits.value(), 0);
    }

    #[test]
    fn clones_share_independent_instances_do_not() {
        let a = HitCounter::new();
        let a2 = a.clone();
        let b = HitCounter::new();
        a2.increment();
        assert_eq!(a.value(), 1);
        assert_eq!(b.value(), 0);
    }

    #[test]
    fn concurrent_increments_are_all_counted() {
        const THREADS: usize = 16;
        const PER_THREAD: usize = 1_000;

        let hits = HitCounter::new();
        hits.reset();
        std::thread::scope(|s| {
            for _ in 0..THREADS {
                let hits = hits.clone();
                s.spawn(move || {
                    for _ in 0..PER_THREAD {
                        hits.increment();
                    }
                });
            }
        });
        assert_eq!(hits.value(), (THREADS * PER_THREAD) as u64);
    }
}
