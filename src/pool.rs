//! Bounded recycling pool for buffer objects.
//!
//! [`Pool`] retains returned values up to a retention cap and hands them
//! back out on later checkouts, keeping buffer churn away from the general
//! allocator. Every value is wrapped in a [`Pooled`] guard whose destructor
//! reports values that escape without being returned (see
//! [`lifecycle`]).
//!
//! An optional instance ceiling bounds the total number of values the pool
//! will ever create; hitting it is a real error ([`PoolError::Exhausted`]),
//! unlike queue overflow which is routine.

pub mod lifecycle;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

use crate::trace::debug;
pub use lifecycle::{PoolItem, Pooled};

/// Errors from pool checkout.
#[derive(Debug, Error)]
pub enum PoolError {
    /// The pool has already created its maximum number of live instances.
    #[error("pool instance limit reached ({limit})")]
    Exhausted {
        /// The configured instance ceiling.
        limit: usize,
    },
}

/// Recycling pool with a retention cap and an optional instance ceiling.
///
/// All methods take `&self`; share the pool across threads with an `Arc`.
pub struct Pool<T: PoolItem> {
    /// Returned guards awaiting reuse, newest last.
    retained: Mutex<Vec<Pooled<T>>>,
    /// Instances created and not yet retired (checked out or retained).
    live: AtomicUsize,
    /// Maximum number of returned guards kept for reuse.
    max_retained: usize,
    /// Maximum number of live instances; `usize::MAX` when unbounded.
    max_live: usize,
}

impl<T: PoolItem> Pool<T> {
    /// Creates a pool retaining at most `max_retained` returned values,
    /// with no ceiling on total instances.
    #[must_use]
    pub fn new(max_retained: usize) -> Self {
        Self::with_instance_limit(max_retained, usize::MAX)
    }

    /// Creates a pool that will never have more than `max_live` instances
    /// outstanding (checked out plus retained).
    #[must_use]
    pub fn with_instance_limit(max_retained: usize, max_live: usize) -> Self {
        Self {
            retained: Mutex::new(Vec::new()),
            live: AtomicUsize::new(0),
            max_retained,
            max_live,
        }
    }

    /// Number of live instances (checked out plus retained).
    #[must_use]
    pub fn live(&self) -> usize {
        self.live.load(Ordering::Relaxed)
    }

    /// Number of returned values currently retained for reuse.
    #[must_use]
    pub fn idle(&self) -> usize {
        self.lock_retained().len()
    }

    /// Checks out a value, reusing a retained one when available and
    /// calling `make` to create a fresh one otherwise.
    ///
    /// The returned guard records this call site as its checkout site.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::Exhausted`] if creating a fresh value would
    /// exceed the instance ceiling.
    #[track_caller]
    pub fn checkout_with(&self, make: impl FnOnce() -> T) -> Result<Pooled<T>, PoolError> {
        if let Some(mut guard) = self.lock_retained().pop() {
            guard.rearm();
            return Ok(guard);
        }

        // Reserve a live slot before constructing, so concurrent checkouts
        // cannot race past the ceiling.
        let mut live = self.live.load(Ordering::Relaxed);
        loop {
            if live >= self.max_live {
                return Err(PoolError::Exhausted {
                    limit: self.max_live,
                });
            }
            match self.live.compare_exchange_weak(
                live,
                live + 1,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(observed) => live = observed,
            }
        }

        debug!("pool empty, allocating a fresh instance (this is not a leak)");
        Ok(Pooled::new(make()))
    }

    /// Returns a guard to the pool.
    ///
    /// The value is marked dead (properly returned) and retained for reuse;
    /// if the retention cap is already met it is retired instead, dropping
    /// it without a leak report.
    pub fn give_back(&self, mut guard: Pooled<T>) {
        guard.mark_returned();

        let mut retained = self.lock_retained();
        if retained.len() < self.max_retained {
            retained.push(guard);
        } else {
            drop(retained);
            guard.retire();
            self.live.fetch_sub(1, Ordering::Relaxed);
            // guard drops here, silently
        }
    }

    fn lock_retained(&self) -> std::sync::MutexGuard<'_, Vec<Pooled<T>>> {
        // A poisoned lock only means another thread panicked while holding
        // the free list; its contents are still sound guards.
        self.retained.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: PoolItem> Drop for Pool<T> {
    fn drop(&mut self) {
        // Retained values going down with the pool are intentional
        // releases, never leaks.
        for guard in self.lock_retained().iter_mut() {
            guard.retire();
        }
    }
}
