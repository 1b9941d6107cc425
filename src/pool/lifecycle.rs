//! Lifecycle guard for pooled objects with drop-time leak detection.
//!
//! A [`Pooled`] guard owns a pool-managed value and distinguishes
//! "returned to the pool" from "dropped without return". The latter is a
//! leak: the buffer escaped the pool and fell back to the general allocator.
//! The guard's destructor classifies the drop and reports leaks through the
//! trace sink with the value's diagnostic context.
//!
//! The guard implements no pooling policy; [`crate::pool::Pool`] (or any
//! external pool) drives the flags through the marker methods.

use std::mem::ManuallyDrop;
use std::ops::{Deref, DerefMut};
use std::panic::{AssertUnwindSafe, Location, catch_unwind};

use crate::trace::{debug, warn};

/// Diagnostic contract for pool-managed values.
///
/// Both accessors feed the leak report only; they are never called on the
/// hot path.
pub trait PoolItem {
    /// Short human-readable tag naming the value's type.
    fn type_tag(&self) -> &'static str;

    /// Free-form description of the value's current contents.
    fn describe(&self) -> String;
}

/// Classification of a guard reaching its destructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reclaim {
    /// Intentionally retired by its pool; reclamation is silent.
    Released,
    /// Dropped without ever being returned to its pool.
    Leaked,
    /// Returned to its pool but reached the reclaimer anyway
    /// (outlived the pool's retention; not necessarily a bug).
    DeadReclaimed,
}

/// Guard around a pool-managed value.
///
/// Freshly constructed guards count as checked out: dropping one without
/// first returning it to a pool emits a leak warning naming the value's
/// type tag, contents, and checkout site.
pub struct Pooled<T: PoolItem> {
    value: ManuallyDrop<T>,
    /// True once the value has been properly returned to its pool.
    dead: bool,
    /// True once the pool has retired the value for good (e.g. on
    /// shutdown or over-retention); suppresses all reclamation reports.
    released: bool,
    /// Where the value was last checked out, for the leak report.
    checkout_site: &'static Location<'static>,
}

impl<T: PoolItem> Pooled<T> {
    /// Wraps a value as checked out, capturing the caller as the
    /// checkout site.
    #[track_caller]
    pub fn new(value: T) -> Self {
        Self {
            value: ManuallyDrop::new(value),
            dead: false,
            released: false,
            checkout_site: Location::caller(),
        }
    }

    /// True if the value has been returned to its pool.
    #[inline]
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    /// True if the pool has permanently retired the value.
    #[inline]
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Where the value was last checked out.
    #[inline]
    #[must_use]
    pub fn checkout_site(&self) -> &'static Location<'static> {
        self.checkout_site
    }

    /// Marks the value as properly returned to its pool.
    pub fn mark_returned(&mut self) {
        self.dead = true;
    }

    /// Marks the value as checked out again, recapturing the caller as the
    /// new checkout site. Pools call this when recycling a retained guard.
    #[track_caller]
    pub fn rearm(&mut self) {
        self.dead = false;
        self.released = false;
        self.checkout_site = Location::caller();
    }

    /// Permanently retires the value: its eventual drop is intentional and
    /// reported nowhere.
    pub fn retire(&mut self) {
        self.released = true;
    }

    /// Disarms the guard and hands the value back out.
    #[must_use]
    pub fn into_inner(mut self) -> T {
        // SAFETY: `self` is forgotten immediately below, so the value is
        // moved out exactly once and the destructor never observes it.
        let value = unsafe { ManuallyDrop::take(&mut self.value) };
        std::mem::forget(self);
        value
    }

    /// Classifies what this guard's drop would report.
    #[must_use]
    pub fn classify(&self) -> Reclaim {
        if self.released {
            Reclaim::Released
        } else if self.dead {
            Reclaim::DeadReclaimed
        } else {
            Reclaim::Leaked
        }
    }

    /// Diagnostic context for the reclamation report: type tag, contents,
    /// and checkout site. External pools can reuse this in their own logs.
    #[must_use]
    pub fn diagnostic_context(&self) -> String {
        format!(
            "{} [{}] checked out at {}",
            self.value.type_tag(),
            self.value.describe(),
            self.checkout_site
        )
    }
}

impl<T: PoolItem> std::fmt::Debug for Pooled<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pooled")
            .field("type_tag", &self.value.type_tag())
            .field("dead", &self.dead)
            .field("released", &self.released)
            .field("checkout_site", &format_args!("{}", self.checkout_site))
            .finish()
    }
}

impl<T: PoolItem> Deref for Pooled<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: PoolItem> DerefMut for Pooled<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: PoolItem> Drop for Pooled<T> {
    fn drop(&mut self) {
        let verdict = self.classify();
        if verdict != Reclaim::Released {
            // The diagnostic path must never abort reclamation: a panic in
            // type_tag/describe (or in the subscriber) is swallowed here.
            let _ = catch_unwind(AssertUnwindSafe(|| match verdict {
                Reclaim::Leaked => {
                    warn!(
                        "{} was reclaimed without being returned to its pool",
                        self.diagnostic_context()
                    );
                }
                Reclaim::DeadReclaimed => {
                    debug!("dead {} was reclaimed", self.diagnostic_context());
                }
                Reclaim::Released => {}
            }));
        }

        // SAFETY: the value is initialized (only `into_inner` moves it out,
        // and that forgets `self`), and this is the single drop site.
        unsafe { ManuallyDrop::drop(&mut self.value) };
    }
}
