//! Bounded MPMC queue for transport-internal buffering.
//!
//! [`BoundedQueue`] holds in-flight packets and acknowledgement records
//! between I/O receive threads (producers) and application drain threads
//! (consumers). Capacity is explicit and fixed: under bursty load the queue
//! reports overflow instead of growing, which bounds memory.
//!
//! Two modes, chosen at construction:
//!
//! - **FIFO** ([`BoundedQueue::new`]): lock-free, strict FIFO relative to
//!   successful-claim order.
//! - **Sequence-ordered** ([`BoundedQueue::with_sequencing`]): sequenced
//!   pushes insert by wraparound-aware packet sequence, keeping the buffered
//!   window approximately ascending; that path serializes on a per-instance
//!   lock, so throughput is bounded by lock contention.
//!
//! Overflow and emptiness are routine, observable outcomes (`Err(item)` /
//! `None`), never panics or errors. The queue provides no timeouts; callers
//! wanting a bounded wait poll the `try_` variants against their own
//! deadline.
//!
//! # Example
//!
//! ```
//! use weir::BoundedQueue;
//!
//! let queue: BoundedQueue<u64> = BoundedQueue::new(16);
//!
//! queue.try_push(7).expect("queue full");
//! assert_eq!(queue.try_pop(), Some(7));
//! assert_eq!(queue.try_pop(), None);
//! ```

pub(crate) mod ring;

use crossbeam_utils::Backoff;

use crate::seq::Seq16;
use self::ring::Ring;

/// Fixed-capacity queue safe for concurrent push and pop across many
/// threads.
///
/// All methods take `&self`; share the queue across threads with an `Arc`.
pub struct BoundedQueue<T> {
    ring: Ring<T>,
}

impl<T> BoundedQueue<T> {
    /// Creates a FIFO queue with the given capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            ring: Ring::new(capacity, false),
        }
    }

    /// Creates a queue with sequence-ordered insertion support.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    #[must_use]
    pub fn with_sequencing(capacity: usize) -> Self {
        Self {
            ring: Ring::new(capacity, true),
        }
    }

    /// Returns true if the queue supports sequence-ordered insertion.
    #[inline]
    #[must_use]
    pub fn is_sequenced(&self) -> bool {
        self.ring.is_sequenced()
    }

    /// Returns the fixed capacity.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Returns the element count at the instant of the call.
    ///
    /// Advisory only under concurrent access: the value may be stale by the
    /// time the caller acts on it.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Returns true if the queue was observed empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Attempts to push an item at the logical tail (never blocks).
    ///
    /// # Errors
    ///
    /// Returns `Err(item)` if the queue is full, handing the value back for
    /// retry or drop.
    #[inline]
    pub fn try_push(&self, item: T) -> Result<(), T> {
        self.ring.try_push(item)
    }

    /// Pushes an item, spinning with backoff until space is available.
    ///
    /// Use when the caller would rather wait than drop; the spin is capped
    /// per iteration and yields to the scheduler under sustained fullness.
    pub fn push(&self, mut item: T) {
        let backoff = Backoff::new();
        loop {
            match self.try_push(item) {
                Ok(()) => return,
                Err(returned) => {
                    item = returned;
                    backoff.snooze();
                }
            }
        }
    }

    /// Attempts to push an item carrying a packet sequence number
    /// (never blocks).
    ///
    /// The item is inserted before any buffered element that is ahead of
    /// `seq` in circular order, otherwise appended at the tail.
    ///
    /// # Errors
    ///
    /// Returns `Err(item)` if the queue is full.
    ///
    /// # Panics
    ///
    /// Panics if the queue was not built [`with_sequencing`]
    /// (contract violation).
    ///
    /// [`with_sequencing`]: BoundedQueue::with_sequencing
    #[inline]
    pub fn try_push_sequenced(&self, item: T, seq: Seq16) -> Result<(), T> {
        self.ring.try_push_sequenced(item, seq)
    }

    /// Sequenced push, spinning with backoff until space is available.
    ///
    /// # Panics
    ///
    /// Panics if the queue was not built with sequencing support.
    pub fn push_sequenced(&self, mut item: T, seq: Seq16) {
        let backoff = Backoff::new();
        loop {
            match self.try_push_sequenced(item, seq) {
                Ok(()) => return,
                Err(returned) => {
                    item = returned;
                    backoff.snooze();
                }
            }
        }
    }

    /// Attempts to claim and remove the logical head (never blocks).
    ///
    /// Returns `None` when the queue is observed empty.
    #[inline]
    #[must_use]
    pub fn try_pop(&self) -> Option<T> {
        self.ring.try_pop()
    }

    /// Pops an item, spinning with backoff until one is available.
    #[must_use]
    pub fn pop(&self) -> T {
        let backoff = Backoff::new();
        loop {
            if let Some(item) = self.try_pop() {
                return item;
            }
            backoff.snooze();
        }
    }
}
