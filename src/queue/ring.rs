//! Core lock-free MPMC ring buffer algorithm.
//!
//! This module provides a bounded MPMC (Multi-Producer Multi-Consumer) ring
//! buffer using per-slot stamps for synchronization.
//!
//! # Algorithm
//!
//! The algorithm is based on Dmitry Vyukov's bounded MPMC queue:
//!
//! - Each slot has an atomic stamp
//! - A producer reads `head`, checks that the target slot's stamp equals the
//!   read position (slot vacated for this lap), then CASes `head` forward to
//!   claim exclusive write access
//! - After writing, the producer publishes by setting `slot.stamp = pos + 1`
//! - A consumer symmetrically checks `slot.stamp == tail + 1` before CASing
//!   `tail`, and releases the slot with `slot.stamp = tail + capacity`
//!
//! The verify-stamp-then-CAS order is load-bearing: claiming with a bare
//! `fetch_add` would let a producer take a slot not yet vacated by a lagging
//! consumer.
//!
//! # Sequence-ordered mode
//!
//! When constructed with sequencing support, each slot additionally records
//! the packet sequence number it holds, and a sequenced push may insert
//! before already-buffered elements that are ahead of it in circular order
//! (shifting them one slot right). That path is serialized by a per-instance
//! mutex; in this mode every payload publish and clear runs under the lock
//! so a shift can never race a concurrent write to the same slot.

use std::cell::UnsafeCell;
use std::mem::MaybeUninit;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::seq::Seq16;

/// Sentinel in a slot's sequence cell: no recorded packet sequence.
const SEQ_EMPTY: u32 = u32::MAX;

/// A slot in the MPMC ring buffer.
#[repr(C)]
#[repr(align(64))] // Each slot on its own cache line to avoid false sharing
pub(crate) struct Slot<T> {
    /// Synchronization stamp.
    /// - Initial: slot index (0, 1, 2, ..., capacity-1)
    /// - After producer write: position + 1 (signals "data ready")
    /// - After consumer read: position + capacity (signals "slot free")
    stamp: AtomicU64,

    /// Recorded packet sequence for the sequence-ordered insertion scan,
    /// or [`SEQ_EMPTY`]. Only meaningful on rings built with sequencing.
    seq: AtomicU32,

    /// The actual data stored in this slot.
    value: UnsafeCell<MaybeUninit<T>>,
}

impl<T> Slot<T> {
    /// Creates a new slot with the given initial stamp.
    const fn new(stamp: u64) -> Self {
        Self {
            stamp: AtomicU64::new(stamp),
            seq: AtomicU32::new(SEQ_EMPTY),
            value: UnsafeCell::new(MaybeUninit::uninit()),
        }
    }
}

// SAFETY: Slot is Sync because:
// - stamp and seq are atomics (inherently Sync)
// - value is protected by the stamp protocol (and, in sequenced mode,
//   by the instance order lock)
unsafe impl<T: Send> Sync for Slot<T> {}
unsafe impl<T: Send> Send for Slot<T> {}

/// Producer-side state: head index for slot claiming.
#[repr(C)]
#[repr(align(64))]
struct ProducerState {
    /// Next logical position to claim for writing.
    /// Producers race to advance this via compare-exchange.
    head: AtomicU64,
}

/// Consumer-side state: tail index for slot claiming.
#[repr(C)]
#[repr(align(64))]
struct ConsumerState {
    /// Next logical position to claim for reading.
    /// Consumers race to advance this via compare-exchange.
    tail: AtomicU64,
}

/// Core MPMC ring buffer structure.
///
/// Capacity is fixed at construction. Logical positions are wrapping `u64`
/// counters; the physical slot for position `p` is `p % capacity`, and the
/// advisory element count is `head - tail`.
pub(crate) struct Ring<T> {
    /// Producer state (head index for claiming).
    producer: ProducerState,

    /// Consumer state (tail index for claiming).
    consumer: ConsumerState,

    /// Serializes sequenced insertion against any concurrent publish or
    /// drain of the same window. `None` on plain FIFO rings, which stay
    /// entirely lock-free.
    order: Option<Mutex<()>>,

    /// Ring buffer slots with per-slot stamps.
    slots: Box<[Slot<T>]>,
}

// SAFETY: Ring is Send because all fields are Send.
unsafe impl<T: Send> Send for Ring<T> {}

// SAFETY: Ring is Sync because concurrent access is mediated by atomics:
// - Producers and consumers synchronize via CAS on head/tail
// - Per-slot stamps give exactly one thread access to a slot per position
// - Sequenced-mode shifts additionally hold the order mutex
unsafe impl<T: Send> Sync for Ring<T> {}

impl<T> Ring<T> {
    /// Creates a ring with the given capacity and mode.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub(crate) fn new(capacity: usize, sequenced: bool) -> Self {
        assert!(capacity > 0, "queue capacity must be > 0");

        let slots: Box<[Slot<T>]> = (0..capacity).map(|i| Slot::new(i as u64)).collect();

        Self {
            producer: ProducerState {
                head: AtomicU64::new(0),
            },
            consumer: ConsumerState {
                tail: AtomicU64::new(0),
            },
            order: sequenced.then(|| Mutex::new(())),
            slots,
        }
    }

    /// Test-only constructor that pre-winds the logical counters, so wrap
    /// behavior near `u64::MAX` can be exercised without 2^64 operations.
    #[cfg(test)]
    fn with_start_position(capacity: usize, sequenced: bool, start: u64) -> Self {
        let ring = Self::new(capacity, sequenced);
        ring.producer.head.store(start, Ordering::Relaxed);
        ring.consumer.tail.store(start, Ordering::Relaxed);
        for i in 0..capacity as u64 {
            let pos = start.wrapping_add(i);
            ring.slot(pos).stamp.store(pos, Ordering::Relaxed);
        }
        ring
    }

    #[inline]
    fn slot(&self, pos: u64) -> &Slot<T> {
        &self.slots[(pos % self.slots.len() as u64) as usize]
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn is_sequenced(&self) -> bool {
        self.order.is_some()
    }

    /// Advisory element count: `head - tail` at the instant of the call.
    ///
    /// Under concurrent access the value may be stale by the time the caller
    /// acts on it.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        // Tail first, with Acquire so the head load cannot be hoisted above
        // it; a reordered pair could observe head < tail and wrap. Clamp to
        // capacity for the symmetric race where the tail advances between
        // the two loads.
        let tail = self.consumer.tail.load(Ordering::Acquire);
        let head = self.producer.head.load(Ordering::Relaxed);
        (head.wrapping_sub(tail) as usize).min(self.capacity())
    }

    /// Attempts to push an item at the logical tail of the queue.
    ///
    /// Lock-free on plain rings; on sequenced rings the payload publish is
    /// serialized with any in-flight insertion shift.
    ///
    /// # Errors
    ///
    /// Returns `Err(item)` if the queue is full.
    pub(crate) fn try_push(&self, item: T) -> Result<(), T> {
        loop {
            let pos = self.producer.head.load(Ordering::Relaxed);
            let slot = self.slot(pos);
            let stamp = slot.stamp.load(Ordering::Acquire);

            // Signed wrapping difference between stamp and position.
            let diff = stamp.wrapping_sub(pos) as i64;

            if diff == 0 {
                // Slot is vacated for this lap. Race to claim the position.
                if self
                    .producer
                    .head
                    .compare_exchange_weak(
                        pos,
                        pos.wrapping_add(1),
                        Ordering::Relaxed,
                        Ordering::Relaxed,
                    )
                    .is_ok()
                {
                    // On a sequenced ring an insertion shift may be touching
                    // neighboring slots; serialize with it.
                    let _guard = self.order.as_ref().map(Self::lock_order);

                    // SAFETY: The CAS succeeded, so no other producer can
                    // claim this position, and stamp == pos means the
                    // consumer side has released the slot.
                    unsafe {
                        (*slot.value.get()).write(item);
                    }
                    // Publish after the payload write; readers must never
                    // observe the new stamp before the new payload.
                    slot.stamp.store(pos.wrapping_add(1), Ordering::Release);
                    return Ok(());
                }
                // CAS failed: another producer won the position. Retry
                // against a freshly read head.
            } else if diff < 0 {
                // The prior occupant has not been drained for this lap:
                // capacity exhaustion, reported to the caller rather than
                // retried internally.
                return Err(item);
            }
            // diff > 0: head moved past this position under us. Retry.
        }
    }

    /// Attempts to push an item carrying a packet sequence number,
    /// inserting it before any buffered element that is ahead of it in
    /// circular order.
    ///
    /// # Errors
    ///
    /// Returns `Err(item)` if the queue is full.
    ///
    /// # Panics
    ///
    /// Panics if the ring was built without sequencing support.
    pub(crate) fn try_push_sequenced(&self, item: T, seq: Seq16) -> Result<(), T> {
        let order = match &self.order {
            Some(m) => m,
            None => panic!("sequenced push on a queue built without sequencing support"),
        };

        loop {
            let pos = self.producer.head.load(Ordering::Relaxed);
            let slot = self.slot(pos);
            let stamp = slot.stamp.load(Ordering::Acquire);
            let diff = stamp.wrapping_sub(pos) as i64;

            if diff == 0 {
                if self
                    .producer
                    .head
                    .compare_exchange_weak(
                        pos,
                        pos.wrapping_add(1),
                        Ordering::Relaxed,
                        Ordering::Relaxed,
                    )
                    .is_ok()
                {
                    let _guard = Self::lock_order(order);
                    self.publish_sequenced(pos, item, seq);
                    return Ok(());
                }
            } else if diff < 0 {
                return Err(item);
            }
        }
    }

    /// Attempts to claim and remove the logical head of the queue.
    ///
    /// Returns `None` when the queue is observed empty (head slot not yet
    /// published). Never blocks.
    pub(crate) fn try_pop(&self) -> Option<T> {
        loop {
            let pos = self.consumer.tail.load(Ordering::Relaxed);
            let slot = self.slot(pos);
            let stamp = slot.stamp.load(Ordering::Acquire);

            // A published slot at this position carries stamp == pos + 1;
            // stamp == pos would mean reserved but not yet published.
            let diff = stamp.wrapping_sub(pos.wrapping_add(1)) as i64;

            if diff == 0 {
                if self
                    .consumer
                    .tail
                    .compare_exchange_weak(
                        pos,
                        pos.wrapping_add(1),
                        Ordering::Relaxed,
                        Ordering::Relaxed,
                    )
                    .is_ok()
                {
                    let _guard = self.order.as_ref().map(Self::lock_order);

                    // SAFETY: The stamp check confirmed a published value for
                    // this position and the CAS gave us exclusive claim on it.
                    let item = unsafe { (*slot.value.get()).assume_init_read() };

                    // Clearing the slot (the read above moves the value out)
                    // also resets the sequence cell, so a later scan cannot
                    // match a stale packet sequence.
                    slot.seq.store(SEQ_EMPTY, Ordering::Relaxed);

                    // Release the slot for the next lap.
                    slot.stamp.store(
                        pos.wrapping_add(self.slots.len() as u64),
                        Ordering::Release,
                    );
                    return Some(item);
                }
                // CAS failed: another consumer claimed this position. Retry.
            } else if diff < 0 {
                return None;
            }
            // diff > 0: tail moved past this position under us. Retry.
        }
    }

    fn lock_order(order: &Mutex<()>) -> std::sync::MutexGuard<'_, ()> {
        // A poisoned order lock only means a panic mid-shift on another
        // thread; the stamps still describe slot ownership, so continue.
        order.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Publishes `item` at or before the claimed position `pos`, keeping the
    /// buffered window approximately ascending by circular sequence.
    ///
    /// Caller must hold the order lock and have won the head CAS for `pos`.
    fn publish_sequenced(&self, pos: u64, item: T, seq: Seq16) {
        let tail = self.consumer.tail.load(Ordering::Acquire);

        // Scan the window from the read side for the first element whose
        // recorded sequence is ahead of the new one. The scan stops at the
        // claimed write position; its sequence cell is always the empty
        // sentinel, so visiting it could never select an insertion point.
        let mut insert_at = None;
        let mut k = tail;
        while k != pos {
            let slot = self.slot(k);
            if slot.stamp.load(Ordering::Acquire) != k.wrapping_add(1) {
                // Claimed but not yet published (a producer waiting on this
                // lock), or already drained. The stable window ends here;
                // append instead of shifting over it.
                break;
            }
            let recorded = slot.seq.load(Ordering::Relaxed);
            if recorded != SEQ_EMPTY && Seq16(recorded as u16).is_ahead_of(seq) {
                insert_at = Some(k);
                break;
            }
            k = k.wrapping_add(1);
        }

        // A shift moves the payload of every slot in [at, pos); all of them
        // must be published before those payloads can be touched. A slot
        // past the insertion point can still be claimed-but-unpublished by
        // a producer that has not reached this lock yet.
        if let Some(at) = insert_at {
            let mut q = at.wrapping_add(1);
            while q != pos {
                if self.slot(q).stamp.load(Ordering::Acquire) != q.wrapping_add(1) {
                    insert_at = None;
                    break;
                }
                q = q.wrapping_add(1);
            }
        }

        match insert_at {
            Some(at) => {
                // Open a gap at `at`: shift every element from the claimed
                // position down to it one slot to the right. The window is
                // strictly shorter than the capacity, so source and
                // destination slots never alias.
                let mut i = pos;
                while i != at {
                    let dst = self.slot(i);
                    let src = self.slot(i.wrapping_sub(1));

                    // SAFETY: The scan verified stamp == position + 1 for
                    // every slot in [at, pos), so src holds a published
                    // value; dst is either the claimed (uninit) slot or was
                    // vacated by the previous iteration of this loop. The
                    // order lock keeps all other payload access out.
                    unsafe {
                        let v = (*src.value.get()).assume_init_read();
                        (*dst.value.get()).write(v);
                    }
                    dst.seq
                        .store(src.seq.load(Ordering::Relaxed), Ordering::Relaxed);
                    dst.stamp.store(
                        src.stamp.load(Ordering::Relaxed).wrapping_add(1),
                        Ordering::Release,
                    );
                    i = i.wrapping_sub(1);
                }

                let dst = self.slot(at);
                // SAFETY: The loop above moved the previous occupant of `at`
                // one slot right, so the cell is vacated; the order lock
                // keeps all other payload access out.
                unsafe {
                    (*dst.value.get()).write(item);
                }
                dst.seq.store(u32::from(seq.0), Ordering::Relaxed);
                // The stamp at `at` still reads `at + 1` from the element
                // published here before the shift, so the slot stays
                // readable; no stamp update is needed.
            }
            None => {
                // Nothing ahead of it in the window: plain append.
                let slot = self.slot(pos);
                // SAFETY: Caller won the head CAS for `pos` and holds the
                // order lock; the slot is vacated and exclusively ours.
                unsafe {
                    (*slot.value.get()).write(item);
                }
                slot.seq.store(u32::from(seq.0), Ordering::Relaxed);
                slot.stamp.store(pos.wrapping_add(1), Ordering::Release);
            }
        }
    }
}

impl<T> Drop for Ring<T> {
    fn drop(&mut self) {
        // Drain so buffered elements are dropped; no special teardown
        // protocol beyond releasing the storage.
        while self.try_pop().is_some() {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn fifo_order_single_thread() {
        let ring: Ring<u64> = Ring::new(8, false);

        for i in 0..8 {
            assert!(ring.try_push(i).is_ok());
        }
        for i in 0..8 {
            assert_eq!(ring.try_pop(), Some(i));
        }
        assert_eq!(ring.try_pop(), None);
    }

    #[test]
    fn len_tracks_pushes() {
        let ring: Ring<u32> = Ring::new(4, false);
        assert_eq!(ring.len(), 0);

        for k in 1..=4 {
            assert!(ring.try_push(k).is_ok());
            assert_eq!(ring.len(), k as usize);
        }
    }

    #[test]
    fn len_stays_within_bounds_under_churn() {
        use std::thread;

        let ring: Arc<Ring<u32>> = Arc::new(Ring::new(4, false));
        let done = Arc::new(std::sync::atomic::AtomicBool::new(false));

        let churn: Vec<_> = (0..2)
            .map(|_| {
                let ring = Arc::clone(&ring);
                let done = Arc::clone(&done);
                thread::spawn(move || {
                    while !done.load(Ordering::Relaxed) {
                        let _ = ring.try_push(1);
                        let _ = ring.try_pop();
                    }
                })
            })
            .collect();

        // The count is advisory under concurrency but must never escape
        // 0..=capacity, whatever interleaving the observer lands on.
        for _ in 0..10_000 {
            assert!(ring.len() <= ring.capacity());
        }

        done.store(true, Ordering::Relaxed);
        for handle in churn {
            handle.join().unwrap();
        }
    }

    #[test]
    fn overflow_at_capacity() {
        let ring: Ring<u32> = Ring::new(4, false);

        for i in 0..4 {
            assert!(ring.try_push(i).is_ok());
        }
        // The (K+1)-th push on a capacity-K queue reports overflow and
        // hands the value back.
        assert_eq!(ring.try_push(99), Err(99));

        assert_eq!(ring.try_pop(), Some(0));
        assert!(ring.try_push(4).is_ok());
        assert_eq!(ring.try_push(100), Err(100));
    }

    #[test]
    fn pop_empty_returns_none() {
        let ring: Ring<u32> = Ring::new(4, false);
        assert_eq!(ring.try_pop(), None);

        ring.try_push(1).unwrap();
        assert_eq!(ring.try_pop(), Some(1));
        assert_eq!(ring.try_pop(), None);
    }

    #[test]
    fn interleaved_operations() {
        let ring: Ring<u32> = Ring::new(4, false);

        ring.try_push(1).unwrap();
        ring.try_push(2).unwrap();
        assert_eq!(ring.try_pop(), Some(1));
        ring.try_push(3).unwrap();
        ring.try_push(4).unwrap();
        ring.try_push(5).unwrap();
        assert_eq!(ring.try_pop(), Some(2));
        assert_eq!(ring.try_pop(), Some(3));
        assert_eq!(ring.try_pop(), Some(4));
        assert_eq!(ring.try_pop(), Some(5));
        assert_eq!(ring.try_pop(), None);
    }

    #[test]
    fn slot_reuse_across_laps() {
        let ring: Ring<u64> = Ring::new(4, false);

        for round in 0..25u64 {
            for i in 0..4 {
                assert!(ring.try_push(round * 10 + i).is_ok());
            }
            for i in 0..4 {
                assert_eq!(ring.try_pop(), Some(round * 10 + i));
            }
            assert_eq!(ring.try_pop(), None);
        }
    }

    #[test]
    fn counters_survive_u64_wrap() {
        // Start the logical counters just shy of u64::MAX so that pushes
        // and pops carry them across the overflow boundary.
        let ring: Ring<u64> = Ring::with_start_position(8, false, u64::MAX - 3);

        for i in 0..16 {
            assert!(ring.try_push(i).is_ok());
            assert_eq!(ring.try_pop(), Some(i));
        }
        assert_eq!(ring.try_pop(), None);
        assert_eq!(ring.len(), 0);

        // Fill and drain across the boundary too.
        for i in 0..8 {
            assert!(ring.try_push(i).is_ok());
        }
        assert_eq!(ring.try_push(99), Err(99));
        for i in 0..8 {
            assert_eq!(ring.try_pop(), Some(i));
        }
    }

    #[test]
    fn sequenced_wrap_of_logical_counters() {
        let ring: Ring<u64> = Ring::with_start_position(4, true, u64::MAX - 1);

        ring.try_push_sequenced(5, Seq16(5)).unwrap();
        ring.try_push_sequenced(1, Seq16(1)).unwrap();
        ring.try_push_sequenced(3, Seq16(3)).unwrap();

        assert_eq!(ring.try_pop(), Some(1));
        assert_eq!(ring.try_pop(), Some(3));
        assert_eq!(ring.try_pop(), Some(5));
    }

    #[test]
    fn drops_remaining_elements() {
        #[derive(Debug)]
        struct DropCounter(Arc<AtomicUsize>);
        impl Drop for DropCounter {
            fn drop(&mut self) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        let counter = Arc::new(AtomicUsize::new(0));
        {
            let ring: Ring<DropCounter> = Ring::new(8, false);
            ring.try_push(DropCounter(Arc::clone(&counter))).unwrap();
            ring.try_push(DropCounter(Arc::clone(&counter))).unwrap();
            ring.try_push(DropCounter(Arc::clone(&counter))).unwrap();

            // Popping must clear the slot: the popped value is the only
            // remaining owner.
            drop(ring.try_pop());
            assert_eq!(counter.load(Ordering::SeqCst), 1);
        }
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn sequenced_insertion_orders_window() {
        let ring: Ring<u32> = Ring::new(8, true);

        ring.try_push_sequenced(50, Seq16(5)).unwrap();
        ring.try_push_sequenced(10, Seq16(1)).unwrap();
        ring.try_push_sequenced(30, Seq16(3)).unwrap();

        assert_eq!(ring.try_pop(), Some(10));
        assert_eq!(ring.try_pop(), Some(30));
        assert_eq!(ring.try_pop(), Some(50));
        assert_eq!(ring.try_pop(), None);
    }

    #[test]
    fn sequenced_insertion_across_seq_wrap() {
        let ring: Ring<u16> = Ring::new(8, true);

        // 1 and 2 are circularly ahead of 65534 and 65535.
        ring.try_push_sequenced(2, Seq16(2)).unwrap();
        ring.try_push_sequenced(65534, Seq16(65534)).unwrap();
        ring.try_push_sequenced(1, Seq16(1)).unwrap();
        ring.try_push_sequenced(65535, Seq16(65535)).unwrap();

        assert_eq!(ring.try_pop(), Some(65534));
        assert_eq!(ring.try_pop(), Some(65535));
        assert_eq!(ring.try_pop(), Some(1));
        assert_eq!(ring.try_pop(), Some(2));
    }

    #[test]
    fn sequenced_append_when_already_ascending() {
        let ring: Ring<u32> = Ring::new(8, true);

        for s in [1u16, 2, 3, 4] {
            ring.try_push_sequenced(u32::from(s), Seq16(s)).unwrap();
        }
        for s in [1u32, 2, 3, 4] {
            assert_eq!(ring.try_pop(), Some(s));
        }
    }

    #[test]
    fn unsequenced_entries_keep_arrival_position() {
        let ring: Ring<u32> = Ring::new(8, true);

        // Plain pushes on a sequenced ring append at the tail and are
        // skipped by the insertion scan.
        ring.try_push(100).unwrap();
        ring.try_push_sequenced(50, Seq16(5)).unwrap();
        ring.try_push_sequenced(10, Seq16(1)).unwrap();

        assert_eq!(ring.try_pop(), Some(100));
        assert_eq!(ring.try_pop(), Some(10));
        assert_eq!(ring.try_pop(), Some(50));
    }

    #[test]
    fn sequenced_overflow_reports_full() {
        let ring: Ring<u32> = Ring::new(2, true);

        ring.try_push_sequenced(1, Seq16(1)).unwrap();
        ring.try_push_sequenced(2, Seq16(2)).unwrap();
        assert_eq!(ring.try_push_sequenced(3, Seq16(3)), Err(3));
    }

    #[test]
    fn sequenced_insert_after_partial_drain() {
        let ring: Ring<u32> = Ring::new(4, true);

        ring.try_push_sequenced(10, Seq16(10)).unwrap();
        ring.try_push_sequenced(20, Seq16(20)).unwrap();
        assert_eq!(ring.try_pop(), Some(10));

        // Window now starts mid-ring; an earlier sequence still lands
        // before the buffered 20.
        ring.try_push_sequenced(15, Seq16(15)).unwrap();
        ring.try_push_sequenced(25, Seq16(25)).unwrap();

        assert_eq!(ring.try_pop(), Some(15));
        assert_eq!(ring.try_pop(), Some(20));
        assert_eq!(ring.try_pop(), Some(25));
    }

    #[test]
    #[should_panic(expected = "without sequencing")]
    fn sequenced_push_requires_mode() {
        let ring: Ring<u32> = Ring::new(4, false);
        let _ = ring.try_push_sequenced(1, Seq16(1));
    }

    #[test]
    #[should_panic(expected = "capacity must be > 0")]
    fn zero_capacity_rejected() {
        let _ring: Ring<u32> = Ring::new(0, false);
    }
}
