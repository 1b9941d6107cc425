//! Concurrency core for a reliable-UDP transport's internal buffering layer.
//!
//! Two independent, composable primitives:
//!
//! - [`BoundedQueue`] - a fixed-capacity MPMC ring buffer for in-flight
//!   packets and acknowledgement records, with an optional mode that inserts
//!   arriving elements by wraparound-aware sequence number instead of
//!   strictly at the tail.
//! - [`Pool`] / [`Pooled`] - a recycling pool and its lifecycle guard, which
//!   reports buffer objects that were dropped without ever being returned.
//!
//! The queue is generic over any `Send` element type; it is typically loaded
//! with [`Pooled`] guards so that a consumer that forgets to return a buffer
//! is flagged at reclamation time.

pub mod pool;
pub mod queue;
pub mod seq;
pub mod trace;

pub use pool::lifecycle::{PoolItem, Pooled, Reclaim};
pub use pool::{Pool, PoolError};
pub use queue::BoundedQueue;
pub use seq::Seq16;
