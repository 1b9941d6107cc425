//! Wraparound-aware 16-bit sequence numbers.
//!
//! Packet sequence numbers live in a fixed-width counter space and wrap
//! frequently, so "is A ahead of B" cannot use ordinary comparison. This
//! module provides the circular-distance arithmetic used by the
//! sequence-ordered queue mode and by the surrounding transport for packet
//! numbering: the numeric space is treated as cyclic with a half-space
//! threshold (standard network sequence comparison).

use serde::{Deserialize, Serialize};

/// Sequence number for data packets.
///
/// Deliberately does not implement `Ord`: the space is circular, so a total
/// order would be misleading near the wrap boundary. Use [`Seq16::distance`]
/// or [`Seq16::is_ahead_of`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seq16(pub u16);

impl From<u16> for Seq16 {
    fn from(v: u16) -> Self {
        Self(v)
    }
}

impl From<Seq16> for u16 {
    fn from(s: Seq16) -> Self {
        s.0
    }
}

impl Seq16 {
    /// Initial sequence number for a new stream.
    pub const ZERO: Self = Self(0);

    /// Next sequence number (wraps on overflow).
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Signed circular distance from `other` to `self`.
    ///
    /// Positive when `self` is ahead of `other`, negative when behind,
    /// zero when equal. The sign-extended wrapping subtraction gives the
    /// half-space threshold: a difference of more than `2^15` in raw value
    /// flips the sign.
    #[inline]
    #[must_use]
    pub const fn distance(self, other: Self) -> i16 {
        self.0.wrapping_sub(other.0) as i16
    }

    /// Returns true if `self` is strictly ahead of `other` in circular order.
    #[inline]
    #[must_use]
    pub const fn is_ahead_of(self, other: Self) -> bool {
        self.distance(other) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_without_wrap() {
        assert_eq!(Seq16(5).distance(Seq16(1)), 4);
        assert_eq!(Seq16(1).distance(Seq16(5)), -4);
        assert_eq!(Seq16(7).distance(Seq16(7)), 0);
    }

    #[test]
    fn distance_across_wrap_boundary() {
        // 2 is ahead of 65534 by 4 steps through the wrap.
        assert_eq!(Seq16(2).distance(Seq16(65534)), 4);
        assert_eq!(Seq16(65534).distance(Seq16(2)), -4);
    }

    #[test]
    fn is_ahead_of_ordering() {
        assert!(Seq16(5).is_ahead_of(Seq16(1)));
        assert!(!Seq16(1).is_ahead_of(Seq16(5)));
        assert!(!Seq16(3).is_ahead_of(Seq16(3)));

        // Circular: 0 is ahead of 65535, not behind it.
        assert!(Seq16(0).is_ahead_of(Seq16(65535)));
        assert!(!Seq16(65535).is_ahead_of(Seq16(0)));
    }

    #[test]
    fn half_space_threshold() {
        // Exactly half the space apart: distance is i16::MIN, "behind".
        assert_eq!(Seq16(0x8000).distance(Seq16(0)), i16::MIN);
        assert!(!Seq16(0x8000).is_ahead_of(Seq16(0)));
        // One short of half: still ahead.
        assert!(Seq16(0x7FFF).is_ahead_of(Seq16(0)));
    }

    #[test]
    fn next_wraps() {
        assert_eq!(Seq16(65535).next(), Seq16(0));
        assert_eq!(Seq16::ZERO.next(), Seq16(1));
    }
}
