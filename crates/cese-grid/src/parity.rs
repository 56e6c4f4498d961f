//! Half-time-plane parity.

use std::fmt;
use std::ops::Not;

/// Which of the two alternating half-time planes an element sits on.
///
/// The staggered mesh interleaves both planes in one raw index space:
/// even-plane slots and odd-plane slots alternate, and marching a half
/// step flips the active parity. `Parity` is the typed form of the
/// parity bit recovered from a raw storage index.
///
/// # Examples
///
/// ```
/// use cese_grid::Parity;
///
/// let p = Parity::Even;
/// assert!(!p.is_odd());
/// assert_eq!(!p, Parity::Odd);
/// assert_eq!(Parity::Odd.offset(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parity {
    /// The plane holding whole time levels.
    Even,
    /// The plane holding half time levels.
    Odd,
}

impl Parity {
    /// Recover a parity from the low bit of a raw-index difference.
    pub fn from_bit(bit: usize) -> Self {
        if bit & 1 == 1 {
            Self::Odd
        } else {
            Self::Even
        }
    }

    /// True for the odd plane.
    pub fn is_odd(self) -> bool {
        matches!(self, Self::Odd)
    }

    /// True for the even plane.
    pub fn is_even(self) -> bool {
        matches!(self, Self::Even)
    }

    /// The raw-index offset this parity contributes: 0 for even, 1 for odd.
    pub fn offset(self) -> usize {
        match self {
            Self::Even => 0,
            Self::Odd => 1,
        }
    }
}

impl Not for Parity {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Self::Even => Self::Odd,
            Self::Odd => Self::Even,
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Even => write!(f, "even"),
            Self::Odd => write!(f, "odd"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_is_involutive() {
        assert_eq!(!!Parity::Even, Parity::Even);
        assert_eq!(!!Parity::Odd, Parity::Odd);
    }

    #[test]
    fn from_bit_uses_low_bit_only() {
        assert_eq!(Parity::from_bit(0), Parity::Even);
        assert_eq!(Parity::from_bit(1), Parity::Odd);
        assert_eq!(Parity::from_bit(2), Parity::Even);
        assert_eq!(Parity::from_bit(7), Parity::Odd);
    }

    #[test]
    fn offset_matches_parity() {
        assert_eq!(Parity::Even.offset(), 0);
        assert_eq!(Parity::Odd.offset(), 1);
    }
}
