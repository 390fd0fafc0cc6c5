//! Positional index into a displayed (filtered) list.

use std::fmt::{Display, Formatter};

/// Index that can be read as zero-based or one-based.
///
/// Users type one-based positions; storage lookups are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    pub fn from_zero_based(zero_based: usize) -> Self {
        Self { zero_based }
    }

    /// Returns `None` for `0`, which is not a valid one-based position.
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        one_based.checked_sub(1).map(Self::from_zero_based)
    }

    pub fn zero_based(self) -> usize {
        self.zero_based
    }

    pub fn one_based(self) -> usize {
        self.zero_based.saturating_add(1)
    }
}

impl Display for Index {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.one_based())
    }
}
