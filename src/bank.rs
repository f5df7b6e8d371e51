use std::fmt::{Display, Formatter};

use crate::load::BoatLoad;

/// Head counts are never negative; a count that would underflow is simply not a reachable configuration.
pub type Count = usize;

/// The people standing on one bank of the river.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Bank {
    pub(crate) missionaries: Count,
    pub(crate) cannibals: Count,
}

impl Bank {
    /// A bank holding `missionaries` and `cannibals`.
    pub fn new(missionaries: Count, cannibals: Count) -> Self {
        Self { missionaries, cannibals }
    }

    /// Number of missionaries on this bank.
    pub fn missionaries(&self) -> Count {
        self.missionaries
    }

    /// Number of cannibals on this bank.
    pub fn cannibals(&self) -> Count {
        self.cannibals
    }

    /// Whether nobody is left on this bank.
    pub fn is_empty(&self) -> bool {
        self.missionaries == 0 && self.cannibals == 0
    }

    /// Missionaries are lost if any are present and cannibals outnumber them.
    /// Cannibals alone are always safe.
    pub fn is_safe(&self) -> bool {
        self.missionaries == 0 || self.missionaries >= self.cannibals
    }

    /// Board `load` onto the boat from this bank, or `None` if there aren't enough people here.
    pub(crate) fn depart(self, load: BoatLoad) -> Option<Self> {
        Some(Self {
            missionaries: self.missionaries.checked_sub(load.missionaries)?,
            cannibals: self.cannibals.checked_sub(load.cannibals)?,
        })
    }

    pub(crate) fn arrive(self, load: BoatLoad) -> Self {
        Self {
            missionaries: self.missionaries + load.missionaries,
            cannibals: self.cannibals + load.cannibals,
        }
    }
}

impl Display for Bank {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(M:{}, C:{})", self.missionaries, self.cannibals)
    }
}
