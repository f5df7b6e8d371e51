use std::fmt::{Display, Formatter};
use std::num::NonZero;

use crate::bank::{Bank, Count};
use crate::configuration::Configuration;

/// Maximum number of people the boat carries in one crossing. Always at least one.
pub type Capacity = NonZero<Count>;

/// The people who cross the river together in one trip.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct BoatLoad {
    pub(crate) missionaries: Count,
    pub(crate) cannibals: Count,
}

impl BoatLoad {
    /// A load of `missionaries` and `cannibals`.
    pub fn new(missionaries: Count, cannibals: Count) -> Self {
        Self { missionaries, cannibals }
    }

    /// Missionaries aboard.
    pub fn missionaries(&self) -> Count {
        self.missionaries
    }

    /// Cannibals aboard.
    pub fn cannibals(&self) -> Count {
        self.cannibals
    }

    /// Number of people aboard.
    pub fn len(&self) -> Count {
        self.missionaries + self.cannibals
    }

    /// Whether nobody is aboard.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every non-empty load that fits in a boat of `capacity`.
    ///
    /// Missionaries form the outer loop and cannibals the inner one, both counting up from zero:
    /// for a capacity of 2 this yields `(0, 1), (0, 2), (1, 0), (1, 1), (2, 0)`.
    /// The search depends on this exact order to pick the same solution every time.
    pub fn all(capacity: Capacity) -> impl Iterator<Item = Self> {
        Self::boardable(capacity, Bank::new(Count::MAX, Count::MAX))
    }

    /// The loads of [`Self::all`] that `bank` has enough people for, in the same order.
    ///
    /// Only loads that can actually leave `bank` are generated, so a huge boat costs nothing extra.
    pub fn boardable(capacity: Capacity, bank: Bank) -> impl Iterator<Item = Self> {
        let capacity = capacity.get();
        (0..=capacity.min(bank.missionaries))
            .flat_map(move |missionaries| (0..=(capacity - missionaries).min(bank.cannibals))
                .map(move |cannibals| Self::new(missionaries, cannibals)))
            // the boat cannot cross empty
            .filter(|load| !load.is_empty())
    }

    /// Recover the load that was rowed across to get from `before` to `after`.
    ///
    /// Returns `None` if the boat did not change sides, if nobody crossed, or if the head counts of
    /// the two configurations do not differ by exactly one load moving from the departure bank to the other.
    /// Capacity is not considered here.
    pub fn between(before: &Configuration, after: &Configuration) -> Option<Self> {
        let from = before.boat();
        let to = from.opposite();
        if after.boat() != to {
            return None;
        }

        let departed = before.bank(from);
        let stayed = after.bank(from);
        let load = Self::new(
            departed.missionaries.checked_sub(stayed.missionaries)?,
            departed.cannibals.checked_sub(stayed.cannibals)?,
        );

        match !load.is_empty() && before.cross(load) == Some(*after) {
            true => Some(load),
            false => None,
        }
    }
}

impl Display for BoatLoad {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "(M:{}, C:{})", self.missionaries, self.cannibals)
    }
}
