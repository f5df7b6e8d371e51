use std::fmt::{Display, Formatter};

use crate::bank::{Bank, Count};
use crate::load::BoatLoad;
use crate::side::Side;

/// A snapshot of where every missionary, every cannibal and the boat currently are.
///
/// Equality is structural. The derived ordering compares, in order, left missionaries, left cannibals,
/// right missionaries, right cannibals and finally the boat side; the first field that differs decides.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Configuration {
    pub(crate) left: Bank,
    pub(crate) right: Bank,
    pub(crate) boat: Side,
}

impl Configuration {
    /// A configuration with the given banks and the boat moored at `boat`.
    pub fn new(left: Bank, right: Bank, boat: Side) -> Self {
        Self { left, right, boat }
    }

    /// Everyone on the left bank, boat included.
    pub fn initial(missionaries: Count, cannibals: Count) -> Self {
        Self::new(Bank::new(missionaries, cannibals), Bank::default(), Side::Left)
    }

    /// The starting bank.
    pub fn left(&self) -> Bank {
        self.left
    }

    /// The far bank.
    pub fn right(&self) -> Bank {
        self.right
    }

    /// The side the boat is moored at.
    pub fn boat(&self) -> Side {
        self.boat
    }

    /// The bank on `side`.
    pub fn bank(&self, side: Side) -> Bank {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn bank_mut(&mut self, side: Side) -> &mut Bank {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Total missionaries over both banks.
    pub fn missionaries(&self) -> Count {
        self.left.missionaries + self.right.missionaries
    }

    /// Total cannibals over both banks.
    pub fn cannibals(&self) -> Count {
        self.left.cannibals + self.right.cannibals
    }

    /// Row `load` from the bank the boat is at to the other one.
    ///
    /// Returns `None` if the departure bank does not hold the people in `load`.
    /// The result is not checked for safety; see [`Puzzle::is_valid`](crate::Puzzle::is_valid).
    pub fn cross(&self, load: BoatLoad) -> Option<Self> {
        let from = self.boat;
        let to = from.opposite();

        let mut next = *self;
        *next.bank_mut(from) = self.bank(from).depart(load)?;
        *next.bank_mut(to) = self.bank(to).arrive(load);
        next.boat = to;

        Some(next)
    }
}

// left m, left c, right m, right c, boat
impl From<(Count, Count, Count, Count, Side)> for Configuration {
    fn from(value: (Count, Count, Count, Count, Side)) -> Self {
        Self::new(Bank::new(value.0, value.1), Bank::new(value.2, value.3), value.4)
    }
}

impl Display for Configuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Left{} Right{} Boat:{}", self.left, self.right, self.boat)
    }
}
