use std::collections::HashSet;

use itertools::Itertools;

use crate::bank::{Bank, Count};
use crate::configuration::Configuration;
use crate::error::PathError;
use crate::load::{BoatLoad, Capacity};
use crate::side::Side;

/// One instance of the river-crossing puzzle: how many people start on the left bank and how many the boat carries.
///
/// The safety rule and the win condition live here and nowhere else.
/// Both are pure and depend only on the configuration they are given and the totals fixed at construction.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Puzzle {
    pub(crate) missionaries: Count,
    pub(crate) cannibals: Count,
    pub(crate) capacity: Capacity,
}

impl Puzzle {
    /// A puzzle with `missionaries` and `cannibals` waiting on the left bank and a boat seating `capacity`.
    pub fn new(missionaries: Count, cannibals: Count, capacity: Capacity) -> Self {
        Self { missionaries, cannibals, capacity }
    }

    /// Total missionaries.
    pub fn missionaries(&self) -> Count {
        self.missionaries
    }

    /// Total cannibals.
    pub fn cannibals(&self) -> Count {
        self.cannibals
    }

    /// Seats in the boat.
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// All people on the left bank, boat on the left.
    pub fn initial(&self) -> Configuration {
        Configuration::initial(self.missionaries, self.cannibals)
    }

    /// All people on the right bank, boat on the right.
    pub fn goal(&self) -> Configuration {
        Configuration::new(Bank::default(), Bank::new(self.missionaries, self.cannibals), Side::Right)
    }

    /// Whether no missionary on either bank of `configuration` is outnumbered.
    ///
    /// Counts below zero cannot be represented, so only the outnumbering rule is left to check.
    /// A bank without missionaries is safe however many cannibals stand on it.
    pub fn is_valid(&self, configuration: &Configuration) -> bool {
        configuration.left.is_safe() && configuration.right.is_safe()
    }

    /// Whether everyone, boat included, has reached the right bank.
    pub fn is_goal(&self, configuration: &Configuration) -> bool {
        configuration.left.is_empty()
            && configuration.right == Bank::new(self.missionaries, self.cannibals)
            && configuration.boat == Side::Right
    }

    /// Every valid configuration one crossing away from `configuration`, paired with the load that gets there.
    ///
    /// Loads are tried in the order of [`BoatLoad::all`]; loads the departure bank cannot supply are skipped.
    pub fn successors<'a>(&'a self, configuration: &'a Configuration) -> impl Iterator<Item = (BoatLoad, Configuration)> + 'a {
        BoatLoad::boardable(self.capacity, configuration.bank(configuration.boat()))
            .filter_map(move |load| configuration.cross(load).map(|next| (load, next)))
            .filter(move |(_, next)| self.is_valid(next))
    }

    /// Check that `path` solves this puzzle.
    ///
    /// A solution starts at [`Self::initial`], conserves every person, is valid at each step,
    /// moves between consecutive steps by exactly one crossing within capacity, never repeats a configuration
    /// and ends at the goal. The first violation found is reported.
    pub fn verify(&self, path: &[Configuration]) -> Result<(), PathError> {
        let first = path.first().ok_or(PathError::Empty)?;
        if *first != self.initial() {
            return Err(PathError::WrongStart { expected: self.initial(), found: *first });
        }

        for (index, configuration) in path.iter().enumerate() {
            if configuration.missionaries() != self.missionaries || configuration.cannibals() != self.cannibals {
                return Err(PathError::NotConserved { index, configuration: *configuration });
            }
            if !self.is_valid(configuration) {
                return Err(PathError::Unsafe { index, configuration: *configuration });
            }
        }

        for (index, (before, after)) in path.iter().tuple_windows().enumerate() {
            match BoatLoad::between(before, after) {
                Some(load) if load.len() <= self.capacity.get() => {}
                // index of `after`
                _ => return Err(PathError::IllegalCrossing { index: index + 1 }),
            }
        }

        let mut seen = HashSet::with_capacity(path.len());
        if let Some((index, configuration)) = path.iter().find_position(|configuration| !seen.insert(**configuration)) {
            return Err(PathError::Revisit { index, configuration: *configuration });
        }

        match path.last() {
            Some(last) if !self.is_goal(last) => Err(PathError::NotGoal { found: *last }),
            _ => Ok(()),
        }
    }
}
