use std::collections::BTreeSet;

use itertools::Itertools;
use log::{debug, trace};

use crate::bank::Count;
use crate::configuration::Configuration;
use crate::load::{BoatLoad, Capacity};
use crate::puzzle::Puzzle;

/// The outcome of a search.
///
/// "No solution" is an ordinary outcome, not an error: [`found`](Self::found) is `false` and the path is empty.
/// This covers both a starting configuration that is already unsafe and a state space exhausted without reaching the goal.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Solution {
    found: bool,
    path: Vec<Configuration>,
    explored: usize,
}

impl Solution {
    /// Whether a path to the goal was found.
    pub fn found(&self) -> bool {
        self.found
    }

    /// Every configuration from the initial one to the goal, in order. Empty unless [`Self::found`].
    pub fn path(&self) -> &[Configuration] {
        &self.path
    }

    /// Take the path out of the solution.
    pub fn into_path(self) -> Vec<Configuration> {
        self.path
    }

    /// Number of distinct configurations the search entered. Zero if the start was rejected outright.
    pub fn explored(&self) -> usize {
        self.explored
    }

    /// Number of boat trips in the path.
    pub fn crossings(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// A configuration on the current path and the crossings out of it not yet tried.
struct Frame {
    configuration: Configuration,
    successors: std::vec::IntoIter<(BoatLoad, Configuration)>,
}

/// Depth-first search over the configurations of one [`Puzzle`].
///
/// The path, the visited set and the stack of frames belong to a single search and are dropped with it;
/// nothing is shared between searches. The stack lives on the heap, so deep searches only cost memory.
pub(crate) struct Solver<'a> {
    puzzle: &'a Puzzle,
    path: Vec<Configuration>,
    // never shrinks; a configuration that led nowhere once stays excluded for the whole search
    visited: BTreeSet<Configuration>,
    // one frame per non-goal configuration on the path
    frames: Vec<Frame>,
}

impl<'a> From<&'a Puzzle> for Solver<'a> {
    fn from(puzzle: &'a Puzzle) -> Self {
        Self {
            puzzle,
            path: Vec::new(),
            visited: BTreeSet::new(),
            frames: Vec::new(),
        }
    }
}

impl Solver<'_> {
    /// Append `current` to the path and mark it visited.
    ///
    /// Returns `true` if it is the goal; otherwise a frame holding its crossings is pushed.
    fn enter(&mut self, current: Configuration) -> bool {
        self.path.push(current);
        self.visited.insert(current);
        trace!("entered {current} at depth {}", self.path.len() - 1);

        if self.puzzle.is_goal(&current) {
            return true;
        }

        let successors = self.puzzle.successors(&current).collect_vec();
        self.frames.push(Frame { configuration: current, successors: successors.into_iter() });
        false
    }

    /// Search from `initial` until the goal is entered or every reachable configuration has been tried.
    ///
    /// On success the path ends at the goal. On failure every configuration has been popped off the path again
    /// but stays visited.
    fn explore(&mut self, initial: Configuration) -> bool {
        if self.enter(initial) {
            return true;
        }

        while let Some(frame) = self.frames.last_mut() {
            let visited = &self.visited;
            let from = frame.configuration.boat();
            match frame.successors.find(|(_, next)| !visited.contains(next)) {
                Some((load, next)) => {
                    trace!("rowing {load} from the {from} bank");
                    if self.enter(next) {
                        return true;
                    }
                }
                None => {
                    self.frames.pop();
                    if let Some(dead_end) = self.path.pop() {
                        trace!("backtracked from {dead_end}");
                    }
                }
            }
        }

        false
    }

    pub(crate) fn solve(mut self) -> Solution {
        let initial = self.puzzle.initial();
        if !self.puzzle.is_valid(&initial) {
            debug!("{initial} is unsafe; not searching");
            return Solution::default();
        }

        let found = self.explore(initial);
        debug_assert!(found || self.path.is_empty());
        debug!(
            "search {} after entering {} configurations ({} in path)",
            if found { "succeeded" } else { "exhausted" },
            self.visited.len(),
            self.path.len(),
        );

        Solution {
            found,
            path: self.path,
            explored: self.visited.len(),
        }
    }
}

impl Puzzle {
    /// Search for a sequence of crossings that brings everyone to the right bank.
    ///
    /// Loads are tried in the fixed order of [`BoatLoad::all`] and the first complete path wins,
    /// so the result is deterministic but not necessarily the shortest.
    pub fn solve(&self) -> Solution {
        debug!(
            "solving for {} missionaries and {} cannibals with a boat of {}",
            self.missionaries, self.cannibals, self.capacity,
        );
        Solver::from(self).solve()
    }
}

/// Solve the puzzle with `missionaries` and `cannibals` starting on the left bank and a boat seating `capacity`.
///
/// Shorthand for [`Puzzle::new`] followed by [`Puzzle::solve`].
pub fn solve(missionaries: Count, cannibals: Count, capacity: Capacity) -> Solution {
    Puzzle::new(missionaries, cannibals, capacity).solve()
}
