//! Plain-text records of solved puzzles.

use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;

use log::debug;

use crate::bank::Count;
use crate::configuration::Configuration;
use crate::error::ReportError;
use crate::load::Capacity;
use crate::puzzle::Puzzle;
use crate::side::Side;
use crate::solver::Solution;

/// One line of a [`Report`]: where everyone is after `index` crossings.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct StepRecord {
    /// Crossings made so far; 0 for the initial configuration.
    pub index: usize,
    /// Missionaries on the left bank.
    pub left_missionaries: Count,
    /// Cannibals on the left bank.
    pub left_cannibals: Count,
    /// Missionaries on the right bank.
    pub right_missionaries: Count,
    /// Cannibals on the right bank.
    pub right_cannibals: Count,
    /// Where the boat is moored.
    pub boat: Side,
}

impl StepRecord {
    fn new(index: usize, configuration: &Configuration) -> Self {
        Self {
            index,
            left_missionaries: configuration.left.missionaries,
            left_cannibals: configuration.left.cannibals,
            right_missionaries: configuration.right.missionaries,
            right_cannibals: configuration.right.cannibals,
            boat: configuration.boat,
        }
    }
}

impl Display for StepRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Step {}: Left(M:{}, C:{}) Right(M:{}, C:{}) Boat:{}",
            self.index,
            self.left_missionaries,
            self.left_cannibals,
            self.right_missionaries,
            self.right_cannibals,
            self.boat,
        )
    }
}

/// A human-readable record of a solved puzzle, one line per step.
pub struct Report {
    missionaries: Count,
    cannibals: Count,
    capacity: Capacity,
    steps: Vec<StepRecord>,
}

impl Report {
    /// Build the report for `solution`, or `None` if it found nothing; unsolved puzzles get no report.
    pub fn new(puzzle: &Puzzle, solution: &Solution) -> Option<Self> {
        if !solution.found() {
            return None;
        }

        Some(Self {
            missionaries: puzzle.missionaries,
            cannibals: puzzle.cannibals,
            capacity: puzzle.capacity,
            steps: solution.path().iter()
                .enumerate()
                .map(|(index, configuration)| StepRecord::new(index, configuration))
                .collect(),
        })
    }

    /// One record per configuration of the solution, in order.
    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// Write the report to `path`, replacing whatever is there.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let path = path.as_ref();
        fs::write(path, self.to_string()).map_err(|source| ReportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("wrote {} steps to {}", self.steps.len(), path.display());
        Ok(())
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solution for Missionaries: {}, Cannibals: {}", self.missionaries, self.cannibals)?;
        writeln!(f, "Boat capacity: {}", self.capacity)?;
        writeln!(f, "{}", "-".repeat(42))?;
        for step in &self.steps {
            writeln!(f, "{step}")?;
        }
        Ok(())
    }
}
