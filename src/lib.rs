#![warn(missing_docs)]

//! # `rivercross`
//!
//! A solver for the [missionaries and cannibals](https://en.wikipedia.org/wiki/Missionaries_and_cannibals_problem) river-crossing puzzle.
//! Missionaries and cannibals wait on the left bank of a river with a boat that seats a fixed number of people.
//! Everyone must get to the right bank, but whenever missionaries are present on a bank, cannibals there must not outnumber them.
//!
//! Describe an instance with a [`Puzzle`] and call [`solve()`](Puzzle::solve), or use the free function [`solve()`] directly.
//! The result is a [`Solution`]: whether the goal was reached and, if so, every [`Configuration`] along the way.
//!
//! # Internals
//! The search is a plain depth-first search with backtracking.
//! From each configuration it tries every [`BoatLoad`] that fits in the boat in a fixed order,
//! skips loads the departure bank cannot supply, and descends into the first resulting configuration that is safe and not yet visited.
//! Visited configurations are never forgotten during one search, which both bounds the search and rules out cycles.
//! The first path found is returned; it need not be the shortest.
//!
//! [`StateSpace`] expands every reachable configuration into a graph instead,
//! which answers solvability and minimum-crossing questions independently of the search order.
//! [`Report`] renders a solution in the plain-text format saved by the `solver` binary.

pub use bank::{Bank, Count};
pub use configuration::Configuration;
pub use error::{PathError, ReportError};
pub use graph::StateSpace;
pub use load::{BoatLoad, Capacity};
pub use puzzle::Puzzle;
pub use report::{Report, StepRecord};
pub use side::Side;
pub use solver::{solve, Solution};

pub(crate) mod bank;
pub(crate) mod configuration;
pub(crate) mod error;
pub(crate) mod graph;
pub(crate) mod load;
pub(crate) mod puzzle;
pub mod report;
pub(crate) mod side;
pub(crate) mod solver;
mod tests;
