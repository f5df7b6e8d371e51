use std::path::PathBuf;

use crate::configuration::Configuration;

/// Ways a sequence of configurations can fail to be a solution of a [`Puzzle`](crate::Puzzle).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// There is not even a starting configuration.
    #[error("path is empty")]
    Empty,

    /// The first configuration is not everyone on the left bank.
    #[error("path starts at {found} instead of {expected}")]
    WrongStart {
        /// The puzzle's initial configuration.
        expected: Configuration,
        /// What the path starts with instead.
        found: Configuration,
    },

    /// People were created or lost along the way.
    #[error("step {index} does not account for every missionary and cannibal: {configuration}")]
    NotConserved {
        /// Position of the offending configuration in the path.
        index: usize,
        /// The offending configuration.
        configuration: Configuration,
    },

    /// Cannibals outnumber missionaries on some bank.
    #[error("step {index} leaves missionaries outnumbered: {configuration}")]
    Unsafe {
        /// Position of the offending configuration in the path.
        index: usize,
        /// The offending configuration.
        configuration: Configuration,
    },

    /// Two consecutive configurations are not one crossing within capacity apart.
    #[error("step {index} is not a single legal crossing from the step before it")]
    IllegalCrossing {
        /// Position of the later of the two configurations.
        index: usize,
    },

    /// A configuration appears twice.
    #[error("step {index} revisits {configuration}")]
    Revisit {
        /// Position of the second appearance.
        index: usize,
        /// The repeated configuration.
        configuration: Configuration,
    },

    /// The last configuration is not everyone on the right bank.
    #[error("path ends at {found}, which is not the goal")]
    NotGoal {
        /// Where the path ends instead.
        found: Configuration,
    },
}

/// Errors that can occur while saving a [`Report`](crate::Report).
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The report file could not be written.
    #[error("failed to write report to {path}: {source}")]
    Io {
        /// File the report was going to.
        path: PathBuf,
        /// Underlying failure.
        source: std::io::Error,
    },
}
