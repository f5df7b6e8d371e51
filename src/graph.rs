use std::collections::VecDeque;

use log::debug;
use petgraph::algo::{dijkstra, has_path_connecting};
use petgraph::graphmap::DiGraphMap;

use crate::configuration::Configuration;
use crate::load::BoatLoad;
use crate::puzzle::Puzzle;

/// Every configuration of a [`Puzzle`] reachable from its start through valid crossings.
///
/// Nodes are configurations; an edge from `a` to `b` carries the load rowed across to get from `a` to `b`.
/// Crossings are reversible, so every edge has a twin pointing the other way with the same load.
pub struct StateSpace {
    pub(crate) puzzle: Puzzle,
    pub(crate) graph: DiGraphMap<Configuration, BoatLoad>,
}

impl StateSpace {
    /// Expand the state space of `puzzle` breadth first.
    ///
    /// If the initial configuration is already unsafe there is nothing to explore and the space is empty.
    pub fn explore(puzzle: &Puzzle) -> Self {
        let mut graph = DiGraphMap::new();
        let initial = puzzle.initial();

        if puzzle.is_valid(&initial) {
            graph.add_node(initial);
            let mut frontier = VecDeque::from([initial]);

            while let Some(current) = frontier.pop_front() {
                for (load, next) in puzzle.successors(&current) {
                    if !graph.contains_node(next) {
                        frontier.push_back(next);
                    }
                    graph.add_edge(current, next, load);
                }
            }
        }

        debug!(
            "state space has {} configurations and {} crossings",
            graph.node_count(),
            graph.edge_count(),
        );

        Self { puzzle: *puzzle, graph }
    }

    /// Number of reachable configurations.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    /// Whether nothing was explored because the start is already unsafe.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Whether `configuration` is reachable from the start.
    pub fn contains(&self, configuration: &Configuration) -> bool {
        self.graph.contains_node(*configuration)
    }

    /// The underlying graph.
    pub fn graph(&self) -> &DiGraphMap<Configuration, BoatLoad> {
        &self.graph
    }

    /// Whether `to` can be reached from `from` by some sequence of valid crossings.
    pub fn is_reachable(&self, from: &Configuration, to: &Configuration) -> bool {
        self.contains(from) && self.contains(to) && has_path_connecting(&self.graph, *from, *to, None)
    }

    /// Whether the puzzle has any solution at all.
    pub fn goal_reachable(&self) -> bool {
        // everything in the graph was reached from the initial configuration
        self.contains(&self.puzzle.goal())
    }

    /// The least number of crossings that brings everyone across, or `None` if the goal is unreachable.
    pub fn minimum_crossings(&self) -> Option<usize> {
        let initial = self.puzzle.initial();
        let goal = self.puzzle.goal();
        if !self.contains(&initial) {
            return None;
        }

        dijkstra(&self.graph, initial, Some(goal), |_| 1usize)
            .get(&goal)
            .copied()
    }
}
