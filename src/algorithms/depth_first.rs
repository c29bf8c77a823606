use crate::frontier::Stack;
use crate::graph::{CellStatus, GraphError, GridGraph};

use super::{random_unvisited, seeded_rng, Random, Traversal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    Expand,
    Done,
}

/// Depth-first carver over a LIFO frontier.
///
/// Suspension points: once after every activation of the top cell, and one
/// terminal point after the frontier drains. So each `advance` first
/// expands the previously activated cell (carve toward a random unvisited
/// neighbor, or complete and pop) and then activates the new top.
pub struct DepthFirst {
    graph: GridGraph,
    frontier: Stack<usize>,
    rng: Random,
    phase: Phase,
}

impl DepthFirst {
    pub fn new(graph: GridGraph, start: usize, seed: Option<u64>) -> Result<Self, GraphError> {
        if !graph.holds_index(start) {
            return Err(GraphError::InvalidIndex(start));
        }

        let mut frontier = Stack::new();
        frontier.push(start);

        Ok(DepthFirst {
            graph,
            frontier,
            rng: seeded_rng(seed),
            phase: Phase::Start,
        })
    }

    fn activate_top(&mut self) {
        let &id = self.frontier.peek().unwrap();
        self.graph.set_status(id, CellStatus::Active);
    }

    fn expand(&mut self) {
        let &id = self.frontier.peek().unwrap();
        match random_unvisited(&self.graph, id, &mut self.rng) {
            Some((dir, next)) => {
                // Relink is idempotent; the passage is the actual carve.
                self.graph.connect_neighbor(dir, id, next).unwrap();
                self.graph.connect_passage(dir, id, next).unwrap();
                self.graph.set_status(id, CellStatus::Passive);
                self.frontier.push(next);
            }
            None => {
                self.graph.set_status(id, CellStatus::Complete);
                // The completed cell is guaranteed to still be on top.
                self.frontier.pop().unwrap();
            }
        }
    }
}

impl Traversal for DepthFirst {
    fn advance(&mut self) {
        match self.phase {
            Phase::Start => {
                if self.frontier.has_nodes() {
                    self.activate_top();
                    self.phase = Phase::Expand;
                } else {
                    self.phase = Phase::Done;
                }
            }
            Phase::Expand => {
                self.expand();
                if self.frontier.has_nodes() {
                    self.activate_top();
                } else {
                    log::debug!(
                        "depth-first traversal finished over {} cells",
                        self.graph.size()
                    );
                    self.phase = Phase::Done;
                }
            }
            Phase::Done => {}
        }
    }

    fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    fn graph(&self) -> &GridGraph {
        &self.graph
    }

    fn into_graph(self: Box<Self>) -> GridGraph {
        self.graph
    }
}
