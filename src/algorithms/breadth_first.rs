use crate::frontier::Queue;
use crate::graph::{CellStatus, GraphError, GridGraph};

use super::{random_unvisited, seeded_rng, Random, Traversal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Start,
    Scan,
    /// A fresh neighbor was spotted and activated but not yet enqueued;
    /// the extra suspension that lets callers observe the handoff.
    Admit(usize),
    Done,
}

/// Breadth-first carver over a FIFO frontier.
///
/// Unlike the depth-first variant this one suspends twice per carve: once
/// with the front cell active, and once more with the freshly spotted
/// neighbor active before it is enqueued and demoted to passive. The front
/// cell is re-activated on every step until it runs out of unvisited
/// neighbors, so its status cycles between active and passive.
pub struct BreadthFirst {
    graph: GridGraph,
    frontier: Queue<usize>,
    rng: Random,
    phase: Phase,
}

impl BreadthFirst {
    pub fn new(graph: GridGraph, start: usize, seed: Option<u64>) -> Result<Self, GraphError> {
        if !graph.holds_index(start) {
            return Err(GraphError::InvalidIndex(start));
        }

        let mut frontier = Queue::new();
        frontier.enqueue(start);

        Ok(BreadthFirst {
            graph,
            frontier,
            rng: seeded_rng(seed),
            phase: Phase::Start,
        })
    }

    fn activate_front(&mut self) {
        let &id = self.frontier.front().unwrap();
        self.graph.set_status(id, CellStatus::Active);
    }
}

impl Traversal for BreadthFirst {
    fn advance(&mut self) {
        match self.phase {
            Phase::Start => {
                if self.frontier.has_nodes() {
                    self.activate_front();
                    self.phase = Phase::Scan;
                } else {
                    self.phase = Phase::Done;
                }
            }
            Phase::Scan => {
                let &id = self.frontier.front().unwrap();
                match random_unvisited(&self.graph, id, &mut self.rng) {
                    Some((dir, next)) => {
                        // Relink is idempotent; the passage is the actual carve.
                        self.graph.connect_neighbor(dir, id, next).unwrap();
                        self.graph.connect_passage(dir, id, next).unwrap();
                        self.graph.set_status(id, CellStatus::Passive);
                        self.graph.set_status(next, CellStatus::Active);
                        self.phase = Phase::Admit(next);
                    }
                    None => {
                        self.graph.set_status(id, CellStatus::Complete);
                        self.frontier.dequeue().unwrap();
                        if self.frontier.has_nodes() {
                            self.activate_front();
                        } else {
                            log::debug!(
                                "breadth-first traversal finished over {} cells",
                                self.graph.size()
                            );
                            self.phase = Phase::Done;
                        }
                    }
                }
            }
            Phase::Admit(next) => {
                self.frontier.enqueue(next);
                self.graph.set_status(next, CellStatus::Passive);
                self.activate_front();
                self.phase = Phase::Scan;
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
