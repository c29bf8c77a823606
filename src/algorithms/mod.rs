mod breadth_first;
mod depth_first;

pub use breadth_first::BreadthFirst;
pub use depth_first::DepthFirst;

use rand::{seq::SliceRandom as _, thread_rng, Rng as _, SeedableRng as _};
use smallvec::SmallVec;

use crate::compass::Direction;
use crate::graph::{CellStatus, GraphError, GridGraph};
use crate::registry::Registry;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

pub(crate) fn seeded_rng(seed: Option<u64>) -> Random {
    Random::seed_from_u64(seed.unwrap_or_else(|| thread_rng().gen()))
}

/// A maze-carving run exposed as a lazy, finite, non-restartable sequence
/// of suspension points over an exclusively owned [`GridGraph`].
///
/// Each [`advance`](Traversal::advance) resumes where the previous
/// suspension left off, mutates the graph and frontier in place, and
/// suspends at the next defined point. Stopping early is always safe: the
/// graph is simply left partially carved.
pub trait Traversal {
    /// Resumes to the next suspension point. No-op once the terminal
    /// suspension has been reached.
    fn advance(&mut self);

    /// True once the frontier is exhausted and the terminal suspension has
    /// been reached.
    fn is_done(&self) -> bool;

    fn graph(&self) -> &GridGraph;

    /// Reclaims the graph from a finished (or abandoned) traversal.
    fn into_graph(self: Box<Self>) -> GridGraph;

    fn run_to_end(&mut self) {
        while !self.is_done() {
            self.advance();
        }
    }
}

/// First direction, visited in uniformly random order, whose neighbor
/// exists and is still unvisited.
pub(crate) fn random_unvisited(
    graph: &GridGraph,
    id: usize,
    rng: &mut Random,
) -> Option<(Direction, usize)> {
    let mut dirs: SmallVec<[Direction; 6]> = SmallVec::from_slice(graph.compass());
    dirs.shuffle(rng);

    dirs.into_iter().find_map(|dir| {
        let next = graph.cells()[id].neighbor(dir)?;
        (graph.cells()[next].status() == CellStatus::Unvisited).then_some((dir, next))
    })
}

pub type AlgorithmFactory =
    fn(GridGraph, usize, Option<u64>) -> Result<Box<dyn Traversal>, GraphError>;

/// Registry of the traversal algorithms.
pub type AlgorithmRegistry = Registry<AlgorithmFactory>;

fn depth_first_factory(
    graph: GridGraph,
    start: usize,
    seed: Option<u64>,
) -> Result<Box<dyn Traversal>, GraphError> {
    Ok(Box::new(DepthFirst::new(graph, start, seed)?))
}

fn breadth_first_factory(
    graph: GridGraph,
    start: usize,
    seed: Option<u64>,
) -> Result<Box<dyn Traversal>, GraphError> {
    Ok(Box::new(BreadthFirst::new(graph, start, seed)?))
}

pub fn algorithm_registry() -> AlgorithmRegistry {
    let mut registry = Registry::with_default(depth_first_factory as AlgorithmFactory);
    registry.register("depth-first".to_string(), depth_first_factory);
    registry.register("breadth-first".to_string(), breadth_first_factory);
    registry
}
