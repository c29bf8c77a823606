pub mod algorithms;
pub mod compass;
pub mod frontier;
pub mod graph;
pub mod registry;

pub use algorithms::{BreadthFirst, DepthFirst, Random, Traversal};
pub use compass::Direction;
pub use frontier::{EmptyContainer, Queue, Stack};
pub use graph::{Cell, CellStatus, GraphError, GraphSnapshot, GridGraph};

use registry::Registry;

pub type LayoutFactory = fn(&[usize]) -> GridGraph;

/// Registry of the grid layouts.
pub type LayoutRegistry = Registry<LayoutFactory>;

fn hypercube(dimensions: &[usize]) -> GridGraph {
    GridGraph::new(dimensions.to_vec())
}

pub fn layout_registry() -> LayoutRegistry {
    let mut registry = Registry::with_default(hypercube as LayoutFactory);
    registry.register("hypercube".to_string(), hypercube);
    registry
}

/// Builds a grid graph for the named layout. Unknown names fall back to
/// the hypercube layout rather than failing.
pub fn build_graph(layout: &str, dimensions: &[usize]) -> GridGraph {
    let registry = layout_registry();
    let factory = match registry.get(layout) {
        Some(factory) => factory,
        None => {
            log::warn!("Unknown layout '{}', using hypercube", layout);
            registry.get_default().unwrap()
        }
    };
    factory(dimensions)
}

/// Builds a traversal engine over the graph, seeded at `start`. Unknown
/// algorithm names fall back to depth-first rather than failing; an
/// invalid start id is an error.
pub fn build_traversal(
    graph: GridGraph,
    algorithm: &str,
    start: usize,
    seed: Option<u64>,
) -> Result<Box<dyn Traversal>, GraphError> {
    let registry = algorithms::algorithm_registry();
    let factory = match registry.get(algorithm) {
        Some(factory) => factory,
        None => {
            log::warn!("Unknown algorithm '{}', using depth-first", algorithm);
            registry.get_default().unwrap()
        }
    };
    factory(graph, start, seed)
}

#[cfg(test)]
mod tests {
    use super::{build_graph, build_traversal, CellStatus, GraphError};

    #[test]
    fn dispatch_by_name_carves_a_full_maze() {
        for algorithm in ["depth-first", "breadth-first"] {
            let graph = build_graph("hypercube", &[3, 3]);
            let mut traversal = build_traversal(graph, algorithm, 0, Some(11)).unwrap();
            traversal.run_to_end();

            let graph = traversal.into_graph();
            assert_eq!(graph.passage_count(), 8);
            assert!(graph
                .cells()
                .iter()
                .all(|c| c.status() == CellStatus::Complete));
        }
    }

    #[test]
    fn unknown_selectors_fall_back_to_defaults() {
        let graph = build_graph("moebius", &[2, 2]);
        assert_eq!(graph.size(), 4);

        let mut traversal = build_traversal(graph, "wilsons", 0, Some(2)).unwrap();
        traversal.run_to_end();
        assert_eq!(traversal.graph().passage_count(), 3);
    }

    #[test]
    fn bad_start_id_surfaces_through_dispatch() {
        let graph = build_graph("hypercube", &[2, 2]);
        assert!(matches!(
            build_traversal(graph, "depth-first", 10, None),
            Err(GraphError::InvalidIndex(10))
        ));
    }
}
