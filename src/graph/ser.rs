use hashbrown::HashMap;
use serde::Serialize;

use crate::graph::cell::CellStatus;
use crate::graph::grid::GridGraph;

/// Read-only view of a graph for external formatters. This fixes the shape
/// of the data; the encoding (JSON or otherwise) is up to the consumer.
#[derive(Debug, Clone, Serialize)]
pub struct GraphSnapshot {
    pub dimensions: Vec<usize>,
    pub degree: usize,
    pub size: usize,
    /// Direction label to signed linear-index offset.
    pub compass: HashMap<String, isize>,
    /// Direction label to the label of its opposite.
    pub antipodes: HashMap<String, String>,
    pub cells: Vec<CellSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CellSnapshot {
    pub id: usize,
    pub status: CellStatus,
    /// One entry per compass direction; `None` marks a grid boundary.
    pub neighbors: HashMap<String, Option<usize>>,
    pub passages: HashMap<String, bool>,
}

impl GraphSnapshot {
    pub fn of(graph: &GridGraph) -> Self {
        let compass = graph
            .compass()
            .iter()
            .map(|&dir| (dir.label().into_owned(), graph.offset_of(dir)))
            .collect();
        let antipodes = graph
            .compass()
            .iter()
            .map(|&dir| (dir.label().into_owned(), dir.antipode().label().into_owned()))
            .collect();

        let cells = graph
            .cells()
            .iter()
            .map(|cell| CellSnapshot {
                id: cell.id(),
                status: cell.status(),
                neighbors: graph
                    .compass()
                    .iter()
                    .map(|&dir| (dir.label().into_owned(), cell.neighbor(dir)))
                    .collect(),
                passages: graph
                    .compass()
                    .iter()
                    .map(|&dir| (dir.label().into_owned(), cell.is_open(dir)))
                    .collect(),
            })
            .collect();

        GraphSnapshot {
            dimensions: graph.dimensions().to_vec(),
            degree: graph.degree(),
            size: graph.size(),
            compass,
            antipodes,
            cells,
        }
    }
}
