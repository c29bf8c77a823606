use hashbrown::HashMap;
use thiserror::Error;

use crate::compass::Direction;
use crate::graph::cell::{Cell, CellStatus};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("cell index {0} is out of bounds")]
    InvalidIndex(usize),
}

/// The full maze lattice: an n-dimensional rectangular grid flattened into
/// one cell vector, with per-axis strides ("magnitudes") mapping between
/// linear ids and coordinate tuples.
///
/// An empty dimension list is valid and yields a single degree-0 cell.
/// A zero-length axis collapses `size` to 0 and leaves no valid index;
/// callers are expected to pass strictly positive dimensions.
#[derive(Debug, Clone)]
pub struct GridGraph {
    dimensions: Vec<usize>,
    magnitudes: Vec<usize>,
    size: usize,
    compass: Vec<Direction>,
    data: Vec<Cell>,
}

impl GridGraph {
    pub fn new(dimensions: Vec<usize>) -> Self {
        let magnitudes = dimensions
            .iter()
            .scan(1usize, |stride, &dim| {
                let current = *stride;
                *stride *= dim;
                Some(current)
            })
            .collect();
        let size = dimensions.iter().product();
        let compass = (0..dimensions.len())
            .flat_map(|axis| [Direction::positive(axis), Direction::negative(axis)])
            .collect();

        let mut graph = GridGraph {
            dimensions,
            magnitudes,
            size,
            compass,
            data: Vec::new(),
        };
        let data = (0..size)
            .map(|id| Cell::new(id, graph.neighbors_of(id)))
            .collect();
        graph.data = data;
        graph
    }

    pub fn dimensions(&self) -> &[usize] {
        &self.dimensions
    }

    /// Number of axes.
    pub fn degree(&self) -> usize {
        self.dimensions.len()
    }

    /// Total cell count, the product of all dimensions (1 for no axes).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Per-axis strides: `magnitudes[0] == 1`, each later stride is the
    /// previous one times the previous axis length.
    pub fn magnitudes(&self) -> &[usize] {
        &self.magnitudes
    }

    pub fn compass(&self) -> &[Direction] {
        &self.compass
    }

    /// Signed linear-index offset of a unit move in the given direction.
    pub fn offset_of(&self, dir: Direction) -> isize {
        let stride = self.magnitudes[dir.axis] as isize;
        if dir.positive {
            stride
        } else {
            -stride
        }
    }

    pub fn holds_index(&self, id: usize) -> bool {
        id < self.size
    }

    fn check_index(&self, id: usize) -> Result<(), GraphError> {
        if self.holds_index(id) {
            Ok(())
        } else {
            Err(GraphError::InvalidIndex(id))
        }
    }

    /// Coordinate tuple of a single id. Does not bounds-check; out-of-range
    /// ids still produce a tuple via the modular arithmetic. Pair with
    /// [`Self::holds_index`] when validity matters.
    pub fn coordinates(&self, id: usize) -> Vec<usize> {
        self.magnitudes
            .iter()
            .zip(&self.dimensions)
            .map(|(&stride, &dim)| (id / stride) % dim)
            .collect()
    }

    /// Common coordinates of a set of ids: an axis keeps its value only if
    /// every id agrees on it, otherwise it collapses to `None`. A single id
    /// yields its full tuple.
    pub fn coordinates_of(&self, ids: &[usize]) -> Vec<Option<usize>> {
        let mut iter = ids.iter();
        let Some(&first) = iter.next() else {
            return vec![None; self.degree()];
        };

        let mut common: Vec<Option<usize>> =
            self.coordinates(first).into_iter().map(Some).collect();
        for &id in iter {
            for (slot, coord) in common.iter_mut().zip(self.coordinates(id)) {
                if *slot != Some(coord) {
                    *slot = None;
                }
            }
        }
        common
    }

    /// True grid adjacency: both ids are valid and their coordinate tuples
    /// differ in exactly one axis, by exactly 1.
    ///
    /// Plain index arithmetic is not enough here: stepping by a stride can
    /// jump across an axis boundary (last column of one row to the first
    /// column of the next) while staying inside the flat array. Comparing
    /// full coordinate tuples rejects those false positives.
    pub fn are_neighbors(&self, a: usize, b: usize) -> bool {
        if !self.holds_index(a) || !self.holds_index(b) {
            return false;
        }

        let mut unit_steps = 0;
        for (ca, cb) in self.coordinates(a).into_iter().zip(self.coordinates(b)) {
            match ca.abs_diff(cb) {
                0 => {}
                1 => unit_steps += 1,
                _ => return false,
            }
        }
        unit_steps == 1
    }

    /// Geometric neighbors of a cell, one entry per compass direction that
    /// survives the adjacency check. The sole source of every cell's
    /// neighbor map at construction.
    pub fn neighbors_of(&self, id: usize) -> HashMap<Direction, usize> {
        self.compass
            .iter()
            .filter_map(|&dir| {
                let candidate = id.checked_add_signed(self.offset_of(dir))?;
                self.are_neighbors(id, candidate).then_some((dir, candidate))
            })
            .collect()
    }

    /// Hyperplane slice: all ids whose coordinates match every fixed axis
    /// of the pattern (`None` = wildcard). Inspection helper, not on the
    /// traversal hot path.
    pub fn slice_on(&self, pattern: &[Option<usize>]) -> Vec<usize> {
        (0..self.size)
            .filter(|&id| {
                self.coordinates(id)
                    .iter()
                    .zip(pattern)
                    .all(|(&coord, &fixed)| fixed.map_or(true, |f| coord == f))
            })
            .collect()
    }

    pub fn cell(&self, id: usize) -> Option<&Cell> {
        self.data.get(id)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.data
    }

    pub(crate) fn set_status(&mut self, id: usize, status: CellStatus) {
        self.data[id].set_status(status);
    }

    /// Links `from` to `to` in the given direction and `to` back through
    /// the antipode, both sides together. Since neighbor maps are complete
    /// at construction this only ever re-asserts an existing link.
    pub fn connect_neighbor(
        &mut self,
        dir: Direction,
        from: usize,
        to: usize,
    ) -> Result<(), GraphError> {
        self.check_index(from)?;
        self.check_index(to)?;
        debug_assert!(self.are_neighbors(from, to));

        self.data[from].link_neighbor(dir, to);
        self.data[to].link_neighbor(dir.antipode(), from);
        Ok(())
    }

    /// Opens the passage from `from` toward `to` and the antipodal passage
    /// back, both sides together. Never leaves a passage half-open.
    pub fn connect_passage(
        &mut self,
        dir: Direction,
        from: usize,
        to: usize,
    ) -> Result<(), GraphError> {
        self.check_index(from)?;
        self.check_index(to)?;
        debug_assert!(self.are_neighbors(from, to));

        self.data[from].open_passage(dir);
        self.data[to].open_passage(dir.antipode());
        Ok(())
    }

    /// Open passages counted once per adjacent pair.
    pub fn passage_count(&self) -> usize {
        self.data.iter().map(Cell::open_passages).sum::<usize>() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::{GraphError, GridGraph};
    use crate::compass::Direction;
    use crate::graph::cell::CellStatus;

    #[test]
    fn stride_law() {
        let graph = GridGraph::new(vec![4, 3, 2]);
        assert_eq!(graph.magnitudes(), &[1, 4, 12]);

        let graph = GridGraph::new(vec![7]);
        assert_eq!(graph.magnitudes(), &[1]);
    }

    #[test]
    fn size_law() {
        assert_eq!(GridGraph::new(vec![4, 3, 2]).size(), 24);
        assert_eq!(GridGraph::new(vec![5]).size(), 5);
        assert_eq!(GridGraph::new(vec![]).size(), 1);
        assert_eq!(GridGraph::new(vec![]).degree(), 0);
    }

    #[test]
    fn degree_zero_graph_has_one_cell_and_no_compass() {
        let graph = GridGraph::new(vec![]);
        assert!(graph.compass().is_empty());
        assert_eq!(graph.cells().len(), 1);
        assert!(graph.cell(0).unwrap().neighbors().is_empty());
    }

    #[test]
    fn coordinates_of_single_id() {
        let graph = GridGraph::new(vec![2, 3]);
        // Row-major by axis 0: id = x + 2 * y.
        assert_eq!(graph.coordinates_of(&[0]), vec![Some(0), Some(0)]);
        assert_eq!(graph.coordinates_of(&[1]), vec![Some(1), Some(0)]);
        assert_eq!(graph.coordinates_of(&[2]), vec![Some(0), Some(1)]);
        assert_eq!(graph.coordinates_of(&[5]), vec![Some(1), Some(2)]);
    }

    #[test]
    fn coordinates_of_reduces_disagreeing_axes() {
        let graph = GridGraph::new(vec![2, 3]);
        // ids 0 and 2 share x = 0 but sit in different rows.
        assert_eq!(graph.coordinates_of(&[0, 2]), vec![Some(0), None]);
        // ids 2 and 3 share row 1.
        assert_eq!(graph.coordinates_of(&[2, 3]), vec![None, Some(1)]);
        assert_eq!(graph.coordinates_of(&[0, 3]), vec![None, None]);
        assert_eq!(graph.coordinates_of(&[]), vec![None, None]);
    }

    #[test]
    fn holds_index_bounds() {
        let graph = GridGraph::new(vec![2, 3]);
        assert!(graph.holds_index(0));
        assert!(graph.holds_index(5));
        assert!(!graph.holds_index(6));
    }

    #[test]
    fn no_wraparound_adjacency() {
        let graph = GridGraph::new(vec![2, 3]);
        // 2 - 1 == magnitudes[0], but id 1 ends a row and id 2 starts the
        // next one.
        assert!(!graph.are_neighbors(1, 2));
        assert!(graph.are_neighbors(0, 1));
        assert!(graph.are_neighbors(1, 3));
        assert!(graph.are_neighbors(2, 3));
    }

    #[test]
    fn adjacency_is_symmetric_and_unit_step() {
        let graph = GridGraph::new(vec![3, 3]);
        for a in 0..graph.size() {
            for b in 0..graph.size() {
                assert_eq!(graph.are_neighbors(a, b), graph.are_neighbors(b, a));
                if graph.are_neighbors(a, b) {
                    let diffs: Vec<_> = graph
                        .coordinates(a)
                        .into_iter()
                        .zip(graph.coordinates(b))
                        .map(|(ca, cb)| ca.abs_diff(cb))
                        .collect();
                    assert_eq!(diffs.iter().sum::<usize>(), 1);
                }
            }
        }
    }

    #[test]
    fn invalid_ids_are_never_neighbors() {
        let graph = GridGraph::new(vec![2, 2]);
        assert!(!graph.are_neighbors(3, 4));
        assert!(!graph.are_neighbors(4, 3));
        assert!(!graph.are_neighbors(0, 0));
    }

    #[test]
    fn neighbors_of_matches_geometry() {
        let graph = GridGraph::new(vec![2, 3]);
        let corner = graph.neighbors_of(0);
        assert_eq!(corner.len(), 2);
        assert_eq!(corner.get(&Direction::positive(0)), Some(&1));
        assert_eq!(corner.get(&Direction::positive(1)), Some(&2));

        let middle = graph.neighbors_of(2);
        assert_eq!(middle.len(), 3);
        assert_eq!(middle.get(&Direction::positive(0)), Some(&3));
        assert_eq!(middle.get(&Direction::negative(1)), Some(&0));
        assert_eq!(middle.get(&Direction::positive(1)), Some(&4));
    }

    #[test]
    fn slice_on_selects_hyperplanes() {
        let graph = GridGraph::new(vec![2, 3]);
        assert_eq!(graph.slice_on(&[Some(0), None]), vec![0, 2, 4]);
        assert_eq!(graph.slice_on(&[None, Some(1)]), vec![2, 3]);
        assert_eq!(graph.slice_on(&[None, None]), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(graph.slice_on(&[Some(1), Some(2)]), vec![5]);
    }

    #[test]
    fn connect_passage_opens_both_sides() {
        let mut graph = GridGraph::new(vec![2, 2]);
        let east = Direction::positive(0);
        graph.connect_passage(east, 0, 1).unwrap();

        assert!(graph.cell(0).unwrap().is_open(east));
        assert!(graph.cell(1).unwrap().is_open(east.antipode()));
        assert_eq!(graph.passage_count(), 1);
    }

    #[test]
    fn connect_rejects_invalid_ids() {
        let mut graph = GridGraph::new(vec![2, 2]);
        let east = Direction::positive(0);
        assert_eq!(
            graph.connect_passage(east, 0, 9),
            Err(GraphError::InvalidIndex(9))
        );
        assert_eq!(
            graph.connect_neighbor(east, 7, 0),
            Err(GraphError::InvalidIndex(7))
        );
        assert_eq!(graph.passage_count(), 0);
    }

    #[test]
    fn cells_start_unvisited() {
        let graph = GridGraph::new(vec![3, 2]);
        assert!(graph
            .cells()
            .iter()
            .all(|c| c.status() == CellStatus::Unvisited && !c.has_open_passage()));
    }
}
