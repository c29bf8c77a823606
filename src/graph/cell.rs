use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::compass::Direction;

/// Visitation state of a cell during traversal.
///
/// A cell moves along `Unvisited -> Active -> Passive -> Complete`, except
/// that it may cycle between `Active` and `Passive` before completing (the
/// breadth-first engine re-activates its front cell on every step).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellStatus {
    Unvisited,
    Active,
    Passive,
    Complete,
}

/// One node of the grid. Neighbor links are fully populated from geometry
/// at graph construction; all passages start closed (walls).
#[derive(Debug, Clone)]
pub struct Cell {
    id: usize,
    status: CellStatus,
    neighbors: HashMap<Direction, usize>,
    passages: HashMap<Direction, bool>,
}

impl Cell {
    pub(crate) fn new(id: usize, neighbors: HashMap<Direction, usize>) -> Self {
        let passages = neighbors.keys().map(|&dir| (dir, false)).collect();
        Cell {
            id,
            status: CellStatus::Unvisited,
            neighbors,
            passages,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn status(&self) -> CellStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: CellStatus) {
        self.status = status;
    }

    /// Id of the geometric neighbor in the given direction, or `None` at a
    /// grid boundary.
    pub fn neighbor(&self, dir: Direction) -> Option<usize> {
        self.neighbors.get(&dir).copied()
    }

    pub fn neighbors(&self) -> &HashMap<Direction, usize> {
        &self.neighbors
    }

    pub fn is_open(&self, dir: Direction) -> bool {
        self.passages.get(&dir).copied().unwrap_or(false)
    }

    pub fn passages(&self) -> &HashMap<Direction, bool> {
        &self.passages
    }

    pub fn has_open_passage(&self) -> bool {
        self.passages.values().any(|&open| open)
    }

    pub fn has_wall(&self) -> bool {
        self.passages.values().any(|&open| !open)
    }

    /// Number of open passages out of this cell.
    pub fn open_passages(&self) -> usize {
        self.passages.values().filter(|&&open| open).count()
    }

    // Links are geometrically complete at construction, so a relink may
    // only ever re-assert the existing target.
    pub(crate) fn link_neighbor(&mut self, dir: Direction, id: usize) {
        let prev = self.neighbors.insert(dir, id);
        debug_assert!(
            prev.map_or(true, |p| p == id),
            "relink changed neighbor {:?} of cell {}",
            dir,
            self.id
        );
    }

    pub(crate) fn open_passage(&mut self, dir: Direction) {
        self.passages.insert(dir, true);
    }
}
