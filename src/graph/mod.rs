pub mod cell;
pub use cell::{Cell, CellStatus};
pub mod grid;
pub use grid::{GraphError, GridGraph};
pub mod ser;
pub use ser::{CellSnapshot, GraphSnapshot};
