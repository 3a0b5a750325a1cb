pub mod decision_grid;

pub use decision_grid::{classify_grid, Classification, GridCell, GridSpec};
