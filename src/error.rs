#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("the grid has no cells")]
    EmptyGrid,
    #[error("row {row} is {found} cells wide, but the grid is {expected} cells wide")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}
