use std::fmt;

/// Lifecycle state of an [`OwnershipCell`](crate::OwnershipCell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    /// The cell has never held a value, or its value was moved to another cell.
    #[default]
    Empty,
    /// The cell owns a live heap allocation.
    Valid,
    /// The cell's value was destroyed by `free` or handed out by `release`.
    Released,
}

impl CellState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CellState::Empty => "empty",
            CellState::Valid => "valid",
            CellState::Released => "released",
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
