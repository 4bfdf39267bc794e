/// A character outside of the command alphabet `F`, `B`, `L`, `R`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownCommand {
    /// Position of the offending character, counted in characters (not bytes).
    pub index: usize,
    pub token: char,
}

impl std::error::Error for UnknownCommand {}

impl std::fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown command {:?} at position {}, expected one of F, B, L, R",
            self.token, self.index
        )
    }
}

/// The error type for setting up a [`Grid`](crate::Grid) or placing a
/// [`Rover`](crate::Rover) on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    InvalidBounds { x_limit: i64, y_limit: i64 },
    StartBlocked,
}

impl std::error::Error for GridError {}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::InvalidBounds { x_limit, y_limit } => write!(
                f,
                "Grid limits must be positive, got {} x {}",
                x_limit, y_limit
            ),
            GridError::StartBlocked => {
                write!(f, "The starting cell (0, 0) is occupied by an obstacle")
            }
        }
    }
}
