use crate::board::Board;
use crate::board::Move;
use crate::board::Stone;
use serde::Deserialize;
use serde::Serialize;

/// Body of `POST /recommend`.
/// A board that is not square fails extraction before reaching a handler.
#[derive(Debug, Serialize, Deserialize)]
pub struct Recommend {
    pub board: Board,
    pub color: Stone,
}

/// A cell as the browser addresses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl From<Move> for Position {
    fn from(m: Move) -> Self {
        Self {
            row: m.row(),
            col: m.col(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Failure {
    pub error: String,
}

impl From<&str> for Failure {
    fn from(error: &str) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}
