use crate::Value;
use crate::board::Stone;

/// How a self-play game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Stone),
    /// the board filled up without five in a row
    Draw,
}

impl Outcome {
    pub fn winner(&self) -> Option<Stone> {
        match self {
            Self::Win(stone) => Some(*stone),
            Self::Draw => None,
        }
    }
    /// +1 to every move of the winner, −1 to the loser's, 0 on a draw
    pub fn reward(&self, stone: Stone) -> Value {
        match self {
            Self::Win(w) if *w == stone => 1.0,
            Self::Win(_) => -1.0,
            Self::Draw => 0.0,
        }
    }
    /// the same scalar from black's side, accumulated across a run
    pub fn score(&self) -> i64 {
        match self {
            Self::Win(Stone::Black) => 1,
            Self::Win(Stone::White) => -1,
            Self::Draw => 0,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Win(stone) => write!(f, "{} wins", stone),
            Self::Draw => write!(f, "draw"),
        }
    }
}
