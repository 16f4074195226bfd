use crate::board::Board;
use crate::board::Move;
use crate::board::Stone;

/// One ply of a finished game: who moved, from which position, where.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub stone: Stone,
    pub before: Board,
    pub play: Move,
}

/// Every ply of one game in the order played.
/// Only kept until rewards have been assigned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record(Vec<Step>);

impl Record {
    pub fn push(&mut self, stone: Stone, before: Board, play: Move) {
        self.0.push(Step {
            stone,
            before,
            play,
        });
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// latest ply first
    pub fn rewind(&self) -> impl Iterator<Item = &Step> {
        self.0.iter().rev()
    }
}
