use crate::LOOKAHEAD;
use crate::board::Axis;
use crate::board::Board;
use crate::board::Move;
use crate::board::Stone;

/// What a cell "sees" along one axis: how many `stone`s extend
/// contiguously from it, where the line could be continued, and
/// whether the other color caps either end.
///
/// Both senses of the axis are walked at most [`LOOKAHEAD`] steps.
/// Each walk stops at the first cell that is not `stone`: an empty
/// cell is recorded as an opening, a foreign stone as a block. The
/// board edge is neither.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Run {
    count: usize,
    opens: Vec<Move>,
    blocks: usize,
}

impl Run {
    pub fn measure(board: &Board, origin: Move, axis: Axis, stone: Stone) -> Self {
        let mut run = Self::default();
        for sign in [1, -1] {
            for steps in 1..=LOOKAHEAD {
                let Some(cell) = origin.step(axis, sign, steps, board.size()) else {
                    break;
                };
                match board.get(cell) {
                    Some(s) if s == stone => run.count += 1,
                    Some(_) => {
                        run.blocks += 1;
                        break;
                    }
                    None => {
                        run.opens.push(cell);
                        break;
                    }
                }
            }
        }
        run
    }
    /// matching stones on either side, not counting the origin
    pub fn count(&self) -> usize {
        self.count
    }
    /// ends capped by the other color: 0, 1, or 2
    pub fn blocks(&self) -> usize {
        self.blocks
    }
    /// first empty cell past the run, forward sense before backward
    pub fn open(&self) -> Option<Move> {
        self.opens.first().copied()
    }
}
