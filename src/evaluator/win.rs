use super::run::Run;
use crate::FIVE;
use crate::board::Axis;
use crate::board::Board;
use crate::board::Stone;

/// Does `stone` have five or more in an unbroken line anywhere?
///
/// Every cell holding `stone` is treated as an origin; along each axis
/// the contiguous stones on both sides are added to it. Returns on the
/// first line reaching [`FIVE`].
pub fn has_five(board: &Board, stone: Stone) -> bool {
    board.stones(stone).any(|origin| {
        Axis::ALL
            .iter()
            .any(|axis| 1 + Run::measure(board, origin, *axis, stone).count() >= FIVE)
    })
}

/// The color holding five in a row, if any.
/// Black is checked first; legal play never produces two winners.
pub fn winner(board: &Board) -> Option<Stone> {
    [Stone::Black, Stone::White]
        .into_iter()
        .find(|s| has_five(board, *s))
}
