use super::run::Run;
use crate::board::Axis;
use crate::board::Board;
use crate::board::Move;
use crate::board::Stone;

/// One-ply pattern heuristic: extend the most promising line of `stone`.
///
/// Every stone of `stone` is an origin; along each axis the run through
/// it (origin included) is measured. Only runs with an open end and at
/// most one capped end are candidates. In priority order:
///
/// 1. a run of four or more: its open end, immediately
/// 2. a run of two or more: the first such open end in scan order
/// 3. otherwise the open end of the longest run seen
///
/// Returns None when `stone` has no extendable run at all, e.g. on an
/// empty board; callers fall back to a random empty cell.
///
/// This is pattern recognition, not search. Its answers are part of the
/// observable behavior and are kept exactly as they are.
pub fn recommend(board: &Board, stone: Stone) -> Option<Move> {
    let mut threat = None;
    let mut longest = None::<(usize, Move)>;
    for origin in board.stones(stone) {
        for axis in Axis::ALL {
            let run = Run::measure(board, origin, axis, stone);
            let length = run.count() + 1;
            let Some(open) = run.open() else {
                continue;
            };
            if run.blocks() >= 2 {
                continue;
            }
            if length >= 4 {
                return Some(open);
            }
            if length >= 2 && threat.is_none() {
                threat = Some(open);
            }
            if longest.map_or(true, |(best, _)| length > best) {
                longest = Some((length, open));
            }
        }
    }
    threat.or(longest.map(|(_, open)| open))
}
