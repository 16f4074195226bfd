use super::run::Run;
use crate::board::Axis;
use crate::board::Board;
use crate::board::Move;
use crate::board::Stone;

/// Defensive variant of [`super::recommend`], played by the in-browser
/// computer opponent.
///
/// Origins are the empty cells instead of our own stones, and the origin
/// itself is not counted. For each empty cell, row-major:
///
/// 1. if the opponent shows four in a line from here with an opening and
///    at most one capped end, that opening is taken at once
/// 2. our own lines are scored as their length, minus one when capped at
///    one end; lines capped at both ends are ignored. Four or more with an
///    opening is taken at once, otherwise the best strictly positive score
///    is remembered.
///
/// Note the answer is the opening past a line, not the origin cell.
pub fn guard(board: &Board, stone: Stone) -> Option<Move> {
    let opponent = stone.opponent();
    let mut best = None;
    let mut max = 0isize;
    for origin in board.empties() {
        for axis in Axis::ALL {
            let theirs = Run::measure(board, origin, axis, opponent);
            if theirs.count() == 4 && theirs.blocks() < 2 {
                if let Some(open) = theirs.open() {
                    log::debug!("blocking {} four at {}", opponent, open);
                    return Some(open);
                }
            }
        }
        for axis in Axis::ALL {
            let ours = Run::measure(board, origin, axis, stone);
            if ours.blocks() == 2 {
                continue;
            }
            let Some(open) = ours.open() else {
                continue;
            };
            if ours.count() >= 4 {
                return Some(open);
            }
            let score = ours.count() as isize - (ours.blocks() == 1) as isize;
            if score > max {
                max = score;
                best = Some(open);
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    fn board(stones: &[((usize, usize), Stone)]) -> Board {
        let mut board = Board::default();
        for (m, s) in stones {
            board.place(Move::from(*m), *s).unwrap();
        }
        board
    }

    #[test]
    fn empty_board_has_no_opinion() {
        assert_eq!(guard(&Board::default(), Stone::White), None);
    }

    #[test]
    fn answers_opponent_four() {
        let b = board(&[
            ((7, 2), Stone::Black),
            ((7, 3), Stone::Black),
            ((7, 4), Stone::Black),
            ((7, 5), Stone::Black),
        ]);
        // (7,1) is the first empty cell seeing all four; its only opening is (7,0)
        assert_eq!(guard(&b, Stone::White), Some(Move::from((7, 0))));
    }

    #[test]
    fn opponent_four_precedes_own_line() {
        let b = board(&[
            ((0, 5), Stone::White),
            ((0, 6), Stone::White),
            ((9, 1), Stone::Black),
            ((9, 2), Stone::Black),
            ((9, 3), Stone::Black),
            ((9, 4), Stone::Black),
        ]);
        // (9,0) sees four but no opening within reach; (9,5) sees four and (9,6)
        assert_eq!(guard(&b, Stone::White), Some(Move::from((9, 6))));
    }

    #[test]
    fn extends_own_line() {
        let b = board(&[((4, 4), Stone::White), ((4, 5), Stone::White)]);
        let m = guard(&b, Stone::White).unwrap();
        assert!(b.is_empty(m));
    }

    #[test]
    fn never_occupied() {
        for _ in 0..64 {
            let b = Board::random();
            for stone in [Stone::Black, Stone::White] {
                if let Some(m) = guard(&b, stone) {
                    assert!(b.is_empty(m), "{} guarded onto occupied {}", stone, m);
                }
            }
        }
    }
}
