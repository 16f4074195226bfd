use super::guard::guard;
use super::recommend::recommend;
use crate::board::Axis;
use crate::board::Board;
use crate::board::Move;
use crate::board::Stone;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Heuristic opponent for a human player.
///
/// Answers the opponent's first stone with an orthogonal neighbour,
/// then plays [`guard`], then [`recommend`], and finally a random
/// empty cell so that it always moves while the board has room.
pub struct Computer {
    stone: Stone,
    rng: SmallRng,
}

impl Computer {
    pub fn new(stone: Stone) -> Self {
        Self {
            stone,
            rng: SmallRng::from_os_rng(),
        }
    }
    pub fn seeded(stone: Stone, seed: u64) -> Self {
        Self {
            stone,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
    pub fn stone(&self) -> Stone {
        self.stone
    }
    /// None only when the board is full
    pub fn reply(&mut self, board: &Board) -> Option<Move> {
        self.opening(board)
            .or_else(|| guard(board, self.stone))
            .or_else(|| recommend(board, self.stone))
            .or_else(|| board.sample(&mut self.rng))
    }
    /// up, down, left, right of the opponent's lone stone
    fn opening(&self, board: &Board) -> Option<Move> {
        if board.count(self.stone) > 0 {
            return None;
        }
        let mut theirs = board.stones(self.stone.opponent());
        let (Some(first), None) = (theirs.next(), theirs.next()) else {
            return None;
        };
        [
            (Axis::Vertical, -1),
            (Axis::Vertical, 1),
            (Axis::Horizontal, -1),
            (Axis::Horizontal, 1),
        ]
        .into_iter()
        .filter_map(|(axis, sign)| first.step(axis, sign, 1, board.size()))
        .find(|m| board.is_empty(*m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_first_stone_from_above() {
        let mut board = Board::default();
        board.place(Move::from((7, 7)), Stone::Black).unwrap();
        let mut computer = Computer::seeded(Stone::White, 0);
        assert_eq!(computer.reply(&board), Some(Move::from((6, 7))));
    }

    #[test]
    fn answers_corner_stone_from_below() {
        let mut board = Board::default();
        board.place(Move::from((0, 0)), Stone::Black).unwrap();
        let mut computer = Computer::seeded(Stone::White, 0);
        assert_eq!(computer.reply(&board), Some(Move::from((1, 0))));
    }

    #[test]
    fn opens_anywhere_on_empty_board() {
        let board = Board::default();
        let mut computer = Computer::seeded(Stone::Black, 3);
        let m = computer.reply(&board).unwrap();
        assert!(board.is_empty(m));
    }

    #[test]
    fn plays_until_full() {
        let mut board = Board::new(5);
        let mut black = Computer::seeded(Stone::Black, 1);
        let mut white = Computer::seeded(Stone::White, 2);
        for ply in 0..25 {
            let player = if ply % 2 == 0 { &mut black } else { &mut white };
            let m = player.reply(&board).unwrap();
            board.place(m, player.stone()).unwrap();
        }
        assert_eq!(black.reply(&board), None);
    }
}
