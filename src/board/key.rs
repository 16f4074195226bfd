use super::board::Board;
use super::moves::Move;
use super::stone::Stone;
use serde::Deserialize;
use serde::Serialize;

/// Canonical encoding of a whole position, used to key value tables.
///
/// Cells are flattened row-major into one symbol each:
/// `.` empty, `b` black, `w` white. A 15×15 board therefore
/// always encodes to exactly 225 characters, and two boards share
/// a key iff every cell matches.
///
/// ```text
/// b . .
/// . w .   ->   "b...w...."
/// . . .
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(String);

impl Key {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Board> for Key {
    fn from(board: &Board) -> Self {
        Self(
            board
                .cells()
                .iter()
                .map(|c| c.map(|s| s.symbol()).unwrap_or('.'))
                .collect(),
        )
    }
}

/// str isomorphism, validated by decoding
impl TryFrom<&str> for Key {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let key = Self(s.to_string());
        Board::try_from(&key).map(|_| key)
    }
}

/// decoding is only possible for perfect-square lengths
impl TryFrom<&Key> for Board {
    type Error = String;
    fn try_from(key: &Key) -> Result<Self, Self::Error> {
        let n = key.0.chars().count();
        let size = (n as f64).sqrt().round() as usize;
        if size * size != n || size == 0 {
            return Err(format!("key of length {} is not a square board", n));
        }
        let mut board = Board::new(size);
        for (i, c) in key.0.chars().enumerate() {
            if c == '.' {
                continue;
            }
            let stone = Stone::try_from(c)?;
            board
                .place(Move::from((i / size, i % size)), stone)
                .map_err(|e| e.to_string())?;
        }
        Ok(board)
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn fixed_length_row_major() {
        let mut board = Board::new(3);
        board.place(Move::from((0, 0)), Stone::Black).unwrap();
        board.place(Move::from((1, 1)), Stone::White).unwrap();
        assert_eq!(board.key().as_str(), "b...w....");
        assert_eq!(Board::default().key().as_str().len(), 225);
    }

    #[test]
    fn decodes_back_to_board() {
        let board = Board::random();
        assert_eq!(Board::try_from(&board.key()).unwrap(), board);
    }

    #[test]
    fn rejects_foreign_symbols() {
        assert!(Key::try_from("b...x....").is_err());
        assert!(Key::try_from("b..").is_err());
    }
}
