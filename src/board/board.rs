use super::key::Key;
use super::moves::Move;
use super::stone::Stone;
use crate::Arbitrary;
use crate::SIZE;
use crate::error::BoardError;
use serde::Deserialize;
use serde::Serialize;

/// Row-major grid of rows, the shape exchanged with browsers.
pub type Grid = Vec<Vec<Option<Stone>>>;

/// A square Gomoku board.
///
/// The side length is fixed at construction. Cells only ever go from
/// empty to occupied; a fresh game needs a fresh board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Grid", into = "Grid")]
pub struct Board {
    size: usize,
    cells: Vec<Option<Stone>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(SIZE)
    }
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }
    pub fn size(&self) -> usize {
        self.size
    }
    pub fn contains(&self, m: Move) -> bool {
        m.row() < self.size && m.col() < self.size
    }
    /// contents of a cell. off-board cells read as empty;
    /// callers that care use [`Board::contains`] first.
    pub fn get(&self, m: Move) -> Option<Stone> {
        match self.contains(m) {
            true => self.cells[self.index(m)],
            false => None,
        }
    }
    pub fn is_empty(&self, m: Move) -> bool {
        self.contains(m) && self.cells[self.index(m)].is_none()
    }
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
    /// the only mutation a board admits
    pub fn place(&mut self, m: Move, stone: Stone) -> Result<(), BoardError> {
        if !self.contains(m) {
            return Err(BoardError::OutOfBounds(m, self.size));
        }
        let i = self.index(m);
        if self.cells[i].is_some() {
            return Err(BoardError::Occupied(m));
        }
        self.cells[i] = Some(stone);
        Ok(())
    }
    /// every cell, row-major
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        (0..self.size).flat_map(move |r| (0..self.size).map(move |c| Move::from((r, c))))
    }
    /// empty cells, row-major
    pub fn empties(&self) -> impl Iterator<Item = Move> + '_ {
        self.moves().filter(|m| self.is_empty(*m))
    }
    /// cells holding `stone`, row-major
    pub fn stones(&self, stone: Stone) -> impl Iterator<Item = Move> + '_ {
        self.moves().filter(move |m| self.get(*m) == Some(stone))
    }
    /// a uniformly random empty cell, None once the board is full
    pub fn sample<R>(&self, rng: &mut R) -> Option<Move>
    where
        R: rand::Rng,
    {
        use rand::seq::IndexedRandom;
        self.empties().collect::<Vec<_>>().choose(rng).copied()
    }
    pub fn count(&self, stone: Stone) -> usize {
        self.cells.iter().filter(|c| **c == Some(stone)).count()
    }
    /// canonical state key of this position
    pub fn key(&self) -> Key {
        Key::from(self)
    }
    pub fn cells(&self) -> &[Option<Stone>] {
        &self.cells
    }
    fn index(&self, m: Move) -> usize {
        m.row() * self.size + m.col()
    }
}

impl From<Board> for Grid {
    fn from(board: Board) -> Self {
        board
            .cells
            .chunks(board.size.max(1))
            .map(|row| row.to_vec())
            .collect()
    }
}

impl TryFrom<Grid> for Board {
    type Error = BoardError;
    fn try_from(grid: Grid) -> Result<Self, Self::Error> {
        let size = grid.len();
        if size == 0 {
            return Err(BoardError::Shape("board has no rows".into()));
        }
        if let Some((r, row)) = grid.iter().enumerate().find(|(_, row)| row.len() != size) {
            return Err(BoardError::Shape(format!(
                "row {} has {} cells, expected {}",
                r,
                row.len(),
                size
            )));
        }
        Ok(Self {
            size,
            cells: grid.into_iter().flatten().collect(),
        })
    }
}

/// one row per line, `.` for empty, `b`/`w` for stones
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            let line = row
                .iter()
                .map(|c| c.map(|s| s.symbol()).unwrap_or('.'))
                .map(String::from)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// a random position with roughly a third of cells in each state.
/// not necessarily reachable by legal play.
impl Arbitrary for Board {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let mut board = Self::default();
        for cell in board.cells.iter_mut() {
            *cell = match rng.random_range(0..3) {
                0 => Some(Stone::Black),
                1 => Some(Stone::White),
                _ => None,
            };
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_rejects_occupied_and_off_board() {
        let mut board = Board::default();
        let m = Move::from((7, 7));
        assert!(board.place(m, Stone::Black).is_ok());
        assert_eq!(board.place(m, Stone::White), Err(BoardError::Occupied(m)));
        assert_eq!(board.get(m), Some(Stone::Black));
        let off = Move::from((15, 0));
        assert_eq!(
            board.place(off, Stone::White),
            Err(BoardError::OutOfBounds(off, 15))
        );
    }

    #[test]
    fn empties_shrink_as_stones_land() {
        let mut board = Board::new(3);
        assert_eq!(board.empties().count(), 9);
        board.place(Move::from((0, 0)), Stone::Black).unwrap();
        board.place(Move::from((2, 2)), Stone::White).unwrap();
        assert_eq!(board.empties().count(), 7);
        assert_eq!(board.empties().next(), Some(Move::from((0, 1))));
        assert_eq!(board.count(Stone::Black), 1);
        assert!(!board.is_full());
    }

    #[test]
    fn sample_only_hits_empty_cells() {
        use rand::SeedableRng;
        let ref mut rng = rand::rngs::SmallRng::seed_from_u64(7);
        let mut board = Board::new(5);
        for _ in 0..25 {
            let m = board.sample(rng).unwrap();
            assert!(board.is_empty(m));
            board.place(m, Stone::Black).unwrap();
        }
        assert!(board.is_full());
        assert_eq!(board.sample(rng), None);
    }

    #[test]
    fn grid_json_shape() {
        let mut board = Board::new(2);
        board.place(Move::from((0, 1)), Stone::White).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"[[null,"white"],[null,null]]"#);
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
    }

    #[test]
    fn grid_must_be_square() {
        let ragged = r#"[[null,null],[null]]"#;
        assert!(serde_json::from_str::<Board>(ragged).is_err());
        assert!(serde_json::from_str::<Board>("[]").is_err());
    }

    #[test]
    fn display_rows() {
        let mut board = Board::new(2);
        board.place(Move::from((1, 0)), Stone::Black).unwrap();
        assert_eq!(board.to_string(), ". .\nb .\n");
    }
}
