use super::table::Table;
use crate::Probability;
use crate::Value;
use crate::board::Board;
use crate::board::Move;
use crate::board::Stone;
use crate::config::Learning;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Tabular Q-learning player for one color.
///
/// The value table is keyed by the full position, so nothing learned
/// about one position carries over to another. Exploration is ε-greedy.
pub struct Agent {
    stone: Stone,
    table: Table,
    learning: Learning,
    rng: SmallRng,
}

impl Agent {
    pub fn new(stone: Stone, table: Table, learning: Learning) -> Self {
        Self {
            stone,
            table,
            learning,
            rng: SmallRng::from_os_rng(),
        }
    }
    /// deterministic exploration, for tests and reproducible runs
    pub fn seeded(stone: Stone, table: Table, learning: Learning, seed: u64) -> Self {
        Self {
            stone,
            table,
            learning,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
    pub fn stone(&self) -> Stone {
        self.stone
    }
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// ε-greedy move selection.
    ///
    /// Explores with probability ε, and also whenever the position has
    /// nothing usable in the table. A stored greedy move that is not
    /// playable on this board is treated the same way. None only when
    /// the board is full.
    pub fn select(&mut self, board: &Board) -> Option<Move> {
        if self.explores() {
            return board.sample(&mut self.rng);
        }
        match self.table.best(&board.key()) {
            Some(m) if board.is_empty(m) => Some(m),
            Some(m) => {
                log::warn!("{} agent stored unplayable move {}", self.stone, m);
                board.sample(&mut self.rng)
            }
            None => board.sample(&mut self.rng),
        }
    }

    /// Q(s, a) ← Q(s, a) + α (r + γ max Q(s', ·) − Q(s, a))
    pub fn update(&mut self, prev: &Board, next: &Board, m: Move, reward: Value) {
        let Learning { rate, discount, .. } = self.learning;
        let key = prev.key();
        let old = self.table.get(&key, &m);
        let future = self.table.max(&next.key());
        let new = old + rate * (reward + discount * future - old);
        self.table.set(key, m, new);
    }

    fn explores(&mut self) -> bool {
        self.rng.random::<Probability>() < self.learning.exploration
    }
}
