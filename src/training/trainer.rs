use super::outcome::Outcome;
use super::record::Record;
use super::report::Report;
use super::state::RunState;
use crate::agent::Agent;
use crate::board::Board;
use crate::board::Stone;
use crate::config::Config;
use crate::error::StorageError;
use crate::evaluator::has_five;
use crate::save::Output;
use crate::save::Storage;

/// Self-play between two Q-learning agents.
///
/// A run is strictly sequential: load both tables, play the configured
/// number of games, assign rewards after each one, save both tables.
/// Nothing is saved until every game has been played, so a run that
/// dies halfway leaves the stored tables untouched.
pub struct Trainer {
    black: Agent,
    white: Agent,
    size: usize,
    state: RunState,
    last: Option<(Board, Outcome)>,
}

impl Trainer {
    pub fn new(black: Agent, white: Agent, size: usize, games: usize) -> Self {
        Self {
            black,
            white,
            size,
            state: RunState::new(games),
            last: None,
        }
    }

    /// both agents from their stored tables, or empty ones
    pub fn load<S>(storage: &S, config: &Config) -> Result<Self, StorageError>
    where
        S: Storage + ?Sized,
    {
        let black = storage.load(crate::BLACK_MODEL)?.unwrap_or_default();
        let white = storage.load(crate::WHITE_MODEL)?.unwrap_or_default();
        Ok(Self::new(
            Agent::new(Stone::Black, black, config.learning),
            Agent::new(Stone::White, white, config.learning),
            config.training.size,
            config.training.games,
        ))
    }

    /// load, train, dump the last board, save.
    /// the dump goes first so a failed dump leaves the stored tables untouched.
    pub fn run<S>(storage: &S, output: &Output, config: &Config) -> Result<Self, StorageError>
    where
        S: Storage + ?Sized,
    {
        let mut trainer = Self::load(storage, config)?;
        trainer.train();
        trainer.dump(output)?;
        trainer.save(storage)?;
        Ok(trainer)
    }

    /// play every remaining game of the run
    pub fn train(&mut self) {
        log::info!("training {} self-play games", self.state.total());
        while let Some(index) = self.state.next() {
            let outcome = self.play();
            log::info!("game {}: {}", index + 1, outcome);
        }
        log::info!("training complete {}", self.report());
    }

    /// one game from an empty board, then reward assignment.
    /// only reached through `train`, which owns the run's phase.
    fn play(&mut self) -> Outcome {
        let mut board = Board::new(self.size);
        let mut record = Record::default();
        let mut outcome = Outcome::Draw;
        let mut stone = Stone::Black;
        for _ in 0..self.size * self.size {
            let agent = match stone {
                Stone::Black => &mut self.black,
                Stone::White => &mut self.white,
            };
            let Some(play) = agent.select(&board) else {
                break;
            };
            let before = board.clone();
            if let Err(e) = board.place(play, stone) {
                log::warn!("{} agent made an illegal move: {}", stone, e);
                break;
            }
            record.push(stone, before, play);
            if has_five(&board, stone) {
                outcome = Outcome::Win(stone);
                break;
            }
            stone = stone.opponent();
        }
        log::debug!("{} after {} plies\n{}", outcome, record.len(), board);
        self.backpropagate(&record, &board, outcome);
        self.state.finish(outcome);
        self.last = Some((board, outcome));
        outcome
    }

    /// Every recorded move is updated once towards the game's result,
    /// latest move first. Each update bootstraps from the final board,
    /// never from another move's fresh value, so the order does not
    /// change the resulting table.
    fn backpropagate(&mut self, record: &Record, last: &Board, outcome: Outcome) {
        for step in record.rewind() {
            let agent = match step.stone {
                Stone::Black => &mut self.black,
                Stone::White => &mut self.white,
            };
            agent.update(&step.before, last, step.play, outcome.reward(step.stone));
        }
    }

    /// write both tables under their model names
    pub fn save<S>(&self, storage: &S) -> Result<(), StorageError>
    where
        S: Storage + ?Sized,
    {
        storage.save(crate::BLACK_MODEL, self.black.table())?;
        storage.save(crate::WHITE_MODEL, self.white.table())?;
        Ok(())
    }

    /// text dump of the last game's final board, if any game was played
    pub fn dump(&self, output: &Output) -> Result<(), StorageError> {
        match self.last {
            Some((ref board, outcome)) => output
                .write(board, outcome.winner(), self.state.played(), self.state.score())
                .map(|_| ()),
            None => Ok(()),
        }
    }

    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }
    pub fn state(&self) -> &RunState {
        &self.state
    }
    pub fn black(&self) -> &Agent {
        &self.black
    }
    pub fn white(&self) -> &Agent {
        &self.white
    }
    pub fn last(&self) -> Option<&(Board, Outcome)> {
        self.last.as_ref()
    }
    pub fn into_agents(self) -> (Agent, Agent) {
        (self.black, self.white)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Table;
    use crate::board::Move;
    use crate::config::Learning;
    use crate::error::StorageError;
    use crate::save::Memory;
    use crate::training::Phase;

    fn seeded(games: usize, size: usize) -> Trainer {
        let learning = Learning::default();
        Trainer::new(
            Agent::seeded(Stone::Black, Table::default(), learning, 1),
            Agent::seeded(Stone::White, Table::default(), learning, 2),
            size,
            games,
        )
    }

    #[test]
    fn run_terminates_and_learns() {
        let mut trainer = seeded(3, 15);
        trainer.train();
        assert!(trainer.state().is_completed());
        assert_eq!(trainer.report().games_played, 3);
        assert_eq!(trainer.report().progress, 100.0);
        assert!(!trainer.black().table().is_empty());
        assert!(!trainer.white().table().is_empty());
    }

    #[test]
    fn train_completes_within_bounds() {
        let mut trainer = seeded(2, 5);
        trainer.train();
        trainer.train();
        assert_eq!(trainer.state().phase(), Phase::Completed);
        assert_eq!(trainer.report().games_played, 2);
        assert!(trainer.report().progress <= 100.0);
    }

    #[test]
    fn finished_games_are_terminal() {
        let mut trainer = seeded(1, 7);
        let outcome = trainer.play();
        let (board, last) = trainer.last().unwrap().clone();
        assert_eq!(outcome, last);
        match outcome {
            Outcome::Win(stone) => assert!(has_five(&board, stone)),
            Outcome::Draw => assert!(board.is_full()),
        }
    }

    #[test]
    fn opening_value_follows_result() {
        let mut trainer = seeded(1, 15);
        let outcome = trainer.play();
        let value = trainer.black().table().max(&Board::default().key());
        match outcome {
            Outcome::Win(Stone::Black) => assert!(value > 0.0),
            Outcome::Win(Stone::White) => assert!(value < 0.0),
            Outcome::Draw => assert_eq!(value, 0.0),
        }
    }

    #[test]
    fn tiny_board_always_draws() {
        let mut trainer = seeded(4, 3);
        trainer.train();
        assert_eq!(trainer.report().total_score, 0);
        let (board, outcome) = trainer.last().unwrap();
        assert_eq!(*outcome, Outcome::Draw);
        assert!(board.is_full());
    }

    #[test]
    fn update_uses_final_board_regardless_of_order() {
        let learning = Learning {
            rate: 1.0,
            discount: 0.5,
            exploration: 0.0,
        };
        let mut trainer = Trainer::new(
            Agent::seeded(Stone::Black, Table::default(), learning, 1),
            Agent::seeded(Stone::White, Table::default(), learning, 2),
            15,
            1,
        );
        let mut record = Record::default();
        let mut board = Board::default();
        let a = Move::from((7, 7));
        let b = Move::from((7, 8));
        record.push(Stone::Black, board.clone(), a);
        board.place(a, Stone::Black).unwrap();
        record.push(Stone::White, board.clone(), b);
        board.place(b, Stone::White).unwrap();
        trainer.backpropagate(&record, &board, Outcome::Win(Stone::Black));
        assert_eq!(trainer.black().table().get(&Board::default().key(), &a), 1.0);
        let mut after = Board::default();
        after.place(a, Stone::Black).unwrap();
        assert_eq!(trainer.white().table().get(&after.key(), &b), -1.0);
    }

    #[test]
    fn run_persists_both_models() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Memory::default();
        let output = Output::new(dir.path());
        let config = Config::default();
        let trainer = Trainer::run(&storage, &output, &config).unwrap();
        assert_eq!(trainer.report().games_played, config.training.games);
        let black = storage.load(crate::BLACK_MODEL).unwrap().unwrap();
        let white = storage.load(crate::WHITE_MODEL).unwrap().unwrap();
        assert_eq!(&black, trainer.black().table());
        assert_eq!(&white, trainer.white().table());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn second_run_resumes_from_storage() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Memory::default();
        let output = Output::new(dir.path());
        let config = Config::default();
        let first = Trainer::run(&storage, &output, &config).unwrap();
        let before = first.black().table().len();
        let second = Trainer::run(&storage, &output, &config).unwrap();
        assert!(second.black().table().len() >= before);
        assert_eq!(second.report().games_played, config.training.games);
    }

    #[test]
    fn repeated_runs_keep_every_dump() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Memory::default();
        let output = Output::new(dir.path());
        let mut config = Config::default();
        config.training.games = 1;
        config.training.size = 5;
        for _ in 0..3 {
            Trainer::run(&storage, &output, &config).unwrap();
        }
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 3);
    }

    #[test]
    fn failed_dump_saves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        std::fs::write(&blocker, "").unwrap();
        let storage = Memory::default();
        let output = Output::new(&blocker);
        let result = Trainer::run(&storage, &output, &Config::default());
        assert!(matches!(result, Err(StorageError::Write { .. })));
        assert!(storage.names().is_empty());
    }

    struct Broken;
    impl Storage for Broken {
        fn load(&self, _: &str) -> Result<Option<Table>, StorageError> {
            Ok(None)
        }
        fn save(&self, name: &str, _: &Table) -> Result<(), StorageError> {
            Err(StorageError::Write {
                path: std::path::PathBuf::from(name),
                source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
            })
        }
    }

    #[test]
    fn save_failure_surfaces() {
        let dir = tempfile::tempdir().unwrap();
        let output = Output::new(dir.path());
        let result = Trainer::run(&Broken, &output, &Config::default());
        assert!(matches!(result, Err(StorageError::Write { .. })));
    }
}
