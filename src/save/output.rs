use crate::board::Board;
use crate::board::Stone;
use crate::error::StorageError;
use std::io::Write;
use std::path::PathBuf;

/// Human-readable record of how a training run ended,
/// written once per run for later inspection.
#[derive(Debug, Clone)]
pub struct Output {
    dir: PathBuf,
}

impl Output {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `boardIteration_<games>_totalScore_<score>_time_<unix>.txt`
    pub fn path(&self, games: usize, score: i64, time: u64) -> PathBuf {
        self.dir.join(format!(
            "boardIteration_{}_totalScore_{}_time_{}.txt",
            games, score, time
        ))
    }

    /// ```text
    /// Winner: black
    /// Total Score: 1
    /// . . black white .
    /// ...
    /// ```
    pub fn render(board: &Board, winner: Option<Stone>, score: i64) -> String {
        let winner = winner
            .map(|s| s.to_string())
            .unwrap_or_else(|| "None".to_string());
        let grid = board
            .cells()
            .chunks(board.size().max(1))
            .map(|row| {
                row.iter()
                    .map(|c| c.map(|s| s.to_string()).unwrap_or_else(|| ".".to_string()))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .map(|line| line + "\n")
            .collect::<String>();
        format!("Winner: {}\nTotal Score: {}\n{}", winner, score, grid)
    }

    /// Writes the dump under a fresh name. A second run finishing in the
    /// same second gets a `.1`, `.2`, .. suffix instead of overwriting.
    pub fn write(
        &self,
        board: &Board,
        winner: Option<Stone>,
        games: usize,
        score: i64,
    ) -> Result<PathBuf, StorageError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| StorageError::Write {
            path: self.dir.clone(),
            source,
        })?;
        let base = self.path(games, score, crate::timestamp());
        let mut n = 0;
        let (path, mut file) = loop {
            let path = match n {
                0 => base.clone(),
                n => base.with_extension(format!("{}.txt", n)),
            };
            match std::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
            {
                Ok(file) => break (path, file),
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => n += 1,
                Err(source) => return Err(StorageError::Write { path, source }),
            }
        };
        file.write_all(Self::render(board, winner, score).as_bytes())
            .map_err(|source| StorageError::Write {
                path: path.clone(),
                source,
            })?;
        log::info!("game saved to {}", path.display());
        Ok(path)
    }
}
