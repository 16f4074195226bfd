use crate::agent::Agent;
use crate::board::Board;
use crate::board::Move;
use crate::board::Stone;
use crate::config::Config;
use crate::evaluator::Computer;
use crate::save::Disk;
use crate::save::Output;
use crate::save::Storage;
use crate::training::Report;
use crate::training::Trainer;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared state behind the HTTP routes.
///
/// At most one training run is in flight: the run holds the lock on the
/// trained agent for its whole duration, so a second request waits for the
/// first to finish and then trains on top of its saved tables.
pub struct Host {
    config: Config,
    storage: Arc<dyn Storage>,
    output: Output,
    trained: Mutex<Option<Agent>>,
}

impl From<Config> for Host {
    fn from(config: Config) -> Self {
        let storage = Arc::new(Disk::new(config.storage.models.clone()));
        Self::new(config, storage)
    }
}

impl Host {
    pub fn new(config: Config, storage: Arc<dyn Storage>) -> Self {
        Self {
            output: Output::new(config.storage.output.clone()),
            trained: Mutex::new(None),
            storage,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// One full training run on a blocking thread.
    pub async fn train(&self) -> anyhow::Result<Report> {
        let mut trained = self.trained.lock().await;
        let config = self.config.clone();
        let output = self.output.clone();
        let storage = self.storage.clone();
        let trainer = actix_web::web::block(move || Trainer::run(storage.as_ref(), &output, &config))
            .await
            .map_err(|e| anyhow::anyhow!("training thread failed: {}", e))??;
        let report = trainer.report();
        let (black, _) = trainer.into_agents();
        *trained = Some(black);
        Ok(report)
    }

    /// The trained black agent's opening on an empty board.
    /// None until a run has completed in this process.
    pub async fn opening(&self) -> Option<Option<Move>> {
        let mut trained = self.trained.lock().await;
        let size = self.config.training.size;
        trained.as_mut().map(|agent| agent.select(&Board::new(size)))
    }

    /// The computer opponent's reply for `stone`.
    pub fn recommend(&self, board: &Board, stone: Stone) -> Option<Move> {
        Computer::new(stone).reply(board)
    }
}
