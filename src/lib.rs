//! Gomoku board evaluation and tabular Q-learning self-play.
//!
//! The crate is split the way the game is:
//! [`board`] holds the grid and its canonical encodings,
//! [`evaluator`] answers "did someone win" and "where should I play",
//! [`agent`] learns a value table from self-play,
//! [`training`] drives the self-play loop, and
//! [`save`] persists value tables between runs.
pub mod agent;
pub mod board;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod save;
pub mod training;

#[cfg(feature = "server")]
pub mod hosting;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Learned action values and the rewards that feed them.
pub type Value = f32;
/// Learning rate, discount, and exploration parameters.
pub type Probability = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// BOARD PARAMETERS
// ============================================================================
/// Side length of the default square board.
pub const SIZE: usize = 15;
/// Stones in an unbroken line needed to win.
pub const FIVE: usize = 5;
/// Steps scanned in each direction away from an origin cell.
pub const LOOKAHEAD: usize = 4;

// ============================================================================
// Q-LEARNING DEFAULTS
// new = old + α (r + γ max' − old)
// ============================================================================
/// Learning rate (α).
pub const LEARNING_RATE: Probability = 0.1;
/// Discount factor (γ) applied to the best value of the next state.
pub const DISCOUNT_FACTOR: Probability = 0.95;
/// Probability (ε) of playing a uniformly random move instead of the greedy one.
pub const EXPLORATION_RATE: Probability = 0.1;

// ============================================================================
// TRAINING INFRASTRUCTURE
// ============================================================================
/// Self-play games per training run. Small enough to answer an HTTP request.
pub const TRAINING_GAMES: usize = 2;
/// Model name under which the black agent's table is stored.
pub const BLACK_MODEL: &str = "black_ai_model";
/// Model name under which the white agent's table is stored.
pub const WHITE_MODEL: &str = "white_ai_model";
/// Directory holding persisted value tables.
pub const MODELS_DIR: &str = "models";
/// Directory receiving end-of-run board dumps.
pub const OUTPUT_DIR: &str = "training_output";
/// Default address for the training host.
pub const BIND_ADDR: &str = "127.0.0.1:5000";
/// Default path of the optional TOML configuration file.
pub const CONFIG_PATH: &str = "gomoku.toml";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Dual logging: INFO to the terminal, DEBUG to `logs/<unix>.log`.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", timestamp()))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
/// A training run cannot be cancelled, so this is the only way out of a long one.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("violent interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}

/// Seconds since the epoch, used to stamp output files.
pub fn timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
