//! Self-play training of two Q-learning agents.
pub mod outcome;
pub mod record;
pub mod report;
pub mod state;
pub mod trainer;

pub use outcome::*;
pub use record::*;
pub use report::*;
pub use state::*;
pub use trainer::*;
