//! Stateless judgements over a [`crate::board::Board`]:
//! terminal detection and one-ply move heuristics.
pub mod computer;
pub mod guard;
pub mod recommend;
pub mod run;
pub mod win;

pub use computer::*;
pub use guard::*;
pub use recommend::*;
pub use run::*;
pub use win::*;
