pub mod agent;
pub mod table;

pub use agent::*;
pub use table::*;
