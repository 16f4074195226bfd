pub mod axis;
pub mod board;
pub mod key;
pub mod moves;
pub mod stone;

pub use axis::*;
pub use board::*;
pub use key::*;
pub use moves::*;
pub use stone::*;
