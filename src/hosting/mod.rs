pub mod dto;
pub mod host;
pub mod server;

pub use dto::*;
pub use host::*;
pub use server::*;
