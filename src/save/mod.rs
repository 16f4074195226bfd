pub mod disk;
pub mod memory;
pub mod output;
pub mod storage;

pub use disk::Disk;
pub use memory::Memory;
pub use output::Output;
pub use storage::Storage;
