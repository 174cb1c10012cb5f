//! Storage adapters implementing [`StoragePort`](crate::infrastructure::ports::StoragePort).

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;
