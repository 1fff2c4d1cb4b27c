//! Account repository implementations and the startup selection between them.

pub mod factory;
pub mod in_memory;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
