use crate::config::StoreConfig;
use crate::domain::ports::AccountRepositoryBox;
use crate::error::Result;
use crate::infrastructure::in_memory::InMemoryAccountRepository;
use tracing::info;

/// Opens the account repository selected by `config`.
///
/// The selected store is RocksDB when it has a path and the `storage-rocksdb`
/// feature is enabled, and in-memory otherwise.
pub fn open_repository(config: &StoreConfig) -> Result<AccountRepositoryBox> {
    let store = config.data_store_type;
    match config.selected_path() {
        Some(path) => open_persistent(path, config),
        None => {
            info!(%store, "Using in-memory account store");
            Ok(Box::new(InMemoryAccountRepository::new()))
        }
    }
}

#[cfg(feature = "storage-rocksdb")]
fn open_persistent(path: &std::path::Path, config: &StoreConfig) -> Result<AccountRepositoryBox> {
    use crate::infrastructure::rocksdb::RocksDBAccountRepository;

    info!(store = %config.data_store_type, path = %path.display(), "Opening RocksDB account store");
    Ok(Box::new(RocksDBAccountRepository::open(path)?))
}

#[cfg(not(feature = "storage-rocksdb"))]
fn open_persistent(path: &std::path::Path, config: &StoreConfig) -> Result<AccountRepositoryBox> {
    tracing::warn!(
        store = %config.data_store_type,
        path = %path.display(),
        "Persistent storage requested, but 'storage-rocksdb' feature is not enabled. Falling back to in-memory storage."
    );
    Ok(Box::new(InMemoryAccountRepository::new()))
}
