//! Startup configuration selecting which account store backs the authorizer.

use clap::ValueEnum;
use std::fmt;
use std::path::PathBuf;

/// Which of the two account stores a deployment reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DataStoreType {
    #[default]
    Primary,
    Backup,
}

impl fmt::Display for DataStoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary => f.write_str("primary"),
            Self::Backup => f.write_str("backup"),
        }
    }
}

/// Storage settings resolved once at startup.
///
/// A store without a path is kept in memory.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    pub data_store_type: DataStoreType,
    pub db_path: Option<PathBuf>,
    pub backup_db_path: Option<PathBuf>,
}

impl StoreConfig {
    /// The database path of the selected store, if it has one.
    pub fn selected_path(&self) -> Option<&PathBuf> {
        match self.data_store_type {
            DataStoreType::Primary => self.db_path.as_ref(),
            DataStoreType::Backup => self.backup_db_path.as_ref(),
        }
    }
}
