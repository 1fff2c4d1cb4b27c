use crate::domain::account::Account;
use crate::domain::ports::AccountRepository;
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing account states.
pub const CF_ACCOUNTS: &str = "accounts";

/// A persistent account repository backed by RocksDB.
///
/// Accounts are stored as JSON, keyed by the UTF-8 bytes of the account number.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDBAccountRepository {
    db: Arc<DB>,
}

impl RocksDBAccountRepository {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the "accounts" column family exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_accounts = ColumnFamilyDescriptor::new(CF_ACCOUNTS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_accounts])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn accounts_cf(&self) -> Result<&rocksdb::ColumnFamily> {
        self.db.cf_handle(CF_ACCOUNTS).ok_or_else(|| {
            PaymentError::InternalError(Box::new(std::io::Error::other(
                "Accounts column family not found",
            )))
        })
    }
}

fn decode(bytes: &[u8]) -> Result<Account> {
    serde_json::from_slice(bytes).map_err(|e| {
        PaymentError::InternalError(Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Deserialization error: {}", e),
        )))
    })
}

#[async_trait]
impl AccountRepository for RocksDBAccountRepository {
    async fn fetch(&self, account_number: &str) -> Result<Option<Account>> {
        let cf = self.accounts_cf()?;
        match self.db.get_pinned_cf(cf, account_number.as_bytes())? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn persist(&self, account: Account) -> Result<()> {
        let cf = self.accounts_cf()?;
        let value = serde_json::to_vec(&account).map_err(|e| {
            PaymentError::InternalError(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization error: {}", e),
            )))
        })?;

        self.db.put_cf(cf, account.number.as_bytes(), value)?;
        Ok(())
    }

    async fn accounts(&self) -> Result<Vec<Account>> {
        let cf = self.accounts_cf()?;

        let mut accounts = Vec::new();
        for item in self.db.iterator_cf(cf, rocksdb::IteratorMode::Start) {
            let (_key, value) = item?;
            accounts.push(decode(&value)?);
        }

        Ok(accounts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::{AccountStatus, Balance, PaymentScheme};
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_rocksdb_open_cf() {
        let dir = tempdir().unwrap();
        let repository = RocksDBAccountRepository::open(dir.path()).expect("Failed to open RocksDB");

        assert!(repository.db.cf_handle(CF_ACCOUNTS).is_some());
    }

    #[tokio::test]
    async fn test_rocksdb_account_repository() {
        let dir = tempdir().unwrap();
        let repository = RocksDBAccountRepository::open(dir.path()).unwrap();

        let mut account = Account::new("One");
        account.balance = Balance::new(dec!(99.99));
        account.allowed_schemes = [PaymentScheme::Bacs, PaymentScheme::Chaps].into();
        account.status = AccountStatus::Disabled;

        repository.persist(account.clone()).await.unwrap();

        let retrieved = repository.fetch("One").await.unwrap().unwrap();
        assert_eq!(retrieved, account);

        let all = repository.accounts().await.unwrap();
        assert_eq!(all, vec![account]);

        assert!(repository.fetch("Two").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rocksdb_survives_reopen() {
        let dir = tempdir().unwrap();
        {
            let repository = RocksDBAccountRepository::open(dir.path()).unwrap();
            let mut account = Account::new("One");
            account.balance = Balance::new(dec!(-24.12));
            repository.persist(account).await.unwrap();
        }

        let repository = RocksDBAccountRepository::open(dir.path()).unwrap();
        let retrieved = repository.fetch("One").await.unwrap().unwrap();
        assert_eq!(retrieved.balance, Balance::new(dec!(-24.12)));
    }
}
