use crate::domain::account::Account;
use crate::domain::ports::AccountRepository;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory account repository.
///
/// Uses `Arc<RwLock<HashMap<String, Account>>>` so clones share the same accounts.
/// Ideal for testing, or when no database path is configured.
#[derive(Default, Clone)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl InMemoryAccountRepository {
    /// Creates a new, empty in-memory account repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `accounts`.
    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Self {
        let accounts = accounts
            .into_iter()
            .map(|account| (account.number.clone(), account))
            .collect();
        Self {
            accounts: Arc::new(RwLock::new(accounts)),
        }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn fetch(&self, account_number: &str) -> Result<Option<Account>> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(account_number).cloned())
    }

    async fn persist(&self, account: Account) -> Result<()> {
        let mut accounts = self.accounts.write().await;
        accounts.insert(account.number.clone(), account);
        Ok(())
    }

    async fn accounts(&self) -> Result<Vec<Account>> {
        let accounts = self.accounts.read().await;
        let mut all: Vec<Account> = accounts.values().cloned().collect();
        all.sort_by(|a, b| a.number.cmp(&b.number));
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::Balance;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_in_memory_fetch_and_persist() {
        let repository = InMemoryAccountRepository::new();
        let mut account = Account::new("One");
        account.balance = Balance::new(dec!(100.0));

        repository.persist(account.clone()).await.unwrap();
        let retrieved = repository.fetch("One").await.unwrap().unwrap();
        assert_eq!(retrieved, account);

        assert!(repository.fetch("Two").await.unwrap().is_none());
        assert!(repository.fetch("").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_in_memory_persist_replaces() {
        let repository = InMemoryAccountRepository::with_accounts([Account::new("One")]);

        let mut updated = Account::new("One");
        updated.balance = Balance::new(dec!(-5.00));
        repository.persist(updated.clone()).await.unwrap();

        let all = repository.accounts().await.unwrap();
        assert_eq!(all, vec![updated]);
    }

    #[tokio::test]
    async fn test_in_memory_clones_share_state() {
        let repository = InMemoryAccountRepository::new();
        let clone = repository.clone();

        clone.persist(Account::new("One")).await.unwrap();
        assert!(repository.fetch("One").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_in_memory_accounts_sorted() {
        let repository = InMemoryAccountRepository::with_accounts([
            Account::new("b"),
            Account::new("a"),
            Account::new("c"),
        ]);

        let numbers: Vec<String> = repository
            .accounts()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.number)
            .collect();
        assert_eq!(numbers, vec!["a", "b", "c"]);
    }
}
