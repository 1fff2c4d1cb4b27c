#![allow(dead_code)]

use async_trait::async_trait;
use payment_authorizer::domain::account::{Account, AccountStatus, AllowedSchemes, Balance};
use payment_authorizer::domain::ports::AccountRepository;
use payment_authorizer::error::Result;
use payment_authorizer::infrastructure::in_memory::InMemoryAccountRepository;
use rust_decimal::Decimal;
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::NamedTempFile;

/// An in-memory repository that counts calls, so tests can assert on persistence.
#[derive(Default, Clone)]
pub struct RecordingRepository {
    inner: InMemoryAccountRepository,
    fetches: Arc<AtomicUsize>,
    persists: Arc<AtomicUsize>,
}

impl RecordingRepository {
    pub fn with_account(account: Account) -> Self {
        Self {
            inner: InMemoryAccountRepository::with_accounts([account]),
            ..Self::default()
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn persists(&self) -> usize {
        self.persists.load(Ordering::SeqCst)
    }

    pub async fn stored(&self, account_number: &str) -> Option<Account> {
        self.inner.fetch(account_number).await.unwrap()
    }
}

#[async_trait]
impl AccountRepository for RecordingRepository {
    async fn fetch(&self, account_number: &str) -> Result<Option<Account>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch(account_number).await
    }

    async fn persist(&self, account: Account) -> Result<()> {
        self.persists.fetch_add(1, Ordering::SeqCst);
        self.inner.persist(account).await
    }

    async fn accounts(&self) -> Result<Vec<Account>> {
        self.inner.accounts().await
    }
}

pub fn account(
    number: &str,
    balance: Decimal,
    schemes: impl Into<AllowedSchemes>,
    status: AccountStatus,
) -> Account {
    Account {
        number: number.to_string(),
        balance: Balance::new(balance),
        allowed_schemes: schemes.into(),
        status,
    }
}

pub fn csv_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file
}
