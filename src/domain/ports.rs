use super::account::Account;
use super::payment::{PaymentRequest, PaymentResult};
use crate::error::Result;
use async_trait::async_trait;

/// Storage for accounts, keyed by account number.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Loads the account, or `None` when no account has that number.
    async fn fetch(&self, account_number: &str) -> Result<Option<Account>>;
    /// Inserts or replaces the account.
    async fn persist(&self, account: Account) -> Result<()>;
    async fn accounts(&self) -> Result<Vec<Account>>;
}

/// Decides, and applies, a single payment request.
#[async_trait]
pub trait Authorizer: Send + Sync {
    async fn authorize(&self, request: PaymentRequest) -> Result<PaymentResult>;
}

pub type AccountRepositoryBox = Box<dyn AccountRepository>;
pub type AccountRepositoryFactory = Box<dyn Fn() -> AccountRepositoryBox + Send + Sync>;
pub type AuthorizerBox = Box<dyn Authorizer>;
