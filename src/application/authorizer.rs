use crate::domain::account::Account;
use crate::domain::payment::{AuthorizationOutcome, PaymentRequest, PaymentResult, Rejection};
use crate::domain::ports::{AccountRepositoryBox, Authorizer};
use crate::domain::rules;
use crate::error::Result;
use async_trait::async_trait;
use tracing::{debug, info};

/// Authorizes debits against accounts held in an [`AccountRepository`].
///
/// Each request is handled as fetch, validate and, only when eligible, debit and
/// persist. The fetch-modify-persist sequence is not guarded against concurrent
/// requests for the same account.
///
/// [`AccountRepository`]: crate::domain::ports::AccountRepository
pub struct PaymentAuthorizer {
    accounts: AccountRepositoryBox,
}

impl PaymentAuthorizer {
    /// Creates a new `PaymentAuthorizer` backed by `accounts`.
    pub fn new(accounts: AccountRepositoryBox) -> Self {
        Self { accounts }
    }

    /// Evaluates the request and applies the debit if it is eligible.
    ///
    /// Rejections are returned as [`AuthorizationOutcome::Rejected`]; `Err` is
    /// reserved for repository failures.
    pub async fn evaluate(&self, request: &PaymentRequest) -> Result<AuthorizationOutcome> {
        debug!(account = %request.debtor_account_number, "Fetching debtor account");
        let Some(account) = self.accounts.fetch(&request.debtor_account_number).await? else {
            return Ok(reject(request, Rejection::AccountNotFound));
        };

        if let Err(reason) = rules::validate(&account, request) {
            return Ok(reject(request, reason));
        }

        self.debit(request, account).await
    }

    async fn debit(&self, request: &PaymentRequest, mut account: Account) -> Result<AuthorizationOutcome> {
        let amount = request.amount;
        let available = account.balance;
        if account.debit(amount).is_err() {
            return Ok(reject(
                request,
                Rejection::BalanceOverflow {
                    requested: amount,
                    available,
                },
            ));
        }
        let new_balance = account.balance;
        let number = account.number.clone();
        self.accounts.persist(account).await?;

        info!(account = %number, %amount, %new_balance, "Payment authorized");
        Ok(AuthorizationOutcome::Authorized { new_balance })
    }

    /// Consumes the authorizer and returns the final state of all accounts.
    pub async fn into_accounts(self) -> Result<Vec<Account>> {
        self.accounts.accounts().await
    }
}

fn reject(request: &PaymentRequest, reason: Rejection) -> AuthorizationOutcome {
    info!(
        account = %request.debtor_account_number,
        scheme = %request.scheme,
        amount = %request.amount,
        %reason,
        "Payment rejected"
    );
    AuthorizationOutcome::Rejected(reason)
}

#[async_trait]
impl Authorizer for PaymentAuthorizer {
    async fn authorize(&self, request: PaymentRequest) -> Result<PaymentResult> {
        let outcome = self.evaluate(&request).await?;
        Ok(PaymentResult::from(&outcome))
    }
}
