use super::account::{AccountStatus, Amount, Balance, PaymentScheme};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The scheme named by a payment request.
///
/// Requests come from outside the core, so the tag they carry is not guaranteed
/// to be one of the known rails. An unrecognized tag is kept verbatim and later
/// rejected by the eligibility rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequestedScheme {
    Known(PaymentScheme),
    Unrecognized(String),
}

impl From<PaymentScheme> for RequestedScheme {
    fn from(scheme: PaymentScheme) -> Self {
        Self::Known(scheme)
    }
}

impl From<String> for RequestedScheme {
    fn from(tag: String) -> Self {
        match tag.parse::<PaymentScheme>() {
            Ok(scheme) => Self::Known(scheme),
            Err(_) => Self::Unrecognized(tag),
        }
    }
}

impl From<RequestedScheme> for String {
    fn from(scheme: RequestedScheme) -> Self {
        scheme.to_string()
    }
}

impl fmt::Display for RequestedScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(scheme) => scheme.fmt(f),
            Self::Unrecognized(tag) => f.write_str(tag),
        }
    }
}

/// A request to move money out of the debtor account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// May be empty; an unknown or empty number simply finds no account.
    #[serde(default)]
    pub debtor_account_number: String,
    pub amount: Amount,
    pub scheme: RequestedScheme,
}

impl PaymentRequest {
    pub fn new(
        debtor_account_number: impl Into<String>,
        amount: Amount,
        scheme: impl Into<RequestedScheme>,
    ) -> Self {
        Self {
            debtor_account_number: debtor_account_number.into(),
            amount,
            scheme: scheme.into(),
        }
    }
}

/// What the caller gets back. Anything not explicitly authorized is a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PaymentResult {
    pub success: bool,
}

impl PaymentResult {
    pub fn succeeded() -> Self {
        Self { success: true }
    }

    pub fn failed() -> Self {
        Self::default()
    }
}

/// Why a payment was not authorized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("debtor account not found")]
    AccountNotFound,
    #[error("account does not permit {0} payments")]
    SchemeNotPermitted(PaymentScheme),
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Amount, available: Balance },
    #[error("account is {0}, not live")]
    AccountNotLive(AccountStatus),
    #[error("unrecognized payment scheme '{0}'")]
    UnrecognizedScheme(String),
    #[error("debit of {requested} would overflow balance {available}")]
    BalanceOverflow { requested: Amount, available: Balance },
}

/// The full result of evaluating a payment request.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthorizationOutcome {
    Authorized { new_balance: Balance },
    Rejected(Rejection),
}

impl AuthorizationOutcome {
    pub fn is_authorized(&self) -> bool {
        matches!(self, Self::Authorized { .. })
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected(reason) => Some(reason),
            Self::Authorized { .. } => None,
        }
    }
}

impl From<&AuthorizationOutcome> for PaymentResult {
    fn from(outcome: &AuthorizationOutcome) -> Self {
        if outcome.is_authorized() {
            Self::succeeded()
        } else {
            Self::failed()
        }
    }
}

impl From<AuthorizationOutcome> for PaymentResult {
    fn from(outcome: AuthorizationOutcome) -> Self {
        Self::from(&outcome)
    }
}
