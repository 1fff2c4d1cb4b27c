use crate::error::PaymentError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Represents a monetary value held by an account.
///
/// This is a wrapper around `rust_decimal::Decimal` so that currency arithmetic is
/// exact. A balance may be negative: a Bacs debit is never checked against funds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Balance(pub Decimal);

/// Represents a non-negative monetary amount requested for a debit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, PaymentError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(PaymentError::ValidationError(
                "Amount must not be negative".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = PaymentError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The balance after taking `amount`, or `None` if it would leave the
    /// representable `Decimal` range.
    pub fn checked_sub(self, amount: Amount) -> Option<Self> {
        self.0.checked_sub(amount.value()).map(Self)
    }

    /// Whether `amount` can be taken without the balance going below zero.
    pub fn covers(&self, amount: Amount) -> bool {
        amount.value() <= self.0
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Lifecycle state of an account.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    #[default]
    Live,
    Disabled,
    InboundPaymentsOnly,
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Live => "live",
            Self::Disabled => "disabled",
            Self::InboundPaymentsOnly => "inbound_payments_only",
        };
        f.write_str(tag)
    }
}

/// A payment rail an account may originate debits through.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PaymentScheme {
    Bacs,
    FasterPayments,
    Chaps,
}

impl PaymentScheme {
    pub const ALL: [PaymentScheme; 3] = [Self::Bacs, Self::FasterPayments, Self::Chaps];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bacs => "bacs",
            Self::FasterPayments => "faster_payments",
            Self::Chaps => "chaps",
        }
    }
}

impl fmt::Display for PaymentScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentScheme {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| PaymentError::ValidationError(format!("Unknown payment scheme: {tag}")))
    }
}

/// The set of schemes an account is permitted to originate debits through.
///
/// Serialized as `|`-separated scheme tags, e.g. `bacs|chaps`. The empty string
/// is the empty set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AllowedSchemes(BTreeSet<PaymentScheme>);

impl AllowedSchemes {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn contains(&self, scheme: PaymentScheme) -> bool {
        self.0.contains(&scheme)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<PaymentScheme> for AllowedSchemes {
    fn from_iter<I: IntoIterator<Item = PaymentScheme>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[PaymentScheme; N]> for AllowedSchemes {
    fn from(schemes: [PaymentScheme; N]) -> Self {
        schemes.into_iter().collect()
    }
}

impl fmt::Display for AllowedSchemes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags: Vec<&str> = self.0.iter().map(PaymentScheme::as_str).collect();
        f.write_str(&tags.join("|"))
    }
}

impl FromStr for AllowedSchemes {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split('|')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(PaymentScheme::from_str)
            .collect()
    }
}

impl TryFrom<String> for AllowedSchemes {
    type Error = PaymentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AllowedSchemes> for String {
    fn from(schemes: AllowedSchemes) -> Self {
        schemes.to_string()
    }
}

/// An account as loaded from, and written back to, an account repository.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Account {
    /// Opaque, unique account number.
    #[serde(rename = "account_number")]
    pub number: String,
    pub balance: Balance,
    pub allowed_schemes: AllowedSchemes,
    pub status: AccountStatus,
}

impl Account {
    /// A live account with a zero balance that permits no schemes.
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            balance: Balance::ZERO,
            allowed_schemes: AllowedSchemes::none(),
            status: AccountStatus::Live,
        }
    }

    /// Subtracts `amount` from the balance.
    ///
    /// Callers must have validated the debit first: no funds check happens here,
    /// and the balance is allowed to go negative. Fails, leaving the balance
    /// unchanged, only when the result does not fit in a `Decimal`.
    pub fn debit(&mut self, amount: Amount) -> Result<(), PaymentError> {
        match self.balance.checked_sub(amount) {
            Some(balance) => {
                self.balance = balance;
                Ok(())
            }
            None => Err(PaymentError::ValidationError(
                "Balance overflow".to_string(),
            )),
        }
    }
}
