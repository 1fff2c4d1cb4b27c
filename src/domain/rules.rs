//! Scheme eligibility rules.
//!
//! Evaluation is pure: it reads the account and the request and decides whether
//! the debit may go ahead. Nothing is mutated or persisted here.

use super::account::{Account, AccountStatus, PaymentScheme};
use super::payment::{PaymentRequest, Rejection, RequestedScheme};

/// Checks whether `account` may be debited as described by `request`.
///
/// | Scheme          | Condition                                         |
/// |-----------------|---------------------------------------------------|
/// | Bacs            | permitted (no funds check, balance may go negative) |
/// | FasterPayments  | permitted and `amount <= balance`                 |
/// | Chaps           | permitted and account is live                     |
///
/// Any scheme tag outside these three is rejected.
pub fn validate(account: &Account, request: &PaymentRequest) -> Result<(), Rejection> {
    let scheme = match &request.scheme {
        RequestedScheme::Known(scheme) => *scheme,
        RequestedScheme::Unrecognized(tag) => {
            return Err(Rejection::UnrecognizedScheme(tag.clone()));
        }
    };

    if !account.allowed_schemes.contains(scheme) {
        return Err(Rejection::SchemeNotPermitted(scheme));
    }

    match scheme {
        PaymentScheme::Bacs => Ok(()),
        PaymentScheme::FasterPayments => {
            if account.balance.covers(request.amount) {
                Ok(())
            } else {
                Err(Rejection::InsufficientFunds {
                    requested: request.amount,
                    available: account.balance,
                })
            }
        }
        PaymentScheme::Chaps => {
            if account.status == AccountStatus::Live {
                Ok(())
            } else {
                Err(Rejection::AccountNotLive(account.status))
            }
        }
    }
}
