//! Application layer orchestrating payment authorization.
//!
//! This module defines the `PaymentAuthorizer`, the entry point that loads the
//! debtor account through the repository port, applies the scheme rules and
//! persists the debit when the request is eligible.

pub mod authorizer;
