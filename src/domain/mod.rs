//! Domain layer: accounts, payment requests and the scheme eligibility rules,
//! plus the ports the application layer depends on.

pub mod account;
pub mod payment;
pub mod ports;
pub mod rules;
