//! Translation between external CSV files and the domain types.

pub mod csv;
