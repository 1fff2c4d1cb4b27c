use crate::domain::account::Account;
use crate::domain::payment::PaymentRequest;
use crate::error::{PaymentError, Result};
use serde::de::DeserializeOwned;
use std::io::Read;

/// Reads payment requests or account seeds from a CSV source.
///
/// This reader wraps `csv::Reader` and provides iterators over `Result<T>`.
/// It handles whitespace trimming and flexible record lengths automatically.
pub struct CsvReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CsvReader<R> {
    /// Creates a new `CsvReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily reads `debtor_account_number,amount,scheme` rows.
    ///
    /// An unknown scheme tag is not a read error; it is carried through to the
    /// authorizer, which rejects it.
    pub fn payment_requests(self) -> impl Iterator<Item = Result<PaymentRequest>> {
        self.records()
    }

    /// Lazily reads `account_number,balance,allowed_schemes,status` rows.
    pub fn accounts(self) -> impl Iterator<Item = Result<Account>> {
        self.records()
    }

    fn records<T: DeserializeOwned>(self) -> impl Iterator<Item = Result<T>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}
