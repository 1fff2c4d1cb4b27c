use crate::domain::account::{Account, Amount};
use crate::domain::payment::{PaymentRequest, PaymentResult, RequestedScheme};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// One output row: the request as received and whether it was authorized.
#[derive(Debug, Serialize)]
struct PaymentRecord<'a> {
    debtor_account_number: &'a str,
    amount: Amount,
    scheme: &'a RequestedScheme,
    success: bool,
}

/// Writes `debtor_account_number,amount,scheme,success` rows.
///
/// The header is emitted with the first row.
pub struct ResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResultWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_result(&mut self, request: &PaymentRequest, result: PaymentResult) -> Result<()> {
        self.writer.serialize(PaymentRecord {
            debtor_account_number: &request.debtor_account_number,
            amount: request.amount,
            scheme: &request.scheme,
            success: result.success,
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes account snapshots in the same format the account seed file uses.
pub struct AccountWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> AccountWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_accounts(&mut self, accounts: impl IntoIterator<Item = Account>) -> Result<()> {
        for account in accounts {
            self.writer.serialize(account)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
