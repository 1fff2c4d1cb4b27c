use super::reader::CsvReader;
use super::writer::ResultWriter;
use crate::domain::payment::PaymentResult;
use crate::domain::ports::Authorizer;
use crate::error::Result;
use std::io::{Read, Write};
use tracing::error;

/// Authorizes every readable request and writes one result row for each.
///
/// A request whose authorization fails with a storage error still gets a row,
/// with `success = false`. Unparseable rows are logged and skipped.
pub async fn authorize_all<R: Read, W: Write>(
    authorizer: &dyn Authorizer,
    requests: CsvReader<R>,
    results: &mut ResultWriter<W>,
) -> Result<()> {
    for request in requests.payment_requests() {
        match request {
            Ok(request) => {
                let result = match authorizer.authorize(request.clone()).await {
                    Ok(result) => result,
                    Err(e) => {
                        error!("Error processing payment: {}", e);
                        PaymentResult::failed()
                    }
                };
                results.write_result(&request, result)?;
            }
            Err(e) => error!("Error reading payment request: {}", e),
        }
    }
    results.flush()
}
