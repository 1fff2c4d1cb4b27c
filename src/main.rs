use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payment_authorizer::application::authorizer::PaymentAuthorizer;
use payment_authorizer::config::{DataStoreType, StoreConfig};
use payment_authorizer::infrastructure::factory::open_repository;
use payment_authorizer::interfaces::csv::batch::authorize_all;
use payment_authorizer::interfaces::csv::reader::CsvReader;
use payment_authorizer::interfaces::csv::writer::{AccountWriter, ResultWriter};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Authorizes each payment request in a CSV file and prints one
/// `debtor_account_number,amount,scheme,success` row per readable request.
///
/// Requests that hit a storage error are reported with `success = false`.
/// Rows that cannot be parsed are logged and skipped.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payment requests CSV file
    input: PathBuf,

    /// Accounts CSV file loaded into the selected store before processing
    #[arg(long)]
    accounts: Option<PathBuf>,

    /// Which account store backs the authorizer
    #[arg(long, env = "DATA_STORE_TYPE", value_enum, default_value_t = DataStoreType::Primary)]
    data_store_type: DataStoreType,

    /// Path to the primary database (optional). If provided, uses RocksDB.
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Path to the backup database (optional). If provided, uses RocksDB.
    #[arg(long)]
    backup_db_path: Option<PathBuf>,

    /// Write the final state of every account to this CSV file
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    let cli = Cli::parse();

    let config = StoreConfig {
        data_store_type: cli.data_store_type,
        db_path: cli.db_path,
        backup_db_path: cli.backup_db_path,
    };
    let repository = open_repository(&config).into_diagnostic()?;

    // Seed accounts
    if let Some(path) = cli.accounts {
        let file = File::open(path).into_diagnostic()?;
        for account in CsvReader::new(file).accounts() {
            match account {
                Ok(account) => repository.persist(account).await.into_diagnostic()?,
                Err(e) => tracing::error!("Error reading account: {}", e),
            }
        }
    }

    let authorizer = PaymentAuthorizer::new(repository);

    // Process payment requests
    let file = File::open(cli.input).into_diagnostic()?;
    let stdout = io::stdout();
    let mut results = ResultWriter::new(stdout.lock());
    authorize_all(&authorizer, CsvReader::new(file), &mut results)
        .await
        .into_diagnostic()?;

    if let Some(path) = cli.snapshot {
        let accounts = authorizer.into_accounts().await.into_diagnostic()?;
        let file = File::create(path).into_diagnostic()?;
        AccountWriter::new(file).write_accounts(accounts).into_diagnostic()?;
    }

    Ok(())
}
