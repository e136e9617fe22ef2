//! Customer account lookup command.
//!
//! # Usage
//!
//! ```bash
//! # Fetch an account, taking extension flags from any sales org
//! ca-cli account 0001234567
//!
//! # Fetch an account with the extension flags of sales org 1010
//! ca-cli account 0001234567 --sales-org 1010
//! ```
//!
//! # Environment Variables
//!
//! - `CUSTOMER_SERVICE_URL` - Base URL of the customer service
//! - `CUSTOMER_SERVICE_USER` - Basic-auth username
//! - `CUSTOMER_SERVICE_PASSWORD` - Basic-auth password

use std::io::Write;

use customer_account_client::{
    ConfigError, CustomerServiceClient, CustomerServiceConfig, CustomerServiceError,
};
use customer_account_core::{AccountNumber, AccountNumberError, Customer};
use thiserror::Error;

/// Errors that can occur while looking up an account.
#[derive(Debug, Error)]
pub enum AccountError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Account number argument is malformed.
    #[error("Invalid account number: {0}")]
    InvalidAccountNumber(#[from] AccountNumberError),

    /// Customer service call or mapping failed.
    #[error(transparent)]
    Service(#[from] CustomerServiceError),

    /// Writing the result failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// Serializing the result failed.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Fetch an account and print it as JSON on stdout.
///
/// # Errors
///
/// Returns error if configuration is missing, the account number is invalid,
/// or the lookup fails.
pub async fn show(account_number: &str, sales_org: Option<&str>) -> Result<(), AccountError> {
    let account_number = AccountNumber::parse(account_number)?;

    let config = CustomerServiceConfig::from_env()?;
    let client = CustomerServiceClient::new(&config)?;

    let customer = client.get_customer_account(&account_number, sales_org).await?;
    tracing::info!(
        customer_number = %customer.customer_number,
        "Fetched customer account"
    );

    let stdout = std::io::stdout();
    write_customer(&mut stdout.lock(), &customer)
}

/// Write a customer as pretty-printed JSON followed by a newline.
fn write_customer(out: &mut impl Write, customer: &Customer) -> Result<(), AccountError> {
    serde_json::to_writer_pretty(&mut *out, customer)?;
    writeln!(out)?;
    Ok(())
}
