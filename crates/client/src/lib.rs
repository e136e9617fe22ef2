//! Customer Account Client.
//!
//! Fetches a customer account from the remote customer service
//! (`GET {base}/ds-rest/customerAccount/{account}?metadata=globalSalesCustomerExtension`)
//! and maps it into a [`Customer`](customer_account_core::Customer).
//!
//! # Architecture
//!
//! - [`config`] - Base URL and basic-auth credentials, usually from the environment
//! - [`client`] - The HTTP client, built once and reused for every call
//! - [`types`] - Wire representation of the service's JSON
//! - [`conversions`] - Pure mapping from wire types to domain types
//!
//! # Example
//!
//! ```rust,no_run
//! use customer_account_client::{CustomerServiceClient, CustomerServiceConfig};
//! use customer_account_core::AccountNumber;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CustomerServiceConfig::from_env()?;
//! let client = CustomerServiceClient::new(&config)?;
//!
//! let account = AccountNumber::parse("0001234567")?;
//! let customer = client.get_customer_account(&account, Some("1010")).await?;
//! # let _ = customer;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod client;
pub mod config;
pub mod conversions;
pub mod error;
pub mod types;

pub use client::CustomerServiceClient;
pub use config::{ConfigError, CustomerServiceConfig};
pub use conversions::{convert_customer_account, resolve_extension};
pub use error::CustomerServiceError;
pub use types::{
    ContactInfoReference, CustomerAccountReference, GlobalSalesCustomerExtensionReference,
    SalesOrgDivisionReference,
};
