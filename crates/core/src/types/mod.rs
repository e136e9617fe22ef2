//! Core types for customer accounts.
//!
//! This module provides type-safe wrappers for the customer domain.

pub mod account_number;
pub mod customer;
pub mod extension;

pub use account_number::{AccountNumber, AccountNumberError};
pub use customer::Customer;
pub use extension::GlobalSalesCustomerExtension;
