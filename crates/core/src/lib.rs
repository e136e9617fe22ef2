//! Customer Account Core - Domain types for customer accounts.
//!
//! This crate provides the types that the rest of the workspace hands around:
//! - `client` - HTTP client for the remote customer-account service
//! - `cli` - Command-line tool for fetching a single account
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. The wire
//! representation of the remote service lives in the client crate and is
//! converted into these types there.
//!
//! # Modules
//!
//! - [`types`] - Account numbers, customers and their sales extension flags

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
