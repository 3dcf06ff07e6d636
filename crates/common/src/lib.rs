//! Shared value objects for the warehouse system.
//!
//! This crate provides the identifier and money types used across the
//! domain and session crates:
//! - `ClientId` / `ProductId` — sequential, human-readable identifiers
//! - `InvoiceId` — random identifiers for invoices
//! - `Money` — signed cent amounts for prices, totals, and balances

pub mod types;

pub use types::{ClientId, InvoiceId, Money, ParseIdError, ProductId};
