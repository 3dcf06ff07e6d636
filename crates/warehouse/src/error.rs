//! Warehouse error types.

use common::{ClientId, Money, ProductId};
use thiserror::Error;

/// Errors that can occur during warehouse operations.
///
/// Every variant is recoverable: the caller reports it and retries the
/// interaction. The core never terminates the process.
#[derive(Debug, Error)]
pub enum WarehouseError {
    /// No client with the given identifier.
    #[error("client not found: {id}")]
    ClientNotFound { id: ClientId },

    /// No product with the given identifier.
    #[error("product not found: {id}")]
    ProductNotFound { id: ProductId },

    /// A quantity that must be positive was zero.
    #[error("invalid quantity: {quantity} (must be greater than 0)")]
    InvalidQuantity { quantity: u32 },

    /// A payment amount that must be positive was not.
    #[error("invalid payment amount: {amount} (must be greater than zero)")]
    InvalidAmount { amount: Money },
}
