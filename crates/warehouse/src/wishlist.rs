//! Per-client wishlist of desired purchases.

use common::ProductId;
use serde::{Deserialize, Serialize};

use crate::error::WarehouseError;

/// A desired product and quantity, pre-order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistEntry {
    /// The desired product.
    pub product_id: ProductId,

    /// Desired quantity, always positive.
    pub quantity: u32,
}

/// Desired-but-not-yet-ordered quantities for one client.
///
/// Insertion order is preserved so order placement processes lines
/// deterministically; adding to an existing entry merges quantities
/// without reordering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wishlist {
    entries: Vec<WishlistEntry>,
}

impl Wishlist {
    /// Creates an empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds quantity for a product, merging into an existing entry.
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::InvalidQuantity`] if `quantity` is zero.
    pub fn add(&mut self, product_id: ProductId, quantity: u32) -> Result<(), WarehouseError> {
        if quantity == 0 {
            return Err(WarehouseError::InvalidQuantity { quantity });
        }
        match self
            .entries
            .iter_mut()
            .find(|e| e.product_id == product_id)
        {
            Some(entry) => entry.quantity += quantity,
            None => self.entries.push(WishlistEntry {
                product_id,
                quantity,
            }),
        }
        Ok(())
    }

    /// Returns the entries in first-insertion order.
    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }

    /// Returns the desired quantity for a product, 0 if absent.
    pub fn quantity_for(&self, product_id: ProductId) -> u32 {
        self.entries
            .iter()
            .find(|e| e.product_id == product_id)
            .map_or(0, |e| e.quantity)
    }

    /// Drops the entry for a product, if present.
    pub fn remove(&mut self, product_id: ProductId) {
        self.entries.retain(|e| e.product_id != product_id);
    }

    /// Returns true if there is nothing on the list.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of distinct products on the list.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Empties the list in one step.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
