//! Product record and stock mutation primitives.

use common::{Money, ProductId};
use serde::{Deserialize, Serialize};

use crate::error::WarehouseError;

/// A product in the warehouse catalog.
///
/// Stock moves only through [`Product::fulfill`] and [`Product::receive`],
/// so the quantity can never go negative. Name and price are editable;
/// invoices snapshot both at fulfillment time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    stock: u32,
}

impl Product {
    /// Creates a product with the given identifier.
    ///
    /// Normally constructed through [`crate::ProductStore::add`], which
    /// assigns the identifier.
    pub fn new(id: ProductId, name: impl Into<String>, price: Money, stock: u32) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
        }
    }

    /// Returns the product identifier.
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Returns the product name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Returns the quantity currently in stock.
    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Renames the product. Existing invoice lines keep the old name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Reprices the product. Existing invoice lines keep the old price.
    pub fn set_price(&mut self, price: Money) {
        self.price = price;
    }

    /// Takes up to `requested` units out of stock.
    ///
    /// Returns the quantity actually fulfilled:
    /// `min(stock, requested)`. Stock is reduced by exactly that amount,
    /// so `fulfilled + shortfall == requested` always holds for the
    /// caller.
    pub fn fulfill(&mut self, requested: u32) -> u32 {
        let fulfilled = self.stock.min(requested);
        self.stock -= fulfilled;
        fulfilled
    }

    /// Adds a received shipment to stock.
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::InvalidQuantity`] if `quantity` is zero.
    pub fn receive(&mut self, quantity: u32) -> Result<(), WarehouseError> {
        if quantity == 0 {
            return Err(WarehouseError::InvalidQuantity { quantity });
        }
        self.stock += quantity;
        Ok(())
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} | {} | qty={}",
            self.id, self.name, self.price, self.stock
        )
    }
}
