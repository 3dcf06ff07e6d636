//! Client record: balance ledger, wishlist, and invoice history.

use common::{ClientId, Money};
use serde::{Deserialize, Serialize};

use crate::error::WarehouseError;
use crate::invoice::Invoice;
use crate::wishlist::Wishlist;

/// A registered client.
///
/// Owns its wishlist and its invoice history. The balance (positive =
/// amount owed) moves only through [`Client::record_payment`] and invoice
/// attachment by the fulfillment engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    id: ClientId,
    name: String,
    address: String,
    balance: Money,
    wishlist: Wishlist,
    invoices: Vec<Invoice>,
}

impl Client {
    /// Creates a client with the given identifier.
    ///
    /// Normally constructed through [`crate::ClientStore::add`], which
    /// assigns the identifier.
    pub fn new(id: ClientId, name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            balance: Money::zero(),
            wishlist: Wishlist::new(),
            invoices: Vec::new(),
        }
    }

    /// Returns the client identifier.
    pub fn id(&self) -> ClientId {
        self.id
    }

    /// Returns the client's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the client's address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the current balance; positive means the client owes.
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Returns true if the client owes money.
    pub fn owes(&self) -> bool {
        self.balance.is_positive()
    }

    /// Returns the client's wishlist.
    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    /// Returns the client's wishlist for mutation.
    pub fn wishlist_mut(&mut self) -> &mut Wishlist {
        &mut self.wishlist
    }

    /// Returns the invoices in the order they were issued.
    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    /// Renames the client.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Changes the client's address.
    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    /// Attaches a finished invoice, raising the balance by its total.
    pub(crate) fn attach_invoice(&mut self, invoice: Invoice) {
        self.balance += invoice.total();
        self.invoices.push(invoice);
    }

    /// Records a payment, lowering the balance.
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::InvalidAmount`] unless `amount` is
    /// strictly positive.
    pub fn record_payment(&mut self, amount: Money) -> Result<(), WarehouseError> {
        if !amount.is_positive() {
            return Err(WarehouseError::InvalidAmount { amount });
        }
        self.balance -= amount;
        Ok(())
    }
}

impl std::fmt::Display for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Client {} | {} | {} | Balance: {}",
            self.id, self.name, self.address, self.balance
        )
    }
}
