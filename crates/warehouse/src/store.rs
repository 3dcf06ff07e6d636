//! Identifier-assigning, insertion-ordered record stores.

use common::{ClientId, Money, ProductId};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::product::Product;

/// Ordered collection of clients, identifier-indexed.
///
/// Assigns `C1`, `C2`, … monotonically. Identifiers are never reused;
/// removal is not exposed. Lookup is by canonical identifier only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientStore {
    next_seq: u32,
    clients: Vec<Client>,
}

impl ClientStore {
    /// Creates an empty store; the first client will be `C1`.
    pub fn new() -> Self {
        Self {
            next_seq: 1,
            clients: Vec::new(),
        }
    }

    /// Creates a client, assigns the next identifier, and stores it.
    pub fn add(&mut self, name: impl Into<String>, address: impl Into<String>) -> &Client {
        let client = Client::new(ClientId::new(self.next_seq), name, address);
        self.next_seq += 1;
        self.clients.push(client);
        // just pushed, so the last slot exists
        &self.clients[self.clients.len() - 1]
    }

    /// Looks a client up by identifier.
    pub fn get(&self, id: ClientId) -> Option<&Client> {
        self.clients.iter().find(|c| c.id() == id)
    }

    /// Looks a client up by identifier, for mutation.
    pub fn get_mut(&mut self, id: ClientId) -> Option<&mut Client> {
        self.clients.iter_mut().find(|c| c.id() == id)
    }

    /// Iterates clients in insertion order. Restartable: each call
    /// returns a fresh iterator over the full collection.
    pub fn iter(&self) -> impl Iterator<Item = &Client> {
        self.clients.iter()
    }

    /// Returns the number of clients.
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Returns true if no client is registered.
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

impl Default for ClientStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered collection of products, identifier-indexed.
///
/// Assigns `P1`, `P2`, … monotonically, same contract as
/// [`ClientStore`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductStore {
    next_seq: u32,
    products: Vec<Product>,
}

impl ProductStore {
    /// Creates an empty store; the first product will be `P1`.
    pub fn new() -> Self {
        Self {
            next_seq: 1,
            products: Vec::new(),
        }
    }

    /// Creates a product, assigns the next identifier, and stores it.
    pub fn add(&mut self, name: impl Into<String>, price: Money, stock: u32) -> &Product {
        let product = Product::new(ProductId::new(self.next_seq), name, price, stock);
        self.next_seq += 1;
        self.products.push(product);
        // just pushed, so the last slot exists
        &self.products[self.products.len() - 1]
    }

    /// Looks a product up by identifier.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Looks a product up by identifier, for mutation.
    pub fn get_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id() == id)
    }

    /// Iterates products in insertion order. Restartable.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Returns the number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true if no product is registered.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}
