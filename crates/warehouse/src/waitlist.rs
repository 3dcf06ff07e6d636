//! Global FIFO queues of unmet demand, keyed per product.

use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, Utc};
use common::{ClientId, ProductId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::WarehouseError;

/// Demand that could not be met when an order was placed.
///
/// Consumed only when a later restock fully satisfies it; an entry is
/// never split into partial fulfillments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    id: Uuid,
    product_id: ProductId,
    client_id: ClientId,
    quantity: u32,
    requested_at: DateTime<Utc>,
}

impl WaitlistEntry {
    fn new(product_id: ProductId, client_id: ClientId, quantity: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            client_id,
            quantity,
            requested_at: Utc::now(),
        }
    }

    /// Returns the entry identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the product the demand is waiting on.
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Returns the waiting client's identifier.
    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    /// Returns the unmet quantity, always positive.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns when the demand was queued.
    pub fn requested_at(&self) -> DateTime<Utc> {
        self.requested_at
    }
}

impl std::fmt::Display for WaitlistEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} waiting for {} x {} (since {})",
            self.client_id, self.quantity, self.product_id, self.requested_at
        )
    }
}

/// Per-product FIFO queues of waitlist entries.
///
/// Owned by the warehouse aggregate, independent of any single client or
/// product lifetime. Draining one product's queue never touches another's.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Waitlist {
    queues: HashMap<ProductId, VecDeque<WaitlistEntry>>,
}

impl Waitlist {
    /// Creates an empty waitlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends unmet demand to the tail of the product's queue, creating
    /// the queue lazily.
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::InvalidQuantity`] if `quantity` is zero.
    pub fn append(
        &mut self,
        product_id: ProductId,
        client_id: ClientId,
        quantity: u32,
    ) -> Result<(), WarehouseError> {
        if quantity == 0 {
            return Err(WarehouseError::InvalidQuantity { quantity });
        }
        self.queues
            .entry(product_id)
            .or_default()
            .push_back(WaitlistEntry::new(product_id, client_id, quantity));
        Ok(())
    }

    /// Returns the head entry of the product's queue without removing it.
    pub fn peek_head(&self, product_id: ProductId) -> Option<&WaitlistEntry> {
        self.queues.get(&product_id).and_then(VecDeque::front)
    }

    /// Removes and returns the head entry of the product's queue.
    pub fn pop_head(&mut self, product_id: ProductId) -> Option<WaitlistEntry> {
        self.queues.get_mut(&product_id).and_then(VecDeque::pop_front)
    }

    /// Returns the number of entries queued for a product.
    pub fn count_for(&self, product_id: ProductId) -> usize {
        self.queues.get(&product_id).map_or(0, VecDeque::len)
    }

    /// Returns the product's entries in FIFO order.
    pub fn for_product(&self, product_id: ProductId) -> impl Iterator<Item = &WaitlistEntry> {
        self.queues.get(&product_id).into_iter().flatten()
    }

    /// Returns a client's entries across all products.
    ///
    /// FIFO-consistent within each product's queue; ordering across
    /// products is unspecified.
    pub fn for_client(&self, client_id: ClientId) -> impl Iterator<Item = &WaitlistEntry> {
        self.queues
            .values()
            .flatten()
            .filter(move |entry| entry.client_id == client_id)
    }

    /// Returns true if no product has queued demand.
    pub fn is_empty(&self) -> bool {
        self.queues.values().all(VecDeque::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P1: ProductId = ProductId::new(1);
    const P2: ProductId = ProductId::new(2);
    const C1: ClientId = ClientId::new(1);
    const C2: ClientId = ClientId::new(2);

    #[test]
    fn append_zero_fails() {
        let mut wl = Waitlist::new();
        let result = wl.append(P1, C1, 0);
        assert!(matches!(
            result,
            Err(WarehouseError::InvalidQuantity { quantity: 0 })
        ));
        assert_eq!(wl.count_for(P1), 0);
    }

    #[test]
    fn fifo_within_a_product() {
        let mut wl = Waitlist::new();
        wl.append(P1, C1, 5).unwrap();
        wl.append(P1, C2, 3).unwrap();

        assert_eq!(wl.count_for(P1), 2);
        assert_eq!(wl.peek_head(P1).unwrap().client_id(), C1);

        let first = wl.pop_head(P1).unwrap();
        assert_eq!(first.client_id(), C1);
        assert_eq!(first.quantity(), 5);

        let second = wl.pop_head(P1).unwrap();
        assert_eq!(second.client_id(), C2);
        assert!(wl.pop_head(P1).is_none());
        assert!(wl.is_empty());
    }

    #[test]
    fn queues_are_isolated_per_product() {
        let mut wl = Waitlist::new();
        wl.append(P1, C1, 5).unwrap();
        wl.append(P2, C2, 1).unwrap();

        wl.pop_head(P1);
        assert_eq!(wl.count_for(P1), 0);
        assert_eq!(wl.count_for(P2), 1);
    }

    #[test]
    fn peek_on_unknown_product_is_none() {
        let wl = Waitlist::new();
        assert!(wl.peek_head(P1).is_none());
        assert_eq!(wl.count_for(P1), 0);
    }

    #[test]
    fn for_client_spans_products() {
        let mut wl = Waitlist::new();
        wl.append(P1, C1, 5).unwrap();
        wl.append(P1, C2, 3).unwrap();
        wl.append(P2, C1, 1).unwrap();

        let mine: Vec<_> = wl.for_client(C1).collect();
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|e| e.client_id() == C1));
    }

    #[test]
    fn for_product_is_fifo_ordered() {
        let mut wl = Waitlist::new();
        wl.append(P1, C1, 5).unwrap();
        wl.append(P1, C2, 3).unwrap();

        let quantities: Vec<_> = wl.for_product(P1).map(WaitlistEntry::quantity).collect();
        assert_eq!(quantities, vec![5, 3]);
    }
}
