//! The warehouse aggregate and the order-fulfillment engine.

use common::{ClientId, Money, ProductId};
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::error::WarehouseError;
use crate::invoice::Invoice;
use crate::product::Product;
use crate::store::{ClientStore, ProductStore};
use crate::waitlist::{Waitlist, WaitlistEntry};
use crate::wishlist::WishlistEntry;

/// Result of placing an order from a wishlist.
///
/// The two empty outcomes are normal results, not errors: the caller
/// distinguishes "there was nothing to order" from "everything is
/// backordered".
#[derive(Debug, Clone)]
pub enum OrderOutcome {
    /// At least one line shipped; the invoice was attached to the client
    /// and a copy is returned here.
    Invoiced(Invoice),

    /// The wishlist was empty; no state changed.
    EmptyWishlist,

    /// Nothing could be shipped; all demand moved to the waitlist.
    AllWaitlisted,
}

/// The warehouse aggregate: client and product stores plus the global
/// waitlist, with the fulfillment engine on top.
///
/// Constructed once at process start and passed by reference into the
/// calling adapter; there is no ambient global instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Warehouse {
    clients: ClientStore,
    products: ProductStore,
    waitlist: Waitlist,
}

impl Warehouse {
    /// Creates an empty warehouse.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a client and assigns the next `C<n>` identifier.
    #[tracing::instrument(skip(self))]
    pub fn add_client(&mut self, name: &str, address: &str) -> &Client {
        let client = self.clients.add(name, address);
        tracing::info!(id = %client.id(), "client added");
        client
    }

    /// Registers a product and assigns the next `P<n>` identifier.
    #[tracing::instrument(skip(self))]
    pub fn add_product(&mut self, name: &str, price: Money, stock: u32) -> &Product {
        let product = self.products.add(name, price, stock);
        tracing::info!(id = %product.id(), "product added");
        product
    }

    /// Looks a client up by identifier.
    pub fn find_client(&self, id: ClientId) -> Option<&Client> {
        self.clients.get(id)
    }

    /// Looks a product up by identifier.
    pub fn find_product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    /// Iterates all clients in insertion order.
    pub fn clients(&self) -> impl Iterator<Item = &Client> {
        self.clients.iter()
    }

    /// Iterates all products in insertion order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    /// Iterates the clients with an outstanding (positive) balance.
    pub fn clients_owing(&self) -> impl Iterator<Item = &Client> {
        self.clients.iter().filter(|c| c.owes())
    }

    /// Records a payment from a client, lowering their balance.
    ///
    /// # Errors
    ///
    /// [`WarehouseError::ClientNotFound`] for an unknown client,
    /// [`WarehouseError::InvalidAmount`] for a non-positive amount.
    #[tracing::instrument(skip(self))]
    pub fn record_payment(
        &mut self,
        client_id: ClientId,
        amount: Money,
    ) -> Result<(), WarehouseError> {
        let client = self
            .clients
            .get_mut(client_id)
            .ok_or(WarehouseError::ClientNotFound { id: client_id })?;
        client.record_payment(amount)?;
        tracing::info!(%client_id, %amount, balance = %client.balance(), "payment recorded");
        Ok(())
    }

    /// Adds desired quantity to a client's wishlist.
    ///
    /// # Errors
    ///
    /// [`WarehouseError::ClientNotFound`] / [`WarehouseError::ProductNotFound`]
    /// when either identifier is unknown,
    /// [`WarehouseError::InvalidQuantity`] when the quantity is zero.
    #[tracing::instrument(skip(self))]
    pub fn add_to_wishlist(
        &mut self,
        client_id: ClientId,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<(), WarehouseError> {
        if self.products.get(product_id).is_none() {
            return Err(WarehouseError::ProductNotFound { id: product_id });
        }
        let client = self
            .clients
            .get_mut(client_id)
            .ok_or(WarehouseError::ClientNotFound { id: client_id })?;
        client.wishlist_mut().add(product_id, quantity)
    }

    /// Returns a snapshot of a client's wishlist.
    pub fn wishlist(&self, client_id: ClientId) -> Result<Vec<WishlistEntry>, WarehouseError> {
        self.clients
            .get(client_id)
            .map(|c| c.wishlist().entries().to_vec())
            .ok_or(WarehouseError::ClientNotFound { id: client_id })
    }

    /// Returns a snapshot of a product's waitlist queue, FIFO order.
    pub fn product_waitlist(&self, product_id: ProductId) -> Vec<WaitlistEntry> {
        self.waitlist.for_product(product_id).cloned().collect()
    }

    /// Returns a snapshot of a client's waitlisted demand across all
    /// products.
    pub fn client_waitlist(&self, client_id: ClientId) -> Vec<WaitlistEntry> {
        self.waitlist.for_client(client_id).cloned().collect()
    }

    /// Turns the client's wishlist into an invoice plus residual waitlist
    /// entries: one atomic sweep over the list in insertion order.
    ///
    /// Each line splits independently into a shipped part (invoice line,
    /// stock reduced) and a shortfall part (waitlist entry);
    /// `fulfilled + shortfall == requested` exactly, so no quantity is
    /// ever double-counted. The wishlist is cleared unconditionally —
    /// the shortfall lives solely in the waitlist from here on.
    ///
    /// # Errors
    ///
    /// [`WarehouseError::ClientNotFound`] for an unknown client.
    #[tracing::instrument(skip(self))]
    pub fn place_order(&mut self, client_id: ClientId) -> Result<OrderOutcome, WarehouseError> {
        let client = self
            .clients
            .get(client_id)
            .ok_or(WarehouseError::ClientNotFound { id: client_id })?;
        if client.wishlist().is_empty() {
            return Ok(OrderOutcome::EmptyWishlist);
        }
        let requested: Vec<WishlistEntry> = client.wishlist().entries().to_vec();

        let mut invoice = Invoice::new(client_id);
        for entry in requested {
            let Some(product) = self.products.get_mut(entry.product_id) else {
                // deletion is not exposed, so a dangling reference is a bug
                debug_assert!(
                    false,
                    "wishlist references missing product {}",
                    entry.product_id
                );
                continue;
            };
            let fulfilled = product.fulfill(entry.quantity);
            if fulfilled > 0 {
                invoice.add_line(product.id(), product.name(), fulfilled, product.price());
            }
            let shortfall = entry.quantity - fulfilled;
            if shortfall > 0 {
                self.waitlist
                    .append(entry.product_id, client_id, shortfall)?;
                tracing::info!(product_id = %entry.product_id, shortfall, "demand waitlisted");
            }
        }

        let client = self
            .clients
            .get_mut(client_id)
            .ok_or(WarehouseError::ClientNotFound { id: client_id })?;
        client.wishlist_mut().clear();

        if invoice.is_empty() {
            tracing::info!(%client_id, "order placed, nothing in stock");
            return Ok(OrderOutcome::AllWaitlisted);
        }

        metrics::counter!("warehouse_orders_placed_total").increment(1);
        tracing::info!(
            %client_id,
            invoice_id = %invoice.id(),
            total = %invoice.total(),
            "order invoiced"
        );
        let issued = invoice.clone();
        client.attach_invoice(invoice);
        Ok(OrderOutcome::Invoiced(issued))
    }

    /// Adds received stock, then drains the product's waitlist strictly
    /// head-first.
    ///
    /// Each iteration inspects only the head entry: it is either fully
    /// satisfied (stock reduced, entry removed, a single-line invoice
    /// attached to its client) or the drain stops. An entry is never
    /// partially satisfied, and a later, smaller entry never jumps the
    /// queue — the first-waiting client cannot be starved.
    ///
    /// # Errors
    ///
    /// [`WarehouseError::ProductNotFound`] for an unknown product,
    /// [`WarehouseError::InvalidQuantity`] for a zero quantity.
    #[tracing::instrument(skip(self))]
    pub fn receive_shipment(
        &mut self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<(), WarehouseError> {
        let product = self
            .products
            .get_mut(product_id)
            .ok_or(WarehouseError::ProductNotFound { id: product_id })?;
        product.receive(quantity)?;
        metrics::counter!("warehouse_shipments_received_total").increment(1);
        tracing::info!(%product_id, quantity, stock = product.stock(), "shipment received");

        loop {
            let Some(head) = self.waitlist.peek_head(product_id) else {
                break;
            };
            let wanted = head.quantity();
            let waiting_client = head.client_id();

            let Some(product) = self.products.get_mut(product_id) else {
                break;
            };
            if product.stock() < wanted {
                tracing::info!(
                    %product_id,
                    stock = product.stock(),
                    head_wants = wanted,
                    "head of waitlist still short, drain stops"
                );
                break;
            }

            let taken = product.fulfill(wanted);
            debug_assert_eq!(taken, wanted);
            let name = product.name().to_owned();
            let price = product.price();

            let popped = self.waitlist.pop_head(product_id);
            debug_assert!(popped.is_some());

            match self.clients.get_mut(waiting_client) {
                Some(client) => {
                    let mut invoice = Invoice::new(waiting_client);
                    invoice.add_line(product_id, name, taken, price);
                    metrics::counter!("warehouse_waitlist_fulfilled_total").increment(1);
                    tracing::info!(
                        client_id = %waiting_client,
                        %product_id,
                        quantity = taken,
                        "waitlisted demand fulfilled"
                    );
                    client.attach_invoice(invoice);
                }
                None => {
                    // deletion is not exposed, so a dangling reference is a bug
                    debug_assert!(
                        false,
                        "waitlist entry references missing client {waiting_client}"
                    );
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stocked_warehouse() -> (Warehouse, ClientId, ProductId) {
        let mut wh = Warehouse::new();
        let client_id = wh.add_client("Alice", "12 Elm St").id();
        let product_id = wh.add_product("Widget", Money::from_cents(1000), 5).id();
        (wh, client_id, product_id)
    }

    #[test]
    fn identifiers_are_assigned_sequentially() {
        let mut wh = Warehouse::new();
        assert_eq!(wh.add_client("Alice", "a").id(), ClientId::new(1));
        assert_eq!(wh.add_client("Bob", "b").id(), ClientId::new(2));
        assert_eq!(
            wh.add_product("Widget", Money::from_cents(100), 0).id(),
            ProductId::new(1)
        );
    }

    #[test]
    fn record_payment_requires_known_client() {
        let mut wh = Warehouse::new();
        let result = wh.record_payment(ClientId::new(9), Money::from_cents(100));
        assert!(matches!(
            result,
            Err(WarehouseError::ClientNotFound { .. })
        ));
    }

    #[test]
    fn add_to_wishlist_validates_both_ids() {
        let (mut wh, client_id, product_id) = stocked_warehouse();

        assert!(matches!(
            wh.add_to_wishlist(ClientId::new(9), product_id, 1),
            Err(WarehouseError::ClientNotFound { .. })
        ));
        assert!(matches!(
            wh.add_to_wishlist(client_id, ProductId::new(9), 1),
            Err(WarehouseError::ProductNotFound { .. })
        ));
        assert!(matches!(
            wh.add_to_wishlist(client_id, product_id, 0),
            Err(WarehouseError::InvalidQuantity { .. })
        ));
        assert!(wh.wishlist(client_id).unwrap().is_empty());
    }

    #[test]
    fn place_order_requires_known_client() {
        let mut wh = Warehouse::new();
        assert!(matches!(
            wh.place_order(ClientId::new(1)),
            Err(WarehouseError::ClientNotFound { .. })
        ));
    }

    #[test]
    fn place_order_on_empty_wishlist_changes_nothing() {
        let (mut wh, client_id, product_id) = stocked_warehouse();

        let outcome = wh.place_order(client_id).unwrap();
        assert!(matches!(outcome, OrderOutcome::EmptyWishlist));
        assert_eq!(wh.find_product(product_id).unwrap().stock(), 5);
        assert!(wh.find_client(client_id).unwrap().balance().is_zero());
        assert!(wh.find_client(client_id).unwrap().invoices().is_empty());
    }

    #[test]
    fn place_order_fulfills_from_stock() {
        let (mut wh, client_id, product_id) = stocked_warehouse();
        wh.add_to_wishlist(client_id, product_id, 3).unwrap();

        let OrderOutcome::Invoiced(invoice) = wh.place_order(client_id).unwrap() else {
            panic!("expected an invoice");
        };

        assert_eq!(invoice.lines().len(), 1);
        assert_eq!(invoice.lines()[0].quantity, 3);
        assert_eq!(invoice.total().cents(), 3000);
        assert_eq!(wh.find_product(product_id).unwrap().stock(), 2);

        let client = wh.find_client(client_id).unwrap();
        assert!(client.wishlist().is_empty());
        assert_eq!(client.balance().cents(), 3000);
        assert_eq!(client.invoices().len(), 1);
        assert_eq!(wh.product_waitlist(product_id).len(), 0);
    }

    #[test]
    fn place_order_splits_shortfall_to_waitlist() {
        let (mut wh, client_id, product_id) = stocked_warehouse();
        wh.add_to_wishlist(client_id, product_id, 8).unwrap();

        let OrderOutcome::Invoiced(invoice) = wh.place_order(client_id).unwrap() else {
            panic!("expected an invoice");
        };

        // 5 shipped, 3 queued: fulfilled + shortfall == requested
        assert_eq!(invoice.lines()[0].quantity, 5);
        let queued = wh.product_waitlist(product_id);
        assert_eq!(queued.len(), 1);
        assert_eq!(queued[0].quantity(), 3);
        assert_eq!(queued[0].client_id(), client_id);
        assert_eq!(wh.find_product(product_id).unwrap().stock(), 0);
        assert!(wh.find_client(client_id).unwrap().wishlist().is_empty());
    }

    #[test]
    fn place_order_with_no_stock_waitlists_everything() {
        let mut wh = Warehouse::new();
        let client_id = wh.add_client("Alice", "12 Elm St").id();
        let product_id = wh.add_product("Widget", Money::from_cents(1000), 0).id();
        wh.add_to_wishlist(client_id, product_id, 4).unwrap();

        let outcome = wh.place_order(client_id).unwrap();
        assert!(matches!(outcome, OrderOutcome::AllWaitlisted));

        let client = wh.find_client(client_id).unwrap();
        assert!(client.invoices().is_empty());
        assert!(client.balance().is_zero());
        assert!(client.wishlist().is_empty());
        assert_eq!(wh.product_waitlist(product_id)[0].quantity(), 4);
    }

    #[test]
    fn place_order_keeps_wishlist_insertion_order() {
        let mut wh = Warehouse::new();
        let client_id = wh.add_client("Alice", "a").id();
        let gadget = wh.add_product("Gadget", Money::from_cents(250), 10).id();
        let widget = wh.add_product("Widget", Money::from_cents(1000), 10).id();
        wh.add_to_wishlist(client_id, widget, 1).unwrap();
        wh.add_to_wishlist(client_id, gadget, 2).unwrap();

        let OrderOutcome::Invoiced(invoice) = wh.place_order(client_id).unwrap() else {
            panic!("expected an invoice");
        };
        let line_products: Vec<_> = invoice.lines().iter().map(|l| l.product_id).collect();
        assert_eq!(line_products, vec![widget, gadget]);
    }

    #[test]
    fn invoice_snapshots_survive_product_edits() {
        let (mut wh, client_id, product_id) = stocked_warehouse();
        wh.add_to_wishlist(client_id, product_id, 2).unwrap();
        wh.place_order(client_id).unwrap();

        // reprice and rename after the sale
        let product = wh.products.get_mut(product_id).unwrap();
        product.set_price(Money::from_cents(9999));
        product.set_name("Widget Pro");

        let invoice = &wh.find_client(client_id).unwrap().invoices()[0];
        assert_eq!(invoice.lines()[0].product_name, "Widget");
        assert_eq!(invoice.lines()[0].unit_price.cents(), 1000);
        assert_eq!(invoice.total().cents(), 2000);
    }

    #[test]
    fn receive_shipment_validates_input() {
        let (mut wh, _, product_id) = stocked_warehouse();

        assert!(matches!(
            wh.receive_shipment(ProductId::new(9), 1),
            Err(WarehouseError::ProductNotFound { .. })
        ));
        assert!(matches!(
            wh.receive_shipment(product_id, 0),
            Err(WarehouseError::InvalidQuantity { .. })
        ));
        assert_eq!(wh.find_product(product_id).unwrap().stock(), 5);
    }

    #[test]
    fn receive_shipment_without_waitlist_just_restocks() {
        let (mut wh, _, product_id) = stocked_warehouse();
        wh.receive_shipment(product_id, 7).unwrap();
        assert_eq!(wh.find_product(product_id).unwrap().stock(), 12);
    }

    #[test]
    fn clients_owing_filters_by_balance() {
        let mut wh = Warehouse::new();
        let alice = wh.add_client("Alice", "a").id();
        let bob = wh.add_client("Bob", "b").id();
        let product_id = wh.add_product("Widget", Money::from_cents(1000), 10).id();

        wh.add_to_wishlist(alice, product_id, 2).unwrap();
        wh.place_order(alice).unwrap();

        let owing: Vec<_> = wh.clients_owing().map(Client::id).collect();
        assert_eq!(owing, vec![alice]);

        wh.record_payment(alice, Money::from_cents(2000)).unwrap();
        assert_eq!(wh.clients_owing().count(), 0);
        assert!(wh.find_client(bob).unwrap().balance().is_zero());
    }

    #[test]
    fn wishlist_snapshot_requires_known_client() {
        let wh = Warehouse::new();
        assert!(matches!(
            wh.wishlist(ClientId::new(1)),
            Err(WarehouseError::ClientNotFound { .. })
        ));
    }
}
