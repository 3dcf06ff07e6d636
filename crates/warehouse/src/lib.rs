//! Warehouse domain: clients, products, orders, and fulfillment.
//!
//! This crate provides the warehouse core:
//! - `Client` and `Product` records with ledger-style mutation primitives
//! - `Wishlist` (per client) and the global per-product FIFO `Waitlist`
//! - `ClientStore` / `ProductStore`, the identifier-assigning collections
//! - `Warehouse`, the aggregate that owns the stores and waitlist and
//!   carries the fulfillment engine (`place_order`, `receive_shipment`)
//!
//! The crate is fully synchronous: one logical actor drives it, and the
//! calling adapter is responsible for all I/O.

pub mod client;
pub mod error;
pub mod invoice;
pub mod product;
pub mod service;
pub mod store;
pub mod waitlist;
pub mod wishlist;

pub use client::Client;
pub use error::WarehouseError;
pub use invoice::{Invoice, InvoiceLine};
pub use product::Product;
pub use service::{OrderOutcome, Warehouse};
pub use store::{ClientStore, ProductStore};
pub use waitlist::{Waitlist, WaitlistEntry};
pub use wishlist::{Wishlist, WishlistEntry};
