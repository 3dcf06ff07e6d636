//! Invoices: fulfillment records with name and price snapshots.

use chrono::{DateTime, Utc};
use common::{ClientId, InvoiceId, Money, ProductId};
use serde::{Deserialize, Serialize};

/// One line of an invoice.
///
/// Product name and unit price are snapshotted at fulfillment time so
/// later catalog edits do not retroactively alter history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLine {
    /// Product the line was fulfilled from.
    pub product_id: ProductId,

    /// Product name at fulfillment time.
    pub product_name: String,

    /// Quantity shipped.
    pub quantity: u32,

    /// Unit price at fulfillment time.
    pub unit_price: Money,
}

impl InvoiceLine {
    /// Returns the line total (quantity × unit price).
    pub fn total(&self) -> Money {
        self.unit_price.scale(self.quantity)
    }
}

impl std::fmt::Display for InvoiceLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) x {} @ {} = {}",
            self.product_name,
            self.product_id,
            self.quantity,
            self.unit_price,
            self.total()
        )
    }
}

/// An invoice issued to a client.
///
/// Built line by line by the fulfillment engine, then attached to the
/// owning client. Never mutated after attachment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    id: InvoiceId,
    client_id: ClientId,
    created_at: DateTime<Utc>,
    lines: Vec<InvoiceLine>,
    total: Money,
}

impl Invoice {
    /// Creates an empty invoice bound to a client, timestamped now.
    pub(crate) fn new(client_id: ClientId) -> Self {
        Self {
            id: InvoiceId::new(),
            client_id,
            created_at: Utc::now(),
            lines: Vec::new(),
            total: Money::zero(),
        }
    }

    /// Appends a line, snapshotting the product name and unit price.
    pub(crate) fn add_line(
        &mut self,
        product_id: ProductId,
        product_name: impl Into<String>,
        quantity: u32,
        unit_price: Money,
    ) {
        let line = InvoiceLine {
            product_id,
            product_name: product_name.into(),
            quantity,
            unit_price,
        };
        self.total += line.total();
        self.lines.push(line);
    }

    /// Returns the invoice identifier.
    pub fn id(&self) -> InvoiceId {
        self.id
    }

    /// Returns the owning client's identifier.
    pub fn client_id(&self) -> ClientId {
        self.client_id
    }

    /// Returns the creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the lines in the order they were fulfilled.
    pub fn lines(&self) -> &[InvoiceLine] {
        &self.lines
    }

    /// Returns the invoice total (sum of line totals).
    pub fn total(&self) -> Money {
        self.total
    }

    /// Returns true if no line was ever added.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl std::fmt::Display for Invoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Invoice {} for {} @ {}",
            self.id, self.client_id, self.created_at
        )?;
        for line in &self.lines {
            writeln!(f, "  - {line}")?;
        }
        write!(f, "TOTAL: {}", self.total)
    }
}
