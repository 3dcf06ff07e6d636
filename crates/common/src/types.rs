use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Error returned when an identifier cannot be parsed from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} identifier {input:?} (expected something like {example})")]
pub struct ParseIdError {
    kind: &'static str,
    example: &'static str,
    input: String,
}

fn parse_sequential(input: &str, prefix: char) -> Option<u32> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    let first = chars.next()?;
    if !first.eq_ignore_ascii_case(&prefix) {
        return None;
    }
    chars.as_str().parse().ok().filter(|n| *n >= 1)
}

/// Unique identifier for a client.
///
/// Assigned sequentially by the client store starting at 1 and rendered
/// as `C1`, `C2`, … Identifiers are stable and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(u32);

impl ClientId {
    /// Creates a client ID from its sequence number (1-based).
    pub const fn new(seq: u32) -> Self {
        Self(seq)
    }

    /// Returns the underlying sequence number.
    pub const fn seq(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "C{}", self.0)
    }
}

impl FromStr for ClientId {
    type Err = ParseIdError;

    /// Parses `C7` or `c7` into a client ID. The prefix match is
    /// case-insensitive; matching by name is left to the calling adapter.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sequential(s, 'C')
            .map(Self)
            .ok_or_else(|| ParseIdError {
                kind: "client",
                example: "C7",
                input: s.to_string(),
            })
    }
}

/// Unique identifier for a product.
///
/// Assigned sequentially by the product store starting at 1 and rendered
/// as `P1`, `P2`, …
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Creates a product ID from its sequence number (1-based).
    pub const fn new(seq: u32) -> Self {
        Self(seq)
    }

    /// Returns the underlying sequence number.
    pub const fn seq(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = ParseIdError;

    /// Parses `P3` or `p3` into a product ID.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sequential(s, 'P')
            .map(Self)
            .ok_or_else(|| ParseIdError {
                kind: "product",
                example: "P3",
                input: s.to_string(),
            })
    }
}

/// Unique identifier for an invoice.
///
/// Random rather than sequential: invoices are created both by order
/// placement and by waitlist draining, so there is no single counter to
/// take a sequence from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(Uuid);

impl InvoiceId {
    /// Creates a new random invoice ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an invoice ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for InvoiceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for InvoiceId {
    /// Renders as `I-` followed by the first eight hex digits.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hex = self.0.simple().to_string();
        write!(f, "I-{}", &hex[..8])
    }
}

impl From<Uuid> for InvoiceId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Money amount represented in cents to avoid floating point issues.
///
/// Signed: client balances use positive amounts for money owed and go
/// negative when a client overpays.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money {
    cents: i64,
}

impl Money {
    /// Creates a money amount from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Creates a money amount from whole dollars.
    pub fn from_dollars(dollars: i64) -> Self {
        Self {
            cents: dollars * 100,
        }
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns true if the amount is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }

    /// Multiplies a unit amount by a quantity.
    pub fn scale(&self, quantity: u32) -> Money {
        Money {
            cents: self.cents * i64::from(quantity),
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money {
            cents: self.cents + rhs.cents,
        }
    }
}

impl std::ops::Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Self) -> Self::Output {
        Money {
            cents: self.cents - rhs.cents,
        }
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.cents += rhs.cents;
    }
}

impl std::ops::SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.cents -= rhs.cents;
    }
}
