//! Order data model

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Unique identifier of an order within the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a line item. Only unique within its parent order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─────────────────────────────────────────────────────────────────
// Order Status
// ─────────────────────────────────────────────────────────────────

/// Lifecycle status of an order
///
/// Serialized as its key. Deserialization goes through [`FromStr`], so the
/// Spanish labels are accepted and anything else is [`Error::UnknownStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum OrderStatus {
    Settled,
    Pending,
    Cancelled,
}

impl OrderStatus {
    /// Every status, in select-control order
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Settled,
        OrderStatus::Pending,
        OrderStatus::Cancelled,
    ];

    /// User-facing label
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Settled => "Liquidado",
            OrderStatus::Pending => "Pendiente",
            OrderStatus::Cancelled => "Cancelado",
        }
    }

    /// Machine key used on the command line and in JSON output
    pub fn key(&self) -> &'static str {
        match self {
            OrderStatus::Settled => "settled",
            OrderStatus::Pending => "pending",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OrderStatus {
    type Err = Error;

    /// Accepts either the English key or the Spanish label, ignoring case
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        OrderStatus::ALL
            .into_iter()
            .find(|status| {
                status.key().eq_ignore_ascii_case(wanted)
                    || status.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| Error::unknown_status(s))
    }
}

impl TryFrom<String> for OrderStatus {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

// ─────────────────────────────────────────────────────────────────
// Status Filter
// ─────────────────────────────────────────────────────────────────

/// Options of the status select control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Settled,
    Pending,
    Cancelled,
}

impl StatusFilter {
    /// The four options, in display order
    pub const OPTIONS: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Settled,
        StatusFilter::Pending,
        StatusFilter::Cancelled,
    ];

    /// The status this option narrows to, `None` for All
    pub fn status(&self) -> Option<OrderStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Settled => Some(OrderStatus::Settled),
            StatusFilter::Pending => Some(OrderStatus::Pending),
            StatusFilter::Cancelled => Some(OrderStatus::Cancelled),
        }
    }

    pub fn label(&self) -> &'static str {
        match self.status() {
            Some(status) => status.label(),
            None => "All",
        }
    }

    pub fn key(&self) -> &'static str {
        match self.status() {
            Some(status) => status.key(),
            None => "all",
        }
    }

    /// Position inside [`StatusFilter::OPTIONS`]
    pub fn index(&self) -> usize {
        match self {
            StatusFilter::All => 0,
            StatusFilter::Settled => 1,
            StatusFilter::Pending => 2,
            StatusFilter::Cancelled => 3,
        }
    }

    /// Option at `index`, if in range
    pub fn from_index(index: usize) -> Option<Self> {
        Self::OPTIONS.get(index).copied()
    }

    /// Next option, wrapping around
    pub fn next(&self) -> Self {
        Self::OPTIONS[(self.index() + 1) % Self::OPTIONS.len()]
    }

    /// Previous option, wrapping around
    pub fn prev(&self) -> Self {
        let len = Self::OPTIONS.len();
        Self::OPTIONS[(self.index() + len - 1) % len]
    }
}

impl From<OrderStatus> for StatusFilter {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Settled => StatusFilter::Settled,
            OrderStatus::Pending => StatusFilter::Pending,
            OrderStatus::Cancelled => StatusFilter::Cancelled,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("all") || wanted.eq_ignore_ascii_case("todos") {
            return Ok(StatusFilter::All);
        }
        wanted.parse::<OrderStatus>().map(StatusFilter::from)
    }
}

// ─────────────────────────────────────────────────────────────────
// Line Items and Orders
// ─────────────────────────────────────────────────────────────────

/// A single product line inside an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ItemId,
    pub name: String,
    /// Always at least 1
    pub quantity: u32,
    /// Never negative
    pub unit_price: Decimal,
    /// URI of the product image
    pub image: String,
}

impl LineItem {
    /// Build a line item, rejecting a zero quantity or a negative price
    pub fn new(
        id: u32,
        name: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
        image: impl Into<String>,
    ) -> Result<Self> {
        let item = Self {
            id: ItemId(id),
            name: name.into(),
            quantity,
            unit_price,
            image: image.into(),
        };
        item.validate()?;
        Ok(item)
    }

    fn validate(&self) -> Result<()> {
        if self.quantity == 0 {
            return Err(Error::invalid_line_item(
                &self.name,
                "quantity must be at least 1",
            ));
        }
        if self.unit_price.is_sign_negative() && !self.unit_price.is_zero() {
            return Err(Error::invalid_line_item(
                &self.name,
                "unit price cannot be negative",
            ));
        }
        Ok(())
    }
}

/// A past purchase
///
/// `total` is stored as charged and is not required to equal the sum of the
/// items' extended prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Display number, unique within the catalog (e.g. `ORD-2024-001`)
    pub order_number: String,
    pub date: NaiveDate,
    pub total: Decimal,
    pub status: OrderStatus,
    /// Display order is declaration order
    pub items: Vec<LineItem>,
}
