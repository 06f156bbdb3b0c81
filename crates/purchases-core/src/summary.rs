//! Aggregate spending metrics

use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::Order;

/// Order count and total spent over a set of orders
///
/// Fed the full catalog, never the filtered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OrderSummary {
    pub order_count: usize,
    /// Sum of the orders' stored totals
    pub total_spent: Decimal,
}

impl OrderSummary {
    pub fn from_orders(orders: &[Order]) -> Self {
        Self {
            order_count: orders.len(),
            total_spent: orders.iter().map(|order| order.total).sum(),
        }
    }
}
