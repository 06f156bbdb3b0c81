//! Search and status filtering of the order list
//!
//! Filtering is a linear pass over the catalog, re-run on every change to
//! [`FilterState`]. The result keeps catalog order.

use serde::{Deserialize, Serialize};

use crate::types::{Order, StatusFilter};

/// Search text plus status-select value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text query. Never trimmed.
    pub search: String,
    pub status: StatusFilter,
}

impl FilterState {
    pub fn new(search: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }

    /// True when `order` passes both the search and the status filter
    pub fn matches(&self, order: &Order) -> bool {
        matches_search(order, &self.search) && matches_status(order, self.status)
    }

    /// True when no narrowing is in effect
    pub fn is_default(&self) -> bool {
        self.search.is_empty() && self.status == StatusFilter::All
    }
}

/// Case-insensitive substring match against the order number or any item name
///
/// An empty query matches every order.
pub fn matches_search(order: &Order, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    order.order_number.to_lowercase().contains(&needle)
        || order
            .items
            .iter()
            .any(|item| item.name.to_lowercase().contains(&needle))
}

pub fn matches_status(order: &Order, filter: StatusFilter) -> bool {
    match filter.status() {
        None => true,
        Some(status) => order.status == status,
    }
}

/// Orders passing `filter`, in their relative catalog order
pub fn filter_orders<'a>(orders: &'a [Order], filter: &FilterState) -> Vec<&'a Order> {
    orders.iter().filter(|order| filter.matches(order)).collect()
}
