//! Headless mode - JSON snapshot of the screen for scripting and tests
//!
//! Instead of drawing the TUI, prints one JSON document describing what the
//! screen would show for the seeded filter: the full-catalog summary, the
//! active filter, and the visible orders with their line items.
//!
//! ```json
//! {"summary":{"order_count":4,"total_spent":"$339.96"},
//!  "filter":{"search":"silla","status":"all"},
//!  "orders":[{"id":1,"order_number":"ORD-2024-001", ...}],
//!  "empty":false}
//! ```

use std::io::{self, Write};

use serde::Serialize;

use purchases_app::AppState;
use purchases_core::prelude::*;
use purchases_core::{LineItem, Order};

#[derive(Debug, Serialize)]
pub struct HeadlessReport {
    pub summary: SummaryReport,
    pub filter: FilterReport,
    pub orders: Vec<OrderReport>,
    /// True when the filter leaves no orders (the empty state)
    pub empty: bool,
}

#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub order_count: usize,
    pub total_spent: String,
}

#[derive(Debug, Serialize)]
pub struct FilterReport {
    pub search: String,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct OrderReport {
    pub id: u32,
    pub order_number: String,
    pub date: String,
    pub status: &'static str,
    pub total: String,
    pub items: Vec<ItemReport>,
}

#[derive(Debug, Serialize)]
pub struct ItemReport {
    pub id: u32,
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub image: String,
}

impl HeadlessReport {
    pub fn from_state(state: &AppState) -> Self {
        let summary = state.summary();
        let orders: Vec<OrderReport> = state
            .visible_orders()
            .into_iter()
            .map(|order| OrderReport::new(order, state))
            .collect();

        Self {
            summary: SummaryReport {
                order_count: summary.order_count,
                total_spent: state.format.money(summary.total_spent),
            },
            filter: FilterReport {
                search: state.filter.search.clone(),
                status: state.filter.status.key(),
            },
            empty: orders.is_empty(),
            orders,
        }
    }

    /// Write the report to stdout as pretty JSON
    pub fn emit(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to encode headless report")?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", json)?;
        stdout.flush()?;
        Ok(())
    }
}

impl OrderReport {
    fn new(order: &Order, state: &AppState) -> Self {
        Self {
            id: order.id.0,
            order_number: order.order_number.clone(),
            date: state.format.date(order.date),
            status: order.status.label(),
            total: state.format.money(order.total),
            items: order
                .items
                .iter()
                .map(|item| ItemReport::new(item, state))
                .collect(),
        }
    }
}

impl ItemReport {
    fn new(item: &LineItem, state: &AppState) -> Self {
        Self {
            id: item.id.0,
            name: item.name.clone(),
            quantity: item.quantity,
            unit_price: state.format.money(item.unit_price),
            image: item.image.clone(),
        }
    }
}

/// Print the snapshot for `state` and return
pub fn run(state: &AppState) -> Result<()> {
    let report = HeadlessReport::from_state(state);
    info!(
        "Headless report: {} of {} orders visible",
        report.orders.len(),
        report.summary.order_count
    );
    report.emit()
}
