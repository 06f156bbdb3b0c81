//! Application state (Model in TEA pattern)

use purchases_core::prelude::*;
use purchases_core::{
    filter_orders, DisplayFormat, FilterState, Order, OrderCatalog, OrderId, OrderSource,
    OrderSummary, StatusFilter,
};

use crate::config::Settings;
use crate::expansion::ExpansionState;

/// Current UI focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Row navigation and filter shortcuts
    #[default]
    Normal,
    /// Keystrokes edit the search text
    SearchInput,
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Full, unfiltered order data. Never mutated.
    pub catalog: OrderCatalog,

    /// Search text and status select
    pub filter: FilterState,

    /// Which rows show their line items
    pub expansion: ExpansionState,

    /// Row cursor, an index into the visible orders
    pub selected: usize,

    pub ui_mode: UiMode,
    pub phase: AppPhase,

    pub settings: Settings,

    /// Money/date rendering derived from settings
    pub format: DisplayFormat,
}

impl AppState {
    /// Sample catalog with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(Settings::default())
    }

    /// Sample catalog with the given settings
    pub fn with_settings(settings: Settings) -> Result<Self> {
        Ok(Self::with_catalog(OrderCatalog::sample()?, settings))
    }

    pub fn with_catalog(catalog: OrderCatalog, settings: Settings) -> Self {
        Self {
            catalog,
            filter: FilterState::default(),
            expansion: ExpansionState::with_default(settings.behavior.start_expanded),
            selected: 0,
            ui_mode: UiMode::Normal,
            phase: AppPhase::Running,
            format: settings.display_format(),
            settings,
        }
    }

    /// Seed the filter, e.g. from command-line flags
    pub fn with_filter(mut self, filter: FilterState) -> Self {
        self.filter = filter;
        self.reconcile_with_filter(None);
        self
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    // ─────────────────────────────────────────────────────────
    // Derived views
    // ─────────────────────────────────────────────────────────

    /// Orders passing the current filter, in catalog order
    pub fn visible_orders(&self) -> Vec<&Order> {
        filter_orders(self.catalog.orders(), &self.filter)
    }

    pub fn visible_ids(&self) -> Vec<OrderId> {
        self.visible_orders().iter().map(|order| order.id).collect()
    }

    /// Aggregates over the full catalog, regardless of the filter
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::from_orders(self.catalog.orders())
    }

    /// The order under the row cursor, if any row is visible
    pub fn selected_order(&self) -> Option<&Order> {
        self.visible_orders().get(self.selected).copied()
    }

    pub fn is_expanded(&self, id: OrderId) -> bool {
        self.expansion.is_expanded(id)
    }

    // ─────────────────────────────────────────────────────────
    // Filter mutations
    // ─────────────────────────────────────────────────────────

    pub fn set_search(&mut self, text: String) {
        if self.filter.search == text {
            return;
        }
        let anchor = self.selected_order().map(|order| order.id);
        self.filter.search = text;
        debug!("Search text set to {:?}", self.filter.search);
        self.reconcile_with_filter(anchor);
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        if self.filter.status == status {
            return;
        }
        let anchor = self.selected_order().map(|order| order.id);
        self.filter.status = status;
        debug!("Status filter set to {}", status.key());
        self.reconcile_with_filter(anchor);
    }

    /// Re-derive dependent state after the filter changed
    ///
    /// Rows that dropped out of view lose their expansion. The cursor stays on
    /// `anchor` if it is still visible, otherwise it is clamped.
    fn reconcile_with_filter(&mut self, anchor: Option<OrderId>) {
        let visible = self.visible_ids();
        self.expansion.retain_visible(&visible);

        self.selected = anchor
            .and_then(|id| visible.iter().position(|v| *v == id))
            .unwrap_or_else(|| self.selected.min(visible.len().saturating_sub(1)));
    }

    // ─────────────────────────────────────────────────────────
    // Row cursor and expansion
    // ─────────────────────────────────────────────────────────

    pub fn select_next(&mut self) {
        let count = self.visible_orders().len();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible_orders().len().saturating_sub(1);
    }

    /// Toggle one order's details. Hidden orders are ignored.
    pub fn toggle_order(&mut self, id: OrderId) -> Option<bool> {
        if !self.visible_ids().contains(&id) {
            debug!("Ignoring toggle for hidden order {}", id);
            return None;
        }
        let expanded = self.expansion.toggle(id);
        debug!(
            "Order {} {}",
            id,
            if expanded { "expanded" } else { "collapsed" }
        );
        Some(expanded)
    }

    pub fn toggle_selected(&mut self) -> Option<bool> {
        let id = self.selected_order()?.id;
        self.toggle_order(id)
    }
}
