//! Per-row expand/collapse state

use std::collections::HashSet;

use purchases_core::OrderId;

/// Which order rows currently show their line items
///
/// Held by the list on behalf of its rows. Every row starts at the default
/// (collapsed unless `behavior.start_expanded` is set) and only rows the user
/// has flipped are remembered. Each row's flag is independent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    default_expanded: bool,
    /// Rows whose flag differs from the default
    toggled: HashSet<OrderId>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every row starts expanded when `expanded` is true
    pub fn with_default(expanded: bool) -> Self {
        Self {
            default_expanded: expanded,
            toggled: HashSet::new(),
        }
    }

    pub fn is_expanded(&self, id: OrderId) -> bool {
        self.default_expanded != self.toggled.contains(&id)
    }

    /// Flip one row. Returns the new expanded flag.
    pub fn toggle(&mut self, id: OrderId) -> bool {
        if !self.toggled.remove(&id) {
            self.toggled.insert(id);
        }
        self.is_expanded(id)
    }

    /// Forget rows that are no longer on screen
    ///
    /// A row that leaves the visible set and later comes back starts at the
    /// default again.
    pub fn retain_visible(&mut self, visible: &[OrderId]) {
        self.toggled.retain(|id| visible.contains(id));
    }
}
