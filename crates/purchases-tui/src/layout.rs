//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: top border + title/keybinding row + bottom border
pub const HEADER_HEIGHT: u16 = 3;
/// Summary cards: borders + title row + value row + breathing row
pub const SUMMARY_HEIGHT: u16 = 5;
/// Filter controls: borders + one input row
pub const FILTER_BAR_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and keybindings
    pub header: Rect,
    /// Summary metric cards (full catalog)
    pub summary: Rect,
    /// Search input + status select
    pub filters: Rect,
    /// Order rows or the empty state
    pub orders: Rect,
}

/// Split the screen top-down: header, summary, filters, orders
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(SUMMARY_HEIGHT),
        Constraint::Length(FILTER_BAR_HEIGHT),
        Constraint::Min(3),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        summary: chunks[1],
        filters: chunks[2],
        orders: chunks[3],
    }
}
