//! The filtered order list
//!
//! Renders one [`OrderRow`] per visible order, or the [`EmptyState`] when the
//! filter leaves nothing. Scrolls so the selected row is always fully visible
//! when it fits.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use purchases_app::AppState;

use super::{EmptyState, OrderRow};
use crate::theme::{icons::IconSet, styles};

/// Blank rows between consecutive orders
const ROW_GAP: u16 = 1;

pub struct OrderList<'a> {
    state: &'a AppState,
    icons: IconSet,
}

impl<'a> OrderList<'a> {
    pub fn new(state: &'a AppState, icons: IconSet) -> Self {
        Self { state, icons }
    }
}

/// Index of the first row to draw so that `selected` ends inside `viewport`
fn scroll_offset(heights: &[u16], selected: usize, viewport: u16) -> usize {
    let Some(last) = heights.len().checked_sub(1) else {
        return 0;
    };
    let selected = selected.min(last);

    let viewport = u32::from(viewport);
    let mut first = selected;
    let mut used = u32::from(heights[selected]);
    while first > 0 {
        let above = u32::from(heights[first - 1]);
        if used + above > viewport {
            break;
        }
        used += above;
        first -= 1;
    }
    first
}

impl Widget for OrderList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible = self.state.visible_orders();

        let block = styles::glass_block(false).title(format!(" Orders ({}) ", visible.len()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if visible.is_empty() {
            EmptyState::new(self.icons).render(inner, buf);
            return;
        }

        let show_images = self.state.settings.ui.show_item_images;
        let rows: Vec<OrderRow<'_>> = visible
            .iter()
            .enumerate()
            .map(|(i, order)| {
                OrderRow::new(order, &self.state.format, self.icons)
                    .expanded(self.state.is_expanded(order.id))
                    .selected(i == self.state.selected)
                    .show_images(show_images)
            })
            .collect();

        let heights: Vec<u16> = rows.iter().map(|row| row.height() + ROW_GAP).collect();
        let first = scroll_offset(&heights, self.state.selected, inner.height);

        let bottom = inner.y + inner.height;
        let mut y = inner.y;
        for (row, height) in rows.into_iter().zip(heights).skip(first) {
            if y >= bottom {
                break;
            }
            let row_area = Rect {
                x: inner.x,
                y,
                width: inner.width,
                height: (height - ROW_GAP).min(bottom - y),
            };
            row.render(row_area, buf);
            y = y.saturating_add(height);
        }
    }
}
