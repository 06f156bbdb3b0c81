//! Placeholder shown when no order passes the filter

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, styles};

pub struct EmptyState {
    icons: IconSet,
}

impl EmptyState {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }
}

impl Widget for EmptyState {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let lines = vec![
            Line::from(Span::styled(self.icons.inbox(), styles::text_muted())),
            Line::from(""),
            Line::from(Span::styled(
                "No orders found",
                styles::text_primary().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Try a different search term or status filter",
                styles::text_muted(),
            )),
        ];

        // Vertically center the block of text
        let top = area.height.saturating_sub(lines.len() as u16) / 2;
        let centered = Rect {
            y: area.y + top,
            height: area.height - top,
            ..area
        };

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(centered, buf);
    }
}
