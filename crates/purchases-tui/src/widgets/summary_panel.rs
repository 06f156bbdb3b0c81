//! Summary metric cards
//!
//! Two cards side by side: order count and total spent. Fed the full
//! catalog summary, never the filtered view.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use purchases_core::{DisplayFormat, OrderSummary};

use crate::theme::{icons::IconSet, styles};

pub struct SummaryPanel<'a> {
    summary: &'a OrderSummary,
    format: &'a DisplayFormat,
    icons: IconSet,
}

impl<'a> SummaryPanel<'a> {
    pub fn new(summary: &'a OrderSummary, format: &'a DisplayFormat, icons: IconSet) -> Self {
        Self {
            summary,
            format,
            icons,
        }
    }

    fn render_card(
        area: Rect,
        buf: &mut Buffer,
        icon: &str,
        title: &str,
        value: String,
        value_style: Style,
    ) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = vec![
            Line::from(vec![
                Span::styled(format!("{} ", icon), styles::accent()),
                Span::styled(title.to_string(), styles::text_secondary()),
            ]),
            Line::from(Span::styled(value, value_style)),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}

impl Widget for SummaryPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [count_area, spent_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);

        Self::render_card(
            count_area,
            buf,
            self.icons.receipt(),
            "Total Orders",
            self.summary.order_count.to_string(),
            styles::text_primary().add_modifier(Modifier::BOLD),
        );
        Self::render_card(
            spent_area,
            buf,
            self.icons.wallet(),
            "Total Spent",
            self.format.money(self.summary.total_spent),
            styles::amount(),
        );
    }
}
