//! Filter controls: search input and status select

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use purchases_core::{FilterState, StatusFilter};

use crate::theme::{icons::IconSet, styles};

const SEARCH_PLACEHOLDER: &str = "Search by order number or product";

/// Search box on the left, the four status options on the right
pub struct FilterBar<'a> {
    filter: &'a FilterState,
    /// Search box has keyboard focus
    editing: bool,
    icons: IconSet,
}

impl<'a> FilterBar<'a> {
    pub fn new(filter: &'a FilterState, editing: bool, icons: IconSet) -> Self {
        Self {
            filter,
            editing,
            icons,
        }
    }

    fn render_search(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.editing).title(" Search ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = vec![Span::styled(
            format!("{} ", self.icons.search()),
            styles::accent(),
        )];

        if self.filter.search.is_empty() && !self.editing {
            spans.push(Span::styled(SEARCH_PLACEHOLDER, styles::text_muted()));
        } else {
            spans.push(Span::styled(
                self.filter.search.as_str(),
                styles::text_primary(),
            ));
        }

        if self.editing {
            spans.push(Span::styled("_", styles::keybinding()));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(" Status ");
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = Vec::with_capacity(StatusFilter::OPTIONS.len() * 2);
        for (i, option) in StatusFilter::OPTIONS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if *option == self.filter.status {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!(" {} ", option.label()), style));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

impl Widget for FilterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [search_area, status_area] =
            Layout::horizontal([Constraint::Min(20), Constraint::Length(48)]).areas(area);

        self.render_search(search_area, buf);
        self.render_status(status_area, buf);
    }
}
