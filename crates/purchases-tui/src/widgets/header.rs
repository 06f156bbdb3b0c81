//! Header bar widget
//!
//! Provides the main header with the screen title and keybindings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use purchases_app::UiMode;

use crate::theme::styles;

/// Main header showing the screen title and the keybindings for the current mode
pub struct MainHeader {
    mode: UiMode,
}

impl MainHeader {
    pub fn new(mode: UiMode) -> Self {
        Self { mode }
    }

    fn shortcuts(&self) -> &'static [(&'static str, &'static str)] {
        match self.mode {
            UiMode::Normal => &[
                ("/", "Search"),
                ("Tab", "Status"),
                ("Enter", "Details"),
                ("q", "Quit"),
            ],
            UiMode::SearchInput => &[("Enter", "Done"), ("Ctrl+U", "Clear"), ("Esc", "Done")],
        }
    }
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![
            Span::styled(" Purchase History", styles::accent_bold()),
            Span::raw("   "),
        ];

        for (i, (key, label)) in self.shortcuts().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", styles::text_muted()));
            }
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*label, styles::text_secondary()));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
