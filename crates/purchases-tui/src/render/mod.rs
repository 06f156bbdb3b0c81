//! Main render/view function (View in TEA pattern)


use purchases_app::{AppState, UiMode};
use ratatui::Frame;

use crate::layout;
use crate::theme::icons::IconSet;
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`: the summary is always computed from the
/// full catalog and the list from the current filter.
pub fn view(frame: &mut Frame, state: &AppState) {
    let areas = layout::create(frame.area());
    let icons = IconSet::new(state.settings.ui.icons);

    frame.render_widget(widgets::MainHeader::new(state.ui_mode), areas.header);

    let summary = state.summary();
    frame.render_widget(
        widgets::SummaryPanel::new(&summary, &state.format, icons),
        areas.summary,
    );

    frame.render_widget(
        widgets::FilterBar::new(
            &state.filter,
            state.ui_mode == UiMode::SearchInput,
            icons,
        ),
        areas.filters,
    );

    frame.render_widget(widgets::OrderList::new(state, icons), areas.orders);
}
