//! Custom widget components

mod empty_state;
mod filter_bar;
mod header;
mod order_list;
mod order_row;
mod summary_panel;

pub use empty_state::EmptyState;
pub use filter_bar::FilterBar;
pub use header::MainHeader;
pub use order_list::OrderList;
pub use order_row::OrderRow;
pub use summary_panel::SummaryPanel;
