//! # purchases-core - Core Domain Types
//!
//! Foundation crate for the purchase-history browser. Provides the order data
//! model, the built-in order catalog, filtering and aggregation over it,
//! display formatting, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, rust_decimal, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Order`] - A past purchase with its line items
//! - [`LineItem`] - A single product line inside an order
//! - [`OrderStatus`] - Settled / Pending / Cancelled
//! - [`StatusFilter`] - The four status-select options (All + each status)
//!
//! ### Catalog (`catalog`)
//! - [`OrderSource`] - Read interface returning the ordered orders
//! - [`OrderCatalog`] - Fixed in-memory catalog (sample data built in)
//!
//! ### Derivations
//! - [`FilterState`] and [`filter_orders()`] - search + status filtering
//! - [`OrderSummary`] - order count and total spent over the full catalog
//! - [`DisplayFormat`] - currency and date rendering
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with a `fatal` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use purchases_core::prelude::*;
//! ```

pub mod catalog;
pub mod error;
pub mod filter;
pub mod format;
pub mod logging;
pub mod prelude;
pub mod summary;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use catalog::{OrderCatalog, OrderSource};
pub use error::{Error, Result, ResultExt};
pub use filter::{filter_orders, matches_search, matches_status, FilterState};
pub use format::{DisplayFormat, DEFAULT_CURRENCY_SYMBOL, DEFAULT_DATE_FORMAT};
pub use summary::OrderSummary;
pub use types::{ItemId, LineItem, Order, OrderId, OrderStatus, StatusFilter};

pub use rust_decimal::Decimal;
