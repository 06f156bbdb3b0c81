//! Currency and date display formatting

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Long form, e.g. "January 15, 2024"
pub const DEFAULT_DATE_FORMAT: &str = "%B %-d, %Y";

/// How money and dates are rendered
///
/// The date pattern is checked once on construction, so rendering never has
/// to deal with a malformed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFormat {
    currency_symbol: String,
    /// chrono strftime pattern, always valid
    date_format: String,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl DisplayFormat {
    /// Build a format, replacing an invalid date pattern with
    /// [`DEFAULT_DATE_FORMAT`]
    pub fn new(currency_symbol: impl Into<String>, date_format: impl Into<String>) -> Self {
        let mut date_format = date_format.into();
        if !is_valid_date_format(&date_format) {
            tracing::warn!(
                "Invalid date format {:?}, using {:?}",
                date_format,
                DEFAULT_DATE_FORMAT
            );
            date_format = DEFAULT_DATE_FORMAT.to_string();
        }
        Self {
            currency_symbol: currency_symbol.into(),
            date_format,
        }
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Currency prefix followed by exactly two decimals
    pub fn money(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{}{:.2}", self.currency_symbol, rounded)
    }

    /// Date rendered with the configured pattern
    pub fn date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }
}

/// True when every strftime item in `pattern` is recognised by chrono
fn is_valid_date_format(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}
