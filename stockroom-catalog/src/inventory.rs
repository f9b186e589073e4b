use chrono::{NaiveDate, NaiveDateTime};

use crate::product::ProductError;

/// Date layout used by inventory sheets and the product view
pub const DATE_FORMAT: &str = "%m/%d/%Y";

/// Parse a stock count; it must be a whole, non-negative number.
pub fn parse_quantity(input: &str) -> Result<u32, ProductError> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|_| ProductError::InvalidQuantity(input.to_string()))
}

/// Parse an inventory sheet date (`MM/DD/YYYY`) as midnight of that day.
pub fn parse_stock_date(input: &str) -> Result<NaiveDateTime, ProductError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| ProductError::InvalidDate(input.to_string()))
}
