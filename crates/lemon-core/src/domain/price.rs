//! Fixed-point menu prices: at most 6 digits, 2 of them after the decimal point.

use std::str::FromStr;

use lemon_shared::constants::{PRICE_DECIMAL_PLACES, PRICE_MAX_DIGITS};
use rust_decimal::Decimal;

use crate::error::DomainError;

/// Checks precision and returns the price at scale 2.
///
/// Trailing zeros do not count against the precision (`12.500` is accepted
/// as `12.50`). Anything that would need rounding is rejected.
pub fn normalize_price(price: Decimal) -> Result<Decimal, DomainError> {
    let mut trimmed = price.normalize();

    if trimmed.scale() > PRICE_DECIMAL_PLACES {
        return Err(DomainError::InvalidPrice(format!(
            "{price} has more than {PRICE_DECIMAL_PLACES} decimal places"
        )));
    }

    let whole_digits = PRICE_MAX_DIGITS - PRICE_DECIMAL_PLACES;
    if trimmed.abs() >= Decimal::from(10_i64.pow(whole_digits)) {
        return Err(DomainError::InvalidPrice(format!(
            "{price} has more than {whole_digits} digits before the decimal point"
        )));
    }

    trimmed.rescale(PRICE_DECIMAL_PLACES);
    Ok(trimmed)
}

pub fn parse_price(input: &str) -> Result<Decimal, DomainError> {
    let price = Decimal::from_str(input.trim())
        .map_err(|e| DomainError::InvalidPrice(format!("{input}: {e}")))?;
    normalize_price(price)
}

pub fn format_price(price: &Decimal) -> String {
    format!("{:.2}", price)
}
