//! Money representation and arithmetic helpers.
//!
//! Amounts are whole Syrian pounds held as `i64`; fractional units are
//! not tracked anywhere in the ledger.

use thiserror::Error;

/// A monetary amount in whole pounds.
pub type Amount = i64;

/// Error raised when user-supplied numeric input cannot become an [`Amount`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("`{0}` is not a valid amount")]
    Malformed(String),
    #[error("amount must not be negative, got {0}")]
    Negative(Amount),
}

/// Parses a user-supplied amount, rejecting malformed or negative input.
///
/// The reference system coerced bad input to zero; this implementation
/// rejects it instead so mistyped entries never silently become free
/// transactions.
pub fn parse_amount(input: &str) -> Result<Amount, AmountError> {
    let trimmed = input.trim();
    let value: Amount = trimmed
        .parse()
        .map_err(|_| AmountError::Malformed(trimmed.to_string()))?;
    if value < 0 {
        return Err(AmountError::Negative(value));
    }
    Ok(value)
}

/// Applies a percentage rate to an amount, rounding half away from zero.
pub fn share(amount: Amount, rate: f64) -> Amount {
    (amount as f64 * rate).round() as Amount
}
