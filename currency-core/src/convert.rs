use std::fmt;
use thiserror::Error;

use crate::model::RateTable;

/// The selector only hands out codes taken from the table, so hitting this
/// means a caller bug; it is surfaced instead of substituting a default.
#[derive(Debug, Error, PartialEq)]
pub enum ConvertError {
    #[error("currency '{0}' is not present in the rate table")]
    UnknownCurrency(String),
}

/// Round to two decimal places, half away from zero on the cent-scaled value.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One completed conversion. `Display` renders the user-facing result line.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    /// The entered CAD amount, already rounded to cents.
    pub amount: f64,
    /// Target currency code, uppercased for display.
    pub code: String,
    /// Converted value, rounded to cents.
    pub value: f64,
}

/// Convert a CAD amount into the currency `code` using the table's rate.
/// Both the amount and the product are rounded to cents.
pub fn convert(amount: f64, code: &str, table: &RateTable) -> Result<Conversion, ConvertError> {
    let entry = table
        .get(code)
        .ok_or_else(|| ConvertError::UnknownCurrency(code.to_string()))?;

    let amount = round_to_cents(amount);
    let value = round_to_cents(amount * entry.rate);

    Ok(Conversion { amount, code: code.to_uppercase(), value })
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} CAD converts into {} {}.",
            format_amount(self.amount),
            format_amount(self.value),
            self.code
        )
    }
}

/// Whole values keep one decimal (`37.0`), fractional values print their
/// shortest representation (`37.07`).
fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
