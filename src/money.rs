//! US dollar amounts for display.
//!
//! Charges are computed in cents. [`Usd`] converts them to a two-decimal
//! fixed-point value via `rust_decimal` and formats it the en-US way.

use rust_decimal::Decimal;
use std::fmt;

/// A dollar amount with exactly 2 decimal places.
///
/// # Examples
///
/// ```
/// use theater_billing::Usd;
///
/// assert_eq!(Usd::from_cents(123_456_789).to_string(), "$1,234,567.89");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Usd(Decimal);

impl Usd {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 2;

    /// Zero dollars.
    pub const ZERO: Self = Usd(Decimal::ZERO);

    /// Creates a dollar amount from a count of cents.
    pub fn from_cents(cents: u64) -> Self {
        Usd(Decimal::from_i128_with_scale(i128::from(cents), Self::SCALE))
    }

    /// The amount as a decimal number of dollars.
    pub fn dollars(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Usd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plain = format!("{:.2}", self.0);
        let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        write!(f, "${}.{}", grouped, fraction)
    }
}
