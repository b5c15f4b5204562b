//! Money type for representing monetary values.
//!
//! Amounts are integer cents. Catalog prices arrive as decimal numbers and
//! must be whole cents; anything finer is rejected on the way in.

use serde::{Deserialize, Serialize};
use std::fmt;

const CENTS_PER_UNIT: i64 = 100;

/// Supported currencies. The catalog feed prices everything in US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// Returns `None` when the amount is not finite, carries a fraction of a
    /// cent, or does not fit in `i64` cents.
    ///
    /// ```
    /// use cartkit_commerce::money::{Money, Currency};
    /// let price = Money::from_decimal(49.99, Currency::USD).unwrap();
    /// assert_eq!(price.amount_cents, 4999);
    /// assert!(Money::from_decimal(0.125, Currency::USD).is_none());
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }

        let scaled = amount * CENTS_PER_UNIT as f64;
        let cents = scaled.round();
        // Tolerance absorbs binary representation error (0.1 * 100 etc).
        let tolerance = (cents.abs() * 4.0 * f64::EPSILON).max(1e-9);
        if (scaled - cents).abs() > tolerance {
            return None;
        }
        if cents < i64::MIN as f64 || cents >= i64::MAX as f64 {
            return None;
        }

        Some(Self::new(cents as i64, currency))
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / CENTS_PER_UNIT as f64
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let amount = self.display_amount();
        match amount.strip_prefix('-') {
            Some(abs) => format!("-{}{}", self.currency.symbol(), abs),
            None => format!("{}{}", self.currency.symbol(), amount),
        }
    }

    /// Format the amount with exactly two decimals and no symbol
    /// (e.g., "49.99").
    ///
    /// Uses integer arithmetic so large totals do not pick up float error.
    pub fn display_amount(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        let divisor = CENTS_PER_UNIT.unsigned_abs();
        format!("{sign}{}.{:02}", abs / divisor, abs % divisor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Serde adapter carrying a `Money` as a plain decimal number in USD.
///
/// Catalog records put prices on the wire as `"price": 3.5`. Prices with a
/// fraction of a cent fail to deserialize.
pub mod decimal {
    use super::{Currency, Money};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.to_decimal())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Money::from_decimal(amount, Currency::USD).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "price {amount} is not a whole number of cents"
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    struct Priced {
        #[serde(with = "decimal")]
        price: Money,
    }

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::USD).unwrap();
        assert_eq!(m.amount_cents, 4999);

        assert_eq!(Money::from_decimal(0.1, Currency::USD).unwrap().amount_cents, 10);
        assert_eq!(Money::from_decimal(-2.5, Currency::USD).unwrap().amount_cents, -250);
        assert_eq!(
            Money::from_decimal(1234567.89, Currency::USD).unwrap().amount_cents,
            123456789
        );
    }

    #[test]
    fn test_from_decimal_rejects_sub_cent() {
        assert_eq!(Money::from_decimal(0.125, Currency::USD), None);
        assert_eq!(Money::from_decimal(3.001, Currency::USD), None);
        assert_eq!(Money::from_decimal(f64::NAN, Currency::USD), None);
        assert_eq!(Money::from_decimal(f64::INFINITY, Currency::USD), None);
        assert_eq!(Money::from_decimal(1e30, Currency::USD), None);
    }

    #[test]
    fn test_display_amount_two_places() {
        assert_eq!(Money::new(600, Currency::USD).display_amount(), "6.00");
        assert_eq!(Money::new(5, Currency::USD).display_amount(), "0.05");
        assert_eq!(Money::new(0, Currency::USD).display_amount(), "0.00");
        assert_eq!(Money::new(-250, Currency::USD).display_amount(), "-2.50");
        assert_eq!(Money::new(-5, Currency::USD).display_amount(), "-0.05");
        assert_eq!(
            Money::new(i64::MIN, Currency::USD).display_amount(),
            "-92233720368547758.08"
        );
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::new(-4999, Currency::USD).display(), "-$49.99");
    }

    #[test]
    fn test_decimal_adapter() {
        let priced: Priced = serde_json::from_str(r#"{"price": 3.5}"#).unwrap();
        assert_eq!(priced.price, Money::new(350, Currency::USD));
        assert_eq!(serde_json::to_string(&priced).unwrap(), r#"{"price":3.5}"#);
    }

    #[test]
    fn test_decimal_adapter_rejects_fraction_of_cent() {
        let err = serde_json::from_str::<Priced>(r#"{"price": 0.125}"#).unwrap_err();
        assert!(err.to_string().contains("whole number of cents"));
    }
}
