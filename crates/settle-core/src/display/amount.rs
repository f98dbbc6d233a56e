//! Number formatting for amounts and ratios.

use std::fmt;

/// Currency amount shown with two decimals.
pub struct Amount(pub f64);

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Ratio shown as a percentage with one decimal.
pub struct Percent(pub f64);

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_and_percent() {
        assert_eq!(Amount(333.34).to_string(), "333.34");
        assert_eq!(Amount(500.0).to_string(), "500.00");
        assert_eq!(Percent(0.35).to_string(), "35.0%");
        assert_eq!(Percent(1.0).to_string(), "100.0%");
    }
}
