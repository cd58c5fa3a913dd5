//! Display currencies. Selecting one only changes the symbol shown next to
//! amounts; no conversion takes place.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
    CAD,
}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::INR,
        Currency::USD,
        Currency::EUR,
        Currency::GBP,
        Currency::CAD,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::CAD => "CAD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "₹",
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::CAD => "C$",
        }
    }

    /// Pre-filled total education cost
    pub fn default_education_cost(&self) -> f64 {
        match self {
            Currency::INR => 1_000_000.0,
            _ => 50_000.0,
        }
    }

    /// Pre-filled monthly living expenses
    pub fn default_monthly_expenses(&self) -> f64 {
        match self {
            Currency::INR => 30_000.0,
            _ => 2_000.0,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| Error::UnknownCurrency(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::USD);
        assert_eq!(" CAD ".parse::<Currency>().unwrap(), Currency::CAD);
        assert!("JPY".parse::<Currency>().is_err());
    }

    #[test]
    fn test_defaults_depend_on_currency() {
        assert_eq!(Currency::default(), Currency::INR);
        assert_eq!(Currency::INR.default_education_cost(), 1_000_000.0);
        assert_eq!(Currency::INR.default_monthly_expenses(), 30_000.0);
        assert_eq!(Currency::GBP.default_education_cost(), 50_000.0);
        assert_eq!(Currency::GBP.default_monthly_expenses(), 2_000.0);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Currency::CAD.symbol(), "C$");
        assert_eq!(Currency::INR.symbol(), "₹");
    }
}
