//! Form defaults, loaded from an optional JSON file and overridden by
//! environment variables:
//!   SALARY_CURRENCY, SALARY_INTEREST_RATE, SALARY_TAX_RATE,
//!   SALARY_LOAN_FRACTION, SALARY_BREAK_EVEN_YEARS

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::presentation::Currency;

pub const DEFAULT_INTEREST_RATE_PERCENT: f64 = 9.5;
pub const DEFAULT_TAX_RATE_PERCENT: f64 = 15.0;
/// Share of the education cost pre-filled as the loan amount
pub const DEFAULT_LOAN_FRACTION: f64 = 0.8;
pub const DEFAULT_BREAK_EVEN_YEARS: f64 = 4.0;

fn default_interest_rate() -> f64 { DEFAULT_INTEREST_RATE_PERCENT }
fn default_tax_rate() -> f64 { DEFAULT_TAX_RATE_PERCENT }
fn default_loan_fraction() -> f64 { DEFAULT_LOAN_FRACTION }
fn default_break_even_years() -> f64 { DEFAULT_BREAK_EVEN_YEARS }

/// Values used for any form field the user leaves blank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDefaults {
    #[serde(default)]
    pub currency: Currency,

    /// Annual loan interest rate in percent
    #[serde(default = "default_interest_rate")]
    pub interest_rate_percent: f64,

    #[serde(default = "default_tax_rate")]
    pub tax_rate_percent: f64,

    /// Loan amount as a fraction of education cost (0-1)
    #[serde(default = "default_loan_fraction")]
    pub loan_fraction: f64,

    #[serde(default = "default_break_even_years")]
    pub break_even_years: f64,

    /// Overrides the currency's pre-filled education cost
    #[serde(default)]
    pub education_cost: Option<f64>,

    /// Overrides the currency's pre-filled monthly expenses
    #[serde(default)]
    pub monthly_living_expenses: Option<f64>,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            interest_rate_percent: DEFAULT_INTEREST_RATE_PERCENT,
            tax_rate_percent: DEFAULT_TAX_RATE_PERCENT,
            loan_fraction: DEFAULT_LOAN_FRACTION,
            break_even_years: DEFAULT_BREAK_EVEN_YEARS,
            education_cost: None,
            monthly_living_expenses: None,
        }
    }
}

impl FormDefaults {
    /// Load from a JSON file; missing keys keep their defaults
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Optional file, then environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let base = match path {
            Some(p) => {
                log::info!("Loading form defaults from {}", p.display());
                Self::from_json_path(p)?
            }
            None => Self::default(),
        };
        Ok(base.with_env_overrides(|key| env::var(key).ok()))
    }

    /// Apply overrides from a variable lookup; unparseable values are ignored
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(currency) = lookup("SALARY_CURRENCY").and_then(|s| s.parse().ok()) {
            self.currency = currency;
        }
        if let Some(rate) = lookup("SALARY_INTEREST_RATE").and_then(|s| s.parse().ok()) {
            self.interest_rate_percent = rate;
        }
        if let Some(rate) = lookup("SALARY_TAX_RATE").and_then(|s| s.parse().ok()) {
            self.tax_rate_percent = rate;
        }
        if let Some(fraction) = lookup("SALARY_LOAN_FRACTION").and_then(|s| s.parse().ok()) {
            self.loan_fraction = fraction;
        }
        if let Some(years) = lookup("SALARY_BREAK_EVEN_YEARS").and_then(|s| s.parse().ok()) {
            self.break_even_years = years;
        }
        self
    }

    pub fn education_cost(&self) -> f64 {
        self.education_cost
            .unwrap_or_else(|| self.currency.default_education_cost())
    }

    pub fn monthly_living_expenses(&self) -> f64 {
        self.monthly_living_expenses
            .unwrap_or_else(|| self.currency.default_monthly_expenses())
    }
}
