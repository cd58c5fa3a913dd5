//! Error types for salary calculations and the surrounding report/config layers

use std::fmt;
use thiserror::Error;

/// Input field that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    EducationCost,
    LoanAmount,
    AnnualInterestRate,
    BreakEvenYears,
    MonthlyLivingExpenses,
    TaxRate,
}

impl InputField {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputField::EducationCost => "education_cost",
            InputField::LoanAmount => "loan_amount",
            InputField::AnnualInterestRate => "annual_interest_rate_percent",
            InputField::BreakEvenYears => "break_even_years",
            InputField::MonthlyLivingExpenses => "monthly_living_expenses",
            InputField::TaxRate => "tax_rate_percent",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which domain constraint a field violated
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Violation {
    /// Amount below zero
    Negative(f64),
    /// Horizon of zero or less
    NotPositive(f64),
    /// Tax rate at or above 100%
    TaxRateTooHigh(f64),
    /// NaN or infinite
    NotFinite,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Negative(v) => write!(f, "must not be negative (got {})", v),
            Violation::NotPositive(v) => write!(f, "must be positive (got {})", v),
            Violation::TaxRateTooHigh(v) => write!(f, "must be < 100 (got {})", v),
            Violation::NotFinite => f.write_str("must be a finite number"),
        }
    }
}

/// An input value outside its domain. The calculator rejects the whole
/// input set on the first violation it finds.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{field} {violation}")]
pub struct InvalidInputError {
    pub field: InputField,
    pub violation: Violation,
}

impl InvalidInputError {
    pub fn new(field: InputField, violation: Violation) -> Self {
        Self { field, violation }
    }

    pub fn negative(field: InputField, value: f64) -> Self {
        Self::new(field, Violation::Negative(value))
    }

    pub fn not_positive(field: InputField, value: f64) -> Self {
        Self::new(field, Violation::NotPositive(value))
    }

    pub fn tax_rate_too_high(value: f64) -> Self {
        Self::new(InputField::TaxRate, Violation::TaxRateTooHigh(value))
    }

    pub fn not_finite(field: InputField) -> Self {
        Self::new(field, Violation::NotFinite)
    }
}

/// Crate-wide error for everything outside the pure calculation
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    #[error("unknown {programme} course: {key}")]
    UnknownCourse { programme: &'static str, key: String },

    #[error("sweep from {from} to {to} by {step} exceeds {max} horizons")]
    SweepTooLarge { from: f64, to: f64, step: f64, max: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
