//! Fresher Salary - minimum starting salary (CTC) calculator
//!
//! This library provides:
//! - Education loan amortization (EMI) and cost recovery over a break-even horizon
//! - Flat-rate tax gross-up from required net pay to gross CTC
//! - Form handling for comma-grouped amount text, currency display and reports
//! - Education course catalog with suggested break-even horizons
//! - Horizon sweeps for finding an affordable break-even target

pub mod calculator;
pub mod config;
pub mod education;
pub mod error;
pub mod presentation;
pub mod sweep;

// Re-export commonly used types
pub use calculator::{compute, InputSet, LoanTerms, ResultSet, SalaryCalculator};
pub use config::FormDefaults;
pub use error::{Error, InvalidInputError, Result};
pub use presentation::{Currency, FormInput, SalaryReport};
pub use sweep::HorizonSweep;
