//! Salary calculator: loan amortization, cost recovery and tax gross-up

pub mod amortization;
mod engine;
mod input;
mod result;

pub use engine::{compute, SalaryCalculator};
pub use input::{InputSet, LoanTerms};
pub use result::{BreakdownRow, Category, LoanRepayment, ResultSet};
