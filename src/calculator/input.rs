//! Calculator input record

use serde::{Deserialize, Serialize};

use crate::error::{InputField, InvalidInputError};

/// Education loan terms. Present only when a loan was taken.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed; expected to be at most the education cost
    pub amount: f64,

    /// Annual interest rate in percent (9.5 = 9.5%)
    pub annual_interest_rate_percent: f64,
}

/// One complete set of inputs for a salary calculation
///
/// Built fresh from the form values every time something changes and
/// passed by value into [`SalaryCalculator::compute`](super::SalaryCalculator::compute).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputSet {
    /// Total cost of education
    pub education_cost: f64,

    /// Loan terms, `None` when no loan was taken
    #[serde(default)]
    pub loan: Option<LoanTerms>,

    /// Years over which education costs are recovered
    pub break_even_years: f64,

    /// Recurring monthly living expenses
    pub monthly_living_expenses: f64,

    /// Flat income tax rate in percent, domain [0, 100)
    pub tax_rate_percent: f64,
}

impl InputSet {
    /// Create an input set without a loan
    pub fn new(
        education_cost: f64,
        break_even_years: f64,
        monthly_living_expenses: f64,
        tax_rate_percent: f64,
    ) -> Self {
        Self {
            education_cost,
            loan: None,
            break_even_years,
            monthly_living_expenses,
            tax_rate_percent,
        }
    }

    /// Attach loan terms
    pub fn with_loan(mut self, amount: f64, annual_interest_rate_percent: f64) -> Self {
        self.loan = Some(LoanTerms {
            amount,
            annual_interest_rate_percent,
        });
        self
    }

    /// Whether a loan was taken (regardless of its amount)
    pub fn loan_taken(&self) -> bool {
        self.loan.is_some()
    }

    /// Loan larger than the education cost. Accepted by the calculator but
    /// yields a negative self-funded share, which lowers the required salary.
    pub fn is_over_borrowed(&self) -> bool {
        self.loan
            .map(|loan| loan.amount > self.education_cost)
            .unwrap_or(false)
    }

    /// Check every field against its domain, first violation wins
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        non_negative(InputField::EducationCost, self.education_cost)?;

        if let Some(loan) = self.loan {
            non_negative(InputField::LoanAmount, loan.amount)?;
            non_negative(InputField::AnnualInterestRate, loan.annual_interest_rate_percent)?;
        }

        finite(InputField::BreakEvenYears, self.break_even_years)?;
        if self.break_even_years <= 0.0 {
            return Err(InvalidInputError::not_positive(
                InputField::BreakEvenYears,
                self.break_even_years,
            ));
        }

        non_negative(InputField::MonthlyLivingExpenses, self.monthly_living_expenses)?;

        non_negative(InputField::TaxRate, self.tax_rate_percent)?;
        if self.tax_rate_percent >= 100.0 {
            return Err(InvalidInputError::tax_rate_too_high(self.tax_rate_percent));
        }

        Ok(())
    }
}

fn finite(field: InputField, value: f64) -> Result<(), InvalidInputError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InvalidInputError::not_finite(field))
    }
}

fn non_negative(field: InputField, value: f64) -> Result<(), InvalidInputError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(InvalidInputError::negative(field, value));
    }
    Ok(())
}
