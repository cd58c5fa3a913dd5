//! Raw form values and their conversion into a calculator input set
//!
//! Text fields hold comma-grouped amounts as typed by the user. Anything that
//! fails to parse is replaced by zero and reported as a warning, so the
//! calculator always receives numbers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::format::{format_amount, parse_amount};
use crate::calculator::{InputSet, ResultSet, SalaryCalculator};
use crate::config::FormDefaults;
use crate::error::{InputField, InvalidInputError};

/// Form field values as entered. `None` means the field was left untouched
/// and its default applies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormInput {
    #[serde(default)]
    pub education_cost: Option<String>,
    #[serde(default)]
    pub loan_taken: bool,
    #[serde(default)]
    pub loan_amount: Option<String>,
    #[serde(default)]
    pub interest_rate_percent: Option<f64>,
    #[serde(default)]
    pub break_even_years: Option<f64>,
    #[serde(default)]
    pub monthly_living_expenses: Option<String>,
    #[serde(default)]
    pub tax_rate_percent: Option<f64>,
}

/// Something the user should be told about their input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FormWarning {
    /// Text could not be read as a number; zero was used instead
    Unparseable { field: &'static str, text: String },
    /// Loan exceeds the education cost, so the self-funded share is negative
    OverBorrowed { loan_amount: f64, education_cost: f64 },
}

impl fmt::Display for FormWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormWarning::Unparseable { field, text } => {
                write!(f, "Please enter a valid {} (got {:?}); using 0", field, text)
            }
            FormWarning::OverBorrowed { loan_amount, education_cost } => write!(
                f,
                "Loan amount {} exceeds education cost {}; the surplus lowers the required salary",
                format_amount(*loan_amount),
                format_amount(*education_cost)
            ),
        }
    }
}

/// Input set built from a form, with any warnings raised along the way
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedInput {
    pub input: InputSet,
    pub warnings: Vec<FormWarning>,
}

/// One recomputation: what went in, what was flagged, what came out
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub input: InputSet,
    pub warnings: Vec<FormWarning>,
    pub outcome: Result<ResultSet, InvalidInputError>,
}

impl FormInput {
    /// Convert raw values to an input set, filling blanks from `defaults`
    pub fn prepare(&self, defaults: &FormDefaults) -> PreparedInput {
        let mut warnings = Vec::new();

        let education_cost = amount_field(
            self.education_cost.as_deref(),
            defaults.education_cost(),
            InputField::EducationCost,
            "number",
            &mut warnings,
        );

        let monthly_living_expenses = amount_field(
            self.monthly_living_expenses.as_deref(),
            defaults.monthly_living_expenses(),
            InputField::MonthlyLivingExpenses,
            "monthly expense",
            &mut warnings,
        );

        let mut input = InputSet::new(
            education_cost,
            self.break_even_years.unwrap_or(defaults.break_even_years),
            monthly_living_expenses,
            self.tax_rate_percent.unwrap_or(defaults.tax_rate_percent),
        );

        if self.loan_taken {
            let loan_amount = amount_field(
                self.loan_amount.as_deref(),
                education_cost * defaults.loan_fraction,
                InputField::LoanAmount,
                "loan amount",
                &mut warnings,
            );
            let rate = self
                .interest_rate_percent
                .unwrap_or(defaults.interest_rate_percent);
            input = input.with_loan(loan_amount, rate);

            if input.is_over_borrowed() {
                let warning = FormWarning::OverBorrowed {
                    loan_amount,
                    education_cost,
                };
                log::warn!("{}", warning);
                warnings.push(warning);
            }
        }

        PreparedInput { input, warnings }
    }

    /// Prepare and run the calculator
    pub fn submit(&self, defaults: &FormDefaults) -> Submission {
        let PreparedInput { input, warnings } = self.prepare(defaults);
        let outcome = SalaryCalculator::compute(input);
        if let Err(ref err) = outcome {
            log::debug!("Calculation rejected: {}", err);
        }
        Submission {
            input,
            warnings,
            outcome,
        }
    }
}

fn amount_field(
    text: Option<&str>,
    default: f64,
    field: InputField,
    description: &'static str,
    warnings: &mut Vec<FormWarning>,
) -> f64 {
    let Some(text) = text else {
        return default;
    };

    match parse_amount(text) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("{}: {}", field, err);
            warnings.push(FormWarning::Unparseable {
                field: description,
                text: text.to_string(),
            });
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::Currency;

    fn form(cost: &str, expenses: &str) -> FormInput {
        FormInput {
            education_cost: Some(cost.to_string()),
            monthly_living_expenses: Some(expenses.to_string()),
            break_even_years: Some(4.0),
            tax_rate_percent: Some(15.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_comma_text_parses() {
        let prepared = form("1,000,000.00", "30,000.00").prepare(&FormDefaults::default());
        assert!(prepared.warnings.is_empty());
        assert_eq!(prepared.input, InputSet::new(1_000_000.0, 4.0, 30_000.0, 15.0));
    }

    #[test]
    fn test_bad_text_becomes_zero_with_warning() {
        let prepared = form("lots", "30,000").prepare(&FormDefaults::default());
        assert_eq!(prepared.input.education_cost, 0.0);
        assert_eq!(prepared.warnings.len(), 1);
        assert!(matches!(
            &prepared.warnings[0],
            FormWarning::Unparseable { text, .. } if text == "lots"
        ));
    }

    #[test]
    fn test_blank_form_uses_currency_defaults() {
        let defaults = FormDefaults {
            currency: Currency::EUR,
            ..Default::default()
        };
        let prepared = FormInput::default().prepare(&defaults);
        assert_eq!(prepared.input.education_cost, 50_000.0);
        assert_eq!(prepared.input.monthly_living_expenses, 2_000.0);
        assert_eq!(prepared.input.tax_rate_percent, 15.0);
        assert!(prepared.input.loan.is_none());
    }

    #[test]
    fn test_loan_defaults_to_eighty_percent() {
        let mut input = form("800,000", "30,000");
        input.loan_taken = true;
        let prepared = input.prepare(&FormDefaults::default());
        let loan = prepared.input.loan.unwrap();
        assert!((loan.amount - 640_000.0).abs() < 1e-6);
        assert_eq!(loan.annual_interest_rate_percent, 9.5);
    }

    #[test]
    fn test_loan_ignored_when_not_taken() {
        let mut input = form("800,000", "30,000");
        input.loan_amount = Some("500,000".to_string());
        let prepared = input.prepare(&FormDefaults::default());
        assert!(prepared.input.loan.is_none());
    }

    #[test]
    fn test_over_borrowed_warns_but_computes() {
        let mut input = form("500,000", "0");
        input.loan_taken = true;
        input.loan_amount = Some("600,000".to_string());
        input.interest_rate_percent = Some(0.0);

        let submission = input.submit(&FormDefaults::default());
        assert!(matches!(submission.warnings[0], FormWarning::OverBorrowed { .. }));
        assert!(submission.outcome.is_ok());
    }

    #[test]
    fn test_submit_surfaces_invalid_input() {
        let mut input = form("500,000", "10,000");
        input.tax_rate_percent = Some(100.0);
        let submission = input.submit(&FormDefaults::default());
        assert_eq!(submission.outcome.unwrap_err().field, InputField::TaxRate);
    }
}
