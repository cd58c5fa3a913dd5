//! Salary calculation engine
//!
//! Runs in a fixed order:
//! 1. Loan branch: EMI x 12 plus the self-funded share over the horizon
//! 2. No-loan branch: education cost over the horizon
//! 3. Yearly living cost
//! 4. Net salary = recovery + living
//! 5. Gross-up for the flat tax rate
//! 6. Tax = gross - net
//!
//! No rounding happens here; formatting is left to the caller.

use super::amortization;
use super::input::InputSet;
use super::result::{LoanRepayment, ResultSet};
use crate::error::InvalidInputError;

/// Stateless salary calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct SalaryCalculator;

impl SalaryCalculator {
    /// Compute the required salary for one input set
    ///
    /// Fails on the first field outside its domain. Identical inputs always
    /// give bit-identical results.
    pub fn compute(input: InputSet) -> Result<ResultSet, InvalidInputError> {
        input.validate()?;

        let years = input.break_even_years;

        let (yearly_recovery, loan) = match input.loan {
            Some(terms) if terms.amount > 0.0 => {
                let monthly_payment = amortization::monthly_payment(
                    terms.amount,
                    terms.annual_interest_rate_percent,
                    years,
                );
                let yearly_payoff = monthly_payment * 12.0;

                // Not clamped: over-borrowing makes this negative
                let self_funded = input.education_cost - terms.amount;
                let yearly_self_funded_recovery = self_funded / years;

                let repayment = LoanRepayment {
                    monthly_payment,
                    yearly_payoff,
                    yearly_self_funded_recovery,
                };
                (yearly_payoff + yearly_self_funded_recovery, Some(repayment))
            }
            _ => (input.education_cost / years, None),
        };

        let yearly_living = input.monthly_living_expenses * 12.0;
        let net_salary = yearly_recovery + yearly_living;
        let gross_salary = net_salary / (1.0 - input.tax_rate_percent / 100.0);
        let yearly_tax = gross_salary - net_salary;

        Ok(ResultSet {
            yearly_recovery,
            yearly_living,
            net_salary,
            gross_salary,
            yearly_tax,
            loan,
        })
    }
}

/// Shorthand for [`SalaryCalculator::compute`]
pub fn compute(input: InputSet) -> Result<ResultSet, InvalidInputError> {
    SalaryCalculator::compute(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InputField, Violation};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_scenario_no_loan() {
        let input = InputSet::new(1_000_000.0, 4.0, 30_000.0, 15.0);
        let result = compute(input).unwrap();

        assert_eq!(result.yearly_recovery, 250_000.0);
        assert_eq!(result.yearly_living, 360_000.0);
        assert_eq!(result.net_salary, 610_000.0);
        assert_abs_diff_eq!(result.gross_salary, 717_647.06, epsilon = 0.005);
        assert_abs_diff_eq!(result.yearly_tax, 107_647.06, epsilon = 0.005);
        assert!(result.loan.is_none());
    }

    #[test]
    fn test_scenario_with_loan() {
        let input = InputSet::new(800_000.0, 4.0, 30_000.0, 15.0).with_loan(640_000.0, 9.5);
        let result = compute(input).unwrap();

        let r: f64 = 0.095 / 12.0;
        let growth = (1.0 + r).powf(48.0);
        let expected_emi = 640_000.0 * r * growth / (growth - 1.0);

        let loan = result.loan.expect("loan branch should run");
        assert_abs_diff_eq!(loan.monthly_payment, expected_emi, epsilon = 0.005);
        assert_abs_diff_eq!(
            result.yearly_recovery,
            loan.monthly_payment * 12.0 + (800_000.0 - 640_000.0) / 4.0,
            epsilon = 1e-6
        );
        assert_eq!(loan.yearly_self_funded_recovery, 40_000.0);
        // Interest makes the loan more expensive than straight division
        assert!(result.yearly_recovery > 200_000.0);
    }

    #[test]
    fn test_zero_interest_loan() {
        let input = InputSet::new(600_000.0, 4.0, 0.0, 0.0).with_loan(480_000.0, 0.0);
        let result = compute(input).unwrap();
        assert_eq!(result.loan.unwrap().monthly_payment, 480_000.0 / (4.0 * 12.0));
        assert_abs_diff_eq!(result.yearly_recovery, 150_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_loan_matches_no_loan() {
        let base = InputSet::new(900_000.0, 3.0, 25_000.0, 20.0);
        let without = compute(base).unwrap();
        let with_zero = compute(base.with_loan(0.0, 9.5)).unwrap();

        assert_eq!(without.yearly_recovery, 300_000.0);
        assert_eq!(with_zero.yearly_recovery, 300_000.0);
        assert!(with_zero.loan.is_none());
        assert_eq!(without, with_zero);
    }

    #[test]
    fn test_zero_tax_rate() {
        let result = compute(InputSet::new(400_000.0, 4.0, 20_000.0, 0.0)).unwrap();
        assert_eq!(result.gross_salary, result.net_salary);
        assert_eq!(result.yearly_tax, 0.0);
    }

    #[test]
    fn test_tax_identity() {
        let input = InputSet::new(750_000.0, 5.0, 18_500.0, 27.5).with_loan(500_000.0, 11.0);
        let result = compute(input).unwrap();

        assert_eq!(result.yearly_tax, result.gross_salary - result.net_salary);
        assert_relative_eq!(result.effective_tax_rate(), 0.275, max_relative = 1e-12);
    }

    #[test]
    fn test_ordering_property() {
        let inputs = [
            InputSet::new(0.0, 1.0, 0.0, 0.0),
            InputSet::new(1_000_000.0, 4.0, 30_000.0, 15.0),
            InputSet::new(800_000.0, 4.0, 30_000.0, 15.0).with_loan(640_000.0, 9.5),
            InputSet::new(2_000_000.0, 5.5, 45_000.0, 30.0).with_loan(2_000_000.0, 30.0),
            InputSet::new(50_000.0, 0.5, 2_000.0, 80.0).with_loan(40_000.0, 1.0),
        ];
        for input in inputs {
            let result = compute(input).unwrap();
            assert!(result.gross_salary >= result.net_salary, "{:?}", input);
            assert!(result.net_salary >= result.yearly_living, "{:?}", input);
        }
    }

    #[test]
    fn test_tax_boundary() {
        let result = compute(InputSet::new(1_000_000.0, 4.0, 30_000.0, 99.999)).unwrap();
        assert!(result.gross_salary.is_finite());
        assert!(result.gross_salary > 1e8);

        let err = compute(InputSet::new(1_000_000.0, 4.0, 30_000.0, 100.0)).unwrap_err();
        assert_eq!(err.field, InputField::TaxRate);
        assert_eq!(err.violation, Violation::TaxRateTooHigh(100.0));
    }

    #[test]
    fn test_non_positive_horizon_rejected() {
        for years in [0.0, -1.0] {
            let err = compute(InputSet::new(100.0, years, 0.0, 0.0)).unwrap_err();
            assert_eq!(err.field, InputField::BreakEvenYears);
        }
    }

    #[test]
    fn test_over_borrowed_reduces_recovery() {
        let input = InputSet::new(500_000.0, 4.0, 0.0, 0.0).with_loan(600_000.0, 0.0);
        let result = compute(input).unwrap();
        let loan = result.loan.unwrap();

        assert_eq!(loan.yearly_self_funded_recovery, -25_000.0);
        assert_abs_diff_eq!(result.yearly_recovery, 150_000.0 - 25_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_very_long_horizon_loan() {
        let input = InputSet::new(640_000.0, 8_000.0, 0.0, 0.0).with_loan(640_000.0, 9.5);
        let result = compute(input).unwrap();

        let interest_only = 640_000.0 * (0.095 / 12.0) * 12.0;
        assert_relative_eq!(result.yearly_recovery, interest_only, max_relative = 1e-9);
    }

    #[test]
    fn test_idempotent() {
        let input = InputSet::new(800_000.0, 4.0, 30_000.0, 15.0).with_loan(640_000.0, 9.5);
        let first = compute(input).unwrap();
        let second = compute(input).unwrap();

        assert_eq!(first.gross_salary.to_bits(), second.gross_salary.to_bits());
        assert_eq!(first.yearly_tax.to_bits(), second.yearly_tax.to_bits());
        assert_eq!(first, second);
    }
}
