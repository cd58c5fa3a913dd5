//! Loan amortization helpers
//!
//! Level monthly installments (EMI) for a fixed-rate loan repaid over the
//! break-even horizon.

/// Monthly rate from an annual percentage, e.g. 9.5 -> 0.0079166...
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    (annual_rate_percent / 100.0) / 12.0
}

/// Number of monthly installments for a horizon in years (may be fractional)
pub fn installment_count(years: f64) -> f64 {
    years * 12.0
}

/// Calculate the equated monthly installment for a loan
///
/// # Arguments
/// * `principal` - Amount borrowed
/// * `annual_rate_percent` - Annual interest rate in percent (9.5 = 9.5%)
/// * `years` - Repayment horizon in years, must be positive
///
/// Uses the annuity formula `P * r * (1+r)^n / ((1+r)^n - 1)`, evaluated as
/// `P * r / (1 - (1+r)^-n)` so very long horizons tend to interest-only
/// `P * r` instead of overflowing. A zero rate repays in straight line
/// (`P / n`), and so does a rate too small to move `1 + r` off 1.
pub fn monthly_payment(principal: f64, annual_rate_percent: f64, years: f64) -> f64 {
    let r = monthly_rate(annual_rate_percent);
    let n = installment_count(years);

    if r > 0.0 {
        let denominator = 1.0 - (1.0 + r).powf(-n);
        if denominator > 0.0 {
            return principal * r / denominator;
        }
    }

    principal / n
}

/// Total interest paid over the life of the loan
pub fn total_interest(principal: f64, annual_rate_percent: f64, years: f64) -> f64 {
    monthly_payment(principal, annual_rate_percent, years) * installment_count(years) - principal
}
