//! Rendering of results: headline figures plus the yearly breakdown

use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write;

use super::currency::Currency;
use super::format::format_money;
use super::form::FormWarning;
use crate::calculator::{BreakdownRow, InputSet, ResultSet};
use crate::error::Result;

/// Everything the front ends show for one successful calculation
#[derive(Debug, Clone, Serialize)]
pub struct SalaryReport {
    pub currency: Currency,
    pub input: InputSet,
    pub result: ResultSet,
    pub monthly_net: f64,
    pub breakdown: [BreakdownRow; 3],
    pub warnings: Vec<String>,
}

impl SalaryReport {
    pub fn new(currency: Currency, input: InputSet, result: ResultSet, warnings: &[FormWarning]) -> Self {
        Self {
            currency,
            input,
            result,
            monthly_net: result.monthly_net(),
            breakdown: result.breakdown(),
            warnings: warnings.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Plain-text rendering for the terminal
    pub fn to_text(&self) -> String {
        let cy = self.currency;
        let r = &self.result;
        let mut out = String::new();

        for warning in &self.warnings {
            let _ = writeln!(out, "warning: {}", warning);
        }

        let _ = writeln!(out, "Target Gross Yearly Salary (CTC): {}", format_money(cy, r.gross_salary));
        let _ = writeln!(out, "Monthly In-Hand (Net):            {}", format_money(cy, self.monthly_net));
        let _ = writeln!(out);
        let _ = writeln!(out, "Yearly breakdown over {} years:", self.input.break_even_years);

        let recovery_label = if self.input.loan_taken() {
            "Education ROI & EMI Payoff"
        } else {
            "Education ROI Payoff"
        };
        let _ = writeln!(out, "  {:<28} {:>20}", recovery_label, format_money(cy, r.yearly_recovery));
        let _ = writeln!(out, "  {:<28} {:>20}", "Living", format_money(cy, r.yearly_living));
        let tax_label = format!("Taxes ({}%)", self.input.tax_rate_percent);
        let _ = writeln!(out, "  {:<28} {:>20}", tax_label, format_money(cy, r.yearly_tax));

        if let Some(loan) = r.loan {
            let _ = writeln!(out);
            let _ = writeln!(out, "  {:<28} {:>20}", "Monthly EMI", format_money(cy, loan.monthly_payment));
        }

        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Breakdown as `Category,Amount` rows, ready for charting
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["Category", "Amount"])?;
        for row in &self.breakdown {
            csv_writer.write_record([row.category.label().to_string(), format!("{:.2}", row.amount)])?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
