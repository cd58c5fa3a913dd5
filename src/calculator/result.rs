//! Calculator output structures

use serde::{Deserialize, Serialize};

/// Loan repayment figures, present when the loan branch ran
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanRepayment {
    /// Equated monthly installment
    pub monthly_payment: f64,
    /// EMI x 12
    pub yearly_payoff: f64,
    /// Self-funded share spread evenly over the horizon (negative if over-borrowed)
    pub yearly_self_funded_recovery: f64,
}

/// Derived salary figures for one input set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    /// Annualized cost of paying off education
    pub yearly_recovery: f64,
    /// Monthly living expenses x 12
    pub yearly_living: f64,
    /// Required take-home pay per year
    pub net_salary: f64,
    /// Required pre-tax pay per year (the CTC to ask for)
    pub gross_salary: f64,
    /// Tax on the gross salary
    pub yearly_tax: f64,
    #[serde(default)]
    pub loan: Option<LoanRepayment>,
}

/// Salary breakdown category, in chart order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Living,
    EducationPayoff,
    Taxes,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Living => "Survival (Living)",
            Category::EducationPayoff => "Education Payoff",
            Category::Taxes => "Taxes",
        }
    }
}

/// One bar of the salary split
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakdownRow {
    pub category: Category,
    pub amount: f64,
}

impl ResultSet {
    /// Monthly in-hand (net) pay
    pub fn monthly_net(&self) -> f64 {
        self.net_salary / 12.0
    }

    pub fn monthly_gross(&self) -> f64 {
        self.gross_salary / 12.0
    }

    /// Share of the gross salary going to tax, 0 when gross is 0
    pub fn effective_tax_rate(&self) -> f64 {
        if self.gross_salary.abs() < f64::EPSILON {
            0.0
        } else {
            self.yearly_tax / self.gross_salary
        }
    }

    /// Living, education payoff and tax, in display order
    pub fn breakdown(&self) -> [BreakdownRow; 3] {
        [
            BreakdownRow { category: Category::Living, amount: self.yearly_living },
            BreakdownRow { category: Category::EducationPayoff, amount: self.yearly_recovery },
            BreakdownRow { category: Category::Taxes, amount: self.yearly_tax },
        ]
    }
}
