//! Presentation layer: currency display, amount text, form handling and
//! result rendering around the pure calculator

mod currency;
mod form;
mod format;
mod report;

pub use currency::Currency;
pub use form::{FormInput, FormWarning, PreparedInput, Submission};
pub use format::{format_amount, format_money, parse_amount, ParseAmountError};
pub use report::SalaryReport;
