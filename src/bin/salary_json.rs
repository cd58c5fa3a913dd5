//! JSON front end for the salary calculator
//!
//! Reads one request from the file given as the first argument, or from
//! stdin, and writes one JSON response to stdout. Invalid input is answered
//! with an `error` field rather than a non-zero exit.
//!
//! Request fields (all optional):
//!   currency, education_cost, loan_taken, loan_amount, interest_rate_percent,
//!   break_even_years, monthly_living_expenses, tax_rate_percent
//! Amount fields are strings and may contain thousands separators.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::time::Instant;

use fresher_salary::{Currency, FormDefaults, FormInput, SalaryReport};

/// Input for one calculation
#[derive(Debug, Deserialize)]
struct SalaryRequest {
    #[serde(default)]
    currency: Option<Currency>,

    #[serde(flatten)]
    form: FormInput,
}

/// Output for one calculation
#[derive(Debug, Serialize)]
struct SalaryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<SalaryReport>,
    warnings: Vec<String>,
    execution_time_us: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn read_request_body() -> anyhow::Result<String> {
    match env::args().nth(1) {
        Some(path) => fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path)),
        None => {
            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .context("Failed to read stdin")?;
            Ok(body)
        }
    }
}

fn handle(body: &str, defaults: &FormDefaults) -> SalaryResponse {
    let start = Instant::now();
    let body = if body.trim().is_empty() { "{}" } else { body };

    let request: SalaryRequest = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => {
            return SalaryResponse {
                report: None,
                warnings: Vec::new(),
                execution_time_us: start.elapsed().as_micros() as u64,
                error: Some(format!("Invalid JSON: {}", e)),
            };
        }
    };

    let mut defaults = defaults.clone();
    if let Some(currency) = request.currency {
        defaults.currency = currency;
    }

    let submission = request.form.submit(&defaults);
    let warnings: Vec<String> = submission.warnings.iter().map(|w| w.to_string()).collect();

    let (report, error) = match submission.outcome {
        Ok(result) => (
            Some(SalaryReport::new(defaults.currency, submission.input, result, &submission.warnings)),
            None,
        ),
        Err(err) => (None, Some(err.to_string())),
    };

    SalaryResponse {
        report,
        warnings,
        execution_time_us: start.elapsed().as_micros() as u64,
        error,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let defaults = FormDefaults::load(None).context("Failed to load form defaults")?;
    let body = read_request_body()?;

    let response = handle(&body, &defaults);
    if let Some(ref error) = response.error {
        log::warn!("Request rejected: {}", error);
    }

    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
