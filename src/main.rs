//! Fresher Salary CLI
//!
//! Command-line front end for the salary calculator

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io;
use std::path::PathBuf;

use fresher_salary::education::{
    CourseSelection, EducationLevel, Programme, MIN_BREAK_EVEN_YEARS,
};
use fresher_salary::presentation::{format_money, FormInput, SalaryReport};
use fresher_salary::{Currency, FormDefaults, HorizonSweep};

#[derive(Parser)]
#[command(name = "fresher_salary")]
#[command(about = "Find the minimum starting salary (CTC) to ask for.")]
struct CommandLine {
    /// JSON file with form defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the target gross salary
    #[command(alias = "c")]
    Compute {
        #[command(flatten)]
        form: FormArgs,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Compare break-even horizons
    #[command(alias = "s")]
    Sweep {
        #[command(flatten)]
        form: FormArgs,

        #[arg(long, default_value_t = 1.0)]
        from: f64,

        #[arg(long, default_value_t = 10.0)]
        to: f64,

        #[arg(long, default_value_t = 1.0)]
        step: f64,

        /// Highest gross salary considered realistic
        #[arg(long)]
        max_gross: Option<f64>,
    },
    /// List education courses and their suggested horizons
    Courses,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(Args)]
struct FormArgs {
    /// Display currency (INR, USD, EUR, GBP, CAD)
    #[arg(long, value_parser = parse_currency)]
    currency: Option<Currency>,

    /// Total education cost, commas allowed
    #[arg(long)]
    cost: Option<String>,

    /// Education loan amount, commas allowed (defaults to 80% of cost)
    #[arg(long, num_args = 0..=1, default_missing_value = "")]
    loan: Option<String>,

    /// Annual loan interest rate in percent
    #[arg(long)]
    interest: Option<f64>,

    /// Target years to break even
    #[arg(long)]
    years: Option<f64>,

    /// Monthly living expenses, commas allowed
    #[arg(long)]
    expenses: Option<String>,

    /// Flat tax rate in percent
    #[arg(long)]
    tax: Option<f64>,

    /// UG course key or custom years; sets the default horizon
    #[arg(long)]
    ug: Option<String>,

    /// PG course key or custom years; sets the default horizon
    #[arg(long)]
    pg: Option<String>,

    /// Certification course key or custom years; sets the default horizon
    #[arg(long, conflicts_with_all = ["ug", "pg"])]
    cert: Option<String>,
}

impl FormArgs {
    fn education_level(&self) -> anyhow::Result<Option<EducationLevel>> {
        let ug = self
            .ug
            .as_deref()
            .map(|s| CourseSelection::parse(Programme::Undergraduate, s))
            .transpose()?;
        let pg = self
            .pg
            .as_deref()
            .map(|s| CourseSelection::parse(Programme::Postgraduate, s))
            .transpose()?;
        let cert = self
            .cert
            .as_deref()
            .map(|s| CourseSelection::parse(Programme::Certification, s))
            .transpose()?;

        Ok(match (ug, pg, cert) {
            (Some(ug), Some(pg), _) => Some(EducationLevel::Both { ug, pg }),
            (Some(ug), None, _) => Some(EducationLevel::UndergraduateOnly(ug)),
            (None, Some(pg), _) => Some(EducationLevel::PostgraduateOnly(pg)),
            (None, None, Some(cert)) => Some(EducationLevel::Certification(cert)),
            (None, None, None) => None,
        })
    }

    /// Form values plus the defaults they fall back to
    fn to_form(&self, mut defaults: FormDefaults) -> anyhow::Result<(FormInput, FormDefaults)> {
        if let Some(currency) = self.currency {
            defaults.currency = currency;
        }
        if let Some(level) = self.education_level()? {
            defaults.break_even_years = level.suggested_break_even_years();
            log::info!(
                "Education takes {} years, suggested horizon {} years",
                level.standard_duration(),
                defaults.break_even_years
            );
        }

        let form = FormInput {
            education_cost: self.cost.clone(),
            loan_taken: self.loan.is_some(),
            loan_amount: self.loan.clone().filter(|s| !s.trim().is_empty()),
            interest_rate_percent: self.interest,
            break_even_years: self.years,
            monthly_living_expenses: self.expenses.clone(),
            tax_rate_percent: self.tax,
        };
        Ok((form, defaults))
    }
}

fn parse_currency(s: &str) -> Result<Currency, String> {
    s.parse::<Currency>().map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let commands = CommandLine::parse();
    let defaults = FormDefaults::load(commands.config.as_deref())
        .context("Failed to load form defaults")?;

    match commands.command {
        Commands::Compute { form, format } => run_compute(&form, defaults, format),
        Commands::Sweep { form, from, to, step, max_gross } => {
            run_sweep(&form, defaults, from, to, step, max_gross)
        }
        Commands::Courses => {
            print_courses();
            Ok(())
        }
    }
}

fn run_compute(args: &FormArgs, defaults: FormDefaults, format: OutputFormat) -> anyhow::Result<()> {
    let (form, defaults) = args.to_form(defaults)?;
    let submission = form.submit(&defaults);

    let result = match submission.outcome {
        Ok(result) => result,
        Err(err) => bail!("Invalid input: {}", err),
    };
    let report = SalaryReport::new(defaults.currency, submission.input, result, &submission.warnings);

    match format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Csv => report
            .write_csv(io::stdout().lock())
            .context("Failed to write CSV")?,
    }
    Ok(())
}

fn run_sweep(
    args: &FormArgs,
    defaults: FormDefaults,
    from: f64,
    to: f64,
    step: f64,
    max_gross: Option<f64>,
) -> anyhow::Result<()> {
    if from < MIN_BREAK_EVEN_YEARS {
        bail!("--from must be at least {} years", MIN_BREAK_EVEN_YEARS);
    }

    let (form, defaults) = args.to_form(defaults)?;
    let prepared = form.prepare(&defaults);
    for warning in &prepared.warnings {
        eprintln!("warning: {}", warning);
    }

    let sweep = HorizonSweep::stepped(prepared.input, from, to, step)?;
    let points = sweep.run();
    let cy = defaults.currency;

    println!("{:>8} {:>22} {:>22}", "Years", "Gross CTC", "Monthly In-Hand");
    println!("{}", "-".repeat(54));
    for point in &points {
        match &point.outcome {
            Ok(result) => println!(
                "{:>8} {:>22} {:>22}",
                point.break_even_years,
                format_money(cy, result.gross_salary),
                format_money(cy, result.monthly_net()),
            ),
            Err(err) => println!("{:>8} {}", point.break_even_years, err),
        }
    }

    if let Some(ceiling) = max_gross {
        match HorizonSweep::first_affordable(&points, ceiling) {
            Some(point) => println!(
                "\nShortest horizon within {}: {} years",
                format_money(cy, ceiling),
                point.break_even_years
            ),
            None => println!("\nNo horizon up to {} years stays within {}", to, format_money(cy, ceiling)),
        }
    }
    Ok(())
}

fn print_courses() {
    for programme in [Programme::Undergraduate, Programme::Postgraduate, Programme::Certification] {
        println!("{}:", programme.as_str());
        for course in programme.courses() {
            let level = match programme {
                Programme::Undergraduate => EducationLevel::UndergraduateOnly(CourseSelection::Catalog(course)),
                Programme::Postgraduate => EducationLevel::PostgraduateOnly(CourseSelection::Catalog(course)),
                Programme::Certification => EducationLevel::Certification(CourseSelection::Catalog(course)),
            };
            println!(
                "  {:<10} {:<45} {:>4} yrs  (break-even {} yrs)",
                course.key,
                course.label,
                course.years,
                level.suggested_break_even_years()
            );
        }
    }
}
