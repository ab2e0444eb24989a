//! Financial Projection CLI
//!
//! Command-line interface for running calculator projections

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use financial_projection::{
    report, CalculatorDefaults, CalculatorInput, CalculatorKind, EducationInput, InvalidInputError,
    ProjectionResult, RetirementInput, ScenarioRunner, SweepPoint,
};
use financial_projection::format::format_inr;
use financial_projection::inputs::load_requests;
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "projection-cli",
    version,
    about = "Run SIP, EMI, PPF and other financial projections"
)]
struct Cli {
    /// JSON file overriding the built-in calculator defaults
    #[arg(long, global = true)]
    defaults: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Monthly SIP (amount = monthly contribution)
    Sip(AmountRateYears),
    /// One-time investment
    Lumpsum(AmountRateYears),
    /// Loan EMI and amortization (amount = principal)
    Emi(AmountRateYears),
    /// Public Provident Fund (amount = yearly deposit)
    Ppf(AmountRateYears),
    /// Future cost of today's amount
    Inflation(AmountRateYears),
    /// Corpus needed for retirement
    Retirement(RetirementArgs),
    /// Education corpus and monthly saving
    Education(EducationArgs),
    /// Run every request in a .json or .csv file
    Batch {
        file: PathBuf,
    },
    /// Re-run a calculator's defaults at several rates
    SweepRate {
        calculator: CalculatorKind,
        #[arg(long, value_delimiter = ',', required = true)]
        rates: Vec<f64>,
    },
    /// Re-run a calculator's defaults over several horizons (years)
    SweepYears {
        calculator: CalculatorKind,
        #[arg(long, value_delimiter = ',', required = true)]
        years: Vec<u32>,
    },
    /// Print the effective defaults as JSON
    Defaults,
}

#[derive(Args, Debug)]
struct AmountRateYears {
    #[arg(long)]
    amount: Option<f64>,
    /// Annual rate in percent
    #[arg(long)]
    rate: Option<f64>,
    #[arg(long)]
    years: Option<u32>,
}

#[derive(Args, Debug)]
struct RetirementArgs {
    #[arg(long)]
    current_age: Option<u32>,
    #[arg(long)]
    retirement_age: Option<u32>,
    #[arg(long)]
    life_expectancy: Option<u32>,
    /// Monthly expense in today's money
    #[arg(long)]
    monthly_expense: Option<f64>,
    #[arg(long)]
    inflation: Option<f64>,
    /// Expected return during retirement, percent
    #[arg(long = "return")]
    return_rate: Option<f64>,
}

#[derive(Args, Debug)]
struct EducationArgs {
    #[arg(long)]
    current_age: Option<u32>,
    #[arg(long)]
    education_age: Option<u32>,
    #[arg(long)]
    course_duration: Option<u32>,
    /// Yearly course cost in today's money
    #[arg(long)]
    annual_expense: Option<f64>,
    #[arg(long)]
    inflation: Option<f64>,
    /// Expected return on savings, percent
    #[arg(long = "return")]
    return_rate: Option<f64>,
}

/// One line of a batch or sweep summary
#[derive(Debug, Serialize)]
struct SummaryRow {
    label: String,
    calculator: String,
    headline_label: Option<&'static str>,
    headline: Option<i64>,
    entries: Option<usize>,
    error: Option<String>,
}

impl SummaryRow {
    fn new(
        label: String,
        kind: CalculatorKind,
        result: &Result<ProjectionResult, InvalidInputError>,
    ) -> Self {
        match result {
            Ok(r) => {
                let (headline_label, headline) = r.headline();
                Self {
                    label,
                    calculator: kind.to_string(),
                    headline_label: Some(headline_label),
                    headline: Some(headline),
                    entries: Some(r.yearly_len()),
                    error: None,
                }
            }
            Err(err) => Self {
                label,
                calculator: kind.to_string(),
                headline_label: None,
                headline: None,
                entries: None,
                error: Some(err.message().to_string()),
            },
        }
    }

    fn to_text(&self) -> String {
        match (&self.headline_label, self.headline, &self.error) {
            (Some(name), Some(value), _) => format!(
                "{:<12} {:<11} {}: {}",
                self.label,
                self.calculator,
                name,
                format_inr(value)
            ),
            (_, _, Some(err)) => {
                format!("{:<12} {:<11} rejected: {}", self.label, self.calculator, err)
            }
            _ => format!("{:<12} {:<11}", self.label, self.calculator),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let defaults = match &cli.defaults {
        Some(path) => CalculatorDefaults::from_json_path(path)
            .with_context(|| format!("Failed to load defaults from {}", path.display()))?,
        None => CalculatorDefaults::default(),
    };
    let runner = ScenarioRunner::with_defaults(defaults);

    let mut out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("Unable to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    match cli.command {
        Command::Sip(args) => {
            let input = amount_rate_years(&runner, CalculatorKind::Sip, &args);
            emit_single(&mut out, cli.format, &runner, &input)?;
        }
        Command::Lumpsum(args) => {
            let input = amount_rate_years(&runner, CalculatorKind::Lumpsum, &args);
            emit_single(&mut out, cli.format, &runner, &input)?;
        }
        Command::Emi(args) => {
            let input = amount_rate_years(&runner, CalculatorKind::Emi, &args);
            emit_single(&mut out, cli.format, &runner, &input)?;
        }
        Command::Ppf(args) => {
            let input = amount_rate_years(&runner, CalculatorKind::Ppf, &args);
            emit_single(&mut out, cli.format, &runner, &input)?;
        }
        Command::Inflation(args) => {
            let input = amount_rate_years(&runner, CalculatorKind::Inflation, &args);
            emit_single(&mut out, cli.format, &runner, &input)?;
        }
        Command::Retirement(args) => {
            let input = retirement_input(runner.defaults().retirement.clone(), &args);
            emit_single(&mut out, cli.format, &runner, &input)?;
        }
        Command::Education(args) => {
            let input = education_input(runner.defaults().education.clone(), &args);
            emit_single(&mut out, cli.format, &runner, &input)?;
        }
        Command::Batch { file } => {
            let inputs = load_requests(&file)
                .with_context(|| format!("Failed to load requests from {}", file.display()))?;
            info!("Loaded {} requests from {}", inputs.len(), file.display());
            emit_batch(&mut out, cli.format, &runner, &inputs)?;
        }
        Command::SweepRate { calculator, rates } => {
            let input = runner.defaults().input_for(calculator);
            let points = runner.rate_sweep(&input, &rates);
            emit_sweep(&mut out, cli.format, calculator, &points, |rate| format!("{}%", rate))?;
        }
        Command::SweepYears { calculator, years } => {
            let input = runner.defaults().input_for(calculator);
            let points = runner.duration_sweep(&input, &years);
            emit_sweep(&mut out, cli.format, calculator, &points, |years| {
                format!("{} years", years)
            })?;
        }
        Command::Defaults => {
            serde_json::to_writer_pretty(&mut out, runner.defaults())?;
            writeln!(out)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Defaults for `kind` with any flags the user passed applied on top
fn amount_rate_years(
    runner: &ScenarioRunner,
    kind: CalculatorKind,
    args: &AmountRateYears,
) -> CalculatorInput {
    let mut input = runner.defaults().input_for(kind);
    if let Some(rate) = args.rate {
        input = input.with_rate(rate);
    }
    if let Some(years) = args.years {
        input = input.with_duration(years);
    }
    if let Some(amount) = args.amount {
        match &mut input {
            CalculatorInput::Sip(i) => i.monthly_amount = amount,
            CalculatorInput::Lumpsum(i) => i.amount = amount,
            CalculatorInput::Emi(i) => i.principal = amount,
            CalculatorInput::Ppf(i) => i.annual_amount = amount,
            CalculatorInput::Inflation(i) => i.amount = amount,
            CalculatorInput::Retirement(_) | CalculatorInput::Education(_) => {}
        }
    }
    input
}

fn retirement_input(mut input: RetirementInput, args: &RetirementArgs) -> CalculatorInput {
    if let Some(v) = args.current_age {
        input.current_age = v;
    }
    if let Some(v) = args.retirement_age {
        input.retirement_age = v;
    }
    if let Some(v) = args.life_expectancy {
        input.life_expectancy = v;
    }
    if let Some(v) = args.monthly_expense {
        input.monthly_expense = v;
    }
    if let Some(v) = args.inflation {
        input.inflation_percent = v;
    }
    if let Some(v) = args.return_rate {
        input.return_percent = v;
    }
    CalculatorInput::Retirement(input)
}

fn education_input(mut input: EducationInput, args: &EducationArgs) -> CalculatorInput {
    if let Some(v) = args.current_age {
        input.current_age = v;
    }
    if let Some(v) = args.education_age {
        input.education_age = v;
    }
    if let Some(v) = args.course_duration {
        input.course_duration = v;
    }
    if let Some(v) = args.annual_expense {
        input.annual_expense = v;
    }
    if let Some(v) = args.inflation {
        input.inflation_percent = v;
    }
    if let Some(v) = args.return_rate {
        input.return_percent = v;
    }
    CalculatorInput::Education(input)
}

fn emit_single(
    out: &mut dyn Write,
    format: OutputFormat,
    runner: &ScenarioRunner,
    input: &CalculatorInput,
) -> Result<()> {
    let result = runner
        .run(input)
        .with_context(|| format!("{} calculation failed", input.kind()))?;

    match format {
        OutputFormat::Text => write!(out, "{}", report::render_text(input, &result))?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &result)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => report::write_yearly_csv(&result, &mut *out)?,
    }
    Ok(())
}

fn emit_batch(
    out: &mut dyn Write,
    format: OutputFormat,
    runner: &ScenarioRunner,
    inputs: &[CalculatorInput],
) -> Result<()> {
    let results = runner.run_batch(inputs);

    match format {
        OutputFormat::Json => {
            let values = inputs
                .iter()
                .zip(&results)
                .map(|(input, result)| match result {
                    Ok(r) => serde_json::to_value(r),
                    Err(err) => Ok(serde_json::json!({
                        "calculator": input.kind(),
                        "error": err.message(),
                    })),
                })
                .collect::<Result<Vec<_>, _>>()?;
            serde_json::to_writer_pretty(&mut *out, &values)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for (idx, (input, result)) in inputs.iter().zip(&results).enumerate() {
                match result {
                    Ok(r) => writeln!(out, "{}", report::render_text(input, r))?,
                    Err(err) => writeln!(
                        out,
                        "Request {} ({}) rejected: {}\n",
                        idx + 1,
                        input.kind(),
                        err
                    )?,
                }
            }
        }
        OutputFormat::Csv => {
            let rows = inputs
                .iter()
                .zip(&results)
                .enumerate()
                .map(|(idx, (input, result))| {
                    SummaryRow::new(format!("{}", idx + 1), input.kind(), result)
                });
            write_summary_csv(out, rows)?;
        }
    }
    Ok(())
}

fn emit_sweep<T: Serialize + Copy>(
    out: &mut dyn Write,
    format: OutputFormat,
    kind: CalculatorKind,
    points: &[SweepPoint<T>],
    label: impl Fn(T) -> String,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let values: Vec<serde_json::Value> = points
                .iter()
                .map(|p| match &p.result {
                    Ok(r) => serde_json::json!({ "parameter": p.parameter, "result": r }),
                    Err(err) => {
                        serde_json::json!({ "parameter": p.parameter, "error": err.message() })
                    }
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &values)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for p in points {
                let row = SummaryRow::new(label(p.parameter), kind, &p.result);
                writeln!(out, "{}", row.to_text())?;
            }
        }
        OutputFormat::Csv => {
            let rows = points
                .iter()
                .map(|p| SummaryRow::new(label(p.parameter), kind, &p.result));
            write_summary_csv(out, rows)?;
        }
    }
    Ok(())
}

fn write_summary_csv(out: &mut dyn Write, rows: impl Iterator<Item = SummaryRow>) -> Result<()> {
    let mut writer = csv::Writer::from_writer(&mut *out);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
