//! Load calculator requests from JSON or CSV batch files

use super::data::{
    CalculatorInput, CalculatorKind, EducationInput, EmiInput, InflationInput, LumpsumInput,
    PpfInput, RetirementInput, SipInput,
};
use crate::error::LoadError;
use csv::Reader;
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Raw CSV row; unused columns for a calculator are left empty
///
/// | calculator | amount | rate | years | current_age | target_age | end_age | inflation | return |
///
/// `amount` is the monthly expense for retirement and the yearly course cost
/// for education; `target_age` is the retirement or education age; `years` is
/// the course duration for education.
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    calculator: String,
    amount: Option<f64>,
    rate: Option<f64>,
    years: Option<u32>,
    current_age: Option<u32>,
    target_age: Option<u32>,
    end_age: Option<u32>,
    inflation: Option<f64>,
    #[serde(rename = "return")]
    return_rate: Option<f64>,
}

fn required<T>(
    value: Option<T>,
    calculator: CalculatorKind,
    column: &'static str,
    row: usize,
) -> Result<T, LoadError> {
    value.ok_or(LoadError::MissingField {
        calculator: calculator.as_str(),
        column,
        row,
    })
}

impl CsvRow {
    fn to_input(self, row: usize) -> Result<CalculatorInput, LoadError> {
        let kind: CalculatorKind = self.calculator.parse().map_err(|_| {
            LoadError::UnknownCalculator { name: self.calculator.clone(), row }
        })?;

        let input = match kind {
            CalculatorKind::Sip => CalculatorInput::Sip(SipInput::new(
                required(self.amount, kind, "amount", row)?,
                required(self.rate, kind, "rate", row)?,
                required(self.years, kind, "years", row)?,
            )),
            CalculatorKind::Lumpsum => CalculatorInput::Lumpsum(LumpsumInput::new(
                required(self.amount, kind, "amount", row)?,
                required(self.rate, kind, "rate", row)?,
                required(self.years, kind, "years", row)?,
            )),
            CalculatorKind::Emi => CalculatorInput::Emi(EmiInput::new(
                required(self.amount, kind, "amount", row)?,
                required(self.rate, kind, "rate", row)?,
                required(self.years, kind, "years", row)?,
            )),
            CalculatorKind::Ppf => CalculatorInput::Ppf(PpfInput::new(
                required(self.amount, kind, "amount", row)?,
                required(self.rate, kind, "rate", row)?,
                required(self.years, kind, "years", row)?,
            )),
            CalculatorKind::Inflation => CalculatorInput::Inflation(InflationInput::new(
                required(self.amount, kind, "amount", row)?,
                required(self.rate, kind, "rate", row)?,
                required(self.years, kind, "years", row)?,
            )),
            CalculatorKind::Retirement => CalculatorInput::Retirement(RetirementInput::new(
                required(self.current_age, kind, "current_age", row)?,
                required(self.target_age, kind, "target_age", row)?,
                required(self.end_age, kind, "end_age", row)?,
                required(self.amount, kind, "amount", row)?,
                required(self.inflation, kind, "inflation", row)?,
                required(self.return_rate, kind, "return", row)?,
            )),
            CalculatorKind::Education => CalculatorInput::Education(EducationInput::new(
                required(self.current_age, kind, "current_age", row)?,
                required(self.target_age, kind, "target_age", row)?,
                required(self.years, kind, "years", row)?,
                required(self.amount, kind, "amount", row)?,
                required(self.inflation, kind, "inflation", row)?,
                required(self.return_rate, kind, "return", row)?,
            )),
        };

        Ok(input)
    }
}

/// Load requests from any CSV reader
///
/// Row numbers in errors are 1-based data rows (the header is not counted).
pub fn load_requests_csv<R: Read>(reader: R) -> Result<Vec<CalculatorInput>, LoadError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut requests = Vec::new();

    for (idx, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        requests.push(row.to_input(idx + 1)?);
    }

    debug!("Loaded {} calculator requests from CSV", requests.len());
    Ok(requests)
}

/// Load requests from a JSON array of tagged calculator inputs
pub fn load_requests_json<R: Read>(reader: R) -> Result<Vec<CalculatorInput>, LoadError> {
    let requests: Vec<CalculatorInput> = serde_json::from_reader(reader)?;
    debug!("Loaded {} calculator requests from JSON", requests.len());
    Ok(requests)
}

/// Load requests from a `.json` or `.csv` file
pub fn load_requests<P: AsRef<Path>>(path: P) -> Result<Vec<CalculatorInput>, LoadError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "json" => load_requests_json(File::open(path)?),
        "csv" => load_requests_csv(File::open(path)?),
        other => Err(LoadError::UnsupportedFormat(other.to_string())),
    }
}
