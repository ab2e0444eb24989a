//! Text and CSV rendering of projection results

use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write;

use crate::calculators::ProjectionResult;
use crate::format::{format_inr, format_percent};
use crate::inputs::CalculatorInput;
use crate::series::{sample_for_chart, DEFAULT_CHART_BARS};

/// Write the yearly series of `result` as CSV with a camelCase header
pub fn write_yearly_csv<W: Write>(result: &ProjectionResult, writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    match result {
        ProjectionResult::Sip(r) => write_rows(&mut csv_writer, &r.yearly_data)?,
        ProjectionResult::Lumpsum(r) => write_rows(&mut csv_writer, &r.yearly_data)?,
        ProjectionResult::Retirement(r) => write_rows(&mut csv_writer, &r.yearly_data)?,
        ProjectionResult::Emi(r) => write_rows(&mut csv_writer, &r.yearly_data)?,
        ProjectionResult::Ppf(r) => write_rows(&mut csv_writer, &r.yearly_data)?,
        ProjectionResult::Education(r) => write_rows(&mut csv_writer, &r.yearly_data)?,
        ProjectionResult::Inflation(r) => write_rows(&mut csv_writer, &r.yearly_data)?,
    }

    csv_writer.flush()?;
    Ok(())
}

fn write_rows<W: Write, T: Serialize>(
    writer: &mut csv::Writer<W>,
    rows: &[T],
) -> Result<(), csv::Error> {
    for row in rows {
        writer.serialize(row)?;
    }
    Ok(())
}

/// Human-readable summary with a sampled yearly bar chart
pub fn render_text(input: &CalculatorInput, result: &ProjectionResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} calculator", result.kind().as_str().to_uppercase());
    let _ = writeln!(out, "{}", "-".repeat(40));

    for (label, value) in summary_lines(input, result) {
        let _ = writeln!(out, "  {:<26} {:>14}", label, value);
    }

    let points = result.chart_points();
    if !points.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "  {:>4} {:>16} {:>5}", "Year", "Value", "%");
        for (year, value, percentage) in sample_for_chart(&points, DEFAULT_CHART_BARS) {
            let bar = "#".repeat((*percentage).clamp(0, 100) as usize / 5);
            let _ = writeln!(
                out,
                "  {:>4} {:>16} {:>5} {}",
                year,
                format_inr(*value),
                format_percent(*percentage),
                bar
            );
        }
    }

    out
}

fn summary_lines(
    input: &CalculatorInput,
    result: &ProjectionResult,
) -> Vec<(&'static str, String)> {
    match (input, result) {
        (_, ProjectionResult::Sip(r)) => vec![
            ("Invested amount", format_inr(r.invested_amount)),
            ("Estimated returns", format_inr(r.estimated_returns)),
            ("Total value", format_inr(r.total_value)),
        ],
        (_, ProjectionResult::Lumpsum(r)) => vec![
            ("Invested amount", format_inr(r.invested_amount)),
            ("Estimated returns", format_inr(r.estimated_returns)),
            ("Total value", format_inr(r.total_value)),
        ],
        (CalculatorInput::Retirement(i), ProjectionResult::Retirement(r)) => vec![
            ("Corpus required", format_inr(r.corpus_required)),
            (
                "Suggested monthly SIP",
                format_inr(r.suggested_monthly_sip(i.years_to_retirement())),
            ),
        ],
        (_, ProjectionResult::Retirement(r)) => {
            vec![("Corpus required", format_inr(r.corpus_required))]
        }
        (CalculatorInput::Emi(i), ProjectionResult::Emi(r)) => vec![
            ("Monthly EMI", format_inr(r.emi)),
            ("Total interest", format_inr(r.total_interest)),
            ("Total payment", format_inr(r.total_payment)),
            ("Principal share", format_percent(r.principal_share_percent(i.principal))),
            ("Interest share", format_percent(r.interest_share_percent())),
        ],
        (_, ProjectionResult::Emi(r)) => vec![
            ("Monthly EMI", format_inr(r.emi)),
            ("Total interest", format_inr(r.total_interest)),
            ("Total payment", format_inr(r.total_payment)),
        ],
        (_, ProjectionResult::Ppf(r)) => vec![
            ("Total investment", format_inr(r.total_investment)),
            ("Total interest", format_inr(r.total_interest)),
            ("Maturity amount", format_inr(r.maturity_amount)),
        ],
        (_, ProjectionResult::Education(r)) => {
            let mut lines = vec![
                ("Corpus required", format_inr(r.corpus_required)),
                ("Monthly investment", format_inr(r.monthly_investment)),
            ];
            let schedule = &r.expense_schedule;
            if let (Some(first), Some(last)) = (schedule.first(), schedule.last()) {
                lines.push(("First year cost", format_inr(first.expense)));
                lines.push(("Final year cost", format_inr(last.expense)));
            }
            lines
        }
        (CalculatorInput::Inflation(i), ProjectionResult::Inflation(r)) => vec![
            ("Future value", format_inr(r.future_value)),
            (
                "Purchasing power lost",
                format_percent(r.purchasing_power_loss_percent(i.amount)),
            ),
        ],
        (_, ProjectionResult::Inflation(r)) => vec![("Future value", format_inr(r.future_value))],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::Calculator;
    use crate::inputs::{EmiInput, InflationInput, PpfInput};

    #[test]
    fn test_csv_header_and_rows() {
        let input = CalculatorInput::Ppf(PpfInput::new(150_000.0, 7.1, 15));
        let result = input.calculate().unwrap();
        let mut buf = Vec::new();
        write_yearly_csv(&result, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 16);
        assert_eq!(lines[0], "year,investment,interest,balance,percentage");
        assert_eq!(lines[1], "1,150000,10650,160650,7");
        assert_eq!(lines[15], "15,150000,269695,4068209,100");
    }

    #[test]
    fn test_emi_csv_uses_camel_case() {
        let result = CalculatorInput::Emi(EmiInput::default()).calculate().unwrap();
        let mut buf = Vec::new();
        write_yearly_csv(&result, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("year,principalPaid,interestPaid,remainingBalance,percentage\n"));
    }

    #[test]
    fn test_text_report_includes_insights() {
        let input = CalculatorInput::Emi(EmiInput::default());
        let text = render_text(&input, &input.calculate().unwrap());
        assert!(text.starts_with("EMI calculator"));
        assert!(text.contains("₹17,995"));
        assert!(text.contains("46%"));
        assert!(text.contains("54%"));

        let input = CalculatorInput::Inflation(InflationInput::default());
        let text = render_text(&input, &input.calculate().unwrap());
        assert!(text.contains("₹1,79,085"));
        assert!(text.contains("Purchasing power lost"));
    }
}
