//! Calculator-agnostic wrapper around the seven result types

use serde::{Deserialize, Serialize};

use super::{
    EducationResult, EmiResult, InflationResult, LumpsumResult, PpfResult, RetirementResult,
    SipResult,
};
use crate::inputs::CalculatorKind;
use crate::series::YearlyPoint;

/// Output of any calculator, tagged like [`crate::CalculatorInput`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "lowercase")]
pub enum ProjectionResult {
    Sip(SipResult),
    Lumpsum(LumpsumResult),
    Retirement(RetirementResult),
    Emi(EmiResult),
    Ppf(PpfResult),
    Education(EducationResult),
    Inflation(InflationResult),
}

impl ProjectionResult {
    pub fn kind(&self) -> CalculatorKind {
        match self {
            ProjectionResult::Sip(_) => CalculatorKind::Sip,
            ProjectionResult::Lumpsum(_) => CalculatorKind::Lumpsum,
            ProjectionResult::Retirement(_) => CalculatorKind::Retirement,
            ProjectionResult::Emi(_) => CalculatorKind::Emi,
            ProjectionResult::Ppf(_) => CalculatorKind::Ppf,
            ProjectionResult::Education(_) => CalculatorKind::Education,
            ProjectionResult::Inflation(_) => CalculatorKind::Inflation,
        }
    }

    /// The figure a summary line leads with, and its label
    pub fn headline(&self) -> (&'static str, i64) {
        match self {
            ProjectionResult::Sip(r) => ("Total value", r.total_value),
            ProjectionResult::Lumpsum(r) => ("Total value", r.total_value),
            ProjectionResult::Retirement(r) => ("Corpus required", r.corpus_required),
            ProjectionResult::Emi(r) => ("Monthly EMI", r.emi),
            ProjectionResult::Ppf(r) => ("Maturity amount", r.maturity_amount),
            ProjectionResult::Education(r) => ("Corpus required", r.corpus_required),
            ProjectionResult::Inflation(r) => ("Future value", r.future_value),
        }
    }

    /// Number of yearly snapshots
    pub fn yearly_len(&self) -> usize {
        match self {
            ProjectionResult::Sip(r) => r.yearly_data.len(),
            ProjectionResult::Lumpsum(r) => r.yearly_data.len(),
            ProjectionResult::Retirement(r) => r.yearly_data.len(),
            ProjectionResult::Emi(r) => r.yearly_data.len(),
            ProjectionResult::Ppf(r) => r.yearly_data.len(),
            ProjectionResult::Education(r) => r.yearly_data.len(),
            ProjectionResult::Inflation(r) => r.yearly_data.len(),
        }
    }

    /// `(year, chart value, percentage)` for every snapshot
    pub fn chart_points(&self) -> Vec<(u32, i64, i64)> {
        fn collect<P: YearlyPoint>(points: &[P]) -> Vec<(u32, i64, i64)> {
            points
                .iter()
                .map(|p| (p.year(), p.chart_value(), p.percentage()))
                .collect()
        }

        match self {
            ProjectionResult::Sip(r) => collect(&r.yearly_data),
            ProjectionResult::Lumpsum(r) => collect(&r.yearly_data),
            ProjectionResult::Retirement(r) => collect(&r.yearly_data),
            ProjectionResult::Emi(r) => collect(&r.yearly_data),
            ProjectionResult::Ppf(r) => collect(&r.yearly_data),
            ProjectionResult::Education(r) => collect(&r.yearly_data),
            ProjectionResult::Inflation(r) => collect(&r.yearly_data),
        }
    }
}
