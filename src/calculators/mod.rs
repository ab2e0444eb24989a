//! The seven calculators and their projection results
//!
//! Each calculator validates its input, evaluates the shared formulas and
//! builds a yearly series. Calls are pure: the same input always produces a
//! bit-identical result and nothing is kept between calls.

mod sip;
mod lumpsum;
mod retirement;
mod emi;
mod ppf;
mod education;
mod inflation;
mod result;

pub use sip::{calculate_sip, SipResult, SipYear};
pub use lumpsum::{calculate_lumpsum, LumpsumResult, LumpsumYear};
pub use retirement::{calculate_retirement, RetirementResult, RetirementYear};
pub use emi::{calculate_emi, EmiResult, EmiYear};
pub use ppf::{calculate_ppf, PpfResult, PpfYear};
pub use education::{calculate_education, EducationExpense, EducationResult, EducationYear};
pub use inflation::{calculate_inflation, InflationResult, InflationYear};
pub use result::ProjectionResult;

use crate::error::Result;
use crate::inputs::{CalculatorInput, Validate};

/// A validated input that can be projected
pub trait Calculator: Validate {
    type Output;

    /// Validate and compute; no output is produced for invalid input
    fn calculate(&self) -> Result<Self::Output>;
}

impl Calculator for CalculatorInput {
    type Output = ProjectionResult;

    fn calculate(&self) -> Result<ProjectionResult> {
        Ok(match self {
            CalculatorInput::Sip(input) => ProjectionResult::Sip(input.calculate()?),
            CalculatorInput::Lumpsum(input) => ProjectionResult::Lumpsum(input.calculate()?),
            CalculatorInput::Retirement(input) => ProjectionResult::Retirement(input.calculate()?),
            CalculatorInput::Emi(input) => ProjectionResult::Emi(input.calculate()?),
            CalculatorInput::Ppf(input) => ProjectionResult::Ppf(input.calculate()?),
            CalculatorInput::Education(input) => ProjectionResult::Education(input.calculate()?),
            CalculatorInput::Inflation(input) => ProjectionResult::Inflation(input.calculate()?),
        })
    }
}
