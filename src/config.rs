//! Default calculator inputs and their JSON override file

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

use crate::error::LoadError;
use crate::inputs::{
    CalculatorInput, CalculatorKind, EducationInput, EmiInput, InflationInput, LumpsumInput,
    PpfInput, RetirementInput, SipInput,
};

/// Starting inputs for every calculator
///
/// A defaults file only needs the calculators it changes; a calculator that
/// is present must be complete.
///
/// ```json
/// { "emi": { "principal": 3500000, "annualRatePercent": 8.4, "years": 25 } }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorDefaults {
    pub sip: SipInput,
    pub lumpsum: LumpsumInput,
    pub retirement: RetirementInput,
    pub emi: EmiInput,
    pub ppf: PpfInput,
    pub education: EducationInput,
    pub inflation: InflationInput,
}

impl CalculatorDefaults {
    /// Built-in defaults with overrides from a JSON file
    pub fn from_json_path(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path)?;
        Self::from_json_reader(file)
    }

    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self, LoadError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Default input for one calculator
    pub fn input_for(&self, kind: CalculatorKind) -> CalculatorInput {
        match kind {
            CalculatorKind::Sip => CalculatorInput::Sip(self.sip.clone()),
            CalculatorKind::Lumpsum => CalculatorInput::Lumpsum(self.lumpsum.clone()),
            CalculatorKind::Retirement => CalculatorInput::Retirement(self.retirement.clone()),
            CalculatorKind::Emi => CalculatorInput::Emi(self.emi.clone()),
            CalculatorKind::Ppf => CalculatorInput::Ppf(self.ppf.clone()),
            CalculatorKind::Education => CalculatorInput::Education(self.education.clone()),
            CalculatorKind::Inflation => CalculatorInput::Inflation(self.inflation.clone()),
        }
    }

    /// Default inputs for all seven calculators, in [`CalculatorKind::ALL`] order
    pub fn all_inputs(&self) -> Vec<CalculatorInput> {
        CalculatorKind::ALL.iter().map(|&kind| self.input_for(kind)).collect()
    }
}
