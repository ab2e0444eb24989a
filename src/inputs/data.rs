//! Typed input records, one per calculator
//!
//! `Default` values are the starting figures shown on the advisory site's
//! calculator page.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Monthly systematic investment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SipInput {
    /// Amount invested at the start of every month
    pub monthly_amount: f64,
    /// Expected annual return (12.0 for 12%)
    pub annual_rate_percent: f64,
    pub years: u32,
}

impl SipInput {
    pub fn new(monthly_amount: f64, annual_rate_percent: f64, years: u32) -> Self {
        Self { monthly_amount, annual_rate_percent, years }
    }
}

impl Default for SipInput {
    fn default() -> Self {
        Self::new(5_000.0, 12.0, 10)
    }
}

/// Single upfront investment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LumpsumInput {
    pub amount: f64,
    pub annual_rate_percent: f64,
    pub years: u32,
}

impl LumpsumInput {
    pub fn new(amount: f64, annual_rate_percent: f64, years: u32) -> Self {
        Self { amount, annual_rate_percent, years }
    }
}

impl Default for LumpsumInput {
    fn default() -> Self {
        Self::new(100_000.0, 10.0, 5)
    }
}

/// Corpus needed to fund inflation-adjusted expenses through retirement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementInput {
    pub current_age: u32,
    pub retirement_age: u32,
    pub life_expectancy: u32,
    /// Monthly expense in today's money
    pub monthly_expense: f64,
    pub inflation_percent: f64,
    /// Expected return on the corpus during retirement
    pub return_percent: f64,
}

impl RetirementInput {
    pub fn new(
        current_age: u32,
        retirement_age: u32,
        life_expectancy: u32,
        monthly_expense: f64,
        inflation_percent: f64,
        return_percent: f64,
    ) -> Self {
        Self {
            current_age,
            retirement_age,
            life_expectancy,
            monthly_expense,
            inflation_percent,
            return_percent,
        }
    }

    pub fn years_to_retirement(&self) -> u32 {
        self.retirement_age.saturating_sub(self.current_age)
    }

    pub fn years_in_retirement(&self) -> u32 {
        self.life_expectancy.saturating_sub(self.retirement_age)
    }
}

impl Default for RetirementInput {
    fn default() -> Self {
        Self::new(30, 60, 85, 50_000.0, 6.0, 10.0)
    }
}

/// Reducing-balance loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmiInput {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub years: u32,
}

impl EmiInput {
    pub fn new(principal: f64, annual_rate_percent: f64, years: u32) -> Self {
        Self { principal, annual_rate_percent, years }
    }

    pub fn months(&self) -> u32 {
        self.years.saturating_mul(12)
    }
}

impl Default for EmiInput {
    fn default() -> Self {
        Self::new(2_000_000.0, 9.0, 20)
    }
}

/// Public Provident Fund with a fixed yearly deposit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PpfInput {
    pub annual_amount: f64,
    pub rate_percent: f64,
    /// Usually 15 for a PPF account
    pub years: u32,
}

impl PpfInput {
    pub fn new(annual_amount: f64, rate_percent: f64, years: u32) -> Self {
        Self { annual_amount, rate_percent, years }
    }
}

impl Default for PpfInput {
    fn default() -> Self {
        Self::new(150_000.0, 7.1, 15)
    }
}

/// Child education fund
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationInput {
    /// Child's current age; 0 is allowed
    pub current_age: u32,
    /// Age at which course fees start
    pub education_age: u32,
    pub course_duration: u32,
    /// Yearly course cost in today's money
    pub annual_expense: f64,
    pub inflation_percent: f64,
    pub return_percent: f64,
}

impl EducationInput {
    pub fn new(
        current_age: u32,
        education_age: u32,
        course_duration: u32,
        annual_expense: f64,
        inflation_percent: f64,
        return_percent: f64,
    ) -> Self {
        Self {
            current_age,
            education_age,
            course_duration,
            annual_expense,
            inflation_percent,
            return_percent,
        }
    }

    pub fn years_to_education(&self) -> u32 {
        self.education_age.saturating_sub(self.current_age)
    }
}

impl Default for EducationInput {
    fn default() -> Self {
        Self::new(5, 18, 4, 500_000.0, 10.0, 12.0)
    }
}

/// Purchasing-power projection of a present amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InflationInput {
    pub amount: f64,
    pub rate_percent: f64,
    pub years: u32,
}

impl InflationInput {
    pub fn new(amount: f64, rate_percent: f64, years: u32) -> Self {
        Self { amount, rate_percent, years }
    }
}

impl Default for InflationInput {
    fn default() -> Self {
        Self::new(100_000.0, 6.0, 10)
    }
}

/// Identifies one of the seven calculators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculatorKind {
    Sip,
    Lumpsum,
    Retirement,
    Emi,
    Ppf,
    Education,
    Inflation,
}

impl CalculatorKind {
    pub const ALL: [CalculatorKind; 7] = [
        CalculatorKind::Sip,
        CalculatorKind::Lumpsum,
        CalculatorKind::Retirement,
        CalculatorKind::Emi,
        CalculatorKind::Ppf,
        CalculatorKind::Education,
        CalculatorKind::Inflation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CalculatorKind::Sip => "sip",
            CalculatorKind::Lumpsum => "lumpsum",
            CalculatorKind::Retirement => "retirement",
            CalculatorKind::Emi => "emi",
            CalculatorKind::Ppf => "ppf",
            CalculatorKind::Education => "education",
            CalculatorKind::Inflation => "inflation",
        }
    }
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculatorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        CalculatorKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| format!("Unknown calculator: {}", s))
    }
}

/// Any calculator's input, tagged by calculator name
///
/// Serialized as `{"calculator": "sip", "monthlyAmount": 5000, ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "lowercase")]
pub enum CalculatorInput {
    Sip(SipInput),
    Lumpsum(LumpsumInput),
    Retirement(RetirementInput),
    Emi(EmiInput),
    Ppf(PpfInput),
    Education(EducationInput),
    Inflation(InflationInput),
}

impl CalculatorInput {
    pub fn kind(&self) -> CalculatorKind {
        match self {
            CalculatorInput::Sip(_) => CalculatorKind::Sip,
            CalculatorInput::Lumpsum(_) => CalculatorKind::Lumpsum,
            CalculatorInput::Retirement(_) => CalculatorKind::Retirement,
            CalculatorInput::Emi(_) => CalculatorKind::Emi,
            CalculatorInput::Ppf(_) => CalculatorKind::Ppf,
            CalculatorInput::Education(_) => CalculatorKind::Education,
            CalculatorInput::Inflation(_) => CalculatorKind::Inflation,
        }
    }

    /// Copy of this input with its primary rate replaced
    ///
    /// Retirement and education sweep the expected return, the others their
    /// growth or loan rate.
    pub fn with_rate(&self, rate_percent: f64) -> Self {
        let mut next = self.clone();
        match &mut next {
            CalculatorInput::Sip(input) => input.annual_rate_percent = rate_percent,
            CalculatorInput::Lumpsum(input) => input.annual_rate_percent = rate_percent,
            CalculatorInput::Retirement(input) => input.return_percent = rate_percent,
            CalculatorInput::Emi(input) => input.annual_rate_percent = rate_percent,
            CalculatorInput::Ppf(input) => input.rate_percent = rate_percent,
            CalculatorInput::Education(input) => input.return_percent = rate_percent,
            CalculatorInput::Inflation(input) => input.rate_percent = rate_percent,
        }
        next
    }

    /// Copy of this input with its horizon replaced
    ///
    /// For retirement and education the horizon is the number of years until
    /// the target age, so the target age moves and the current age stays.
    pub fn with_duration(&self, years: u32) -> Self {
        let mut next = self.clone();
        match &mut next {
            CalculatorInput::Sip(input) => input.years = years,
            CalculatorInput::Lumpsum(input) => input.years = years,
            CalculatorInput::Retirement(input) => {
                let years_in_retirement = input.years_in_retirement();
                input.retirement_age = input.current_age.saturating_add(years);
                input.life_expectancy = input.retirement_age.saturating_add(years_in_retirement);
            }
            CalculatorInput::Emi(input) => input.years = years,
            CalculatorInput::Ppf(input) => input.years = years,
            CalculatorInput::Education(input) => {
                input.education_age = input.current_age.saturating_add(years);
            }
            CalculatorInput::Inflation(input) => input.years = years,
        }
        next
    }
}
