//! Financial Projection Engine - deterministic personal-finance calculators
//!
//! This library provides:
//! - Seven calculators: SIP, lumpsum, retirement corpus, EMI amortization,
//!   PPF, education corpus and inflation projection
//! - Shared compound-interest and annuity primitives
//! - Yearly series for charting, each point carrying a rounded percentage
//! - Batch loading, parallel scenario runs and rate/duration sweeps
//!
//! Every calculator is a pure function: inputs are validated first, and an
//! invalid input returns [`InvalidInputError`] without producing any output.
//!
//! ```
//! use financial_projection::{calculate_sip, SipInput};
//!
//! let result = calculate_sip(&SipInput::new(5_000.0, 12.0, 10)).unwrap();
//! assert_eq!(result.invested_amount, 600_000);
//! assert_eq!(result.total_value, 1_161_695);
//! ```

pub mod error;
pub mod formulas;
pub mod inputs;
pub mod calculators;
pub mod series;
pub mod format;
pub mod config;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::{InvalidInputError, LoadError};
pub use inputs::{
    CalculatorInput, CalculatorKind, EducationInput, EmiInput, InflationInput, LumpsumInput,
    PpfInput, RetirementInput, SipInput, Validate,
};
pub use calculators::{
    calculate_education, calculate_emi, calculate_inflation, calculate_lumpsum, calculate_ppf,
    calculate_retirement, calculate_sip, Calculator, EducationResult, EmiResult,
    InflationResult, LumpsumResult, PpfResult, ProjectionResult, RetirementResult, SipResult,
};
pub use config::CalculatorDefaults;
pub use scenario::{ScenarioRunner, SweepPoint};
