//! Calculator input records, validation rules and batch request loading

mod data;
mod validation;
pub mod loader;

pub use data::{
    CalculatorInput, CalculatorKind, EducationInput, EmiInput, InflationInput, LumpsumInput,
    PpfInput, RetirementInput, SipInput,
};
pub use validation::{
    require_after, require_positive, require_positive_years, require_within_horizon, Validate,
    MAX_YEARS,
};
pub use loader::{load_requests, load_requests_csv, load_requests_json};
