//! Input validation rules applied before any formula is evaluated

use super::data::{
    EducationInput, EmiInput, InflationInput, LumpsumInput, PpfInput, RetirementInput, SipInput,
};
use crate::error::{InvalidInputError, Result};

/// Longest horizon (and highest age) any calculator accepts
pub const MAX_YEARS: u32 = 1_000;

/// Checked by every calculator before it computes anything
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Reject zero, negative and non-finite amounts or rates
pub fn require_positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(InvalidInputError::new(format!(
            "all input values must be positive numbers ({} = {})",
            field, value
        )))
    }
}

/// Reject a zero duration
pub fn require_positive_years(field: &str, value: u32) -> Result<()> {
    if value > 0 {
        Ok(())
    } else {
        Err(InvalidInputError::new(format!(
            "all input values must be positive numbers ({} = 0)",
            field
        )))
    }
}

/// Reject a duration or age beyond [`MAX_YEARS`]
pub fn require_within_horizon(field: &str, value: u32) -> Result<()> {
    if value <= MAX_YEARS {
        Ok(())
    } else {
        Err(InvalidInputError::new(format!(
            "{} must not exceed {} years ({} = {})",
            field, MAX_YEARS, field, value
        )))
    }
}

/// Require `later > earlier`, reporting `message` otherwise
pub fn require_after(later: u32, earlier: u32, message: &str) -> Result<()> {
    if later > earlier {
        Ok(())
    } else {
        Err(InvalidInputError::new(message))
    }
}

fn validate_amount_rate_years(amount: (&str, f64), rate: (&str, f64), years: u32) -> Result<()> {
    require_positive(amount.0, amount.1)?;
    require_positive(rate.0, rate.1)?;
    require_positive_years("years", years)?;
    require_within_horizon("years", years)
}

impl Validate for SipInput {
    fn validate(&self) -> Result<()> {
        validate_amount_rate_years(
            ("monthly_amount", self.monthly_amount),
            ("annual_rate_percent", self.annual_rate_percent),
            self.years,
        )
    }
}

impl Validate for LumpsumInput {
    fn validate(&self) -> Result<()> {
        validate_amount_rate_years(
            ("amount", self.amount),
            ("annual_rate_percent", self.annual_rate_percent),
            self.years,
        )
    }
}

impl Validate for EmiInput {
    fn validate(&self) -> Result<()> {
        validate_amount_rate_years(
            ("principal", self.principal),
            ("annual_rate_percent", self.annual_rate_percent),
            self.years,
        )
    }
}

impl Validate for PpfInput {
    fn validate(&self) -> Result<()> {
        validate_amount_rate_years(
            ("annual_amount", self.annual_amount),
            ("rate_percent", self.rate_percent),
            self.years,
        )
    }
}

impl Validate for InflationInput {
    fn validate(&self) -> Result<()> {
        validate_amount_rate_years(
            ("amount", self.amount),
            ("rate_percent", self.rate_percent),
            self.years,
        )
    }
}

impl Validate for RetirementInput {
    fn validate(&self) -> Result<()> {
        require_positive_years("current_age", self.current_age)?;
        require_after(
            self.retirement_age,
            self.current_age,
            "retirement age must exceed current age",
        )?;
        require_after(
            self.life_expectancy,
            self.retirement_age,
            "life expectancy must exceed retirement age",
        )?;
        require_within_horizon("life_expectancy", self.life_expectancy)?;
        require_positive("monthly_expense", self.monthly_expense)?;
        require_positive("inflation_percent", self.inflation_percent)?;
        require_positive("return_percent", self.return_percent)
    }
}

impl Validate for EducationInput {
    fn validate(&self) -> Result<()> {
        // current_age may be 0 (planning from birth)
        require_after(
            self.education_age,
            self.current_age,
            "education age must exceed current age",
        )?;
        require_within_horizon("education_age", self.education_age)?;
        require_positive_years("course_duration", self.course_duration)?;
        require_within_horizon("course_duration", self.course_duration)?;
        require_positive("annual_expense", self.annual_expense)?;
        require_positive("inflation_percent", self.inflation_percent)?;
        require_positive("return_percent", self.return_percent)
    }
}

impl Validate for super::CalculatorInput {
    fn validate(&self) -> Result<()> {
        use super::CalculatorInput::*;
        match self {
            Sip(input) => input.validate(),
            Lumpsum(input) => input.validate(),
            Retirement(input) => input.validate(),
            Emi(input) => input.validate(),
            Ppf(input) => input.validate(),
            Education(input) => input.validate(),
            Inflation(input) => input.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::Calculator;
    use crate::inputs::CalculatorInput;

    #[test]
    fn test_rejects_zero_amount_rate_and_years() {
        assert!(SipInput::new(0.0, 12.0, 10).validate().is_err());
        assert!(SipInput::new(5000.0, 0.0, 10).validate().is_err());
        assert!(SipInput::new(5000.0, 12.0, 0).validate().is_err());
        assert!(SipInput::new(5000.0, 12.0, 10).validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_and_non_finite() {
        assert!(LumpsumInput::new(-1.0, 10.0, 5).validate().is_err());
        assert!(PpfInput::new(f64::NAN, 7.1, 15).validate().is_err());
        assert!(InflationInput::new(100.0, f64::INFINITY, 5).validate().is_err());
    }

    #[test]
    fn test_message_names_field() {
        let err = EmiInput::new(2_000_000.0, 9.0, 0).validate().unwrap_err();
        assert_eq!(err.message(), "all input values must be positive numbers (years = 0)");
    }

    #[test]
    fn test_retirement_age_ordering() {
        let mut input = RetirementInput::default();
        input.retirement_age = input.current_age;
        let err = input.validate().unwrap_err();
        assert_eq!(err.message(), "retirement age must exceed current age");

        let mut input = RetirementInput::default();
        input.life_expectancy = input.retirement_age;
        let err = input.validate().unwrap_err();
        assert_eq!(err.message(), "life expectancy must exceed retirement age");

        let mut input = RetirementInput::default();
        input.current_age = 0;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_education_allows_newborn() {
        let mut input = EducationInput::default();
        input.current_age = 0;
        assert!(input.validate().is_ok());

        input.education_age = 0;
        let err = input.validate().unwrap_err();
        assert_eq!(err.message(), "education age must exceed current age");
    }

    #[test]
    fn test_rejects_horizon_beyond_limit() {
        assert!(SipInput::new(1.0, 1.0, MAX_YEARS).validate().is_ok());

        let err = SipInput::new(1.0, 1.0, 400_000_000).validate().unwrap_err();
        assert_eq!(err.message(), "years must not exceed 1000 years (years = 400000000)");
        assert!(EmiInput::new(1.0, 1.0, u32::MAX).validate().is_err());

        let input = RetirementInput::new(30, 60, u32::MAX, 50_000.0, 6.0, 10.0);
        assert!(input.validate().is_err());

        let mut input = EducationInput::default();
        input.course_duration = u32::MAX;
        assert!(input.validate().is_err());
        let mut input = EducationInput::default();
        input.education_age = u32::MAX;
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_every_positive_field_rejects_zero() {
        let mut inputs = vec![
            CalculatorInput::Sip(SipInput::new(0.0, 12.0, 10)),
            CalculatorInput::Sip(SipInput::new(5000.0, 0.0, 10)),
            CalculatorInput::Sip(SipInput::new(5000.0, 12.0, 0)),
            CalculatorInput::Lumpsum(LumpsumInput::new(0.0, 10.0, 5)),
            CalculatorInput::Lumpsum(LumpsumInput::new(100_000.0, 0.0, 5)),
            CalculatorInput::Lumpsum(LumpsumInput::new(100_000.0, 10.0, 0)),
            CalculatorInput::Emi(EmiInput::new(0.0, 9.0, 20)),
            CalculatorInput::Emi(EmiInput::new(2_000_000.0, 0.0, 20)),
            CalculatorInput::Emi(EmiInput::new(2_000_000.0, 9.0, 0)),
            CalculatorInput::Ppf(PpfInput::new(0.0, 7.1, 15)),
            CalculatorInput::Ppf(PpfInput::new(150_000.0, 0.0, 15)),
            CalculatorInput::Ppf(PpfInput::new(150_000.0, 7.1, 0)),
            CalculatorInput::Inflation(InflationInput::new(0.0, 6.0, 10)),
            CalculatorInput::Inflation(InflationInput::new(100_000.0, 0.0, 10)),
            CalculatorInput::Inflation(InflationInput::new(100_000.0, 6.0, 0)),
        ];

        let retirement = RetirementInput::default();
        for field in 0..4 {
            let mut input = retirement.clone();
            match field {
                0 => input.current_age = 0,
                1 => input.monthly_expense = 0.0,
                2 => input.inflation_percent = 0.0,
                _ => input.return_percent = 0.0,
            }
            inputs.push(CalculatorInput::Retirement(input));
        }

        let education = EducationInput::default();
        for field in 0..4 {
            let mut input = education.clone();
            match field {
                0 => input.course_duration = 0,
                1 => input.annual_expense = 0.0,
                2 => input.inflation_percent = 0.0,
                _ => input.return_percent = 0.0,
            }
            inputs.push(CalculatorInput::Education(input));
        }

        for input in &inputs {
            assert!(input.validate().is_err(), "accepted {:?}", input);
            assert!(input.calculate().is_err(), "calculated {:?}", input);
        }
    }

    #[test]
    fn test_education_requires_course_duration() {
        let mut input = EducationInput::default();
        input.course_duration = 0;
        assert!(input.validate().is_err());
    }
}
