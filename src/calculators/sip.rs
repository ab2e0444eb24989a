//! Systematic Investment Plan: fixed monthly contribution, annuity-due

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::error::Result;
use crate::formulas::{annuity_due_future_value, monthly_rate, percentage_of, round_half_up};
use crate::inputs::{SipInput, Validate};

/// Cumulative position at the end of a plan year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SipYear {
    pub year: u32,
    pub invested: i64,
    pub returns: i64,
    pub total: i64,
    pub percentage: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SipResult {
    pub invested_amount: i64,
    pub estimated_returns: i64,
    pub total_value: i64,
    pub yearly_data: Vec<SipYear>,
}

/// Project a monthly SIP
///
/// Contributions are treated as paid at the start of each month, so every
/// instalment earns one extra month of return (the `(1 + i)` multiplier).
pub fn calculate_sip(input: &SipInput) -> Result<SipResult> {
    input.validate()?;

    let rate = monthly_rate(input.annual_rate_percent);
    let months = input.years * 12;
    let invested = input.monthly_amount * months as f64;
    let future_value = annuity_due_future_value(input.monthly_amount, rate, months);

    let yearly_data = (1..=input.years)
        .map(|year| {
            let year_months = year * 12;
            let year_invested = input.monthly_amount * year_months as f64;
            let year_value = annuity_due_future_value(input.monthly_amount, rate, year_months);
            SipYear {
                year,
                invested: round_half_up(year_invested),
                returns: round_half_up(year_value - year_invested),
                total: round_half_up(year_value),
                percentage: percentage_of(year_value, future_value),
            }
        })
        .collect();

    Ok(SipResult {
        invested_amount: round_half_up(invested),
        estimated_returns: round_half_up(future_value - invested),
        total_value: round_half_up(future_value),
        yearly_data,
    })
}

impl Calculator for SipInput {
    type Output = SipResult;

    fn calculate(&self) -> Result<SipResult> {
        calculate_sip(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scenario() {
        let result = calculate_sip(&SipInput::new(5_000.0, 12.0, 10)).unwrap();
        assert_eq!(result.invested_amount, 600_000);
        assert_eq!(result.estimated_returns, 561_695);
        assert_eq!(result.total_value, 1_161_695);

        assert_eq!(result.yearly_data.len(), 10);
        assert_eq!(
            result.yearly_data[0],
            SipYear { year: 1, invested: 60_000, returns: 4_047, total: 64_047, percentage: 6 }
        );
        assert_eq!(result.yearly_data[1].total, 136_216);
        assert_eq!(result.yearly_data[1].percentage, 12);

        let last = result.yearly_data.last().unwrap();
        assert_eq!(last.total, result.total_value);
        assert_eq!(last.percentage, 100);
    }

    #[test]
    fn test_total_is_invested_plus_returns() {
        for (amount, rate, years) in [(500.0, 7.5, 3), (12_345.0, 14.0, 25), (1.0, 0.5, 1)] {
            let r = calculate_sip(&SipInput::new(amount, rate, years)).unwrap();
            assert!((r.total_value - (r.invested_amount + r.estimated_returns)).abs() <= 1);
        }
    }

    #[test]
    fn test_yearly_totals_increase() {
        let r = calculate_sip(&SipInput::new(2_000.0, 10.0, 15)).unwrap();
        assert!(r.yearly_data.windows(2).all(|w| w[1].total > w[0].total));
    }

    #[test]
    fn test_rejects_zero_rate() {
        let err = calculate_sip(&SipInput::new(5_000.0, 0.0, 10)).unwrap_err();
        assert!(err.message().starts_with("all input values must be positive numbers"));
    }
}
