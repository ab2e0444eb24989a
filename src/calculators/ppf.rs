//! Public Provident Fund with yearly deposits and annual compounding

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::error::Result;
use crate::formulas::{percentage_of, round_half_up};
use crate::inputs::{PpfInput, Validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PpfYear {
    pub year: u32,
    pub investment: i64,
    pub interest: i64,
    pub balance: i64,
    /// Elapsed share of the tenure
    pub percentage: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PpfResult {
    pub total_investment: i64,
    pub total_interest: i64,
    pub maturity_amount: i64,
    pub yearly_data: Vec<PpfYear>,
}

/// Simulate the account year by year
///
/// Interest for a year accrues on the opening balance plus that year's
/// deposit, so the deposit is assumed to be made before the lock-in date.
pub fn calculate_ppf(input: &PpfInput) -> Result<PpfResult> {
    input.validate()?;

    let rate = input.rate_percent / 100.0;
    let mut balance = 0.0;
    let mut total_investment = 0.0;
    let mut total_interest = 0.0;
    let mut yearly_data = Vec::with_capacity(input.years as usize);

    for year in 1..=input.years {
        total_investment += input.annual_amount;
        let interest = (balance + input.annual_amount) * rate;
        balance += input.annual_amount + interest;
        total_interest += interest;

        yearly_data.push(PpfYear {
            year,
            investment: round_half_up(input.annual_amount),
            interest: round_half_up(interest),
            balance: round_half_up(balance),
            percentage: percentage_of(year as f64, input.years as f64),
        });
    }

    Ok(PpfResult {
        total_investment: round_half_up(total_investment),
        total_interest: round_half_up(total_interest),
        maturity_amount: round_half_up(balance),
        yearly_data,
    })
}

impl Calculator for PpfInput {
    type Output = PpfResult;

    fn calculate(&self) -> Result<PpfResult> {
        calculate_ppf(self)
    }
}
