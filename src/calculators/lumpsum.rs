//! Single upfront investment compounded annually

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::error::Result;
use crate::formulas::{lump_sum_future_value, percentage_of, round_half_up};
use crate::inputs::{LumpsumInput, Validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LumpsumYear {
    pub year: u32,
    pub invested: i64,
    pub returns: i64,
    pub total: i64,
    pub percentage: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LumpsumResult {
    pub invested_amount: i64,
    pub estimated_returns: i64,
    pub total_value: i64,
    pub yearly_data: Vec<LumpsumYear>,
}

pub fn calculate_lumpsum(input: &LumpsumInput) -> Result<LumpsumResult> {
    input.validate()?;

    let future_value = lump_sum_future_value(input.amount, input.annual_rate_percent, input.years);

    let yearly_data = (1..=input.years)
        .map(|year| {
            let value = lump_sum_future_value(input.amount, input.annual_rate_percent, year);
            LumpsumYear {
                year,
                invested: round_half_up(input.amount),
                returns: round_half_up(value - input.amount),
                total: round_half_up(value),
                percentage: percentage_of(value, future_value),
            }
        })
        .collect();

    Ok(LumpsumResult {
        invested_amount: round_half_up(input.amount),
        estimated_returns: round_half_up(future_value - input.amount),
        total_value: round_half_up(future_value),
        yearly_data,
    })
}

impl Calculator for LumpsumInput {
    type Output = LumpsumResult;

    fn calculate(&self) -> Result<LumpsumResult> {
        calculate_lumpsum(self)
    }
}
