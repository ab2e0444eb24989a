//! Future cost of today's amount under steady inflation

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::error::Result;
use crate::formulas::{lump_sum_future_value, percentage_of, round_half_up};
use crate::inputs::{InflationInput, Validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InflationYear {
    pub year: u32,
    pub value: i64,
    pub percentage: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InflationResult {
    pub future_value: i64,
    pub yearly_data: Vec<InflationYear>,
}

impl InflationResult {
    /// How much of today's purchasing power `amount` loses by the horizon
    pub fn purchasing_power_loss_percent(&self, amount: f64) -> i64 {
        round_half_up((1.0 - amount / self.future_value as f64) * 100.0)
    }
}

pub fn calculate_inflation(input: &InflationInput) -> Result<InflationResult> {
    input.validate()?;

    let future_value = lump_sum_future_value(input.amount, input.rate_percent, input.years);

    let yearly_data = (1..=input.years)
        .map(|year| {
            let value = lump_sum_future_value(input.amount, input.rate_percent, year);
            InflationYear {
                year,
                value: round_half_up(value),
                percentage: percentage_of(value, future_value),
            }
        })
        .collect();

    Ok(InflationResult {
        future_value: round_half_up(future_value),
        yearly_data,
    })
}

impl Calculator for InflationInput {
    type Output = InflationResult;

    fn calculate(&self) -> Result<InflationResult> {
        calculate_inflation(self)
    }
}
