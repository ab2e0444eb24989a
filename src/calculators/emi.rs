//! Equated monthly instalment with a yearly amortization schedule

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::error::Result;
use crate::formulas::{emi_payment, monthly_rate, percentage_of, round_half_up, AmortizationStep};
use crate::inputs::{EmiInput, Validate};

/// Principal and interest paid during one loan year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmiYear {
    pub year: u32,
    pub principal_paid: i64,
    pub interest_paid: i64,
    /// Outstanding balance at year end, floored at zero
    pub remaining_balance: i64,
    /// Share of the original principal repaid so far
    pub percentage: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmiResult {
    pub emi: i64,
    pub total_interest: i64,
    pub total_payment: i64,
    pub yearly_data: Vec<EmiYear>,
}

impl EmiResult {
    /// Principal as a share of everything paid over the loan
    pub fn principal_share_percent(&self, principal: f64) -> i64 {
        percentage_of(principal, self.total_payment as f64)
    }

    /// Interest as a share of everything paid over the loan
    pub fn interest_share_percent(&self) -> i64 {
        percentage_of(self.total_interest as f64, self.total_payment as f64)
    }
}

/// Compute the EMI and walk the loan month by month
///
/// A snapshot is emitted every 12 months and at the final month, so the
/// yearly principal/interest split follows the actual reducing balance.
pub fn calculate_emi(input: &EmiInput) -> Result<EmiResult> {
    input.validate()?;

    let rate = monthly_rate(input.annual_rate_percent);
    let months = input.months();
    let emi = emi_payment(input.principal, rate, months);
    let total_payment = emi * months as f64;
    let total_interest = total_payment - input.principal;

    let mut balance = input.principal;
    let mut year_principal = 0.0;
    let mut year_interest = 0.0;
    let mut yearly_data = Vec::with_capacity(input.years as usize);

    for month in 1..=months {
        let step = AmortizationStep::apply(balance, rate, emi);
        balance = step.closing_balance;
        year_principal += step.principal;
        year_interest += step.interest;

        if month % 12 == 0 || month == months {
            yearly_data.push(EmiYear {
                year: month.div_ceil(12),
                principal_paid: round_half_up(year_principal),
                interest_paid: round_half_up(year_interest),
                remaining_balance: round_half_up(balance).max(0),
                percentage: percentage_of(input.principal - balance, input.principal),
            });
            year_principal = 0.0;
            year_interest = 0.0;
        }
    }

    Ok(EmiResult {
        emi: round_half_up(emi),
        total_interest: round_half_up(total_interest),
        total_payment: round_half_up(total_payment),
        yearly_data,
    })
}

impl Calculator for EmiInput {
    type Output = EmiResult;

    fn calculate(&self) -> Result<EmiResult> {
        calculate_emi(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scenario() {
        let r = calculate_emi(&EmiInput::new(2_000_000.0, 9.0, 20)).unwrap();
        assert_eq!(r.emi, 17_995);
        assert_eq!(r.total_interest, 2_318_685);
        assert_eq!(r.total_payment, 4_318_685);
        assert_eq!(r.yearly_data.len(), 20);

        assert_eq!(
            r.yearly_data[0],
            EmiYear {
                year: 1,
                principal_paid: 37_454,
                interest_paid: 178_480,
                remaining_balance: 1_962_546,
                percentage: 2,
            }
        );

        let last = r.yearly_data.last().unwrap();
        assert_eq!(last.year, 20);
        assert_eq!(last.remaining_balance, 0);
        assert_eq!(last.percentage, 100);
    }

    #[test]
    fn test_balance_strictly_decreases() {
        let r = calculate_emi(&EmiInput::default()).unwrap();
        assert!(r
            .yearly_data
            .windows(2)
            .all(|w| w[1].remaining_balance < w[0].remaining_balance));
    }

    #[test]
    fn test_payment_identities() {
        let loans = [(500_000.0, 8.5, 5), (75_000.0, 15.0, 3), (2_500_000.0, 7.2, 30)];
        for (principal, rate, years) in loans {
            let input = EmiInput::new(principal, rate, years);
            let r = calculate_emi(&input).unwrap();
            let months = input.months() as i64;
            // emi is rounded before multiplying, so allow one unit per month
            assert!((r.total_payment - r.emi * months).abs() <= months);
            assert!((r.total_interest - (r.total_payment - principal as i64)).abs() <= 1);

            let principal_paid: i64 = r.yearly_data.iter().map(|y| y.principal_paid).sum();
            assert!((principal_paid - principal as i64).abs() <= years as i64);
        }
    }

    #[test]
    fn test_single_year_loan() {
        let r = calculate_emi(&EmiInput::new(100_000.0, 12.0, 1)).unwrap();
        assert_eq!(r.emi, 8_885);
        assert_eq!(r.total_interest, 6_619);
        assert_eq!(r.yearly_data.len(), 1);
        assert_eq!(r.yearly_data[0].principal_paid, 100_000);
        assert_eq!(r.yearly_data[0].interest_paid, 6_619);
    }

    #[test]
    fn test_payment_shares() {
        let input = EmiInput::default();
        let r = calculate_emi(&input).unwrap();
        assert_eq!(r.principal_share_percent(input.principal), 46);
        assert_eq!(r.interest_share_percent(), 54);
    }
}
