//! Retirement corpus: present value of inflated post-retirement expenses

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::error::Result;
use crate::formulas::{compound_growth, percentage_of, present_value_annuity_factor, round_half_up};
use crate::inputs::{RetirementInput, Validate};

/// Share of the corpus an advisor suggests building through a level SIP
const SIP_SUGGESTION_FACTOR: f64 = 0.4;

/// Drawdown position at the start of a retirement year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementYear {
    pub year: u32,
    pub age: u32,
    /// Corpus still needed to fund the remaining years
    pub corpus: i64,
    /// Annual expense for this year after inflation
    pub expense: i64,
    /// Remaining corpus as a share of the corpus at retirement
    pub percentage: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementResult {
    pub corpus_required: i64,
    pub yearly_data: Vec<RetirementYear>,
}

impl RetirementResult {
    /// Rough monthly SIP figure shown next to the corpus
    ///
    /// `corpus / (years_to_retirement * 12) * 0.4`, rounded.
    pub fn suggested_monthly_sip(&self, years_to_retirement: u32) -> i64 {
        if years_to_retirement == 0 {
            return 0;
        }
        let months = f64::from(years_to_retirement) * 12.0;
        round_half_up(self.corpus_required as f64 / months * SIP_SUGGESTION_FACTOR)
    }
}

/// Corpus required at retirement to pay the inflated yearly expense until
/// life expectancy, discounted at the post-retirement return.
pub fn calculate_retirement(input: &RetirementInput) -> Result<RetirementResult> {
    input.validate()?;

    let years_to_retirement = input.years_to_retirement();
    let years_in_retirement = input.years_in_retirement();
    let inflation = input.inflation_percent / 100.0;

    let inflation_factor = compound_growth(inflation, years_to_retirement as f64);
    let future_monthly_expense = input.monthly_expense * inflation_factor;
    let annual_expense_at_retirement = future_monthly_expense * 12.0;

    let rate = input.return_percent / 100.0;
    let discount_factor = present_value_annuity_factor(rate, years_in_retirement);
    let corpus_required = annual_expense_at_retirement * discount_factor;

    let yearly_data = (0..years_in_retirement)
        .map(|elapsed| {
            let year = elapsed + 1;
            let remaining_factor =
                present_value_annuity_factor(rate, years_in_retirement - elapsed);
            let remaining_corpus = corpus_required
                * (1.0 - (discount_factor - remaining_factor) / discount_factor);
            RetirementYear {
                year,
                age: input.retirement_age + year,
                corpus: round_half_up(remaining_corpus),
                expense: round_half_up(
                    annual_expense_at_retirement * compound_growth(inflation, year as f64),
                ),
                percentage: percentage_of(remaining_corpus, corpus_required),
            }
        })
        .collect();

    Ok(RetirementResult {
        corpus_required: round_half_up(corpus_required),
        yearly_data,
    })
}

impl Calculator for RetirementInput {
    type Output = RetirementResult;

    fn calculate(&self) -> Result<RetirementResult> {
        calculate_retirement(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scenario() {
        let input = RetirementInput::new(30, 60, 85, 50_000.0, 6.0, 10.0);
        let r = calculate_retirement(&input).unwrap();
        assert_eq!(r.corpus_required, 31_280_340);
        assert_eq!(r.yearly_data.len(), 25);

        assert_eq!(
            r.yearly_data[0],
            RetirementYear {
                year: 1,
                age: 61,
                corpus: 31_280_340,
                expense: 3_652_860,
                percentage: 100,
            }
        );
        assert_eq!(r.yearly_data[1].corpus, 30_962_279);
        assert_eq!(r.yearly_data[1].percentage, 99);

        let last = r.yearly_data.last().unwrap();
        assert_eq!(last.age, 85);
        assert_eq!(last.corpus, 3_132_813);
        assert_eq!(last.percentage, 10);
    }

    #[test]
    fn test_only_series_not_ending_at_full_percentage() {
        // drawdown: starts at the full corpus and falls, unlike every other series
        let r = calculate_retirement(&RetirementInput::default()).unwrap();
        assert_eq!(r.yearly_data.first().unwrap().percentage, 100);
        assert_ne!(r.yearly_data.last().unwrap().percentage, 100);
        assert!(r.yearly_data.windows(2).all(|w| w[1].percentage <= w[0].percentage));
    }

    #[test]
    fn test_corpus_draws_down() {
        let r = calculate_retirement(&RetirementInput::default()).unwrap();
        assert!(r.yearly_data.windows(2).all(|w| w[1].corpus < w[0].corpus));
        assert!(r.yearly_data.windows(2).all(|w| w[1].expense > w[0].expense));
    }

    #[test]
    fn test_suggested_sip() {
        let input = RetirementInput::default();
        let r = calculate_retirement(&input).unwrap();
        assert_eq!(r.suggested_monthly_sip(input.years_to_retirement()), 34_756);
        assert_eq!(r.suggested_monthly_sip(0), 0);
    }

    #[test]
    fn test_rejects_bad_age_ordering() {
        let input = RetirementInput::new(60, 60, 85, 50_000.0, 6.0, 10.0);
        let err = calculate_retirement(&input).unwrap_err();
        assert_eq!(err.message(), "retirement age must exceed current age");

        let input = RetirementInput::new(30, 60, 55, 50_000.0, 6.0, 10.0);
        assert!(calculate_retirement(&input).is_err());
    }
}
