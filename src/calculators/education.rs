//! Education corpus and the monthly SIP needed to reach it

use serde::{Deserialize, Serialize};

use super::Calculator;
use crate::error::Result;
use crate::formulas::{
    compound_growth, monthly_rate, ordinary_annuity_factor, percentage_of, round_half_up,
};
use crate::inputs::{EducationInput, Validate};

/// Inflated cost of one course year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationExpense {
    /// Years from today
    pub year: u32,
    pub expense: i64,
}

/// Savings position at the end of a year before the course starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationYear {
    pub year: u32,
    pub age: u32,
    /// Amount contributed during the year (12 monthly instalments)
    pub investment: i64,
    pub accumulated: i64,
    pub percentage: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationResult {
    pub corpus_required: i64,
    pub monthly_investment: i64,
    pub yearly_data: Vec<EducationYear>,
    pub expense_schedule: Vec<EducationExpense>,
}

/// Corpus needed when the course starts, and the monthly saving to get there
///
/// Each course year's cost is inflated from today and rounded; the rounded
/// costs are discounted back to the first course year at the expected return.
/// Monthly savings are end-of-month (ordinary annuity).
pub fn calculate_education(input: &EducationInput) -> Result<EducationResult> {
    input.validate()?;

    let years_to_education = input.years_to_education();
    let inflation = input.inflation_percent / 100.0;
    let annual_return = input.return_percent / 100.0;

    let expense_schedule: Vec<EducationExpense> = (1..=input.course_duration)
        .map(|course_year| {
            let periods = (years_to_education + course_year - 1) as f64;
            EducationExpense {
                year: years_to_education + course_year,
                expense: round_half_up(input.annual_expense * compound_growth(inflation, periods)),
            }
        })
        .collect();

    let corpus_required: f64 = expense_schedule
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.expense as f64 * (1.0 / compound_growth(annual_return, index as f64))
        })
        .sum();

    let rate = monthly_rate(input.return_percent);
    let months = years_to_education * 12;
    let monthly_investment = corpus_required / ordinary_annuity_factor(rate, months);

    let yearly_data = (1..=years_to_education)
        .map(|year| {
            let accumulated = monthly_investment * ordinary_annuity_factor(rate, year * 12);
            EducationYear {
                year,
                age: input.current_age + year,
                investment: round_half_up(monthly_investment * 12.0),
                accumulated: round_half_up(accumulated),
                percentage: percentage_of(accumulated, corpus_required),
            }
        })
        .collect();

    Ok(EducationResult {
        corpus_required: round_half_up(corpus_required),
        monthly_investment: round_half_up(monthly_investment),
        yearly_data,
        expense_schedule,
    })
}

impl Calculator for EducationInput {
    type Output = EducationResult;

    fn calculate(&self) -> Result<EducationResult> {
        calculate_education(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scenario() {
        let r = calculate_education(&EducationInput::new(5, 18, 4, 500_000.0, 10.0, 12.0)).unwrap();
        assert_eq!(r.corpus_required, 6_721_791);
        assert_eq!(r.monthly_investment, 18_059);

        let expenses: Vec<i64> = r.expense_schedule.iter().map(|e| e.expense).collect();
        assert_eq!(expenses, vec![1_726_136, 1_898_749, 2_088_624, 2_297_486]);
        assert_eq!(r.expense_schedule[0].year, 14);

        assert_eq!(r.yearly_data.len(), 13);
        assert_eq!(
            r.yearly_data[0],
            EducationYear {
                year: 1,
                age: 6,
                investment: 216_710,
                accumulated: 229_036,
                percentage: 3,
            }
        );
        let last = r.yearly_data.last().unwrap();
        assert_eq!(last.age, 18);
        assert_eq!(last.accumulated, r.corpus_required);
        assert_eq!(last.percentage, 100);
    }

    #[test]
    fn test_newborn_horizon() {
        let r = calculate_education(&EducationInput::new(0, 18, 5, 300_000.0, 8.0, 11.0)).unwrap();
        assert_eq!(r.yearly_data.len(), 18);
        assert_eq!(r.expense_schedule.len(), 5);
        assert!(r.yearly_data.windows(2).all(|w| w[1].accumulated > w[0].accumulated));
    }

    #[test]
    fn test_rejects_education_age_not_after_current() {
        let err = calculate_education(&EducationInput::new(18, 18, 4, 500_000.0, 10.0, 12.0))
            .unwrap_err();
        assert_eq!(err.message(), "education age must exceed current age");
    }
}
