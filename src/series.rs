//! Yearly snapshot access and chart sampling

use crate::calculators::{
    EducationYear, EmiYear, InflationYear, LumpsumYear, PpfYear, RetirementYear, SipYear,
};

/// Default number of bars on a yearly chart
pub const DEFAULT_CHART_BARS: usize = 10;

/// One entry of a yearly series
pub trait YearlyPoint {
    /// 1-based year index
    fn year(&self) -> u32;

    /// Rounded percentage of the series' reference value
    fn percentage(&self) -> i64;

    /// Monetary value the bar represents
    fn chart_value(&self) -> i64;
}

macro_rules! yearly_point {
    ($point:ty, $value:ident) => {
        impl YearlyPoint for $point {
            fn year(&self) -> u32 {
                self.year
            }

            fn percentage(&self) -> i64 {
                self.percentage
            }

            fn chart_value(&self) -> i64 {
                self.$value
            }
        }
    };
}

yearly_point!(SipYear, total);
yearly_point!(LumpsumYear, total);
yearly_point!(RetirementYear, corpus);
yearly_point!(EmiYear, remaining_balance);
yearly_point!(PpfYear, balance);
yearly_point!(EducationYear, accumulated);
yearly_point!(InflationYear, value);

/// Thin a series to roughly `max_bars` entries
///
/// Keeps every `ceil(len / max_bars)`-th entry starting with the first, and
/// always keeps the last so the terminal value is shown.
pub fn sample_for_chart<T>(series: &[T], max_bars: usize) -> Vec<&T> {
    if series.is_empty() {
        return Vec::new();
    }
    let step = series.len().div_ceil(max_bars.max(1));
    let last = series.len() - 1;

    series
        .iter()
        .enumerate()
        .filter(|(i, _)| i % step == 0 || *i == last)
        .map(|(_, item)| item)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_series_is_kept_whole() {
        let series: Vec<u32> = (1..=7).collect();
        let sampled: Vec<u32> = sample_for_chart(&series, DEFAULT_CHART_BARS)
            .into_iter()
            .copied()
            .collect();
        assert_eq!(sampled, series);
    }

    #[test]
    fn test_long_series_keeps_stride_and_last() {
        let series: Vec<u32> = (1..=25).collect();
        let sampled: Vec<u32> = sample_for_chart(&series, 10).into_iter().copied().collect();
        // step = ceil(25 / 10) = 3
        assert_eq!(sampled, vec![1, 4, 7, 10, 13, 16, 19, 22, 25]);
    }

    #[test]
    fn test_last_added_when_off_stride() {
        let series: Vec<u32> = (1..=15).collect();
        let sampled: Vec<u32> = sample_for_chart(&series, 10).into_iter().copied().collect();
        assert_eq!(sampled, vec![1, 3, 5, 7, 9, 11, 13, 15]);

        let series: Vec<u32> = (1..=20).collect();
        let sampled: Vec<u32> = sample_for_chart(&series, 10).into_iter().copied().collect();
        assert_eq!(sampled, vec![1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 20]);
    }

    #[test]
    fn test_empty_series() {
        let series: Vec<u32> = Vec::new();
        assert!(sample_for_chart(&series, 10).is_empty());
    }
}
