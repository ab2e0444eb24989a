//! Scenario runner for batches and sensitivity sweeps
//!
//! Every calculator call is independent, so batches are evaluated in
//! parallel and returned in input order.

use log::{debug, warn};
use rayon::prelude::*;

use crate::calculators::{Calculator, ProjectionResult};
use crate::config::CalculatorDefaults;
use crate::error::Result;
use crate::inputs::{CalculatorInput, CalculatorKind};

/// One point of a sensitivity sweep
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint<T> {
    pub parameter: T,
    pub result: Result<ProjectionResult>,
}

/// Runs calculator requests against a set of defaults
///
/// # Example
/// ```
/// use financial_projection::{CalculatorKind, ScenarioRunner};
///
/// let runner = ScenarioRunner::new();
/// let sip = runner.defaults().input_for(CalculatorKind::Sip);
/// for point in runner.rate_sweep(&sip, &[8.0, 10.0, 12.0]) {
///     let (_, total) = point.result.unwrap().headline();
///     println!("{}% -> {}", point.parameter, total);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    defaults: CalculatorDefaults,
}

impl ScenarioRunner {
    /// Runner over the built-in defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(defaults: CalculatorDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &CalculatorDefaults {
        &self.defaults
    }

    /// Run a single request
    pub fn run(&self, input: &CalculatorInput) -> Result<ProjectionResult> {
        input.calculate()
    }

    /// Run the default input for one calculator
    pub fn run_default(&self, kind: CalculatorKind) -> Result<ProjectionResult> {
        self.run(&self.defaults.input_for(kind))
    }

    /// Run many requests in parallel; failures stay in their slot
    pub fn run_batch(&self, inputs: &[CalculatorInput]) -> Vec<Result<ProjectionResult>> {
        debug!("Running batch of {} calculator requests", inputs.len());

        let results: Vec<Result<ProjectionResult>> =
            inputs.par_iter().map(|input| input.calculate()).collect();

        for (idx, result) in results.iter().enumerate() {
            if let Err(err) = result {
                warn!("Request {} ({}) rejected: {}", idx + 1, inputs[idx].kind(), err);
            }
        }

        results
    }

    /// Re-run `input` with each primary rate in `rates`
    pub fn rate_sweep(&self, input: &CalculatorInput, rates: &[f64]) -> Vec<SweepPoint<f64>> {
        debug!("Rate sweep for {} over {} rates", input.kind(), rates.len());
        rates
            .par_iter()
            .map(|&rate| SweepPoint {
                parameter: rate,
                result: input.with_rate(rate).calculate(),
            })
            .collect()
    }

    /// Re-run `input` with each horizon in `durations`
    pub fn duration_sweep(
        &self,
        input: &CalculatorInput,
        durations: &[u32],
    ) -> Vec<SweepPoint<u32>> {
        debug!("Duration sweep for {} over {} horizons", input.kind(), durations.len());
        durations
            .par_iter()
            .map(|&years| SweepPoint {
                parameter: years,
                result: input.with_duration(years).calculate(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{LumpsumInput, SipInput};

    #[test]
    fn test_batch_preserves_order_and_failures() {
        let runner = ScenarioRunner::new();
        let mut inputs = runner.defaults().all_inputs();
        inputs.insert(2, CalculatorInput::Sip(SipInput::new(5_000.0, 12.0, 0)));

        let results = runner.run_batch(&inputs);
        assert_eq!(results.len(), 8);
        assert!(results[2].is_err());
        for (input, result) in inputs.iter().zip(&results) {
            if let Ok(result) = result {
                assert_eq!(result.kind(), input.kind());
            }
        }
        assert_eq!(results[0].as_ref().unwrap().headline().1, 1_161_695);
    }

    #[test]
    fn test_rate_sweep_is_monotonic_for_lumpsum() {
        let runner = ScenarioRunner::new();
        let input = CalculatorInput::Lumpsum(LumpsumInput::default());
        let points = runner.rate_sweep(&input, &[6.0, 8.0, 10.0, 12.0]);

        let totals: Vec<i64> = points
            .iter()
            .map(|p| p.result.as_ref().unwrap().headline().1)
            .collect();
        assert_eq!(points[2].parameter, 10.0);
        assert_eq!(totals[2], 161_051);
        assert!(totals.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_duration_sweep_reports_invalid_horizon() {
        let runner = ScenarioRunner::new();
        let input = runner.defaults().input_for(CalculatorKind::Ppf);
        let points = runner.duration_sweep(&input, &[0, 15, 20]);
        assert!(points[0].result.is_err());
        assert_eq!(points[1].result.as_ref().unwrap().yearly_len(), 15);
        assert_eq!(points[2].result.as_ref().unwrap().yearly_len(), 20);
    }

    #[test]
    fn test_duration_sweep_rejects_unbounded_horizon() {
        let runner = ScenarioRunner::new();
        for kind in CalculatorKind::ALL {
            let input = runner.defaults().input_for(kind);
            let points = runner.duration_sweep(&input, &[u32::MAX]);
            assert!(points[0].result.is_err(), "{} accepted u32::MAX years", kind);
        }
    }

    #[test]
    fn test_run_default_uses_configured_defaults() {
        let mut defaults = CalculatorDefaults::default();
        defaults.lumpsum = LumpsumInput::new(200_000.0, 10.0, 5);
        let runner = ScenarioRunner::with_defaults(defaults);
        let result = runner.run_default(CalculatorKind::Lumpsum).unwrap();
        assert_eq!(result.headline().1, 322_102);
    }
}
