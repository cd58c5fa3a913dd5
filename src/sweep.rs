//! Break-even horizon sweep
//!
//! Re-runs one input set over a range of horizons. A longer horizon lowers
//! the yearly recovery cost, so the sweep shows how far out the break-even
//! target has to move before the required CTC becomes realistic.

use rayon::prelude::*;

use crate::calculator::{InputSet, ResultSet, SalaryCalculator};
use crate::error::{Error, InvalidInputError, Result};

/// Most horizons a stepped sweep will evaluate
pub const MAX_SWEEP_POINTS: usize = 10_000;

/// Result for one horizon
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    pub break_even_years: f64,
    pub outcome: std::result::Result<ResultSet, InvalidInputError>,
}

impl SweepPoint {
    pub fn gross_salary(&self) -> Option<f64> {
        self.outcome.as_ref().ok().map(|r| r.gross_salary)
    }
}

/// Base inputs evaluated over many horizons
///
/// # Example
/// ```
/// use fresher_salary::{InputSet, HorizonSweep};
///
/// let base = InputSet::new(1_000_000.0, 4.0, 30_000.0, 15.0);
/// let sweep = HorizonSweep::stepped(base, 1.0, 6.0, 1.0)?;
/// let points = sweep.run();
/// assert_eq!(points.len(), 6);
/// # Ok::<(), fresher_salary::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct HorizonSweep {
    base: InputSet,
    horizons: Vec<f64>,
}

impl HorizonSweep {
    pub fn new(base: InputSet, horizons: Vec<f64>) -> Self {
        Self { base, horizons }
    }

    /// Horizons from `from` to `to` inclusive in steps of `step`.
    /// A non-positive step yields just `from`. Fails when the range holds
    /// more than [`MAX_SWEEP_POINTS`] horizons.
    pub fn stepped(base: InputSet, from: f64, to: f64, step: f64) -> Result<Self> {
        let mut horizons = Vec::new();
        if step > 0.0 {
            // Number of steps after `from`; NaN or negative means no horizons
            let count = ((to - from) / step + 1e-9).floor();
            if count >= MAX_SWEEP_POINTS as f64 {
                return Err(Error::SweepTooLarge { from, to, step, max: MAX_SWEEP_POINTS });
            }
            if count >= 0.0 {
                horizons.extend((0..=count as usize).map(|i| from + i as f64 * step));
            }
        } else {
            horizons.push(from);
        }
        Ok(Self::new(base, horizons))
    }

    pub fn horizons(&self) -> &[f64] {
        &self.horizons
    }

    /// Evaluate every horizon in parallel; output keeps the horizon order
    pub fn run(&self) -> Vec<SweepPoint> {
        log::debug!("Sweeping {} horizons", self.horizons.len());

        self.horizons
            .par_iter()
            .map(|&years| {
                let input = InputSet {
                    break_even_years: years,
                    ..self.base
                };
                SweepPoint {
                    break_even_years: years,
                    outcome: SalaryCalculator::compute(input),
                }
            })
            .collect()
    }

    /// Shortest horizon among already computed points whose gross salary
    /// stays within `max_gross`
    pub fn first_affordable(points: &[SweepPoint], max_gross: f64) -> Option<&SweepPoint> {
        points
            .iter()
            .filter(|p| p.gross_salary().map(|g| g <= max_gross).unwrap_or(false))
            .min_by(|a, b| a.break_even_years.total_cmp(&b.break_even_years))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> InputSet {
        InputSet::new(1_000_000.0, 4.0, 30_000.0, 15.0)
    }

    #[test]
    fn test_stepped_horizons() {
        let sweep = HorizonSweep::stepped(base(), 0.5, 2.0, 0.5).unwrap();
        assert_eq!(sweep.horizons(), &[0.5, 1.0, 1.5, 2.0]);

        let single = HorizonSweep::stepped(base(), 3.0, 10.0, 0.0).unwrap();
        assert_eq!(single.horizons(), &[3.0]);

        let empty = HorizonSweep::stepped(base(), 5.0, 1.0, 1.0).unwrap();
        assert!(empty.horizons().is_empty());
    }

    #[test]
    fn test_oversized_range_rejected() {
        let err = HorizonSweep::stepped(base(), 1.0, 1e300, 1.0).unwrap_err();
        assert!(matches!(err, Error::SweepTooLarge { max: MAX_SWEEP_POINTS, .. }));

        assert!(HorizonSweep::stepped(base(), 1.0, f64::INFINITY, 1.0).is_err());

        // Exactly at the limit still works
        let sweep = HorizonSweep::stepped(base(), 1.0, MAX_SWEEP_POINTS as f64, 1.0).unwrap();
        assert_eq!(sweep.horizons().len(), MAX_SWEEP_POINTS);
    }

    #[test]
    fn test_longer_horizon_lowers_salary() {
        let points = HorizonSweep::stepped(base(), 1.0, 8.0, 1.0).unwrap().run();
        assert_eq!(points.len(), 8);
        for pair in points.windows(2) {
            assert!(pair[0].break_even_years < pair[1].break_even_years);
            assert!(pair[0].gross_salary().unwrap() > pair[1].gross_salary().unwrap());
        }
    }

    #[test]
    fn test_invalid_horizon_reported_per_point() {
        let points = HorizonSweep::new(base(), vec![0.0, 4.0]).run();
        assert!(points[0].outcome.is_err());
        assert!(points[1].outcome.is_ok());
    }

    #[test]
    fn test_first_affordable() {
        let points = HorizonSweep::stepped(base(), 1.0, 10.0, 1.0).unwrap().run();
        // 4 years -> 717,647.06; 3 years -> ~815,686
        let point = HorizonSweep::first_affordable(&points, 720_000.0).unwrap();
        assert_eq!(point.break_even_years, 4.0);

        assert!(HorizonSweep::first_affordable(&points, 100_000.0).is_none());
    }
}
