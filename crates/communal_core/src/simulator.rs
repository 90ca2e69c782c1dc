//! Per-metric series simulation.
//!
//! For the year at index `i`:
//!
//! ```text
//! value(year) = baseline * trend(i, year) * shock(year) * noise
//! ```
//!
//! where `trend` is either linear in `i` or a ramp from a threshold year (see
//! [`Trend`](crate::model::Trend)). Growth is never compounded.

use crate::error::{ConfigIssue, GenerationError};
use crate::model::{MetricCategory, MetricDefinition};
use crate::noise::NoiseSource;
use crate::years::YearAxis;

/// One simulated metric, aligned with the axis it was generated on
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedSeries {
    pub name: String,
    pub category: MetricCategory,
    pub values: Vec<f64>,
}

/// Simulate one metric over `axis`.
///
/// Noise is drawn once per year in ascending year order. A negative or
/// non-finite sigma fails before the first draw.
pub fn simulate_metric<N: NoiseSource + ?Sized>(
    metric: &MetricDefinition,
    axis: &YearAxis,
    noise: &mut N,
) -> Result<SimulatedSeries, GenerationError> {
    if !metric.noise_sigma.is_finite() || metric.noise_sigma < 0.0 {
        return Err(ConfigIssue::InvalidNoise {
            metric: metric.name.clone(),
            sigma: metric.noise_sigma,
        }
        .into());
    }

    let mut values = Vec::with_capacity(axis.len());
    for (index, year) in axis.indexed() {
        let multiplier = noise.multiplier(&metric.name, metric.noise_sigma)?;
        values.push(metric.closed_form(index, year) * multiplier);
    }

    tracing::debug!(
        metric = %metric.name,
        years = values.len(),
        first = values.first().copied().unwrap_or_default(),
        last = values.last().copied().unwrap_or_default(),
        "simulated metric"
    );

    Ok(SimulatedSeries {
        name: metric.name.clone(),
        category: metric.category,
        values,
    })
}

/// Simulate every metric of a profile, in declaration order
pub fn simulate_all<'a, N, I>(
    metrics: I,
    axis: &YearAxis,
    noise: &mut N,
) -> Result<Vec<SimulatedSeries>, GenerationError>
where
    N: NoiseSource + ?Sized,
    I: IntoIterator<Item = &'a MetricDefinition>,
{
    metrics
        .into_iter()
        .map(|metric| simulate_metric(metric, axis, noise))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::model::{FiscalYear, Trend};
    use crate::noise::{GaussianNoise, Silent};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn metric(trend: Trend, sigma: f64) -> MetricDefinition {
        MetricDefinition {
            name: "Charge_Dette".into(),
            category: MetricCategory::Expense,
            baseline: 2.0,
            trend,
            noise_sigma: sigma,
            shock_years: BTreeMap::new(),
        }
    }

    #[test]
    fn test_threshold_variant_matches_closed_form() {
        let axis = YearAxis::new(2003, 2007).unwrap();
        let def = metric(
            Trend::FromYear {
                rate: 0.01,
                threshold: FiscalYear(2005),
            },
            0.0,
        );

        let series = simulate_metric(&def, &axis, &mut Silent).unwrap();
        let expected = [2.0, 2.0, 2.0, 2.02, 2.04];
        for (got, want) in series.values.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12, "expected {want}, got {got}");
        }
    }

    #[test]
    fn test_negative_sigma_fails_before_sampling() {
        let axis = YearAxis::new(2002, 2004).unwrap();
        let def = metric(Trend::Linear { rate: 0.0 }, -0.05);
        let mut rng = SmallRng::seed_from_u64(3);
        let err = simulate_metric(&def, &axis, &mut GaussianNoise::new(&mut rng)).unwrap_err();
        assert!(matches!(
            err,
            GenerationError::InvalidConfig(ConfigIssue::InvalidNoise { .. })
        ));
    }

    #[test]
    fn test_noise_stays_multiplicative() {
        let axis = YearAxis::new(2002, 2025).unwrap();
        let def = metric(Trend::Linear { rate: 0.02 }, 0.08);
        let mut rng = SmallRng::seed_from_u64(11);
        let series = simulate_metric(&def, &axis, &mut GaussianNoise::new(&mut rng)).unwrap();

        assert_eq!(series.values.len(), 24);
        for ((index, year), value) in axis.indexed().zip(&series.values) {
            let ratio = value / def.closed_form(index, year);
            assert!(
                (ratio - 1.0).abs() < 0.5,
                "noise ratio {ratio} in {year} is implausible for sigma 0.08"
            );
        }
    }
}
