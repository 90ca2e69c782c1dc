//! Narrative overlay applied on top of simulated series.
//!
//! Rules run in declaration order against the current value of their target,
//! so two rules covering the same (metric, year) multiply together. The pass
//! is a pure transformation: it takes the simulated series by value and
//! returns the adjusted ones.

use crate::error::GenerationError;
use crate::model::OverlayRule;
use crate::simulator::SimulatedSeries;
use crate::years::YearAxis;

/// An ordered table of overlay rules
#[derive(Debug, Clone, Copy)]
pub struct EventOverlay<'a> {
    rules: &'a [OverlayRule],
}

impl<'a> EventOverlay<'a> {
    #[must_use]
    pub fn new(rules: &'a [OverlayRule]) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &'a [OverlayRule] {
        self.rules
    }

    /// Fail on the first rule whose target is not among `names`
    pub fn check_targets(&self, names: &[&str]) -> Result<(), GenerationError> {
        for rule in self.rules {
            if !names.contains(&rule.metric.as_str()) {
                return Err(GenerationError::IncompleteProfile {
                    rule: rule.label.clone(),
                    metric: rule.metric.clone(),
                });
            }
        }
        Ok(())
    }

    /// Apply every rule, in order, to series aligned with `axis`.
    ///
    /// All targets are resolved before the first adjustment, so a missing
    /// metric never leaves a half-adjusted result behind.
    pub fn apply(
        &self,
        axis: &YearAxis,
        series: Vec<SimulatedSeries>,
    ) -> Result<Vec<SimulatedSeries>, GenerationError> {
        let targets = self
            .rules
            .iter()
            .map(|rule| {
                series
                    .iter()
                    .position(|s| s.name == rule.metric)
                    .ok_or_else(|| GenerationError::IncompleteProfile {
                        rule: rule.label.clone(),
                        metric: rule.metric.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut adjusted = series;
        for (rule, &target) in self.rules.iter().zip(&targets) {
            let values = &mut adjusted[target].values;
            let mut touched = 0usize;
            for (value, year) in values.iter_mut().zip(axis.iter()) {
                if let Some(factor) = rule.factor(year) {
                    *value *= factor;
                    touched += 1;
                }
            }
            tracing::debug!(
                rule = %rule.label,
                metric = %rule.metric,
                years = touched,
                "applied overlay rule"
            );
        }

        Ok(adjusted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FiscalYear, MetricCategory, YearWindow};

    fn series(name: &str, values: Vec<f64>) -> SimulatedSeries {
        SimulatedSeries {
            name: name.into(),
            category: MetricCategory::Expense,
            values,
        }
    }

    #[test]
    fn test_overlapping_rules_multiply_in_order() {
        let axis = YearAxis::new(2020, 2021).unwrap();
        let rules = vec![
            OverlayRule::scale("a", "Fonctionnement", YearWindow::between(2020, 2021), 1.05),
            OverlayRule::scale("b", "Fonctionnement", YearWindow::between(2021, 2021), 2.0),
        ];
        let out = EventOverlay::new(&rules)
            .apply(&axis, vec![series("Fonctionnement", vec![10.0, 10.0])])
            .unwrap();
        assert!((out[0].values[0] - 10.5).abs() < 1e-12);
        assert!((out[0].values[1] - 21.0).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_target_is_incomplete_profile() {
        let axis = YearAxis::new(2020, 2021).unwrap();
        let rules = vec![OverlayRule::ramp("Culture", "Investissement_Culture", 2012, 0.03)];
        let err = EventOverlay::new(&rules)
            .apply(&axis, vec![series("Fonctionnement", vec![1.0, 1.0])])
            .unwrap_err();
        assert_eq!(
            err,
            GenerationError::IncompleteProfile {
                rule: "Culture".into(),
                metric: "Investissement_Culture".into(),
            }
        );
    }

    #[test]
    fn test_check_targets_accepts_known_metrics() {
        let rules = vec![OverlayRule::ramp("Vieillissement", "Fonctionnement", 2010, 0.01)];
        let overlay = EventOverlay::new(&rules);
        assert!(overlay.check_targets(&["Population", "Fonctionnement"]).is_ok());
        assert!(overlay.check_targets(&["Population"]).is_err());
    }

    #[test]
    fn test_empty_overlay_is_identity() {
        let axis = YearAxis::new(2002, 2003).unwrap();
        let input = vec![series("Personnel", vec![9.0, 9.234])];
        let out = EventOverlay::new(&[]).apply(&axis, input.clone()).unwrap();
        assert_eq!(out, input);
        assert_eq!(axis.start(), FiscalYear(2002));
    }
}
