//! Municipal profiles: the configuration record consumed by generation.
//!
//! A profile is pure data. Two municipalities differ only in the numbers and
//! rule tables they carry, never in code paths.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::ConfigIssue;
use crate::model::{FiscalYear, OverlayRule};

/// Grouping used by reporters to pick columns without naming them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricCategory {
    Demography,
    Revenue,
    Expense,
    Indicator,
    /// Municipality-specific investment breakdown
    Investment,
}

/// Shape of a metric's deterministic multiplier.
///
/// Both shapes are linear in time, never compounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Trend {
    /// `1 + rate * i` where `i` is the index of the year in the axis
    Linear { rate: f64 },
    /// `1 + rate * max(0, year - threshold)`, flat before the threshold
    FromYear { rate: f64, threshold: FiscalYear },
}

impl Trend {
    /// Multiplier for the year at position `index` in the axis
    #[must_use]
    pub fn factor(&self, index: usize, year: FiscalYear) -> f64 {
        match *self {
            Trend::Linear { rate } => 1.0 + rate * index as f64,
            Trend::FromYear { rate, threshold } => {
                let elapsed = year.years_since(threshold).max(0);
                1.0 + rate * f64::from(elapsed)
            }
        }
    }

    #[must_use]
    pub fn rate(&self) -> f64 {
        match *self {
            Trend::Linear { rate } | Trend::FromYear { rate, .. } => rate,
        }
    }
}

impl Default for Trend {
    fn default() -> Self {
        Trend::Linear { rate: 0.0 }
    }
}

/// Generation recipe for one dataset column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDefinition {
    /// Column name in the produced dataset
    pub name: String,
    pub category: MetricCategory,
    /// Value at the first year of the axis, before shocks and noise
    pub baseline: f64,
    #[serde(default)]
    pub trend: Trend,
    /// Standard deviation of the multiplicative `Normal(1, sigma)` noise
    #[serde(default)]
    pub noise_sigma: f64,
    /// Sparse year -> multiplier overrides; unlisted years use 1.0
    #[serde(default)]
    pub shock_years: BTreeMap<FiscalYear, f64>,
}

impl MetricDefinition {
    #[must_use]
    pub fn shock(&self, year: FiscalYear) -> f64 {
        self.shock_years.get(&year).copied().unwrap_or(1.0)
    }

    /// Value with noise fixed at 1.0
    #[must_use]
    pub fn closed_form(&self, index: usize, year: FiscalYear) -> f64 {
        self.baseline * self.trend.factor(index, year) * self.shock(year)
    }

    fn validate(&self) -> Result<(), ConfigIssue> {
        if !self.noise_sigma.is_finite() || self.noise_sigma < 0.0 {
            return Err(ConfigIssue::InvalidNoise {
                metric: self.name.clone(),
                sigma: self.noise_sigma,
            });
        }
        if !self.baseline.is_finite() {
            return Err(ConfigIssue::NonFiniteParameter {
                metric: self.name.clone(),
                field: "baseline",
            });
        }
        if !self.trend.rate().is_finite() {
            return Err(ConfigIssue::NonFiniteParameter {
                metric: self.name.clone(),
                field: "growth rate",
            });
        }
        if let Some((&year, &multiplier)) = self.shock_years.iter().find(|(_, m)| !m.is_finite())
        {
            return Err(ConfigIssue::InvalidShock {
                metric: self.name.clone(),
                year,
                multiplier,
            });
        }
        Ok(())
    }
}

/// Narrative text printed alongside the statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Narrative {
    #[serde(default)]
    pub milestones: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Everything that distinguishes one municipality from another
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MunicipalProfile {
    /// Display name ("Saint-Denis")
    pub name: String,
    /// File-name friendly identifier ("saint_denis")
    pub slug: String,
    /// Metric recipes, in column order
    pub metrics: Vec<MetricDefinition>,
    /// Overlay rules, applied in this exact order
    #[serde(default)]
    pub overlay: Vec<OverlayRule>,
    #[serde(default)]
    pub narrative: Narrative,
}

impl MunicipalProfile {
    /// Find a metric definition by column name
    #[must_use]
    pub fn metric(&self, name: &str) -> Option<&MetricDefinition> {
        self.metrics.iter().find(|m| m.name == name)
    }

    pub fn metric_names(&self) -> impl Iterator<Item = &str> {
        self.metrics.iter().map(|m| m.name.as_str())
    }

    /// Check every metric and rule for malformed parameters.
    ///
    /// Overlay targets are not checked here; a rule naming an unknown metric
    /// is an incomplete profile, reported by the assembler.
    pub fn validate(&self) -> Result<(), ConfigIssue> {
        if self.metrics.is_empty() {
            return Err(ConfigIssue::NoMetrics);
        }

        let mut seen = HashSet::with_capacity(self.metrics.len());
        for metric in &self.metrics {
            if !seen.insert(metric.name.as_str()) {
                return Err(ConfigIssue::DuplicateMetric(metric.name.clone()));
            }
            metric.validate()?;
        }

        for rule in &self.overlay {
            rule.validate()?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(name: &str) -> MetricDefinition {
        MetricDefinition {
            name: name.to_string(),
            category: MetricCategory::Revenue,
            baseline: 10.0,
            trend: Trend::Linear { rate: 0.02 },
            noise_sigma: 0.0,
            shock_years: BTreeMap::new(),
        }
    }

    #[test]
    fn test_linear_trend_uses_axis_index() {
        let trend = Trend::Linear { rate: 0.03 };
        assert!((trend.factor(0, FiscalYear(2002)) - 1.0).abs() < 1e-12);
        assert!((trend.factor(2, FiscalYear(2004)) - 1.06).abs() < 1e-12);
    }

    #[test]
    fn test_threshold_trend_is_flat_before_threshold() {
        let trend = Trend::FromYear {
            rate: 0.01,
            threshold: FiscalYear(2005),
        };
        assert_eq!(trend.factor(0, FiscalYear(2002)), 1.0);
        assert_eq!(trend.factor(3, FiscalYear(2005)), 1.0);
        assert!((trend.factor(8, FiscalYear(2010)) - 1.05).abs() < 1e-12);
    }

    #[test]
    fn test_negative_threshold_rate_declines() {
        let trend = Trend::FromYear {
            rate: -0.02,
            threshold: FiscalYear(2010),
        };
        assert!((trend.factor(13, FiscalYear(2015)) - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_empty_profile() {
        let profile = MunicipalProfile {
            name: "Vide".into(),
            slug: "vide".into(),
            metrics: vec![],
            overlay: vec![],
            narrative: Narrative::default(),
        };
        assert_eq!(profile.validate(), Err(ConfigIssue::NoMetrics));
    }

    #[test]
    fn test_validate_rejects_negative_sigma() {
        let mut bad = metric("Recettes_Totales");
        bad.noise_sigma = -0.1;
        let profile = MunicipalProfile {
            name: "Test".into(),
            slug: "test".into(),
            metrics: vec![bad],
            overlay: vec![],
            narrative: Narrative::default(),
        };
        assert!(matches!(
            profile.validate(),
            Err(ConfigIssue::InvalidNoise { sigma, .. }) if sigma == -0.1
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_names() {
        let profile = MunicipalProfile {
            name: "Test".into(),
            slug: "test".into(),
            metrics: vec![metric("Population"), metric("Population")],
            overlay: vec![],
            narrative: Narrative::default(),
        };
        assert_eq!(
            profile.validate(),
            Err(ConfigIssue::DuplicateMetric("Population".into()))
        );
    }
}
