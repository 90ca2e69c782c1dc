//! Metric Builder
//!
//! Fluent construction of a single [`MetricDefinition`].

use std::collections::BTreeMap;

use crate::model::{FiscalYear, MetricCategory, MetricDefinition, Trend};

/// Builder for one metric definition
#[derive(Debug, Clone)]
pub struct MetricBuilder {
    name: String,
    category: MetricCategory,
    baseline: f64,
    trend: Trend,
    noise_sigma: f64,
    shock_years: BTreeMap<FiscalYear, f64>,
}

impl MetricBuilder {
    /// A flat, noise-free metric; refine with the methods below
    #[must_use]
    pub fn new(name: impl Into<String>, category: MetricCategory, baseline: f64) -> Self {
        Self {
            name: name.into(),
            category,
            baseline,
            trend: Trend::default(),
            noise_sigma: 0.0,
            shock_years: BTreeMap::new(),
        }
    }

    // =========================================================================
    // Category presets
    // =========================================================================

    #[must_use]
    pub fn demography(name: impl Into<String>, baseline: f64) -> Self {
        Self::new(name, MetricCategory::Demography, baseline)
    }

    #[must_use]
    pub fn revenue(name: impl Into<String>, baseline: f64) -> Self {
        Self::new(name, MetricCategory::Revenue, baseline)
    }

    #[must_use]
    pub fn expense(name: impl Into<String>, baseline: f64) -> Self {
        Self::new(name, MetricCategory::Expense, baseline)
    }

    #[must_use]
    pub fn indicator(name: impl Into<String>, baseline: f64) -> Self {
        Self::new(name, MetricCategory::Indicator, baseline)
    }

    #[must_use]
    pub fn investment(name: impl Into<String>, baseline: f64) -> Self {
        Self::new(name, MetricCategory::Investment, baseline)
    }

    // =========================================================================
    // Shape
    // =========================================================================

    /// `1 + rate * i` growth over the axis index
    #[must_use]
    pub fn linear(mut self, rate: f64) -> Self {
        self.trend = Trend::Linear { rate };
        self
    }

    /// Flat until `threshold`, then `1 + rate * (year - threshold)`
    #[must_use]
    pub fn from_year(mut self, threshold: i16, rate: f64) -> Self {
        self.trend = Trend::FromYear {
            rate,
            threshold: FiscalYear(threshold),
        };
        self
    }

    /// Standard deviation of the multiplicative noise
    #[must_use]
    pub fn noise(mut self, sigma: f64) -> Self {
        self.noise_sigma = sigma;
        self
    }

    /// Apply `multiplier` in each of `years`.
    ///
    /// A year already given a multiplier keeps it: the first declaration wins.
    #[must_use]
    pub fn shocks(mut self, years: &[i16], multiplier: f64) -> Self {
        for &year in years {
            self.shock_years
                .entry(FiscalYear(year))
                .or_insert(multiplier);
        }
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn build(self) -> MetricDefinition {
        MetricDefinition {
            name: self.name,
            category: self.category,
            baseline: self.baseline,
            trend: self.trend,
            noise_sigma: self.noise_sigma,
            shock_years: self.shock_years,
        }
    }
}

impl From<MetricBuilder> for MetricDefinition {
    fn from(builder: MetricBuilder) -> Self {
        builder.build()
    }
}
