//! End-to-end tests for the generation pipeline
//!
//! Tests are organized by topic:
//! - `scenarios` - Hand-computed single-metric datasets
//! - `determinism` - Seeding, noise modes and randomness consumption
//! - `overlay_rules` - Window boundaries, rule order, ramps
//! - `builtin_profiles` - Column sets and shape of the built-in municipalities
//! - `batch` - Multi-profile generation

mod batch;
mod builtin_profiles;
mod scenarios;

use crate::config::{MetricBuilder, ProfileBuilder};
use crate::model::MunicipalProfile;

/// Single revenue metric: 25.0 growing 3% of the baseline per year
pub(crate) fn revenue_only() -> MunicipalProfile {
    ProfileBuilder::new("Test")
        .metric(MetricBuilder::revenue("Recettes_Totales", 25.0).linear(0.03))
        .build()
}

pub(crate) fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-9, "{actual:?} vs {expected:?}");
    }
}
