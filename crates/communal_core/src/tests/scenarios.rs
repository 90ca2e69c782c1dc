//! Hand-computed single-metric datasets

use super::{assert_close, revenue_only};
use crate::config::{GenerationConfig, MetricBuilder, ProfileBuilder};
use crate::error::GenerationError;
use crate::model::{FiscalYear, YearWindow};
use crate::simulation::{generate_deterministic, generate_seeded};

/// Linear growth, no shocks, no noise
#[test]
fn test_linear_growth_without_noise() {
    let config = GenerationConfig::new(2002, 2004).without_noise();
    let dataset = generate_deterministic(&revenue_only(), &config).unwrap();

    assert_eq!(
        dataset.years(),
        &[FiscalYear(2002), FiscalYear(2003), FiscalYear(2004)]
    );
    assert_close(
        dataset.column("Recettes_Totales").unwrap(),
        &[25.0, 25.75, 26.5],
    );
}

/// A zero sigma gives the same series even with noise enabled
#[test]
fn test_zero_sigma_is_noise_free_with_noise_enabled() {
    let config = GenerationConfig::new(2002, 2004);
    let dataset = generate_seeded(&revenue_only(), &config, 1234).unwrap();
    assert_close(
        dataset.column("Recettes_Totales").unwrap(),
        &[25.0, 25.75, 26.5],
    );
}

/// A shock touches its own year only
#[test]
fn test_shock_applies_to_its_year_only() {
    let profile = ProfileBuilder::new("Test")
        .metric(
            MetricBuilder::revenue("Recettes_Totales", 25.0)
                .linear(0.03)
                .shocks(&[2003], 0.9),
        )
        .build();
    let config = GenerationConfig::new(2002, 2004).without_noise();
    let dataset = generate_deterministic(&profile, &config).unwrap();

    assert_close(
        dataset.column("Recettes_Totales").unwrap(),
        &[25.0, 23.175, 26.5],
    );
}

/// Reversed range fails and yields no dataset
#[test]
fn test_reversed_range_is_rejected() {
    let config = GenerationConfig::new(2010, 2005);
    let err = generate_seeded(&revenue_only(), &config, 0).unwrap_err();
    assert_eq!(
        err,
        GenerationError::InvalidRange {
            start_year: FiscalYear(2010),
            end_year: FiscalYear(2005),
        }
    );
}

/// Crisis window on a two-year base series
#[test]
fn test_crisis_window_rescales_base_series() {
    // 8.0 * (1 + 0.0375 * i) gives [8.0, 8.3] over 2008..=2009
    let profile = ProfileBuilder::new("Test")
        .metric(MetricBuilder::expense("Investissement", 8.0).linear(0.0375))
        .scale(
            "Crise financière",
            "Investissement",
            YearWindow::between(2008, 2009),
            0.85,
        )
        .build();
    let config = GenerationConfig::new(2008, 2009).without_noise();
    let dataset = generate_deterministic(&profile, &config).unwrap();

    assert_close(dataset.column("Investissement").unwrap(), &[6.8, 7.055]);
}

/// Single-year range still produces one row
#[test]
fn test_single_year_range() {
    let config = GenerationConfig::new(2025, 2025).without_noise();
    let dataset = generate_deterministic(&revenue_only(), &config).unwrap();
    assert_eq!(dataset.len(), 1);
    assert_close(dataset.column("Recettes_Totales").unwrap(), &[25.0]);
}
