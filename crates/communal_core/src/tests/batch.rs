//! Multi-profile generation

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::config::{GenerationConfig, MetricBuilder, ProfileBuilder, builtin_profiles};
use crate::error::{ConfigIssue, GenerationError};
use crate::simulation::{generate_batch, generate_seeded};

#[test]
fn test_batch_keeps_input_order() {
    let profiles = builtin_profiles();
    let results = generate_batch(&profiles, &GenerationConfig::default(), 7);

    let names: Vec<_> = results
        .iter()
        .map(|r| r.as_ref().unwrap().municipality().to_string())
        .collect();
    assert_eq!(names, vec!["La Possession", "Saint-Denis"]);
}

#[test]
fn test_batch_seeds_are_derived_from_the_master_seed() {
    let profiles = builtin_profiles();
    let config = GenerationConfig::default();
    let results = generate_batch(&profiles, &config, 7);

    let mut master = SmallRng::seed_from_u64(7);
    for (profile, result) in profiles.iter().zip(results) {
        let expected = generate_seeded(profile, &config, master.next_u64()).unwrap();
        assert_eq!(result.unwrap(), expected);
    }
}

#[test]
fn test_batch_failures_stay_in_their_slot() {
    let mut profiles = builtin_profiles();
    profiles.insert(
        1,
        ProfileBuilder::new("Doublon")
            .metric(MetricBuilder::demography("Population", 1.0))
            .metric(MetricBuilder::demography("Population", 2.0))
            .build(),
    );

    let results = generate_batch(&profiles, &GenerationConfig::default(), 1);
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert_eq!(
        results[1].as_ref().unwrap_err(),
        &GenerationError::InvalidConfig(ConfigIssue::DuplicateMetric("Population".to_string()))
    );
    assert!(results[2].is_ok());
}
