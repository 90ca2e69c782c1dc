//! Tests for the command-line front end
//!
//! - `export` - CSV layout, file naming and preview
//! - `report` - Insight report text, including unavailable statistics
//! - `charts` - Panel selection and text rendering
//! - `profile_io` - YAML round trip and validation on load


use communal_core::config::presets::la_possession;
use communal_core::model::FinancialDataset;
use communal_core::{GenerationConfig, generate_seeded};

pub(crate) fn possession_dataset() -> FinancialDataset {
    generate_seeded(&la_possession(), &GenerationConfig::default(), 42).unwrap()
}
