//! Synthetic municipal finance generation library
//!
//! This crate produces plausible yearly financial series for a municipality
//! from a declarative profile. Each metric follows:
//!
//! ```text
//! value = baseline * trend(year) * shock(year) * Normal(1, sigma)
//! ```
//!
//! after which an ordered table of narrative overlay rules (crises, recovery
//! plans, ramps) rescales specific (metric, year) cells. It supports:
//! - Linear and threshold-ramp trends, per-year shock multipliers
//! - Windowed and open-ended overlay rules, applied in declaration order
//! - Injectable randomness: seeded, caller-supplied, or fully deterministic
//! - Built-in profiles for La Possession and Saint-Denis
//! - Summary statistics for textual reports
//!
//! # Builder DSL
//!
//! ```ignore
//! use communal_core::config::{GenerationConfig, MetricBuilder, ProfileBuilder};
//! use communal_core::simulation::generate_seeded;
//!
//! let profile = ProfileBuilder::new("Petite Commune")
//!     .metric(MetricBuilder::revenue("Recettes_Totales", 25.0).linear(0.03).noise(0.05))
//!     .build();
//!
//! let dataset = generate_seeded(&profile, &GenerationConfig::default(), 42)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod assembler;
pub mod error;
pub mod noise;
pub mod overlay;
pub mod simulation;
pub mod simulator;
pub mod years;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{GenerationConfig, MetricBuilder, ProfileBuilder};
pub use error::{AnalysisError, ConfigIssue, GenerationError};
pub use model::{FinancialDataset, MunicipalProfile};
pub use noise::{NoiseMode, NoiseSource};
pub use simulation::{generate, generate_batch, generate_deterministic, generate_seeded};
