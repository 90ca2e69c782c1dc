//! Generation configuration
//!
//! `GenerationConfig` carries the year range and noise mode; the municipal
//! profile and the random source are passed alongside it.
//!
//! # Builder DSL
//!
//! Profiles are plain data and can be deserialized, but the fluent builder is
//! the ergonomic way to write one by hand:
//!
//! ```ignore
//! use communal_core::config::{MetricBuilder, ProfileBuilder};
//! use communal_core::model::YearWindow;
//!
//! let profile = ProfileBuilder::new("La Possession")
//!     .metric(MetricBuilder::demography("Population", 25_000.0).linear(0.012))
//!     .metric(
//!         MetricBuilder::expense("Investissement", 8.0)
//!             .linear(0.02)
//!             .noise(0.15)
//!             .shocks(&[2005, 2012, 2018, 2022], 1.5),
//!     )
//!     .scale("Crise financière", "Investissement", YearWindow::between(2008, 2009), 0.85)
//!     .build();
//! ```

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;
use crate::model::FiscalYear;
use crate::noise::NoiseMode;
use crate::years::YearAxis;

pub mod builder;
pub mod metric_builder;
pub mod presets;

pub use builder::ProfileBuilder;
pub use metric_builder::MetricBuilder;
pub use presets::{builtin_profiles, find_builtin};

pub const DEFAULT_START_YEAR: i16 = 2002;
pub const DEFAULT_END_YEAR: i16 = 2025;

/// Year range and noise mode of one generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub start_year: FiscalYear,
    pub end_year: FiscalYear,
    #[serde(default)]
    pub noise: NoiseMode,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            start_year: FiscalYear(DEFAULT_START_YEAR),
            end_year: FiscalYear(DEFAULT_END_YEAR),
            noise: NoiseMode::Enabled,
        }
    }
}

impl GenerationConfig {
    #[must_use]
    pub fn new(start_year: i16, end_year: i16) -> Self {
        Self {
            start_year: FiscalYear(start_year),
            end_year: FiscalYear(end_year),
            noise: NoiseMode::Enabled,
        }
    }

    /// Same range, noise disabled
    #[must_use]
    pub fn without_noise(mut self) -> Self {
        self.noise = NoiseMode::Disabled;
        self
    }

    #[must_use]
    pub fn with_noise(mut self, noise: NoiseMode) -> Self {
        self.noise = noise;
        self
    }

    pub fn axis(&self) -> Result<YearAxis, GenerationError> {
        YearAxis::new(self.start_year.0, self.end_year.0)
    }
}
