//! Multiplicative noise sources.
//!
//! The random generator is always supplied by the caller; nothing in this
//! crate reaches for a process-wide generator.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigIssue, GenerationError};

/// Whether generation perturbs values with noise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NoiseMode {
    #[default]
    Enabled,
    /// Every noise multiplier is exactly 1.0 and no randomness is consumed
    Disabled,
}

impl NoiseMode {
    #[must_use]
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled {
            NoiseMode::Enabled
        } else {
            NoiseMode::Disabled
        }
    }

    #[must_use]
    pub fn is_enabled(self) -> bool {
        self == NoiseMode::Enabled
    }
}

/// Source of multiplicative noise around 1.0
pub trait NoiseSource {
    /// Draw one multiplier for a metric with standard deviation `sigma`.
    ///
    /// `metric` only serves error reporting.
    fn multiplier(&mut self, metric: &str, sigma: f64) -> Result<f64, GenerationError>;
}

/// Always 1.0; used when noise is disabled
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl NoiseSource for Silent {
    fn multiplier(&mut self, _metric: &str, _sigma: f64) -> Result<f64, GenerationError> {
        Ok(1.0)
    }
}

/// `Normal(1, sigma)` samples drawn from a borrowed generator.
///
/// A zero sigma short-circuits to 1.0 without touching the generator, so
/// noise-free metrics do not shift the random sequence of the others.
pub struct GaussianNoise<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> GaussianNoise<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + ?Sized> NoiseSource for GaussianNoise<'_, R> {
    fn multiplier(&mut self, metric: &str, sigma: f64) -> Result<f64, GenerationError> {
        let invalid = || {
            GenerationError::InvalidConfig(ConfigIssue::InvalidNoise {
                metric: metric.to_string(),
                sigma,
            })
        };
        // Normal::new accepts a negative std_dev
        if !sigma.is_finite() || sigma < 0.0 {
            return Err(invalid());
        }
        if sigma == 0.0 {
            return Ok(1.0);
        }
        Normal::new(1.0, sigma)
            .map(|d| d.sample(&mut *self.rng))
            .map_err(|_| invalid())
    }
}
