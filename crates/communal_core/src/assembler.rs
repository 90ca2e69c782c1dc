//! Runs the simulators, the overlay, and freezes the result into a dataset.

use crate::error::GenerationError;
use crate::model::{Column, FinancialDataset, MunicipalProfile};
use crate::noise::NoiseSource;
use crate::overlay::EventOverlay;
use crate::simulator::{SimulatedSeries, simulate_all};
use crate::years::YearAxis;

/// Builds one dataset for one profile over one axis
#[derive(Debug, Clone, Copy)]
pub struct DatasetAssembler<'a> {
    profile: &'a MunicipalProfile,
    axis: YearAxis,
}

impl<'a> DatasetAssembler<'a> {
    #[must_use]
    pub fn new(profile: &'a MunicipalProfile, axis: YearAxis) -> Self {
        Self { profile, axis }
    }

    #[must_use]
    pub fn axis(&self) -> &YearAxis {
        &self.axis
    }

    /// Check the profile without consuming any randomness
    pub fn validate(&self) -> Result<(), GenerationError> {
        self.profile.validate()?;
        let names: Vec<&str> = self.profile.metric_names().collect();
        EventOverlay::new(&self.profile.overlay).check_targets(&names)
    }

    /// Base series only, before any overlay rule
    pub fn simulate<N: NoiseSource + ?Sized>(
        &self,
        noise: &mut N,
    ) -> Result<Vec<SimulatedSeries>, GenerationError> {
        simulate_all(&self.profile.metrics, &self.axis, noise)
    }

    /// Validate, simulate, overlay and freeze.
    ///
    /// Validation runs first, so a malformed profile fails before the noise
    /// source is touched.
    pub fn assemble<N: NoiseSource + ?Sized>(
        &self,
        noise: &mut N,
    ) -> Result<FinancialDataset, GenerationError> {
        self.validate()?;
        let simulated = self.simulate(noise)?;
        let overlaid = EventOverlay::new(&self.profile.overlay).apply(&self.axis, simulated)?;
        Ok(self.freeze(overlaid))
    }

    /// Zip series into the final dataset, keyed by the axis years
    #[must_use]
    pub fn freeze(&self, series: Vec<SimulatedSeries>) -> FinancialDataset {
        let columns = series
            .into_iter()
            .map(|s| Column {
                name: s.name,
                category: s.category,
                values: s.values,
            })
            .collect();
        FinancialDataset::from_columns(self.profile.name.clone(), self.axis.to_vec(), columns)
    }
}
