pub mod columns;
mod dataset;
mod ids;
mod profile;
mod rules;

pub use dataset::{Column, FinancialDataset, YearRecord};
pub use ids::FiscalYear;
pub use profile::{MetricCategory, MetricDefinition, MunicipalProfile, Narrative, Trend};
pub use rules::{Adjustment, OverlayRule, YearWindow};
