use std::fmt;

use crate::model::FiscalYear;

/// Why a profile was rejected before generation started
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigIssue {
    /// The profile declares no metrics at all
    NoMetrics,
    /// Two metric definitions share a column name
    DuplicateMetric(String),
    /// A metric's noise magnitude is negative or not finite
    InvalidNoise { metric: String, sigma: f64 },
    /// A metric's baseline or growth rate is not finite
    NonFiniteParameter { metric: String, field: &'static str },
    /// A shock multiplier is not finite
    InvalidShock {
        metric: String,
        year: FiscalYear,
        multiplier: f64,
    },
    /// An overlay window closes before it opens
    EmptyWindow {
        rule: String,
        from: FiscalYear,
        to: FiscalYear,
    },
    /// An overlay factor or ramp rate is not finite
    InvalidAdjustment { rule: String },
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigIssue::NoMetrics => write!(f, "profile declares no metrics"),
            ConfigIssue::DuplicateMetric(name) => {
                write!(f, "metric {name:?} is declared more than once")
            }
            ConfigIssue::InvalidNoise { metric, sigma } => {
                write!(
                    f,
                    "metric {metric:?} has noise_sigma={sigma}, must be non-negative and finite"
                )
            }
            ConfigIssue::NonFiniteParameter { metric, field } => {
                write!(f, "metric {metric:?} has a non-finite {field}")
            }
            ConfigIssue::InvalidShock {
                metric,
                year,
                multiplier,
            } => write!(
                f,
                "metric {metric:?} has a non-finite shock multiplier {multiplier} in {year}"
            ),
            ConfigIssue::EmptyWindow { rule, from, to } => {
                write!(f, "overlay rule {rule:?} has an empty window {from}..={to}")
            }
            ConfigIssue::InvalidAdjustment { rule } => {
                write!(f, "overlay rule {rule:?} has a non-finite adjustment")
            }
        }
    }
}

impl std::error::Error for ConfigIssue {}

/// Errors raised while generating a dataset.
///
/// Every variant is a precondition failure detected before any value is
/// returned: generation either yields a complete dataset or nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationError {
    /// `start_year > end_year`, or a year outside the supported calendar
    InvalidRange {
        start_year: FiscalYear,
        end_year: FiscalYear,
    },
    /// The profile itself is malformed
    InvalidConfig(ConfigIssue),
    /// An overlay rule targets a metric that was never simulated
    IncompleteProfile { rule: String, metric: String },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::InvalidRange {
                start_year,
                end_year,
            } => write!(f, "invalid year range {start_year}..={end_year}"),
            GenerationError::InvalidConfig(issue) => write!(f, "invalid profile: {issue}"),
            GenerationError::IncompleteProfile { rule, metric } => write!(
                f,
                "overlay rule {rule:?} targets metric {metric:?}, which the profile never simulates"
            ),
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerationError::InvalidConfig(issue) => Some(issue),
            _ => None,
        }
    }
}

impl From<ConfigIssue> for GenerationError {
    fn from(issue: ConfigIssue) -> Self {
        GenerationError::InvalidConfig(issue)
    }
}

/// Errors raised by the summary statistics used by reporters
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    MissingColumn(String),
    EmptySeries(String),
    /// The denominator of a ratio is zero
    DivisionByZero {
        numerator: String,
        denominator: String,
    },
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::MissingColumn(name) => write!(f, "column {name:?} not found"),
            AnalysisError::EmptySeries(name) => write!(f, "column {name:?} has no values"),
            AnalysisError::DivisionByZero {
                numerator,
                denominator,
            } => write!(
                f,
                "cannot divide {numerator:?} by {denominator:?}: denominator is zero"
            ),
        }
    }
}

impl std::error::Error for AnalysisError {}

pub type Result<T> = std::result::Result<T, GenerationError>;
