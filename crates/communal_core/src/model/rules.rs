//! Declarative overlay rules.
//!
//! A rule names a target metric, a year predicate and a multiplicative
//! adjustment. Rules never inspect other metrics; they only rescale the
//! current value of their own target.

use serde::{Deserialize, Serialize};

use crate::error::ConfigIssue;
use crate::model::FiscalYear;

/// Inclusive year window; `to: None` leaves the window open-ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearWindow {
    pub from: FiscalYear,
    #[serde(default)]
    pub to: Option<FiscalYear>,
}

impl YearWindow {
    #[must_use]
    pub fn between(from: i16, to: i16) -> Self {
        Self {
            from: FiscalYear(from),
            to: Some(FiscalYear(to)),
        }
    }

    #[must_use]
    pub fn starting(from: i16) -> Self {
        Self {
            from: FiscalYear(from),
            to: None,
        }
    }

    #[must_use]
    pub fn contains(&self, year: FiscalYear) -> bool {
        year >= self.from && self.to.is_none_or(|to| year <= to)
    }
}

/// How a rule rescales its target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Adjustment {
    /// `value *= factor` for every year in the window
    Scale { factor: f64 },
    /// `value *= 1 + rate * (year - window.from)`
    Ramp { rate: f64 },
}

/// One entry of a profile's overlay table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayRule {
    /// Human-readable event name, used in logs and errors
    pub label: String,
    /// Column the rule rescales
    pub metric: String,
    pub window: YearWindow,
    pub adjustment: Adjustment,
}

impl OverlayRule {
    /// Windowed multiplier: `if year in [from, to]: value *= factor`
    #[must_use]
    pub fn scale(
        label: impl Into<String>,
        metric: impl Into<String>,
        window: YearWindow,
        factor: f64,
    ) -> Self {
        Self {
            label: label.into(),
            metric: metric.into(),
            window,
            adjustment: Adjustment::Scale { factor },
        }
    }

    /// Cumulative ramp: `if year >= from: value *= 1 + rate * (year - from)`
    #[must_use]
    pub fn ramp(
        label: impl Into<String>,
        metric: impl Into<String>,
        from: i16,
        rate: f64,
    ) -> Self {
        Self {
            label: label.into(),
            metric: metric.into(),
            window: YearWindow::starting(from),
            adjustment: Adjustment::Ramp { rate },
        }
    }

    #[must_use]
    pub fn applies_to(&self, year: FiscalYear) -> bool {
        self.window.contains(year)
    }

    /// Multiplier for `year`, or `None` when the year is outside the window
    #[must_use]
    pub fn factor(&self, year: FiscalYear) -> Option<f64> {
        if !self.applies_to(year) {
            return None;
        }
        Some(match self.adjustment {
            Adjustment::Scale { factor } => factor,
            Adjustment::Ramp { rate } => {
                1.0 + rate * f64::from(year.years_since(self.window.from))
            }
        })
    }

    #[must_use]
    pub fn adjust(&self, value: f64, year: FiscalYear) -> f64 {
        self.factor(year).map_or(value, |factor| value * factor)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigIssue> {
        if let Some(to) = self.window.to
            && to < self.window.from
        {
            return Err(ConfigIssue::EmptyWindow {
                rule: self.label.clone(),
                from: self.window.from,
                to,
            });
        }
        let finite = match self.adjustment {
            Adjustment::Scale { factor } => factor.is_finite(),
            Adjustment::Ramp { rate } => rate.is_finite(),
        };
        if !finite {
            return Err(ConfigIssue::InvalidAdjustment {
                rule: self.label.clone(),
            });
        }
        Ok(())
    }
}
