//! Identifiers shared across the generation engine

use std::fmt;

use serde::{Deserialize, Serialize};

/// A fiscal year, the row key of every dataset.
///
/// Stored as `i16` to match the civil calendar range of `jiff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FiscalYear(pub i16);

impl FiscalYear {
    #[must_use]
    pub fn value(self) -> i16 {
        self.0
    }

    /// Signed number of years from `origin` to `self`
    #[must_use]
    pub fn years_since(self, origin: FiscalYear) -> i32 {
        i32::from(self.0) - i32::from(origin.0)
    }

    /// First day of the fiscal year (communal accounts follow the calendar year)
    pub fn opening_date(self) -> Result<jiff::civil::Date, jiff::Error> {
        jiff::civil::Date::new(self.0, 1, 1)
    }

    /// Last day of the fiscal year
    pub fn closing_date(self) -> Result<jiff::civil::Date, jiff::Error> {
        jiff::civil::Date::new(self.0, 12, 31)
    }
}

impl From<i16> for FiscalYear {
    fn from(year: i16) -> Self {
        FiscalYear(year)
    }
}

impl fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
