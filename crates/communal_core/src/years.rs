//! Ordered axis of fiscal years.

use crate::error::GenerationError;
use crate::model::FiscalYear;

/// Inclusive, contiguous range of fiscal years.
///
/// The axis is `Copy`, so iterating it never consumes it: every call to
/// [`YearAxis::iter`] restarts from `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearAxis {
    start: FiscalYear,
    end: FiscalYear,
}

impl YearAxis {
    /// Build the axis `start..=end`.
    ///
    /// Fails when `start > end` or when either bound has no civil calendar date.
    pub fn new(start: i16, end: i16) -> Result<Self, GenerationError> {
        let (start, end) = (FiscalYear(start), FiscalYear(end));
        let invalid = GenerationError::InvalidRange {
            start_year: start,
            end_year: end,
        };

        if start > end || start.opening_date().is_err() || end.closing_date().is_err() {
            return Err(invalid);
        }

        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(&self) -> FiscalYear {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> FiscalYear {
        self.end
    }

    #[must_use]
    pub fn len(&self) -> usize {
        // start <= end is guaranteed by the constructor
        self.end.years_since(self.start) as usize + 1
    }

    /// Never true; an axis always holds at least one year
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn contains(&self, year: FiscalYear) -> bool {
        year >= self.start && year <= self.end
    }

    /// Position of `year` in the axis (`year - start`)
    #[must_use]
    pub fn index_of(&self, year: FiscalYear) -> Option<usize> {
        self.contains(year)
            .then(|| year.years_since(self.start) as usize)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = FiscalYear> + ExactSizeIterator {
        (self.start.0..=self.end.0).map(FiscalYear)
    }

    /// `(index, year)` pairs, the shape every simulator consumes
    pub fn indexed(&self) -> impl Iterator<Item = (usize, FiscalYear)> {
        self.iter().enumerate()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<FiscalYear> {
        self.iter().collect()
    }
}

impl IntoIterator for &YearAxis {
    type Item = FiscalYear;
    type IntoIter = std::iter::Map<std::ops::RangeInclusive<i16>, fn(i16) -> FiscalYear>;

    fn into_iter(self) -> Self::IntoIter {
        (self.start.0..=self.end.0).map(FiscalYear as fn(i16) -> FiscalYear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_is_inclusive() {
        let axis = YearAxis::new(2002, 2025).unwrap();
        assert_eq!(axis.len(), 24);
        assert_eq!(axis.iter().next(), Some(FiscalYear(2002)));
        assert_eq!(axis.iter().last(), Some(FiscalYear(2025)));
    }

    #[test]
    fn test_single_year_axis() {
        let axis = YearAxis::new(2010, 2010).unwrap();
        assert_eq!(axis.to_vec(), vec![FiscalYear(2010)]);
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let err = YearAxis::new(2010, 2005).unwrap_err();
        assert_eq!(
            err,
            GenerationError::InvalidRange {
                start_year: FiscalYear(2010),
                end_year: FiscalYear(2005),
            }
        );
    }

    #[test]
    fn test_out_of_calendar_year_is_rejected() {
        assert!(YearAxis::new(2000, i16::MAX).is_err());
    }

    #[test]
    fn test_iteration_restarts() {
        let axis = YearAxis::new(2002, 2004).unwrap();
        let first: Vec<_> = axis.iter().collect();
        let second: Vec<_> = (&axis).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(axis.index_of(FiscalYear(2004)), Some(2));
        assert_eq!(axis.index_of(FiscalYear(2005)), None);
    }
}
