//! The generated dataset: one row per fiscal year, one column per metric.

use rustc_hash::FxHashMap;

use crate::model::{FiscalYear, MetricCategory, columns};

/// A single metric column, aligned with the dataset's years
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub category: MetricCategory,
    pub values: Vec<f64>,
}

/// Final, immutable output of a generation run.
///
/// Invariants upheld by construction: every column has exactly one value per
/// year, and years are contiguous and ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialDataset {
    municipality: String,
    years: Vec<FiscalYear>,
    columns: Vec<Column>,
    index: FxHashMap<String, usize>,
}

impl FinancialDataset {
    /// Only the assembler builds datasets, after checking column lengths
    pub(crate) fn from_columns(
        municipality: String,
        years: Vec<FiscalYear>,
        columns: Vec<Column>,
    ) -> Self {
        debug_assert!(columns.iter().all(|c| c.values.len() == years.len()));
        let index = columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.clone(), i))
            .collect();
        Self {
            municipality,
            years,
            columns,
            index,
        }
    }

    #[must_use]
    pub fn municipality(&self) -> &str {
        &self.municipality
    }

    #[must_use]
    pub fn years(&self) -> &[FiscalYear] {
        &self.years
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.years.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.index
            .get(name)
            .map(|&i| self.columns[i].values.as_slice())
    }

    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Columns of one category, in declaration order
    pub fn columns_in(&self, category: MetricCategory) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(move |c| c.category == category)
    }

    #[must_use]
    pub fn value(&self, year: FiscalYear, name: &str) -> Option<f64> {
        let row = self.row_index(year)?;
        self.column(name).map(|values| values[row])
    }

    fn row_index(&self, year: FiscalYear) -> Option<usize> {
        let first = *self.years.first()?;
        let offset = usize::try_from(year.years_since(first)).ok()?;
        (offset < self.years.len()).then_some(offset)
    }

    /// Export header: the year column followed by metric names
    #[must_use]
    pub fn header(&self) -> Vec<&str> {
        std::iter::once(columns::ANNEE)
            .chain(self.columns.iter().map(|c| c.name.as_str()))
            .collect()
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<YearRecord<'_>> {
        let year = *self.years.get(index)?;
        Some(YearRecord {
            dataset: self,
            index,
            year,
        })
    }

    /// Rows in ascending year order
    pub fn rows(&self) -> impl ExactSizeIterator<Item = YearRecord<'_>> {
        self.years
            .iter()
            .enumerate()
            .map(move |(index, &year)| YearRecord {
                dataset: self,
                index,
                year,
            })
    }

    /// Per-year `total - sum(components)`.
    ///
    /// Totals are simulated independently of their components, so the gap is
    /// generally non-zero. This only measures it; nothing is reconciled.
    #[must_use]
    pub fn component_gap(&self, total: &str, components: &[&str]) -> Option<Vec<f64>> {
        let total = self.column(total)?;
        let parts = components
            .iter()
            .map(|name| self.column(name))
            .collect::<Option<Vec<_>>>()?;

        Some(
            (0..self.len())
                .map(|row| total[row] - parts.iter().map(|p| p[row]).sum::<f64>())
                .collect(),
        )
    }
}

/// Borrowed view of one dataset row
#[derive(Debug, Clone, Copy)]
pub struct YearRecord<'a> {
    dataset: &'a FinancialDataset,
    index: usize,
    pub year: FiscalYear,
}

impl<'a> YearRecord<'a> {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.dataset.column(name).map(|values| values[self.index])
    }

    /// Metric values in column order, without the year
    pub fn values(&self) -> impl Iterator<Item = f64> + 'a {
        let index = self.index;
        self.dataset.columns.iter().map(move |c| c.values[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FinancialDataset {
        FinancialDataset::from_columns(
            "Test".into(),
            vec![FiscalYear(2002), FiscalYear(2003)],
            vec![
                Column {
                    name: "Recettes_Totales".into(),
                    category: MetricCategory::Revenue,
                    values: vec![25.0, 26.0],
                },
                Column {
                    name: "Impots_Locaux".into(),
                    category: MetricCategory::Revenue,
                    values: vec![10.0, 11.0],
                },
                Column {
                    name: "Dotations_Etat".into(),
                    category: MetricCategory::Revenue,
                    values: vec![9.0, 9.0],
                },
            ],
        )
    }

    #[test]
    fn test_header_starts_with_year() {
        let ds = sample();
        assert_eq!(
            ds.header(),
            vec!["Annee", "Recettes_Totales", "Impots_Locaux", "Dotations_Etat"]
        );
    }

    #[test]
    fn test_value_lookup_by_year() {
        let ds = sample();
        assert_eq!(ds.value(FiscalYear(2003), "Impots_Locaux"), Some(11.0));
        assert_eq!(ds.value(FiscalYear(2004), "Impots_Locaux"), None);
        assert_eq!(ds.value(FiscalYear(2001), "Impots_Locaux"), None);
        assert_eq!(ds.value(FiscalYear(2002), "Inconnu"), None);
    }

    #[test]
    fn test_rows_follow_year_order() {
        let ds = sample();
        let rows: Vec<_> = ds.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].year, FiscalYear(2002));
        assert_eq!(rows[1].values().collect::<Vec<_>>(), vec![26.0, 11.0, 9.0]);
    }

    #[test]
    fn test_component_gap_is_reported_not_fixed() {
        let ds = sample();
        let gap = ds
            .component_gap("Recettes_Totales", &["Impots_Locaux", "Dotations_Etat"])
            .unwrap();
        assert_eq!(gap, vec![6.0, 6.0]);
        assert_eq!(ds.column("Recettes_Totales"), Some(&[25.0, 26.0][..]));
        assert!(ds.component_gap("Recettes_Totales", &["Absent"]).is_none());
    }
}
