//! Summary statistics over a generated dataset.
//!
//! These feed the textual insight report. Every statistic is computed
//! independently, so a missing column or a zero denominator spoils only the
//! lines that depend on it.

use crate::error::AnalysisError;
use crate::model::{FinancialDataset, MetricCategory, columns::*};

type Stat = Result<f64, AnalysisError>;

fn series<'a>(dataset: &'a FinancialDataset, name: &str) -> Result<&'a [f64], AnalysisError> {
    let values = dataset
        .column(name)
        .ok_or_else(|| AnalysisError::MissingColumn(name.to_string()))?;
    if values.is_empty() {
        return Err(AnalysisError::EmptySeries(name.to_string()));
    }
    Ok(values)
}

/// `numerator / denominator`, refusing a zero denominator
pub fn ratio(numerator: f64, denominator: f64, names: (&str, &str)) -> Stat {
    if denominator == 0.0 {
        return Err(AnalysisError::DivisionByZero {
            numerator: names.0.to_string(),
            denominator: names.1.to_string(),
        });
    }
    Ok(numerator / denominator)
}

/// Arithmetic mean of a column
pub fn mean(dataset: &FinancialDataset, name: &str) -> Stat {
    let values = series(dataset, name)?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// First and last value of a column
pub fn endpoints(dataset: &FinancialDataset, name: &str) -> Result<(f64, f64), AnalysisError> {
    let values = series(dataset, name)?;
    // series() guarantees at least one value
    Ok((values[0], values[values.len() - 1]))
}

/// Growth between the first and last year, in percent
pub fn growth_pct(dataset: &FinancialDataset, name: &str) -> Stat {
    let (first, last) = endpoints(dataset, name)?;
    let label = format!("{name} (first year)");
    ratio(last - first, first, (name, label.as_str())).map(|r| r * 100.0)
}

/// `mean(numerator) / mean(denominator)`, in percent
pub fn share_pct(dataset: &FinancialDataset, numerator: &str, denominator: &str) -> Stat {
    let num = mean(dataset, numerator)?;
    let den = mean(dataset, denominator)?;
    ratio(num, den, (numerator, denominator)).map(|r| r * 100.0)
}

/// Mean and share of one investment sub-category
#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentShare {
    pub name: String,
    pub mean: f64,
    /// Share of the mean total investment, in percent
    pub share_pct: Stat,
}

/// Headline figures of one dataset
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub municipality: String,
    pub mean_revenue: Stat,
    pub mean_expense: Stat,
    pub mean_savings: Stat,
    pub mean_debt: Stat,
    pub revenue_growth_pct: Stat,
    pub population_growth_pct: Stat,
    pub tax_share_pct: Stat,
    pub grants_share_pct: Stat,
    pub investment_share_pct: Stat,
    /// Mean debt ratio, in percent
    pub debt_ratio_mean_pct: Stat,
    /// Debt ratio of the last year, in percent
    pub debt_ratio_final_pct: Stat,
    pub tax_rate_mean: Stat,
    pub investments: Vec<InvestmentShare>,
}

impl Summary {
    #[must_use]
    pub fn compute(dataset: &FinancialDataset) -> Self {
        let investment_mean = mean(dataset, INVESTISSEMENT);
        let investments = dataset
            .columns_in(MetricCategory::Investment)
            .map(|column| {
                let m = column.values.iter().sum::<f64>() / column.values.len().max(1) as f64;
                InvestmentShare {
                    name: column.name.clone(),
                    mean: m,
                    share_pct: investment_mean.clone().and_then(|total| {
                        ratio(m, total, (column.name.as_str(), INVESTISSEMENT)).map(|r| r * 100.0)
                    }),
                }
            })
            .collect();

        Self {
            municipality: dataset.municipality().to_string(),
            mean_revenue: mean(dataset, RECETTES_TOTALES),
            mean_expense: mean(dataset, DEPENSES_TOTALES),
            mean_savings: mean(dataset, EPARGNE_BRUTE),
            mean_debt: mean(dataset, DETTE_TOTALE),
            revenue_growth_pct: growth_pct(dataset, RECETTES_TOTALES),
            population_growth_pct: growth_pct(dataset, POPULATION),
            tax_share_pct: share_pct(dataset, IMPOTS_LOCAUX, RECETTES_TOTALES),
            grants_share_pct: share_pct(dataset, DOTATIONS_ETAT, RECETTES_TOTALES),
            investment_share_pct: share_pct(dataset, INVESTISSEMENT, DEPENSES_TOTALES),
            debt_ratio_mean_pct: mean(dataset, TAUX_ENDETTEMENT).map(|r| r * 100.0),
            debt_ratio_final_pct: endpoints(dataset, TAUX_ENDETTEMENT).map(|(_, r)| r * 100.0),
            tax_rate_mean: mean(dataset, TAUX_FISCALITE),
            investments,
        }
    }
}
