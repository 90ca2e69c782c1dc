//! Console insight report

use communal_core::AnalysisError;
use communal_core::analysis::Summary;
use communal_core::model::{FinancialDataset, Narrative};

const RULE_WIDTH: usize = 60;

fn line(out: &mut String, text: impl AsRef<str>) {
    out.push_str(text.as_ref());
    out.push('\n');
}

fn stat(value: &Result<f64, AnalysisError>, decimals: usize, suffix: &str) -> String {
    match value {
        Ok(v) => format!("{v:.decimals$}{suffix}"),
        Err(e) => format!("indisponible ({e})"),
    }
}

/// Build the report for one dataset and its profile narrative
#[must_use]
pub fn render_report(dataset: &FinancialDataset, narrative: &Narrative) -> String {
    let summary = Summary::compute(dataset);
    let period = match (dataset.years().first(), dataset.years().last()) {
        (Some(first), Some(last)) => format!("{first}-{last}"),
        _ => String::from("?"),
    };

    let mut out = String::new();
    line(&mut out, format!("INSIGHTS ANALYTIQUES - Commune de {}", summary.municipality));
    line(&mut out, "=".repeat(RULE_WIDTH));

    line(&mut out, "\n1. STATISTIQUES GÉNÉRALES:");
    line(&mut out, format!("Recettes moyennes annuelles: {}", stat(&summary.mean_revenue, 2, " M€")));
    line(&mut out, format!("Dépenses moyennes annuelles: {}", stat(&summary.mean_expense, 2, " M€")));
    line(&mut out, format!("Épargne brute moyenne: {}", stat(&summary.mean_savings, 2, " M€")));
    line(&mut out, format!("Dette moyenne: {}", stat(&summary.mean_debt, 2, " M€")));

    line(&mut out, "\n2. TAUX DE CROISSANCE:");
    line(
        &mut out,
        format!("Croissance des recettes ({period}): {}", stat(&summary.revenue_growth_pct, 1, "%")),
    );
    line(
        &mut out,
        format!(
            "Croissance de la population ({period}): {}",
            stat(&summary.population_growth_pct, 1, "%")
        ),
    );

    line(&mut out, "\n3. STRUCTURE FINANCIÈRE:");
    line(
        &mut out,
        format!("Part des impôts locaux dans les recettes: {}", stat(&summary.tax_share_pct, 1, "%")),
    );
    line(
        &mut out,
        format!(
            "Part des dotations de l'État dans les recettes: {}",
            stat(&summary.grants_share_pct, 1, "%")
        ),
    );
    line(
        &mut out,
        format!(
            "Part de l'investissement dans les dépenses: {}",
            stat(&summary.investment_share_pct, 1, "%")
        ),
    );

    line(&mut out, "\n4. ENDETTEMENT ET FISCALITÉ:");
    line(&mut out, format!("Taux d'endettement moyen: {}", stat(&summary.debt_ratio_mean_pct, 1, "%")));
    line(&mut out, format!("Taux d'endettement final: {}", stat(&summary.debt_ratio_final_pct, 1, "%")));
    line(&mut out, format!("Taux de fiscalité moyen: {}", stat(&summary.tax_rate_mean, 2, "")));

    let mut section = 5;
    if !summary.investments.is_empty() {
        line(&mut out, format!("\n{section}. INVESTISSEMENTS:"));
        for share in &summary.investments {
            line(
                &mut out,
                format!(
                    "{}: moyenne {:.2} M€, part de l'investissement {}",
                    share.name,
                    share.mean,
                    stat(&share.share_pct, 1, "%")
                ),
            );
        }
        section += 1;
    }

    if !narrative.milestones.is_empty() {
        line(&mut out, format!("\n{section}. ÉVÉNEMENTS MARQUANTS:"));
        for milestone in &narrative.milestones {
            line(&mut out, format!("• {milestone}"));
        }
        section += 1;
    }

    if !narrative.recommendations.is_empty() {
        line(&mut out, format!("\n{section}. RECOMMANDATIONS STRATÉGIQUES:"));
        for recommendation in &narrative.recommendations {
            line(&mut out, format!("• {recommendation}"));
        }
    }

    out
}
