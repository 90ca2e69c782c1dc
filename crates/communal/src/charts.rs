//! Text charts of a generated dataset.
//!
//! Each panel is a ratatui [`Chart`] rendered into an off-screen [`Buffer`]
//! and flattened to plain text, so the analysis can be written to a file
//! without a terminal.

use std::path::{Path, PathBuf};

use color_eyre::eyre::WrapErr;
use communal_core::model::columns::*;
use communal_core::model::{FinancialDataset, MetricCategory};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget};

pub const PANEL_WIDTH: u16 = 100;
pub const PANEL_HEIGHT: u16 = 24;

const PALETTE: [Color; 6] = [
    Color::Green,
    Color::Red,
    Color::Blue,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
];

/// One line of a panel
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// One chart: a title, a y-axis unit and its lines
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub unit: &'static str,
    pub series: Vec<Series>,
}

fn points(dataset: &FinancialDataset, name: &str) -> Option<Vec<(f64, f64)>> {
    let values = dataset.column(name)?;
    Some(
        dataset
            .years()
            .iter()
            .zip(values)
            .map(|(year, &v)| (f64::from(year.value()), v))
            .collect(),
    )
}

fn series(dataset: &FinancialDataset, name: &str) -> Option<Series> {
    Some(Series {
        label: name.to_string(),
        points: points(dataset, name)?,
    })
}

fn skipped(title: &str) -> Option<Panel> {
    tracing::debug!(panel = title, "Skipping chart panel, missing columns");
    None
}

fn lines(dataset: &FinancialDataset, title: &str, unit: &'static str, names: &[&str]) -> Option<Panel> {
    let Some(series) = names
        .iter()
        .map(|name| series(dataset, name))
        .collect::<Option<Vec<_>>>()
    else {
        return skipped(title);
    };
    Some(Panel {
        title: title.to_string(),
        unit,
        series,
    })
}

/// Cumulative lines: the k-th line is the sum of the first k components
fn stacked(dataset: &FinancialDataset, title: &str, names: &[&str]) -> Option<Panel> {
    let Some(parts) = names
        .iter()
        .map(|name| dataset.column(name))
        .collect::<Option<Vec<_>>>()
    else {
        return skipped(title);
    };

    let mut running = vec![0.0; dataset.len()];
    let series = names
        .iter()
        .zip(parts)
        .map(|(name, values)| {
            for (acc, v) in running.iter_mut().zip(values) {
                *acc += v;
            }
            Series {
                label: format!("+ {name}"),
                points: dataset
                    .years()
                    .iter()
                    .zip(&running)
                    .map(|(year, &v)| (f64::from(year.value()), v))
                    .collect(),
            }
        })
        .collect();

    Some(Panel {
        title: title.to_string(),
        unit: "M€",
        series,
    })
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Primary line plus a secondary one rescaled onto the primary's range.
///
/// The secondary label carries its own bounds, standing in for a right axis.
fn dual(
    dataset: &FinancialDataset,
    title: &str,
    unit: &'static str,
    primary: &str,
    secondary: &str,
) -> Option<Panel> {
    let (Some(main), Some(other)) = (series(dataset, primary), points(dataset, secondary)) else {
        return skipped(title);
    };
    let (p_lo, p_hi) = min_max(main.points.iter().map(|p| p.1))?;
    let (s_lo, s_hi) = min_max(other.iter().map(|p| p.1))?;

    let rescaled = other
        .iter()
        .map(|&(x, y)| {
            let t = if s_hi > s_lo {
                (y - s_lo) / (s_hi - s_lo)
            } else {
                0.5
            };
            (x, p_lo + t * (p_hi - p_lo))
        })
        .collect();

    Some(Panel {
        title: title.to_string(),
        unit,
        series: vec![
            main,
            Series {
                label: format!("{secondary} (droite {s_lo:.2}..{s_hi:.2})"),
                points: rescaled,
            },
        ],
    })
}

/// Every panel the dataset has columns for, in display order
#[must_use]
pub fn panels(dataset: &FinancialDataset) -> Vec<Panel> {
    let investments: Vec<&str> = dataset
        .columns_in(MetricCategory::Investment)
        .map(|c| c.name.as_str())
        .collect();

    let (investment_lines, investment_stack) = if investments.is_empty() {
        (
            skipped("Répartition des investissements"),
            skipped("Répartition sectorielle des investissements"),
        )
    } else {
        (
            lines(dataset, "Répartition des investissements", "M€", &investments),
            stacked(
                dataset,
                "Répartition sectorielle des investissements",
                &investments,
            ),
        )
    };

    [
        lines(
            dataset,
            "Évolution des recettes et dépenses",
            "M€",
            &[RECETTES_TOTALES, DEPENSES_TOTALES],
        ),
        stacked(dataset, "Structure des recettes", &REVENUE_COMPONENTS),
        stacked(dataset, "Structure des dépenses", &EXPENSE_COMPONENTS),
        investment_lines,
        investment_stack,
        dual(
            dataset,
            "Évolution de la dette",
            "M€",
            DETTE_TOTALE,
            TAUX_ENDETTEMENT,
        ),
        dual(
            dataset,
            "Indicateurs de performance",
            "M€",
            EPARGNE_BRUTE,
            TAUX_FISCALITE,
        ),
        dual(
            dataset,
            "Évolution démographique",
            "habitants",
            POPULATION,
            MENAGES,
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Render one panel to text, `width` x `height` cells
#[must_use]
pub fn render_panel(panel: &Panel, width: u16, height: u16) -> String {
    let all = || panel.series.iter().flat_map(|s| s.points.iter());
    let (x_lo, x_hi) = min_max(all().map(|p| p.0)).unwrap_or((0.0, 1.0));
    let (y_lo, y_hi) = min_max(all().map(|p| p.1)).unwrap_or((0.0, 1.0));
    let padding = (y_hi - y_lo).abs().max(1e-6) * 0.05;
    let (y_lo, y_hi) = (y_lo - padding, y_hi + padding);

    let datasets = panel
        .series
        .iter()
        .zip(PALETTE.iter().cycle())
        .map(|(s, &color)| {
            Dataset::default()
                .name(s.label.clone())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(&s.points)
        })
        .collect::<Vec<_>>();

    let x_axis = Axis::default()
        .title("Année")
        .bounds([x_lo, x_hi])
        .labels(vec![
            Span::raw(format!("{x_lo:.0}")),
            Span::raw(format!("{:.0}", (x_lo + x_hi) / 2.0)),
            Span::raw(format!("{x_hi:.0}")),
        ]);
    let y_axis = Axis::default()
        .title(panel.unit)
        .bounds([y_lo, y_hi])
        .labels(vec![
            Span::raw(format!("{y_lo:.1}")),
            Span::raw(format!("{:.1}", (y_lo + y_hi) / 2.0)),
            Span::raw(format!("{y_hi:.1}")),
        ]);

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(panel.title.clone()),
        )
        .x_axis(x_axis)
        .y_axis(y_axis)
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    chart.render(area, &mut buffer);
    buffer_to_text(&buffer)
}

fn buffer_to_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::with_capacity(usize::from(area.width + 1) * usize::from(area.height));
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// The full analysis: a heading then every panel
#[must_use]
pub fn render_analysis(dataset: &FinancialDataset) -> String {
    let period = match (dataset.years().first(), dataset.years().last()) {
        (Some(first), Some(last)) => format!(" ({first}-{last})"),
        _ => String::new(),
    };
    let mut out = format!(
        "Analyse financière - Commune de {}{period}\n\n",
        dataset.municipality()
    );
    for panel in panels(dataset) {
        out.push_str(&render_panel(&panel, PANEL_WIDTH, PANEL_HEIGHT));
        out.push('\n');
    }
    out
}

/// Write `<slug>_financial_analysis.txt` into `dir`
pub fn write_charts(dataset: &FinancialDataset, slug: &str, dir: &Path) -> color_eyre::Result<PathBuf> {
    let path = dir.join(format!("{slug}_financial_analysis.txt"));
    std::fs::write(&path, render_analysis(dataset))
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "Charts written");
    Ok(path)
}
