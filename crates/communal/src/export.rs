//! CSV export and console preview

use std::io;
use std::path::{Path, PathBuf};

use color_eyre::eyre::WrapErr;
use communal_core::model::FinancialDataset;
use communal_core::model::columns::{
    ANNEE, DEPENSES_TOTALES, DETTE_TOTALE, POPULATION, RECETTES_TOTALES,
};

/// Columns shown by [`preview`], in display order
pub const PREVIEW_COLUMNS: [&str; 5] = [
    ANNEE,
    POPULATION,
    RECETTES_TOTALES,
    DEPENSES_TOTALES,
    DETTE_TOTALE,
];

/// `<slug>_financial_data_<first>_<last>.csv`
#[must_use]
pub fn csv_file_name(slug: &str, dataset: &FinancialDataset) -> String {
    match (dataset.years().first(), dataset.years().last()) {
        (Some(first), Some(last)) => format!("{slug}_financial_data_{first}_{last}.csv"),
        _ => format!("{slug}_financial_data.csv"),
    }
}

/// Write the dataset as CSV: one header row, then one row per year
pub fn write_csv<W: io::Write>(dataset: &FinancialDataset, writer: W) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(dataset.header())?;

    for row in dataset.rows() {
        let record = std::iter::once(row.year.to_string())
            .chain(row.values().map(|v| v.to_string()));
        writer.write_record(record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Export into `dir`, returning the path written
pub fn export_csv(dataset: &FinancialDataset, slug: &str, dir: &Path) -> color_eyre::Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .wrap_err_with(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(csv_file_name(slug, dataset));
    let file = std::fs::File::create(&path)
        .wrap_err_with(|| format!("Failed to create {}", path.display()))?;
    write_csv(dataset, io::BufWriter::new(file))
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(
        municipality = dataset.municipality(),
        rows = dataset.len(),
        path = %path.display(),
        "Dataset exported"
    );
    Ok(path)
}

/// Fixed-width table of the first `rows` years.
///
/// Columns the dataset does not have are left out.
#[must_use]
pub fn preview(dataset: &FinancialDataset, rows: usize) -> String {
    let columns: Vec<&str> = PREVIEW_COLUMNS
        .iter()
        .copied()
        .filter(|&name| name == ANNEE || dataset.has_column(name))
        .collect();
    let widths: Vec<usize> = columns.iter().map(|c| c.len().max(10)).collect();

    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(&name, &width)| format!("{name:>width$}"))
        .collect();
    let mut out = header.join(" ");
    out.push('\n');

    for record in dataset.rows().take(rows) {
        let cells: Vec<String> = columns
            .iter()
            .zip(&widths)
            .filter_map(|(&name, &width)| {
                if name == ANNEE {
                    Some(format!("{:>width$}", record.year.to_string()))
                } else {
                    record.get(name).map(|value| format!("{value:>width$.2}"))
                }
            })
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}
