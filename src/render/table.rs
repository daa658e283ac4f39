//! Classification-report table: transposition and color scaling.

use indexmap::IndexMap;

use crate::artifact::ClassMetrics;

/// Column order of the transposed classification report.
pub const REPORT_COLUMNS: [&str; 4] = ["precision", "recall", "f1-score", "support"];

/// A table cell: display text plus a color intensity in [0, 1] for the
/// per-column sequential gradient (higher value, more saturated).
#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub text: String,
    pub intensity: f64,
}

/// One table row: the class/aggregate label and its metric cells.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub label: String,
    pub cells: Vec<TableCell>,
}

/// Row-major table handed to the display surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
}

/// Transpose the per-class metrics map into a row-per-class table.
///
/// Row order is the map's insertion order; numeric cells are formatted to
/// two decimals and carry per-column min-max intensities.
pub fn transpose_report(report: &IndexMap<String, ClassMetrics>) -> ReportTable {
    let values: Vec<(&String, [f64; 4])> = report
        .iter()
        .map(|(label, m)| (label, [m.precision, m.recall, m.f1_score, m.support]))
        .collect();

    let mut rows: Vec<TableRow> = values
        .iter()
        .map(|(label, row)| TableRow {
            label: (*label).clone(),
            cells: row
                .iter()
                .map(|v| TableCell {
                    text: format!("{v:.2}"),
                    intensity: 0.0,
                })
                .collect(),
        })
        .collect();

    for col in 0..REPORT_COLUMNS.len() {
        let column: Vec<f64> = values.iter().map(|(_, row)| row[col]).collect();
        for (row, intensity) in rows.iter_mut().zip(column_intensities(&column)) {
            row.cells[col].intensity = intensity;
        }
    }

    ReportTable {
        columns: REPORT_COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows,
    }
}

/// Min-max normalize a column into [0, 1]. A constant (or single-value)
/// column maps to a uniform mid intensity.
pub fn column_intensities(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    if !span.is_finite() || span <= f64::EPSILON {
        return vec![0.5; values.len()];
    }

    values
        .iter()
        .map(|v| ((v - min) / span).clamp(0.0, 1.0))
        .collect()
}
