//! Plain-text rendering of labeled numeric tables.
//!
//! A rendering sink only: tables collect labels and numbers, `Display` turns
//! them into aligned fixed-width text. No I/O happens here.

use crate::equivalence::CoefficientComparison;
use crate::error::{DecorrError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

const VALUE_WIDTH: usize = 14;
const VALUE_PRECISION: usize = 6;

/// A titled table of labeled numeric rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryTable {
    title: String,
    headers: Vec<String>,
    rows: Vec<(String, Vec<f64>)>,
}

impl SummaryTable {
    /// Create an empty table with a title and one header per value column.
    pub fn new(title: &str, headers: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a labeled row.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the number of values differs from the
    /// number of header columns.
    pub fn push_row(&mut self, label: &str, values: &[f64]) -> Result<()> {
        if values.len() != self.headers.len() {
            return Err(DecorrError::ShapeMismatch {
                expected: format!("{} values per row", self.headers.len()),
                actual: format!("{} values", values.len()),
            });
        }
        self.rows.push((label.to_string(), values.to_vec()));
        Ok(())
    }

    /// Number of data rows currently in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn label_width(&self) -> usize {
        self.rows
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for SummaryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self.label_width();
        writeln!(f, "{}", self.title)?;

        write!(f, "{:<w$}", "", w = label_width)?;
        for header in &self.headers {
            write!(f, "{:>w$}", header, w = VALUE_WIDTH)?;
        }
        writeln!(f)?;

        for (label, values) in &self.rows {
            write!(f, "{:<w$}", label, w = label_width)?;
            for value in values {
                write!(f, "{:>w$.p$}", value, w = VALUE_WIDTH, p = VALUE_PRECISION)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Lay out a [`CoefficientComparison`] as a two-row table: one row per
/// regressor, simple slope next to joint slope.
pub fn comparison_table(cmp: &CoefficientComparison) -> SummaryTable {
    let title = format!(
        "Simple vs. joint regression slopes (corr(x, z) = {:+.2e})",
        cmp.regressor_correlation
    );
    let mut table = SummaryTable::new(&title, &["simple", "joint", "difference"]);
    // Row shapes are fixed here, so the pushes cannot fail.
    let _ = table.push_row("x", &[cmp.simple_x, cmp.joint_x, cmp.simple_x - cmp.joint_x]);
    let _ = table.push_row("z", &[cmp.simple_z, cmp.joint_z, cmp.simple_z - cmp.joint_z]);
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_must_match_headers() {
        let mut table = SummaryTable::new("t", &["a", "b"]);
        assert!(table.push_row("row", &[1.0]).is_err());
        assert!(table.push_row("row", &[1.0, 2.0]).is_ok());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_display_contains_labels_and_headers() {
        let mut table = SummaryTable::new("Correlations", &["r"]);
        table.push_row("x vs resid", &[0.000001]).unwrap();
        let text = table.to_string();
        assert!(text.contains("Correlations"));
        assert!(text.contains("x vs resid"));
        assert!(text.contains("0.000001"));
    }

    #[test]
    fn test_comparison_table_layout() {
        let cmp = CoefficientComparison {
            regressor_correlation: 1e-12,
            simple_x: 0.5,
            simple_z: -0.25,
            joint_x: 0.5,
            joint_z: -0.25,
        };
        let table = comparison_table(&cmp);
        assert_eq!(table.len(), 2);
        let text = table.to_string();
        assert!(text.contains("simple"));
        assert!(text.contains("joint"));
    }
}
