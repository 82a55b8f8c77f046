//! CSV artifact loading.
//!
//! Pipeline artifacts are small, clean CSV files with a single header row.
//! Loading preserves them verbatim: header order, row order and row count in
//! the returned table match the file. Cells are trimmed and BOM-stripped;
//! lines that are entirely blank are not rows and are dropped.

use std::path::Path;

use csv::ReaderBuilder;

use telemark_model::{ArtifactTable, CoefficientRow};

use crate::error::{IngestError, Result};

const FEATURE_COLUMN: &str = "feature";
const COEFFICIENT_COLUMN: &str = "coefficient";

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV artifact into an [`ArtifactTable`].
///
/// Rows shorter than the header are padded with empty cells; rows longer than
/// the header keep only the headed columns.
pub fn read_artifact_table(path: &Path) -> Result<ArtifactTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::csv(path, &e))?;

    let mut records = reader.records();
    let headers: Vec<String> = match records.next() {
        Some(record) => record
            .map_err(|e| IngestError::csv(path, &e))?
            .iter()
            .map(normalize_cell)
            .collect(),
        None => {
            return Err(IngestError::Csv {
                path: path.to_path_buf(),
                message: "file has no header row".to_string(),
            });
        }
    };

    let mut table = ArtifactTable::new(headers);
    for record in records {
        let record = record.map_err(|e| IngestError::csv(path, &e))?;
        let cells: Vec<String> = record.iter().map(normalize_cell).collect();
        if cells.iter().all(|cell| cell.is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(table.headers.len());
        for idx in 0..table.headers.len() {
            row.push(cells.get(idx).cloned().unwrap_or_default());
        }
        table.push_row(row);
    }
    Ok(table)
}

/// Read the coefficient artifact.
///
/// Columns are located by header name, case-insensitively, so the pipeline is
/// free to add or reorder columns. Row numbers in errors are 1-based data
/// rows, matching what a reader sees below the header.
pub fn read_coefficients(path: &Path) -> Result<Vec<CoefficientRow>> {
    let table = read_artifact_table(path)?;
    let feature_idx =
        table
            .column_index(FEATURE_COLUMN)
            .ok_or_else(|| IngestError::MissingColumn {
                path: path.to_path_buf(),
                column: FEATURE_COLUMN.to_string(),
            })?;
    let value_idx =
        table
            .column_index(COEFFICIENT_COLUMN)
            .ok_or_else(|| IngestError::MissingColumn {
                path: path.to_path_buf(),
                column: COEFFICIENT_COLUMN.to_string(),
            })?;

    let mut rows = Vec::with_capacity(table.row_count());
    for idx in 0..table.row_count() {
        let feature = table.cell(idx, feature_idx);
        let raw_value = table.cell(idx, value_idx);
        let value = raw_value
            .parse::<f64>()
            .map_err(|_| IngestError::InvalidCoefficient {
                path: path.to_path_buf(),
                row: idx + 1,
                value: raw_value.to_string(),
            })?;
        rows.push(CoefficientRow::new(feature, value));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn preserves_row_count_and_column_order() {
        let file = csv_file("name,type,description\nage,numeric,Client age\njob,categorical,Job kind\n");
        let table = read_artifact_table(file.path()).unwrap();
        assert_eq!(table.headers, vec!["name", "type", "description"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0], vec!["age", "numeric", "Client age"]);
        assert_eq!(table.rows[1], vec!["job", "categorical", "Job kind"]);
    }

    #[test]
    fn strips_bom_and_pads_short_rows() {
        let file = csv_file("\u{feff}name,value\nmax_depth\n");
        let table = read_artifact_table(file.path()).unwrap();
        assert_eq!(table.headers[0], "name");
        assert_eq!(table.rows[0], vec!["max_depth", ""]);
    }

    #[test]
    fn blank_lines_are_not_rows() {
        let file = csv_file("name,value\n,\na,1\n");
        let table = read_artifact_table(file.path()).unwrap();
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn empty_file_is_an_error() {
        let file = csv_file("");
        let error = read_artifact_table(file.path()).unwrap_err();
        assert!(matches!(error, IngestError::Csv { .. }));
    }

    #[test]
    fn coefficients_parse_by_header_name() {
        let file = csv_file("coefficient,feature\n0.42,poutcome_success\n-1.5,contact_unknown\n");
        let rows = read_coefficients(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].feature, "poutcome_success");
        assert_eq!(rows[0].value, 0.42);
        assert_eq!(rows[1].value, -1.5);
    }

    #[test]
    fn coefficient_header_is_case_insensitive() {
        let file = csv_file("Feature,Coefficient\nbalance,0.1\n");
        let rows = read_coefficients(file.path()).unwrap();
        assert_eq!(rows[0].feature, "balance");
    }

    #[test]
    fn bad_coefficient_reports_row_number() {
        let file = csv_file("feature,coefficient\nage,0.3\nhousing,not-a-number\n");
        let error = read_coefficients(file.path()).unwrap_err();
        match error {
            IngestError::InvalidCoefficient { row, value, .. } => {
                assert_eq!(row, 2);
                assert_eq!(value, "not-a-number");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_coefficient_column_is_an_error() {
        let file = csv_file("feature,weight\nage,0.3\n");
        let error = read_coefficients(file.path()).unwrap_err();
        assert!(matches!(error, IngestError::MissingColumn { column, .. } if column == "coefficient"));
    }
}
