#![deny(unsafe_code)]

/// A CSV artifact held exactly as read: header order, row order and row count
/// match the source file. Tables are read once, rendered once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ArtifactTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ArtifactTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a header, matched case-insensitively.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    }

    /// Cell at (row, column), empty string when the row is short.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map_or("", String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ArtifactTable {
        let mut table = ArtifactTable::new(vec!["Name".to_string(), "Value".to_string()]);
        table.push_row(vec!["alpha".to_string(), "1".to_string()]);
        table.push_row(vec!["beta".to_string()]);
        table
    }

    #[test]
    fn column_index_is_case_insensitive() {
        let table = sample();
        assert_eq!(table.column_index("name"), Some(0));
        assert_eq!(table.column_index("VALUE"), Some(1));
        assert_eq!(table.column_index("missing"), None);
    }

    #[test]
    fn cell_handles_short_rows() {
        let table = sample();
        assert_eq!(table.cell(0, 1), "1");
        assert_eq!(table.cell(1, 1), "");
        assert_eq!(table.cell(5, 0), "");
    }
}
