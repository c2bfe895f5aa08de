/// A catalog sheet held in memory: one header row and string cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CatalogTable {
    /// Rows longer than the header row widen it with unnamed columns,
    /// so every row ends up as wide as the header.
    pub fn new(mut headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let widest = rows.iter().map(Vec::len).max().unwrap_or(0);
        if widest > headers.len() {
            headers.resize(widest, String::new());
        }
        let mut table = Self { headers, rows };
        table.pad_rows();
        table
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Index of `name`, appending an empty column when it is absent.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(idx) = self.column_index(name) {
            return idx;
        }
        self.headers.push(name.to_string());
        self.pad_rows();
        self.headers.len() - 1
    }

    /// Trimmed cell value; blank cells read as `None`.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn set_cell(&mut self, row: usize, col: usize, value: &str) {
        if let Some(cells) = self.rows.get_mut(row) {
            if cells.len() <= col {
                cells.resize(col + 1, String::new());
            }
            cells[col] = value.to_string();
        }
    }

    fn pad_rows(&mut self) {
        let width = self.headers.len();
        for row in &mut self.rows {
            if row.len() < width {
                row.resize(width, String::new());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CatalogTable {
        CatalogTable::new(
            vec!["Item".into(), "Description".into()],
            vec![vec!["A1".into()], vec!["B2".into(), "  Stapler ".into()]],
        )
    }

    #[test]
    fn short_rows_are_padded() {
        let table = sample();
        assert_eq!(table.rows[0], vec!["A1".to_string(), String::new()]);
    }

    #[test]
    fn long_rows_widen_the_header_and_target_goes_after_them() {
        let mut table = CatalogTable::new(
            vec!["Item".into(), "Description".into()],
            vec![
                vec!["A1".into(), "Stapler".into(), String::new(), String::new()],
                vec!["B2".into(), "Pen".into()],
            ],
        );
        assert_eq!(table.headers, vec!["Item", "Description", "", ""]);
        assert!(table.rows.iter().all(|r| r.len() == 4));

        let idx = table.ensure_column("Category");
        assert_eq!(idx, 4);
        assert!(table.rows.iter().all(|r| r.len() == 5));
    }

    #[test]
    fn blank_cells_read_as_none() {
        let table = sample();
        assert_eq!(table.cell(0, 1), None);
        assert_eq!(table.cell(1, 1), Some("Stapler"));
        assert_eq!(table.cell(9, 0), None);
    }

    #[test]
    fn ensure_column_appends_once() {
        let mut table = sample();
        let idx = table.ensure_column("Category");
        assert_eq!(idx, 2);
        assert_eq!(table.ensure_column("Category"), 2);
        assert!(table.rows.iter().all(|r| r.len() == 3));
        table.set_cell(1, idx, "Office Products & Supplies");
        assert_eq!(table.cell(1, idx), Some("Office Products & Supplies"));
    }
}
