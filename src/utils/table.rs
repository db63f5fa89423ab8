//! Table rendering utilities for CLI outputs.

pub struct Column {
    pub header: String,
    /// Minimum width; cells are padded to it but never truncated.
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn push_line(&self, out: &mut String, cells: &[&str]) {
        let last = self.columns.len().saturating_sub(1);
        for (i, col) in self.columns.iter().enumerate() {
            let cell = cells.get(i).copied().unwrap_or("");
            if i == last {
                out.push_str(cell);
            } else {
                out.push_str(&format!("{:<width$} ", cell, width = col.width));
            }
        }
        out.push('\n');
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        let headers: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        self.push_line(&mut out, &headers);

        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            self.push_line(&mut out, &cells);
        }

        out
    }
}
