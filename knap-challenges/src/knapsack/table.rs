use ndarray::{s, Array2};

/// Value table of the dynamic program. Cell `(i, c)` is the best value
/// reachable with the first `i` items under capacity `c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpTable {
    cells: Array2<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePreview {
    pub rows: Vec<Vec<u64>>,
    pub truncated: bool,
}

impl DpTable {
    pub fn new(cells: Array2<u64>) -> Self {
        Self { cells }
    }

    /// Number of rows, i.e. item count plus one.
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns, i.e. capacity plus one.
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    pub fn get(&self, row: usize, capacity: usize) -> Option<u64> {
        self.cells.get((row, capacity)).copied()
    }

    pub fn optimal_value(&self) -> u64 {
        match (self.rows(), self.cols()) {
            (0, _) | (_, 0) => 0,
            (rows, cols) => self.cells[[rows - 1, cols - 1]],
        }
    }

    pub fn cells(&self) -> &Array2<u64> {
        &self.cells
    }

    /// Top-left corner of the table, at most `max_rows` x `max_cols`.
    pub fn preview(&self, max_rows: usize, max_cols: usize) -> TablePreview {
        let rows = self.rows().min(max_rows);
        let cols = self.cols().min(max_cols);
        TablePreview {
            rows: self
                .cells
                .slice(s![..rows, ..cols])
                .outer_iter()
                .map(|row| row.to_vec())
                .collect(),
            truncated: rows < self.rows() || cols < self.cols(),
        }
    }
}
