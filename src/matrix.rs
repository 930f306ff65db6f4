/// Dense row-major matrix. Rows are alternatives and columns are criteria, both in the order the
/// caller supplied them.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    columns: usize,
    cells: Vec<f64>,
}

impl Matrix {
    pub(crate) fn with_capacity(rows: usize, columns: usize) -> Self {
        Self {
            columns,
            cells: Vec::with_capacity(rows * columns),
        }
    }

    pub(crate) fn push_row(&mut self, row: impl IntoIterator<Item = f64>) {
        let len = self.cells.len();
        self.cells.extend(row);
        debug_assert_eq!(self.cells.len() - len, self.columns);
    }

    pub fn rows(&self) -> usize {
        if self.columns == 0 {
            return 0;
        }
        self.cells.len() / self.columns
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.cells[row * self.columns + column]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.cells[row * self.columns..(row + 1) * self.columns]
    }

    pub fn column(&self, column: usize) -> impl Iterator<Item = f64> + Clone + '_ {
        self.cells[column..].iter().step_by(self.columns).copied()
    }

    pub(crate) fn update_column(&mut self, column: usize, mut f: impl FnMut(f64) -> f64) {
        for cell in self.cells[column..].iter_mut().step_by(self.columns) {
            *cell = f(*cell);
        }
    }
}
