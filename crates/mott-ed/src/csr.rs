//! Compressed sparse row storage for the many-body Hamiltonian.
//!
//! Assembly happens in an insertion-friendly per-row triplet form; the
//! compressed form is built once from it and afterwards only serves
//! matrix-vector products inside the eigensolver.

/// Sparse matrix in Compressed Sparse Row format. Values stored as f64.
pub struct CsrMatrix {
    pub nrows: usize,
    pub row_ptr: Vec<u32>,
    pub col_indices: Vec<u32>,
    pub values: Vec<f64>,
}

impl CsrMatrix {
    /// Compress per-row `(col, value)` lists into CSR.
    ///
    /// Each row is sorted by column index and duplicate columns are merged
    /// by accumulation, so repeated insertions at the same element add up.
    pub fn from_rows(rows: Vec<Vec<(u32, f64)>>) -> Self {
        let nrows = rows.len();
        let mut row_ptr = Vec::with_capacity(nrows + 1);
        let mut col_indices = Vec::new();
        let mut values = Vec::new();

        row_ptr.push(0u32);

        for mut row in rows {
            row.sort_by_key(|&(col, _)| col);

            let mut merged: Vec<(u32, f64)> = Vec::new();
            for (col, val) in row {
                if let Some(last) = merged.last_mut() {
                    if last.0 == col {
                        last.1 += val;
                        continue;
                    }
                }
                merged.push((col, val));
            }

            for (col, val) in merged {
                col_indices.push(col);
                values.push(val);
            }
            row_ptr.push(col_indices.len() as u32);
        }

        Self {
            nrows,
            row_ptr,
            col_indices,
            values,
        }
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Compute y = A·x.
    pub fn matvec(&self, x: &[f64]) -> Vec<f64> {
        let mut y = vec![0.0; self.nrows];
        for i in 0..self.nrows {
            let start = self.row_ptr[i] as usize;
            let end = self.row_ptr[i + 1] as usize;
            let mut sum = 0.0;
            for k in start..end {
                sum += self.values[k] * x[self.col_indices[k] as usize];
            }
            y[i] = sum;
        }
        y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_sorts_and_merges() {
        // Row 0: entries at cols 2 and 0, plus a duplicate at col 2.
        let rows = vec![vec![(2, 1.0), (0, 3.0), (2, 0.5)], vec![(1, -1.0)]];
        let m = CsrMatrix::from_rows(rows);

        assert_eq!(m.nrows, 2);
        assert_eq!(m.nnz(), 3);
        assert_eq!(m.row_ptr, vec![0, 2, 3]);
        assert_eq!(m.col_indices, vec![0, 2, 1]);
        assert_eq!(m.values, vec![3.0, 1.5, -1.0]);
    }

    #[test]
    fn test_matvec_identity() {
        let rows = (0..4).map(|i| vec![(i as u32, 1.0)]).collect();
        let m = CsrMatrix::from_rows(rows);

        let x = vec![1.0, -2.0, 3.0, 0.5];
        assert_eq!(m.matvec(&x), x);
    }

    #[test]
    fn test_matvec_small_matrix() {
        // [[2, -1], [-1, 2]]
        let rows = vec![vec![(0, 2.0), (1, -1.0)], vec![(0, -1.0), (1, 2.0)]];
        let m = CsrMatrix::from_rows(rows);

        let y = m.matvec(&[1.0, 1.0]);
        assert!((y[0] - 1.0).abs() < 1e-15);
        assert!((y[1] - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_empty_rows_kept() {
        let rows = vec![Vec::new(), vec![(1, 4.0)], Vec::new()];
        let m = CsrMatrix::from_rows(rows);

        assert_eq!(m.nrows, 3);
        assert_eq!(m.row_ptr, vec![0, 0, 1, 1]);
        let y = m.matvec(&[1.0, 2.0, 3.0]);
        assert_eq!(y, vec![0.0, 8.0, 0.0]);
    }
}
