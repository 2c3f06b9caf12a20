use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use serde::{Serialize, Deserialize};
use super::{check_row_scalars, check_weights, FeatureMatrix};
use crate::error::{EdgeStrengthError, Result};

/// A sparse (E, W) feature matrix in compressed sparse row layout.
///
/// Row `i` owns the entries `indptr[i]..indptr[i + 1]` of `indices` and `data`.
/// Column indices within a row are strictly increasing.
/// Deserialized payloads go through the same validation as [`SparseFeatures::new`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSparseFeatures")]
pub struct SparseFeatures {
    rows: usize,
    cols: usize,
    indptr: Vec<usize>,
    indices: Vec<usize>,
    data: Vec<f64>,
}

/// Unchecked CSR buffers as they appear on the wire.
#[derive(Deserialize)]
struct RawSparseFeatures {
    rows: usize,
    cols: usize,
    indptr: Vec<usize>,
    indices: Vec<usize>,
    data: Vec<f64>,
}

impl TryFrom<RawSparseFeatures> for SparseFeatures {
    type Error = EdgeStrengthError;

    fn try_from(raw: RawSparseFeatures) -> Result<Self> {
        SparseFeatures::new(raw.rows, raw.cols, raw.indptr, raw.indices, raw.data)
    }
}

impl SparseFeatures {
    /// Build a matrix from raw CSR buffers, validating their structure.
    pub fn new(
        rows: usize,
        cols: usize,
        indptr: Vec<usize>,
        indices: Vec<usize>,
        data: Vec<f64>,
    ) -> Result<Self> {
        if indptr.len() != rows + 1 {
            return Err(EdgeStrengthError::dimension_mismatch(
                format!("indptr of length {}", rows + 1),
                format!("indptr of length {}", indptr.len()),
            ));
        }
        if indices.len() != data.len() {
            return Err(EdgeStrengthError::dimension_mismatch(
                format!("{} values to match indices", indices.len()),
                format!("{} values", data.len()),
            ));
        }
        if indptr[0] != 0 || indptr[rows] != indices.len() {
            return Err(EdgeStrengthError::invalid_parameter(
                "indptr".to_string(),
                format!("must start at 0 and end at {}", indices.len()),
            ));
        }
        // Non-decreasing from 0 to nnz keeps every row slice in bounds.
        if let Some(row) = indptr.windows(2).position(|pair| pair[0] > pair[1]) {
            return Err(EdgeStrengthError::invalid_parameter(
                "indptr".to_string(),
                format!("decreases at row {}", row),
            ));
        }
        for row in 0..rows {
            let (start, end) = (indptr[row], indptr[row + 1]);
            let row_indices = &indices[start..end];
            if row_indices.iter().any(|&col| col >= cols) {
                return Err(EdgeStrengthError::invalid_parameter(
                    "indices".to_string(),
                    format!("row {} has a column index outside 0..{}", row, cols),
                ));
            }
            if row_indices.windows(2).any(|pair| pair[0] >= pair[1]) {
                return Err(EdgeStrengthError::invalid_parameter(
                    "indices".to_string(),
                    format!("row {} column indices are not strictly increasing", row),
                ));
            }
        }

        Ok(SparseFeatures { rows, cols, indptr, indices, data })
    }

    /// Build a matrix from `(row, col, value)` triplets. Duplicate coordinates are summed.
    pub fn from_triplets(rows: usize, cols: usize, triplets: &[(usize, usize, f64)]) -> Result<Self> {
        let mut sorted = triplets.to_vec();
        if let Some(&(row, col, _)) = sorted.iter().find(|&&(r, c, _)| r >= rows || c >= cols) {
            return Err(EdgeStrengthError::dimension_mismatch(
                format!("coordinates within ({}, {})", rows, cols),
                format!("({}, {})", row, col),
            ));
        }
        sorted.sort_by_key(|&(row, col, _)| (row, col));

        let mut indptr = vec![0; rows + 1];
        let mut indices = Vec::with_capacity(sorted.len());
        let mut data: Vec<f64> = Vec::with_capacity(sorted.len());
        let mut last: Option<(usize, usize)> = None;

        for (row, col, value) in sorted {
            if last == Some((row, col)) {
                if let Some(previous) = data.last_mut() {
                    *previous += value;
                }
                continue;
            }
            indices.push(col);
            data.push(value);
            indptr[row + 1] += 1;
            last = Some((row, col));
        }
        for row in 0..rows {
            indptr[row + 1] += indptr[row];
        }

        Self::new(rows, cols, indptr, indices, data)
    }

    /// Keep the non-zero entries of a dense matrix.
    pub fn from_dense(dense: ArrayView2<f64>) -> Self {
        let (rows, cols) = dense.dim();
        let mut indptr = Vec::with_capacity(rows + 1);
        let mut indices = Vec::new();
        let mut data = Vec::new();

        indptr.push(0);
        for row in dense.rows() {
            for (col, &value) in row.iter().enumerate() {
                if value != 0.0 {
                    indices.push(col);
                    data.push(value);
                }
            }
            indptr.push(indices.len());
        }

        SparseFeatures { rows, cols, indptr, indices, data }
    }

    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    /// Stored `(column, value)` pairs of one row. Panics when `row >= num_edges()`.
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let (start, end) = (self.indptr[row], self.indptr[row + 1]);
        self.indices[start..end].iter().copied().zip(self.data[start..end].iter().copied())
    }

    /// Value at `(row, col)`, zero when not stored. Panics when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.rows && col < self.cols, "index ({}, {}) out of bounds", row, col);
        let (start, end) = (self.indptr[row], self.indptr[row + 1]);
        match self.indices[start..end].binary_search(&col) {
            Ok(offset) => self.data[start + offset],
            Err(_) => 0.0,
        }
    }

    pub fn to_dense(&self) -> Array2<f64> {
        let mut dense = Array2::zeros((self.rows, self.cols));
        for row in 0..self.rows {
            for (col, value) in self.row(row) {
                dense[[row, col]] = value;
            }
        }
        dense
    }
}

impl FeatureMatrix for SparseFeatures {
    type Scaled = SparseFeatures;

    fn num_edges(&self) -> usize {
        self.rows
    }

    fn num_features(&self) -> usize {
        self.cols
    }

    fn dot_weights(&self, weights: ArrayView1<f64>) -> Result<Array1<f64>> {
        check_weights(self.dims(), weights.len())?;
        Ok(Array1::from_shape_fn(self.rows, |row| {
            self.row(row).map(|(col, value)| value * weights[col]).sum()
        }))
    }

    fn scale_rows(&self, scalars: ArrayView1<f64>) -> Result<SparseFeatures> {
        check_row_scalars(self.dims(), scalars.len())?;
        let mut scaled = self.clone();
        for row in 0..self.rows {
            let scalar = scalars[row];
            for value in &mut scaled.data[self.indptr[row]..self.indptr[row + 1]] {
                *value *= scalar;
            }
        }
        Ok(scaled)
    }
}
