//! Named-Column Feature Table

use ndarray::{Array2, ArrayView1, ArrayView2};
use thiserror::Error;

/// Errors constructing a feature frame
#[derive(Debug, Clone, Error)]
pub enum FrameError {
    /// Column names and data width disagree
    #[error("Frame has {names} column names but {columns} data columns")]
    ColumnCountMismatch { names: usize, columns: usize },
}

/// A dense numeric table with named columns
///
/// Row order is meaningful and preserved by every operation; the delay
/// classifier relies on the i-th feature row matching the i-th label row.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureFrame {
    columns: Vec<String>,
    data: Array2<f64>,
}

impl FeatureFrame {
    /// Create a frame from column names and data
    pub fn new(columns: Vec<String>, data: Array2<f64>) -> Result<Self, FrameError> {
        if columns.len() != data.ncols() {
            return Err(FrameError::ColumnCountMismatch {
                names: columns.len(),
                columns: data.ncols(),
            });
        }
        Ok(Self { columns, data })
    }

    /// Create a single-column frame
    pub fn single_column(name: &str, values: Vec<f64>) -> Self {
        let n = values.len();
        Self {
            columns: vec![name.to_string()],
            data: Array2::from_shape_vec((n, 1), values)
                .unwrap_or_else(|_| Array2::zeros((0, 1))),
        }
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.data.ncols()
    }

    /// Column names, in order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The underlying matrix
    pub fn data(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// View of a column by name
    pub fn column(&self, name: &str) -> Option<ArrayView1<'_, f64>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(self.data.column(idx))
    }

    /// Project onto the given columns, in the given order
    ///
    /// Columns absent from this frame come back as all zeros; columns of
    /// this frame not named are dropped. Row count and order are unchanged.
    pub fn select(&self, names: &[&str]) -> FeatureFrame {
        let mut data = Array2::zeros((self.nrows(), names.len()));
        for (out_idx, name) in names.iter().enumerate() {
            if let Some(src) = self.column(name) {
                data.column_mut(out_idx).assign(&src);
            }
        }
        FeatureFrame {
            columns: names.iter().map(|n| n.to_string()).collect(),
            data,
        }
    }
}
