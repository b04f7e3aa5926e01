//! Matrix type for 2D numeric data.

use std::fmt;

use num_traits::{AsPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

use super::Element;
use crate::error::{Result, VisionError};

/// Maximum absolute per-element difference for two matrices to compare equal.
pub const TOLERANCE: f64 = 1e-6;

/// A dense 2D matrix (row-major storage).
///
/// Every matrix owns its elements; `clone` is a deep copy and no operation
/// returns a view into another matrix's storage.
///
/// # Examples
///
/// ```
/// use vision::primitives::Matrix;
///
/// let m = Matrix::from_rows(&[[1.0_f32, 2.0, 3.0], [4.0, 5.0, 6.0]])
///     .expect("rows have equal length");
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.get(1, 2).expect("in bounds"), 6.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    try_from = "MatrixRepr<T>",
    bound(deserialize = "T: Element + Deserialize<'de>")
)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

/// Unvalidated wire form; converted through [`Matrix::from_vec`].
#[derive(Deserialize)]
struct MatrixRepr<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Element> TryFrom<MatrixRepr<T>> for Matrix<T> {
    type Error = VisionError;

    fn try_from(repr: MatrixRepr<T>) -> Result<Self> {
        Self::from_vec(repr.rows, repr.cols, repr.data)
    }
}

fn element_count(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols).ok_or_else(|| VisionError::ShapeMismatch {
        op: "construct",
        expected: "rows * cols <= usize::MAX".to_string(),
        actual: format!("{rows}x{cols}"),
    })
}

impl<T: Element> Matrix<T> {
    /// Creates a new matrix from a vector of data.
    ///
    /// # Errors
    ///
    /// Returns a shape error if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let expected = element_count(rows, cols)?;
        if data.len() != expected {
            return Err(VisionError::ShapeMismatch {
                op: "from_vec",
                expected: format!("{expected} elements for {rows}x{cols}"),
                actual: format!("{} elements", data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a new matrix by copying `rows * cols` elements from a slice.
    ///
    /// # Errors
    ///
    /// Returns a shape error if the slice length doesn't match rows * cols.
    pub fn from_slice(rows: usize, cols: usize, data: &[T]) -> Result<Self> {
        Self::from_vec(rows, cols, data.to_vec())
    }

    /// Creates a matrix from nested rows.
    ///
    /// An empty outer sequence yields a 0x0 matrix.
    ///
    /// # Errors
    ///
    /// Returns a shape error if the rows have different lengths.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(VisionError::ShapeMismatch {
                    op: "from_rows",
                    expected: format!("{cols} columns"),
                    actual: format!("{} columns in row {idx}", row.len()),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Creates a single-column matrix holding `data`.
    #[must_use]
    pub fn column_vector(data: Vec<T>) -> Self {
        Self {
            rows: data.len(),
            cols: 1,
            data,
        }
    }

    /// Creates a matrix with every element set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    #[must_use]
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: vec![value; rows.saturating_mul(cols)],
            rows,
            cols,
        }
    }

    /// Creates a matrix of zeros.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, T::zero())
    }

    /// Creates an identity matrix.
    ///
    /// # Panics
    ///
    /// Panics if `n * n` overflows `usize`.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut data = vec![T::zero(); n.saturating_mul(n)];
        for i in 0..n {
            data[i * n + i] = T::one();
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the matrix holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows {
            return Err(VisionError::index_out_of_bounds(row, self.rows));
        }
        if col >= self.cols {
            return Err(VisionError::index_out_of_bounds(col, self.cols));
        }
        Ok(row * self.cols + col)
    }

    /// Gets element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns an index error if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let idx = self.offset(row, col)?;
        Ok(self.data[idx])
    }

    /// Mutable reference to the element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns an index error if either index is out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let idx = self.offset(row, col)?;
        Ok(&mut self.data[idx])
    }

    /// Sets element at (row, col).
    ///
    /// # Errors
    ///
    /// Returns an index error if either index is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Returns a copy of one row as a 1 x cols matrix.
    ///
    /// # Errors
    ///
    /// Returns an index error if `row_idx >= rows`.
    pub fn row(&self, row_idx: usize) -> Result<Self> {
        if row_idx >= self.rows {
            return Err(VisionError::index_out_of_bounds(row_idx, self.rows));
        }
        let start = row_idx * self.cols;
        Ok(Self {
            data: self.data[start..start + self.cols].to_vec(),
            rows: 1,
            cols: self.cols,
        })
    }

    /// Returns a copy of one column as a rows x 1 matrix.
    ///
    /// # Errors
    ///
    /// Returns an index error if `col_idx >= cols`.
    pub fn column(&self, col_idx: usize) -> Result<Self> {
        if col_idx >= self.cols {
            return Err(VisionError::index_out_of_bounds(col_idx, self.cols));
        }
        let data = (0..self.rows)
            .map(|row| self.data[row * self.cols + col_idx])
            .collect();
        Ok(Self::column_vector(data))
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the matrix, returning its row-major elements.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.data[i * self.cols + j]);
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Converts every element to `U` with `as` semantics.
    #[must_use]
    pub fn cast<U>(&self) -> Matrix<U>
    where
        U: Element,
        T: AsPrimitive<U>,
    {
        Matrix {
            data: self.data.iter().map(|v| v.as_()).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn zip_with<K, F>(&self, other: &Matrix<K>, op: &'static str, f: F) -> Result<Self>
    where
        K: Element + AsPrimitive<T>,
        F: Fn(T, T) -> T,
    {
        if self.shape() != other.shape() {
            return Err(VisionError::shape_mismatch(op, self.shape(), other.shape()));
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| f(a, b.as_()))
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Adds another matrix element-wise.
    ///
    /// The right operand is converted to `T` before each addition.
    ///
    /// # Errors
    ///
    /// Returns a shape error if dimensions don't match.
    pub fn add<K>(&self, other: &Matrix<K>) -> Result<Self>
    where
        K: Element + AsPrimitive<T>,
    {
        self.zip_with(other, "add", T::add_elem)
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns a shape error if dimensions don't match.
    pub fn sub<K>(&self, other: &Matrix<K>) -> Result<Self>
    where
        K: Element + AsPrimitive<T>,
    {
        self.zip_with(other, "sub", T::sub_elem)
    }

    /// Matrix-matrix multiplication.
    ///
    /// Each output element accumulates from zero over the shared dimension in
    /// increasing order, so float results are reproducible.
    ///
    /// # Errors
    ///
    /// Returns a shape error if `self.cols != other.rows`.
    pub fn matmul<K>(&self, other: &Matrix<K>) -> Result<Self>
    where
        K: Element + AsPrimitive<T>,
    {
        if self.cols != other.rows {
            return Err(VisionError::shape_mismatch(
                "matmul",
                (self.cols, other.cols),
                other.shape(),
            ));
        }

        let (rows, cols, inner) = (self.rows, other.cols, self.cols);
        let mut data = vec![T::zero(); rows * cols];
        for i in 0..rows {
            for j in 0..cols {
                let mut sum = T::zero();
                for k in 0..inner {
                    let product = self.data[i * inner + k].mul_elem(other.data[k * cols + j].as_());
                    sum = sum.add_elem(product);
                }
                data[i * cols + j] = sum;
            }
        }

        Ok(Self { data, rows, cols })
    }

    /// Tolerance equality against a matrix of any element type.
    ///
    /// Shapes must match and each pair of elements, promoted to `f64`, must
    /// differ by at most [`TOLERANCE`].
    #[must_use]
    pub fn approx_eq<K: Element>(&self, other: &Matrix<K>) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| match (a.to_f64(), b.to_f64()) {
                    (Some(a), Some(b)) => (a - b).abs() <= TOLERANCE,
                    _ => false,
                })
    }
}

impl<T: Element> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl<T: Element> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for i in 0..self.rows {
            write!(f, "  {{")?;
            for j in 0..self.cols {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.data[i * self.cols + j])?;
            }
            writeln!(f, "}}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod tests_matrix_contract;
