//! Core traits for scoring models.
//!
//! These traits define the API contract between decoded image data and the
//! models that consume it.

use crate::error::Result;
use crate::primitives::{Element, Matrix};

/// A model that maps a feature column to one score per label.
///
/// Implementors hold a weight matrix (`n_labels x n_features`) and a bias
/// column (`n_labels x 1`). The trait is object safe so callers can hold any
/// variant behind `Box<dyn Classifier<T>>`.
///
/// # Examples
///
/// ```
/// use vision::prelude::*;
///
/// let mut model = LinearClassifier::<f64>::new(2, 3);
/// model
///     .set_weights(Matrix::from_rows(&[[1.0, 0.0, 0.0], [0.0, 1.0, 1.0]]).expect("rows"))
///     .expect("2x3 weights");
/// let input = Matrix::column_vector(vec![4.0, 5.0, 6.0]);
/// let scores = model.score(&input).expect("3 features");
/// assert_eq!(scores, Matrix::column_vector(vec![4.0, 11.0]));
/// ```
pub trait Classifier<T: Element> {
    /// Replaces the weight matrix.
    ///
    /// # Errors
    ///
    /// Returns a shape error if `weights` does not match the model's
    /// `n_labels x n_features`.
    fn set_weights(&mut self, weights: Matrix<T>) -> Result<()>;

    /// Current weight matrix.
    fn weights(&self) -> &Matrix<T>;

    /// Replaces the bias column.
    ///
    /// # Errors
    ///
    /// Returns a shape error if `bias` is not `n_labels x 1`.
    fn set_bias(&mut self, bias: Matrix<T>) -> Result<()>;

    /// Current bias column.
    fn bias(&self) -> &Matrix<T>;

    /// Scores a feature column, returning one row per label.
    ///
    /// # Errors
    ///
    /// Returns a shape error if `input` is not `n_features x 1`.
    fn score(&self, input: &Matrix<T>) -> Result<Matrix<T>>;
}
