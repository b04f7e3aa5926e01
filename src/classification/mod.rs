//! Label scoring over decoded images.
//!
//! A classifier here is a fixed-weight scoring pass: it maps a feature
//! column to one score per label with `W * x + b`. Weights are supplied by
//! the caller; nothing in this module learns them.
//!
//! # Example
//!
//! ```
//! use vision::classification::{make_classifier, ClassifierKind};
//! use vision::prelude::*;
//!
//! let mut model = make_classifier::<f32>(2, 2, ClassifierKind::Linear);
//! model
//!     .set_bias(Matrix::column_vector(vec![0.5, -0.5]))
//!     .expect("2x1 bias");
//! let scores = model
//!     .score(&Matrix::column_vector(vec![1.0, 2.0]))
//!     .expect("2 features");
//! assert_eq!(scores, Matrix::column_vector(vec![0.5, -0.5]));
//! ```

use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VisionError};
use crate::primitives::{Element, Matrix};
use crate::traits::Classifier;

/// Computes `weights * input + bias`.
///
/// # Errors
///
/// Returns a shape error unless `weights.cols == input.rows`,
/// `weights.rows == bias.rows` and `bias.cols == 1`.
pub fn score<T>(weights: &Matrix<T>, bias: &Matrix<T>, input: &Matrix<T>) -> Result<Matrix<T>>
where
    T: Element + AsPrimitive<T>,
{
    if bias.n_cols() != 1 || bias.n_rows() != weights.n_rows() {
        return Err(VisionError::shape_mismatch(
            "score",
            (weights.n_rows(), 1),
            bias.shape(),
        ));
    }
    weights.matmul(input)?.add(bias)
}

/// Available classifier variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClassifierKind {
    /// Affine scoring, see [`LinearClassifier`].
    #[default]
    Linear,
}

/// Builds a classifier of the requested kind with zero weights and bias.
///
/// # Panics
///
/// Panics if `n_labels * n_features` overflows `usize`.
#[must_use]
pub fn make_classifier<T>(
    n_labels: usize,
    n_features: usize,
    kind: ClassifierKind,
) -> Box<dyn Classifier<T>>
where
    T: Element + AsPrimitive<T>,
{
    match kind {
        ClassifierKind::Linear => Box::new(LinearClassifier::new(n_labels, n_features)),
    }
}

/// Affine scorer over a fixed number of labels and features.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Element + Serialize",
    deserialize = "T: Element + Deserialize<'de>"
))]
pub struct LinearClassifier<T> {
    /// `n_labels x n_features`
    weights: Matrix<T>,
    /// `n_labels x 1`
    bias: Matrix<T>,
}

impl<T: Element> LinearClassifier<T> {
    /// Creates a classifier with zero weights and zero bias.
    ///
    /// # Panics
    ///
    /// Panics if `n_labels * n_features` overflows `usize`.
    #[must_use]
    pub fn new(n_labels: usize, n_features: usize) -> Self {
        Self {
            weights: Matrix::zeros(n_labels, n_features),
            bias: Matrix::zeros(n_labels, 1),
        }
    }

    /// Number of labels scored.
    #[must_use]
    pub fn n_labels(&self) -> usize {
        self.weights.n_rows()
    }

    /// Number of input features expected.
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.weights.n_cols()
    }
}

impl<T> Classifier<T> for LinearClassifier<T>
where
    T: Element + AsPrimitive<T>,
{
    fn set_weights(&mut self, weights: Matrix<T>) -> Result<()> {
        if weights.shape() != self.weights.shape() {
            return Err(VisionError::shape_mismatch(
                "set_weights",
                self.weights.shape(),
                weights.shape(),
            ));
        }
        self.weights = weights;
        Ok(())
    }

    fn weights(&self) -> &Matrix<T> {
        &self.weights
    }

    fn set_bias(&mut self, bias: Matrix<T>) -> Result<()> {
        if bias.shape() != self.bias.shape() {
            return Err(VisionError::shape_mismatch(
                "set_bias",
                self.bias.shape(),
                bias.shape(),
            ));
        }
        self.bias = bias;
        Ok(())
    }

    fn bias(&self) -> &Matrix<T> {
        &self.bias
    }

    fn score(&self, input: &Matrix<T>) -> Result<Matrix<T>> {
        if input.shape() != (self.n_features(), 1) {
            return Err(VisionError::shape_mismatch(
                "score",
                (self.n_features(), 1),
                input.shape(),
            ));
        }
        score(&self.weights, &self.bias, input)
    }
}
