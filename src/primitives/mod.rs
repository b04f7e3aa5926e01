//! Core compute primitives.
//!
//! [`Matrix`] is the data-exchange type between the dataset decoder, the
//! classifier and test code.

mod element;
mod matrix;

pub use element::Element;
pub use matrix::{Matrix, TOLERANCE};
