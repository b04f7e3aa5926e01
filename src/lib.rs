//! Vision: CIFAR-100 binary decoding and a generic numeric matrix.
//!
//! The crate loads a fixed-record image file once, validates it, and serves
//! labels and pixel planes as [`Matrix`] values. Matrices support
//! mixed-element arithmetic, tolerance equality and transpose, and feed the
//! linear scorer in [`classification`].
//!
//! # Quick Start
//!
//! ```no_run
//! use vision::prelude::*;
//!
//! let cifar = Cifar::open("cifar-100-binary", CifarConfig::default())?;
//! let (coarse, fine) = cifar.label_names(0)?;
//! println!("image 0 is a {fine} ({coarse})");
//!
//! let bgr = cifar.decoder().interleaved(0)?;
//! assert_eq!(bgr.shape(), (3072, 1));
//!
//! let scores: Matrix<f32> = cifar.classify(0)?;
//! assert_eq!(scores.n_rows(), cifar.label_count());
//! # Ok::<(), vision::VisionError>(())
//! ```
//!
//! # Modules
//!
//! - [`cifar`]: Record decoder, label catalogs and dataset composition
//! - [`classification`]: Linear scoring of decoded images
//! - [`error`]: Crate error type
//! - [`io`]: Sequential file reader
//! - [`primitives`]: Generic `Matrix<T>`
//! - [`traits`]: Classifier contract

pub mod cifar;
pub mod classification;
pub mod error;
pub mod io;
pub mod prelude;
pub mod primitives;
pub mod traits;

pub use error::{Result, VisionError};
pub use primitives::Matrix;
