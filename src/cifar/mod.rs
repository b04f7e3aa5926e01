//! CIFAR-100 binary dataset support.
//!
//! The binary release packs one fixed-size record per image:
//!
//! ```text
//! [coarse label: 1][fine label: 1][red: 1024][green: 1024][blue: 1024]
//! ```
//!
//! [`RecordDecoder`] loads a whole `.bin` file once and serves per-record
//! [`Matrix<u8>`](crate::primitives::Matrix) views. [`LabelCatalog`] reads
//! the label-name text files and [`Cifar`] binds both to a classifier.
//!
//! # Example
//!
//! ```rust,ignore
//! use vision::cifar::{Channel, RecordDecoder};
//!
//! let decoder = RecordDecoder::open("cifar-100-binary/test.bin")?;
//! let (coarse, fine) = decoder.labels(0)?;
//! let bgr = decoder.interleaved(0)?;
//! let red = decoder.channel(0, Channel::Red)?;
//! ```

mod dataset;
mod decoder;
mod label;
mod layout;

pub use dataset::{Cifar, CifarConfig, LabelKind, Split};
pub use decoder::RecordDecoder;
pub use label::LabelCatalog;
pub use layout::{Channel, ImageShape, RecordLayout, LABEL_BYTES};
