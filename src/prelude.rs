//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use vision::prelude::*;
//! ```

pub use crate::cifar::{
    Channel, Cifar, CifarConfig, LabelCatalog, LabelKind, RecordDecoder, RecordLayout, Split,
};
pub use crate::classification::{make_classifier, ClassifierKind, LinearClassifier};
pub use crate::error::{ErrorKind, Result, VisionError};
pub use crate::primitives::{Element, Matrix};
pub use crate::traits::Classifier;
