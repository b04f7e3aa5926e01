//! A CIFAR-100 release directory bound to one split and one label kind.

use std::path::Path;

use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::decoder::RecordDecoder;
use super::label::LabelCatalog;
use super::layout::RecordLayout;
use crate::classification::{make_classifier, ClassifierKind};
use crate::error::Result;
use crate::primitives::{Element, Matrix};

const FINE_LABEL_FILE: &str = "fine_label_names.txt";
const COARSE_LABEL_FILE: &str = "coarse_label_names.txt";

/// Which record file of the release to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    /// `train.bin`
    Train,
    /// `test.bin`
    #[default]
    Test,
}

impl Split {
    /// File name of the split inside a release directory.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Split::Train => "train.bin",
            Split::Test => "test.bin",
        }
    }
}

/// Which label granularity drives classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelKind {
    /// The 20 superclasses.
    #[default]
    Coarse,
    /// The 100 classes.
    Fine,
}

/// Options for [`Cifar::open`].
///
/// # Examples
///
/// ```
/// use vision::cifar::{CifarConfig, LabelKind, Split};
///
/// let config = CifarConfig::default()
///     .with_split(Split::Train)
///     .with_label_kind(LabelKind::Fine);
/// assert_eq!(config.split, Split::Train);
/// assert_eq!(config.layout.record_size(), 3074);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CifarConfig {
    /// Record file to load
    pub split: Split,
    /// Catalog used for classification
    pub label_kind: LabelKind,
    /// Record geometry
    pub layout: RecordLayout,
}

impl CifarConfig {
    /// Sets the split to load.
    #[must_use]
    pub fn with_split(mut self, split: Split) -> Self {
        self.split = split;
        self
    }

    /// Sets the label granularity.
    #[must_use]
    pub fn with_label_kind(mut self, label_kind: LabelKind) -> Self {
        self.label_kind = label_kind;
        self
    }

    /// Sets the record geometry.
    #[must_use]
    pub fn with_layout(mut self, layout: RecordLayout) -> Self {
        self.layout = layout;
        self
    }
}

/// A loaded split together with both label catalogs.
#[derive(Debug, Clone)]
pub struct Cifar {
    decoder: RecordDecoder,
    coarse: LabelCatalog,
    fine: LabelCatalog,
    config: CifarConfig,
}

impl Cifar {
    /// Loads the label files and the configured split from `dir`.
    ///
    /// # Errors
    ///
    /// Returns the first error from reading either label file or decoding
    /// the record file.
    pub fn open(dir: impl AsRef<Path>, config: CifarConfig) -> Result<Self> {
        let dir = dir.as_ref();
        let fine = LabelCatalog::open(dir.join(FINE_LABEL_FILE))?;
        let coarse = LabelCatalog::open(dir.join(COARSE_LABEL_FILE))?;
        let decoder =
            RecordDecoder::open_with_layout(dir.join(config.split.file_name()), config.layout)?;

        debug!(
            "Opened {:?} split: {} images, {} coarse / {} fine labels",
            config.split,
            decoder.record_count(),
            coarse.len(),
            fine.len()
        );
        Ok(Self {
            decoder,
            coarse,
            fine,
            config,
        })
    }

    /// Number of images in the loaded split.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.decoder.record_count()
    }

    /// Bytes per image (channels * width * height).
    #[must_use]
    pub fn image_dim(&self) -> usize {
        self.decoder.image_shape().len()
    }

    /// Size of the catalog selected by the configured label kind.
    #[must_use]
    pub fn label_count(&self) -> usize {
        self.catalog().len()
    }

    fn catalog(&self) -> &LabelCatalog {
        match self.config.label_kind {
            LabelKind::Coarse => &self.coarse,
            LabelKind::Fine => &self.fine,
        }
    }

    /// Underlying record decoder.
    #[must_use]
    pub fn decoder(&self) -> &RecordDecoder {
        &self.decoder
    }

    /// Superclass names.
    #[must_use]
    pub fn coarse_labels(&self) -> &LabelCatalog {
        &self.coarse
    }

    /// Class names.
    #[must_use]
    pub fn fine_labels(&self) -> &LabelCatalog {
        &self.fine
    }

    /// Configuration the dataset was opened with.
    #[must_use]
    pub fn config(&self) -> &CifarConfig {
        &self.config
    }

    /// Coarse and fine names of a record's labels.
    ///
    /// # Errors
    ///
    /// Returns an index error if `index` is past the last record or a label
    /// id has no entry in its catalog.
    pub fn label_names(&self, index: usize) -> Result<(&str, &str)> {
        let (coarse, fine) = self.decoder.labels(index)?;
        Ok((self.coarse.name(coarse)?, self.fine.name(fine)?))
    }

    /// Scores one image with a zero-initialised linear classifier.
    ///
    /// The classifier has one row per label of the configured kind and one
    /// column per image byte. The planar image is cast to `T` before scoring.
    ///
    /// # Errors
    ///
    /// Returns an index error if `index` is past the last record.
    pub fn classify<T>(&self, index: usize) -> Result<Matrix<T>>
    where
        T: Element + AsPrimitive<T>,
        u8: AsPrimitive<T>,
    {
        let input: Matrix<T> = self.decoder.planar(index)?.cast();
        let model =
            make_classifier::<T>(self.label_count(), self.image_dim(), ClassifierKind::Linear);
        model.score(&input)
    }
}
