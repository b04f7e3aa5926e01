//! Record geometry.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VisionError};

/// Label bytes at the start of every record: coarse id, then fine id.
pub const LABEL_BYTES: usize = 2;

/// Colour plane selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// First plane on disk.
    Red,
    /// Second plane on disk.
    Green,
    /// Third plane on disk.
    Blue,
}

impl Channel {
    /// All channels in on-disk order.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Position of this plane within a record's image bytes.
    #[must_use]
    pub fn plane_index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// Image dimensions of a decoded record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageShape {
    /// Number of colour planes
    pub channels: usize,
    /// Pixels per row
    pub width: usize,
    /// Rows per plane
    pub height: usize,
}

impl ImageShape {
    /// Total bytes of image data (channels * width * height).
    #[must_use]
    pub fn len(&self) -> usize {
        self.channels * self.width * self.height
    }

    /// Whether the image holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Geometry of one fixed-size record.
///
/// Defaults to the CIFAR-100 release: three 32x32 planes.
///
/// # Examples
///
/// ```
/// use vision::cifar::RecordLayout;
///
/// let layout = RecordLayout::default();
/// assert_eq!(layout.plane_len(), 1024);
/// assert_eq!(layout.record_size(), 3074);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordLayout {
    /// Number of colour planes
    pub channels: usize,
    /// Pixels per row
    pub width: usize,
    /// Rows per plane
    pub height: usize,
}

impl Default for RecordLayout {
    fn default() -> Self {
        Self {
            channels: 3,
            width: 32,
            height: 32,
        }
    }
}

impl RecordLayout {
    /// Creates a layout with the given geometry.
    #[must_use]
    pub fn new(channels: usize, width: usize, height: usize) -> Self {
        Self {
            channels,
            width,
            height,
        }
    }

    /// Sets the number of colour planes.
    #[must_use]
    pub fn with_channels(mut self, channels: usize) -> Self {
        self.channels = channels;
        self
    }

    /// Sets the image width and height.
    #[must_use]
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Bytes in one colour plane (width * height).
    #[must_use]
    pub fn plane_len(&self) -> usize {
        self.width * self.height
    }

    /// Bytes of image data in one record.
    #[must_use]
    pub fn image_len(&self) -> usize {
        self.plane_len() * self.channels
    }

    /// Bytes in one record, labels included.
    #[must_use]
    pub fn record_size(&self) -> usize {
        LABEL_BYTES + self.image_len()
    }

    /// Image dimensions described by this layout.
    #[must_use]
    pub fn image_shape(&self) -> ImageShape {
        ImageShape {
            channels: self.channels,
            width: self.width,
            height: self.height,
        }
    }

    /// Checks that the layout describes a non-empty image.
    ///
    /// # Errors
    ///
    /// Returns a format error for a zero dimension or an overflowing size.
    pub fn validate(&self) -> Result<()> {
        if self.channels == 0 || self.width == 0 || self.height == 0 {
            return Err(VisionError::format(format!(
                "record layout must be non-empty, got {}x{}x{}",
                self.channels, self.width, self.height
            )));
        }
        self.width
            .checked_mul(self.height)
            .and_then(|plane| plane.checked_mul(self.channels))
            .and_then(|image| image.checked_add(LABEL_BYTES))
            .map(|_| ())
            .ok_or_else(|| VisionError::format("record layout size overflows usize"))
    }
}
