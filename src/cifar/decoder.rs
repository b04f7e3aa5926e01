//! Load-once decoder for fixed-record binary image files.

use std::path::Path;

use tracing::debug;

use super::layout::{Channel, ImageShape, RecordLayout, LABEL_BYTES};
use crate::error::{Result, VisionError};
use crate::io::SequentialFile;
use crate::primitives::Matrix;

/// A fully loaded, validated dataset file.
///
/// The file is read exactly once at construction. Every accessor copies the
/// requested bytes out of the resident buffer, so returned matrices never
/// alias it. The decoder is immutable afterwards and can be shared between
/// threads by reference.
#[derive(Debug, Clone)]
pub struct RecordDecoder {
    buffer: Vec<u8>,
    layout: RecordLayout,
    record_count: usize,
}

impl RecordDecoder {
    /// Open a CIFAR-100 binary file (three 32x32 planes per record).
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read completely, or a
    /// format error if its size is not a multiple of the record size.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_layout(path, RecordLayout::default())
    }

    /// Open a binary file with a custom record geometry.
    ///
    /// # Errors
    ///
    /// Same as [`RecordDecoder::open`], plus a format error for an empty
    /// layout.
    pub fn open_with_layout(path: impl AsRef<Path>, layout: RecordLayout) -> Result<Self> {
        layout.validate()?;
        let mut file = SequentialFile::open(path.as_ref())?;
        let size = usize::try_from(file.size()).map_err(|_| {
            VisionError::format(format!(
                "file of {} bytes does not fit in memory",
                file.size()
            ))
        })?;
        check_size(size, &layout)?;

        let mut buffer = vec![0u8; size];
        let read = file.read_fully(&mut buffer)?;
        file.close();
        if read != size {
            return Err(VisionError::ShortRead {
                path: path.as_ref().to_path_buf(),
                expected: size,
                actual: read,
            });
        }

        let decoder = Self::from_bytes(buffer, layout)?;
        debug!(
            "Loaded {} records ({} bytes) from {:?}",
            decoder.record_count,
            decoder.file_size(),
            path.as_ref()
        );
        Ok(decoder)
    }

    /// Build a decoder over bytes already in memory.
    ///
    /// # Errors
    ///
    /// Returns a format error for an empty layout or a byte count that is not
    /// a multiple of the record size.
    pub fn from_bytes(buffer: Vec<u8>, layout: RecordLayout) -> Result<Self> {
        layout.validate()?;
        check_size(buffer.len(), &layout)?;
        let record_count = buffer.len() / layout.record_size();
        Ok(Self {
            buffer,
            layout,
            record_count,
        })
    }

    /// Number of records in the file.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Size of the loaded file in bytes.
    #[must_use]
    pub fn file_size(&self) -> usize {
        self.buffer.len()
    }

    /// Dimensions of every image in the file.
    #[must_use]
    pub fn image_shape(&self) -> ImageShape {
        self.layout.image_shape()
    }

    /// Record geometry in use.
    #[must_use]
    pub fn layout(&self) -> RecordLayout {
        self.layout
    }

    fn record(&self, index: usize) -> Result<&[u8]> {
        if index >= self.record_count {
            return Err(VisionError::index_out_of_bounds(index, self.record_count));
        }
        let size = self.layout.record_size();
        let start = index * size;
        Ok(&self.buffer[start..start + size])
    }

    fn image(&self, index: usize) -> Result<&[u8]> {
        Ok(&self.record(index)?[LABEL_BYTES..])
    }

    /// Coarse and fine label ids of a record.
    ///
    /// # Errors
    ///
    /// Returns an index error if `index >= record_count()`.
    pub fn labels(&self, index: usize) -> Result<(usize, usize)> {
        let record = self.record(index)?;
        Ok((usize::from(record[0]), usize::from(record[1])))
    }

    /// Image bytes in on-disk order (all red, all green, all blue) as a
    /// single column.
    ///
    /// # Errors
    ///
    /// Returns an index error if `index >= record_count()`.
    pub fn planar(&self, index: usize) -> Result<Matrix<u8>> {
        Ok(Matrix::column_vector(self.image(index)?.to_vec()))
    }

    /// Image bytes interleaved per pixel with the plane order reversed, as a
    /// single column.
    ///
    /// For three planes this is `b, g, r` for pixel 0, then pixel 1, and so
    /// on: the layout OpenCV-style consumers expect.
    ///
    /// # Errors
    ///
    /// Returns an index error if `index >= record_count()`.
    pub fn interleaved(&self, index: usize) -> Result<Matrix<u8>> {
        let image = self.image(index)?;
        let channels = self.layout.channels;
        let plane_len = self.layout.plane_len();

        let mut out = vec![0u8; image.len()];
        for (plane_idx, plane) in image.chunks_exact(plane_len).enumerate() {
            let slot = channels - 1 - plane_idx;
            for (dst, &src) in out[slot..].iter_mut().step_by(channels).zip(plane) {
                *dst = src;
            }
        }
        Ok(Matrix::column_vector(out))
    }

    /// One colour plane copied out as a single column.
    ///
    /// # Errors
    ///
    /// Returns an index error if `index >= record_count()` or the layout has
    /// fewer planes than `channel` requires.
    pub fn channel(&self, index: usize, channel: Channel) -> Result<Matrix<u8>> {
        let plane_idx = channel.plane_index();
        if plane_idx >= self.layout.channels {
            return Err(VisionError::index_out_of_bounds(
                plane_idx,
                self.layout.channels,
            ));
        }
        let plane_len = self.layout.plane_len();
        let start = plane_idx * plane_len;
        let image = self.image(index)?;
        Ok(Matrix::column_vector(image[start..start + plane_len].to_vec()))
    }
}

fn check_size(size: usize, layout: &RecordLayout) -> Result<()> {
    let record_size = layout.record_size();
    if size % record_size != 0 {
        return Err(VisionError::format(format!(
            "file size {size} is not a multiple of record size {record_size}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "decoder_tests.rs"]
mod tests;
