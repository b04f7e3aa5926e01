//! Label-name text files (`coarse_label_names.txt`, `fine_label_names.txt`).

use std::path::Path;

use tracing::debug;

use crate::error::{Result, VisionError};
use crate::io::SequentialFile;

const DELIMITER: u8 = b'\n';

/// Ordered label names, one per line of the source file.
///
/// Label id `n` in a record refers to `labels()[n]`.
///
/// Lines are split on line feed only. A final line without a trailing line
/// feed is still a label, and trailing line feeds never produce an empty
/// name. An empty line before the last label is a format error.
///
/// # Examples
///
/// ```
/// use vision::cifar::LabelCatalog;
///
/// let catalog = LabelCatalog::parse(b"apple\naquarium_fish\nbaby").expect("valid UTF-8");
/// assert_eq!(catalog.len(), 3);
/// assert_eq!(catalog.get(2), Some("baby"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelCatalog {
    labels: Vec<String>,
}

impl LabelCatalog {
    /// Read and parse a label file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read completely, or a
    /// format error if a line is not valid UTF-8.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut file = SequentialFile::open(path)?;
        let size = usize::try_from(file.size())
            .map_err(|_| VisionError::format("label file does not fit in memory"))?;
        let mut buffer = vec![0u8; size];
        let read = file.read_fully(&mut buffer)?;
        file.close();
        if read != size {
            return Err(VisionError::ShortRead {
                path: path.to_path_buf(),
                expected: size,
                actual: read,
            });
        }

        let catalog = Self::parse(&buffer)?;
        debug!("Loaded {} label names from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// Parse label names from raw file contents.
    ///
    /// Trailing line feeds are ignored. Any other empty line would shift the
    /// ids of every label after it, so it is rejected.
    ///
    /// # Errors
    ///
    /// Returns a format error naming the first line that is empty or not
    /// valid UTF-8.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let end = bytes
            .iter()
            .rposition(|&b| b != DELIMITER)
            .map_or(0, |last| last + 1);
        if end == 0 {
            return Ok(Self::default());
        }

        let labels = bytes[..end]
            .split(|&b| b == DELIMITER)
            .enumerate()
            .map(|(line_no, line)| {
                if line.is_empty() {
                    return Err(VisionError::format(format!(
                        "label line {} is empty",
                        line_no + 1
                    )));
                }
                std::str::from_utf8(line)
                    .map(str::to_owned)
                    .map_err(|e| VisionError::format(format!("label line {}: {e}", line_no + 1)))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { labels })
    }

    /// All names in file order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the catalog holds no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Name for a label id, if present.
    #[must_use]
    pub fn get(&self, id: usize) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    /// Name for a label id.
    ///
    /// # Errors
    ///
    /// Returns an index error if `id >= len()`.
    pub fn name(&self, id: usize) -> Result<&str> {
        self.get(id)
            .ok_or_else(|| VisionError::index_out_of_bounds(id, self.labels.len()))
    }

    /// Iterate over names in file order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}
