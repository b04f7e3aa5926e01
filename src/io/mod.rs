//! File access used by the dataset and label loaders.

mod file;

pub use file::SequentialFile;
