//! Byte-savings accounting for a run.

use std::path::PathBuf;

/// Before/after sizes for one written artifact.
#[derive(Debug, Clone)]
pub struct FileSavings {
    /// The artifact that was written.
    pub path: PathBuf,
    /// Input bytes that produced it.
    pub bytes_before: usize,
    /// Bytes written.
    pub bytes_after: usize,
}

/// What a run produced, for the savings summary.
#[derive(Debug, Default, Clone)]
pub struct Report {
    /// Per-artifact sizes, in the order artifacts were written.
    pub files: Vec<FileSavings>,
    /// Distinct class selectors that received a short name.
    pub classes_renamed: usize,
    /// Distinct id selectors that received a short name.
    pub ids_renamed: usize,
}

impl Report {
    pub(crate) fn record(&mut self, path: PathBuf, bytes_before: usize, bytes_after: usize) {
        self.files.push(FileSavings {
            path,
            bytes_before,
            bytes_after,
        });
    }

    /// Total input bytes across all artifacts.
    #[must_use]
    pub fn total_before(&self) -> usize {
        self.files.iter().map(|f| f.bytes_before).sum()
    }

    /// Total bytes written across all artifacts.
    #[must_use]
    pub fn total_after(&self) -> usize {
        self.files.iter().map(|f| f.bytes_after).sum()
    }

    /// Total bytes saved. An artifact that grew (banners can outweigh
    /// shortening on tiny inputs) counts as zero savings rather than
    /// clawing back savings from other files.
    #[must_use]
    pub fn total_saved(&self) -> usize {
        self.files
            .iter()
            .map(|f| f.bytes_before.saturating_sub(f.bytes_after))
            .sum()
    }
}
