//! Build configuration for the table pipeline.
//!
//! The taxon filter lives here as a named constant rather than as literals
//! inside the builders; the transforms themselves are taxon-agnostic.

use std::path::PathBuf;

/// NCBI taxonomy identifier for Homo sapiens.
///
/// Every source table is filtered to this taxon before any other
/// processing; rows for other taxa never enter the output tables.
pub const TAXON_HUMAN: u32 = 9606;

/// Configuration for a table build run.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory holding the downloaded source files.
    pub download_dir: PathBuf,
    /// Directory the output tables are written to.
    pub data_dir: PathBuf,
    /// Taxon filter applied to every source table.
    pub taxon_id: u32,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            download_dir: PathBuf::from("download"),
            data_dir: PathBuf::from("data"),
            taxon_id: TAXON_HUMAN,
        }
    }
}

impl BuildConfig {
    /// Create a new build configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory holding the downloaded source files.
    pub fn download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = dir.into();
        self
    }

    /// Set the directory the output tables are written to.
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }
}
