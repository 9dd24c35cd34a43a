//! Fixtures for sample data and temp-file placement.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// Sample file manager for bundled session logs.
pub struct SampleFiles {
    samples_dir: PathBuf,
}

impl Default for SampleFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleFiles {
    /// Samples live in `crates/turntrace-testing/samples/`.
    pub fn new() -> Self {
        let samples_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples");
        Self { samples_dir }
    }

    pub fn path(&self, sample_name: &str) -> PathBuf {
        self.samples_dir.join(sample_name)
    }

    pub fn read(&self, sample_name: &str) -> Result<Vec<u8>> {
        let path = self.path(sample_name);
        fs::read(&path).with_context(|| format!("Failed to read sample: {}", path.display()))
    }
}

/// Write a log to a temp file that lives as long as the returned handle.
pub fn write_temp_log(contents: &[u8]) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(".jsonl").tempfile()?;
    file.write_all(contents)?;
    file.flush()?;
    Ok(file)
}
