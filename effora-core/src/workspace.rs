use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::types::EfforaError;

/// Scoped temporary directory holding all intermediate artifacts of one run.
///
/// The directory name carries a random suffix, so concurrent invocations of
/// the whole pipeline never collide. The workspace is owned exclusively by
/// the orchestrator and removed when dropped, on every exit path.
#[derive(Debug)]
pub struct RunWorkspace {
    dir: TempDir,
}

impl RunWorkspace {
    /// Create a fresh workspace for one pipeline run.
    pub fn create() -> Result<Self, EfforaError> {
        let dir = tempfile::Builder::new()
            .prefix("effora-run-")
            .tempdir()
            .map_err(EfforaError::Io)?;
        Ok(Self { dir })
    }

    /// Root of the workspace directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// FASTA file with sequences under surrogate identifiers.
    pub fn surrogate_fasta(&self) -> PathBuf {
        self.dir.path().join("short_ids.fasta")
    }

    /// Statistics report written by the external statistics tool.
    pub fn statistics_report(&self) -> PathBuf {
        self.dir.path().join("pepstats.txt")
    }

    /// Serialized feature table handed to the classifier.
    pub fn feature_table(&self) -> PathBuf {
        self.dir.path().join("features.arff")
    }

    /// Raw per-instance classifier output.
    pub fn raw_predictions(&self) -> PathBuf {
        self.dir.path().join("predictions.txt")
    }
}
