use std::path::PathBuf;
use std::time::Duration;

use crate::types::EfforaError;

/// Output format options for prediction reports.
///
/// # Formats
///
/// - **Short**: tab-delimited table, one line per classified protein
/// - **Long**: the short table followed by an annotated block per
///   predicted effector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tab-delimited predictions for every classified protein, in input order.
    Short,

    /// Short table plus a human-readable block for each predicted effector,
    /// sorted by descending probability.
    Long,
}

/// Configuration for an effector prediction run.
///
/// All external locations are resolved once, up front, and handed to the
/// pipeline as a value; the pipeline itself never consults the environment.
///
/// # Examples
///
/// ```rust
/// use effora_core::config::PipelineConfig;
///
/// let config = PipelineConfig {
///     weka_jar: "/opt/weka/weka.jar".into(),
///     model: "/opt/effora/effora_bayes.model".into(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Statistics tool executable, a bare name resolved via `PATH` or a path.
    ///
    /// **Default**: `pepstats`
    pub pepstats: PathBuf,

    /// Java executable used to run the classifier.
    ///
    /// **Default**: `java`
    pub java: PathBuf,

    /// Path to the WEKA jar providing the classifier implementation.
    ///
    /// **Default**: `weka.jar` in the working directory
    pub weka_jar: PathBuf,

    /// Path to the trained model artifact shipped with the pipeline.
    ///
    /// **Default**: `effora_bayes.model` in the working directory
    pub model: PathBuf,

    /// Suppress progress messages on stderr.
    ///
    /// **Default**: `false`
    pub quiet: bool,

    /// Optional upper bound on each external tool invocation.
    ///
    /// `None` preserves the historical behavior of waiting indefinitely for
    /// the external process.
    ///
    /// **Default**: `None` (unbounded wait)
    pub tool_timeout: Option<Duration>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            pepstats: PathBuf::from("pepstats"),
            java: PathBuf::from("java"),
            weka_jar: PathBuf::from("weka.jar"),
            model: PathBuf::from("effora_bayes.model"),
            quiet: false,
            tool_timeout: None,
        }
    }
}

impl PipelineConfig {
    /// Check that the artifacts the run cannot start without are present.
    ///
    /// Executables given as bare names are resolved by the operating system at
    /// spawn time and are not checked here; a missing one surfaces as a tool
    /// launch error naming the tool.
    ///
    /// # Errors
    ///
    /// Returns [`EfforaError::Config`] naming the missing file.
    pub fn validate(&self) -> Result<(), EfforaError> {
        if !self.weka_jar.is_file() {
            return Err(EfforaError::Config(format!(
                "WEKA jar not found at {}",
                self.weka_jar.display()
            )));
        }
        if !self.model.is_file() {
            return Err(EfforaError::Config(format!(
                "trained model not found at {}",
                self.model.display()
            )));
        }
        Ok(())
    }
}
