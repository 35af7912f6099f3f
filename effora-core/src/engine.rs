use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::arff;
use crate::config::PipelineConfig;
use crate::pepstats::FeatureExtractor;
use crate::results::PredictionResults;
use crate::sequence::SequenceStore;
use crate::weka::{self, ClassifierInvoker};
use crate::workspace::RunWorkspace;
use crate::types::EfforaError;

/// Main effector prediction engine.
///
/// Owns the run configuration and sequences the pipeline: ingest the
/// protein set, assign surrogate identifiers, extract features through the
/// statistics tool, serialize the feature table, classify, and decode the
/// predictions back to the original identifiers. All intermediate artifacts
/// live in a run-scoped workspace that is removed on every exit path.
///
/// # Examples
///
/// ```rust,no_run
/// use effora_core::{EffectorAnalyzer, config::PipelineConfig};
///
/// let config = PipelineConfig {
///     weka_jar: "/opt/weka/weka.jar".into(),
///     model: "/opt/effora/effora_bayes.model".into(),
///     ..Default::default()
/// };
///
/// let analyzer = EffectorAnalyzer::new(config);
/// let results = analyzer.analyze_fasta_file("secretome.fasta")?;
/// println!("{} proteins classified", results.records().len());
/// # Ok::<(), effora_core::types::EfforaError>(())
/// ```
#[derive(Debug)]
pub struct EffectorAnalyzer {
    /// Configuration for the run
    pub config: PipelineConfig,
}

impl EffectorAnalyzer {
    /// Creates an analyzer with the given configuration.
    pub const fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Run the whole pipeline over a protein FASTA file.
    ///
    /// An empty input set is a no-op run: neither external tool is invoked
    /// and the result set is empty. Proteins whose statistics could not be
    /// extracted are absent from the results without failing the run.
    ///
    /// # Errors
    ///
    /// Fatal errors are configuration problems, unreadable or invalid
    /// input, external tool failures (naming the tool), and classifier
    /// output that cannot be correlated with the feature table.
    pub fn analyze_fasta_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<PredictionResults, EfforaError> {
        self.config.validate()?;
        let store = SequenceStore::from_fasta(path.as_ref())?;
        self.progress(&format!(
            "Predicting effectors for {} proteins from {}",
            store.len(),
            path.as_ref().display()
        ));
        if store.is_empty() {
            return Ok(PredictionResults::empty());
        }

        let workspace = RunWorkspace::create()?;

        self.progress("Calling pepstats...");
        let table = FeatureExtractor::new(&self.config).run(&store, &workspace)?;

        let feature_table_path = workspace.feature_table();
        let mut writer = BufWriter::new(File::create(&feature_table_path)?);
        arff::write_feature_table(&mut writer, &table)?;
        writer.flush()?;
        drop(writer);

        self.progress("Starting classification...");
        let raw_predictions_path = workspace.raw_predictions();
        ClassifierInvoker::new(&self.config).run(&feature_table_path, &raw_predictions_path)?;

        let raw = fs::read_to_string(&raw_predictions_path)?;
        let parsed = weka::parse_predictions(&raw, &table, &store)?;
        self.progress("Done.");

        Ok(PredictionResults::from_classifier_order(parsed, &store))
    }

    fn progress(&self, message: &str) {
        if !self.config.quiet {
            eprintln!("{message}");
        }
    }
}
