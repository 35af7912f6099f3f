use std::collections::HashMap;

use crate::sequence::SequenceStore;
use crate::types::PredictionRecord;

/// Prediction results from one effector prediction run.
///
/// Records are re-keyed by original identifier into the input FASTA order
/// at construction, rather than trusting classifier output order, so the
/// short report always follows the caller's ordering. Proteins dropped
/// during statistics extraction are simply absent.
///
/// # Examples
///
/// ```rust,no_run
/// use effora_core::{EffectorAnalyzer, config::PipelineConfig};
///
/// let analyzer = EffectorAnalyzer::new(PipelineConfig::default());
/// let results = analyzer.analyze_fasta_file("secretome.fasta")?;
///
/// println!("Classified {} proteins", results.records().len());
/// for effector in results.predicted_effectors() {
///     println!("{} ({})", effector.original_id, effector.probability);
/// }
/// # Ok::<(), effora_core::types::EfforaError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PredictionResults {
    records: Vec<PredictionRecord>,
}

impl PredictionResults {
    /// Results of a no-op run over an empty input set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build results from records in classifier output order.
    ///
    /// Every record is matched back to its position in the store by original
    /// identifier; records for identifiers the store does not know are
    /// discarded, which cannot happen for output produced by the prediction
    /// parser.
    pub fn from_classifier_order(
        parsed: Vec<PredictionRecord>,
        store: &SequenceStore,
    ) -> Self {
        let mut by_id: HashMap<String, PredictionRecord> = parsed
            .into_iter()
            .map(|record| (record.original_id.clone(), record))
            .collect();
        let records = store
            .records()
            .iter()
            .filter_map(|protein| by_id.remove(&protein.original_id))
            .collect();
        Self { records }
    }

    /// All prediction records, in original input order.
    pub fn records(&self) -> &[PredictionRecord] {
        &self.records
    }

    /// Predicted effectors sorted by descending probability.
    ///
    /// Ties keep original input order: the records are held in input order
    /// and the sort is stable on probability alone.
    pub fn predicted_effectors(&self) -> Vec<&PredictionRecord> {
        let mut effectors: Vec<&PredictionRecord> = self
            .records
            .iter()
            .filter(|record| record.label.is_effector())
            .collect();
        effectors.sort_by(|a, b| {
            b.probability
                .partial_cmp(&a.probability)
                .expect("probabilities validated to lie in [0, 1]")
        });
        effectors
    }

    /// Number of classified proteins.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the run produced no predictions.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
