//! Classifier invocation and prediction decoding.
//!
//! The trained model is applied by the WEKA command-line runner:
//! `java -cp <weka.jar> weka.classifiers.bayes.NaiveBayes -l <model>
//! -T <feature table> -p first-last`, with stdout captured to the raw
//! predictions file. Each prediction line carries a 1-based `inst#` row
//! index that this module uses as an explicit tag back into the feature
//! table; any inconsistency between the two is fatal, because identifier
//! correlation cannot be trusted past that point.

use std::ffi::OsStr;
use std::path::Path;

use crate::config::PipelineConfig;
use crate::constants::WEKA_CLASSIFIER;
use crate::sequence::SequenceStore;
use crate::tools::ExternalTool;
use crate::types::{EfforaError, FeatureTable, PredictedLabel, PredictionRecord};

/// Classifier invoker adapter around the WEKA runner.
#[derive(Debug)]
pub struct ClassifierInvoker<'a> {
    config: &'a PipelineConfig,
}

impl<'a> ClassifierInvoker<'a> {
    /// Create an invoker bound to the run configuration.
    pub fn new(config: &'a PipelineConfig) -> Self {
        Self { config }
    }

    /// Classify the serialized feature table, capturing raw predictions.
    ///
    /// Blocks until the process exits. A launch failure or non-zero exit is
    /// fatal for the run; there is no retry and no partial-success path.
    pub fn run(&self, feature_table: &Path, raw_predictions: &Path) -> Result<(), EfforaError> {
        let tool = ExternalTool::new("WEKA", &self.config.java);
        let args: [&OsStr; 9] = [
            OsStr::new("-cp"),
            self.config.weka_jar.as_os_str(),
            OsStr::new(WEKA_CLASSIFIER),
            OsStr::new("-l"),
            self.config.model.as_os_str(),
            OsStr::new("-T"),
            feature_table.as_os_str(),
            OsStr::new("-p"),
            OsStr::new("first-last"),
        ];
        tool.run(args, Some(raw_predictions), self.config.tool_timeout)
    }
}

/// Decode raw per-instance classifier output into prediction records.
///
/// Lines before the instance listing (banner, column header, blanks) are
/// skipped; every remaining line is `inst# actual predicted [error]
/// probability`, where `predicted` is `<index>:<class name>`. Records come
/// back in classifier output order with surrogate identifiers resolved to
/// the original identifier and sequence.
///
/// # Errors
///
/// [`EfforaError::PredictionDesync`] when a line cannot be decoded, an
/// instance index is out of range or repeated, a class name is unknown to
/// the model, a probability is outside [0, 1], or the instance count does
/// not match the feature table.
pub fn parse_predictions(
    raw: &str,
    table: &FeatureTable,
    store: &SequenceStore,
) -> Result<Vec<PredictionRecord>, EfforaError> {
    let mut seen = vec![false; table.len()];
    let mut records = Vec::with_capacity(table.len());

    for line in raw.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.first() {
            Some(first) if first.chars().all(|c| c.is_ascii_digit()) => {}
            _ => continue,
        }
        if tokens.len() < 4 {
            return Err(desync(format!("truncated prediction line: {line:?}")));
        }

        let instance: usize = tokens[0]
            .parse()
            .map_err(|_| desync(format!("unreadable instance index in line: {line:?}")))?;
        if instance == 0 || instance > table.len() {
            return Err(desync(format!(
                "instance index {instance} outside feature table of {} rows",
                table.len()
            )));
        }
        if seen[instance - 1] {
            return Err(desync(format!("instance index {instance} repeated")));
        }

        let class_name = tokens[2]
            .split(':')
            .nth(1)
            .ok_or_else(|| desync(format!("malformed predicted class in line: {line:?}")))?;
        let label = PredictedLabel::from_class_name(class_name)
            .ok_or_else(|| desync(format!("unknown predicted class {class_name:?}")))?;

        let probability: f64 = tokens
            .last()
            .expect("token list checked non-empty")
            .parse()
            .map_err(|_| desync(format!("unreadable probability in line: {line:?}")))?;
        if !(0.0..=1.0).contains(&probability) {
            return Err(desync(format!("probability {probability} outside [0, 1]")));
        }

        let surrogate_id = &table.rows()[instance - 1].surrogate_id;
        let protein = store.resolve_surrogate(surrogate_id).ok_or_else(|| {
            desync(format!("feature table row {instance} has no known protein"))
        })?;

        seen[instance - 1] = true;
        records.push(PredictionRecord {
            original_id: protein.original_id.clone(),
            sequence: protein.sequence.clone(),
            label,
            probability,
        });
    }

    if records.len() != table.len() {
        return Err(desync(format!(
            "classifier produced {} predictions for {} feature rows",
            records.len(),
            table.len()
        )));
    }
    Ok(records)
}

fn desync(detail: String) -> EfforaError {
    EfforaError::PredictionDesync(detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FeatureVector;

    const RAW_PREDICTIONS: &str = "\
=== Predictions on test data ===

 inst#     actual  predicted error prediction
     1        1:?  1:effector       0.91
     2        1:?  2:non-effector       0.12
";

    fn fixtures() -> (FeatureTable, SequenceStore) {
        let store = SequenceStore::from_records(vec![
            ("A".to_string(), "MKLSCC".to_string()),
            ("B".to_string(), "MAARDE".to_string()),
            ("C".to_string(), "MGGYRP".to_string()),
        ])
        .unwrap();
        // B dropped during extraction: rows cover protein1 and protein3.
        let table = FeatureTable::new(vec![
            FeatureVector {
                surrogate_id: "protein1".to_string(),
                values: vec![0.0],
            },
            FeatureVector {
                surrogate_id: "protein3".to_string(),
                values: vec![0.0],
            },
        ]);
        (table, store)
    }

    #[test]
    fn test_parse_resolves_original_identifiers() {
        let (table, store) = fixtures();
        let records = parse_predictions(RAW_PREDICTIONS, &table, &store).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].original_id, "A");
        assert_eq!(records[0].label, PredictedLabel::Effector);
        assert_eq!(records[0].probability, 0.91);
        assert_eq!(records[0].sequence, "MKLSCC");

        assert_eq!(records[1].original_id, "C");
        assert_eq!(records[1].label, PredictedLabel::NonEffector);
        assert_eq!(records[1].probability, 0.12);
        assert_eq!(records[1].sequence, "MGGYRP");
    }

    #[test]
    fn test_parse_skips_banner_and_header_lines() {
        let (table, store) = fixtures();
        let records = parse_predictions(RAW_PREDICTIONS, &table, &store).unwrap();
        // Only the two instance lines survive as records.
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_missing_instance_is_desync() {
        let (table, store) = fixtures();
        let raw = RAW_PREDICTIONS
            .lines()
            .filter(|l| !l.contains("non-effector"))
            .collect::<Vec<_>>()
            .join("\n");
        let err = parse_predictions(&raw, &table, &store).unwrap_err();
        assert!(matches!(err, EfforaError::PredictionDesync(_)));
        assert!(err.to_string().contains("1 predictions for 2 feature rows"));
    }

    #[test]
    fn test_out_of_range_instance_is_desync() {
        let (table, store) = fixtures();
        let raw = RAW_PREDICTIONS.replace("     2  ", "     7  ");
        let err = parse_predictions(&raw, &table, &store).unwrap_err();
        assert!(err.to_string().contains("instance index 7"));
    }

    #[test]
    fn test_repeated_instance_is_desync() {
        let (table, store) = fixtures();
        let raw = RAW_PREDICTIONS.replace("     2  ", "     1  ");
        let err = parse_predictions(&raw, &table, &store).unwrap_err();
        assert!(err.to_string().contains("repeated"));
    }

    #[test]
    fn test_unknown_class_is_desync() {
        let (table, store) = fixtures();
        let raw = RAW_PREDICTIONS.replace("1:effector", "1:maybe-effector");
        let err = parse_predictions(&raw, &table, &store).unwrap_err();
        assert!(err.to_string().contains("maybe-effector"));
    }

    #[test]
    fn test_unreadable_probability_is_desync() {
        let (table, store) = fixtures();
        let raw = RAW_PREDICTIONS.replace("0.91", "NaN%");
        let err = parse_predictions(&raw, &table, &store).unwrap_err();
        assert!(err.to_string().contains("unreadable probability"));
    }

    #[test]
    fn test_probability_out_of_range_is_desync() {
        let (table, store) = fixtures();
        let raw = RAW_PREDICTIONS.replace("0.91", "1.91");
        let err = parse_predictions(&raw, &table, &store).unwrap_err();
        assert!(err.to_string().contains("outside [0, 1]"));
    }

    #[test]
    fn test_empty_output_for_empty_table() {
        let store = SequenceStore::from_records(Vec::new()).unwrap();
        let table = FeatureTable::default();
        let records = parse_predictions("", &table, &store).unwrap();
        assert!(records.is_empty());
    }
}
