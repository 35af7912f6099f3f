use std::io::Write;

use crate::results::PredictionResults;
use crate::types::{EfforaError, PredictionRecord};

/// Write the long prediction report: run totals, then one annotated block
/// per predicted effector, sorted by descending probability.
pub fn write_long_format<W: Write>(
    writer: &mut W,
    results: &PredictionResults,
) -> Result<(), EfforaError> {
    let effectors = results.predicted_effectors();

    writeln!(writer, "-----------------")?;
    writeln!(writer)?;
    writeln!(writer, "Number of proteins classified: {}", results.len())?;
    writeln!(writer, "Number of predicted effectors: {}", effectors.len())?;
    writeln!(writer)?;

    if effectors.is_empty() {
        writeln!(writer, "No effectors were predicted in this set.")?;
        return Ok(());
    }

    writeln!(writer, "Predicted effectors sorted by probability:")?;
    writeln!(writer)?;
    for record in effectors {
        write_effector_block(writer, record)?;
    }
    Ok(())
}

fn write_effector_block<W: Write>(
    writer: &mut W,
    record: &PredictionRecord,
) -> Result<(), EfforaError> {
    let length = record.sequence.chars().count();
    let cysteines = record
        .sequence
        .chars()
        .filter(|c| c.eq_ignore_ascii_case(&'C'))
        .count();
    let cysteine_percent = if length == 0 {
        0.0
    } else {
        100.0 * cysteines as f64 / length as f64
    };

    writeln!(writer, "{}", record.original_id)?;
    writeln!(writer, "\tEffector probability: {}", record.probability)?;
    writeln!(writer, "\tLength: {length} residues")?;
    writeln!(
        writer,
        "\tCysteine content: {cysteines} ({cysteine_percent:.1}%)"
    )?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::SequenceStore;
    use crate::types::{PredictedLabel, PredictionRecord};

    fn results_with(records: Vec<PredictionRecord>) -> PredictionResults {
        let store = SequenceStore::from_records(
            records
                .iter()
                .map(|r| (r.original_id.clone(), r.sequence.clone()))
                .collect(),
        )
        .unwrap();
        PredictionResults::from_classifier_order(records, &store)
    }

    fn record(id: &str, sequence: &str, label: PredictedLabel, probability: f64) -> PredictionRecord {
        PredictionRecord {
            original_id: id.to_string(),
            sequence: sequence.to_string(),
            label,
            probability,
        }
    }

    #[test]
    fn test_totals_and_block_contents() {
        let results = results_with(vec![
            record("A", "MKCSCCDEHA", PredictedLabel::Effector, 0.91),
            record("B", "MGGYRP", PredictedLabel::NonEffector, 0.4),
        ]);

        let mut buffer = Vec::new();
        write_long_format(&mut buffer, &results).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("Number of proteins classified: 2"));
        assert!(output.contains("Number of predicted effectors: 1"));
        assert!(output.contains("A\n\tEffector probability: 0.91"));
        assert!(output.contains("Length: 10 residues"));
        assert!(output.contains("Cysteine content: 3 (30.0%)"));
        // Non-effectors get no block.
        assert!(!output.contains("B\n"));
    }

    #[test]
    fn test_blocks_follow_probability_order() {
        let results = results_with(vec![
            record("low", "MK", PredictedLabel::Effector, 0.51),
            record("high", "MK", PredictedLabel::Effector, 0.99),
        ]);

        let mut buffer = Vec::new();
        write_long_format(&mut buffer, &results).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let high = output.find("high").unwrap();
        let low = output.find("low").unwrap();
        assert!(high < low);
    }

    #[test]
    fn test_no_effectors_message() {
        let results = results_with(vec![record("A", "MK", PredictedLabel::NonEffector, 0.3)]);
        let mut buffer = Vec::new();
        write_long_format(&mut buffer, &results).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("No effectors were predicted in this set."));
        assert!(output.contains("Number of proteins classified: 1"));
    }
}
