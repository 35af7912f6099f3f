use std::io::Write;

use bio::io::fasta;

use crate::results::PredictionResults;
use crate::types::EfforaError;

/// Write the predicted effectors as FASTA, probability annotated in the
/// header: `>` + original identifier + `" | Effector probability: "` +
/// probability. Records follow the long report's descending-probability
/// order.
pub fn write_effector_fasta<W: Write>(
    writer: &mut W,
    results: &PredictionResults,
) -> Result<(), EfforaError> {
    let mut fasta_writer = fasta::Writer::new(writer);
    for record in results.predicted_effectors() {
        let annotation = format!("| Effector probability: {}", record.probability);
        fasta_writer
            .write(
                &record.original_id,
                Some(&annotation),
                record.sequence.as_bytes(),
            )
            .map_err(EfforaError::Io)?;
    }
    Ok(())
}
