use std::io::Write;

use crate::results::PredictionResults;
use crate::types::EfforaError;

/// Write the short prediction report: one tab-delimited line per classified
/// protein, in original input order.
pub fn write_short_format<W: Write>(
    writer: &mut W,
    results: &PredictionResults,
) -> Result<(), EfforaError> {
    for record in results.records() {
        writeln!(
            writer,
            "{}\t{}\t{}",
            record.original_id, record.label, record.probability
        )?;
    }
    Ok(())
}
