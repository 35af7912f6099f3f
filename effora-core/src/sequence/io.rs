use std::fs::File;
use std::io::Write;
use std::path::Path;

use bio::io::fasta;

use crate::types::EfforaError;

/// Read protein records using rust-bio for FASTA files.
///
/// Returns `(identifier, sequence)` pairs in file order. The identifier is
/// the first word of the header line; descriptions are not carried because
/// downstream serialization only ever sees surrogate identifiers.
pub fn read_fasta_proteins(path: &Path) -> Result<Vec<(String, String)>, EfforaError> {
    let file = File::open(path)?;
    let reader = fasta::Reader::new(file);
    let mut proteins = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| EfforaError::InvalidInput(e.to_string()))?;
        let sequence = std::str::from_utf8(record.seq())
            .map_err(|_| {
                EfforaError::InvalidInput(format!("non-text sequence data for {}", record.id()))
            })?
            .to_string();
        proteins.push((record.id().to_string(), sequence));
    }

    Ok(proteins)
}

/// Write sequences to `writer` in FASTA format under the given identifiers.
///
/// Used for the surrogate-identifier FASTA handed to the statistics tool;
/// sequences are written on a single line each.
pub fn write_fasta<W: Write>(
    writer: &mut W,
    records: impl Iterator<Item = (impl AsRef<str>, impl AsRef<str>)>,
) -> Result<(), EfforaError> {
    let mut fasta_writer = fasta::Writer::new(writer);
    for (id, sequence) in records {
        fasta_writer
            .write(id.as_ref(), None, sequence.as_ref().as_bytes())
            .map_err(EfforaError::Io)?;
    }
    Ok(())
}
