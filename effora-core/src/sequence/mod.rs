//! Input protein set handling: FASTA ingestion and the in-memory store.

pub mod io;

use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

use crate::idmap::IdentifierMap;
use crate::types::{EfforaError, ProteinRecord};

pub use io::read_fasta_proteins;

/// In-memory representation of the input protein set.
///
/// Keeps the records in input order and owns the surrogate-identifier
/// mapping, so the bijection between original and surrogate identifiers is
/// established in one place and immutable for the rest of the run.
#[derive(Debug, Clone, Default)]
pub struct SequenceStore {
    records: Vec<ProteinRecord>,
    idmap: IdentifierMap,
}

impl SequenceStore {
    /// Ingest a protein FASTA file.
    ///
    /// # Errors
    ///
    /// Returns [`EfforaError::Io`] / [`EfforaError::InvalidInput`] for an
    /// unreadable or malformed file and [`EfforaError::DuplicateIdentifier`]
    /// when the same identifier appears twice; duplicates are never silently
    /// overwritten.
    pub fn from_fasta(path: &Path) -> Result<Self, EfforaError> {
        Self::from_records(io::read_fasta_proteins(path)?)
    }

    /// Build a store from `(identifier, sequence)` pairs in input order.
    pub fn from_records(proteins: Vec<(String, String)>) -> Result<Self, EfforaError> {
        let mut seen = HashSet::new();
        for (id, _) in &proteins {
            if !seen.insert(id.clone()) {
                return Err(EfforaError::DuplicateIdentifier(id.clone()));
            }
        }

        let idmap = IdentifierMap::assign(proteins.len());
        let records = proteins
            .into_iter()
            .enumerate()
            .map(|(index, (original_id, sequence))| ProteinRecord {
                original_id,
                sequence,
                surrogate_id: idmap
                    .surrogate(index)
                    .expect("surrogate assigned for every input position")
                    .to_string(),
            })
            .collect();

        Ok(Self { records, idmap })
    }

    /// Records in input order.
    pub fn records(&self) -> &[ProteinRecord] {
        &self.records
    }

    /// Resolve a surrogate identifier back to its protein record.
    pub fn resolve_surrogate(&self, surrogate: &str) -> Option<&ProteinRecord> {
        self.idmap
            .position(surrogate)
            .and_then(|index| self.records.get(index))
    }

    /// Number of proteins in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no proteins.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write the sequences under their surrogate identifiers in FASTA format.
    ///
    /// This is the file handed to the statistics tool, which cannot handle
    /// the original long names.
    pub fn write_surrogate_fasta<W: Write>(&self, writer: &mut W) -> Result<(), EfforaError> {
        io::write_fasta(
            writer,
            self.records
                .iter()
                .map(|r| (r.surrogate_id.as_str(), r.sequence.as_str())),
        )
    }
}
