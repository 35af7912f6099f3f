//! Feature extraction through the external statistics tool.
//!
//! Writes the surrogate-identifier FASTA, invokes pepstats over it as
//! `pepstats -sequence <fasta> -outfile <report>`, and parses the report's
//! per-record blocks into feature vectors. A protein whose block is missing
//! or incomplete is dropped from the feature table instead of failing the
//! run; a tool failure is fatal.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};

use crate::config::PipelineConfig;
use crate::constants::PEPSTATS_PROPERTIES;
use crate::sequence::SequenceStore;
use crate::tools::ExternalTool;
use crate::types::{EfforaError, FeatureTable, FeatureVector};
use crate::workspace::RunWorkspace;

/// Feature extractor adapter around the statistics tool.
#[derive(Debug)]
pub struct FeatureExtractor<'a> {
    config: &'a PipelineConfig,
}

impl<'a> FeatureExtractor<'a> {
    /// Create an extractor bound to the run configuration.
    pub fn new(config: &'a PipelineConfig) -> Self {
        Self { config }
    }

    /// Derive the feature table for every protein in the store.
    ///
    /// # Errors
    ///
    /// Fatal when the tool cannot be launched, exits non-zero, or the report
    /// file cannot be read back. Per-protein extraction gaps are not errors.
    pub fn run(
        &self,
        store: &SequenceStore,
        workspace: &RunWorkspace,
    ) -> Result<FeatureTable, EfforaError> {
        let fasta_path = workspace.surrogate_fasta();
        let mut writer = BufWriter::new(File::create(&fasta_path)?);
        store.write_surrogate_fasta(&mut writer)?;
        writer.flush()?;

        let report_path = workspace.statistics_report();
        let tool = ExternalTool::new("pepstats", &self.config.pepstats);
        let args: [&OsStr; 4] = [
            OsStr::new("-sequence"),
            fasta_path.as_os_str(),
            OsStr::new("-outfile"),
            report_path.as_os_str(),
        ];
        tool.run(args, None, self.config.tool_timeout)?;

        let report = fs::read_to_string(&report_path)?;
        Ok(parse_report(&report, store))
    }
}

/// Parse a pepstats report into a feature table in store order.
///
/// Each record block starts with `PEPSTATS of <id> from <a> to <b>`. The
/// sequence length comes from the store; molecular weight, charge and
/// isoelectric point come from the block's summary lines, the nine property
/// Mole% values from the property table. Proteins without a complete block
/// yield no row.
pub fn parse_report(report: &str, store: &SequenceStore) -> FeatureTable {
    let blocks = split_blocks(report);

    let mut rows = Vec::new();
    for record in store.records() {
        let Some(block) = blocks.get(record.surrogate_id.as_str()) else {
            continue;
        };
        let Some(parsed) = parse_block(block) else {
            continue;
        };
        let mut values = Vec::with_capacity(4 + PEPSTATS_PROPERTIES.len());
        values.push(record.sequence.chars().count() as f64);
        values.extend_from_slice(&parsed);
        rows.push(FeatureVector {
            surrogate_id: record.surrogate_id.clone(),
            values,
        });
    }
    FeatureTable::new(rows)
}

/// Group report lines into per-record blocks keyed by identifier.
fn split_blocks(report: &str) -> HashMap<&str, Vec<&str>> {
    let mut blocks: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut current: Option<&str> = None;

    for line in report.lines() {
        if line.starts_with("PEPSTATS of") {
            current = line.split_whitespace().nth(2);
            if let Some(id) = current {
                blocks.entry(id).or_default();
            }
            continue;
        }
        if let Some(id) = current {
            if let Some(lines) = blocks.get_mut(id) {
                lines.push(line);
            }
        }
    }
    blocks
}

/// Extract `[molecular weight, charge, isoelectric point, properties...]`
/// from one record block. `None` when any expected field is absent or not
/// numeric.
fn parse_block(lines: &[&str]) -> Option<Vec<f64>> {
    let mut values = Vec::with_capacity(3 + PEPSTATS_PROPERTIES.len());
    values.push(summary_field(lines, "weight")?);
    values.push(summary_field(lines, "Charge")?);
    values.push(summary_field(lines, "Point")?);
    for property in PEPSTATS_PROPERTIES {
        values.push(property_mole_percent(lines, property)?);
    }
    Some(values)
}

/// Value of the `<key> = <number>` field on whichever line carries `key`.
fn summary_field(lines: &[&str], key: &str) -> Option<f64> {
    for line in lines {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(position) = tokens.iter().position(|t| *t == key) else {
            continue;
        };
        let equals = tokens[position..].iter().position(|t| *t == "=")? + position;
        return tokens.get(equals + 1)?.parse().ok();
    }
    None
}

/// Mole% (last column) of the property-table line labelled `property`.
fn property_mole_percent(lines: &[&str], property: &str) -> Option<f64> {
    for line in lines {
        let mut tokens = line.split_whitespace();
        if tokens.next() != Some(property) {
            continue;
        }
        return tokens.last()?.parse().ok();
    }
    None
}
