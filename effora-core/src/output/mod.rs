//! Report rendering for prediction results.
//!
//! Two deterministic report renderers plus the optional predicted-effector
//! FASTA export. Rendering is pure: given well-formed results it always
//! produces output, even when the result set is empty.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use effora_core::{EffectorAnalyzer, config::{OutputFormat, PipelineConfig}};
//! use effora_core::output::write_report;
//!
//! let analyzer = EffectorAnalyzer::new(PipelineConfig::default());
//! let results = analyzer.analyze_fasta_file("secretome.fasta")?;
//!
//! write_report(&mut std::io::stdout(), &results, OutputFormat::Short)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::io::Write;

use crate::config::OutputFormat;
use crate::results::PredictionResults;
use crate::types::EfforaError;

mod formats {
    pub mod fasta;
    pub mod long;
    pub mod short;
}

use formats::{long::write_long_format, short::write_short_format};

pub use formats::fasta::write_effector_fasta;

/// Write the prediction report in the requested format.
///
/// The short format is the tab-delimited table alone; the long format
/// appends the annotated per-effector blocks after it.
pub fn write_report<W: Write>(
    writer: &mut W,
    results: &PredictionResults,
    format: OutputFormat,
) -> Result<(), EfforaError> {
    write_short_format(writer, results)?;
    if format == OutputFormat::Long {
        write_long_format(writer, results)?;
    }
    Ok(())
}
