use std::fmt;
use std::process::ExitStatus;
use std::time::Duration;

use thiserror::Error;

use crate::constants::FEATURE_ATTRIBUTES;

/// A single protein from the input set.
///
/// Created at ingestion; the surrogate identifier is assigned once by the
/// identifier mapper and the record is immutable afterwards. Within one run
/// `original_id` and `surrogate_id` are both unique and map one-to-one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProteinRecord {
    /// Identifier from the input FASTA header (first word after '>')
    pub original_id: String,
    /// Amino acid sequence as read from the input
    pub sequence: String,
    /// Short run-local stand-in identifier used with the external tools
    pub surrogate_id: String,
}

/// Numeric features extracted for one protein, in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    /// Surrogate identifier of the protein the values belong to
    pub surrogate_id: String,
    /// Attribute values, one per entry of [`FEATURE_ATTRIBUTES`]
    pub values: Vec<f64>,
}

/// Ordered collection of feature vectors bound for the classifier.
///
/// Row order is the surrogate-identifier input order minus any proteins the
/// statistics extraction dropped, and must not change between serialization
/// and prediction parsing.
#[derive(Debug, Clone, Default)]
pub struct FeatureTable {
    rows: Vec<FeatureVector>,
}

impl FeatureTable {
    /// Create a table from rows already in extraction order.
    pub fn new(rows: Vec<FeatureVector>) -> Self {
        Self { rows }
    }

    /// Rows in extraction order.
    pub fn rows(&self) -> &[FeatureVector] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Class assigned to a protein by the trained model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictedLabel {
    /// Predicted effector candidate
    Effector,
    /// Predicted non-effector
    NonEffector,
}

impl PredictedLabel {
    /// Map a class name from the classifier output to a label.
    ///
    /// Returns `None` for class names the trained model does not define.
    pub fn from_class_name(name: &str) -> Option<Self> {
        match name {
            "effector" => Some(Self::Effector),
            "non-effector" => Some(Self::NonEffector),
            _ => None,
        }
    }

    /// Whether this label marks a predicted effector.
    #[must_use]
    pub const fn is_effector(self) -> bool {
        matches!(self, Self::Effector)
    }
}

impl fmt::Display for PredictedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Effector => write!(f, "Effector"),
            Self::NonEffector => write!(f, "Non-effector"),
        }
    }
}

/// One classified protein, keyed by its original identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRecord {
    /// Identifier as supplied in the input FASTA
    pub original_id: String,
    /// Amino acid sequence as supplied in the input FASTA
    pub sequence: String,
    /// Class assigned by the model
    pub label: PredictedLabel,
    /// Probability of the assigned class, in [0, 1]
    pub probability: f64,
}

/// Error types that can occur during an effector prediction run
#[derive(Error, Debug)]
pub enum EfforaError {
    /// Tool or model artifact not locatable before the run starts
    #[error("Configuration error: {0}")]
    Config(String),
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Input FASTA could not be parsed
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The same identifier appeared more than once in the input FASTA
    #[error("Duplicate sequence identifier in input: {0}")]
    DuplicateIdentifier(String),
    /// External process could not be started
    #[error("Failed to launch {tool}: {source}")]
    ToolLaunch {
        /// Name of the external tool
        tool: &'static str,
        /// Underlying spawn error
        source: std::io::Error,
    },
    /// External process exited with a non-zero status
    #[error("{tool} failed with {status}")]
    ToolFailed {
        /// Name of the external tool
        tool: &'static str,
        /// Exit status reported by the operating system
        status: ExitStatus,
    },
    /// External process exceeded the configured time limit
    #[error("{tool} did not finish within {limit:?}")]
    ToolTimeout {
        /// Name of the external tool
        tool: &'static str,
        /// Configured limit that was exceeded
        limit: Duration,
    },
    /// Feature vector length does not match the fixed schema
    #[error("Feature vector for {surrogate_id} has {actual} values, schema has {expected}")]
    SchemaMismatch {
        /// Surrogate identifier of the offending row
        surrogate_id: String,
        /// Expected attribute count
        expected: usize,
        /// Actual value count
        actual: usize,
    },
    /// Classifier output cannot be correlated with the feature table
    #[error("Classifier output out of sync with feature table: {0}")]
    PredictionDesync(String),
}

impl EfforaError {
    /// Expected attribute count for schema mismatch reporting.
    pub(crate) fn schema_mismatch(surrogate_id: &str, actual: usize) -> Self {
        Self::SchemaMismatch {
            surrogate_id: surrogate_id.to_string(),
            expected: FEATURE_ATTRIBUTES.len(),
            actual,
        }
    }
}
