//! # Effora - Effector Prediction Pipeline
//!
//! Effora classifies candidate secreted proteins as likely effectors. For
//! every protein in an input FASTA set it derives physicochemical statistics
//! through the external EMBOSS `pepstats` tool, serializes them as a feature
//! table, applies a pre-trained WEKA Naive Bayes model, and reports the
//! per-protein predictions keyed to the caller's original identifiers.
//!
//! ## Overview
//!
//! The pipeline's hard requirement is identifier integrity: external tools
//! cannot handle long sequence names, so every protein gets a short
//! surrogate identifier, and the original/surrogate correspondence must
//! survive three serialization boundaries (input FASTA, feature table,
//! classifier output) without cross-wiring names and sequences. Results are
//! always reported in the caller's original input order.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use effora_core::{EffectorAnalyzer, config::{OutputFormat, PipelineConfig}};
//! use effora_core::output::write_report;
//!
//! let config = PipelineConfig {
//!     weka_jar: "/opt/weka/weka.jar".into(),
//!     model: "/opt/effora/effora_bayes.model".into(),
//!     ..Default::default()
//! };
//!
//! let analyzer = EffectorAnalyzer::new(config);
//! let results = analyzer.analyze_fasta_file("secretome.fasta")?;
//!
//! write_report(&mut std::io::stdout(), &results, OutputFormat::Long)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Run configuration and output format selection
//! - [`sequence`]: FASTA ingestion and the in-memory protein store
//! - [`idmap`]: Surrogate identifier assignment and reversal
//! - [`workspace`]: Run-scoped temporary directory for intermediate artifacts
//! - [`tools`]: Blocking adapter for the external tool processes
//! - [`pepstats`]: Feature extraction through the statistics tool
//! - [`arff`]: Feature table serialization for the classifier
//! - [`weka`]: Classifier invocation and prediction decoding
//! - [`results`]: Ordered prediction records and the effector view
//! - [`output`]: Short/long report renderers and effector FASTA export
//! - [`engine`]: The pipeline orchestrator
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, EfforaError>`](types::EfforaError).
//! External tool failures are fatal and name the failing tool; a protein
//! whose statistics could not be parsed is silently dropped from the
//! results instead, so partial extraction gaps still yield a usable report.

pub mod arff;
pub mod config;
pub mod constants;
pub mod engine;
pub mod idmap;
pub mod output;
pub mod pepstats;
pub mod results;
pub mod sequence;
pub mod tools;
pub mod types;
pub mod weka;
pub mod workspace;

pub use engine::EffectorAnalyzer;
pub use results::PredictionResults;
