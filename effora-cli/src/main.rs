//! # Effora CLI - Command-Line Effector Prediction
//!
//! A command-line interface for the Effora effector prediction pipeline.
//!
//! ## Usage
//!
//! ```bash
//! # Predict effectors, short and long report to stdout
//! effora -i secretome.fasta
//!
//! # Short tab-delimited report only, saved to a file
//! effora -i secretome.fasta -s -o predictions.tsv
//!
//! # Additionally export predicted effectors as FASTA
//! effora -i secretome.fasta -E effectors.fasta
//! ```
//!
//! ## Options
//!
//! - `-i, --input <FILE>`: Input protein FASTA file (required)
//! - `-s, --short`: Short-format output only
//! - `-o, --output <FILE>`: Output file (default: stdout)
//! - `-E, --effectors <FILE>`: Write predicted effectors to a FASTA file
//! - `-q, --quiet`: Suppress progress messages
//! - `--pepstats <PATH>`: pepstats executable (default: `$EFFORA_PEPSTATS`
//!   or `pepstats` on `PATH`)
//! - `--java <PATH>`: java executable (default: `$EFFORA_JAVA` or `java`)
//! - `--weka-jar <PATH>`: WEKA jar (default: `$WEKA_JAR` or `weka.jar`)
//! - `--model <PATH>`: trained model (default: `$EFFORA_MODEL` or
//!   `effora_bayes.model` next to the executable)
//!
//! Exits with status 1 on any fatal error (unreadable input, tool failure).

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};
use effora_core::config::{OutputFormat, PipelineConfig};
use effora_core::output::{write_effector_fasta, write_report};
use effora_core::EffectorAnalyzer;

/// Main entry point for the Effora CLI application.
fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

/// Parses command-line arguments, resolves the tool configuration once,
/// runs the pipeline, and writes the report in the requested format.
fn run() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("effora")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Effector prediction for secreted proteins")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .required(true)
                .help("Input protein FASTA file"),
        )
        .arg(
            Arg::new("short")
                .short('s')
                .long("short")
                .action(ArgAction::SetTrue)
                .help("Short-format output only"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file (default: stdout)"),
        )
        .arg(
            Arg::new("effectors")
                .short('E')
                .long("effectors")
                .value_name("FILE")
                .help("Write predicted effectors to a FASTA file"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Quiet mode"),
        )
        .arg(
            Arg::new("pepstats")
                .long("pepstats")
                .value_name("PATH")
                .help("pepstats executable"),
        )
        .arg(
            Arg::new("java")
                .long("java")
                .value_name("PATH")
                .help("java executable"),
        )
        .arg(
            Arg::new("weka-jar")
                .long("weka-jar")
                .value_name("PATH")
                .help("WEKA jar providing the classifier"),
        )
        .arg(
            Arg::new("model")
                .long("model")
                .value_name("PATH")
                .help("Trained model artifact"),
        )
        .get_matches();

    let config = PipelineConfig {
        pepstats: resolve_path(&matches, "pepstats", "EFFORA_PEPSTATS", || {
            PathBuf::from("pepstats")
        }),
        java: resolve_path(&matches, "java", "EFFORA_JAVA", || PathBuf::from("java")),
        weka_jar: resolve_path(&matches, "weka-jar", "WEKA_JAR", || {
            PathBuf::from("weka.jar")
        }),
        model: resolve_path(&matches, "model", "EFFORA_MODEL", default_model_path),
        quiet: matches.get_flag("quiet"),
        tool_timeout: None,
    };

    let format = if matches.get_flag("short") {
        OutputFormat::Short
    } else {
        OutputFormat::Long
    };

    let analyzer = EffectorAnalyzer::new(config);
    let input = matches
        .get_one::<String>("input")
        .expect("input is a required argument");
    let results = analyzer.analyze_fasta_file(input)?;

    // Write the report
    if let Some(output_file) = matches.get_one::<String>("output") {
        let mut writer = BufWriter::new(File::create(output_file)?);
        write_report(&mut writer, &results, format)?;
        writer.flush()?;
        if !analyzer.config.quiet {
            eprintln!("Results were saved to output file: {output_file}");
        }
    } else {
        let stdout = io::stdout();
        let mut writer = BufWriter::new(stdout.lock());
        write_report(&mut writer, &results, format)?;
        writer.flush()?;
    }

    // Optional predicted-effector FASTA export
    if let Some(effector_file) = matches.get_one::<String>("effectors") {
        let mut writer = BufWriter::new(File::create(effector_file)?);
        write_effector_fasta(&mut writer, &results)?;
        writer.flush()?;
    }

    Ok(())
}

/// Resolve a tool location: explicit flag, then environment variable, then
/// the built-in default. Resolution happens here, once, so the pipeline
/// itself never consults the environment.
fn resolve_path(
    matches: &clap::ArgMatches,
    flag: &str,
    env_var: &str,
    default: impl FnOnce() -> PathBuf,
) -> PathBuf {
    matches
        .get_one::<String>(flag)
        .map(PathBuf::from)
        .or_else(|| env::var_os(env_var).map(PathBuf::from))
        .unwrap_or_else(default)
}

/// Default model location: shipped next to the executable.
fn default_model_path() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("effora_bayes.model")))
        .unwrap_or_else(|| PathBuf::from("effora_bayes.model"))
}
