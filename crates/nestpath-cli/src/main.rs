// SPDX-License-Identifier: MIT OR Apache-2.0
//! nestpath CLI binary - probe, select, match and merge nested JSON

use anyhow::Result;
use clap::{Parser, Subcommand};
use nestpath_cli::io::{load_merge_inputs, read_json, render, write_output};
use nestpath_cli::probe::{Extremum, extremum_by_path, parse_rules};
use nestpath_core::{TracingSink, tokenize};
use nestpath_merge::merge_object_with_sink;
use nestpath_ops::{check_nested_report, create_obj, find_object_by_key, select_object};
use serde_json::Value;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nestpath")]
#[command(version, about, long_about = None)]
struct Args {
    /// Compact JSON output
    #[arg(short, long, global = true)]
    compact: bool,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Subcommands for nestpath CLI
#[derive(Subcommand)]
enum Commands {
    /// Tokenize a dot/bracket path into its segments
    Keys {
        /// Path such as `profile.colors[2]`
        path: String,
    },
    /// Check that every path resolves (exit status 1 otherwise)
    Exists {
        /// Paths to check
        #[arg(required = true)]
        paths: Vec<String>,
        /// JSON file (reads from stdin if not provided)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Deep merge JSON files left to right
    Merge {
        /// JSON files to merge; a file holding an array contributes each element
        files: Vec<PathBuf>,
    },
    /// Extract one path into a minimal object
    Extract {
        /// Path to extract
        path: String,
        /// JSON file (reads from stdin if not provided)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Select several paths into one merged object
    Select {
        /// Paths to select
        #[arg(required = true)]
        paths: Vec<String>,
        /// JSON file (reads from stdin if not provided)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Check that rule keys appear somewhere with the given values
    Match {
        /// Rules as a JSON object, or @FILE
        #[arg(short, long)]
        rules: String,
        /// JSON file (reads from stdin if not provided)
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Print the comparison counts instead of a boolean
        #[arg(long)]
        report: bool,
    },
    /// Element of a JSON array with the greatest number at PATH
    Max {
        /// Path to the numeric key inside each element
        path: String,
        /// JSON file (reads from stdin if not provided)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Element of a JSON array with the smallest number at PATH
    Min {
        /// Path to the numeric key inside each element
        path: String,
        /// JSON file (reads from stdin if not provided)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let outcome = match &args.command {
        Commands::Keys { path } => run_keys(&args, path),
        Commands::Exists { paths, file } => run_exists(&args, paths, file.as_ref()),
        Commands::Merge { files } => run_merge(&args, files),
        Commands::Extract { path, file } => run_extract(&args, path, file.as_ref()),
        Commands::Select { paths, file } => run_select(&args, paths, file.as_ref()),
        Commands::Match {
            rules,
            file,
            report,
        } => run_match(&args, rules, file.as_ref(), *report),
        Commands::Max { path, file } => run_extremum(&args, path, file.as_ref(), Extremum::Max),
        Commands::Min { path, file } => run_extremum(&args, path, file.as_ref(), Extremum::Min),
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn emit(args: &Args, value: &Value) -> Result<()> {
    let text = render(value, args.compact)?;
    write_output(&text, args.output.as_deref())
}

// Each runner returns Ok(false) when the command succeeded but its probe
// answered no, which maps to exit status 1.

fn run_keys(args: &Args, path: &str) -> Result<bool> {
    let segments = tokenize(path).to_vec();
    emit(args, &Value::from(segments))?;
    Ok(true)
}

fn run_exists(args: &Args, paths: &[String], file: Option<&PathBuf>) -> Result<bool> {
    let payload = read_json(file.map(PathBuf::as_path))?;
    let found = find_object_by_key(&payload, paths);
    emit(args, &Value::Bool(found))?;
    Ok(found)
}

fn run_merge(args: &Args, files: &[PathBuf]) -> Result<bool> {
    let inputs = load_merge_inputs(files)?;
    let merged = merge_object_with_sink(&inputs, &TracingSink);
    emit(args, &merged)?;
    Ok(true)
}

fn run_extract(args: &Args, path: &str, file: Option<&PathBuf>) -> Result<bool> {
    let payload = read_json(file.map(PathBuf::as_path))?;
    emit(args, &create_obj(&payload, path))?;
    Ok(true)
}

fn run_select(args: &Args, paths: &[String], file: Option<&PathBuf>) -> Result<bool> {
    let payload = read_json(file.map(PathBuf::as_path))?;
    emit(args, &select_object(&payload, paths))?;
    Ok(true)
}

fn run_match(args: &Args, rules: &str, file: Option<&PathBuf>, show_report: bool) -> Result<bool> {
    let rules = parse_rules(rules)?;
    let payload = read_json(file.map(PathBuf::as_path))?;
    let report = check_nested_report(&payload, &rules);
    tracing::debug!(
        rules = report.rules,
        compared = report.compared,
        matched = report.matched,
        "match report"
    );
    if show_report {
        emit(args, &serde_json::to_value(report)?)?;
    } else {
        emit(args, &Value::Bool(report.is_match()))?;
    }
    Ok(report.is_match())
}

fn run_extremum(args: &Args, path: &str, file: Option<&PathBuf>, pick: Extremum) -> Result<bool> {
    let payload = read_json(file.map(PathBuf::as_path))?;
    let best = extremum_by_path(&payload, path, pick)?;
    emit(args, best.as_ref().unwrap_or(&Value::Null))?;
    Ok(best.is_some())
}
