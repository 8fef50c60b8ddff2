//! CLI tool to convert LHCO event files to CSV or DOCX.
//!
//! Usage:
//!   lhco-convert input.lhco output.csv
//!   lhco-convert input.lhco output.docx --format docx
//!   lhco-convert input.lhco jets.csv --particle 4 --columns pt eta phi
//!
//! A missing input file exits with status 1. A missing DOCX capability is
//! reported on stdout and exits with status 0.

use clap::Parser;
use lhco_convert::{
    Capability, ConvertError, ConvertOptions, OutputFormat, WriteOutcome, convert,
};
use std::path::PathBuf;
use std::process;

/// Convert LHCO to CSV or DOCX.
#[derive(Parser)]
#[command(name = "lhco-convert", version)]
struct Cli {
    /// Input LHCO file path
    input: PathBuf,

    /// Output file path (.csv or .docx)
    output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Filter by particle typ (e.g. 2)
    #[arg(long)]
    particle: Option<String>,

    /// Columns to include (e.g. pt eta phi)
    #[arg(long, num_args = 1..)]
    columns: Option<Vec<String>>,

    /// Show record counts and debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let capability = Capability::detect();
    let options = ConvertOptions {
        input: cli.input,
        output: cli.output,
        format: cli.format,
        particle: cli.particle,
        columns: cli.columns,
    };

    if cli.verbose {
        eprintln!("Input:    {}", options.input.display());
        eprintln!("Output:   {}", options.output.display());
        eprintln!("Format:   {}", options.format.label());
    }

    match convert(&options, &capability) {
        Ok(report) => {
            match report.outcome {
                WriteOutcome::Written { .. } => println!(
                    "{} written to {}",
                    options.format.label(),
                    options.output.display()
                ),
                WriteOutcome::NoRecords => println!("No records to write."),
            }
            if cli.verbose {
                eprintln!(
                    "Records:  {} in -> {} out",
                    report.input_count, report.output_count
                );
            }
        }
        Err(e @ ConvertError::InputNotFound(_)) => {
            eprintln!("{e}");
            process::exit(1);
        }
        Err(ConvertError::CapabilityUnavailable(format)) => {
            println!("Error: {format} support is not available. Cannot write {format}.");
        }
        Err(e) => {
            eprintln!("Conversion error: {e}");
            process::exit(1);
        }
    }

    if options.format == OutputFormat::Docx && !capability.is_available() {
        println!(
            "Reminder: rebuild lhco-convert with the \"docx\" feature to enable DOCX output."
        );
    }
}
