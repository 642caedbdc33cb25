//! Count keyword occurrences across a directory of PDFs.
//!
//! Usage:
//!   pdf_keyword_audit well_logs
//!   pdf_keyword_audit well_logs -o output/keyword_counts.json
//!   pdf_keyword_audit well_logs -k kick -k leak --keywords-file extra_terms.txt
//!
//! Exit status: 0 when every PDF was read, 2 when some PDFs were skipped,
//! 1 on a fatal error (no report is written).

use clap::Parser;
use pdf_keyword_audit::keywords::read_keyword_file;
use pdf_keyword_audit::{run_audit, AuditConfig, AuditOutcome, KeywordSet, ReportFormat};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status when the run completed but some documents were skipped.
const EXIT_SKIPPED: u8 = 2;

#[derive(Parser, Debug)]
#[command(version, about = "Tally keyword occurrences in every PDF under a directory")]
struct Args {
    /// Directory scanned recursively for *.pdf files
    input_root: PathBuf,

    /// Report destination (format inferred from .csv, .json, .md or .xlsx)
    #[arg(short, long, default_value = "keyword_counts.csv")]
    output: PathBuf,

    /// Keyword to count; repeat for several. Replaces the built-in list
    #[arg(short, long = "keyword", value_name = "KEYWORD")]
    keywords: Vec<String>,

    /// File with one keyword per line ('#' starts a comment)
    #[arg(long, value_name = "PATH")]
    keywords_file: Option<PathBuf>,

    /// Report format, overriding the output extension
    #[arg(short, long, value_parser = parse_format)]
    format: Option<ReportFormat>,

    /// Follow symbolic links while scanning
    #[arg(long)]
    follow_links: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Do not print the keyword totals
    #[arg(short, long)]
    quiet: bool,
}

fn parse_format(name: &str) -> Result<ReportFormat, String> {
    ReportFormat::from_name(name).map_err(|e| e.to_string())
}

impl Args {
    /// Keyword set from `--keywords-file` then `--keyword`, or the built-in list.
    fn keyword_set(&self) -> pdf_keyword_audit::Result<KeywordSet> {
        let mut entries: Vec<String> = Vec::new();
        if let Some(path) = &self.keywords_file {
            entries.extend(read_keyword_file(path)?);
        }
        entries.extend(self.keywords.iter().cloned());

        if entries.is_empty() && self.keywords_file.is_none() {
            Ok(KeywordSet::default())
        } else {
            KeywordSet::new(entries)
        }
    }

    fn to_config(&self) -> pdf_keyword_audit::Result<AuditConfig> {
        let mut config = AuditConfig::new(&self.input_root, &self.output)
            .with_keywords(self.keyword_set()?)
            .with_follow_links(self.follow_links);
        if let Some(format) = self.format {
            config = config.with_format(format);
        }
        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn print_totals(outcome: &AuditOutcome) {
    let width = outcome
        .totals
        .iter()
        .map(|(keyword, _)| keyword.len())
        .max()
        .unwrap_or(0);

    println!("Keyword totals ({} documents)", outcome.report.len());
    println!("{}", "=".repeat(width + 12));
    for (keyword, total) in outcome.totals.iter() {
        println!("{:<width$}  {:>10}", keyword, total, width = width);
    }
    if outcome.has_failures() {
        println!("Skipped {} unreadable PDF(s)", outcome.failures.len());
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let outcome = match args.to_config().and_then(|config| run_audit(&config)) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        },
    };

    if !args.quiet {
        print_totals(&outcome);
    }

    if outcome.has_failures() {
        ExitCode::from(EXIT_SKIPPED)
    } else {
        ExitCode::SUCCESS
    }
}
