//! Command-line parsing for the compatibility analyzer.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the derivation/scoring code.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "lovematch", version, about = "Love Match Compatibility Analyzer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze two birth dates and print the compatibility report.
    Analyze(AnalyzeArgs),
    /// Re-render a report previously written with `analyze --export`.
    Show(ShowArgs),
    /// Launch the interactive form.
    ///
    /// Uses the same evaluation pipeline as `lovematch analyze`, but collects
    /// the dates and renders results in a terminal UI using Ratatui.
    Tui(TuiArgs),
}

/// Options for a one-shot analysis.
#[derive(Debug, Parser, Clone)]
pub struct AnalyzeArgs {
    /// Partner A birth date (YYYY-MM-DD).
    #[arg(short = 'a', long = "partner-a", value_name = "DATE")]
    pub date_a: NaiveDate,

    /// Partner B birth date (YYYY-MM-DD).
    #[arg(short = 'b', long = "partner-b", value_name = "DATE")]
    pub date_b: NaiveDate,

    /// Year the wedding-year window starts at (default: this year).
    #[arg(long)]
    pub current_year: Option<i32>,

    /// Export the result to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

/// Options for re-rendering a saved report.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Report JSON file produced by `lovematch analyze --export`.
    #[arg(long, value_name = "JSON")]
    pub report: PathBuf,
}

/// Options for the interactive form.
#[derive(Debug, Parser, Clone, Default)]
pub struct TuiArgs {
    /// Initial partner A birth date (YYYY-MM-DD).
    #[arg(short = 'a', long = "partner-a", value_name = "DATE")]
    pub date_a: Option<NaiveDate>,

    /// Initial partner B birth date (YYYY-MM-DD).
    #[arg(short = 'b', long = "partner-b", value_name = "DATE")]
    pub date_b: Option<NaiveDate>,

    /// Year the wedding-year window starts at (default: this year).
    #[arg(long)]
    pub current_year: Option<i32>,
}
