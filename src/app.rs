//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - installs logging
//! - parses CLI arguments, then resolves whatever settings the command needs
//! - runs the evaluation pipeline
//! - prints reports or launches the form
//! - writes optional exports

use clap::Parser;
use tracing::debug;

use crate::cli::{AnalyzeArgs, Command, ShowArgs, TuiArgs};
use crate::config::{Overrides, Settings};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `lovematch` binary.
pub fn run() -> Result<(), AppError> {
    crate::logging::init();

    // We want `lovematch` and `lovematch -a 1990-01-01` to behave like
    // `lovematch tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Analyze(args) => handle_analyze(args),
        Command::Show(args) => handle_show(args),
        Command::Tui(args) => handle_tui(args),
    }
}

fn handle_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let current_year = crate::config::current_year_from_env(args.current_year)?;
    debug!(current_year, "resolved wedding-window year");
    let result = pipeline::evaluate(args.date_a, args.date_b, current_year);

    println!("{}", crate::report::format_report(&result));

    if let Some(path) = &args.export {
        crate::io::write_result_json(path, &result, current_year)?;
    }

    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let report = crate::io::read_result_json(&args.report)?;
    println!("{}", crate::report::format_report(&report.result));
    Ok(())
}

fn handle_tui(args: TuiArgs) -> Result<(), AppError> {
    let settings = Settings::from_env(tui_overrides(&args))?;
    debug!(?settings, "loaded settings");
    let form = crate::tui::FormDefaults {
        date_a: settings.default_a,
        date_b: settings.default_b,
        current_year: settings.current_year,
    };
    crate::tui::run(form)
}

fn tui_overrides(args: &TuiArgs) -> Overrides {
    Overrides {
        current_year: args.current_year,
        default_a: args.date_a,
        default_b: args.date_b,
    }
}

/// Rewrite argv so `lovematch` defaults to `lovematch tui`.
///
/// Rules:
/// - `lovematch`                      -> `lovematch tui`
/// - `lovematch -a 1990-01-01 ...`    -> `lovematch tui -a 1990-01-01 ...`
/// - `lovematch --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "analyze" | "show" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_launches_tui() {
        assert_eq!(rewrite_args(args(&["lovematch"])), args(&["lovematch", "tui"]));
    }

    #[test]
    fn leading_flag_goes_to_tui() {
        assert_eq!(
            rewrite_args(args(&["lovematch", "-a", "1990-01-01"])),
            args(&["lovematch", "tui", "-a", "1990-01-01"])
        );
    }

    #[test]
    fn tui_flags_become_overrides() {
        let cli = crate::cli::Cli::parse_from(args(&["lovematch", "tui", "-b", "1992-06-01", "--current-year", "2024"]));
        let Command::Tui(tui) = cli.command else {
            panic!("expected tui");
        };
        let overrides = tui_overrides(&tui);
        assert_eq!(overrides.current_year, Some(2024));
        assert_eq!(overrides.default_a, None);
        assert_eq!(overrides.default_b, chrono::NaiveDate::from_ymd_opt(1992, 6, 1));

        let malformed = |key: &str| match key {
            crate::config::ENV_CURRENT_YEAR => Some("soon".to_string()),
            crate::config::ENV_DEFAULT_B => Some("bogus".to_string()),
            _ => None,
        };
        let settings = Settings::from_lookup(malformed, overrides).unwrap();
        assert_eq!(settings.current_year, 2024);
    }

    #[test]
    fn show_ignores_malformed_settings() {
        // Reading the report is the only failure `show` can produce.
        let missing = std::env::temp_dir().join(format!("lovematch_{}_absent.json", std::process::id()));
        let err = handle_show(ShowArgs { report: missing }).unwrap_err();
        assert!(err.message().starts_with("Failed to open report JSON"));
    }

    #[test]
    fn subcommands_and_help_untouched() {
        for list in [
            &["lovematch", "analyze", "-a", "1990-01-01"][..],
            &["lovematch", "--help"][..],
            &["lovematch", "-V"][..],
            &["lovematch", "show", "--report", "x.json"][..],
        ] {
            assert_eq!(rewrite_args(args(list)), args(list));
        }
    }
}
