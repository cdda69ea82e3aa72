//! Read/write report JSON files.
//!
//! A report file is the "portable" form of one evaluation: the full
//! `CompatibilityResult` plus the year its wedding window was anchored at, so
//! `lovematch show` can re-render it later without recomputing.

use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::CompatibilityResult;
use crate::error::AppError;

pub const TOOL_NAME: &str = "lovematch";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFile {
    pub tool: String,
    pub generated_for_year: i32,
    pub result: CompatibilityResult,
}

impl ReportFile {
    pub fn new(result: CompatibilityResult, generated_for_year: i32) -> Self {
        Self {
            tool: TOOL_NAME.to_string(),
            generated_for_year,
            result,
        }
    }
}

/// Write a report JSON file.
pub fn write_result_json(path: &Path, result: &CompatibilityResult, current_year: i32) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create report JSON '{}': {e}", path.display())))?;

    let report = ReportFile::new(result.clone(), current_year);
    serde_json::to_writer_pretty(file, &report)
        .map_err(|e| AppError::input(format!("Failed to write report JSON: {e}")))?;

    info!(path = %path.display(), score = result.score, "wrote report JSON");
    Ok(())
}

/// Read a report JSON file.
pub fn read_result_json(path: &Path) -> Result<ReportFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open report JSON '{}': {e}", path.display())))?;
    let report: ReportFile = serde_json::from_reader(file)
        .map_err(|e| AppError::input(format!("Invalid report JSON: {e}")))?;

    info!(path = %path.display(), tool = %report.tool, "read report JSON");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::app::pipeline::evaluate;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("lovematch_{}_{name}.json", std::process::id()))
    }

    #[test]
    fn write_then_read_preserves_result() {
        let a = NaiveDate::from_ymd_opt(1978, 4, 2).unwrap();
        let b = NaiveDate::from_ymd_opt(1981, 9, 30).unwrap();
        let result = evaluate(a, b, 2025);

        let path = temp_path("roundtrip");
        write_result_json(&path, &result, 2025).unwrap();
        let report = read_result_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(report.tool, TOOL_NAME);
        assert_eq!(report.generated_for_year, 2025);
        assert_eq!(report.result, result);
    }

    #[test]
    fn json_uses_readable_labels() {
        let a = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(1992, 1, 1).unwrap();
        let json = serde_json::to_value(ReportFile::new(evaluate(a, b, 2024), 2024)).unwrap();

        assert_eq!(json["generated_for_year"], 2024);
        assert!(json.get("current_year").is_none());
        assert_eq!(json["result"]["partner_a"]["pillar"], "GengWu");
        assert_eq!(json["result"]["partner_a"]["sign"], "Horse");
        assert_eq!(json["result"]["relations"][0], "ordinary");
        assert_eq!(json["result"]["element_relation"]["kind"], "generates");
        assert_eq!(json["result"]["commentary"], "good");
    }

    #[test]
    fn missing_file_is_input_error() {
        let err = read_result_json(&temp_path("does_not_exist")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn malformed_file_is_input_error() {
        let path = temp_path("malformed");
        std::fs::write(&path, "{ not json").unwrap();
        let err = read_result_json(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert!(err.message().starts_with("Invalid report JSON"));
    }
}
