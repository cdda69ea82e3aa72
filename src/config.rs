//! Environment-driven defaults.
//!
//! Values are read from the process environment after loading an optional
//! `.env` file:
//!
//! - `LOVEMATCH_CURRENT_YEAR`: year the wedding-year window starts at
//!   (default: the local calendar year)
//! - `LOVEMATCH_DEFAULT_A` / `LOVEMATCH_DEFAULT_B`: initial form dates
//!   (`YYYY-MM-DD`, default 1990-01-01 / 1992-01-01)
//!
//! CLI flags take precedence over anything set here.

use chrono::{Datelike, Local, NaiveDate};

use crate::error::AppError;

pub const ENV_CURRENT_YEAR: &str = "LOVEMATCH_CURRENT_YEAR";
pub const ENV_DEFAULT_A: &str = "LOVEMATCH_DEFAULT_A";
pub const ENV_DEFAULT_B: &str = "LOVEMATCH_DEFAULT_B";

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub current_year: i32,
    pub default_a: NaiveDate,
    pub default_b: NaiveDate,
}

/// Values already supplied on the command line.
///
/// A field that is set here is used as-is and its environment variable is
/// never read, so a malformed variable cannot fail a command that overrides it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    pub current_year: Option<i32>,
    pub default_a: Option<NaiveDate>,
    pub default_b: Option<NaiveDate>,
}

impl Settings {
    /// Load settings from `.env` + the process environment.
    pub fn from_env(overrides: Overrides) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(env_lookup, overrides)
    }

    /// Load settings through an arbitrary key lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, overrides: Overrides) -> Result<Self, AppError> {
        let current_year = resolve_current_year(&lookup, overrides.current_year)?;
        let default_a = resolve_date(&lookup, ENV_DEFAULT_A, overrides.default_a, 1990)?;
        let default_b = resolve_date(&lookup, ENV_DEFAULT_B, overrides.default_b, 1992)?;

        Ok(Self {
            current_year,
            default_a,
            default_b,
        })
    }
}

/// Resolve only the wedding-window year: the flag, then `.env` + environment.
///
/// Commands that never show the form use this so the default-date variables
/// stay unread.
pub fn current_year_from_env(flag: Option<i32>) -> Result<i32, AppError> {
    if let Some(year) = flag {
        return Ok(year);
    }
    dotenvy::dotenv().ok();
    resolve_current_year(&env_lookup, None)
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn resolve_current_year(lookup: &impl Fn(&str) -> Option<String>, flag: Option<i32>) -> Result<i32, AppError> {
    if let Some(year) = flag {
        return Ok(year);
    }
    match non_empty(lookup(ENV_CURRENT_YEAR)) {
        Some(raw) => raw
            .parse::<i32>()
            .map_err(|e| AppError::input(format!("Invalid {ENV_CURRENT_YEAR} '{raw}': {e}"))),
        None => Ok(Local::now().year()),
    }
}

fn resolve_date(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &str,
    flag: Option<NaiveDate>,
    fallback_year: i32,
) -> Result<NaiveDate, AppError> {
    if let Some(date) = flag {
        return Ok(date);
    }
    match non_empty(lookup(var)) {
        Some(raw) => parse_date(&raw).map_err(|e| prefix(var, e)),
        None => Ok(fallback_date(fallback_year)),
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|e| AppError::input(format!("Invalid date '{trimmed}' (expected YYYY-MM-DD): {e}")))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).map(|v| v.trim().to_string())
}

fn prefix(var: &str, err: AppError) -> AppError {
    AppError::input(format!("{var}: {err}"))
}

fn fallback_date(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let settings = Settings::from_lookup(lookup(&[]), Overrides::default()).unwrap();
        assert_eq!(settings.current_year, Local::now().year());
        assert_eq!(settings.default_a, NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());
        assert_eq!(settings.default_b, NaiveDate::from_ymd_opt(1992, 1, 1).unwrap());
    }

    #[test]
    fn overrides_are_parsed() {
        let env = lookup(&[
            (ENV_CURRENT_YEAR, " 2024 "),
            (ENV_DEFAULT_A, "1985-07-12"),
            (ENV_DEFAULT_B, ""),
        ]);
        let settings = Settings::from_lookup(env, Overrides::default()).unwrap();
        assert_eq!(settings.current_year, 2024);
        assert_eq!(settings.default_a, NaiveDate::from_ymd_opt(1985, 7, 12).unwrap());
        assert_eq!(settings.default_b, NaiveDate::from_ymd_opt(1992, 1, 1).unwrap());
    }

    #[test]
    fn bad_values_name_the_variable() {
        let err = Settings::from_lookup(lookup(&[(ENV_CURRENT_YEAR, "soon")]), Overrides::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().contains(ENV_CURRENT_YEAR));

        let err = Settings::from_lookup(lookup(&[(ENV_DEFAULT_B, "1992-13-01")]), Overrides::default()).unwrap_err();
        assert!(err.message().contains(ENV_DEFAULT_B));
    }

    #[test]
    fn flags_win_over_malformed_environment() {
        let env = lookup(&[
            (ENV_CURRENT_YEAR, "soon"),
            (ENV_DEFAULT_A, "bogus"),
            (ENV_DEFAULT_B, "1992-13-01"),
        ]);
        let a = NaiveDate::from_ymd_opt(1984, 3, 5).unwrap();
        let b = NaiveDate::from_ymd_opt(1986, 11, 20).unwrap();
        let settings = Settings::from_lookup(
            env,
            Overrides {
                current_year: Some(2024),
                default_a: Some(a),
                default_b: Some(b),
            },
        )
        .unwrap();
        assert_eq!(settings.current_year, 2024);
        assert_eq!(settings.default_a, a);
        assert_eq!(settings.default_b, b);
    }

    #[test]
    fn only_unflagged_variables_are_validated() {
        let env = lookup(&[(ENV_CURRENT_YEAR, "soon"), (ENV_DEFAULT_A, "1985-07-12")]);
        let overrides = Overrides {
            current_year: Some(2030),
            ..Overrides::default()
        };
        let settings = Settings::from_lookup(&env, overrides).unwrap();
        assert_eq!(settings.current_year, 2030);
        assert_eq!(settings.default_a, NaiveDate::from_ymd_opt(1985, 7, 12).unwrap());

        let err = Settings::from_lookup(lookup(&[(ENV_DEFAULT_A, "bogus")]), overrides).unwrap_err();
        assert!(err.message().contains(ENV_DEFAULT_A));
    }

    #[test]
    fn year_flag_short_circuits_environment() {
        assert_eq!(current_year_from_env(Some(1999)).unwrap(), 1999);
        let env = lookup(&[(ENV_CURRENT_YEAR, "soon")]);
        assert_eq!(resolve_current_year(&env, Some(2024)).unwrap(), 2024);
        assert!(resolve_current_year(&env, None).is_err());
    }

    #[test]
    fn parse_date_accepts_padding() {
        assert_eq!(
            parse_date(" 2000-02-29 ").unwrap(),
            NaiveDate::from_ymd_opt(2000, 2, 29).unwrap()
        );
        assert!(parse_date("2001-02-29").is_err());
    }
}
