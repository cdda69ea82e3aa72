//! `love-match` library crate.
//!
//! The binary (`lovematch`) is a thin wrapper around this library so that:
//!
//! - the derivation and scoring core is testable without spawning processes
//! - the same pipeline can sit behind other front-ends (API endpoint, web form)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod relations;
pub mod report;
pub mod score;
pub mod tables;
pub mod tui;
