//! Seafarer day tracker CLI library.
//!
//! This crate provides the command-line front end for the compliance engine
//! in `sed-core`: it loads entries and thresholds and renders the results.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
