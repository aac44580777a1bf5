use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sed_cli::commands::{analyze, period, summary, util};
use sed_cli::{Cli, Commands, Config};
use sed_core::{EntryFilter, SystemClock};

/// Load and validate config.
fn load_config(cli: &Cli) -> Result<Config> {
    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    config
        .thresholds
        .validate()
        .context("invalid thresholds in configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn entries_path(cli: &Cli, config: &Config) -> PathBuf {
    cli.entries
        .clone()
        .unwrap_or_else(|| config.entries_path.clone())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so JSON on stdout stays parseable
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let mut stdout = std::io::stdout().lock();

    match &cli.command {
        Some(Commands::Analyze { start, end, json }) => {
            let config = load_config(&cli)?;
            let entries = util::load_entries(&entries_path(&cli, &config))?;
            analyze::run(
                &mut stdout,
                &entries,
                start.as_deref(),
                end.as_deref(),
                &config.thresholds,
                &SystemClock,
                *json,
            )?;
        }
        Some(Commands::Summary {
            from,
            to,
            category,
            keyword,
            json,
        }) => {
            let config = load_config(&cli)?;
            let entries = util::load_entries(&entries_path(&cli, &config))?;
            let filter = EntryFilter {
                date_start: *from,
                date_end: *to,
                category: *category,
                keyword: keyword.clone(),
            };
            summary::run(&mut stdout, &entries, &filter, *json)?;
        }
        Some(Commands::Period {
            start,
            end,
            min_days,
            json,
        }) => {
            // Period checks need no entries, only the configured minimum
            let config = load_config(&cli)?;
            let min_days = min_days.unwrap_or(config.thresholds.min_claim_days);
            period::run(&mut stdout, start, end, min_days, *json)?;
        }
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
