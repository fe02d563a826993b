//! Subcommand implementations.
//!
//! Each command renders to a `String`; [`run`] decides where it goes.

use crate::cli::{Cli, Command};
use anyhow::{Context, Result};
use drawpad_common::{init_logging, DrawingRecord, LoggingConfig, RankingZone};
use drawpad_config::{Config, ConfigLoader, WebManifest};
use drawpad_ranking::MonthlyBestRanker;
use std::fmt::Write as _;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Loads configuration from `path`, or from the default locations.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => ConfigLoader::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => ConfigLoader::load().context("Failed to load configuration")?,
    };
    Ok(config)
}

/// Ranks a JSON array of drawings.
///
/// Returns the annotated array as pretty JSON, or one `YYYY-MM: names` line
/// per month when `summary` is set.
pub fn rank_json(input: &str, zone: RankingZone, summary: bool) -> Result<String> {
    let drawings: Vec<DrawingRecord> =
        serde_json::from_str(input).context("Input is not a JSON array of drawings")?;
    let ranker = MonthlyBestRanker::new(zone);
    info!(count = drawings.len(), %zone, "ranking drawings");

    if !summary {
        let ranked = ranker.rank(&drawings)?;
        let mut json = serde_json::to_string_pretty(&ranked)?;
        json.push('\n');
        return Ok(json);
    }

    let mut out = String::new();
    for (month, names) in ranker.winners(&drawings)? {
        if names.is_empty() {
            writeln!(out, "{month}: -")?;
        } else {
            writeln!(out, "{month}: {}", names.join(", "))?;
        }
    }
    Ok(out)
}

/// Renders the web-app manifest.
pub fn render_manifest(config: &Config) -> Result<String> {
    let mut json = WebManifest::from(&config.manifest).to_json_pretty()?;
    json.push('\n');
    Ok(json)
}

/// Renders the effective configuration as YAML.
pub fn render_config(config: &Config) -> Result<String> {
    serde_yaml::to_string(config).context("Failed to serialize configuration")
}

fn logging_for(config: &Config, verbose: bool) -> LoggingConfig {
    let logging = config.logging.clone();
    if verbose {
        logging.verbose()
    } else {
        logging
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), "output written");
        }
        None => print!("{text}"),
    }
    Ok(())
}

/// Loads configuration, starts logging and runs the chosen subcommand.
pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    init_logging(&logging_for(&config, cli.verbose))?;
    debug!(?cli.command, "starting");

    match cli.command {
        Command::Rank {
            input,
            timezone,
            output,
            summary,
        } => {
            let zone = match timezone {
                Some(name) => name.parse::<RankingZone>()?,
                None => config.ranking.timezone,
            };
            let text = rank_json(&read_input(&input)?, zone, summary)?;
            write_output(output.as_deref(), &text)
        }
        Command::Manifest { output } => write_output(output.as_deref(), &render_manifest(&config)?),
        Command::Config => write_output(None, &render_config(&config)?),
    }
}
