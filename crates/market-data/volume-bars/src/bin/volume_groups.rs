//! Volume Groups Tool - Label a trade volume series with volume bars
//!
//! Reads volumes from a file or stdin (whitespace or comma separated) and
//! prints one bar label per input value, or per-bar summaries as JSON.

use anyhow::{Context, Result, bail};
use clap::{Arg, ArgAction, Command};
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use volume_bars::{GrouperConfig, ValidationMode, VolumeGrouper, summarize_groups};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "volume_bars=info,volume_groups=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let matches = Command::new("volume-groups")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Label trade volumes with volume bar numbers")
        .arg(
            Arg::new("threshold")
                .short('t')
                .long("threshold")
                .value_name("VOLUME")
                .help("Cumulative volume that closes a bar")
                .allow_hyphen_values(true)
                .value_parser(clap::value_parser!(i64)),
        )
        .arg(
            Arg::new("mode")
                .short('m')
                .long("mode")
                .value_name("MODE")
                .help("Input validation: strict or mechanical")
                .value_parser(["strict", "mechanical"]),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("JSON config file; flags override its values"),
        )
        .arg(
            Arg::new("summary")
                .short('s')
                .long("summary")
                .help("Print per-bar summaries as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("input")
                .value_name("INPUT")
                .help("Volume file (reads stdin when omitted)"),
        )
        .get_matches();

    let file_config = match matches.get_one::<String>("config") {
        Some(path) => Some(
            GrouperConfig::read_file(Path::new(path))
                .with_context(|| format!("Failed to load config from {path}"))?,
        ),
        None => None,
    };
    let mode = matches
        .get_one::<String>("mode")
        .map(|mode| mode.parse::<ValidationMode>())
        .transpose()?;
    let config = resolve_config(
        file_config,
        matches.get_one::<i64>("threshold").copied(),
        mode,
    )?;

    let raw = match matches.get_one::<String>("input") {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read volumes from {path}"))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read volumes from stdin")?;
            buf
        }
    };
    let volumes = parse_volumes(&raw)?;

    let labels = VolumeGrouper::with_config(config).group(&volumes)?;
    info!(
        "Labelled {} volumes into {} bars",
        volumes.len(),
        labels.last().copied().unwrap_or(0)
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_output(&mut out, &volumes, &labels, matches.get_flag("summary"))?;
    out.flush()?;

    Ok(())
}

/// Merge a config file with command-line overrides and validate the result.
///
/// Flags win over file values; validation runs once on the merged config.
fn resolve_config(
    file: Option<GrouperConfig>,
    threshold: Option<i64>,
    mode: Option<ValidationMode>,
) -> Result<GrouperConfig> {
    if file.is_none() && threshold.is_none() {
        bail!("either --threshold or --config is required");
    }

    let mut config = file.unwrap_or_default();
    if let Some(threshold) = threshold {
        config.threshold = threshold;
    }
    if let Some(mode) = mode {
        config.mode = mode;
    }
    config.validate()?;
    Ok(config)
}

/// Write one label per line, or per-bar summaries as pretty JSON
fn write_output<W: Write>(out: &mut W, volumes: &[f64], labels: &[u32], summary: bool) -> Result<()> {
    if summary {
        let summaries = summarize_groups(volumes, labels)?;
        serde_json::to_writer_pretty(&mut *out, &summaries)?;
        writeln!(out)?;
    } else {
        for label in labels {
            writeln!(out, "{label}")?;
        }
    }
    Ok(())
}

/// Split on whitespace and commas and parse each token as a volume
fn parse_volumes(raw: &str) -> Result<Vec<f64>> {
    raw.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(index, token)| {
            token
                .parse::<f64>()
                .with_context(|| format!("Invalid volume '{token}' at position {index}"))
        })
        .collect()
}
