//! `pk config` — show or change saved board preferences.

use crate::config;
use crate::output::{self, OutputMode};
use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};
use plank_core::prefs::{GroupBy, SortBy};
use serde::Serialize;
use std::io::Write;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Show the saved preferences as currently resolved
    Get,
    /// Set a preference key (group_by, sort_by, url)
    Set(SetArgs),
    /// Print the config file path
    Path,
}

#[derive(Args, Debug)]
struct SetArgs {
    /// Key to set: group_by, sort_by, url
    key: String,

    /// New value
    value: String,
}

#[derive(Debug, Serialize)]
struct ResolvedPrefs {
    group_by: String,
    sort_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

pub fn run_config(args: &ConfigArgs, output: OutputMode) -> Result<()> {
    match &args.command {
        ConfigCommand::Get => run_get(output),
        ConfigCommand::Set(set) => run_set(set, output),
        ConfigCommand::Path => run_path(output),
    }
}

fn run_get(output: OutputMode) -> Result<()> {
    let config = config::load();
    let prefs = config.preferences();
    let resolved = ResolvedPrefs {
        group_by: prefs.group_by.to_string(),
        sort_by: prefs.sort_by.to_string(),
        url: config.url,
    };

    output::render(output, &resolved, |value, w| {
        writeln!(w, "{:<10} {}", "group_by:", value.group_by)?;
        writeln!(w, "{:<10} {}", "sort_by:", value.sort_by)?;
        if let Some(ref url) = value.url {
            writeln!(w, "{:<10} {url}", "url:")?;
        }
        Ok(())
    })
}

fn run_set(args: &SetArgs, output: OutputMode) -> Result<()> {
    let mut config = config::load();

    // Mode keys are validated strictly here: a typo on the command line
    // should fail loudly, unlike a stale persisted value.
    match args.key.as_str() {
        "group_by" => {
            let mode: GroupBy = args.value.parse()?;
            config.group_by = Some(mode.to_string());
        }
        "sort_by" => {
            let mode: SortBy = args.value.parse()?;
            config.sort_by = Some(mode.to_string());
        }
        "url" => {
            config.url = Some(args.value.clone());
        }
        other => bail!("unknown config key '{other}' (expected group_by, sort_by, or url)"),
    }

    config::save(&config)?;
    output::render_ok(output, &format!("set {}", args.key))
}

fn run_path(output: OutputMode) -> Result<()> {
    let path = config::config_path().context("no user config directory available")?;
    output::render(output, &path.display().to_string(), |value, w| {
        writeln!(w, "{value}")
    })
}
