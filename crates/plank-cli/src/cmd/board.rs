//! `pk board` — fetch the ticket snapshot and render the board.

use crate::config::{self, UserConfig};
use crate::fetch;
use crate::output::{self, CliError, OutputMode};
use anyhow::Result;
use clap::Args;
use plank_core::model::Snapshot;
use plank_core::prefs::{GroupBy, Preferences, SortBy};
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Args, Debug)]
pub struct BoardArgs {
    /// Group columns by: status, user, priority. Saved for later runs.
    #[arg(short, long)]
    pub group_by: Option<GroupBy>,

    /// Sort tickets by: priority, title. Saved for later runs.
    #[arg(short, long)]
    pub sort_by: Option<SortBy>,

    /// Snapshot endpoint override.
    #[arg(long)]
    pub url: Option<String>,

    /// Read the snapshot from a local JSON file instead of the network.
    #[arg(long, conflicts_with = "url")]
    pub input: Option<PathBuf>,
}

/// Resolve the effective preferences: saved values, overridden by any
/// explicit flags.
fn resolve_preferences(args: &BoardArgs, config: &UserConfig) -> Preferences {
    let mut prefs = config.preferences();
    if let Some(group_by) = args.group_by {
        prefs.group_by = group_by;
    }
    if let Some(sort_by) = args.sort_by {
        prefs.sort_by = sort_by;
    }
    prefs
}

pub fn run_board(args: &BoardArgs, output: OutputMode, quiet: bool) -> Result<()> {
    let mut config = config::load();
    let prefs = resolve_preferences(args, &config);

    // Mirror the board UI: every explicit selection becomes the new saved
    // preference. A failed save degrades to a warning; the board still
    // renders.
    if args.group_by.is_some() || args.sort_by.is_some() {
        config.group_by = Some(prefs.group_by.to_string());
        config.sort_by = Some(prefs.sort_by.to_string());
        match config::save(&config) {
            Ok(()) => {
                if !quiet && output.is_pretty() {
                    eprintln!(
                        "saved preferences: group by {}, sort by {}",
                        prefs.group_by, prefs.sort_by
                    );
                }
            }
            Err(err) => warn!("could not persist preferences: {err:#}"),
        }
    }

    let snapshot = match load_snapshot(args, &config) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            output::render_error(
                output,
                &CliError::with_details(
                    format!("{err:#}"),
                    "Check the endpoint URL and network connectivity, or pass --input <file>",
                    "fetch_failed",
                ),
            )?;
            anyhow::bail!("snapshot fetch failed");
        }
    };

    debug!(
        tickets = snapshot.tickets.len(),
        users = snapshot.users.len(),
        "snapshot loaded"
    );

    let columns = plank_core::build_board(&snapshot, prefs);
    output::render_board(&columns, output)
}

fn load_snapshot(args: &BoardArgs, config: &UserConfig) -> Result<Snapshot> {
    if let Some(path) = &args.input {
        return fetch::read_snapshot(path);
    }

    let url = args
        .url
        .as_deref()
        .or_else(|| config.url.as_deref())
        .unwrap_or(fetch::DEFAULT_SNAPSHOT_URL);
    fetch::fetch_snapshot(url)
}
