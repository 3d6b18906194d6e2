//! CLI Tooling
//!
//! Subcommands for every roster operation. Each command resolves to a
//! library call against a single hierarchy root and returns its rendered
//! output as a string.

use crate::config;
use crate::error::Result;
use crate::ops::Roster;
use crate::stats;
use crate::types::{NewPlayer, PlayerPatch};
use clap::{Parser, Subcommand};
use comfy_table::Table;
use serde_json::json;
use std::path::PathBuf;

/// Roster CLI - hierarchical flat-file player storage
#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Manage a conference/team/players.csv hierarchy")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Hierarchy root directory
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a player to a conference/team
    Add {
        #[arg(long)]
        conference: String,
        #[arg(long)]
        team: String,
        #[arg(long)]
        name: String,
        /// Position (base/escolta/alero/ala-pivot/pivot)
        #[arg(long)]
        position: String,
        #[arg(long)]
        points: String,
        #[arg(long)]
        rebounds: String,
        #[arg(long)]
        assists: String,
    },
    /// List every player in the hierarchy (recursive)
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Update fields of an existing player by id
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        position: Option<String>,
        #[arg(long)]
        points: Option<String>,
        #[arg(long)]
        rebounds: Option<String>,
        #[arg(long)]
        assists: Option<String>,
    },
    /// Delete a player by id
    Delete { id: String },
    /// Show aggregate statistics over the whole hierarchy
    Stats {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

/// Execution context holding the resolved roster handle.
pub struct CliContext {
    roster: Roster,
}

impl CliContext {
    pub fn new(base_dir: Option<PathBuf>, config_file: Option<PathBuf>) -> Result<Self> {
        let base_dir = config::resolve_base_dir(base_dir, config_file.as_deref())?;
        Ok(CliContext {
            roster: Roster::new(base_dir),
        })
    }

    pub fn execute(&self, command: &Commands) -> Result<String> {
        match command {
            Commands::Add {
                conference,
                team,
                name,
                position,
                points,
                rebounds,
                assists,
            } => {
                // Menu-era input conventions: conferences lowercase, team
                // segments lowercase with spaces as underscores.
                let conference = conference.trim().to_lowercase();
                let team = team.trim().to_lowercase().replace(' ', "_");
                let player = self.roster.create(
                    &conference,
                    &team,
                    &NewPlayer {
                        name: name.clone(),
                        position: position.clone(),
                        points: points.clone(),
                        rebounds: rebounds.clone(),
                        assists: assists.clone(),
                    },
                )?;
                Ok(format!("Added {} ({}) with id {}", player.name, player.position, player.id))
            }
            Commands::List { format } => self.list(format),
            Commands::Update {
                id,
                name,
                position,
                points,
                rebounds,
                assists,
            } => {
                let patch = PlayerPatch {
                    name: name.clone(),
                    position: position.clone(),
                    points: points.clone(),
                    rebounds: rebounds.clone(),
                    assists: assists.clone(),
                };
                let row = self.roster.update(id, &patch)?;
                Ok(format!(
                    "Updated {}: {} ({}) - {} pts, {} reb, {} ast",
                    row.id, row.name, row.position, row.points, row.rebounds, row.assists
                ))
            }
            Commands::Delete { id } => {
                if self.roster.delete(id)? {
                    Ok(format!("Deleted {}", id))
                } else {
                    Ok(format!("No player with id {}", id))
                }
            }
            Commands::Stats { format } => self.stats(format),
        }
    }

    fn list(&self, format: &str) -> Result<String> {
        let rows = self.roster.collect_all()?;
        if format == "json" {
            let items: Vec<_> = rows
                .iter()
                .map(|t| {
                    json!({
                        "id": t.row.id,
                        "name": t.row.name,
                        "position": t.row.position,
                        "points": t.row.points,
                        "rebounds": t.row.rebounds,
                        "assists": t.row.assists,
                        "origin": t.origin.display().to_string(),
                    })
                })
                .collect();
            return Ok(serde_json::to_string_pretty(&items).unwrap_or_default());
        }
        if rows.is_empty() {
            return Ok("No players found.".to_string());
        }
        let mut table = Table::new();
        table.set_header(["id", "name", "position", "points", "rebounds", "assists"]);
        for t in &rows {
            table.add_row([
                t.row.id.as_str(),
                t.row.name.as_str(),
                t.row.position.as_str(),
                t.row.points.as_str(),
                t.row.rebounds.as_str(),
                t.row.assists.as_str(),
            ]);
        }
        Ok(table.to_string())
    }

    fn stats(&self, format: &str) -> Result<String> {
        let rows = self.roster.collect_all()?;
        let summary = stats::summarize(&rows);
        if format == "json" {
            return Ok(serde_json::to_string_pretty(&summary).unwrap_or_default());
        }
        match summary.averages {
            None => Ok("No players loaded.".to_string()),
            Some(avg) => Ok(format!(
                "players: {}\navg points: {}\navg rebounds: {}\navg assists: {}",
                summary.count, avg.points, avg.rebounds, avg.assists
            )),
        }
    }
}
