//! Backup export of the `players` and `matches` tables

pub mod csv;
pub mod duplicates;
pub mod models;

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use crate::constants::storage::{MATCHES_TABLE, PLAYERS_TABLE};
use crate::error::AppError;
use crate::storage::SupabaseClient;

pub use duplicates::{DuplicatePair, find_duplicate_matches, format_duplicate_report};
pub use models::{MatchRecord, Player, PlayerNames};

pub const BACKUP_FILE: &str = "backup.json";
pub const PLAYERS_FILE: &str = "players.csv";
pub const MATCHES_FILE: &str = "matches.csv";

/// Full dump written to `backup.json`. Rows are kept exactly as the API returned them.
#[derive(Debug, Serialize)]
pub struct Backup<'a> {
    pub exported_at: DateTime<Utc>,
    pub players: &'a [serde_json::Value],
    pub matches: &'a [serde_json::Value],
}

#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub written: Vec<PathBuf>,
    pub player_count: usize,
    pub match_count: usize,
    pub duplicates: Vec<DuplicatePair>,
}

fn parse_rows<T: serde::de::DeserializeOwned>(rows: &[serde_json::Value]) -> Result<Vec<T>, AppError> {
    rows.iter()
        .map(|row| serde_json::from_value(row.clone()).map_err(AppError::from))
        .collect()
}

async fn write_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf, AppError> {
    let path = dir.join(name);
    fs::write(&path, content).await?;
    info!("Wrote {}", path.display());
    Ok(path)
}

/// Exports both tables into `out_dir` and scans matches for duplicates.
///
/// Both tables are read concurrently. `backup.json` is written from the raw rows
/// before anything is parsed, so it survives rows the CSV models cannot read.
pub async fn run_export(
    store: &SupabaseClient,
    out_dir: &Path,
    now: DateTime<Utc>,
) -> Result<ExportSummary, AppError> {
    let (player_rows, match_rows) = tokio::try_join!(
        store.fetch_all_rows(PLAYERS_TABLE),
        store.fetch_all_rows(MATCHES_TABLE)
    )?;

    if !out_dir.exists() {
        fs::create_dir_all(out_dir).await?;
    }

    let backup = serde_json::to_string_pretty(&Backup {
        exported_at: now,
        players: &player_rows,
        matches: &match_rows,
    })?;
    let mut written = vec![write_file(out_dir, BACKUP_FILE, &backup).await?];

    let players: Vec<Player> = parse_rows(&player_rows)?;
    let matches: Vec<MatchRecord> = parse_rows(&match_rows)?;
    let names = PlayerNames::from_players(&players);

    written.push(write_file(out_dir, PLAYERS_FILE, &csv::players_csv(&players)).await?);
    written.push(write_file(out_dir, MATCHES_FILE, &csv::matches_csv(&matches, &names)).await?);

    Ok(ExportSummary {
        written,
        player_count: players.len(),
        match_count: matches.len(),
        duplicates: find_duplicate_matches(&matches, &names),
    })
}
