//! One fetch run: prompt, fetch, normalize, validate, store, sweep

use chrono::{DateTime, NaiveDate, Utc};
use reqwest::Client;
use tracing::{info, instrument, warn};

use super::calendar::active_tournaments;
use super::content::{Rejection, normalize_content, validate_content};
use super::gemini::fetch_completion;
use super::prompt::build_prompt;
use crate::config::Config;
use crate::constants::content::LOG_PREVIEW_CHARS;
use crate::error::AppError;
use crate::storage::{ScoreSnapshot, SupabaseClient, SweepReport, sweep_expired};

/// Inputs that vary per run.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Calendar date the prompt is built for.
    pub date: NaiveDate,
    /// Clock used for `fetched_at` and the retention cutoff.
    pub now: DateTime<Utc>,
    /// Stop after validation without writing anything.
    pub dry_run: bool,
}

/// How a run ended when nothing failed. Hard failures are the `Err` side of the result.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    /// Content stored; the sweep result is informational only.
    Inserted {
        snapshot: ScoreSnapshot,
        sweep: SweepReport,
    },
    /// The model answered but there was nothing worth storing.
    Skipped {
        rejection: Rejection,
        raw_chars: usize,
        clean_chars: usize,
    },
    /// Dry run: content passed validation and was not stored.
    Previewed { content: String },
}

/// Normalizes raw model output and checks it is worth storing.
pub fn prepare_content(raw: &str) -> Result<String, Rejection> {
    let content = normalize_content(raw);
    validate_content(&content)?;
    Ok(content)
}

/// Runs the whole pipeline once.
///
/// Each stage is attempted exactly once. A provider or insert failure aborts
/// the run before anything else is written; a sweep failure is only reported.
#[instrument(skip_all, fields(date = %options.date, dry_run = options.dry_run))]
pub async fn run_fetch_pipeline(
    client: &Client,
    config: &Config,
    options: &RunOptions,
) -> Result<PipelineOutcome, AppError> {
    info!("Time: {}", options.now.to_rfc3339());
    info!("Active tournaments: {}", active_tournaments(options.date));

    let prompt = build_prompt(options.date);
    info!("Querying Gemini...");
    let raw = fetch_completion(client, &config.gemini, &prompt).await?;

    let preview: String = raw.chars().take(LOG_PREVIEW_CHARS).collect();
    info!("Got response from Gemini:\n---\n{preview}...\n---");

    let content = match prepare_content(&raw) {
        Ok(content) => content,
        Err(rejection) => {
            let raw_chars = raw.chars().count();
            let clean_chars = normalize_content(&raw).chars().count();
            warn!("No valid tennis scores in response ({rejection}). Skipping save.");
            info!("Raw content length: {raw_chars}, clean content length: {clean_chars}");
            return Ok(PipelineOutcome::Skipped {
                rejection,
                raw_chars,
                clean_chars,
            });
        }
    };

    if options.dry_run {
        info!("Dry run: not saving {} characters", content.chars().count());
        return Ok(PipelineOutcome::Previewed { content });
    }

    let store = SupabaseClient::new(client.clone(), config.supabase.clone());

    info!("Saving to Supabase...");
    let snapshot = store.insert_snapshot(&content, options.now).await?;
    info!("Saved! Record ID: {}", snapshot.id);

    let sweep = sweep_expired(&store, options.now).await;

    Ok(PipelineOutcome::Inserted { snapshot, sweep })
}
