use crate::cli::{Args, Mode};
use chrono::{Local, NaiveDate, Utc};
use std::path::Path;
use tennis_scores::config::{Config, Settings, SupabaseConfig};
use tennis_scores::constants::storage::CHECK_LIMIT;
use tennis_scores::error::AppError;
use tennis_scores::export::{format_duplicate_report, run_export};
use tennis_scores::http_client::create_http_client;
use tennis_scores::scores::{PipelineOutcome, RunOptions, run_fetch_pipeline};
use tennis_scores::seed::{CREATE_TABLE_SQL, describe_snapshot, seed_sample};
use tennis_scores::storage::{SupabaseClient, SweepReport};
use tracing::{error, info, warn};

/// Parses the `--date` argument, defaulting to today's local date.
pub fn resolve_date(date: Option<&str>) -> Result<NaiveDate, AppError> {
    match date {
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| {
            AppError::datetime_parse_error(format!(
                "Invalid date '{value}', expected YYYY-MM-DD: {e}"
            ))
        }),
        None => Ok(Local::now().date_naive()),
    }
}

fn supabase_store(settings: &Settings) -> Result<SupabaseClient, AppError> {
    let config = SupabaseConfig::from_env()?;
    let client = create_http_client(settings.http_timeout_seconds)?;
    Ok(SupabaseClient::new(client, config))
}

/// Prints the table definition so the user can run it in the Supabase SQL editor.
fn print_table_setup() {
    println!("Run this in the Supabase SQL editor to create the table:\n");
    println!("{CREATE_TABLE_SQL}");
}

/// Runs the selected mode.
pub async fn dispatch(args: &Args, settings: Settings) -> Result<(), AppError> {
    match args.mode() {
        Mode::Fetch => handle_fetch_command(args, settings).await,
        Mode::Export => handle_export_command(&args.output_dir, &settings).await,
        Mode::Check => handle_check_command(&settings).await,
        Mode::Seed => handle_seed_command(&settings).await,
        Mode::Sql => {
            handle_sql_command();
            Ok(())
        }
    }
}

/// Handles the default fetch run.
///
/// Skipped content counts as success; only provider and insert failures are errors.
pub async fn handle_fetch_command(args: &Args, settings: Settings) -> Result<(), AppError> {
    let date = resolve_date(args.date.as_deref())?;
    let client = create_http_client(settings.http_timeout_seconds)?;
    let config = Config::from_env(settings)?;

    let options = RunOptions {
        date,
        now: Utc::now(),
        dry_run: args.dry_run,
    };

    match run_fetch_pipeline(&client, &config, &options).await? {
        PipelineOutcome::Inserted { snapshot, sweep } => {
            if let SweepReport::Failed { reason } = sweep {
                warn!("Snapshot {} saved but cleanup failed: {reason}", snapshot.id);
            }
            info!("Done!");
        }
        PipelineOutcome::Skipped { rejection, .. } => {
            info!("Nothing saved: {rejection}");
        }
        PipelineOutcome::Previewed { content } => {
            println!("{content}");
        }
    }

    Ok(())
}

/// Handles `--export`: writes the backup files and prints the duplicate report.
pub async fn handle_export_command(out_dir: &Path, settings: &Settings) -> Result<(), AppError> {
    let store = supabase_store(settings)?;

    println!("📦 Exporting players and matches...");
    let summary = run_export(&store, out_dir, Utc::now()).await?;

    for path in &summary.written {
        println!("✅ {}", path.display());
    }
    println!(
        "\n{} players, {} matches\n",
        summary.player_count, summary.match_count
    );
    for line in format_duplicate_report(&summary.duplicates) {
        println!("{line}");
    }

    Ok(())
}

/// Handles `--check`: lists the most recent snapshots, seeding the table when it is empty.
pub async fn handle_check_command(settings: &Settings) -> Result<(), AppError> {
    let store = supabase_store(settings)?;
    let now = Utc::now();

    let snapshots = match store.list_recent_snapshots(CHECK_LIMIT).await {
        Ok(snapshots) => snapshots,
        Err(e) if e.is_missing_table() => {
            error!("The score_snapshots table does not exist");
            print_table_setup();
            return Err(e);
        }
        Err(e) => return Err(e),
    };

    if snapshots.is_empty() {
        println!("Table is empty. Inserting sample data...");
        let snapshot = seed_sample(&store, now).await?;
        println!("✅ Sample data inserted with ID {}", snapshot.id);
        return Ok(());
    }

    println!("Found {} recent snapshots:\n", snapshots.len());
    for (index, snapshot) in snapshots.iter().enumerate() {
        for line in describe_snapshot(index, snapshot, now) {
            println!("{line}");
        }
        println!();
    }

    Ok(())
}

/// Handles `--seed`: inserts the sample snapshot.
pub async fn handle_seed_command(settings: &Settings) -> Result<(), AppError> {
    let store = supabase_store(settings)?;

    match seed_sample(&store, Utc::now()).await {
        Ok(snapshot) => {
            println!("✅ Sample data inserted with ID {}", snapshot.id);
            Ok(())
        }
        Err(e) if e.is_missing_table() => {
            error!("The score_snapshots table does not exist");
            print_table_setup();
            Err(e)
        }
        Err(e) => Err(e),
    }
}

/// Handles `--sql`.
pub fn handle_sql_command() {
    println!("{CREATE_TABLE_SQL}");
}
