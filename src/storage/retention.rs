//! Seven-day retention of score snapshots

use chrono::{DateTime, Duration, Utc};
use tracing::{info, warn};

use super::supabase::SupabaseClient;
use crate::constants::storage::RETENTION_DAYS;

/// What happened to the retention sweep that follows an insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepReport {
    Completed { deleted: usize },
    Failed { reason: String },
}

/// Oldest `fetched_at` that survives a sweep run at `now`.
pub fn retention_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(RETENTION_DAYS)
}

/// True when a snapshot fetched at `fetched_at` is removed by a sweep run at `now`.
pub fn is_expired(fetched_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    fetched_at < retention_cutoff(now)
}

/// Deletes snapshots older than the retention window. Never fails the run.
pub async fn sweep_expired(store: &SupabaseClient, now: DateTime<Utc>) -> SweepReport {
    match store.delete_snapshots_before(retention_cutoff(now)).await {
        Ok(deleted) => {
            info!("Cleaned up {deleted} records older than {RETENTION_DAYS} days");
            SweepReport::Completed { deleted }
        }
        Err(e) => {
            warn!("Cleanup warning: {e}");
            SweepReport::Failed {
                reason: e.to_string(),
            }
        }
    }
}
