pub mod models;
pub mod retention;
pub mod supabase;

pub use models::{NewScoreSnapshot, RowId, ScoreSnapshot};
pub use retention::{SweepReport, is_expired, retention_cutoff, sweep_expired};
pub use supabase::{SupabaseClient, build_table_url, format_filter_timestamp};
