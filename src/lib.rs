//! Tennis score snapshots
//!
//! Fetches today's professional tennis results from a search-grounded generative
//! model, checks the answer actually contains scores, and stores it as a snapshot
//! row in a Supabase table, keeping only the last seven days.
//!
//! # Examples
//!
//! ```rust,no_run
//! use chrono::{Local, Utc};
//! use tennis_scores::config::{Config, Settings};
//! use tennis_scores::error::AppError;
//! use tennis_scores::http_client::create_http_client;
//! use tennis_scores::scores::{PipelineOutcome, RunOptions, run_fetch_pipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let settings = Settings::load().await?;
//!     let client = create_http_client(settings.http_timeout_seconds)?;
//!     let config = Config::from_env(settings)?;
//!
//!     let options = RunOptions {
//!         date: Local::now().date_naive(),
//!         now: Utc::now(),
//!         dry_run: true,
//!     };
//!
//!     if let PipelineOutcome::Previewed { content } =
//!         run_fetch_pipeline(&client, &config, &options).await?
//!     {
//!         println!("{content}");
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod http_client;
pub mod scores;
pub mod seed;
pub mod storage;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::{Config, Settings};
pub use error::AppError;
pub use scores::{PipelineOutcome, RunOptions, run_fetch_pipeline};
pub use storage::{ScoreSnapshot, SupabaseClient};
