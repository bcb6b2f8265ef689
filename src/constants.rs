//! Application-wide constants and configuration values
//!
//! This module centralizes the fixed numbers and names the pipeline relies on
//! so the fetch, validation and storage steps agree on them.

/// Environment variable names
pub mod env {
    /// API key for the generative search provider
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";

    /// Base URL of the Supabase project, e.g. `https://xyz.supabase.co`
    pub const SUPABASE_URL: &str = "SUPABASE_URL";

    /// Public (anon) key of the Supabase project
    pub const SUPABASE_ANON_KEY: &str = "SUPABASE_ANON_KEY";

    /// Overrides the model used for generation
    pub const GEMINI_MODEL: &str = "GEMINI_MODEL";

    /// Overrides the generative API base URL
    pub const GEMINI_API_BASE: &str = "GEMINI_API_BASE";

    /// Overrides the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "TENNIS_SCORES_HTTP_TIMEOUT";

    /// Overrides the log file path
    pub const LOG_FILE: &str = "TENNIS_SCORES_LOG_FILE";

    /// Overrides the settings file location
    pub const CONFIG_PATH: &str = "TENNIS_SCORES_CONFIG";
}

/// Generative search API defaults
pub mod gemini {
    pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

    pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

    /// Replacement text for the API key whenever a request URL is logged
    pub const API_KEY_MASK: &str = "***API_KEY***";
}

/// Snapshot content rules
pub mod content {
    /// Prefix that opens a tournament block in the model's output
    pub const SECTION_MARKER: &str = "## ";

    /// Minimum number of characters for a snapshot worth storing
    pub const MIN_CONTENT_CHARS: usize = 100;

    /// Number of characters of raw model output echoed to the log
    pub const LOG_PREVIEW_CHARS: usize = 500;
}

/// Remote table names and retention
pub mod storage {
    pub const SNAPSHOT_TABLE: &str = "score_snapshots";

    pub const PLAYERS_TABLE: &str = "players";

    pub const MATCHES_TABLE: &str = "matches";

    /// Snapshots older than this many days are deleted after each insert
    pub const RETENTION_DAYS: i64 = 7;

    /// Number of rows shown by the check command
    pub const CHECK_LIMIT: usize = 5;

    /// Characters of content shown per row by the check command
    pub const CHECK_PREVIEW_CHARS: usize = 100;
}
