use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    // Generative search API errors
    #[error("Gemini API error: {status} {reason}")]
    GeminiStatus { status: u16, reason: String },

    #[error("No response from Gemini")]
    GeminiNoResponse,

    #[error("No text content in Gemini response")]
    GeminiNoText,

    // Remote table errors
    #[error("Supabase error ({status}): {message}")]
    Storage { status: u16, message: String },

    #[error("Supabase insert into {table} returned no rows")]
    StorageEmptyInsert { table: String },

    #[error("Missing required environment variables: {}", .names.join(", "))]
    MissingEnv { names: Vec<String> },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date/time parsing error: {0}")]
    DateTimeParse(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date/time parsing error with context
    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a missing environment variables error
    pub fn missing_env<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingEnv {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a Gemini status error from a non-success HTTP status
    pub fn gemini_status(status: u16, reason: impl Into<String>) -> Self {
        Self::GeminiStatus {
            status,
            reason: reason.into(),
        }
    }

    /// Create a storage error carrying the remote's message
    pub fn storage(status: u16, message: impl Into<String>) -> Self {
        Self::Storage {
            status,
            message: message.into(),
        }
    }

    /// Create an empty insert error for a table
    pub fn storage_empty_insert(table: impl Into<String>) -> Self {
        Self::StorageEmptyInsert {
            table: table.into(),
        }
    }

    /// True when the remote rejected a request because the table has not been created yet.
    pub fn is_missing_table(&self) -> bool {
        match self {
            AppError::Storage { message, .. } => {
                message.contains("does not exist") || message.contains("Could not find the table")
            }
            _ => false,
        }
    }
}

/// Process exit code for a finished run: 0 when it succeeded or was skipped, 1 on any error.
pub fn exit_code<T>(result: &Result<T, AppError>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}
