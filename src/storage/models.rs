use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One stored block of scraped results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreSnapshot {
    pub id: i64,
    pub content: String,
    pub fetched_at: DateTime<Utc>,
}

/// Insert payload; `id` is assigned by the database.
#[derive(Debug, Clone, Serialize)]
pub struct NewScoreSnapshot<'a> {
    pub content: &'a str,
    pub fetched_at: DateTime<Utc>,
}

/// Primary or foreign key as returned by PostgREST: serial integers or uuid/text keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum RowId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Int(id) => write!(f, "{id}"),
            RowId::Text(id) => f.write_str(id),
        }
    }
}

/// Error body PostgREST sends with non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct PostgrestError {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl PostgrestError {
    /// The diagnostic fields PostgREST sent besides the message, e.g.
    /// `code 42501; hint: Grant INSERT to anon`. `None` when there are none.
    pub fn context(&self) -> Option<String> {
        let parts: Vec<String> = [
            self.code.as_deref().map(|code| format!("code {code}")),
            self.details.as_deref().map(|details| format!("details: {details}")),
            self.hint.as_deref().map(|hint| format!("hint: {hint}")),
        ]
        .into_iter()
        .flatten()
        .collect();

        (!parts.is_empty()).then(|| parts.join("; "))
    }
}
