//! Normalization and quality checks for model output

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::constants::content::{MIN_CONTENT_CHARS, SECTION_MARKER};

/// Matches a set score such as `6-4`.
static SCORE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+-\d+").expect("score pattern is a valid regex"));

const DEFEATED_TOKEN: &str = " def. ";
const VERSUS_TOKEN: &str = " vs ";

/// Why a completion was not stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    MissingSectionMarker,
    NoMatchResults,
    TooShort { chars: usize, min: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Empty => write!(f, "content is empty"),
            Rejection::MissingSectionMarker => {
                write!(f, "no tournament heading ('{}') found", SECTION_MARKER.trim_end())
            }
            Rejection::NoMatchResults => write!(f, "no match results found"),
            Rejection::TooShort { chars, min } => {
                write!(f, "content too short ({chars} < {min} characters)")
            }
        }
    }
}

/// Drops any preamble before the first tournament heading and trims the result.
///
/// Idempotent: normalizing already-normalized text returns it unchanged.
pub fn normalize_content(raw: &str) -> String {
    let content = match raw.find(SECTION_MARKER) {
        Some(offset) if offset > 0 => &raw[offset..],
        _ => raw,
    };
    content.trim().to_string()
}

/// True when the text holds at least one recognizable match result.
pub fn has_match_result(content: &str) -> bool {
    content.contains(DEFEATED_TOKEN)
        || content.contains(VERSUS_TOKEN)
        || SCORE_PATTERN.is_match(content)
}

/// Checks normalized content before it is stored.
pub fn validate_content(content: &str) -> Result<(), Rejection> {
    if content.trim().is_empty() {
        return Err(Rejection::Empty);
    }

    if !content.contains(SECTION_MARKER) {
        return Err(Rejection::MissingSectionMarker);
    }

    if !has_match_result(content) {
        return Err(Rejection::NoMatchResults);
    }

    let chars = content.chars().count();
    if chars < MIN_CONTENT_CHARS {
        return Err(Rejection::TooShort {
            chars,
            min: MIN_CONTENT_CHARS,
        });
    }

    Ok(())
}
