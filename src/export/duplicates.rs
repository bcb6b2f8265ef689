//! Report-only detection of matches recorded twice

use super::models::{MatchRecord, PlayerNames};
use crate::storage::RowId;

/// One side of a duplicate pair, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSummary {
    pub id: RowId,
    pub players: String,
    pub played_at: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DuplicatePair {
    pub first: MatchSummary,
    pub second: MatchSummary,
}

fn summarize(record: &MatchRecord, names: &PlayerNames) -> MatchSummary {
    MatchSummary {
        id: record.id.clone(),
        players: names.pairing(record),
        played_at: record.created_at.clone().unwrap_or_default(),
    }
}

/// Every pair of matches between the same two players, in input order.
///
/// Nothing is removed; deciding which entry to keep is left to the operator.
pub fn find_duplicate_matches(matches: &[MatchRecord], names: &PlayerNames) -> Vec<DuplicatePair> {
    let mut duplicates = Vec::new();
    for (i, first) in matches.iter().enumerate() {
        for second in &matches[i + 1..] {
            if first.same_pairing(second) {
                duplicates.push(DuplicatePair {
                    first: summarize(first, names),
                    second: summarize(second, names),
                });
            }
        }
    }
    duplicates
}

/// Human-readable report lines for the export command.
pub fn format_duplicate_report(duplicates: &[DuplicatePair]) -> Vec<String> {
    if duplicates.is_empty() {
        return vec!["✅ No duplicate matches found".to_string()];
    }

    let mut lines = vec!["⚠️  Duplicate matches found:".to_string()];
    for pair in duplicates {
        for side in [&pair.first, &pair.second] {
            lines.push(format!(
                "   ID {}: {} ({})",
                side.id, side.players, side.played_at
            ));
        }
        lines.push(String::new());
    }
    lines.push("💡 Usually the entry with the larger ID (the newer one) is the one to delete".to_string());
    lines
}
