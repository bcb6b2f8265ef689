//! CSV rendering of players and matches

use serde_json::Value;

use super::models::{MatchRecord, Player, PlayerNames, SetScore};

pub const PLAYERS_HEADER: &str = "ID,Name,Created At";
pub const MATCHES_HEADER: &str = "ID,Player 1,Player 2,Set 1,Set 2,Set 3,Played At";

/// Wraps a field in double quotes, doubling any quotes inside it.
pub fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// A JSON scalar as it should read in a cell: strings unquoted, everything else as JSON.
fn cell(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// `"6-4"` for a complete set score, empty otherwise.
pub fn format_set(set: Option<&SetScore>) -> String {
    match set.and_then(Value::as_array).map(Vec::as_slice) {
        Some([first, second, ..]) if !first.is_null() && !second.is_null() => {
            format!("{}-{}", cell(first), cell(second))
        }
        _ => String::new(),
    }
}

pub fn players_csv(players: &[Player]) -> String {
    let mut csv = String::from(PLAYERS_HEADER);
    csv.push('\n');
    for player in players {
        csv.push_str(&format!(
            "{},{},{}\n",
            player.id,
            quote(player.display_name()),
            player.created_at.as_deref().unwrap_or_default()
        ));
    }
    csv
}

pub fn matches_csv(matches: &[MatchRecord], names: &PlayerNames) -> String {
    let mut csv = String::from(MATCHES_HEADER);
    csv.push('\n');
    for record in matches {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            record.id,
            quote(&names.name_of(record.player1_id.as_ref())),
            quote(&names.name_of(record.player2_id.as_ref())),
            format_set(record.set(0)),
            format_set(record.set(1)),
            format_set(record.set(2)),
            record.created_at.as_deref().unwrap_or_default()
        ));
    }
    csv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::RowId;
    use serde_json::json;

    fn player(id: i64, name: &str) -> Player {
        Player {
            id: RowId::Int(id),
            name: Some(name.to_string()),
            created_at: None,
        }
    }

    #[test]
    fn test_quote_escapes_quotes() {
        assert_eq!(quote("Alex"), "\"Alex\"");
        assert_eq!(quote("Alex \"The Wall\" Doe"), "\"Alex \"\"The Wall\"\" Doe\"");
    }

    #[test]
    fn test_format_set() {
        assert_eq!(format_set(Some(&json!([6, 4]))), "6-4");
        assert_eq!(format_set(Some(&json!([null, null]))), "");
        assert_eq!(format_set(Some(&json!([6, null]))), "");
        assert_eq!(format_set(Some(&json!([6]))), "");
        assert_eq!(format_set(None), "");
    }

    #[test]
    fn test_format_set_renders_unexpected_values() {
        assert_eq!(format_set(Some(&json!([6.5, "4"]))), "6.5-4");
        assert_eq!(format_set(Some(&json!("6-4"))), "");
    }

    #[test]
    fn test_players_csv() {
        let players = vec![
            Player {
                created_at: Some("2026-01-01T00:00:00+00:00".to_string()),
                ..player(1, "Iga")
            },
            Player {
                id: RowId::Int(2),
                name: None,
                created_at: None,
            },
        ];
        assert_eq!(
            players_csv(&players),
            "ID,Name,Created At\n1,\"Iga\",2026-01-01T00:00:00+00:00\n2,\"\",\n"
        );
    }

    #[test]
    fn test_matches_csv_resolves_names_and_sets() {
        let players = vec![player(1, "Iga"), player(2, "Coco")];
        let names = PlayerNames::from_players(&players);
        let matches = vec![MatchRecord {
            id: RowId::Int(7),
            player1_id: Some(RowId::Int(1)),
            player2_id: Some(RowId::Int(2)),
            sets: Some(json!([[6, 3], [4, 6], [null, null]])),
            created_at: Some("2026-01-02".to_string()),
        }];

        assert_eq!(
            matches_csv(&matches, &names),
            "ID,Player 1,Player 2,Set 1,Set 2,Set 3,Played At\n7,\"Iga\",\"Coco\",6-3,4-6,,2026-01-02\n"
        );
    }
}
