use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::storage::RowId;

/// One set score, normally `[player1_games, player2_games]`. Kept as raw JSON so
/// unplayed sets (nulls) and unexpected values still export.
pub type SetScore = Value;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Player {
    pub id: RowId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Player {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MatchRecord {
    pub id: RowId,
    #[serde(default)]
    pub player1_id: Option<RowId>,
    #[serde(default)]
    pub player2_id: Option<RowId>,
    #[serde(default)]
    pub sets: Option<Value>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl MatchRecord {
    /// Set `index` (0-based), if recorded.
    pub fn set(&self, index: usize) -> Option<&SetScore> {
        self.sets.as_ref().and_then(|sets| sets.get(index))
    }

    /// True when both matches were played by the same two players, in either order.
    pub fn same_pairing(&self, other: &MatchRecord) -> bool {
        (self.player1_id == other.player1_id && self.player2_id == other.player2_id)
            || (self.player1_id == other.player2_id && self.player2_id == other.player1_id)
    }
}

/// Player id to display name lookup.
#[derive(Debug, Default, Clone)]
pub struct PlayerNames(HashMap<RowId, String>);

impl PlayerNames {
    pub fn from_players(players: &[Player]) -> Self {
        PlayerNames(
            players
                .iter()
                .map(|p| (p.id.clone(), p.display_name().to_string()))
                .collect(),
        )
    }

    /// Player's name, the raw id when the player row is missing, or empty without an id.
    pub fn name_of(&self, id: Option<&RowId>) -> String {
        match id {
            Some(id) => self.0.get(id).cloned().unwrap_or_else(|| id.to_string()),
            None => String::new(),
        }
    }

    /// `"{player1} vs {player2}"` for a match.
    pub fn pairing(&self, record: &MatchRecord) -> String {
        format!(
            "{} vs {}",
            self.name_of(record.player1_id.as_ref()),
            self.name_of(record.player2_id.as_ref())
        )
    }
}
