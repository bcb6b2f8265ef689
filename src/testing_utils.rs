use crate::config::{Config, GeminiConfig, Settings, SupabaseConfig};
use serde_json::{Value, json};

/// Test utilities for creating provider payloads and configurations
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// API key used by [`TestDataBuilder::config`]
    pub const API_KEY: &'static str = "test-gemini-key";

    /// Model used by [`TestDataBuilder::config`]
    pub const MODEL: &'static str = "gemini-2.0-flash";

    /// Creates a config whose generative API and Supabase project both point at `base_uri`
    pub fn config(base_uri: &str) -> Config {
        let settings = Settings {
            gemini_api_base: base_uri.to_string(),
            ..Settings::default()
        };
        Config {
            gemini: GeminiConfig {
                api_key: Self::API_KEY.to_string(),
                api_base: settings.gemini_api_base.clone(),
                model: Self::MODEL.to_string(),
            },
            supabase: SupabaseConfig {
                url: base_uri.to_string(),
                anon_key: "test-anon-key".to_string(),
            },
            settings,
        }
    }

    /// Path the generative API is called on for [`TestDataBuilder::MODEL`]
    pub fn generate_path() -> String {
        format!("/models/{}:generateContent", Self::MODEL)
    }

    /// Creates a `generateContent` response with a single text candidate
    pub fn completion(text: &str) -> Value {
        json!({
            "candidates": [{
                "content": { "parts": [{ "text": text }], "role": "model" },
                "finishReason": "STOP"
            }]
        })
    }

    /// Creates a tournament block long enough to pass validation
    pub fn scores_block(tournament: &str) -> String {
        format!(
            "## 🏆 {tournament}\n\
             - Coco Gauff def. Maria Sakkari: 6-3, 6-2 ✓\n\
             - Taylor Fritz def. Stefanos Tsitsipas: 6-4, 7-5 ✓\n\
             - Maya Joint vs Iga Swiatek: 2-1 🔴 LIVE"
        )
    }

    /// Creates a `score_snapshots` row as PostgREST returns it
    pub fn snapshot_row(id: i64, content: &str, fetched_at: &str) -> Value {
        json!({ "id": id, "content": content, "fetched_at": fetched_at })
    }

    /// Creates a `players` row
    pub fn player_row(id: i64, name: &str) -> Value {
        json!({ "id": id, "name": name, "created_at": "2026-01-01T09:00:00+00:00" })
    }

    /// Creates a `matches` row with set scores
    pub fn match_row(id: i64, player1: i64, player2: i64, sets: Value) -> Value {
        json!({
            "id": id,
            "player1_id": player1,
            "player2_id": player2,
            "sets": sets,
            "created_at": format!("2026-01-{:02}T18:00:00+00:00", id)
        })
    }
}
