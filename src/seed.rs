//! Sample data and table setup for the `score_snapshots` table

use chrono::{DateTime, Local, Utc};

use crate::constants::storage::CHECK_PREVIEW_CHARS;
use crate::error::AppError;
use crate::storage::{ScoreSnapshot, SupabaseClient, is_expired};

/// Table definition and row-level security policies, to run in the Supabase SQL editor.
pub const CREATE_TABLE_SQL: &str = r#"CREATE TABLE IF NOT EXISTS score_snapshots (
  id SERIAL PRIMARY KEY,
  content TEXT NOT NULL,
  fetched_at TIMESTAMPTZ DEFAULT NOW()
);

-- Enable RLS for public read
ALTER TABLE score_snapshots ENABLE ROW LEVEL SECURITY;

CREATE POLICY "Allow public read" ON score_snapshots FOR SELECT USING (true);
CREATE POLICY "Allow insert" ON score_snapshots FOR INSERT WITH CHECK (true);
CREATE POLICY "Allow cleanup" ON score_snapshots FOR DELETE USING (true);
"#;

/// A realistic snapshot covering completed, live and not-yet-started matches.
pub const SAMPLE_SNAPSHOT: &str = "## 🏆 United Cup - Quarter-Finals

### USA 2 - 1 Greece ✓
- Coco Gauff def. Maria Sakkari: 6-3, 6-2
- Taylor Fritz def. Stefanos Tsitsipas: 6-4, 7-5
- Gauff/Harrison def. Sakkari/Tsitsipas: 4-6, 6-4, 10-8

### Switzerland 2 - 1 Argentina ✓
- Belinda Bencic def. Solana Sierra: 6-2, 6-2
- Stan Wawrinka def. Sebastian Baez: 7-5, 6-4
- Bencic/Paul def. Carle/Andreozzi: 6-3, 6-3

### Australia vs Poland 🔴 LIVE
- Maya Joint vs Iga Swiatek - not started
- Alex de Minaur vs Hubert Hurkacz - not started

## 🇭🇰 ATP Hong Kong Open

- Michael Mmoh def. Karen Khachanov: 7-6(2), 7-6(4) ✓
- Alexander Bublik def. Botic van de Zandschulp: 6-3, 6-3 ✓
- Andrey Rublev def. Yibing Wu: 3-6, 6-2, 6-1 ✓

## 🇳🇿 ASB Classic Auckland (WTA)

- Alex Eala def. Petra Marcinko: 6-0, 6-2 ✓
- Elina Svitolina def. Katie Boulter: 7-5, 6-4 ✓

**Next:** Eala vs Linette (QF)";

/// Inserts [`SAMPLE_SNAPSHOT`] stamped with `now`.
pub async fn seed_sample(
    store: &SupabaseClient,
    now: DateTime<Utc>,
) -> Result<ScoreSnapshot, AppError> {
    store.insert_snapshot(SAMPLE_SNAPSHOT, now).await
}

/// Display lines for one row of the check listing. `index` is 0-based.
pub fn describe_snapshot(index: usize, snapshot: &ScoreSnapshot, now: DateTime<Utc>) -> Vec<String> {
    let fetched = snapshot
        .fetched_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S");
    let expired = if is_expired(snapshot.fetched_at, now) {
        " (expired)"
    } else {
        ""
    };
    let preview: String = snapshot.content.chars().take(CHECK_PREVIEW_CHARS).collect();

    vec![
        format!("--- Record {} ---", index + 1),
        format!("ID: {}", snapshot.id),
        format!("Fetched: {fetched}{expired}"),
        format!("Preview: {preview}..."),
    ]
}
