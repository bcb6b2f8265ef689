//! Minimal PostgREST client for the Supabase tables

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use super::models::{NewScoreSnapshot, PostgrestError, ScoreSnapshot};
use crate::config::SupabaseConfig;
use crate::constants::storage::SNAPSHOT_TABLE;
use crate::error::AppError;

/// Builds the REST endpoint of a table.
///
/// # Example
/// ```
/// use tennis_scores::storage::build_table_url;
///
/// assert_eq!(
///     build_table_url("https://abc.supabase.co", "score_snapshots"),
///     "https://abc.supabase.co/rest/v1/score_snapshots"
/// );
/// ```
pub fn build_table_url(project_url: &str, table: &str) -> String {
    format!("{project_url}/rest/v1/{table}")
}

/// Formats a timestamp for a PostgREST filter value.
pub fn format_filter_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Turns a non-2xx response into `AppError::Storage`, keeping the remote's message.
async fn ensure_success(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<PostgrestError>(&body) {
        Ok(remote) => {
            if let Some(context) = remote.context() {
                error!("Supabase error context: {context}");
            }
            remote.message
        }
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    };

    error!("Supabase responded {status}: {message}");
    Err(AppError::storage(status.as_u16(), message))
}

#[derive(Debug, Clone)]
pub struct SupabaseClient {
    client: Client,
    config: SupabaseConfig,
}

impl SupabaseClient {
    pub fn new(client: Client, config: SupabaseConfig) -> Self {
        SupabaseClient { client, config }
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.config.anon_key)
            .bearer_auth(&self.config.anon_key)
    }

    fn table_url(&self, table: &str) -> String {
        build_table_url(&self.config.url, table)
    }

    /// Inserts one snapshot and returns the stored row with its assigned id.
    ///
    /// # Errors
    /// * `AppError::Storage` - The remote rejected the write; carries its message
    /// * `AppError::StorageEmptyInsert` - The remote accepted the write but returned no row
    #[instrument(skip(self, content))]
    pub async fn insert_snapshot(
        &self,
        content: &str,
        fetched_at: DateTime<Utc>,
    ) -> Result<ScoreSnapshot, AppError> {
        let payload = [NewScoreSnapshot {
            content,
            fetched_at,
        }];

        let response = self
            .authorized(self.client.post(self.table_url(SNAPSHOT_TABLE)))
            .header("Prefer", "return=representation")
            .json(&payload)
            .send()
            .await?;

        let rows: Vec<ScoreSnapshot> = ensure_success(response).await?.json().await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| AppError::storage_empty_insert(SNAPSHOT_TABLE))
    }

    /// Deletes every snapshot fetched strictly before `cutoff`. Returns the number of rows removed.
    #[instrument(skip(self))]
    pub async fn delete_snapshots_before(&self, cutoff: DateTime<Utc>) -> Result<usize, AppError> {
        let filter = format!("lt.{}", format_filter_timestamp(cutoff));

        let response = self
            .authorized(self.client.delete(self.table_url(SNAPSHOT_TABLE)))
            .query(&[("fetched_at", filter.as_str())])
            .header("Prefer", "return=representation")
            .send()
            .await?;

        let body = ensure_success(response).await?.text().await?;
        // An empty body means the server ignored the Prefer header
        let deleted = if body.trim().is_empty() {
            0
        } else {
            serde_json::from_str::<Vec<serde_json::Value>>(&body)?.len()
        };

        debug!("Deleted {deleted} snapshots fetched before {filter}");
        Ok(deleted)
    }

    /// Returns the most recent snapshots, newest first.
    pub async fn list_recent_snapshots(&self, limit: usize) -> Result<Vec<ScoreSnapshot>, AppError> {
        let limit = limit.to_string();
        self.select(
            SNAPSHOT_TABLE,
            &[
                ("select", "*"),
                ("order", "fetched_at.desc"),
                ("limit", limit.as_str()),
            ],
        )
        .await
    }

    /// Returns every row of `table` as raw JSON objects.
    pub async fn fetch_all_rows(&self, table: &str) -> Result<Vec<serde_json::Value>, AppError> {
        self.select(table, &[("select", "*")]).await
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, AppError> {
        let url = self.table_url(table);
        info!("Fetching rows from {url}");

        let response = self
            .authorized(self.client.get(&url))
            .query(query)
            .send()
            .await?;

        let rows: Vec<T> = ensure_success(response).await?.json().await?;
        debug!("Fetched {} rows from {table}", rows.len());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::create_test_http_client;
    use chrono::TimeZone;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_partial_json, header, method, path, query_param},
    };

    fn create_client(uri: String) -> SupabaseClient {
        SupabaseClient::new(
            create_test_http_client(),
            SupabaseConfig {
                url: uri,
                anon_key: "anon-key".to_string(),
            },
        )
    }

    #[test]
    fn test_format_filter_timestamp() {
        let ts = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_filter_timestamp(ts), "2026-01-02T03:04:05.000Z");
    }

    #[tokio::test]
    async fn test_insert_snapshot_returns_assigned_id() {
        let mock_server = MockServer::start().await;
        let store = create_client(mock_server.uri());
        let fetched_at = Utc.with_ymd_and_hms(2026, 1, 9, 12, 0, 0).unwrap();

        Mock::given(method("POST"))
            .and(path("/rest/v1/score_snapshots"))
            .and(header("apikey", "anon-key"))
            .and(header("authorization", "Bearer anon-key"))
            .and(header("prefer", "return=representation"))
            .and(body_partial_json(json!([{ "content": "## 🏆 Open" }])))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([{
                "id": 42,
                "content": "## 🏆 Open",
                "fetched_at": "2026-01-09T12:00:00+00:00"
            }])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let snapshot = store.insert_snapshot("## 🏆 Open", fetched_at).await.unwrap();
        assert_eq!(snapshot.id, 42);
        assert_eq!(snapshot.fetched_at, fetched_at);
    }

    #[tokio::test]
    async fn test_insert_rejection_surfaces_remote_message() {
        let mock_server = MockServer::start().await;
        let store = create_client(mock_server.uri());

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "code": "42501",
                "message": "new row violates row-level security policy for table \"score_snapshots\""
            })))
            .mount(&mock_server)
            .await;

        let error = store.insert_snapshot("x", Utc::now()).await.unwrap_err();
        match error {
            AppError::Storage { status, message } => {
                assert_eq!(status, 401);
                assert!(message.contains("row-level security"));
            }
            other => panic!("expected storage error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_insert_without_returned_row() {
        let mock_server = MockServer::start().await;
        let store = create_client(mock_server.uri());

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
            .mount(&mock_server)
            .await;

        let error = store.insert_snapshot("x", Utc::now()).await.unwrap_err();
        assert!(matches!(error, AppError::StorageEmptyInsert { .. }));
    }

    #[tokio::test]
    async fn test_delete_uses_lt_filter() {
        let mock_server = MockServer::start().await;
        let store = create_client(mock_server.uri());
        let cutoff = Utc.with_ymd_and_hms(2026, 1, 2, 12, 0, 0).unwrap();

        Mock::given(method("DELETE"))
            .and(path("/rest/v1/score_snapshots"))
            .and(query_param("fetched_at", "lt.2026-01-02T12:00:00.000Z"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 1 }, { "id": 2 }])))
            .expect(1)
            .mount(&mock_server)
            .await;

        assert_eq!(store.delete_snapshots_before(cutoff).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_delete_with_empty_body() {
        let mock_server = MockServer::start().await;
        let store = create_client(mock_server.uri());

        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        assert_eq!(store.delete_snapshots_before(Utc::now()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_recent_snapshots_query() {
        let mock_server = MockServer::start().await;
        let store = create_client(mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/rest/v1/score_snapshots"))
            .and(query_param("select", "*"))
            .and(query_param("order", "fetched_at.desc"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 2, "content": "b", "fetched_at": "2026-01-09T12:00:00Z" },
                { "id": 1, "content": "a", "fetched_at": "2026-01-09T11:00:00Z" }
            ])))
            .mount(&mock_server)
            .await;

        let rows = store.list_recent_snapshots(5).await.unwrap();
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 1]);
    }

    #[tokio::test]
    async fn test_error_without_json_body_uses_text() {
        let mock_server = MockServer::start().await;
        let store = create_client(mock_server.uri());

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad gateway upstream"))
            .mount(&mock_server)
            .await;

        let error = store.fetch_all_rows("players").await.unwrap_err();
        assert_eq!(error.to_string(), "Supabase error (502): Bad gateway upstream");
    }
}
