//! HTTP client creation and configuration utilities

use reqwest::Client;
use std::time::Duration;

/// Creates the HTTP client shared by the generative API and Supabase calls.
///
/// # Features
/// * Optional request timeout from settings/env; without one the transport default applies
/// * A user agent naming this tool and its version
pub fn create_http_client(timeout_seconds: Option<u64>) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));

    if let Some(seconds) = timeout_seconds {
        builder = builder.timeout(Duration::from_secs(seconds));
    }

    builder.build()
}

/// Creates an HTTP client for testing
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client(None).expect("Failed to create test HTTP client")
}
