use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode, Url};

use crate::api::error::ApiError;
use crate::config::HttpConfig;

/// Build the HTTP client shared by every adapter.
pub fn build_client(config: &HttpConfig) -> Result<Client, ApiError> {
    Client::builder()
        .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
        .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
        .user_agent(concat!("apiscope/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(ApiError::Network)
}

/// Join `base` and `path` and append query parameters.
pub(crate) fn endpoint(base: &str, path: &str, params: &[(&str, &str)]) -> Result<Url, ApiError> {
    let raw = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    let parsed = if params.is_empty() {
        Url::parse(&raw)
    } else {
        Url::parse_with_params(&raw, params)
    };
    parsed.map_err(|e| ApiError::Url(format!("{raw}: {e}")))
}

/// Issue a GET and return status plus body text.
///
/// Only the path is logged; query strings carry API keys.
pub(crate) async fn get_text(
    client: &Client,
    service: &'static str,
    url: Url,
) -> Result<(StatusCode, String), ApiError> {
    tracing::debug!(service, path = %url.path(), "Sending request");

    let start = Instant::now();
    let response = client.get(url).send().await.map_err(|err| {
        tracing::warn!(service, error = %err, "Request failed");
        ApiError::Network(err)
    })?;
    let status = response.status();
    let body = response.text().await?;

    tracing::debug!(
        service,
        status = status.as_u16(),
        latency_ms = start.elapsed().as_millis() as u64,
        bytes = body.len(),
        "Received response"
    );

    Ok((status, body))
}

/// Shorten an error body for inclusion in a message.
pub(crate) fn snippet(body: &str) -> String {
    const MAX: usize = 200;
    let trimmed = body.trim();
    if trimmed.chars().count() <= MAX {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(MAX).collect();
    format!("{cut}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let url = endpoint("https://dog.ceo/api/", "/breeds/list/all", &[]).unwrap();
        assert_eq!(url.as_str(), "https://dog.ceo/api/breeds/list/all");
    }

    #[test]
    fn endpoint_encodes_params() {
        let url = endpoint("http://localhost", "data/2.5/weather", &[("q", "New York")]).unwrap();
        assert_eq!(url.query(), Some("q=New+York"));
    }

    #[test]
    fn endpoint_rejects_garbage_base() {
        assert!(matches!(
            endpoint("not a url", "x", &[]),
            Err(ApiError::Url(_))
        ));
    }

    #[test]
    fn snippet_truncates_long_bodies() {
        let long = "x".repeat(500);
        let short = snippet(&long);
        assert!(short.ends_with('…'));
        assert_eq!(short.chars().count(), 201);
        assert_eq!(snippet("  ok  "), "ok");
    }
}
