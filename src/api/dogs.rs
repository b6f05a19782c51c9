//! dog.ceo breed directory and image adapter.

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::api::http::{endpoint, get_text, snippet};
use crate::config::DogsConfig;

/// Port for the dog image gallery.
#[async_trait]
pub trait DogSource: Send + Sync {
    /// All top-level breed names, sorted.
    async fn breeds(&self) -> Result<Vec<String>, ApiError>;

    /// Every image URL for one breed.
    async fn breed_images(&self, breed: &str) -> Result<Vec<String>, ApiError>;
}

pub struct DogCeoClient {
    client: Client,
    base_url: String,
}

impl DogCeoClient {
    pub fn new(client: Client, config: &DogsConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }
}

#[async_trait]
impl DogSource for DogCeoClient {
    async fn breeds(&self) -> Result<Vec<String>, ApiError> {
        let url = endpoint(&self.base_url, "breeds/list/all", &[])?;
        let (status, body) = get_text(&self.client, "dogs", url).await?;
        let directory: BTreeMap<String, Vec<String>> = unwrap_envelope(status, &body, || {
            "Breed directory".to_string()
        })?;
        Ok(directory.into_keys().collect())
    }

    async fn breed_images(&self, breed: &str) -> Result<Vec<String>, ApiError> {
        let mut url = endpoint(&self.base_url, "breed", &[])?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Url(self.base_url.clone()))?
            .push(breed)
            .push("images");

        let (status, body) = get_text(&self.client, "dogs", url).await?;
        unwrap_envelope(status, &body, || format!("Breed '{breed}'"))
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    status: String,
    message: Value,
    code: Option<u16>,
}

/// Decode `{"status": "success", "message": ...}`.
///
/// Error envelopes carry a string `message` and an optional `code`.
fn unwrap_envelope<T, F>(status: StatusCode, body: &str, what: F) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    F: FnOnce() -> String,
{
    let envelope: Envelope = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(_) if !status.is_success() => {
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                message: snippet(body),
            })
        }
        Err(e) => return Err(ApiError::Decode(e.to_string())),
    };

    if envelope.status == "success" && status.is_success() {
        return serde_json::from_value(envelope.message)
            .map_err(|e| ApiError::Decode(e.to_string()));
    }

    let code = envelope.code.unwrap_or(status.as_u16());
    if code == 404 {
        return Err(ApiError::NotFound { what: what() });
    }
    let message = match envelope.message {
        Value::String(text) => text,
        other => other.to_string(),
    };
    Err(ApiError::Upstream {
        status: code,
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_decodes_message() {
        let images: Vec<String> = unwrap_envelope(
            StatusCode::OK,
            r#"{"message": ["a.jpg", "b.jpg"], "status": "success"}"#,
            || "x".into(),
        )
        .unwrap();
        assert_eq!(images, vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn directory_keys_are_sorted_breed_names() {
        let directory: BTreeMap<String, Vec<String>> = unwrap_envelope(
            StatusCode::OK,
            r#"{"message": {"boxer": [], "akita": [], "bulldog": ["boston", "french"]},
                "status": "success"}"#,
            || "x".into(),
        )
        .unwrap();
        let names: Vec<String> = directory.into_keys().collect();
        assert_eq!(names, vec!["akita", "boxer", "bulldog"]);
    }

    #[test]
    fn error_envelope_with_404_is_not_found() {
        let result: Result<Vec<String>, _> = unwrap_envelope(
            StatusCode::NOT_FOUND,
            r#"{"status": "error", "message": "Breed not found (master breed does not exist)",
                "code": 404}"#,
            || "Breed 'unicorn'".into(),
        );
        match result {
            Err(ApiError::NotFound { what }) => assert_eq!(what, "Breed 'unicorn'"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn non_json_failure_is_upstream_error() {
        let result: Result<Vec<String>, _> = unwrap_envelope(
            StatusCode::BAD_GATEWAY,
            "<html>bad gateway</html>",
            || "x".into(),
        );
        assert!(matches!(
            result,
            Err(ApiError::Upstream { status: 502, .. })
        ));
    }

    #[test]
    fn unexpected_shape_is_decode_error() {
        let result: Result<Vec<String>, _> = unwrap_envelope(
            StatusCode::OK,
            r#"{"message": {"not": "a list"}, "status": "success"}"#,
            || "x".into(),
        );
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
