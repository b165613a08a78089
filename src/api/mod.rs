pub mod classify;
pub mod types;

use reqwest::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend error (status {status}): {detail}")]
    Backend { status: u16, detail: String },
    #[error("deserialization error: {0}")]
    Deserialize(String),
}

// ---------------------------------------------------------------------------
// Backend client
// ---------------------------------------------------------------------------

/// Thin client for the classification backend. No auth, no retries, no
/// timeouts: the contract is exactly the two endpoints it exposes.
pub struct BackendClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Issue a GET request and deserialize the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiClientError> {
        let resp = self.http_client.get(self.url(path)).send().await?;
        let body = Self::success_body(resp).await?;
        serde_json::from_str::<T>(&body)
            .map_err(|e| ApiClientError::Deserialize(format!("{e}: {body}")))
    }

    /// Issue a POST with a JSON body and return the raw response text.
    pub(crate) async fn post_for_text(
        &self,
        path: &str,
        body: &impl serde::Serialize,
    ) -> Result<String, ApiClientError> {
        let resp = self
            .http_client
            .post(self.url(path))
            .json(body)
            .send()
            .await?;
        Self::success_body(resp).await
    }

    /// Check the status and read the body, mapping non-success statuses to
    /// `Backend` errors carrying the status text (or body when present).
    async fn success_body(resp: Response) -> Result<String, ApiClientError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let detail = if body.is_empty() {
                status.canonical_reason().unwrap_or("unknown").to_string()
            } else {
                body
            };
            return Err(ApiClientError::Backend {
                status: status.as_u16(),
                detail,
            });
        }
        Ok(resp.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_doubled_slash() {
        let client = BackendClient::new("http://localhost:8000/");
        assert_eq!(client.url("/classify"), "http://localhost:8000/classify");

        let client = BackendClient::new("http://localhost:8000");
        assert_eq!(
            client.url("/generate-map"),
            "http://localhost:8000/generate-map"
        );
    }
}
