use crate::api::types::{ClassifiedTweet, MapRequest};
use crate::api::{ApiClientError, BackendClient};

impl BackendClient {
    /// Fetch the classified tweet list. The backend returns only
    /// disaster-relevant items; the response order is preserved.
    pub async fn classify(&self) -> Result<Vec<ClassifiedTweet>, ApiClientError> {
        let tweets: Vec<ClassifiedTweet> = self.get_json("/classify").await?;
        tracing::debug!(count = tweets.len(), "classify response parsed");
        Ok(tweets)
    }

    /// Request a generated map for the given tweets. Returns the raw markup
    /// document to hand to a browser.
    pub async fn generate_map(&self, request: &MapRequest) -> Result<String, ApiClientError> {
        tracing::debug!(tweets = request.tweets.len(), "requesting map generation");
        self.post_for_text("/generate-map", request).await
    }
}
