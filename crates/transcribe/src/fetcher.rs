use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use voxdrop_common::{Result, VoxdropError};

use crate::provider::ResultFetcher;
use crate::types::TranscriptionResult;

/// Plain HTTP GET of the provider's result document
#[derive(Debug, Clone)]
pub struct HttpResultFetcher {
    client: Client,
}

impl HttpResultFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ResultFetcher for HttpResultFetcher {
    async fn fetch(&self, uri: &str) -> Result<TranscriptionResult> {
        debug!("Fetching transcription result document");

        let body = self
            .client
            .get(uri)
            .send()
            .await
            .map_err(|e| VoxdropError::network(format!("Failed to fetch transcript: {}", e)))?
            .error_for_status()
            .map_err(|e| VoxdropError::network(format!("Transcript fetch failed: {}", e)))?
            .text()
            .await
            .map_err(|e| VoxdropError::network(format!("Failed to read transcript body: {}", e)))?;

        let result: TranscriptionResult = serde_json::from_str(&body)?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_result_document() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/node-transcript/job-1.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "jobName": "job-1",
                "results": {
                    "transcripts": [{"transcript": "hello"}, {"transcript": "world"}]
                }
            })))
            .mount(&server)
            .await;

        let fetcher = HttpResultFetcher::new().unwrap();
        let result = fetcher
            .fetch(&format!("{}/node-transcript/job-1.json", server.uri()))
            .await
            .unwrap();

        assert_eq!(result.text(), "hello\nworld");
    }

    #[tokio::test]
    async fn test_fetch_non_success_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let fetcher = HttpResultFetcher::new().unwrap();
        let err = fetcher
            .fetch(&format!("{}/expired.json", server.uri()))
            .await
            .unwrap_err();

        assert!(matches!(err, VoxdropError::Network(_)));
        assert!(err.to_string().contains("403"));
    }

    #[tokio::test]
    async fn test_fetch_document_without_transcripts_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"jobName": "job-1", "results": {}})),
            )
            .mount(&server)
            .await;

        let fetcher = HttpResultFetcher::new().unwrap();
        let err = fetcher.fetch(&server.uri()).await.unwrap_err();

        assert!(matches!(err, VoxdropError::Json(_)));
        assert_eq!(err.status_code(), 500);
    }

    #[tokio::test]
    async fn test_fetch_malformed_document_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<Error>AccessDenied</Error>"))
            .mount(&server)
            .await;

        let fetcher = HttpResultFetcher::new().unwrap();
        let err = fetcher.fetch(&server.uri()).await.unwrap_err();

        assert!(matches!(err, VoxdropError::Json(_)));
    }
}
