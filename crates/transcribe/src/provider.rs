use async_trait::async_trait;
use voxdrop_common::Result;

use crate::types::{StartJobRequest, StoredObjectKey, TranscriptionJob, TranscriptionResult};

/// Object storage the uploaded media is written to
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Bucket every object is written into
    fn bucket(&self) -> &str;

    /// Store `body` under `key`, replacing nothing (keys are unique per upload)
    async fn put_object(&self, key: &StoredObjectKey, body: Vec<u8>) -> Result<()>;
}

/// Managed speech-to-text service
#[async_trait]
pub trait TranscriptionService: Send + Sync {
    /// Start an asynchronous job
    async fn start_job(&self, request: StartJobRequest) -> Result<TranscriptionJob>;

    /// Look up a job by name
    async fn get_job(&self, job_name: &str) -> Result<TranscriptionJob>;
}

/// Downloads the result document of a completed job
#[async_trait]
pub trait ResultFetcher: Send + Sync {
    async fn fetch(&self, uri: &str) -> Result<TranscriptionResult>;
}

/// Source of unique tokens for object keys and job names
pub trait TokenSource: Send + Sync {
    fn next_token(&self) -> String;
}

/// UUID v4 tokens
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidTokenSource;

impl TokenSource for UuidTokenSource {
    fn next_token(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_tokens_are_unique() {
        let source = UuidTokenSource;
        let a = source.next_token();
        let b = source.next_token();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }
}
