//! Voxdrop provider integrations
//!
//! Blob storage, managed transcription and result download, each behind a
//! trait so the server can run against fakes.

mod aws;
mod fetcher;
mod provider;
mod types;

pub use aws::{load_sdk_config, AwsTranscriptionService, S3BlobStore};
pub use fetcher::HttpResultFetcher;
pub use provider::{BlobStore, ResultFetcher, TokenSource, TranscriptionService, UuidTokenSource};
pub use types::{
    JobStatus, StartJobRequest, StoredObjectKey, TranscriptFragment, TranscriptResults,
    TranscriptionJob, TranscriptionResult,
};
