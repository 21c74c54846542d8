use serde::{Deserialize, Serialize};
use std::fmt;

/// Blob-store key for one upload: `<token>-<original filename>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StoredObjectKey(String);

impl StoredObjectKey {
    /// Build a key from a random token and the client's filename
    pub fn new(token: &str, original_filename: &str) -> Self {
        Self(format!("{}-{}", token, original_filename))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `s3://bucket/key` form used as the transcription media URI
    pub fn media_uri(&self, bucket: &str) -> String {
        format!("s3://{}/{}", bucket, self.0)
    }
}

impl fmt::Display for StoredObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parameters for starting a transcription job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartJobRequest {
    /// Caller-chosen unique job name
    pub job_name: String,

    /// BCP-47 language code, e.g. `en-US`
    pub language_code: String,

    /// Location of the media file (`s3://bucket/key`)
    pub media_uri: String,

    /// Bucket the provider writes the result document into
    pub output_bucket: String,
}

/// Job status as reported by the transcription provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    Queued,
    InProgress,
    Completed,
    Failed,
    /// Anything the provider reports that we do not model
    Other(String),
}

impl JobStatus {
    /// Parse the provider's status string (`QUEUED`, `IN_PROGRESS`, ...)
    pub fn parse(raw: &str) -> Self {
        match raw {
            "QUEUED" => Self::Queued,
            "IN_PROGRESS" => Self::InProgress,
            "COMPLETED" => Self::Completed,
            "FAILED" => Self::Failed,
            other => Self::Other(other.to_string()),
        }
    }

    /// Raw provider string
    pub fn as_str(&self) -> &str {
        match self {
            Self::Queued => "QUEUED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of a transcription job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionJob {
    /// Job name (the id handed back to clients)
    pub name: String,

    /// Current status
    pub status: JobStatus,

    /// Result document URI, present once the job completed
    pub transcript_uri: Option<String>,

    /// Provider's failure reason for failed jobs
    pub failure_reason: Option<String>,
}

/// Result document written by the provider on completion
///
/// Only the transcript fragments are read; everything else in the document
/// (job name, account, per-word items) is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionResult {
    pub results: TranscriptResults,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptResults {
    pub transcripts: Vec<TranscriptFragment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptFragment {
    pub transcript: String,
}

impl TranscriptionResult {
    /// Fragments joined with `\n`, in document order
    pub fn text(&self) -> String {
        self.results
            .transcripts
            .iter()
            .map(|t| t.transcript.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
