use serde::Serialize;

/// Message returned for every job that has not completed
pub const IN_PROGRESS_MESSAGE: &str = "Transcription job is still in progress";

/// Message returned after a successful upload
pub const UPLOAD_STARTED_MESSAGE: &str = "File uploaded and transcription job started";

/// Header carrying the provider's raw job status on pending responses
pub const TRANSCRIPTION_STATUS_HEADER: &str = "X-Transcription-Status";

/// Upload response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Message
    pub message: String,

    /// Transcription job name, usable on `/transcription/{jobId}`
    pub job_id: String,
}

/// Completed transcription
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptionTextResponse {
    pub transcription_text: String,
}

/// Informational response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error envelope
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
