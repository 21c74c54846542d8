use std::sync::Arc;
use tracing::{info, warn};
use voxdrop_common::{Result, VoxdropError, LANGUAGE_CODE};
use voxdrop_transcribe::{
    BlobStore, JobStatus, ResultFetcher, StartJobRequest, StoredObjectKey, TokenSource,
    TranscriptionService,
};

/// Uploaded file as received from the multipart body
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Original filename
    pub filename: String,

    /// Raw bytes
    pub bytes: Vec<u8>,
}

/// Outcome of a successful upload
#[derive(Debug, Clone)]
pub struct SubmittedJob {
    /// Key the media was stored under
    pub object_key: StoredObjectKey,

    /// Transcription job name
    pub job_id: String,
}

/// What the status endpoint reports for a job
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobReport {
    /// Job finished, fragments joined
    Completed { text: String },

    /// Any other provider state
    Pending { status: JobStatus },
}

/// Upload-then-transcribe sequencing over the injected providers
#[derive(Clone)]
pub struct TranscriptionWorkflow {
    blob_store: Arc<dyn BlobStore>,
    transcriber: Arc<dyn TranscriptionService>,
    fetcher: Arc<dyn ResultFetcher>,
    tokens: Arc<dyn TokenSource>,
}

impl TranscriptionWorkflow {
    /// Create new workflow
    pub fn new(
        blob_store: Arc<dyn BlobStore>,
        transcriber: Arc<dyn TranscriptionService>,
        fetcher: Arc<dyn ResultFetcher>,
        tokens: Arc<dyn TokenSource>,
    ) -> Self {
        Self {
            blob_store,
            transcriber,
            fetcher,
            tokens,
        }
    }

    /// Store the upload, then start a transcription job for it
    ///
    /// Not idempotent: every call creates a new object and a new job.
    pub async fn submit(&self, upload: UploadRequest) -> Result<SubmittedJob> {
        let object_key = StoredObjectKey::new(&self.tokens.next_token(), &upload.filename);
        let size = upload.bytes.len();

        self.blob_store.put_object(&object_key, upload.bytes).await?;
        info!("File uploaded successfully: {} ({} bytes)", object_key, size);

        let bucket = self.blob_store.bucket();
        let request = StartJobRequest {
            job_name: self.tokens.next_token(),
            language_code: LANGUAGE_CODE.to_string(),
            media_uri: object_key.media_uri(bucket),
            output_bucket: bucket.to_string(),
        };

        let job = self.transcriber.start_job(request).await?;
        info!("Transcription job started: {} (status: {})", job.name, job.status);

        Ok(SubmittedJob {
            object_key,
            job_id: job.name,
        })
    }

    /// Look the job up and, once completed, download and flatten its transcript
    pub async fn report(&self, job_id: &str) -> Result<JobReport> {
        let job = self.transcriber.get_job(job_id).await?;

        if !job.status.is_completed() {
            if let Some(reason) = &job.failure_reason {
                warn!("Transcription job {} is {}: {}", job_id, job.status, reason);
            }
            return Ok(JobReport::Pending { status: job.status });
        }

        let uri = job.transcript_uri.ok_or_else(|| {
            VoxdropError::transcription(format!(
                "Transcription job {} completed without a transcript URI",
                job_id
            ))
        })?;

        let result = self.fetcher.fetch(&uri).await?;

        Ok(JobReport::Completed {
            text: result.text(),
        })
    }
}
