//! Amazon S3 and Amazon Transcribe clients
//!
//! Both clients are built from one shared `SdkConfig`; nothing here is global.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::Credentials;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_transcribe::types::{LanguageCode, Media};
use tracing::{debug, info};
use voxdrop_common::{AppConfig, Result, VoxdropError};

use crate::provider::{BlobStore, TranscriptionService};
use crate::types::{JobStatus, StartJobRequest, StoredObjectKey, TranscriptionJob};

/// Load the SDK config for the fixed region
///
/// Static keys from the app config win; without them the default AWS
/// credential chain applies.
pub async fn load_sdk_config(config: &AppConfig) -> SdkConfig {
    let mut loader = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.aws_region.clone()));

    if let (Some(access_key), Some(secret_key)) =
        (&config.aws_access_key_id, &config.aws_secret_access_key)
    {
        loader = loader.credentials_provider(Credentials::new(
            access_key.clone(),
            secret_key.clone(),
            None,
            None,
            "voxdrop-env",
        ));
    } else {
        info!("AWS static credentials not set, using default credential chain");
    }

    loader.load().await
}

/// S3-backed blob store
#[derive(Debug, Clone)]
pub struct S3BlobStore {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3BlobStore {
    pub fn new(sdk_config: &SdkConfig, bucket: impl Into<String>) -> Self {
        Self {
            client: aws_sdk_s3::Client::new(sdk_config),
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    async fn put_object(&self, key: &StoredObjectKey, body: Vec<u8>) -> Result<()> {
        debug!("Uploading s3://{}/{} ({} bytes)", self.bucket, key, body.len());

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key.as_str())
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| {
                VoxdropError::storage(aws_sdk_s3::error::DisplayErrorContext(&e).to_string())
            })?;

        Ok(())
    }
}

/// Amazon Transcribe client
#[derive(Debug, Clone)]
pub struct AwsTranscriptionService {
    client: aws_sdk_transcribe::Client,
}

impl AwsTranscriptionService {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_transcribe::Client::new(sdk_config),
        }
    }
}

#[async_trait]
impl TranscriptionService for AwsTranscriptionService {
    async fn start_job(&self, request: StartJobRequest) -> Result<TranscriptionJob> {
        let output = self
            .client
            .start_transcription_job()
            .transcription_job_name(&request.job_name)
            .language_code(LanguageCode::from(request.language_code.as_str()))
            .media(Media::builder().media_file_uri(&request.media_uri).build())
            .output_bucket_name(&request.output_bucket)
            .send()
            .await
            .map_err(|e| {
                VoxdropError::transcription(
                    aws_sdk_transcribe::error::DisplayErrorContext(&e).to_string(),
                )
            })?;

        // The provider echoes the job back; keep the submitted name if it does not.
        let job = match output.transcription_job() {
            Some(job) => convert_job(job, &request.job_name),
            None => TranscriptionJob {
                name: request.job_name,
                status: JobStatus::Queued,
                transcript_uri: None,
                failure_reason: None,
            },
        };

        Ok(job)
    }

    async fn get_job(&self, job_name: &str) -> Result<TranscriptionJob> {
        let output = self
            .client
            .get_transcription_job()
            .transcription_job_name(job_name)
            .send()
            .await
            .map_err(|e| {
                VoxdropError::transcription(
                    aws_sdk_transcribe::error::DisplayErrorContext(&e).to_string(),
                )
            })?;

        let job = output.transcription_job().ok_or_else(|| {
            VoxdropError::transcription(format!("No transcription job returned for {}", job_name))
        })?;

        Ok(convert_job(job, job_name))
    }
}

fn convert_job(
    job: &aws_sdk_transcribe::types::TranscriptionJob,
    fallback_name: &str,
) -> TranscriptionJob {
    TranscriptionJob {
        name: job
            .transcription_job_name()
            .unwrap_or(fallback_name)
            .to_string(),
        status: job
            .transcription_job_status()
            .map(|s| JobStatus::parse(s.as_str()))
            .unwrap_or_else(|| JobStatus::Other("UNKNOWN".to_string())),
        transcript_uri: job
            .transcript()
            .and_then(|t| t.transcript_file_uri())
            .map(str::to_string),
        failure_reason: job.failure_reason().map(str::to_string),
    }
}
