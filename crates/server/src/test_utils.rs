//! In-memory provider fakes for workflow and route tests

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use voxdrop_common::{AppConfig, Result, VoxdropError, BUCKET_NAME};
use voxdrop_transcribe::{
    BlobStore, JobStatus, ResultFetcher, StartJobRequest, StoredObjectKey, TokenSource,
    TranscriptFragment, TranscriptResults, TranscriptionJob, TranscriptionResult,
    TranscriptionService, UuidTokenSource,
};

use crate::state::AppState;
use crate::workflow::TranscriptionWorkflow;

#[derive(Default)]
pub struct FakeBlobStore {
    objects: Mutex<Vec<(String, Vec<u8>)>>,
    failure: Option<String>,
}

impl FakeBlobStore {
    pub fn failing(message: &str) -> Self {
        Self {
            objects: Mutex::new(Vec::new()),
            failure: Some(message.to_string()),
        }
    }

    pub fn objects(&self) -> Vec<(String, Vec<u8>)> {
        self.objects.lock().unwrap().clone()
    }
}

#[async_trait]
impl BlobStore for FakeBlobStore {
    fn bucket(&self) -> &str {
        BUCKET_NAME
    }

    async fn put_object(&self, key: &StoredObjectKey, body: Vec<u8>) -> Result<()> {
        if let Some(message) = &self.failure {
            return Err(VoxdropError::storage(message.clone()));
        }
        self.objects
            .lock()
            .unwrap()
            .push((key.as_str().to_string(), body));
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeTranscriber {
    started: Mutex<Vec<StartJobRequest>>,
    jobs: Mutex<HashMap<String, TranscriptionJob>>,
    start_failure: Option<String>,
}

impl FakeTranscriber {
    pub fn failing_start(message: &str) -> Self {
        Self {
            start_failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn started(&self) -> Vec<StartJobRequest> {
        self.started.lock().unwrap().clone()
    }

    pub fn set_job(&self, job: TranscriptionJob) {
        self.jobs.lock().unwrap().insert(job.name.clone(), job);
    }
}

#[async_trait]
impl TranscriptionService for FakeTranscriber {
    async fn start_job(&self, request: StartJobRequest) -> Result<TranscriptionJob> {
        if let Some(message) = &self.start_failure {
            return Err(VoxdropError::transcription(message.clone()));
        }

        let job = TranscriptionJob {
            name: request.job_name.clone(),
            status: JobStatus::InProgress,
            transcript_uri: None,
            failure_reason: None,
        };
        self.started.lock().unwrap().push(request);
        self.set_job(job.clone());
        Ok(job)
    }

    async fn get_job(&self, job_name: &str) -> Result<TranscriptionJob> {
        self.jobs
            .lock()
            .unwrap()
            .get(job_name)
            .cloned()
            .ok_or_else(|| {
                VoxdropError::transcription(
                    "The requested job couldn't be found. Check the job name and try your request again.",
                )
            })
    }
}

#[derive(Default)]
pub struct FakeFetcher {
    documents: HashMap<String, Vec<String>>,
}

impl FakeFetcher {
    pub fn with_document(uri: &str, fragments: &[&str]) -> Self {
        let mut documents = HashMap::new();
        documents.insert(
            uri.to_string(),
            fragments.iter().map(|f| f.to_string()).collect(),
        );
        Self { documents }
    }
}

#[async_trait]
impl ResultFetcher for FakeFetcher {
    async fn fetch(&self, uri: &str) -> Result<TranscriptionResult> {
        let fragments = self
            .documents
            .get(uri)
            .ok_or_else(|| VoxdropError::network(format!("Transcript fetch failed: 404 for {}", uri)))?;

        Ok(TranscriptionResult {
            results: TranscriptResults {
                transcripts: fragments
                    .iter()
                    .map(|t| TranscriptFragment {
                        transcript: t.clone(),
                    })
                    .collect(),
            },
        })
    }
}

/// Hands out a fixed sequence of tokens, then falls back to UUIDs
pub struct SequenceTokens {
    tokens: Mutex<VecDeque<String>>,
}

impl SequenceTokens {
    pub fn new(tokens: &[&str]) -> Self {
        Self {
            tokens: Mutex::new(tokens.iter().map(|t| t.to_string()).collect()),
        }
    }
}

impl TokenSource for SequenceTokens {
    fn next_token(&self) -> String {
        self.tokens
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| UuidTokenSource.next_token())
    }
}

pub fn completed_job(name: &str, uri: &str) -> TranscriptionJob {
    TranscriptionJob {
        name: name.to_string(),
        status: JobStatus::Completed,
        transcript_uri: Some(uri.to_string()),
        failure_reason: None,
    }
}

pub fn test_state(
    store: Arc<FakeBlobStore>,
    transcriber: Arc<FakeTranscriber>,
    fetcher: Arc<FakeFetcher>,
    tokens: Arc<dyn TokenSource>,
) -> Arc<AppState> {
    let workflow = TranscriptionWorkflow::new(store, transcriber, fetcher, tokens);
    Arc::new(AppState::new(AppConfig::default(), workflow))
}
