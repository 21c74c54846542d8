use actix_web::{get, web, HttpResponse};

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{
    MessageResponse, TranscriptionTextResponse, IN_PROGRESS_MESSAGE, TRANSCRIPTION_STATUS_HEADER,
};
use crate::workflow::JobReport;

/// Report a job's transcript, or that it is not done yet
///
/// Every non-completed state gets the same body; the raw provider status is
/// only exposed through the `X-Transcription-Status` header.
#[get("/transcription/{job_id}")]
pub async fn get_transcription(
    job_id: web::Path<String>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> Result<HttpResponse, ApiError> {
    match state.workflow.report(job_id.as_str()).await? {
        JobReport::Completed { text } => Ok(HttpResponse::Ok().json(TranscriptionTextResponse {
            transcription_text: text,
        })),
        JobReport::Pending { status } => Ok(HttpResponse::Ok()
            .insert_header((TRANSCRIPTION_STATUS_HEADER, status.as_str()))
            .json(MessageResponse {
                message: IN_PROGRESS_MESSAGE.to_string(),
            })),
    }
}
