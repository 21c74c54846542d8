use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse};
use futures_util::StreamExt;
use tracing::info;
use voxdrop_common::VoxdropError;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{UploadResponse, UPLOAD_STARTED_MESSAGE};
use crate::workflow::UploadRequest;

/// Accept a multipart `file`, store it and start transcribing it
#[post("/upload")]
pub async fn upload(
    payload: Multipart,
    state: web::Data<std::sync::Arc<AppState>>,
) -> Result<HttpResponse, ApiError> {
    let file = read_file_field(payload)
        .await?
        .ok_or_else(|| VoxdropError::invalid_input("No file uploaded"))?;

    info!("Received upload: {} ({} bytes)", file.filename, file.bytes.len());

    let submitted = state.workflow.submit(file).await?;

    Ok(HttpResponse::Ok().json(UploadResponse {
        message: UPLOAD_STARTED_MESSAGE.to_string(),
        job_id: submitted.job_id,
    }))
}

/// Buffer the first `file` field; every other field is drained
async fn read_file_field(mut payload: Multipart) -> Result<Option<UploadRequest>, VoxdropError> {
    let mut found = None;

    while let Some(field) = payload.next().await {
        let mut field = field.map_err(|e| VoxdropError::invalid_input(e.to_string()))?;
        let content_disposition = field.content_disposition();

        let is_file = found.is_none() && content_disposition.get_name() == Some("file");
        let filename = content_disposition
            .get_filename()
            .unwrap_or("unknown")
            .to_string();

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let data = chunk.map_err(|e| VoxdropError::invalid_input(e.to_string()))?;
            if is_file {
                bytes.extend_from_slice(&data);
            }
        }

        if is_file {
            found = Some(UploadRequest { filename, bytes });
        }
    }

    Ok(found)
}
