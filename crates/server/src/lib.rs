//! Voxdrop HTTP server
//!
//! Actix-web REST API: upload audio to S3, start an Amazon Transcribe job,
//! report its transcript.

pub mod error;
pub mod routes;
pub mod state;
pub mod types;
pub mod workflow;

#[cfg(test)]
mod test_utils;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;
use voxdrop_common::Result;

pub use error::ApiError;
pub use state::AppState;
pub use workflow::{JobReport, SubmittedJob, TranscriptionWorkflow, UploadRequest};

/// Application with CORS, request tracing, shared state and every route
pub fn build_app(
    state: web::Data<Arc<AppState>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Cors::permissive())
        .wrap(TracingLogger::default())
        .app_data(state)
        .configure(routes::configure)
}

/// Bind and run the HTTP server until it is stopped
pub async fn start_server(state: AppState) -> Result<()> {
    let bind_addr = state.config.server_bind_address();
    let state = web::Data::new(Arc::new(state));

    let server = HttpServer::new(move || build_app(state.clone())).bind(&bind_addr)?;

    info!("Server running on http://{}", bind_addr);

    server.run().await?;

    info!("Server stopped");
    Ok(())
}
