pub mod system;
pub mod transcription;
pub mod upload;

use actix_web::web;

/// Register every route on an app or scope
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(system::hello)
        .service(system::echo)
        .service(upload::upload)
        .service(transcription::get_transcription);
}
