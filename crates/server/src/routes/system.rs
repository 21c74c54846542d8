use actix_web::{get, post, web, Either, HttpResponse};
use std::collections::BTreeMap;

#[get("/hello")]
pub async fn hello() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Hello World")
}

/// Echo a JSON body back verbatim; form bodies come back as a JSON object
#[post("/echo")]
pub async fn echo(
    body: Either<web::Json<serde_json::Value>, web::Form<BTreeMap<String, String>>>,
) -> HttpResponse {
    match body {
        Either::Left(json) => HttpResponse::Ok().json(json.into_inner()),
        Either::Right(form) => HttpResponse::Ok().json(form.into_inner()),
    }
}
