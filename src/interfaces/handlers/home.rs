use actix_web::{get, web, HttpResponse, Responder};
use tracing::instrument;

use crate::{errors::AppError, AppState};

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Portfolio Home API",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": ["/api/home", "/health"]
    }))
}

/// The homepage aggregate: all skills, top active categories by published
/// project count, and the recent published projects in those categories.
#[instrument(skip(state))]
#[get("/home")]
pub async fn get_home(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let response = state.home_handler.get_home_data().await?;

    Ok(HttpResponse::Ok().json(response))
}
