use actix_web::{http::StatusCode, web, HttpResponse};

use crate::handlers::{home, json_error::json_error, system};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home::index);
    cfg.service(system::health_check);

    cfg.service(web::scope("/api").service(home::get_home));

    // JSON 404 instead of actix's default empty body
    cfg.default_service(web::route().to(not_found));
}

async fn not_found() -> HttpResponse {
    json_error(
        StatusCode::NOT_FOUND,
        "Not found",
        "The requested resource does not exist",
    )
}
