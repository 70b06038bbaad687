pub mod presentation_handlers;
pub mod slide_handlers;

use actix_web::{HttpResponse, web};

/// GET / - Liveness probe.
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Configure API routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/presentations")
            .route("", web::get().to(presentation_handlers::list))
            .route("", web::post().to(presentation_handlers::create))
            .route("/{title}", web::get().to(presentation_handlers::read))
            .route(
                "/{title}",
                web::put().to(presentation_handlers::update_authors),
            )
            .route("/{title}", web::delete().to(presentation_handlers::delete))
            .route("/{title}/slides", web::post().to(slide_handlers::append))
            .route(
                "/{title}/slides/{index}",
                web::put().to(slide_handlers::replace),
            )
            .route(
                "/{title}/slides/{index}",
                web::delete().to(slide_handlers::remove),
            ),
    );
}
