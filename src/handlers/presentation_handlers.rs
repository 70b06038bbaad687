use actix_web::{HttpResponse, web};

use crate::api::{AuthorsRequest, PresentationRequest};
use crate::errors::AppError;
use crate::models::presentation::PresentationStore;

/// POST /api/presentations - Create a presentation with no slides.
pub async fn create(
    store: web::Data<PresentationStore>,
    body: web::Json<PresentationRequest>,
) -> Result<HttpResponse, AppError> {
    let created = store.create(&body.title, &body.authors).await?;
    Ok(HttpResponse::Created().json(created))
}

/// GET /api/presentations - List all presentations.
pub async fn list(store: web::Data<PresentationStore>) -> Result<HttpResponse, AppError> {
    let all = store.list().await?;
    Ok(HttpResponse::Ok().json(all))
}

/// GET /api/presentations/{title} - Fetch a single presentation by title.
pub async fn read(
    store: web::Data<PresentationStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let title = path.into_inner();
    let found = store.get(&title).await?;
    Ok(HttpResponse::Ok().json(found))
}

/// PUT /api/presentations/{title} - Replace the author list.
pub async fn update_authors(
    store: web::Data<PresentationStore>,
    path: web::Path<String>,
    body: web::Json<AuthorsRequest>,
) -> Result<HttpResponse, AppError> {
    let title = path.into_inner();
    let updated = store.update_authors(&title, &body.authors).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/presentations/{title} - Delete a presentation and,
/// implicitly, all its slides.
pub async fn delete(
    store: web::Data<PresentationStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let title = path.into_inner();
    store.remove(&title).await?;
    Ok(HttpResponse::NoContent().finish())
}
