use actix_web::{HttpResponse, web};

use crate::api::SlideRequest;
use crate::errors::AppError;
use crate::models::slides::SlideManager;

/// POST /api/presentations/{title}/slides - Append a slide.
pub async fn append(
    manager: web::Data<SlideManager>,
    path: web::Path<String>,
    body: web::Json<SlideRequest>,
) -> Result<HttpResponse, AppError> {
    let title = path.into_inner();
    let updated = manager.append(&title, &body.topic, &body.body).await?;
    Ok(HttpResponse::Created().json(updated))
}

/// PUT /api/presentations/{title}/slides/{index} - Replace the slide at
/// the given index.
pub async fn replace(
    manager: web::Data<SlideManager>,
    path: web::Path<(String, String)>,
    body: web::Json<SlideRequest>,
) -> Result<HttpResponse, AppError> {
    let (title, index) = path.into_inner();
    let updated = manager
        .replace_at(&title, &index, &body.topic, &body.body)
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/presentations/{title}/slides/{index} - Remove the slide
/// at the given index.
pub async fn remove(
    manager: web::Data<SlideManager>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (title, index) = path.into_inner();
    let updated = manager.remove_at(&title, &index).await?;
    Ok(HttpResponse::Ok().json(updated))
}
