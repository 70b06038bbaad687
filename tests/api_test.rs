//! End-to-end API tests: routing, JSON bodies, and status code mapping.
//!
//! Validation and business-rule failures must map to 4xx exactly as the
//! handlers promise: 400 for bad input, 409 for a duplicate title, 404
//! for a missing presentation or slide index.

mod common;

use actix_web::{App, test, web};
use serde_json::{Value, json};

use common::{TestDb, setup_test_db, unique_title};
use slidebox::handlers;
use slidebox::models::presentation::PresentationStore;
use slidebox::models::slides::SlideManager;

macro_rules! test_app {
    ($db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(PresentationStore::new($db.pool().clone())))
                .app_data(web::Data::new(SlideManager::new($db.pool().clone())))
                .route("/", web::get().to(handlers::health))
                .configure(handlers::configure),
        )
        .await
    };
}

#[actix_rt::test]
async fn test_health_endpoint() {
    let db: TestDb = setup_test_db().await;
    let app = test_app!(db);

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

#[actix_rt::test]
async fn test_presentation_lifecycle_over_http() {
    let db = setup_test_db().await;
    let app = test_app!(db);

    let title = unique_title("IntroToSystems");

    // Create
    let req = test::TestRequest::post()
        .uri("/api/presentations")
        .set_json(json!({ "title": title, "authors": ["A. Lee"] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], title.as_str());
    assert_eq!(body["slides"], json!([]));

    // Create again with the same title
    let req = test::TestRequest::post()
        .uri("/api/presentations")
        .set_json(json!({ "title": title, "authors": ["A. Lee"] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);

    // Append a slide
    let req = test::TestRequest::post()
        .uri(&format!("/api/presentations/{title}/slides"))
        .set_json(json!({ "topic": "Overview", "body": "Why this matters" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["slides"].as_array().expect("slides array").len(), 1);
    assert_eq!(body["slides"][0]["topic"], "Overview");

    // Remove a slide at an out-of-range index
    let req = test::TestRequest::delete()
        .uri(&format!("/api/presentations/{title}/slides/5"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    // Delete the presentation
    let req = test::TestRequest::delete()
        .uri(&format!("/api/presentations/{title}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 204);

    // Gone
    let req = test::TestRequest::get()
        .uri(&format!("/api/presentations/{title}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_rt::test]
async fn test_validation_maps_to_bad_request() {
    let db = setup_test_db().await;
    let app = test_app!(db);

    let req = test::TestRequest::post()
        .uri("/api/presentations")
        .set_json(json!({ "title": "ab", "authors": ["A. Lee"] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Validation failed");

    let req = test::TestRequest::post()
        .uri("/api/presentations")
        .set_json(json!({ "title": unique_title("NoAuthors"), "authors": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
async fn test_update_authors_over_http() {
    let db = setup_test_db().await;
    let app = test_app!(db);

    let title = unique_title("AuthorsHttp");
    let req = test::TestRequest::post()
        .uri("/api/presentations")
        .set_json(json!({ "title": title, "authors": ["A. Lee"] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let req = test::TestRequest::put()
        .uri(&format!("/api/presentations/{title}"))
        .set_json(json!({ "authors": ["B. Chen", "C. Novak"] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["authors"], json!(["B. Chen", "C. Novak"]));

    // Unknown title
    let req = test::TestRequest::put()
        .uri(&format!("/api/presentations/{}", unique_title("NeverHttp")))
        .set_json(json!({ "authors": ["B. Chen"] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_rt::test]
async fn test_replace_slide_over_http() {
    let db = setup_test_db().await;
    let app = test_app!(db);

    let title = unique_title("ReplaceHttp");
    let req = test::TestRequest::post()
        .uri("/api/presentations")
        .set_json(json!({ "title": title, "authors": ["A. Lee"] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let req = test::TestRequest::post()
        .uri(&format!("/api/presentations/{title}/slides"))
        .set_json(json!({ "topic": "Overview", "body": "Why this matters" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let req = test::TestRequest::put()
        .uri(&format!("/api/presentations/{title}/slides/0"))
        .set_json(json!({ "topic": "Revised", "body": "Second thoughts" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["slides"][0]["topic"], "Revised");

    // Malformed index is a slide-not-found, not a server error
    let req = test::TestRequest::put()
        .uri(&format!("/api/presentations/{title}/slides/abc"))
        .set_json(json!({ "topic": "Revised", "body": "Second thoughts" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}
