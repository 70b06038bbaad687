use actix_web::{App, HttpServer, middleware, web};

use slidebox::config::AppConfig;
use slidebox::models::presentation::PresentationStore;
use slidebox::models::slides::SlideManager;
use slidebox::{db, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();

    let pool = db::init_pool(&config.database_url).await;
    db::run_migrations(&pool).await;

    let store = PresentationStore::new(pool.clone());
    let slides = SlideManager::new(pool);

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(slides.clone()))
            .route("/", web::get().to(handlers::health))
            .configure(handlers::configure)
    })
    .bind(config.bind_addr.as_str())?
    .run()
    .await
}
