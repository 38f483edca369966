use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::middleware::Logger;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};
use dotenvy::dotenv;
use env_logger::Env;
use log::info;
use serde_json::json;

use blog_api::config::Config;
use blog_api::database::db;
use blog_api::middleware::not_found::not_found;
use blog_api::post::post_index::json_config;
use blog_api::post::post_service::MongoBlogStore;
use blog_api::post::post_store::BlogStore;
use blog_api::router::index::routes;

#[get("/")]
async fn default() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Welcome to the blog API",
        "httpStatusCode": StatusCode::OK.as_u16(),
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    info!("starting server on http://localhost:{}", config.port);

    let client = db::connect(&config).await.map_err(std::io::Error::other)?;
    let store: Arc<dyn BlogStore> = Arc::new(MongoBlogStore::new(&client, &config.database_name));

    let prefix = config.api_prefix.clone();
    let port = config.port;

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(json_config())
            .app_data(web::Data::from(store.clone()))
            .service(default)
            .service(routes(&prefix))
            .default_service(web::route().to(not_found))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;

    info!("server has stopped");

    Ok(())
}
