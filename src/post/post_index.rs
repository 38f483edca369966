use actix_web::web;

use super::post_controller::{create_post, delete_post, list_posts, update_post};
use crate::utils::error::ApiError;

pub fn post_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_posts))
        .route("", web::post().to(create_post))
        .route("/{id}", web::put().to(update_post))
        .route("/{id}", web::delete().to(delete_post));
}

/// Malformed or incomplete JSON payloads get the standard 400 envelope
/// instead of actix's default error body.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::Validation(err.to_string()).into())
}
