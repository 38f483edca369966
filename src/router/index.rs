use actix_web::{Scope, web};

use crate::post::post_index::post_routes;

/// Mounts every resource under the configured path prefix.
pub fn routes(prefix: &str) -> Scope {
    web::scope(prefix).configure(post_routes)
}
