//! Blog-post CRUD HTTP API backed by a document store.

pub mod config;
pub mod database;
pub mod middleware;
pub mod post;
pub mod router;
pub mod testing;
pub mod utils;
