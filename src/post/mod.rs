pub mod post_controller;
pub mod post_index;
pub mod post_model;
pub mod post_service;
pub mod post_store;
