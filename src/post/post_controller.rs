use actix_web::{HttpResponse, web};
use mongodb::bson::oid::ObjectId;

use crate::post::post_model::{BlogPost, CreatePostRequest, PostResponse, UpdatePostRequest};
use crate::post::post_store::BlogStore;
use crate::utils::error::ApiError;

fn parse_object_id(raw: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw).map_err(|_| ApiError::Validation(format!("invalid post id: {raw}")))
}

/// GET {prefix} — every post as a bare array, 200 even when empty.
pub async fn list_posts(store: web::Data<dyn BlogStore>) -> Result<HttpResponse, ApiError> {
    let posts = store.find_all().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(PostResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// POST {prefix} — 201 with the created record including its generated id.
pub async fn create_post(
    store: web::Data<dyn BlogStore>,
    payload: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    let post = BlogPost::new(payload.title, payload.author, payload.content);

    let mut inserted = store.insert_many(vec![post]).await?;
    let created = inserted.pop().ok_or(ApiError::StoreUnavailable)?;

    Ok(HttpResponse::Created().json(PostResponse::from(created)))
}

/// PUT {prefix}/{id} — applies the provided fields, 204 on success, 404 when
/// the id matches nothing.
pub async fn update_post(
    store: web::Data<dyn BlogStore>,
    post_id: web::Path<String>,
    payload: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_object_id(&post_id)?;
    let payload = payload.into_inner();

    let matched = store.update_by_id(id, payload.title, payload.content).await?;
    if !matched {
        return Err(ApiError::NotFound(format!("no post with id {id}")));
    }

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE {prefix}/{id} — 204 whether or not the record existed.
pub async fn delete_post(
    store: web::Data<dyn BlogStore>,
    post_id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_object_id(&post_id)?;
    store.delete_by_id(id).await?;

    Ok(HttpResponse::NoContent().finish())
}
