//! The `BlogStore` persistence contract and its in-process implementation.
//!
//! `MongoBlogStore` in `post_service` is the production implementation;
//! `MemoryBlogStore` backs the integration suite so it runs without a live
//! `mongod`.

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::post::post_model::BlogPost;
use crate::utils::error::ApiError;

#[async_trait]
pub trait BlogStore: Send + Sync {
    /// Assigns an id to each record and persists the batch, returning the
    /// records with their ids filled in.
    async fn insert_many(&self, records: Vec<BlogPost>) -> Result<Vec<BlogPost>, ApiError>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<BlogPost>, ApiError>;

    /// Some record from the collection, no ordering guarantee. None when the
    /// collection is empty.
    async fn find_one(&self) -> Result<Option<BlogPost>, ApiError>;

    /// Every record, in store-native order.
    async fn find_all(&self) -> Result<Vec<BlogPost>, ApiError>;

    async fn count(&self) -> Result<u64, ApiError>;

    /// Applies the provided fields to the record. Returns false when no
    /// record matched the id.
    async fn update_by_id(
        &self,
        id: ObjectId,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<bool, ApiError>;

    /// Idempotent: a later `find_by_id` on the same id returns None whether
    /// or not the record existed.
    async fn delete_by_id(&self, id: ObjectId) -> Result<(), ApiError>;

    /// Removes every record. Used by test teardown, never by the request
    /// path.
    async fn drop_all(&self) -> Result<(), ApiError>;
}

/// In-process store keeping records in insertion order.
#[derive(Default)]
pub struct MemoryBlogStore {
    posts: Mutex<Vec<BlogPost>>,
}

impl MemoryBlogStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<BlogPost>>, ApiError> {
        self.posts.lock().map_err(|_| ApiError::StoreUnavailable)
    }
}

#[async_trait]
impl BlogStore for MemoryBlogStore {
    async fn insert_many(&self, mut records: Vec<BlogPost>) -> Result<Vec<BlogPost>, ApiError> {
        for record in &mut records {
            record.id = Some(ObjectId::new());
        }
        self.lock()?.extend(records.iter().cloned());
        Ok(records)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<BlogPost>, ApiError> {
        Ok(self.lock()?.iter().find(|p| p.id == Some(id)).cloned())
    }

    async fn find_one(&self) -> Result<Option<BlogPost>, ApiError> {
        Ok(self.lock()?.first().cloned())
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, ApiError> {
        Ok(self.lock()?.clone())
    }

    async fn count(&self) -> Result<u64, ApiError> {
        Ok(self.lock()?.len() as u64)
    }

    async fn update_by_id(
        &self,
        id: ObjectId,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<bool, ApiError> {
        let mut posts = self.lock()?;
        match posts.iter_mut().find(|p| p.id == Some(id)) {
            Some(post) => {
                if let Some(title) = title {
                    post.title = title;
                }
                if let Some(content) = content {
                    post.content = content;
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<(), ApiError> {
        self.lock()?.retain(|p| p.id != Some(id));
        Ok(())
    }

    async fn drop_all(&self) -> Result<(), ApiError> {
        self.lock()?.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::post_model::Author;

    fn post(title: &str) -> BlogPost {
        BlogPost::new(
            title,
            Author {
                first_name: "Fred".to_string(),
                last_name: "Weasley".to_string(),
            },
            "Loerl",
        )
    }

    #[actix_web::test]
    async fn insert_assigns_unique_stable_ids() {
        let store = MemoryBlogStore::new();
        let inserted = store
            .insert_many(vec![post("a"), post("b")])
            .await
            .unwrap();

        assert_eq!(inserted.len(), 2);
        assert!(inserted.iter().all(|p| p.id.is_some()));
        assert_ne!(inserted[0].id, inserted[1].id);

        let found = store.find_by_id(inserted[0].id.unwrap()).await.unwrap().unwrap();
        assert_eq!(found.title, "a");
    }

    #[actix_web::test]
    async fn update_touches_only_provided_fields() {
        let store = MemoryBlogStore::new();
        let inserted = store.insert_many(vec![post("a")]).await.unwrap();
        let id = inserted[0].id.unwrap();

        let matched = store
            .update_by_id(id, Some("renamed".to_string()), None)
            .await
            .unwrap();
        assert!(matched);

        let found = store.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.title, "renamed");
        assert_eq!(found.content, "Loerl");
        assert_eq!(found.id, Some(id));
    }

    #[actix_web::test]
    async fn update_on_missing_id_matches_nothing() {
        let store = MemoryBlogStore::new();
        let matched = store
            .update_by_id(ObjectId::new(), Some("x".to_string()), None)
            .await
            .unwrap();
        assert!(!matched);
    }

    #[actix_web::test]
    async fn delete_is_idempotent() {
        let store = MemoryBlogStore::new();
        let inserted = store.insert_many(vec![post("a")]).await.unwrap();
        let id = inserted[0].id.unwrap();

        store.delete_by_id(id).await.unwrap();
        assert!(store.find_by_id(id).await.unwrap().is_none());

        // deleting the same id again is not an error
        store.delete_by_id(id).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn drop_all_twice_leaves_an_empty_collection() {
        let store = MemoryBlogStore::new();
        store.insert_many(vec![post("a"), post("b")]).await.unwrap();

        store.drop_all().await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
        store.drop_all().await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn find_one_on_empty_store_is_none() {
        let store = MemoryBlogStore::new();
        assert!(store.find_one().await.unwrap().is_none());
    }
}
