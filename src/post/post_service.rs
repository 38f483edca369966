use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::error;
use mongodb::{
    Client, Collection,
    bson::{doc, oid::ObjectId},
};

use crate::post::post_model::BlogPost;
use crate::post::post_store::BlogStore;
use crate::utils::error::ApiError;

/// MongoDB-backed `BlogStore` over the `posts` collection.
pub struct MongoBlogStore {
    collection: Collection<BlogPost>,
}

impl MongoBlogStore {
    pub fn new(client: &Client, database: &str) -> Self {
        let collection = client.database(database).collection::<BlogPost>("posts");
        MongoBlogStore { collection }
    }
}

#[async_trait]
impl BlogStore for MongoBlogStore {
    async fn insert_many(&self, mut records: Vec<BlogPost>) -> Result<Vec<BlogPost>, ApiError> {
        for record in &mut records {
            record.id = Some(ObjectId::new());
        }

        self.collection.insert_many(&records).await.map_err(|e| {
            error!("insert_many failed: {e}");
            ApiError::StoreUnavailable
        })?;

        Ok(records)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<BlogPost>, ApiError> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| {
                error!("find_by_id failed: {e}");
                ApiError::StoreUnavailable
            })
    }

    async fn find_one(&self) -> Result<Option<BlogPost>, ApiError> {
        self.collection.find_one(doc! {}).await.map_err(|e| {
            error!("find_one failed: {e}");
            ApiError::StoreUnavailable
        })
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, ApiError> {
        let cursor = self.collection.find(doc! {}).await.map_err(|e| {
            error!("find_all failed: {e}");
            ApiError::StoreUnavailable
        })?;

        cursor.try_collect().await.map_err(|e| {
            error!("find_all cursor failed: {e}");
            ApiError::StoreUnavailable
        })
    }

    async fn count(&self) -> Result<u64, ApiError> {
        self.collection.count_documents(doc! {}).await.map_err(|e| {
            error!("count failed: {e}");
            ApiError::StoreUnavailable
        })
    }

    async fn update_by_id(
        &self,
        id: ObjectId,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<bool, ApiError> {
        let mut set = doc! {};
        if let Some(title) = title {
            set.insert("title", title);
        }
        if let Some(content) = content {
            set.insert("content", content);
        }

        // An empty $set is rejected by the server; a field-less payload is
        // still an existence check.
        if set.is_empty() {
            return Ok(self.find_by_id(id).await?.is_some());
        }

        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": set })
            .await
            .map_err(|e| {
                error!("update_by_id failed: {e}");
                ApiError::StoreUnavailable
            })?;

        Ok(result.matched_count > 0)
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<(), ApiError> {
        self.collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| {
                error!("delete_by_id failed: {e}");
                ApiError::StoreUnavailable
            })?;

        Ok(())
    }

    async fn drop_all(&self) -> Result<(), ApiError> {
        self.collection.delete_many(doc! {}).await.map_err(|e| {
            error!("drop_all failed: {e}");
            ApiError::StoreUnavailable
        })?;

        Ok(())
    }
}
