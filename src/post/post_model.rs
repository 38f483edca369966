use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Structured author name as stored in the collection.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    /// Single-string form used by the API representation.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A blog post as stored in the collection. `id` is None until the store
/// assigns one on insert and never changes afterwards.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BlogPost {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub author: Author,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl BlogPost {
    pub fn new(title: impl Into<String>, author: Author, content: impl Into<String>) -> Self {
        BlogPost {
            id: None,
            title: title.into(),
            author,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub author: Author,
    pub content: String,
}

/// Partial update payload. Author mutation is not part of the API surface.
#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Wire shape for every post returned over HTTP: exactly the keys
/// `id`, `title`, `author`, `content`. The structured author is rendered
/// as a single "firstName lastName" display string.
#[derive(Debug, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub author: String,
    pub content: String,
}

impl From<BlogPost> for PostResponse {
    fn from(post: BlogPost) -> Self {
        PostResponse {
            id: post.id.map_or_else(String::new, |id| id.to_hex()),
            title: post.title,
            author: post.author.display_name(),
            content: post.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_author() -> Author {
        Author {
            first_name: "James".to_string(),
            last_name: "Brown".to_string(),
        }
    }

    #[test]
    fn author_renders_as_single_display_string() {
        assert_eq!(sample_author().display_name(), "James Brown");
    }

    #[test]
    fn author_serializes_with_camel_case_keys() {
        let value = serde_json::to_value(sample_author()).unwrap();
        assert_eq!(value["firstName"], "James");
        assert_eq!(value["lastName"], "Brown");
    }

    #[test]
    fn response_carries_exactly_the_wire_keys() {
        let mut post = BlogPost::new("bloggo", sample_author(), "blogs");
        post.id = Some(ObjectId::new());
        let value = serde_json::to_value(PostResponse::from(post.clone())).unwrap();

        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["author", "content", "id", "title"]);
        assert_eq!(value["id"], post.id.unwrap().to_hex());
        assert_eq!(value["author"], "James Brown");
    }
}
