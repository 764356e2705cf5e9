//! Request and response shapes served by the on.brand posts API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Review status as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostStatus {
    #[serde(rename = "Needs Review")]
    NeedsReview,
    #[serde(rename = "Ready to Publish")]
    ReadyToPublish,
}

impl PostStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PostStatus::NeedsReview => "Needs Review",
            PostStatus::ReadyToPublish => "Ready to Publish",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A post as returned by `GET /api/posts/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub status: PostStatus,
    pub category: String,
    pub platform: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_display_strings_on_the_wire() {
        let value = serde_json::to_value(PostStatus::ReadyToPublish).expect("serialize status");
        assert_eq!(value, serde_json::json!("Ready to Publish"));

        let parsed: PostStatus =
            serde_json::from_str("\"Needs Review\"").expect("deserialize status");
        assert_eq!(parsed, PostStatus::NeedsReview);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = serde_json::from_str::<PostStatus>("\"Rejected\"");
        assert!(err.is_err());
    }

    #[test]
    fn optional_fields_tolerate_null_and_absence() {
        let body = r#"{
            "posts": [
                {"id": 7, "title": "T", "status": "Needs Review", "category": "Product",
                 "platform": "LinkedIn", "image": null, "date": "2023-06-20T10:00:00Z"}
            ]
        }"#;
        let response: PostsResponse = serde_json::from_str(body).expect("deserialize posts");
        let post = &response.posts[0];
        assert_eq!(post.id, 7);
        assert_eq!(post.image, None);
        assert_eq!(post.content, None);
        assert_eq!(post.date.as_deref(), Some("2023-06-20T10:00:00Z"));
    }
}
