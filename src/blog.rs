//! Blog documents and the payloads used to create and update them.

use serde::{Deserialize, Serialize};

/// A stored blog document. Serialized with its identifier under `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blog {
    #[serde(default, alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub url: String,
    #[serde(default)]
    pub likes: i64,
}

impl Blog {
    /// Borrowed view consumed by the aggregator.
    pub fn record(&self) -> BlogRecord<'_> {
        BlogRecord {
            title: &self.title,
            author: self.author.as_deref(),
            url: &self.url,
            likes: self.likes,
        }
    }

    /// Overwrite the fields present in `update`.
    pub fn apply(&mut self, update: BlogUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(author) = update.author {
            self.author = Some(author);
        }
        if let Some(url) = update.url {
            self.url = url;
        }
        if let Some(likes) = update.likes {
            self.likes = likes;
        }
    }
}

/// Metadata of a single post as seen by the aggregation functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogRecord<'a> {
    pub title: &'a str,
    pub author: Option<&'a str>,
    pub url: &'a str,
    pub likes: i64,
}

/// Create payload. Every field is optional on the wire; see [`NewBlog::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBlog {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub likes: Option<i64>,
}

/// A create payload that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidBlog {
    pub title: String,
    pub author: Option<String>,
    pub url: String,
    pub likes: i64,
}

impl ValidBlog {
    pub fn into_blog(self, id: String) -> Blog {
        Blog {
            id,
            title: self.title,
            author: self.author,
            url: self.url,
            likes: self.likes,
        }
    }
}

impl NewBlog {
    /// Title and url must both be present and non-empty. Missing likes become 0.
    pub fn validate(self) -> Option<ValidBlog> {
        let title = self.title.filter(|t| !t.is_empty())?;
        let url = self.url.filter(|u| !u.is_empty())?;
        Some(ValidBlog {
            title,
            author: self.author,
            url,
            likes: self.likes.unwrap_or(0),
        })
    }
}

/// Update payload. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub likes: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validate_defaults_missing_likes_to_zero() {
        let payload: NewBlog = serde_json::from_value(json!({
            "title": "microsoft learn",
            "author": "microsoft",
            "url": "learn.microsoft.com"
        }))
        .unwrap();

        let valid = payload.validate().unwrap();
        assert_eq!(valid.likes, 0);
        assert_eq!(valid.author.as_deref(), Some("microsoft"));
    }

    #[test]
    fn validate_rejects_missing_or_empty_title_and_url() {
        let no_title = NewBlog {
            url: Some("google.com".to_string()),
            ..Default::default()
        };
        assert!(no_title.validate().is_none());

        let no_url = NewBlog {
            title: Some("Node.js Blog".to_string()),
            ..Default::default()
        };
        assert!(no_url.validate().is_none());

        let empty_title = NewBlog {
            title: Some(String::new()),
            url: Some("x.io".to_string()),
            ..Default::default()
        };
        assert!(empty_title.validate().is_none());
    }

    #[test]
    fn blog_serializes_id_not_underscore_id() {
        let blog = Blog {
            id: "65a1f0c2e4b0a1b2c3d4e5f6".to_string(),
            title: "t".to_string(),
            author: None,
            url: "u".to_string(),
            likes: 3,
        };
        let value = serde_json::to_value(&blog).unwrap();
        assert_eq!(value["id"], "65a1f0c2e4b0a1b2c3d4e5f6");
        assert!(value.get("_id").is_none());
        assert!(value.get("author").is_none());
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let mut blog = Blog {
            id: "1".to_string(),
            title: "old".to_string(),
            author: Some("A".to_string()),
            url: "u".to_string(),
            likes: 1,
        };
        blog.apply(BlogUpdate {
            likes: Some(6),
            ..Default::default()
        });

        assert_eq!(blog.title, "old");
        assert_eq!(blog.author.as_deref(), Some("A"));
        assert_eq!(blog.likes, 6);
    }
}
