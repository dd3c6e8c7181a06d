use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a travel story about one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub country: String,
    pub title: String,
    pub image_url: String,
    pub content: String,
    /// Epoch milliseconds.
    pub date_created: i64,
}

impl Post {
    /// Create a new post stamped with the current time.
    pub fn new(fields: NewPost) -> Self {
        Self::created_at(fields, Utc::now().timestamp_millis())
    }

    pub fn created_at(fields: NewPost, date_created: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            country: fields.country,
            title: fields.title,
            image_url: fields.image_url,
            content: fields.content,
            date_created,
        }
    }

    /// Overwrite every field except the id.
    pub fn replace(&mut self, replacement: PostReplacement) {
        self.country = replacement.country;
        self.title = replacement.title;
        self.image_url = replacement.image_url;
        self.content = replacement.content;
        self.date_created = replacement.date_created;
    }

    /// Merge the supplied fields, leaving the rest untouched.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(country) = patch.country {
            self.country = country;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(date_created) = patch.date_created {
            self.date_created = date_created;
        }
    }

    pub fn summary(&self) -> PostSummary {
        PostSummary {
            id: self.id,
            title: self.title.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

/// Caller-supplied fields of a post being composed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPost {
    pub country: String,
    pub title: String,
    pub image_url: String,
    pub content: String,
}

/// Full replacement of a stored post. The timestamp is caller-supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostReplacement {
    pub country: String,
    pub title: String,
    pub image_url: String,
    pub content: String,
    pub date_created: i64,
}

/// Partial update: `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub country: Option<String>,
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub content: Option<String>,
    pub date_created: Option<i64>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.country.is_none()
            && self.title.is_none()
            && self.image_url.is_none()
            && self.content.is_none()
            && self.date_created.is_none()
    }
}

/// Listing projection: just enough to draw a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub id: Uuid,
    pub title: String,
    pub image_url: String,
}
