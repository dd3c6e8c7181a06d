//! Data Transfer Objects - request types for the routes.

use serde::{Deserialize, Serialize};

use journal_core::domain::{NewPost, PostPatch, PostReplacement};

/// `GET /?page=&size=`. Values stay raw so bad numbers can be reported as
/// validation errors instead of extractor failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingQuery {
    pub page: Option<String>,
    pub size: Option<String>,
}

/// `GET /search?q=`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// The compose form. Missing inputs arrive as empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComposeForm {
    pub post_country: String,
    pub post_title: String,
    pub post_image: String,
    pub post_body: String,
}

impl From<ComposeForm> for NewPost {
    fn from(form: ComposeForm) -> Self {
        Self {
            country: form.post_country,
            title: form.post_title,
            image_url: form.post_image,
            content: form.post_body,
        }
    }
}

/// `PUT /posts/{id}`: every field is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplacePostRequest {
    pub country: String,
    pub title: String,
    pub image_url: String,
    pub content: String,
    pub date_created: i64,
}

impl From<ReplacePostRequest> for PostReplacement {
    fn from(req: ReplacePostRequest) -> Self {
        Self {
            country: req.country,
            title: req.title,
            image_url: req.image_url,
            content: req.content,
            date_created: req.date_created,
        }
    }
}

/// `PATCH /posts/{id}`: any subset of the post fields, nothing else.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PatchPostRequest {
    pub country: Option<String>,
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub content: Option<String>,
    pub date_created: Option<i64>,
}

impl From<PatchPostRequest> for PostPatch {
    fn from(req: PatchPostRequest) -> Self {
        Self {
            country: req.country,
            title: req.title,
            image_url: req.image_url,
            content: req.content,
            date_created: req.date_created,
        }
    }
}
