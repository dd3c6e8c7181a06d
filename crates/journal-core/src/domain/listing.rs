//! Pagination math and the country sidebar.

use serde::Serialize;

use super::{Post, PostSummary};
use crate::error::DomainError;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 6;

/// Number of recent posts shown next to a single post.
pub const TOP_POSTS: u64 = 5;

/// Stores take offsets and limits as signed 64-bit integers.
const MAX_WINDOW: u64 = i64::MAX as u64;

/// A validated 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: u64, size: u64) -> Result<Self, DomainError> {
        if page == 0 {
            return Err(DomainError::Validation("page must be at least 1".into()));
        }
        if size == 0 {
            return Err(DomainError::Validation("size must be at least 1".into()));
        }
        if size > MAX_WINDOW {
            return Err(DomainError::Validation(format!("size must be at most {MAX_WINDOW}")));
        }
        match (page - 1).checked_mul(size) {
            Some(skip) if skip <= MAX_WINDOW => Ok(Self { page, size }),
            _ => Err(DomainError::Validation(format!(
                "page {page} of size {size} is out of range"
            ))),
        }
    }

    /// Parse raw query-string values. Absent or empty values take the defaults.
    pub fn parse(page: Option<&str>, size: Option<&str>) -> Result<Self, DomainError> {
        let page = parse_positive("page", page, DEFAULT_PAGE)?;
        let size = parse_positive("size", size, DEFAULT_PAGE_SIZE)?;
        Self::new(page, size)
    }

    /// Records to skip before this page starts. Within `i64::MAX` for any
    /// request built through `new` or `parse`.
    pub fn skip(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.size)
    }

    /// `ceil(total / size)`.
    pub fn page_count(&self, total: u64) -> u64 {
        total.div_ceil(self.size)
    }
}

fn parse_positive(name: &str, raw: Option<&str>, default: u64) -> Result<u64, DomainError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value
            .parse::<u64>()
            .map_err(|_| DomainError::Validation(format!("{name} must be a positive integer, got '{value}'"))),
    }
}

/// Number of posts written about one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCount {
    pub country: String,
    pub count: u64,
}

/// Most popular first; equal counts fall back to the country name.
pub fn sort_by_popularity(mut counts: Vec<CountryCount>) -> Vec<CountryCount> {
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.country.cmp(&b.country)));
    counts
}

/// Everything the listing page shows.
#[derive(Debug, Clone)]
pub struct HomePage {
    pub request: PageRequest,
    pub total: u64,
    pub num_of_pages: u64,
    pub latest_posts: Vec<PostSummary>,
    pub country_counts: Vec<CountryCount>,
}

/// A post together with the "top posts" sidebar.
#[derive(Debug, Clone)]
pub struct PostDetail {
    pub post: Post,
    pub top_posts: Vec<PostSummary>,
}
