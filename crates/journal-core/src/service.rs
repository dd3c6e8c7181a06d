//! Post operations behind every route.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{
    HomePage, NewPost, PageRequest, Post, PostDetail, PostPatch, PostReplacement, TOP_POSTS,
    sort_by_popularity,
};
use crate::error::DomainError;
use crate::ports::PostRepository;

/// Listing, lookup and mutation of posts on top of a [`PostRepository`].
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// One page of the newest posts plus the country sidebar.
    pub async fn home(&self, request: PageRequest) -> Result<HomePage, DomainError> {
        let total = self.repo.count().await?;
        let num_of_pages = request.page_count(total);
        let latest_posts = self.repo.latest(request.skip(), request.size).await?;
        let country_counts = sort_by_popularity(self.repo.country_counts().await?);

        Ok(HomePage {
            request,
            total,
            num_of_pages,
            latest_posts,
            country_counts,
        })
    }

    pub async fn view(&self, id: Uuid) -> Result<PostDetail, DomainError> {
        let post = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))?;
        let top_posts = self.repo.latest(0, TOP_POSTS).await?;

        Ok(PostDetail { post, top_posts })
    }

    /// Store a new post stamped with the current time.
    pub async fn create(&self, fields: NewPost) -> Result<Post, DomainError> {
        Ok(self.repo.create(Post::new(fields)).await?)
    }

    pub async fn replace(&self, id: Uuid, replacement: PostReplacement) -> Result<Post, DomainError> {
        self.repo
            .replace(id, replacement)
            .await
            .map_err(|e| DomainError::from_repo(e, id))
    }

    pub async fn patch(&self, id: Uuid, patch: PostPatch) -> Result<Post, DomainError> {
        if patch.is_empty() {
            return Err(DomainError::Validation("no fields to update".into()));
        }
        self.repo
            .patch(id, patch)
            .await
            .map_err(|e| DomainError::from_repo(e, id))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.repo
            .delete(id)
            .await
            .map_err(|e| DomainError::from_repo(e, id))
    }

    /// Keyword search. A blank query matches nothing.
    pub async fn search(&self, query: &str) -> Result<Vec<Post>, DomainError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.repo.search(query).await?)
    }

    pub async fn by_country(&self, country: &str) -> Result<Vec<Post>, DomainError> {
        Ok(self.repo.find_by_country(country).await?)
    }
}
