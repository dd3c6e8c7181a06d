use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{CountryCount, Post, PostPatch, PostReplacement, PostSummary};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist a new entity.
    async fn create(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Fails with `NotFound` when nothing was removed.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository: the queries behind the listing, search and post pages.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Total number of stored posts.
    async fn count(&self) -> Result<u64, RepoError>;

    /// Newest posts first, projected to summaries.
    async fn latest(&self, skip: u64, limit: u64) -> Result<Vec<PostSummary>, RepoError>;

    /// Post count per country, in no particular order.
    async fn country_counts(&self) -> Result<Vec<CountryCount>, RepoError>;

    /// Full-text search over country, title and content.
    async fn search(&self, query: &str) -> Result<Vec<Post>, RepoError>;

    /// Posts whose country equals `country` exactly.
    async fn find_by_country(&self, country: &str) -> Result<Vec<Post>, RepoError>;

    async fn replace(&self, id: Uuid, replacement: PostReplacement) -> Result<Post, RepoError>;

    async fn patch(&self, id: Uuid, patch: PostPatch) -> Result<Post, RepoError>;
}
