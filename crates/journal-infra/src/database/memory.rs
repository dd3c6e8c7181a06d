//! In-memory post store - used when no database is configured, and in tests.

use std::collections::{BTreeMap, HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use journal_core::domain::{CountryCount, Post, PostPatch, PostReplacement, PostSummary};
use journal_core::error::RepoError;
use journal_core::ports::{BaseRepository, PostRepository};

/// Post store backed by a `HashMap` behind an async `RwLock`.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    /// Newest first. Equal timestamps are ordered by id so paging is stable.
    fn newest_first(mut posts: Vec<Post>) -> Vec<Post> {
        posts.sort_by(|a, b| {
            b.date_created
                .cmp(&a.date_created)
                .then_with(|| a.id.cmp(&b.id))
        });
        posts
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercased alphanumeric words.
fn terms(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
}

fn matches_any(post: &Post, wanted: &HashSet<String>) -> bool {
    [&post.country, &post.title, &post.content]
        .into_iter()
        .flat_map(|field| terms(field))
        .any(|term| wanted.contains(&term))
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn create(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.store.read().await.len() as u64)
    }

    async fn latest(&self, skip: u64, limit: u64) -> Result<Vec<PostSummary>, RepoError> {
        let posts: Vec<Post> = self.store.read().await.values().cloned().collect();
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(Self::newest_first(posts)
            .iter()
            .skip(skip)
            .take(limit)
            .map(Post::summary)
            .collect())
    }

    async fn country_counts(&self) -> Result<Vec<CountryCount>, RepoError> {
        let store = self.store.read().await;
        let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
        for post in store.values() {
            *counts.entry(post.country.as_str()).or_default() += 1;
        }

        Ok(counts
            .into_iter()
            .map(|(country, count)| CountryCount {
                country: country.to_owned(),
                count,
            })
            .collect())
    }

    async fn search(&self, query: &str) -> Result<Vec<Post>, RepoError> {
        let wanted: HashSet<String> = terms(query).collect();
        if wanted.is_empty() {
            return Ok(Vec::new());
        }

        let store = self.store.read().await;
        let found = store
            .values()
            .filter(|post| matches_any(post, &wanted))
            .cloned()
            .collect();
        Ok(Self::newest_first(found))
    }

    async fn find_by_country(&self, country: &str) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let found = store
            .values()
            .filter(|post| post.country == country)
            .cloned()
            .collect();
        Ok(Self::newest_first(found))
    }

    async fn replace(&self, id: Uuid, replacement: PostReplacement) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let post = store.get_mut(&id).ok_or(RepoError::NotFound)?;
        post.replace(replacement);
        Ok(post.clone())
    }

    async fn patch(&self, id: Uuid, patch: PostPatch) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let post = store.get_mut(&id).ok_or(RepoError::NotFound)?;
        post.apply(patch);
        Ok(post.clone())
    }
}
