//! Application state - shared across all handlers.

use std::sync::Arc;

use journal_core::PostService;
use journal_core::ports::PostRepository;
use journal_infra::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use journal_infra::PostgresPostRepository;

use crate::views::Views;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub views: Arc<Views>,
    /// Which post store backs this process ("postgres" or "memory").
    pub store: &'static str,
}

impl AppState {
    /// Build the application state with the configured post store.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> anyhow::Result<Self> {
        let (repo, store) = Self::post_store(db_config).await?;
        let state = Self::with_repository(repo, store)?;

        tracing::info!(store, "Application state initialized");
        Ok(state)
    }

    /// Assemble the state around an already built repository.
    pub fn with_repository(
        repo: Arc<dyn PostRepository>,
        store: &'static str,
    ) -> Result<Self, ramhorns::Error> {
        Ok(Self {
            posts: PostService::new(repo),
            views: Arc::new(Views::load()?),
            store,
        })
    }

    #[cfg(feature = "postgres")]
    async fn post_store(
        db_config: Option<&DatabaseConfig>,
    ) -> anyhow::Result<(Arc<dyn PostRepository>, &'static str)> {
        match db_config {
            Some(config) => {
                let conn = journal_infra::database::connect(config).await?;
                Ok((Arc::new(PostgresPostRepository::new(conn)), "postgres"))
            }
            None => {
                tracing::warn!("DATABASE_URL not set. Posts are kept in memory only.");
                Ok((Arc::new(InMemoryPostRepository::new()), "memory"))
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn post_store(
        db_config: Option<&DatabaseConfig>,
    ) -> anyhow::Result<(Arc<dyn PostRepository>, &'static str)> {
        if db_config.is_some() {
            tracing::warn!("Built without the postgres feature - ignoring DATABASE_URL");
        }
        tracing::info!("Using in-memory post store");
        Ok((Arc::new(InMemoryPostRepository::new()), "memory"))
    }
}
