//! PostgreSQL post repository.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use journal_core::domain::{CountryCount, Post, PostPatch, PostReplacement, PostSummary};
use journal_core::error::RepoError;
use journal_core::ports::PostRepository;

use super::entity::post::{self, CountryCountRow, Entity as PostEntity, SummaryRow};
use super::postgres_base::{PostgresBaseRepository, repo_err};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// Must match the expression of the GIN index created by the migration.
const SEARCH_MATCH: &str = "to_tsvector('english', country || ' ' || title || ' ' || content) \
     @@ plainto_tsquery('english', $1)";

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn count(&self) -> Result<u64, RepoError> {
        PostEntity::find().count(&self.db).await.map_err(repo_err)
    }

    async fn latest(&self, skip: u64, limit: u64) -> Result<Vec<PostSummary>, RepoError> {
        tracing::debug!(skip, limit, "Loading latest posts");

        let rows = PostEntity::find()
            .select_only()
            .columns([post::Column::Id, post::Column::Title, post::Column::ImageUrl])
            .order_by_desc(post::Column::DateCreated)
            .order_by_asc(post::Column::Id)
            .offset(skip)
            .limit(limit)
            .into_model::<SummaryRow>()
            .all(&self.db)
            .await
            .map_err(repo_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn country_counts(&self) -> Result<Vec<CountryCount>, RepoError> {
        let rows = PostEntity::find()
            .select_only()
            .column(post::Column::Country)
            .column_as(post::Column::Id.count(), "count")
            .group_by(post::Column::Country)
            .into_model::<CountryCountRow>()
            .all(&self.db)
            .await
            .map_err(repo_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn search(&self, query: &str) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(query, "Full-text post search");

        let result = PostEntity::find()
            .filter(Expr::cust_with_values(SEARCH_MATCH, [query.to_owned()]))
            .order_by_desc(post::Column::DateCreated)
            .all(&self.db)
            .await
            .map_err(repo_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_country(&self, country: &str) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::Country.eq(country))
            .order_by_desc(post::Column::DateCreated)
            .all(&self.db)
            .await
            .map_err(repo_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn replace(&self, id: Uuid, replacement: PostReplacement) -> Result<Post, RepoError> {
        let active = post::ActiveModel {
            id: Set(id),
            country: Set(replacement.country),
            title: Set(replacement.title),
            image_url: Set(replacement.image_url),
            content: Set(replacement.content),
            date_created: Set(replacement.date_created),
        };

        // Updating a missing row surfaces as RecordNotUpdated.
        let model = active.update(&self.db).await.map_err(repo_err)?;
        Ok(model.into())
    }

    async fn patch(&self, id: Uuid, patch: PostPatch) -> Result<Post, RepoError> {
        let model = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(repo_err)?
            .ok_or(RepoError::NotFound)?;

        let mut active: post::ActiveModel = model.into();
        if let Some(country) = patch.country {
            active.country = Set(country);
        }
        if let Some(title) = patch.title {
            active.title = Set(title);
        }
        if let Some(image_url) = patch.image_url {
            active.image_url = Set(image_url);
        }
        if let Some(content) = patch.content {
            active.content = Set(content);
        }
        if let Some(date_created) = patch.date_created {
            active.date_created = Set(date_created);
        }

        let model = active.update(&self.db).await.map_err(repo_err)?;
        Ok(model.into())
    }
}
