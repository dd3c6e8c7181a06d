//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{FromQueryResult, Set};

use journal_core::domain::{CountryCount, PostSummary};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub country: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub image_url: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub date_created: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Row of the listing projection.
#[derive(Debug, FromQueryResult)]
pub struct SummaryRow {
    pub id: Uuid,
    pub title: String,
    pub image_url: String,
}

/// Row of the per-country aggregate.
#[derive(Debug, FromQueryResult)]
pub struct CountryCountRow {
    pub country: String,
    pub count: i64,
}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for journal_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            country: model.country,
            title: model.title,
            image_url: model.image_url,
            content: model.content,
            date_created: model.date_created,
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<journal_core::domain::Post> for ActiveModel {
    fn from(post: journal_core::domain::Post) -> Self {
        Self {
            id: Set(post.id),
            country: Set(post.country),
            title: Set(post.title),
            image_url: Set(post.image_url),
            content: Set(post.content),
            date_created: Set(post.date_created),
        }
    }
}

impl From<SummaryRow> for PostSummary {
    fn from(row: SummaryRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            image_url: row.image_url,
        }
    }
}

impl From<CountryCountRow> for CountryCount {
    fn from(row: CountryCountRow) -> Self {
        Self {
            country: row.country,
            count: u64::try_from(row.count).unwrap_or_default(),
        }
    }
}
