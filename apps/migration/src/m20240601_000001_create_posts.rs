use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

/// Expression index backing keyword search. The repository query must use
/// the same `to_tsvector` expression for the planner to pick it up.
const CREATE_SEARCH_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_posts_search ON posts \
     USING GIN (to_tsvector('english', country || ' ' || title || ' ' || content))";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Posts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Posts::Country).string().not_null().default(""))
                    .col(ColumnDef::new(Posts::Title).string().not_null().default(""))
                    .col(ColumnDef::new(Posts::ImageUrl).text().not_null().default(""))
                    .col(ColumnDef::new(Posts::Content).text().not_null().default(""))
                    .col(ColumnDef::new(Posts::DateCreated).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_posts_date_created")
                    .table(Posts::Table)
                    .col(Posts::DateCreated)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_posts_country")
                    .table(Posts::Table)
                    .col(Posts::Country)
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(CREATE_SEARCH_INDEX)
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
    Country,
    Title,
    ImageUrl,
    Content,
    DateCreated,
}
