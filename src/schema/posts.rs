use sea_orm_migration::prelude::*;

use super::categories::Categories;
use super::users::Users;

#[derive(DeriveIden)]
pub(super) enum Posts {
    Table,
    Id,
    Title,
    Content,
    UserId,
    CategoryId,
    CreatedAt,
    UpdatedAt,
}

pub(super) async fn create(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    manager
        .create_table(
            Table::create()
                .table(Posts::Table)
                .if_not_exists()
                .col(super::primary_key(Posts::Id))
                .col(ColumnDef::new(Posts::Title).text().not_null())
                .col(ColumnDef::new(Posts::Content).text().not_null())
                .col(ColumnDef::new(Posts::UserId).integer().not_null())
                .col(ColumnDef::new(Posts::CategoryId).integer().not_null())
                .col(super::timestamp(Posts::CreatedAt))
                .col(super::timestamp(Posts::UpdatedAt))
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_posts_user_id")
                        .from(Posts::Table, Posts::UserId)
                        .to(Users::Table, Users::Id)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_posts_category_id")
                        .from(Posts::Table, Posts::CategoryId)
                        .to(Categories::Table, Categories::Id),
                )
                .to_owned(),
        )
        .await?;

    manager
        .create_index(
            Index::create()
                .name("idx_posts_user_id")
                .table(Posts::Table)
                .col(Posts::UserId)
                .if_not_exists()
                .to_owned(),
        )
        .await?;

    manager
        .create_index(
            Index::create()
                .name("idx_posts_category_id")
                .table(Posts::Table)
                .col(Posts::CategoryId)
                .if_not_exists()
                .to_owned(),
        )
        .await
}
