use sea_orm_migration::prelude::*;

use super::posts::Posts;
use super::users::Users;

#[derive(DeriveIden)]
enum Comments {
    Table,
    Id,
    Text,
    PostId,
    UserId,
    CreatedAt,
}

pub(super) async fn create(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    manager
        .create_table(
            Table::create()
                .table(Comments::Table)
                .if_not_exists()
                .col(super::primary_key(Comments::Id))
                .col(ColumnDef::new(Comments::Text).text().not_null())
                .col(ColumnDef::new(Comments::PostId).integer().not_null())
                .col(ColumnDef::new(Comments::UserId).integer().not_null())
                .col(super::timestamp(Comments::CreatedAt))
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_comments_post_id")
                        .from(Comments::Table, Comments::PostId)
                        .to(Posts::Table, Posts::Id)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                // No action on user delete: see `BlogStore::delete_user`.
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_comments_user_id")
                        .from(Comments::Table, Comments::UserId)
                        .to(Users::Table, Users::Id),
                )
                .to_owned(),
        )
        .await?;

    manager
        .create_index(
            Index::create()
                .name("idx_comments_post_id")
                .table(Comments::Table)
                .col(Comments::PostId)
                .if_not_exists()
                .to_owned(),
        )
        .await?;

    manager
        .create_index(
            Index::create()
                .name("idx_comments_user_id")
                .table(Comments::Table)
                .col(Comments::UserId)
                .if_not_exists()
                .to_owned(),
        )
        .await
}
