use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub(super) enum Users {
    Table,
    Id,
    Username,
    Email,
    CreatedAt,
}

pub(super) async fn create(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    manager
        .create_table(
            Table::create()
                .table(Users::Table)
                .if_not_exists()
                .col(super::primary_key(Users::Id))
                .col(ColumnDef::new(Users::Username).text().not_null().unique_key())
                .col(ColumnDef::new(Users::Email).text().not_null().unique_key())
                .col(super::timestamp(Users::CreatedAt))
                .to_owned(),
        )
        .await
}
