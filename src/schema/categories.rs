use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub(super) enum Categories {
    Table,
    Id,
    Name,
    Description,
}

pub(super) async fn create(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    manager
        .create_table(
            Table::create()
                .table(Categories::Table)
                .if_not_exists()
                .col(super::primary_key(Categories::Id))
                .col(ColumnDef::new(Categories::Name).text().not_null().unique_key())
                .col(ColumnDef::new(Categories::Description).text().null())
                .to_owned(),
        )
        .await
}
