//! Table definitions for the blog schema.
//!
//! Every statement is `IF NOT EXISTS`, so [`initialize`] can run against a
//! fresh file or an existing one. There is no version table: the schema is
//! either present or created.

use sea_orm::{DatabaseConnection, TransactionTrait};
use sea_orm_migration::prelude::*;

mod categories;
mod comments;
mod posts;
mod users;

pub const TABLES: [&str; 4] = ["users", "categories", "posts", "comments"];

/// Create any missing tables and indexes in one transaction.
///
/// Returns the names of the tables that did not exist beforehand. On error the
/// transaction is rolled back and the store is left as it was.
pub async fn initialize(db: &DatabaseConnection) -> Result<Vec<&'static str>, DbErr> {
    let txn = db.begin().await?;

    let created = {
        let manager = SchemaManager::new(&txn);

        let mut missing = Vec::new();
        for table in TABLES {
            if !manager.has_table(table).await? {
                missing.push(table);
            }
        }

        // Parents before children so the foreign keys resolve.
        users::create(&manager).await?;
        categories::create(&manager).await?;
        posts::create(&manager).await?;
        comments::create(&manager).await?;

        missing
    };

    txn.commit().await?;
    Ok(created)
}

fn primary_key<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

/// `DATETIME DEFAULT CURRENT_TIMESTAMP`, filled in by the engine.
fn timestamp<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .custom(Alias::new("DATETIME"))
        .default(Expr::current_timestamp())
        .to_owned()
}
