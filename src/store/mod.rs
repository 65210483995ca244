//! The blog store: schema lifecycle and data access for users, categories,
//! posts and comments.
//!
//! A [`BlogStore`] only holds configuration. Each public operation opens its own
//! single-connection handle, does its work (writes inside a transaction) and
//! closes the handle before returning, whatever the outcome.

use crate::{
    config::DatabaseConfig,
    error::{StoreError, StoreResult},
    models::{Category, Comment, Post, User},
    schema,
};
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, EntityTrait, PaginatorTrait, PrimaryKeyTrait,
};
use serde::Serialize;

mod categories;
mod comments;
mod posts;
mod queries;
mod users;

pub use queries::{PostThread, PostWithAuthor, ThreadComment, UserActivity};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub users: u64,
    pub categories: u64,
    pub posts: u64,
    pub comments: u64,
}

#[derive(Debug, Clone)]
pub struct BlogStore {
    config: DatabaseConfig,
}

impl BlogStore {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Self {
        Self::new(DatabaseConfig::from_env())
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Ensure all four tables exist. Safe to call any number of times; existing
    /// rows are never touched.
    pub async fn initialize(&self) -> StoreResult<()> {
        let db = self.open("initialize").await?;
        let result = schema::initialize(&db).await.map_err(StoreError::from);

        if let Ok(created) = &result {
            if created.is_empty() {
                tracing::info!("Blog schema already present");
            } else {
                tracing::info!("Blog schema created: {}", created.join(", "));
            }
        }

        Self::finish("initialize", db, result.map(|_| ())).await
    }

    pub async fn stats(&self) -> StoreResult<StoreStats> {
        let db = self.open("stats").await?;
        let result = count_rows(&db).await;
        Self::finish("stats", db, result).await
    }

    async fn open(&self, operation: &str) -> StoreResult<DatabaseConnection> {
        let db = Database::connect(self.config.connect_options())
            .await
            .map_err(|e| {
                let err = StoreError::Storage(e);
                err.log(operation);
                err
            })?;

        // Per-connection setting in SQLite; the cascades depend on it.
        if let Err(e) = db.execute_unprepared("PRAGMA foreign_keys = ON").await {
            return Self::finish(operation, db, Err(StoreError::Storage(e))).await;
        }

        tracing::debug!("{}: storage handle opened", operation);
        Ok(db)
    }

    /// Close the handle, then report the operation's outcome.
    async fn finish<T>(
        operation: &str,
        db: DatabaseConnection,
        result: StoreResult<T>,
    ) -> StoreResult<T> {
        match db.close().await {
            Ok(()) => tracing::debug!("{}: storage handle closed", operation),
            Err(e) => tracing::warn!("{}: failed to close storage handle: {}", operation, e),
        }

        if let Err(e) = &result {
            e.log(operation);
        }
        result
    }
}

async fn count_rows(db: &DatabaseConnection) -> StoreResult<StoreStats> {
    Ok(StoreStats {
        users: User::find().count(db).await?,
        categories: Category::find().count(db).await?,
        posts: Post::find().count(db).await?,
        comments: Comment::find().count(db).await?,
    })
}

/// Fail with `NotFound` unless a row of `E` with this id exists.
async fn ensure_exists<E, C>(conn: &C, entity: &'static str, id: i32) -> StoreResult<()>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
    C: ConnectionTrait,
{
    match E::find_by_id(id).one(conn).await? {
        Some(_) => Ok(()),
        None => Err(StoreError::not_found(entity, id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbErr;

    #[tokio::test]
    async fn finish_closes_handle_and_keeps_error() {
        let db = Database::connect("sqlite::memory:").await.unwrap();

        let result: StoreResult<()> = BlogStore::finish(
            "test",
            db,
            Err(StoreError::Storage(DbErr::Custom("pragma rejected".to_string()))),
        )
        .await;

        match result {
            Err(StoreError::Storage(DbErr::Custom(msg))) => assert_eq!(msg, "pragma rejected"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn finish_passes_success_through() {
        let db = Database::connect("sqlite::memory:").await.unwrap();

        let result = BlogStore::finish("test", db, Ok(7)).await;
        assert_eq!(result.unwrap(), 7);
    }
}
