use super::{ensure_exists, BlogStore};
use crate::{
    error::{StoreError, StoreResult},
    models::{post, Category, Post, PostModel, User},
};
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, TransactionTrait};

impl BlogStore {
    /// Publish a post.
    ///
    /// The author and the category are looked up first; if either is missing the
    /// call fails with `NotFound` naming it and nothing is written. Both
    /// timestamps come from the column defaults.
    pub async fn create_post(
        &self,
        title: &str,
        content: &str,
        author_id: i32,
        category_id: i32,
    ) -> StoreResult<i32> {
        let db = self.open("create_post").await?;
        let result = insert_post(&db, title, content, author_id, category_id).await;
        Self::finish("create_post", db, result).await
    }

    pub async fn get_post(&self, id: i32) -> StoreResult<PostModel> {
        let db = self.open("get_post").await?;
        let result = Post::find_by_id(id)
            .one(&db)
            .await
            .map_err(StoreError::from)
            .and_then(|found| found.ok_or(StoreError::not_found("post", id)));
        Self::finish("get_post", db, result).await
    }
}

async fn insert_post(
    db: &DatabaseConnection,
    title: &str,
    content: &str,
    author_id: i32,
    category_id: i32,
) -> StoreResult<i32> {
    let txn = db.begin().await?;

    ensure_exists::<User, _>(&txn, "user", author_id).await?;
    ensure_exists::<Category, _>(&txn, "category", category_id).await?;

    let new_post = post::ActiveModel {
        title: Set(title.to_string()),
        content: Set(content.to_string()),
        user_id: Set(author_id),
        category_id: Set(category_id),
        ..Default::default()
    };

    let id = Post::insert(new_post)
        .exec(&txn)
        .await
        .map_err(|e| StoreError::classify("post", e))?
        .last_insert_id;

    txn.commit().await?;
    tracing::info!("Post '{}' created with id {}", title, id);
    Ok(id)
}
