use super::{ensure_exists, BlogStore};
use crate::{
    error::{StoreError, StoreResult},
    models::{comment, Comment, CommentModel, Post, User},
};
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, TransactionTrait};

impl BlogStore {
    /// Comment on a post. The post is checked before the author; the first
    /// missing one is reported as `NotFound`.
    pub async fn add_comment(&self, text: &str, post_id: i32, author_id: i32) -> StoreResult<i32> {
        let db = self.open("add_comment").await?;
        let result = insert_comment(&db, text, post_id, author_id).await;
        Self::finish("add_comment", db, result).await
    }

    pub async fn get_comment(&self, id: i32) -> StoreResult<CommentModel> {
        let db = self.open("get_comment").await?;
        let result = Comment::find_by_id(id)
            .one(&db)
            .await
            .map_err(StoreError::from)
            .and_then(|found| found.ok_or(StoreError::not_found("comment", id)));
        Self::finish("get_comment", db, result).await
    }
}

async fn insert_comment(
    db: &DatabaseConnection,
    text: &str,
    post_id: i32,
    author_id: i32,
) -> StoreResult<i32> {
    let txn = db.begin().await?;

    ensure_exists::<Post, _>(&txn, "post", post_id).await?;
    ensure_exists::<User, _>(&txn, "user", author_id).await?;

    let new_comment = comment::ActiveModel {
        text: Set(text.to_string()),
        post_id: Set(post_id),
        user_id: Set(author_id),
        ..Default::default()
    };

    let id = Comment::insert(new_comment)
        .exec(&txn)
        .await
        .map_err(|e| StoreError::classify("comment", e))?
        .last_insert_id;

    txn.commit().await?;
    tracing::info!("Comment {} added to post {}", id, post_id);
    Ok(id)
}
