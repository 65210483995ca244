use super::BlogStore;
use crate::{
    error::{StoreError, StoreResult},
    models::{comment, post, user, Comment, Post, User, UserModel},
};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, SqlErr, TransactionTrait,
};

impl BlogStore {
    /// Register a user. Returns the generated id, or `Conflict` when the
    /// username or email is already taken.
    pub async fn add_user(&self, username: &str, email: &str) -> StoreResult<i32> {
        let db = self.open("add_user").await?;
        let result = insert_user(&db, username, email).await;
        Self::finish("add_user", db, result).await
    }

    pub async fn get_user(&self, id: i32) -> StoreResult<UserModel> {
        let db = self.open("get_user").await?;
        let result = find_user(&db, id).await;
        Self::finish("get_user", db, result).await
    }

    /// Delete a user together with their posts and every comment on those posts.
    ///
    /// Refused with `Conflict` while the user still has comments on posts by
    /// other authors, since those rows would outlive their author.
    pub async fn delete_user(&self, id: i32) -> StoreResult<()> {
        let db = self.open("delete_user").await?;
        let result = remove_user(&db, id).await;
        Self::finish("delete_user", db, result).await
    }
}

async fn insert_user(db: &DatabaseConnection, username: &str, email: &str) -> StoreResult<i32> {
    let txn = db.begin().await?;

    let new_user = user::ActiveModel {
        username: Set(username.to_string()),
        email: Set(email.to_string()),
        ..Default::default()
    };

    let id = User::insert(new_user)
        .exec(&txn)
        .await
        .map_err(|e| StoreError::classify("user", e))?
        .last_insert_id;

    txn.commit().await?;
    tracing::info!("User '{}' added with id {}", username, id);
    Ok(id)
}

async fn find_user(db: &DatabaseConnection, id: i32) -> StoreResult<UserModel> {
    User::find_by_id(id)
        .one(db)
        .await?
        .ok_or(StoreError::not_found("user", id))
}

async fn remove_user(db: &DatabaseConnection, id: i32) -> StoreResult<()> {
    let txn = db.begin().await?;

    super::ensure_exists::<User, _>(&txn, "user", id).await?;

    let stranded = Comment::find()
        .inner_join(Post)
        .filter(comment::Column::UserId.eq(id))
        .filter(post::Column::UserId.ne(id))
        .count(&txn)
        .await?;
    if stranded > 0 {
        return Err(StoreError::Conflict {
            entity: "user",
            detail: format!(
                "user {} still has {} comment(s) on posts by other authors",
                id, stranded
            ),
        });
    }

    User::delete_by_id(id)
        .exec(&txn)
        .await
        .map_err(delete_error)?;

    txn.commit().await?;
    tracing::info!("User {} deleted with their posts", id);
    Ok(())
}

fn delete_error(err: DbErr) -> StoreError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => StoreError::Conflict {
            entity: "user",
            detail,
        },
        _ => StoreError::Storage(err),
    }
}
