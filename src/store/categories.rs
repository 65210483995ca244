use super::BlogStore;
use crate::{
    error::{StoreError, StoreResult},
    models::{category, Category, CategoryModel},
};
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, TransactionTrait};

impl BlogStore {
    /// Create a category. Names are unique; a duplicate yields `Conflict`.
    pub async fn add_category(&self, name: &str, description: Option<&str>) -> StoreResult<i32> {
        let db = self.open("add_category").await?;
        let result = insert_category(&db, name, description).await;
        Self::finish("add_category", db, result).await
    }

    pub async fn get_category(&self, id: i32) -> StoreResult<CategoryModel> {
        let db = self.open("get_category").await?;
        let result = Category::find_by_id(id)
            .one(&db)
            .await
            .map_err(StoreError::from)
            .and_then(|found| found.ok_or(StoreError::not_found("category", id)));
        Self::finish("get_category", db, result).await
    }
}

async fn insert_category(
    db: &DatabaseConnection,
    name: &str,
    description: Option<&str>,
) -> StoreResult<i32> {
    let txn = db.begin().await?;

    let new_category = category::ActiveModel {
        name: Set(name.to_string()),
        description: Set(description.map(str::to_string)),
        ..Default::default()
    };

    let id = Category::insert(new_category)
        .exec(&txn)
        .await
        .map_err(|e| StoreError::classify("category", e))?
        .last_insert_id;

    txn.commit().await?;
    tracing::info!("Category '{}' added with id {}", name, id);
    Ok(id)
}
