#![allow(dead_code)]

use blogstore::{BlogStore, DatabaseConfig};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection};
use std::ops::Deref;
use tempfile::TempDir;

/// A store over a fresh SQLite file. The directory is removed on drop.
pub struct TestStore {
    pub store: BlogStore,
    pub dir: TempDir,
}

impl Deref for TestStore {
    type Target = BlogStore;

    fn deref(&self) -> &BlogStore {
        &self.store
    }
}

pub fn sqlite_url(dir: &TempDir, file: &str) -> String {
    format!("sqlite://{}?mode=rwc", dir.path().join(file).display())
}

/// A store over an empty file; `initialize` has not run yet.
pub fn spawn_bare_store() -> TestStore {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = BlogStore::new(DatabaseConfig::new(sqlite_url(&dir, "blog.db")));
    TestStore { store, dir }
}

pub async fn spawn_store() -> TestStore {
    let test_store = spawn_bare_store();
    test_store
        .initialize()
        .await
        .expect("Failed to initialize schema");
    test_store
}

/// A direct connection to the store's file, for setup the public API does not offer.
pub async fn raw_connection(store: &BlogStore) -> DatabaseConnection {
    Database::connect(store.config().url.as_str())
        .await
        .expect("Failed to open raw connection")
}

/// Run one statement on a short-lived raw connection.
pub async fn execute_sql(store: &BlogStore, sql: &str) {
    let db = raw_connection(store).await;
    db.execute_unprepared(sql)
        .await
        .expect("Failed to execute statement");
    db.close().await.expect("Failed to close raw connection");
}

/// Add a user named `username` with a matching email; returns the id.
pub async fn create_test_user(store: &BlogStore, username: &str) -> i32 {
    store
        .add_user(username, &format!("{}@test.com", username))
        .await
        .expect("Failed to add user")
}

pub async fn create_test_category(store: &BlogStore, name: &str) -> i32 {
    store
        .add_category(name, None)
        .await
        .expect("Failed to add category")
}

pub async fn create_test_post(store: &BlogStore, title: &str, author_id: i32, category_id: i32) -> i32 {
    store
        .create_post(title, "Test content", author_id, category_id)
        .await
        .expect("Failed to create post")
}
