mod common;

use blogstore::StoreError;

#[tokio::test]
async fn create_post_stores_all_fields() {
    let store = common::spawn_store().await;
    let author = common::create_test_user(&store, "writer").await;
    let category = common::create_test_category(&store, "Tech").await;

    let id = store
        .create_post("Title", "Body text", author, category)
        .await
        .unwrap();

    let post = store.get_post(id).await.unwrap();
    assert_eq!(post.title, "Title");
    assert_eq!(post.content, "Body text");
    assert_eq!(post.user_id, author);
    assert_eq!(post.category_id, category);
    assert_eq!(post.created_at, post.updated_at);
}

#[tokio::test]
async fn create_post_with_missing_author_is_not_found() {
    let store = common::spawn_store().await;
    let category = common::create_test_category(&store, "Tech").await;

    let err = store.create_post("T", "C", 99, category).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { entity: "user", id: 99 }));
    assert_eq!(store.stats().await.unwrap().posts, 0);
}

#[tokio::test]
async fn create_post_with_missing_category_is_not_found() {
    let store = common::spawn_store().await;
    let author = common::create_test_user(&store, "writer").await;

    let before = store.stats().await.unwrap().posts;
    let err = store.create_post("T", "C", author, 7).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { entity: "category", id: 7 }));
    assert_eq!(store.stats().await.unwrap().posts, before);
}

#[tokio::test]
async fn missing_author_reported_before_missing_category() {
    let store = common::spawn_store().await;

    let err = store.create_post("T", "C", 1, 1).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { entity: "user", .. }));
}

#[tokio::test]
async fn get_missing_post_is_not_found() {
    let store = common::spawn_store().await;

    let err = store.get_post(5).await.unwrap_err();
    assert!(err.is_not_found());
}
