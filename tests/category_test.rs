mod common;

use blogstore::StoreError;

#[tokio::test]
async fn add_category_with_and_without_description() {
    let store = common::spawn_store().await;

    let tech = store.add_category("Tech", None).await.unwrap();
    let design = store
        .add_category("Design", Some("UI/UX design and graphics"))
        .await
        .unwrap();

    assert_eq!(tech, 1);
    assert_eq!(store.get_category(tech).await.unwrap().description, None);
    assert_eq!(
        store.get_category(design).await.unwrap().description.as_deref(),
        Some("UI/UX design and graphics")
    );
}

#[tokio::test]
async fn duplicate_category_name_is_conflict() {
    let store = common::spawn_store().await;
    store.add_category("Tech", None).await.unwrap();

    let err = store
        .add_category("Tech", Some("different description"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Conflict { entity: "category", .. }));
    assert_eq!(store.stats().await.unwrap().categories, 1);
}

#[tokio::test]
async fn get_missing_category_is_not_found() {
    let store = common::spawn_store().await;

    let err = store.get_category(3).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { entity: "category", id: 3 }));
}
