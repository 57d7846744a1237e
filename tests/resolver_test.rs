//! Integration tests for slug-or-id post resolution.

use stox_site::db::{insert_post, soft_delete_post, Database, NewPost};
use stox_site::resolver::resolve_post;
use tempfile::TempDir;

async fn test_db(dir: &TempDir) -> Database {
    Database::new(&dir.path().join("test.sqlite"))
        .await
        .expect("Failed to create test database")
}

/// One record, two route keys: `/c/4` and `/c/ot-sustezaniya-do-biznes`
/// resolve to the same post, and both render paths use the slug.
#[tokio::test]
async fn test_id_and_slug_resolve_same_record() {
    let dir = TempDir::new().expect("tempdir");
    let db = test_db(&dir).await;

    insert_post(
        db.pool(),
        &NewPost {
            id: Some(4),
            slug: Some("ot-sustezaniya-do-biznes".to_string()),
            title: "От състезания до бизнес".to_string(),
            ..NewPost::default()
        },
    )
    .await
    .expect("insert post");

    let by_id = resolve_post(db.pool(), "4")
        .await
        .expect("resolve by id")
        .expect("post found by id");
    let by_slug = resolve_post(db.pool(), "ot-sustezaniya-do-biznes")
        .await
        .expect("resolve by slug")
        .expect("post found by slug");

    assert_eq!(by_id.id, by_slug.id);
    assert_eq!(by_id.canonical_path(), "/c/ot-sustezaniya-do-biznes");
    assert_eq!(by_slug.canonical_path(), "/c/ot-sustezaniya-do-biznes");
}

/// A fully numeric parameter is always an id lookup, even when some post
/// carries that number as its slug.
#[tokio::test]
async fn test_numeric_param_prefers_id_lookup() {
    let dir = TempDir::new().expect("tempdir");
    let db = test_db(&dir).await;

    insert_post(
        db.pool(),
        &NewPost {
            id: Some(10),
            title: "Пост с id десет".to_string(),
            ..NewPost::default()
        },
    )
    .await
    .expect("insert post 10");

    insert_post(
        db.pool(),
        &NewPost {
            id: Some(11),
            slug: Some("10".to_string()),
            title: "Пост със слъг десет".to_string(),
            ..NewPost::default()
        },
    )
    .await
    .expect("insert post 11");

    let resolved = resolve_post(db.pool(), "10")
        .await
        .expect("resolve")
        .expect("post found");
    assert_eq!(resolved.id, 10);
}

#[tokio::test]
async fn test_missing_post_resolves_to_none() {
    let dir = TempDir::new().expect("tempdir");
    let db = test_db(&dir).await;

    assert!(resolve_post(db.pool(), "404").await.expect("resolve").is_none());
    assert!(resolve_post(db.pool(), "nyama-takava-publikatsiya")
        .await
        .expect("resolve")
        .is_none());
}

#[tokio::test]
async fn test_soft_deleted_post_not_resolvable() {
    let dir = TempDir::new().expect("tempdir");
    let db = test_db(&dir).await;

    insert_post(
        db.pool(),
        &NewPost {
            id: Some(7),
            slug: Some("iztrita".to_string()),
            title: "Изтрита публикация".to_string(),
            ..NewPost::default()
        },
    )
    .await
    .expect("insert post");
    soft_delete_post(db.pool(), 7).await.expect("soft delete");

    assert!(resolve_post(db.pool(), "7").await.expect("resolve").is_none());
    assert!(resolve_post(db.pool(), "iztrita")
        .await
        .expect("resolve")
        .is_none());
}
