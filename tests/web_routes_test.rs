//! Integration tests for the HTTP route surface.

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use stox_site::config::Config;
use stox_site::db::{insert_category, insert_post, Database, NewCategory, NewPost};
use stox_site::web::{create_app, AppState};
use tempfile::TempDir;
use tower::ServiceExt;

fn test_config() -> Config {
    Config {
        site_base_url: "https://stox.bg".to_string(),
        database_path: PathBuf::from("unused"),
        web_host: "127.0.0.1".to_string(),
        web_port: 0,
    }
}

async fn test_app(dir: &TempDir) -> (Router, Database) {
    let db = Database::new(&dir.path().join("test.sqlite"))
        .await
        .expect("Failed to create test database");

    let app = create_app(AppState {
        db: db.clone(),
        config: Arc::new(test_config()),
    });

    (app, db)
}

async fn seed_content(db: &Database) -> i64 {
    let business = insert_category(
        db.pool(),
        &NewCategory {
            name: "Бизнес".to_string(),
            color: Some("#1d4ed8".to_string()),
            ..NewCategory::default()
        },
    )
    .await
    .expect("insert category");

    for id in 1..=12 {
        insert_post(
            db.pool(),
            &NewPost {
                id: Some(id),
                slug: Some(format!("post-{id}")),
                title: format!("Публикация {id}"),
                description: Some("Кратко описание".to_string()),
                published_at: Some("2025-01-10".to_string()),
                category: Some(business),
                ..NewPost::default()
            },
        )
        .await
        .expect("insert post");
    }

    business
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

#[tokio::test]
async fn test_home_page_seeds_first_feed_page() {
    let dir = TempDir::new().expect("tempdir");
    let (app, db) = test_app(&dir).await;
    seed_content(&db).await;

    let (status, body) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    // First page is ten posts; the cursor points at the oldest shown.
    assert!(body.contains("Публикация 12"));
    assert!(body.contains(r#"data-post-id="3""#));
    assert!(!body.contains(r#"data-post-id="2""#));
    assert!(body.contains(r#"data-cursor="3""#));
}

#[tokio::test]
async fn test_post_detail_by_slug_and_by_id() {
    let dir = TempDir::new().expect("tempdir");
    let (app, db) = test_app(&dir).await;
    seed_content(&db).await;

    let (status, body) = get(app.clone(), "/c/post-4").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Публикация 4"));
    assert!(body.contains(r#"rel="canonical" href="https://stox.bg/c/post-4""#));

    let (status, body) = get(app, "/c/4").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"rel="canonical" href="https://stox.bg/c/post-4""#));
}

#[tokio::test]
async fn test_post_detail_not_found() {
    let dir = TempDir::new().expect("tempdir");
    let (app, _db) = test_app(&dir).await;

    let (status, body) = get(app, "/c/nyama-takava").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Публикацията не е намерена"));
}

#[tokio::test]
async fn test_category_section_resolves_by_bulgarian_slug() {
    let dir = TempDir::new().expect("tempdir");
    let (app, db) = test_app(&dir).await;
    seed_content(&db).await;

    let (status, body) = get(app.clone(), "/biznes").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Бизнес"));
    assert!(body.contains(r#"data-category="1""#));

    let (status, _) = get(app, "/nesashtestvuvashta").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_api_posts_pagination_shape() {
    let dir = TempDir::new().expect("tempdir");
    let (app, db) = test_app(&dir).await;
    seed_content(&db).await;

    let (status, body) = get(app.clone(), "/api/posts?cursor=8").await;
    assert_eq!(status, StatusCode::OK);

    let page: serde_json::Value = serde_json::from_str(&body).expect("json");
    let ids: Vec<i64> = page["posts"]
        .as_array()
        .expect("posts array")
        .iter()
        .map(|p| p["id"].as_i64().expect("id"))
        .collect();
    assert_eq!(ids, vec![7, 6, 5, 4, 3]);
    assert_eq!(page["next_cursor"], 3);
    assert_eq!(page["end_of_feed"], false);

    let (_, body) = get(app, "/api/posts?cursor=1").await;
    let page: serde_json::Value = serde_json::from_str(&body).expect("json");
    assert_eq!(page["posts"].as_array().expect("posts array").len(), 0);
    assert_eq!(page["next_cursor"], serde_json::Value::Null);
    assert_eq!(page["end_of_feed"], true);
}

#[tokio::test]
async fn test_api_posts_category_scope() {
    let dir = TempDir::new().expect("tempdir");
    let (app, db) = test_app(&dir).await;
    let business = seed_content(&db).await;

    let (status, body) = get(app, &format!("/api/posts?category={business}")).await;
    assert_eq!(status, StatusCode::OK);

    let page: serde_json::Value = serde_json::from_str(&body).expect("json");
    for post in page["posts"].as_array().expect("posts array") {
        assert_eq!(post["category"]["name"], "Бизнес");
    }
}

#[tokio::test]
async fn test_rss_feed() {
    let dir = TempDir::new().expect("tempdir");
    let (app, db) = test_app(&dir).await;
    seed_content(&db).await;

    let response = app
        .oneshot(Request::builder().uri("/feed.xml").body(Body::empty()).expect("request"))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .expect("content type")
        .to_str()
        .expect("header str");
    assert!(content_type.starts_with("application/rss+xml"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let body = String::from_utf8_lossy(&bytes);
    assert!(body.contains("<rss version=\"2.0\""));
    assert!(body.contains("https://stox.bg/c/post-12"));
    assert!(body.contains("<category>Бизнес</category>"));
}

#[tokio::test]
async fn test_sitemap_and_robots() {
    let dir = TempDir::new().expect("tempdir");
    let (app, db) = test_app(&dir).await;
    seed_content(&db).await;

    let (status, body) = get(app.clone(), "/sitemap.xml").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<urlset"));
    assert!(body.contains("<loc>https://stox.bg/c/post-12</loc>"));
    assert!(body.contains("<loc>https://stox.bg/biznes</loc>"));

    let (status, body) = get(app, "/robots.txt").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Sitemap: https://stox.bg/sitemap.xml"));
}

#[tokio::test]
async fn test_healthz() {
    let dir = TempDir::new().expect("tempdir");
    let (app, _db) = test_app(&dir).await;

    let (status, body) = get(app, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}
