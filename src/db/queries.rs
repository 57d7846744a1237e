use anyhow::{Context, Result};
use sqlx::SqlitePool;

use super::models::{Category, FeedRow, NewCategory, NewPost, Post, SitemapEntry};

// ========== Posts ==========

/// Get a live post by id.
pub async fn get_post_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Post>> {
    sqlx::query_as("SELECT * FROM posts WHERE id = ? AND isdeleted = 0")
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("Failed to fetch post by id")
}

/// Get a live post by slug.
pub async fn get_post_by_slug(pool: &SqlitePool, slug: &str) -> Result<Option<Post>> {
    sqlx::query_as("SELECT * FROM posts WHERE slug = ? AND isdeleted = 0")
        .bind(slug)
        .fetch_optional(pool)
        .await
        .context("Failed to fetch post by slug")
}

/// Fetch one feed page of raw post rows.
///
/// Constraints: live rows only; optional category filter; `id < cursor` when
/// a cursor is supplied; strictly descending id order; `LIMIT limit`.
pub async fn get_feed_rows(
    pool: &SqlitePool,
    category: Option<i64>,
    cursor: Option<i64>,
    limit: i64,
) -> Result<Vec<FeedRow>> {
    let mut sql = String::from(
        "SELECT id, slug, title, description, content, image, published_at, \
         externallink, is_deep_research, category \
         FROM posts WHERE isdeleted = 0",
    );
    if category.is_some() {
        sql.push_str(" AND category = ?");
    }
    if cursor.is_some() {
        sql.push_str(" AND id < ?");
    }
    sql.push_str(" ORDER BY id DESC LIMIT ?");

    let mut query = sqlx::query_as(&sql);
    if let Some(category_id) = category {
        query = query.bind(category_id);
    }
    if let Some(last_id) = cursor {
        query = query.bind(last_id);
    }
    query = query.bind(limit);

    query
        .fetch_all(pool)
        .await
        .context("Failed to fetch feed page")
}

/// Posts with a non-empty slug for the sitemap, newest first.
pub async fn get_sitemap_entries(pool: &SqlitePool) -> Result<Vec<SitemapEntry>> {
    sqlx::query_as(
        r"
        SELECT slug, published_at FROM posts
        WHERE isdeleted = 0 AND slug IS NOT NULL AND slug != ''
        ORDER BY id DESC
        ",
    )
    .fetch_all(pool)
    .await
    .context("Failed to fetch sitemap entries")
}

/// Most recent slugged posts for the RSS feed.
pub async fn get_rss_posts(pool: &SqlitePool, limit: i64) -> Result<Vec<Post>> {
    sqlx::query_as(
        r"
        SELECT * FROM posts
        WHERE isdeleted = 0 AND slug IS NOT NULL AND slug != ''
        ORDER BY published_at DESC
        LIMIT ?
        ",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
    .context("Failed to fetch RSS posts")
}

/// Insert a post, returning its id. An explicit id is honored when supplied.
pub async fn insert_post(pool: &SqlitePool, post: &NewPost) -> Result<i64> {
    let result = sqlx::query(
        r"
        INSERT INTO posts (
            id, slug, title, description, content, image, author, published_at,
            category, seo_title, seo_description, seo_keywords, externallink,
            is_deep_research
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        ",
    )
    .bind(post.id)
    .bind(&post.slug)
    .bind(&post.title)
    .bind(&post.description)
    .bind(&post.content)
    .bind(&post.image)
    .bind(&post.author)
    .bind(&post.published_at)
    .bind(post.category)
    .bind(&post.seo_title)
    .bind(&post.seo_description)
    .bind(&post.seo_keywords)
    .bind(&post.externallink)
    .bind(post.is_deep_research)
    .execute(pool)
    .await
    .context("Failed to insert post")?;

    Ok(result.last_insert_rowid())
}

/// Soft-delete a post. Feed, lookup, sitemap and RSS reads all stop
/// returning it.
pub async fn soft_delete_post(pool: &SqlitePool, id: i64) -> Result<()> {
    sqlx::query("UPDATE posts SET isdeleted = 1 WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .context("Failed to soft-delete post")?;

    Ok(())
}

// ========== Categories ==========

/// Get a live category by id.
pub async fn get_category(pool: &SqlitePool, id: i64) -> Result<Option<Category>> {
    sqlx::query_as("SELECT * FROM categories WHERE id = ? AND isdeleted = 0")
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("Failed to fetch category")
}

/// All live categories.
pub async fn get_categories(pool: &SqlitePool) -> Result<Vec<Category>> {
    sqlx::query_as("SELECT * FROM categories WHERE isdeleted = 0 ORDER BY id")
        .fetch_all(pool)
        .await
        .context("Failed to fetch categories")
}

/// Batch lookup for feed denormalization: one `IN (...)` query for all
/// distinct category ids in a page instead of one query per post.
pub async fn get_categories_by_ids(pool: &SqlitePool, ids: &[i64]) -> Result<Vec<Category>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let placeholders = vec!["?"; ids.len()].join(", ");
    let sql =
        format!("SELECT * FROM categories WHERE isdeleted = 0 AND id IN ({placeholders})");

    let mut query = sqlx::query_as(&sql);
    for id in ids {
        query = query.bind(id);
    }

    query
        .fetch_all(pool)
        .await
        .context("Failed to fetch categories by ids")
}

/// Insert a category, returning its id.
pub async fn insert_category(pool: &SqlitePool, category: &NewCategory) -> Result<i64> {
    let result = sqlx::query(
        "INSERT INTO categories (name, description, image, color) VALUES (?, ?, ?, ?)",
    )
    .bind(&category.name)
    .bind(&category.description)
    .bind(&category.image)
    .bind(&category.color)
    .execute(pool)
    .await
    .context("Failed to insert category")?;

    Ok(result.last_insert_rowid())
}
