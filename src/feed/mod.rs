//! Paginated content-feed retrieval.
//!
//! A feed page is an ordered batch of posts plus a cursor. Posts come back
//! in strictly descending id order; the next page filters `id < cursor`, so
//! concatenated pages have no duplicates and no gaps as long as the store
//! assigns ids append-only.

pub mod controller;

pub use controller::{ControllerState, FeedController};

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::db::{
    get_categories_by_ids, get_category, get_feed_rows, CategoryRef, Database, PostSummary,
};

/// Failure modes of a feed read. An empty page is not an error; it signals
/// end of feed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("content store unavailable")]
    Unavailable(#[from] anyhow::Error),
}

/// What a feed covers: everything, or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedScope {
    All,
    Category(i64),
}

impl FeedScope {
    #[must_use]
    pub fn category_id(self) -> Option<i64> {
        match self {
            Self::All => None,
            Self::Category(id) => Some(id),
        }
    }
}

/// An ordered batch of posts plus the cursor for the next page.
#[derive(Debug, Clone)]
pub struct FeedPage {
    pub posts: Vec<PostSummary>,
    /// Id of the last post; `None` means end of feed.
    pub next_cursor: Option<i64>,
}

impl FeedPage {
    #[must_use]
    pub fn is_end_of_feed(&self) -> bool {
        self.posts.is_empty()
    }
}

/// Fetch one feed page with category data denormalized into each post.
///
/// Category names and colors for a page are resolved with a single batch
/// `IN (...)` lookup (or one lookup when the scope is a category), never one
/// query per post.
///
/// # Errors
///
/// Returns [`StoreError::Unavailable`] if the underlying store query fails.
pub async fn get_feed_page(
    pool: &SqlitePool,
    scope: FeedScope,
    cursor: Option<i64>,
    page_size: i64,
) -> Result<FeedPage, StoreError> {
    let rows = get_feed_rows(pool, scope.category_id(), cursor, page_size).await?;

    if rows.is_empty() {
        return Ok(FeedPage {
            posts: Vec::new(),
            next_cursor: None,
        });
    }

    let categories = resolve_categories(pool, scope, &rows.iter().filter_map(|r| r.category).collect::<Vec<_>>()).await?;

    let posts: Vec<PostSummary> = rows
        .into_iter()
        .map(|row| {
            let category = row
                .category
                .and_then(|id| categories.get(&id).cloned())
                .unwrap_or_else(CategoryRef::uncategorized);
            PostSummary {
                id: row.id,
                slug: row.slug,
                title: row.title,
                description: row.description,
                content: row.content,
                image: row.image,
                published_at: row.published_at,
                externallink: row.externallink,
                is_deep_research: row.is_deep_research,
                category,
            }
        })
        .collect();

    let next_cursor = posts.last().map(|p| p.id);

    Ok(FeedPage { posts, next_cursor })
}

async fn resolve_categories(
    pool: &SqlitePool,
    scope: FeedScope,
    ids: &[i64],
) -> Result<HashMap<i64, CategoryRef>, StoreError> {
    let mut map = HashMap::new();

    match scope {
        FeedScope::Category(id) => {
            if let Some(category) = get_category(pool, id).await? {
                map.insert(id, CategoryRef::from(&category));
            }
        }
        FeedScope::All => {
            let mut distinct: Vec<i64> = ids.to_vec();
            distinct.sort_unstable();
            distinct.dedup();
            for category in get_categories_by_ids(pool, &distinct).await? {
                map.insert(category.id, CategoryRef::from(&category));
            }
        }
    }

    Ok(map)
}

/// Source of feed pages, abstracted so the cursor controller can be driven
/// by the real store or a test double.
#[async_trait]
pub trait FeedSource {
    async fn fetch_page(
        &self,
        scope: FeedScope,
        cursor: Option<i64>,
        page_size: i64,
    ) -> Result<FeedPage, StoreError>;
}

#[async_trait]
impl FeedSource for Database {
    async fn fetch_page(
        &self,
        scope: FeedScope,
        cursor: Option<i64>,
        page_size: i64,
    ) -> Result<FeedPage, StoreError> {
        get_feed_page(self.pool(), scope, cursor, page_size).await
    }
}
