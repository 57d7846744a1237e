use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde::{Deserialize, Serialize};

use super::feeds;
use super::pages;
use super::sitemap;
use super::AppState;
use crate::constants::{
    ALL_POSTS_PAGE_SIZE, FEED_FIRST_PAGE_SIZE, FEED_INCREMENT_SIZE, RSS_POST_LIMIT,
};
use crate::db::{get_categories, get_rss_posts, get_sitemap_entries, CategoryRef, PostSummary};
use crate::feed::{get_feed_page, FeedScope};
use crate::resolver::resolve_post;
use crate::seo::slugify_bg;

/// Create the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/all", get(all_posts))
        .route("/c/:slug_or_id", get(post_detail))
        .route("/api/posts", get(api_posts))
        .route("/feed.xml", get(feed_rss))
        .route("/sitemap.xml", get(sitemap_xml))
        .route("/robots.txt", get(robots_txt))
        .route("/healthz", get(health))
        // Catch-all for category sections; must come after the literal routes.
        .route("/:section", get(category_section))
}

// ========== HTML Routes ==========

async fn home(State(state): State<AppState>) -> Response {
    let base_url = &state.config.site_base_url;

    let page = match get_feed_page(
        state.db.pool(),
        FeedScope::All,
        None,
        FEED_FIRST_PAGE_SIZE,
    )
    .await
    {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("Failed to fetch home feed: {e}");
            let html = pages::render_home_error_page(base_url);
            return (StatusCode::INTERNAL_SERVER_ERROR, Html(html.into_string()))
                .into_response();
        }
    };

    Html(pages::render_home_page(&page.posts, base_url).into_string()).into_response()
}

async fn all_posts(State(state): State<AppState>) -> Response {
    let base_url = &state.config.site_base_url;

    let page = match get_feed_page(state.db.pool(), FeedScope::All, None, ALL_POSTS_PAGE_SIZE)
        .await
    {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("Failed to fetch all-posts feed: {e}");
            let html = pages::render_all_posts_error_page(base_url);
            return (StatusCode::INTERNAL_SERVER_ERROR, Html(html.into_string()))
                .into_response();
        }
    };

    Html(pages::render_all_posts_page(&page.posts, base_url).into_string()).into_response()
}

#[derive(Debug, Deserialize)]
pub struct PostDetailQuery {
    from: Option<String>,
}

async fn post_detail(
    State(state): State<AppState>,
    Path(slug_or_id): Path<String>,
    Query(query): Query<PostDetailQuery>,
) -> Response {
    let base_url = &state.config.site_base_url;

    let post = match resolve_post(state.db.pool(), &slug_or_id).await {
        Ok(Some(p)) => p,
        Ok(None) => {
            let html = pages::render_not_found_page(base_url);
            return (StatusCode::NOT_FOUND, Html(html.into_string())).into_response();
        }
        Err(e) => {
            tracing::error!(param = %slug_or_id, "Failed to resolve post: {e}");
            let html = pages::render_home_error_page(base_url);
            return (StatusCode::INTERNAL_SERVER_ERROR, Html(html.into_string()))
                .into_response();
        }
    };

    let category = match post.category {
        Some(id) => match crate::db::get_category(state.db.pool(), id).await {
            Ok(found) => found.as_ref().map(CategoryRef::from),
            Err(e) => {
                tracing::warn!(category_id = id, "Failed to fetch post category: {e}");
                None
            }
        },
        None => None,
    };

    let from = query.from.as_deref().filter(|f| is_safe_return_path(f));

    let params = pages::PostDetailParams {
        post: &post,
        category: category.as_ref(),
        from,
    };

    Html(pages::render_post_detail_page(&params, base_url).into_string()).into_response()
}

/// Return paths come from the `?from=` query parameter; only site-relative
/// paths are echoed back into the page.
fn is_safe_return_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//")
}

async fn category_section(State(state): State<AppState>, Path(section): Path<String>) -> Response {
    let base_url = &state.config.site_base_url;

    let categories = match get_categories(state.db.pool()).await {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to fetch categories: {e}");
            let html = pages::render_category_error_page(&section, base_url);
            return (StatusCode::INTERNAL_SERVER_ERROR, Html(html.into_string()))
                .into_response();
        }
    };

    let Some(category) = categories
        .into_iter()
        .find(|c| slugify_bg(&c.name) == section)
    else {
        let html = pages::render_not_found_page(base_url);
        return (StatusCode::NOT_FOUND, Html(html.into_string())).into_response();
    };

    let page = match get_feed_page(
        state.db.pool(),
        FeedScope::Category(category.id),
        None,
        FEED_FIRST_PAGE_SIZE,
    )
    .await
    {
        Ok(p) => p,
        Err(e) => {
            tracing::error!(category_id = category.id, "Failed to fetch category feed: {e}");
            let html = pages::render_category_error_page(&category.name, base_url);
            return (StatusCode::INTERNAL_SERVER_ERROR, Html(html.into_string()))
                .into_response();
        }
    };

    Html(pages::render_category_page(&category, &page.posts, base_url).into_string())
        .into_response()
}

async fn health() -> &'static str {
    "OK"
}

// ========== JSON API Routes ==========

#[derive(Debug, Deserialize)]
pub struct ApiPostsParams {
    /// Fetch posts with id strictly below this value.
    cursor: Option<i64>,
    /// Restrict the feed to one category.
    category: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct ApiFeedResponse {
    posts: Vec<PostSummary>,
    next_cursor: Option<i64>,
    end_of_feed: bool,
}

async fn api_posts(
    State(state): State<AppState>,
    Query(params): Query<ApiPostsParams>,
) -> Response {
    let scope = params.category.map_or(FeedScope::All, FeedScope::Category);

    let page = match get_feed_page(state.db.pool(), scope, params.cursor, FEED_INCREMENT_SIZE)
        .await
    {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("Failed to fetch feed page: {e}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Store unavailable").into_response();
        }
    };

    let end_of_feed = page.is_end_of_feed();
    Json(ApiFeedResponse {
        posts: page.posts,
        next_cursor: page.next_cursor,
        end_of_feed,
    })
    .into_response()
}

// ========== Feed / Crawler Routes ==========

async fn feed_rss(State(state): State<AppState>) -> Response {
    let base_url = &state.config.site_base_url;

    let posts = match get_rss_posts(state.db.pool(), RSS_POST_LIMIT).await {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("Failed to fetch posts for RSS feed: {e}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Store unavailable").into_response();
        }
    };

    let category_names: HashMap<i64, String> = match get_categories(state.db.pool()).await {
        Ok(c) => c.into_iter().map(|c| (c.id, c.name)).collect(),
        Err(e) => {
            tracing::warn!("Failed to fetch categories for RSS feed: {e}");
            HashMap::new()
        }
    };

    let rss = feeds::generate_rss(&posts, &category_names, base_url);

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/rss+xml; charset=utf-8")],
        rss,
    )
        .into_response()
}

async fn sitemap_xml(State(state): State<AppState>) -> Response {
    let base_url = &state.config.site_base_url;

    let entries = match get_sitemap_entries(state.db.pool()).await {
        Ok(e) => e,
        Err(e) => {
            tracing::error!("Failed to fetch sitemap entries: {e}");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Store unavailable").into_response();
        }
    };

    let categories = match get_categories(state.db.pool()).await {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to fetch categories for sitemap: {e}");
            Vec::new()
        }
    };

    let xml = sitemap::generate_sitemap(&entries, &categories, base_url);

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        xml,
    )
        .into_response()
}

async fn robots_txt(State(state): State<AppState>) -> Response {
    let robots = sitemap::generate_robots_txt(&state.config.site_base_url);

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots,
    )
        .into_response()
}
