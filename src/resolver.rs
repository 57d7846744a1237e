//! Route-parameter resolution for post detail pages.
//!
//! The `/c/:slug_or_id` parameter resolves by numeric id when it parses
//! fully as an integer, otherwise by slug. The variant is chosen once per
//! request so the page renderer and the SEO deriver always agree on the
//! resolved record and its canonical path.

use sqlx::SqlitePool;

use crate::db::{get_post_by_id, get_post_by_slug, Post};
use crate::feed::StoreError;

/// Resolution strategy for one route parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteKey {
    ById(i64),
    BySlug(String),
}

impl RouteKey {
    /// Classify a raw route parameter. Id lookup takes precedence: a slug
    /// that looks fully numeric is treated as an id.
    #[must_use]
    pub fn parse(param: &str) -> Self {
        match param.parse::<i64>() {
            Ok(id) => Self::ById(id),
            Err(_) => Self::BySlug(param.to_string()),
        }
    }
}

/// Resolve a route parameter to a single live post.
///
/// Returns `Ok(None)` when no row matches (the not-found view), and
/// [`StoreError`] when the store query itself fails.
///
/// # Errors
///
/// Returns [`StoreError::Unavailable`] if the content store query fails.
pub async fn resolve_post(pool: &SqlitePool, param: &str) -> Result<Option<Post>, StoreError> {
    let post = match RouteKey::parse(param) {
        RouteKey::ById(id) => get_post_by_id(pool, id).await?,
        RouteKey::BySlug(slug) => get_post_by_slug(pool, &slug).await?,
    };
    Ok(post)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_param_resolves_by_id() {
        assert_eq!(RouteKey::parse("4"), RouteKey::ById(4));
        assert_eq!(RouteKey::parse("1234567"), RouteKey::ById(1_234_567));
    }

    #[test]
    fn test_non_numeric_param_resolves_by_slug() {
        assert_eq!(
            RouteKey::parse("ot-sustezaniya-do-biznes"),
            RouteKey::BySlug("ot-sustezaniya-do-biznes".to_string())
        );
        // Partially numeric params are slugs.
        assert_eq!(
            RouteKey::parse("4-godini-po-kasno"),
            RouteKey::BySlug("4-godini-po-kasno".to_string())
        );
    }

    #[test]
    fn test_negative_and_overflowing_numbers() {
        // A leading minus still parses as i64; it can only miss on lookup.
        assert_eq!(RouteKey::parse("-1"), RouteKey::ById(-1));
        // Larger than i64 falls back to slug resolution.
        assert!(matches!(
            RouteKey::parse("99999999999999999999999"),
            RouteKey::BySlug(_)
        ));
    }
}
