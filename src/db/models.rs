use serde::{Deserialize, Serialize};

/// A content item. Created and mutated outside this system; every read path
/// filters `isdeleted = false`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    /// URL-safe identifier, preferred route key. Absent on legacy records.
    pub slug: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub author: Option<String>,
    pub published_at: Option<String>,
    pub category: Option<i64>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    /// JSON array of keyword strings.
    pub seo_keywords: Option<String>,
    pub externallink: Option<String>,
    pub is_deep_research: bool,
    pub isdeleted: bool,
}

impl Post {
    /// Canonical route key: slug when present, numeric id otherwise.
    /// The page renderer and the SEO deriver must agree on this.
    #[must_use]
    pub fn canonical_slug(&self) -> String {
        match self.slug.as_deref() {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => self.id.to_string(),
        }
    }

    /// Canonical site-relative path for this post.
    #[must_use]
    pub fn canonical_path(&self) -> String {
        format!("/c/{}", self.canonical_slug())
    }

    /// Keywords stored as a JSON array, or empty when absent/malformed.
    #[must_use]
    pub fn seo_keyword_list(&self) -> Vec<String> {
        self.seo_keywords
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default()
    }
}

/// A grouping label for posts.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    /// Display hint for the category badge.
    pub color: Option<String>,
    pub isdeleted: bool,
}

/// Category fields denormalized into feed results for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: i64,
    pub name: String,
    pub color: String,
}

impl CategoryRef {
    /// Placeholder used when a post has no (live) category.
    #[must_use]
    pub fn uncategorized() -> Self {
        Self {
            id: 0,
            name: "Без категория".to_string(),
            color: "#e5e5e5".to_string(),
        }
    }
}

impl From<&Category> for CategoryRef {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            color: category
                .color
                .clone()
                .unwrap_or_else(|| "#e5e5e5".to_string()),
        }
    }
}

/// A feed entry: the post columns a card needs plus its resolved category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: i64,
    pub slug: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub published_at: Option<String>,
    pub externallink: Option<String>,
    pub is_deep_research: bool,
    pub category: CategoryRef,
}

impl PostSummary {
    /// Same slug-over-id preference as [`Post::canonical_slug`].
    #[must_use]
    pub fn canonical_slug(&self) -> String {
        match self.slug.as_deref() {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => self.id.to_string(),
        }
    }
}

/// Raw feed row before category denormalization.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FeedRow {
    pub id: i64,
    pub slug: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub published_at: Option<String>,
    pub externallink: Option<String>,
    pub is_deep_research: bool,
    pub category: Option<i64>,
}

/// Data for inserting a new post. An explicit id may be supplied; the store
/// otherwise assigns ids in ascending order (the pagination cursor relies on
/// that assignment being append-only).
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub id: Option<i64>,
    pub slug: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
    pub author: Option<String>,
    pub published_at: Option<String>,
    pub category: Option<i64>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub seo_keywords: Option<String>,
    pub externallink: Option<String>,
    pub is_deep_research: bool,
}

/// Data for inserting a new category.
#[derive(Debug, Clone, Default)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub color: Option<String>,
}

/// Row used for sitemap generation.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SitemapEntry {
    pub slug: String,
    pub published_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_with(slug: Option<&str>) -> Post {
        Post {
            id: 4,
            slug: slug.map(String::from),
            title: "Test".to_string(),
            description: None,
            content: None,
            image: None,
            author: None,
            published_at: None,
            category: None,
            seo_title: None,
            seo_description: None,
            seo_keywords: None,
            externallink: None,
            is_deep_research: false,
            isdeleted: false,
        }
    }

    #[test]
    fn test_canonical_path_prefers_slug() {
        let post = post_with(Some("ot-sustezaniya-do-biznes"));
        assert_eq!(post.canonical_path(), "/c/ot-sustezaniya-do-biznes");
    }

    #[test]
    fn test_canonical_path_falls_back_to_id() {
        assert_eq!(post_with(None).canonical_path(), "/c/4");
        assert_eq!(post_with(Some("")).canonical_path(), "/c/4");
    }

    #[test]
    fn test_seo_keyword_list() {
        let mut post = post_with(None);
        post.seo_keywords = Some(r#"["акции","анализ"]"#.to_string());
        assert_eq!(post.seo_keyword_list(), vec!["акции", "анализ"]);

        post.seo_keywords = Some("not json".to_string());
        assert!(post.seo_keyword_list().is_empty());

        post.seo_keywords = None;
        assert!(post.seo_keyword_list().is_empty());
    }

    #[test]
    fn test_uncategorized_placeholder() {
        let cat = CategoryRef::uncategorized();
        assert_eq!(cat.id, 0);
        assert_eq!(cat.name, "Без категория");
        assert_eq!(cat.color, "#e5e5e5");
    }
}
