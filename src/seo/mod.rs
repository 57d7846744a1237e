//! SEO metadata derivation.
//!
//! Pure functions from page context to `<head>` metadata and JSON-LD
//! structured data. Everything here must be deterministic: deriving twice
//! from the same input yields byte-identical output.

pub mod keywords;
pub mod schema;

pub use keywords::{extract_keywords_bg, slugify_bg};

pub const SITE_NAME: &str = "stox.bg";
pub const SITE_TAGLINE: &str = "Инвеститорският интернет. На едно място.";
pub const SITE_DESCRIPTION: &str =
    "Българска платформа за инвеститори с актуални анализи за акции, компании, икономика и геополитика";
pub const SITE_PUBLISHER: &str = "stox.bg – проект на Devids";
pub const SITE_TWITTER: &str = "@stoxbg";
pub const SITE_DEFAULT_AUTHOR: &str = "Давид Петков";
pub const SITE_LOGO_PATH: &str = "/images/logos/stox-logo.png";
pub const DEFAULT_OG_IMAGE: &str = "/images/og-default.jpg";

/// Site-default keyword list; page keywords are appended after these.
pub const DEFAULT_KEYWORDS: [&str; 10] = [
    "акции българия",
    "инвестиции",
    "финанси",
    "пазари",
    "анализи",
    "stox.bg",
    "stox бг",
    "акции бг",
    "сайт за акции",
    "давид петков",
];

/// Open Graph object type for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OgType {
    #[default]
    Website,
    Article,
}

impl OgType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
        }
    }
}

/// Page-specific inputs to SEO derivation.
#[derive(Debug, Clone, Default)]
pub struct SeoContext {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    /// Site-relative canonical path; must match the resolver's canonical
    /// path for the same entity.
    pub canonical_path: Option<String>,
    pub image: Option<String>,
    pub og_type: OgType,
    pub published_time: Option<String>,
    pub author: Option<String>,
}

/// Derived `<head>` metadata for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSeo {
    pub title: String,
    pub description: String,
    /// Defaults first, then page-specific, stable order, no duplicates.
    pub keywords: Vec<String>,
    pub canonical_url: String,
    pub image_url: String,
    pub og_type: OgType,
    pub published_time: Option<String>,
    pub author: String,
}

/// Derive page metadata from context. Deterministic and idempotent.
#[must_use]
pub fn derive_page_seo(context: &SeoContext, base_url: &str) -> PageSeo {
    let title = match context.title.as_deref() {
        Some(title) if title.to_lowercase().contains(SITE_NAME) => title.to_string(),
        Some(title) => format!("{title} | {SITE_NAME}"),
        None => format!("{SITE_NAME} - {SITE_TAGLINE}"),
    };

    let description = context
        .description
        .clone()
        .unwrap_or_else(|| SITE_DESCRIPTION.to_string());

    PageSeo {
        title,
        description,
        keywords: merge_keywords(&context.keywords),
        canonical_url: canonical_url(context.canonical_path.as_deref(), base_url),
        image_url: to_absolute_url(context.image.as_deref(), base_url),
        og_type: context.og_type,
        published_time: context.published_time.clone(),
        author: context
            .author
            .clone()
            .unwrap_or_else(|| SITE_DEFAULT_AUTHOR.to_string()),
    }
}

/// Site-default keywords unioned with page keywords: defaults first, then
/// page-specific, first occurrence wins, order preserved (not sorted).
#[must_use]
pub fn merge_keywords(page_keywords: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = DEFAULT_KEYWORDS.iter().map(ToString::to_string).collect();
    for keyword in page_keywords {
        if !merged.iter().any(|k| k == keyword) {
            merged.push(keyword.clone());
        }
    }
    merged
}

/// Absolute canonical URL: base + site-relative path.
#[must_use]
pub fn canonical_url(path: Option<&str>, base_url: &str) -> String {
    match path {
        Some(path) if path.starts_with('/') => format!("{base_url}{path}"),
        Some(path) => format!("{base_url}/{path}"),
        None => base_url.to_string(),
    }
}

/// Image normalization: absolute URLs pass through, paths get the site
/// prefix, absent images use the default OG asset.
#[must_use]
pub fn to_absolute_url(path_or_url: Option<&str>, base_url: &str) -> String {
    match path_or_url {
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => url.to_string(),
        Some(path) if !path.is_empty() => {
            if path.starts_with('/') {
                format!("{base_url}{path}")
            } else {
                format!("{base_url}/{path}")
            }
        }
        _ => format!("{base_url}{DEFAULT_OG_IMAGE}"),
    }
}
