//! Head metadata tags derived from a page's [`PageSeo`].
//!
//! Renders the standard description/keywords/canonical tags plus Open Graph
//! and Twitter Card metadata for social previews.

use maud::{html, Markup, Render};

use crate::seo::{OgType, PageSeo, SITE_PUBLISHER, SITE_TWITTER};

/// Meta-tag block for one page.
#[derive(Debug, Clone)]
pub struct SeoMeta<'a> {
    seo: &'a PageSeo,
}

impl<'a> SeoMeta<'a> {
    #[must_use]
    pub fn new(seo: &'a PageSeo) -> Self {
        Self { seo }
    }
}

impl Render for SeoMeta<'_> {
    fn render(&self) -> Markup {
        let seo = self.seo;
        let keywords = seo.keywords.join(", ");

        html! {
            meta name="description" content=(seo.description);
            meta name="keywords" content=(keywords);
            meta name="author" content=(seo.author);
            link rel="canonical" href=(seo.canonical_url);

            // Open Graph metadata
            meta property="og:title" content=(seo.title);
            meta property="og:description" content=(seo.description);
            meta property="og:url" content=(seo.canonical_url);
            meta property="og:type" content=(seo.og_type.as_str());
            meta property="og:site_name" content=(SITE_PUBLISHER);
            meta property="og:locale" content="bg_BG";
            meta property="og:image" content=(seo.image_url);
            meta property="og:image:width" content="1200";
            meta property="og:image:height" content="630";
            meta property="og:image:alt" content=(seo.title);

            @if seo.og_type == OgType::Article {
                @if let Some(ref published) = seo.published_time {
                    meta property="article:published_time" content=(published);
                    meta property="article:modified_time" content=(published);
                }
                meta property="article:author" content=(seo.author);
            }

            // Twitter Card metadata
            meta name="twitter:card" content="summary_large_image";
            meta name="twitter:site" content=(SITE_TWITTER);
            meta name="twitter:title" content=(seo.title);
            meta name="twitter:description" content=(seo.description);
            meta name="twitter:image" content=(seo.image_url);
        }
    }
}
