//! Listing of all posts.

use maud::{html, Markup, Render};

use crate::components::{BaseLayout, FeedErrorPanel};
use crate::db::PostSummary;
use crate::seo::{derive_page_seo, OgType, SeoContext};

use super::feed_stream;

/// Render the all-posts listing page.
#[must_use]
pub fn render_all_posts_page(posts: &[PostSummary], base_url: &str) -> Markup {
    let seo = derive_page_seo(
        &SeoContext {
            title: Some("Всички публикации".to_string()),
            description: Some(
                "Пълен архив на анализите и публикациите в stox.bg".to_string(),
            ),
            canonical_path: Some("/all".to_string()),
            og_type: OgType::Website,
            ..SeoContext::default()
        },
        base_url,
    );

    let content = html! {
        section class="hero" {
            h1 { "Всички публикации" }
        }

        (feed_stream(posts, None, "/all"))
    };

    BaseLayout::new(&seo).render(content)
}

/// Degraded all-posts page when the store is unreachable.
#[must_use]
pub fn render_all_posts_error_page(base_url: &str) -> Markup {
    let seo = derive_page_seo(
        &SeoContext {
            title: Some("Всички публикации".to_string()),
            canonical_path: Some("/all".to_string()),
            ..SeoContext::default()
        },
        base_url,
    );

    BaseLayout::new(&seo).render(FeedErrorPanel.render())
}
