//! Home feed page.

use maud::{html, Markup, Render};

use crate::components::{BaseLayout, FeedErrorPanel};
use crate::db::PostSummary;
use crate::seo::{derive_page_seo, schema, OgType, SeoContext};

use super::feed_stream;

/// Render the home page with the first feed page seeded for infinite scroll.
#[must_use]
pub fn render_home_page(posts: &[PostSummary], base_url: &str) -> Markup {
    let seo = derive_page_seo(
        &SeoContext {
            title: Some("Бърза лента".to_string()),
            description: Some(
                "Глобални AI-анализирани новини от света на инвестициите в реално време"
                    .to_string(),
            ),
            canonical_path: Some("/".to_string()),
            og_type: OgType::Website,
            ..SeoContext::default()
        },
        base_url,
    );

    let schemas = vec![
        schema::organization_schema(base_url),
        schema::website_schema(base_url),
    ];

    let content = html! {
        section class="hero" {
            h1 { "Бърза лента" }
            p { "Глобални AI-анализирани новини от света на инвестициите в реално време" }
        }

        (feed_stream(posts, None, "/"))
    };

    BaseLayout::new(&seo).with_schemas(schemas).render(content)
}

/// Render the home page in its degraded "store unavailable" state.
#[must_use]
pub fn render_home_error_page(base_url: &str) -> Markup {
    let seo = derive_page_seo(
        &SeoContext {
            title: Some("Бърза лента".to_string()),
            canonical_path: Some("/".to_string()),
            ..SeoContext::default()
        },
        base_url,
    );

    BaseLayout::new(&seo).render(FeedErrorPanel.render())
}
