//! Not-found view for post detail routes.

use maud::{html, Markup};

use crate::components::BaseLayout;
use crate::seo::{derive_page_seo, OgType, SeoContext};

/// Render the dedicated not-found view with a link back to the feed.
#[must_use]
pub fn render_not_found_page(base_url: &str) -> Markup {
    let seo = derive_page_seo(
        &SeoContext {
            title: Some("Публикацията не е намерена".to_string()),
            description: Some(
                "Търсената публикация не съществува или е премахната.".to_string(),
            ),
            canonical_path: Some("/c/not-found".to_string()),
            og_type: OgType::Article,
            ..SeoContext::default()
        },
        base_url,
    );

    let content = html! {
        div class="feed-panel not-found" {
            h1 { "Публикацията не е намерена" }
            p { "Търсената публикация не съществува или е премахната." }
            a class="read-more" href="/" { "Обратно към лентата" }
        }
    };

    BaseLayout::new(&seo).render(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_links_back_to_feed() {
        let html = render_not_found_page("https://stox.bg").into_string();
        assert!(html.contains("Публикацията не е намерена"));
        assert!(html.contains(r#"href="/""#));
    }
}
