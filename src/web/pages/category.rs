//! Category feed page.

use maud::{html, Markup, Render};

use crate::components::{BaseLayout, FeedErrorPanel};
use crate::db::{Category, PostSummary};
use crate::seo::{derive_page_seo, schema, slugify_bg, OgType, SeoContext};

use super::feed_stream;

/// Render a category section page with its seeded feed.
#[must_use]
pub fn render_category_page(
    category: &Category,
    posts: &[PostSummary],
    base_url: &str,
) -> Markup {
    let section_path = format!("/{}", slugify_bg(&category.name));

    let seo = derive_page_seo(
        &SeoContext {
            title: Some(category.name.clone()),
            description: category.description.clone(),
            keywords: vec![category.name.to_lowercase()],
            canonical_path: Some(section_path.clone()),
            image: category.image.clone(),
            og_type: OgType::Website,
            ..SeoContext::default()
        },
        base_url,
    );

    let home_url = format!("{base_url}/");
    let section_url = format!("{base_url}{section_path}");
    let breadcrumb = schema::breadcrumb_schema(&[
        ("Начало", home_url.as_str()),
        (category.name.as_str(), section_url.as_str()),
    ]);

    let content = html! {
        section class="hero" {
            h1 { (category.name) }
            @if let Some(ref description) = category.description {
                p { (description) }
            }
        }

        (feed_stream(posts, Some(category.id), &section_path))
    };

    BaseLayout::new(&seo)
        .with_schemas(vec![breadcrumb])
        .render(content)
}

/// Degraded category page when the store is unreachable.
#[must_use]
pub fn render_category_error_page(category_name: &str, base_url: &str) -> Markup {
    let seo = derive_page_seo(
        &SeoContext {
            title: Some(category_name.to_string()),
            ..SeoContext::default()
        },
        base_url,
    );

    BaseLayout::new(&seo).render(FeedErrorPanel.render())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn business_category() -> Category {
        Category {
            id: 3,
            name: "Бизнес".to_string(),
            description: Some("Анализи за компании и пазари".to_string()),
            image: None,
            color: Some("#1d4ed8".to_string()),
            isdeleted: false,
        }
    }

    #[test]
    fn test_category_page_scope_attributes() {
        let html =
            render_category_page(&business_category(), &[], "https://stox.bg").into_string();
        // Empty category feed shows the category-specific empty panel.
        assert!(html.contains("Няма налични публикации в тази категория."));
        assert!(html.contains("Бизнес"));
    }

    #[test]
    fn test_category_canonical_uses_bulgarian_slug() {
        let html =
            render_category_page(&business_category(), &[], "https://stox.bg").into_string();
        assert!(html.contains(r#"rel="canonical" href="https://stox.bg/biznes""#));
        assert!(html.contains("BreadcrumbList"));
    }
}
