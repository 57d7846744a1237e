//! Base page layout.
//!
//! HTML skeleton with the derived head metadata, optional JSON-LD blocks,
//! site navigation and footer.

use maud::{html, Markup, PreEscaped, DOCTYPE};
use serde_json::Value;

use crate::seo::PageSeo;

use super::metadata::SeoMeta;

/// Base page layout builder.
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    seo: &'a PageSeo,
    schemas: Vec<Value>,
}

impl<'a> BaseLayout<'a> {
    #[must_use]
    pub fn new(seo: &'a PageSeo) -> Self {
        Self {
            seo,
            schemas: Vec::new(),
        }
    }

    /// Attach JSON-LD objects emitted as `<script type="application/ld+json">`.
    #[must_use]
    pub fn with_schemas(mut self, schemas: Vec<Value>) -> Self {
        self.schemas = schemas;
        self
    }

    /// Render the complete HTML page with the given content.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="bg" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (self.seo.title) }

                    (SeoMeta::new(self.seo))

                    @for schema in &self.schemas {
                        script type="application/ld+json" {
                            // A literal </script> inside a string value would
                            // terminate the block early.
                            (PreEscaped(schema.to_string().replace("</", "<\\/")))
                        }
                    }

                    link rel="stylesheet" href="/static/css/style.css";
                    link rel="alternate" type="application/rss+xml" title="stox.bg RSS" href="/feed.xml";
                }
                body {
                    (Self::render_header())
                    main class="container" {
                        (content)
                    }
                    (Self::render_footer())
                    script src="/static/js/feed.js" defer {}
                }
            }
        }
    }

    fn render_header() -> Markup {
        html! {
            header class="site-header" {
                nav class="container" {
                    a class="site-logo" href="/" { "stox.bg" }
                    ul {
                        li { a href="/" { "Начало" } }
                        li { a href="/all" { "Всички публикации" } }
                        li { a href="/feed.xml" { "RSS" } }
                    }
                }
            }
        }
    }

    fn render_footer() -> Markup {
        html! {
            footer class="site-footer" {
                div class="container" {
                    p { "stox.bg – проект на Devids" }
                    p { "Инвеститорският интернет. На едно място." }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::{derive_page_seo, schema::breadcrumb_schema, SeoContext};

    #[test]
    fn test_layout_renders_title_and_language() {
        let seo = derive_page_seo(
            &SeoContext {
                title: Some("Начало".to_string()),
                ..SeoContext::default()
            },
            "https://stox.bg",
        );
        let html = BaseLayout::new(&seo)
            .render(maud::html! { h1 { "Съдържание" } })
            .into_string();

        assert!(html.contains(r#"<html lang="bg">"#));
        assert!(html.contains("<title>Начало | stox.bg</title>"));
        assert!(html.contains("<h1>Съдържание</h1>"));
    }

    #[test]
    fn test_layout_embeds_json_ld() {
        let seo = derive_page_seo(&SeoContext::default(), "https://stox.bg");
        let schema = breadcrumb_schema(&[("Начало", "https://stox.bg/")]);
        let html = BaseLayout::new(&seo)
            .with_schemas(vec![schema])
            .render(maud::html! {})
            .into_string();

        assert!(html.contains(r#"<script type="application/ld+json">"#));
        assert!(html.contains("BreadcrumbList"));
    }
}
