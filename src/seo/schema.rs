//! schema.org JSON-LD builders.
//!
//! Every builder is a pure function of its input and emits a complete
//! `@context`/`@type` object. Optional fields are omitted rather than
//! emitted as empty strings.

use serde_json::{json, Value};

use super::{SITE_DESCRIPTION, SITE_LOGO_PATH, SITE_NAME, SITE_TAGLINE};

/// Organization schema for the site publisher.
#[must_use]
pub fn organization_schema(base_url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": SITE_NAME,
        "description": SITE_DESCRIPTION,
        "url": base_url,
        "logo": format!("{base_url}{SITE_LOGO_PATH}"),
        "founder": {
            "@type": "Person",
            "name": "Давид Петков",
        },
        "contactPoint": {
            "@type": "ContactPoint",
            "contactType": "customer service",
            "email": "contact@stox.bg",
            "availableLanguage": ["Bulgarian", "English"],
        },
        "areaServed": {
            "@type": "Country",
            "name": "Bulgaria",
        },
    })
}

/// WebSite schema with the site search action.
#[must_use]
pub fn website_schema(base_url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": SITE_NAME,
        "description": SITE_TAGLINE,
        "url": base_url,
        "inLanguage": "bg-BG",
        "about": {
            "@type": "Thing",
            "name": "Инвестиции и акции в България",
        },
    })
}

/// Input for [`article_schema`].
#[derive(Debug, Clone)]
pub struct ArticleSchemaInput<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub author: &'a str,
    pub published_time: &'a str,
    pub modified_time: Option<&'a str>,
    pub url: &'a str,
    pub image_url: Option<&'a str>,
}

/// Article schema for a post detail page.
#[must_use]
pub fn article_schema(input: &ArticleSchemaInput<'_>, base_url: &str) -> Value {
    let mut schema = json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": input.title,
        "description": input.description,
        "author": {
            "@type": "Person",
            "name": input.author,
        },
        "publisher": {
            "@type": "Organization",
            "name": SITE_NAME,
            "logo": {
                "@type": "ImageObject",
                "url": format!("{base_url}{SITE_LOGO_PATH}"),
            },
        },
        "datePublished": input.published_time,
        "dateModified": input.modified_time.unwrap_or(input.published_time),
        "url": input.url,
        "inLanguage": "bg-BG",
    });

    if let Some(image) = input.image_url {
        schema["image"] = json!(image);
    }

    schema
}

/// BreadcrumbList schema from an ordered (name, url) trail.
#[must_use]
pub fn breadcrumb_schema(items: &[(&str, &str)]) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": items
            .iter()
            .enumerate()
            .map(|(index, (name, url))| {
                json!({
                    "@type": "ListItem",
                    "position": index + 1,
                    "name": name,
                    "item": url,
                })
            })
            .collect::<Vec<_>>(),
    })
}

/// FAQPage schema from question/answer pairs.
#[must_use]
pub fn faq_schema(pairs: &[(&str, &str)]) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": pairs
            .iter()
            .map(|(question, answer)| {
                json!({
                    "@type": "Question",
                    "name": question,
                    "acceptedAnswer": {
                        "@type": "Answer",
                        "text": answer,
                    },
                })
            })
            .collect::<Vec<_>>(),
    })
}

/// FinancialProduct schema for a single stock page.
#[must_use]
pub fn financial_product_schema(
    ticker: &str,
    company_name: &str,
    description: &str,
    price: Option<f64>,
    currency: &str,
    base_url: &str,
) -> Value {
    let mut schema = json!({
        "@context": "https://schema.org",
        "@type": "FinancialProduct",
        "name": format!("{company_name} ({ticker})"),
        "description": description,
        "url": format!("{base_url}/stocks/{}", ticker.to_lowercase()),
    });

    if let Some(price) = price {
        schema["offers"] = json!({
            "@type": "Offer",
            "price": price.to_string(),
            "priceCurrency": currency,
        });
    }

    schema
}
