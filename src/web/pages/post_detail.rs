//! Post detail page.

use chrono::{DateTime, NaiveDate, Utc};
use maud::{html, Markup};

use crate::components::{BaseLayout, CategoryBadge};
use crate::content::project_content;
use crate::db::{CategoryRef, Post};
use crate::seo::{
    derive_page_seo, extract_keywords_bg, schema, schema::ArticleSchemaInput, to_absolute_url,
    OgType, SeoContext, SITE_NAME,
};

/// Characters of the description shown as the article intro.
const INTRO_CHARS: usize = 200;

/// Parameters for the post detail page.
#[derive(Debug, Clone)]
pub struct PostDetailParams<'a> {
    pub post: &'a Post,
    pub category: Option<&'a CategoryRef>,
    /// Return path from the `?from=` query parameter.
    pub from: Option<&'a str>,
}

/// Render the post detail page with its article/breadcrumb structured data.
#[must_use]
pub fn render_post_detail_page(params: &PostDetailParams<'_>, base_url: &str) -> Markup {
    let post = params.post;
    let category_name = params.category.map_or("Статии", |c| c.name.as_str());

    let raw_content = post
        .content
        .as_deref()
        .or(post.description.as_deref())
        .unwrap_or_default();
    let document = project_content(raw_content);

    let canonical_path = post.canonical_path();
    let absolute_url = format!("{base_url}{canonical_path}");

    let seo = derive_page_seo(&seo_context(post, params.category, &canonical_path), base_url);

    let published = post
        .published_at
        .as_deref()
        .map_or_else(|| Utc::now().to_rfc3339(), published_iso);

    // The schema and the OG tags must carry the same absolute image URL.
    let schema_image = post
        .image
        .as_deref()
        .map(|image| to_absolute_url(Some(image), base_url));

    let article = schema::article_schema(
        &ArticleSchemaInput {
            title: post.seo_title.as_deref().unwrap_or(&post.title),
            description: post
                .seo_description
                .as_deref()
                .or(post.description.as_deref())
                .unwrap_or(&post.title),
            author: post.author.as_deref().unwrap_or(crate::seo::SITE_DEFAULT_AUTHOR),
            published_time: &published,
            modified_time: None,
            url: &absolute_url,
            image_url: schema_image.as_deref(),
        },
        base_url,
    );

    let home_url = format!("{base_url}/");
    let breadcrumb = schema::breadcrumb_schema(&[
        ("Начало", home_url.as_str()),
        (category_name, home_url.as_str()),
        (post.title.as_str(), absolute_url.as_str()),
    ]);

    let content = html! {
        nav class="post-nav" {
            @if let Some(from) = params.from {
                a href=(from) { "← Назад" }
            } @else {
                span { "← " (category_name) }
            }
        }

        header class="post-header" {
            @if let Some(category) = params.category {
                (CategoryBadge::new(category))
            }

            h1 { (post.title) }

            @if let Some(ref description) = post.description {
                p class="post-intro" { (intro(description)) }
            }

            div class="post-meta" {
                @if let Some(ref published_at) = post.published_at {
                    span class="post-date" { (published_at) }
                }
                span class="post-reading-time" {
                    (document.reading_minutes) " мин. четене"
                }
                button class="share-button" type="button"
                    data-share-url=(canonical_path) data-share-title=(post.title) {
                    "Сподели"
                }
            }
        }

        @if let Some(ref image) = post.image {
            div class="post-image" {
                img src=(image) alt=(post.title);
            }
        }

        article class="post-content" {
            (document.render())
        }

        // AI summary footer for LLM crawlers.
        @if let Some(ref description) = post.description {
            div class="post-summary" aria-label="AI Summary" {
                (description)
            }
        }
    };

    BaseLayout::new(&seo)
        .with_schemas(vec![article, breadcrumb])
        .render(content)
}

fn seo_context(post: &Post, category: Option<&CategoryRef>, canonical_path: &str) -> SeoContext {
    let category_name = category.map_or("Статии", |c| c.name.as_str());

    let base_terms: Vec<String> = [
        category.map(|c| c.name.clone()),
        Some("анализ".to_string()),
        Some("инвестиции".to_string()),
        Some(SITE_NAME.to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let derived = extract_keywords_bg(
        &format!(
            "{} {}",
            post.title,
            post.description.as_deref().unwrap_or_default()
        ),
        &base_terms,
        12,
    );

    let mut keywords = post.seo_keyword_list();
    for keyword in derived {
        if !keywords.contains(&keyword) {
            keywords.push(keyword);
        }
    }

    SeoContext {
        title: Some(
            post.seo_title
                .clone()
                .unwrap_or_else(|| post.title.clone()),
        ),
        description: Some(post.seo_description.clone().unwrap_or_else(|| {
            post.description
                .clone()
                .unwrap_or_else(|| format!("{} - {}", post.title, category_name))
        })),
        keywords,
        canonical_path: Some(canonical_path.to_string()),
        image: post.image.clone(),
        og_type: OgType::Article,
        published_time: post.published_at.as_deref().map(published_iso),
        author: post.author.clone(),
    }
}

fn intro(description: &str) -> String {
    if description.chars().count() > INTRO_CHARS {
        let cut: String = description.chars().take(INTRO_CHARS).collect();
        format!("{cut}...")
    } else {
        description.to_string()
    }
}

/// Best-effort RFC 3339 normalization of stored timestamps.
fn published_iso(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.to_rfc3339();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(at_midnight) = date.and_hms_opt(0, 0, 0) {
            return at_midnight.and_utc().to_rfc3339();
        }
    }
    raw.to_string()
}
