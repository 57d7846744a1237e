//! RSS 2.0 feed generation.

use std::collections::HashMap;

use crate::db::Post;
use crate::seo::SITE_PUBLISHER;

/// Characters of content used as an item description fallback.
const DESCRIPTION_FALLBACK_CHARS: usize = 200;

/// Generate the RSS 2.0 feed XML for the most recent slugged posts.
///
/// `category_names` maps category id to display name for item categories.
#[must_use]
pub fn generate_rss(
    posts: &[Post],
    category_names: &HashMap<i64, String>,
    base_url: &str,
) -> String {
    let year = chrono::Utc::now().format("%Y");

    let items: String = posts
        .iter()
        .map(|post| {
            let title = xml_escape(&post.title);
            let link = format!("{base_url}{}", post.canonical_path());
            let category = post
                .category
                .and_then(|id| category_names.get(&id))
                .map_or("Общи", String::as_str);
            let author = post.author.as_deref().unwrap_or("stox.bg Team");
            let pub_date = post.published_at.as_deref().unwrap_or("");
            let description = xml_escape(&item_description(post));

            let enclosure = post.image.as_deref().map_or(String::new(), |image| {
                let url = absolute_image(image, base_url);
                format!("\n      <enclosure url=\"{}\" type=\"image/jpeg\"/>", xml_escape(&url))
            });

            format!(
                r#"    <item>
      <title>{title}</title>
      <link>{link}</link>
      <guid isPermaLink="false">post-{id}</guid>
      <description>{description}</description>
      <category>{category}</category>
      <author>{author}</author>
      <pubDate>{pub_date}</pubDate>{enclosure}
    </item>"#,
                id = post.id,
                category = xml_escape(category),
                author = xml_escape(author),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:atom="http://www.w3.org/2005/Atom">
  <channel>
    <title>{publisher}</title>
    <link>{base_url}</link>
    <description>Най-новите новини от Devids</description>
    <language>bg</language>
    <copyright>© {year} {publisher}</copyright>
    <ttl>60</ttl>
    <atom:link href="https://pubsubhubbub.appspot.com/" rel="hub"/>
    <atom:link href="{base_url}/feed.xml" rel="self" type="application/rss+xml"/>
{items}
  </channel>
</rss>"#,
        publisher = xml_escape(SITE_PUBLISHER),
    )
}

fn item_description(post: &Post) -> String {
    if let Some(description) = post.description.as_deref() {
        if !description.is_empty() {
            return description.to_string();
        }
    }

    post.content.as_deref().map_or(String::new(), |content| {
        let stripped: Vec<char> = content
            .chars()
            .filter(|c| !matches!(c, '#' | '*' | '_' | '`'))
            .collect();
        let preview: String = stripped.iter().take(DESCRIPTION_FALLBACK_CHARS).collect();
        if stripped.len() > DESCRIPTION_FALLBACK_CHARS {
            format!("{preview}...")
        } else {
            preview
        }
    })
}

fn absolute_image(image: &str, base_url: &str) -> String {
    if image.starts_with("http://") || image.starts_with("https://") {
        image.to_string()
    } else if image.starts_with('/') {
        format!("{base_url}{image}")
    } else {
        format!("{base_url}/{image}")
    }
}

/// Escape XML special characters
fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
