//! Sitemap and robots.txt generation.

use crate::db::{Category, SitemapEntry};
use crate::seo::slugify_bg;

/// Generate the sitemap XML: static pages, category sections, and post URLs.
#[must_use]
pub fn generate_sitemap(
    posts: &[SitemapEntry],
    categories: &[Category],
    base_url: &str,
) -> String {
    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();

    let mut urls = vec![
        url_entry(base_url, &today, "daily", "1.0"),
        url_entry(&format!("{base_url}/all"), &today, "daily", "0.8"),
    ];

    for category in categories {
        let loc = format!("{base_url}/{}", slugify_bg(&category.name));
        urls.push(url_entry(&loc, &today, "daily", "0.7"));
    }

    for entry in posts {
        let loc = format!("{base_url}/c/{}", entry.slug);
        let lastmod = entry
            .published_at
            .as_deref()
            .map_or(today.as_str(), date_part);
        urls.push(url_entry(&loc, lastmod, "weekly", "0.6"));
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}
</urlset>"#,
        urls.join("\n")
    )
}

/// Generate robots.txt pointing crawlers at the sitemap.
#[must_use]
pub fn generate_robots_txt(base_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /api/\n\nSitemap: {base_url}/sitemap.xml\n"
    )
}

fn url_entry(loc: &str, lastmod: &str, changefreq: &str, priority: &str) -> String {
    format!(
        "  <url>\n    <loc>{}</loc>\n    <lastmod>{lastmod}</lastmod>\n    <changefreq>{changefreq}</changefreq>\n    <priority>{priority}</priority>\n  </url>",
        xml_escape(loc)
    )
}

/// Date portion of a stored timestamp, tolerant of full RFC 3339 values.
fn date_part(raw: &str) -> &str {
    raw.split('T').next().unwrap_or(raw)
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sitemap_static_and_post_entries() {
        let posts = vec![
            SitemapEntry {
                slug: "ot-sustezaniya-do-biznes".to_string(),
                published_at: Some("2025-01-10T08:00:00+00:00".to_string()),
            },
            SitemapEntry {
                slug: "vtora-publikatsiya".to_string(),
                published_at: None,
            },
        ];
        let categories = vec![Category {
            id: 3,
            name: "Бизнес".to_string(),
            description: None,
            image: None,
            color: None,
            isdeleted: false,
        }];

        let xml = generate_sitemap(&posts, &categories, "https://stox.bg");

        assert!(xml.contains("<loc>https://stox.bg</loc>"));
        assert!(xml.contains("<loc>https://stox.bg/all</loc>"));
        assert!(xml.contains("<loc>https://stox.bg/biznes</loc>"));
        assert!(xml.contains("<loc>https://stox.bg/c/ot-sustezaniya-do-biznes</loc>"));
        assert!(xml.contains("<lastmod>2025-01-10</lastmod>"));
        assert!(xml.contains("<loc>https://stox.bg/c/vtora-publikatsiya</loc>"));
    }

    #[test]
    fn test_robots_references_sitemap() {
        let robots = generate_robots_txt("https://stox.bg");
        assert!(robots.contains("Sitemap: https://stox.bg/sitemap.xml"));
        assert!(robots.contains("Disallow: /api/"));
    }
}
