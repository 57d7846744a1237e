//! Post content projection.
//!
//! Raw `content` arrives from upstream ingestion as plain text, as markdown
//! with literal `\n` escape sequences, or occasionally as a stringified JSON
//! structure. [`project_content`] normalizes the text and parses it into a
//! fixed set of structural blocks; anything unrecognized stays a plain
//! paragraph and is escaped on render, never interpreted as markup.

use maud::{html, Markup};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::WORDS_PER_MINUTE;

/// Standalone non-markdown image URLs are ingestion artifacts, not embeds.
static RAW_IMAGE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^https?://\S+\.(?:png|jpe?g|gif|webp|svg)(?:\?\S*)?$")
        .expect("valid raw image regex")
});

/// Known CDN storage hosts whose bare URLs are likewise stripped.
static CDN_IMAGE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^https?://[^\s]*(?:supabase\.co/storage|storage\.googleapis\.com)/\S+$")
        .expect("valid CDN image regex")
});

/// One renderable structural element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(String),
    Paragraph(String),
    List(Vec<String>),
    Rule,
}

/// Normalized, parsed post content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderableDocument {
    pub blocks: Vec<Block>,
    pub word_count: usize,
    pub reading_minutes: usize,
}

impl RenderableDocument {
    /// Render the document through maud. Text nodes are auto-escaped, so raw
    /// content can never become live markup.
    #[must_use]
    pub fn render(&self) -> Markup {
        html! {
            @for block in &self.blocks {
                @match block {
                    Block::Heading(text) => { h2 { (text) } },
                    Block::Paragraph(text) => { p { (text) } },
                    Block::List(items) => {
                        ul {
                            @for item in items {
                                li { (item) }
                            }
                        }
                    },
                    Block::Rule => { hr; },
                }
            }
        }
    }
}

/// Normalize raw content. The rules apply in this order:
/// 1. literal `\n\n` and `\n` escape sequences become real line breaks,
/// 2. leading blockquote markers (`>` at line start) are stripped,
/// 3. standalone raw image-URL lines are dropped.
#[must_use]
pub fn normalize_content(raw: &str) -> String {
    let unescaped = raw.replace("\\n\\n", "\n\n").replace("\\n", "\n");

    let lines: Vec<&str> = unescaped
        .lines()
        .map(strip_blockquote_marker)
        .filter(|line| !is_raw_image_line(line))
        .collect();

    lines.join("\n")
}

fn strip_blockquote_marker(line: &str) -> &str {
    line.strip_prefix("> ")
        .or_else(|| line.strip_prefix('>'))
        .unwrap_or(line)
}

fn is_raw_image_line(line: &str) -> bool {
    let trimmed = line.trim();
    RAW_IMAGE_LINE.is_match(trimmed) || CDN_IMAGE_LINE.is_match(trimmed)
}

/// Project raw content into a renderable document.
///
/// Recognized constructs: `## ` headings, `- ` bullets, `---` rules, and
/// paragraph breaks on blank lines. A stringified JSON structure has no
/// dedicated renderer and flows through as paragraph text.
#[must_use]
pub fn project_content(raw: &str) -> RenderableDocument {
    let normalized = normalize_content(raw);
    let blocks = parse_blocks(&normalized);
    let word_count = normalized.split_whitespace().count();

    RenderableDocument {
        blocks,
        word_count,
        reading_minutes: reading_time_minutes(word_count),
    }
}

/// `max(1, ceil(words / 200))` minutes.
#[must_use]
pub fn reading_time_minutes(word_count: usize) -> usize {
    word_count.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Character-based truncation with ellipsis; content is Cyrillic, so byte
/// slicing would split code points.
#[must_use]
pub fn snippet(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(max_chars).collect();
        cut.push_str("...");
        cut
    }
}

fn parse_blocks(normalized: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut list_items: Vec<String> = Vec::new();

    let flush_paragraph = |buf: &mut Vec<&str>, out: &mut Vec<Block>| {
        if !buf.is_empty() {
            out.push(Block::Paragraph(buf.join(" ")));
            buf.clear();
        }
    };
    let flush_list = |items: &mut Vec<String>, out: &mut Vec<Block>| {
        if !items.is_empty() {
            out.push(Block::List(std::mem::take(items)));
        }
    };

    for line in normalized.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
            flush_list(&mut list_items, &mut blocks);
        } else if let Some(heading) = trimmed.strip_prefix("## ") {
            flush_paragraph(&mut paragraph, &mut blocks);
            flush_list(&mut list_items, &mut blocks);
            blocks.push(Block::Heading(heading.trim().to_string()));
        } else if trimmed == "---" {
            flush_paragraph(&mut paragraph, &mut blocks);
            flush_list(&mut list_items, &mut blocks);
            blocks.push(Block::Rule);
        } else if let Some(item) = trimmed.strip_prefix("- ") {
            flush_paragraph(&mut paragraph, &mut blocks);
            list_items.push(item.trim().to_string());
        } else {
            flush_list(&mut list_items, &mut blocks);
            paragraph.push(trimmed);
        }
    }

    flush_paragraph(&mut paragraph, &mut blocks);
    flush_list(&mut list_items, &mut blocks);

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_unescapes_literal_newlines() {
        let raw = r"първи ред\nвтори ред\n\nнов абзац";
        assert_eq!(
            normalize_content(raw),
            "първи ред\nвтори ред\n\nнов абзац"
        );
    }

    #[test]
    fn test_normalize_strips_blockquote_markers() {
        assert_eq!(normalize_content("> цитат\n>втори"), "цитат\nвтори");
    }

    #[test]
    fn test_normalize_drops_raw_image_lines() {
        let raw = "текст\nhttps://cdn.example.com/chart.PNG?v=2\nоще текст";
        assert_eq!(normalize_content(raw), "текст\nоще текст");

        let cdn = "https://abc.supabase.co/storage/v1/object/public/img/a";
        assert_eq!(normalize_content(cdn), "");
    }

    #[test]
    fn test_inline_image_url_is_kept() {
        let raw = "виж https://cdn.example.com/chart.png за графиката";
        assert_eq!(normalize_content(raw), raw);
    }

    #[test]
    fn test_project_scenario_blocks_in_order() {
        let raw = r"## Резултати\n\n- Приход: 10%\n\n---\n\nОбобщение";
        let doc = project_content(raw);

        assert_eq!(
            doc.blocks,
            vec![
                Block::Heading("Резултати".to_string()),
                Block::List(vec!["Приход: 10%".to_string()]),
                Block::Rule,
                Block::Paragraph("Обобщение".to_string()),
            ]
        );
    }

    #[test]
    fn test_consecutive_bullets_form_one_list() {
        let doc = project_content("- едно\n- две\n- три");
        assert_eq!(
            doc.blocks,
            vec![Block::List(vec![
                "едно".to_string(),
                "две".to_string(),
                "три".to_string()
            ])]
        );
    }

    #[test]
    fn test_multiline_paragraph_joins_lines() {
        let doc = project_content("първи ред\nвтори ред");
        assert_eq!(
            doc.blocks,
            vec![Block::Paragraph("първи ред втори ред".to_string())]
        );
    }

    #[test]
    fn test_json_content_stays_plain_text() {
        let doc = project_content(r#"{"summary": "данни"}"#);
        assert_eq!(
            doc.blocks,
            vec![Block::Paragraph(r#"{"summary": "данни"}"#.to_string())]
        );
    }

    #[test]
    fn test_render_escapes_markup() {
        let doc = project_content("<script>alert(1)</script>");
        let html = doc.render().into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_block_elements() {
        let raw = r"## Заглавие\n\n- точка\n\n---\n\nабзац";
        let html = project_content(raw).render().into_string();
        assert!(html.contains("<h2>Заглавие</h2>"));
        assert!(html.contains("<li>точка</li>"));
        assert!(html.contains("<hr>"));
        assert!(html.contains("<p>абзац</p>"));
    }

    #[test]
    fn test_reading_time() {
        assert_eq!(reading_time_minutes(0), 1);
        assert_eq!(reading_time_minutes(199), 1);
        assert_eq!(reading_time_minutes(200), 1);
        assert_eq!(reading_time_minutes(201), 2);
        assert_eq!(reading_time_minutes(1000), 5);
    }

    #[test]
    fn test_snippet_truncation() {
        let long: String = "я".repeat(500);
        let cut = snippet(&long, 350);
        assert_eq!(cut.chars().count(), 353);
        assert!(cut.ends_with("..."));

        assert_eq!(snippet("кратко", 350), "кратко");
    }
}
