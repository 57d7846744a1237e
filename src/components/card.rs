//! Feed post cards and feed state panels.

use maud::{html, Markup, Render};
use urlencoding::encode;

use crate::constants::SNIPPET_MAX_CHARS;
use crate::content::snippet;
use crate::db::PostSummary;

use super::badge::CategoryBadge;

/// Characters of raw content used as a preview when a post has no
/// description.
const CONTENT_PREVIEW_CHARS: usize = 200;

/// One post in a feed listing.
#[derive(Debug, Clone)]
pub struct PostCard<'a> {
    post: &'a PostSummary,
    from_path: Option<&'a str>,
}

impl<'a> PostCard<'a> {
    #[must_use]
    pub fn new(post: &'a PostSummary) -> Self {
        Self {
            post,
            from_path: None,
        }
    }

    /// Carry a return path so the detail page can link back to this feed.
    #[must_use]
    pub fn with_from_path(mut self, from_path: Option<&'a str>) -> Self {
        self.from_path = from_path;
        self
    }

    /// Detail link: canonical slug-or-id path, plus the return path.
    fn view_link(&self) -> String {
        let path = format!("/c/{}", self.post.canonical_slug());
        match self.from_path {
            Some(from) => format!("{path}?from={}", encode(from)),
            None => path,
        }
    }

    /// Card snippet: description first, else a short content preview,
    /// cut to the snippet limit with an ellipsis.
    fn snippet_text(&self) -> String {
        let display = match (&self.post.description, &self.post.content) {
            (Some(description), _) if !description.is_empty() => description.clone(),
            (_, Some(content)) => content.chars().take(CONTENT_PREVIEW_CHARS).collect(),
            _ => String::new(),
        };
        snippet(&display, SNIPPET_MAX_CHARS)
    }
}

impl Render for PostCard<'_> {
    fn render(&self) -> Markup {
        let post = self.post;
        let link = self.view_link();

        html! {
            article class="post-card" data-post-id=(post.id) {
                @if let Some(ref image) = post.image {
                    a class="post-card-image" href=(link) {
                        img src=(image) alt=(post.title) loading="lazy";
                    }
                }

                div class="post-card-body" {
                    div class="post-card-header" {
                        (CategoryBadge::new(&post.category))
                        button class="share-button" type="button"
                            data-share-url=(link) data-share-title=(post.title) {
                            "Сподели"
                        }
                    }

                    a href=(link) {
                        h2 { (post.title) }
                    }

                    p class="post-card-snippet" { (self.snippet_text()) }

                    div class="post-card-footer" {
                        @if let Some(ref published) = post.published_at {
                            span class="post-card-date" { (published) }
                        }
                        a class="read-more" href=(link) { "Прочети повече" }
                    }
                }
            }
        }
    }
}

/// Empty-feed panel.
#[derive(Debug, Clone)]
pub struct EmptyFeed {
    message: &'static str,
}

impl EmptyFeed {
    #[must_use]
    pub fn new() -> Self {
        Self {
            message: "Няма налични публикации.",
        }
    }

    #[must_use]
    pub fn for_category() -> Self {
        Self {
            message: "Няма налични публикации в тази категория.",
        }
    }
}

impl Default for EmptyFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for EmptyFeed {
    fn render(&self) -> Markup {
        html! {
            div class="feed-panel feed-empty" {
                p class="feed-panel-title" { (self.message) }
                p { "Моля, проверете отново по-късно за нови публикации." }
            }
        }
    }
}

/// Degraded view shown when the content store is unreachable. Callers do
/// not retry automatically.
#[derive(Debug, Clone, Default)]
pub struct FeedErrorPanel;

impl Render for FeedErrorPanel {
    fn render(&self) -> Markup {
        html! {
            div class="feed-panel feed-error" {
                p class="feed-panel-title" { "Грешка при зареждане на публикации." }
                p { "Моля, опитайте отново по-късно." }
            }
        }
    }
}
