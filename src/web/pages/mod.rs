//! Maud page templates.

mod all_posts;
mod category;
mod home;
mod not_found;
mod post_detail;

pub use all_posts::{render_all_posts_error_page, render_all_posts_page};
pub use category::{render_category_error_page, render_category_page};
pub use home::{render_home_error_page, render_home_page};
pub use not_found::render_not_found_page;
pub use post_detail::{render_post_detail_page, PostDetailParams};

use maud::{html, Markup, Render};

use crate::components::{EmptyFeed, PostCard};
use crate::db::PostSummary;

/// Shared infinite-scroll feed fragment.
///
/// The wrapper carries the cursor and scope as data attributes; the scroll
/// loader (static/js/feed.js) reads them, calls `GET /api/posts` and appends
/// cards until the feed is exhausted.
pub(crate) fn feed_stream(
    posts: &[PostSummary],
    category_id: Option<i64>,
    from_path: &str,
) -> Markup {
    if posts.is_empty() {
        let empty = if category_id.is_some() {
            EmptyFeed::for_category()
        } else {
            EmptyFeed::new()
        };
        return empty.render();
    }

    let cursor = posts.last().map(|p| p.id.to_string());

    html! {
        div #feed
            data-cursor=[cursor]
            data-category=[category_id.map(|id| id.to_string())]
            data-from=(from_path) {

            div #feed-list {
                @for post in posts {
                    (PostCard::new(post).with_from_path(Some(from_path)))
                }
            }

            div #feed-loading hidden {
                span { "Зареждане на още публикации..." }
            }

            div #feed-end hidden {
                p class="feed-panel-title" { "🎉 Това е всичко за сега!" }
                p { "Всички публикации са заредени. Елате пак по-късно за нови анализи." }
            }
        }
    }
}
