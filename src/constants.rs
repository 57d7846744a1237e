/// Feed page-size policy. Display policy, not structural limits.
pub const FEED_FIRST_PAGE_SIZE: i64 = 10;
pub const FEED_INCREMENT_SIZE: i64 = 5;
pub const ALL_POSTS_PAGE_SIZE: i64 = 20;

/// Feed-card snippets are cut at this many characters (plus an ellipsis).
pub const SNIPPET_MAX_CHARS: usize = 350;

/// Distance (px) from the bottom of rendered content at which the scroll
/// loader requests the next page.
pub const SCROLL_TRIGGER_PX: f64 = 1000.0;

/// Assumed reading speed for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Number of posts included in the RSS feed.
pub const RSS_POST_LIMIT: i64 = 50;
