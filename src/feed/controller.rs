//! Incremental-load state machine for a feed.
//!
//! Seeded with the first server-rendered page, the controller tracks the
//! last-seen post id and appends subsequent pages fetched from a
//! [`FeedSource`]. The browser counterpart (static/js/feed.js) drives the
//! same transitions against `GET /api/posts`.

use tracing::warn;

use crate::constants::{FEED_INCREMENT_SIZE, SCROLL_TRIGGER_PX};
use crate::db::PostSummary;

use super::{FeedScope, FeedSource};

/// Controller state. `Exhausted` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Loading,
    Exhausted,
}

/// Cursor-based incremental loader for one feed scope.
#[derive(Debug)]
pub struct FeedController<S> {
    source: S,
    scope: FeedScope,
    posts: Vec<PostSummary>,
    cursor: Option<i64>,
    state: ControllerState,
}

impl<S: FeedSource> FeedController<S> {
    /// Seed the controller with the first page. The cursor starts at the
    /// last post's id; an empty first page leaves it unset, so no fetch
    /// will ever trigger.
    #[must_use]
    pub fn new(source: S, scope: FeedScope, initial_posts: Vec<PostSummary>) -> Self {
        let cursor = initial_posts.last().map(|p| p.id);
        Self {
            source,
            scope,
            posts: initial_posts,
            cursor,
            state: ControllerState::Idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    #[must_use]
    pub fn cursor(&self) -> Option<i64> {
        self.cursor
    }

    #[must_use]
    pub fn posts(&self) -> &[PostSummary] {
        &self.posts
    }

    /// Whether a scroll event at `distance_to_bottom` should trigger a
    /// fetch: within the proximity threshold, a cursor exists, and no fetch
    /// is in flight or the feed exhausted. Events ignored while `Loading`
    /// are dropped, not queued; the next scroll event retriggers.
    #[must_use]
    pub fn should_fetch(&self, distance_to_bottom: f64) -> bool {
        distance_to_bottom <= SCROLL_TRIGGER_PX
            && self.cursor.is_some()
            && self.state == ControllerState::Idle
    }

    /// Fetch and append the next page, returning how many posts arrived.
    ///
    /// Transitions: non-empty page -> `Idle` with advanced cursor; empty
    /// page -> `Exhausted`; store error -> `Exhausted` (incremental loading
    /// halts silently, the content already on screen stays usable).
    pub async fn load_more(&mut self) -> usize {
        if self.state != ControllerState::Idle {
            return 0;
        }
        let Some(cursor) = self.cursor else {
            return 0;
        };

        self.state = ControllerState::Loading;

        let page = match self
            .source
            .fetch_page(self.scope, Some(cursor), FEED_INCREMENT_SIZE)
            .await
        {
            Ok(page) => page,
            Err(e) => {
                warn!("Feed fetch failed, halting incremental loading: {e:#}");
                self.state = ControllerState::Exhausted;
                return 0;
            }
        };

        if page.is_end_of_feed() {
            self.state = ControllerState::Exhausted;
            return 0;
        }

        // Pages arrive strictly below the cursor, so plain append keeps the
        // whole list in descending id order.
        debug_assert!(page.posts.first().is_some_and(|p| p.id < cursor));

        let count = page.posts.len();
        self.cursor = page.next_cursor;
        self.posts.extend(page.posts);
        self.state = ControllerState::Idle;

        count
    }
}
