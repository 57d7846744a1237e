//! Maud HTML components for the web UI.
//!
//! - `layout`: HTML skeleton, head metadata, navigation, footer
//! - `metadata`: Open Graph / Twitter Card head tags
//! - `badge`: category badges
//! - `card`: feed post cards and empty/error panels

pub mod badge;
pub mod card;
pub mod layout;
pub mod metadata;

pub use badge::CategoryBadge;
pub use card::{EmptyFeed, FeedErrorPanel, PostCard};
pub use layout::BaseLayout;
pub use metadata::SeoMeta;
