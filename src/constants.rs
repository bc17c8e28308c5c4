//! Shared constants used across the application.

/// User agent string sent with content store requests.
pub const USER_AGENT: &str = concat!("consultpro-site/", env!("CARGO_PKG_VERSION"));

/// Category filter value meaning "no category constraint".
pub const ALL_CATEGORIES: &str = "All";

/// Number of posts shown in the insights preview on the home page.
pub const INSIGHTS_PREVIEW_COUNT: usize = 4;

/// Maximum number of tags rendered on a post card.
pub const CARD_TAG_LIMIT: usize = 3;
