//! Post retrieval.
//!
//! A [`ContentSource`] produces the raw post list; [`ContentFetcher`] runs it once
//! per page load and hands back a [`PostCatalog`]. Fetch failures are logged and
//! surface as an empty catalog with [`PostCatalog::fetch_failed`] set.

mod catalog;
mod fixtures;
mod model;
mod sanity;
mod wire;

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info};

pub use catalog::{FeaturedReport, PostCatalog};
pub use fixtures::StaticContent;
pub use model::{Author, ContentRef, Post, PublishedAt, Stats};
pub use sanity::{SanityClient, POSTS_QUERY};
pub use wire::decode_posts;

use crate::config::{Config, ContentSourceKind};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("content store returned HTTP {status}")]
    Status { status: u16 },
    #[error("failed to decode content response: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("failed to parse post list: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Something that can produce the full list of posts in one read.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Fetch every post, in the order the source delivers them.
    async fn fetch_posts(&self) -> Result<Vec<Post>, ContentError>;
}

/// Runs the configured content source for each page load.
#[derive(Clone)]
pub struct ContentFetcher {
    source: Arc<dyn ContentSource>,
}

impl std::fmt::Debug for ContentFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentFetcher")
            .field("source", &self.source.name())
            .finish()
    }
}

impl ContentFetcher {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// Build the fetcher for the source selected in the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client for a remote source cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, ContentError> {
        let source: Arc<dyn ContentSource> = match config.content_source {
            ContentSourceKind::Static => Arc::new(StaticContent),
            ContentSourceKind::Sanity => Arc::new(SanityClient::new(config)?),
        };
        Ok(Self::new(source))
    }

    #[must_use]
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Fetch the posts once. Errors collapse into an empty, failed catalog.
    pub async fn load(&self) -> PostCatalog {
        let started = Instant::now();
        match self.source.fetch_posts().await {
            Ok(posts) => {
                info!(
                    source = self.source.name(),
                    count = posts.len(),
                    elapsed_ms = started.elapsed().as_millis(),
                    "Fetched posts"
                );
                PostCatalog::new(posts)
            }
            Err(e) => {
                error!(source = self.source.name(), "Failed to fetch posts: {e}");
                PostCatalog::failed()
            }
        }
    }
}
