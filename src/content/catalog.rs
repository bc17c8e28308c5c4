use tracing::warn;

use super::model::Post;

/// Which posts carry the `featured` flag, in list order.
///
/// The first entry wins the featured slot. More than one entry is allowed
/// content, but it is reported instead of being silently ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeaturedReport {
    pub featured_ids: Vec<String>,
}

impl FeaturedReport {
    #[must_use]
    pub fn check(posts: &[Post]) -> Self {
        Self {
            featured_ids: posts
                .iter()
                .filter(|p| p.featured)
                .map(|p| p.id.clone())
                .collect(),
        }
    }

    /// Id of the post that wins the featured slot.
    #[must_use]
    pub fn primary(&self) -> Option<&str> {
        self.featured_ids.first().map(String::as_str)
    }

    #[must_use]
    pub fn has_conflict(&self) -> bool {
        self.featured_ids.len() > 1
    }
}

/// The posts fetched for one page load.
#[derive(Debug, Clone, Default)]
pub struct PostCatalog {
    posts: Vec<Post>,
    report: FeaturedReport,
    fetch_failed: bool,
}

impl PostCatalog {
    #[must_use]
    pub fn new(posts: Vec<Post>) -> Self {
        let report = FeaturedReport::check(&posts);
        if report.has_conflict() {
            warn!(
                featured = ?report.featured_ids,
                primary = report.primary().unwrap_or_default(),
                "Multiple posts flagged as featured; only the first is highlighted"
            );
        }
        Self {
            posts,
            report,
            fetch_failed: false,
        }
    }

    /// Empty catalog standing in for a fetch that did not complete.
    #[must_use]
    pub fn failed() -> Self {
        Self {
            fetch_failed: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// First post in list order with the featured flag set.
    #[must_use]
    pub fn featured(&self) -> Option<&Post> {
        let id = self.report.primary()?;
        self.posts.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn featured_report(&self) -> &FeaturedReport {
        &self.report
    }

    #[must_use]
    pub fn fetch_failed(&self) -> bool {
        self.fetch_failed
    }
}
