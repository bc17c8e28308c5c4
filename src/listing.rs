//! Blog listing view-model.
//!
//! Derives what the blog page shows from the fetched posts plus the visitor's
//! search text and category selection. Recomputed in full on every change.

use serde::{Deserialize, Serialize};

use crate::constants::ALL_CATEGORIES;
use crate::content::Post;

/// Category constraint on the listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Parse a selection as submitted by the category buttons.
    ///
    /// `"All"`, blank, or a missing value mean no constraint.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some(ALL_CATEGORIES) => Self::All,
            Some(name) => Self::Named(name.to_string()),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Named(name) => name,
        }
    }

    /// Exact match on the category title. Posts without a category only match `All`.
    #[must_use]
    pub fn matches(&self, post: &Post) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => post.category.as_deref() == Some(name.as_str()),
        }
    }
}

/// Search text plus category selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub search: String,
    pub category: CategoryFilter,
}

impl ListingFilter {
    #[must_use]
    pub fn new(search: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.category != CategoryFilter::All
    }

    /// Whether a post passes both the search and the category constraint.
    #[must_use]
    pub fn matches(&self, post: &Post) -> bool {
        matches_search(post, &self.search.to_lowercase()) && self.category.matches(post)
    }
}

/// Case-insensitive substring match on title, excerpt, or any tag.
///
/// `needle` must already be lowercased.
fn matches_search(post: &Post, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let contains = |text: &str| text.to_lowercase().contains(needle);
    contains(post.title.as_str())
        || post.excerpt.as_deref().is_some_and(contains)
        || post.tags.iter().any(|tag| contains(tag.as_str()))
}

/// What the blog page renders for the current filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingView<'a> {
    /// At least one post matched.
    Results {
        featured: Option<&'a Post>,
        regular: Vec<&'a Post>,
    },
    /// Nothing matched; the page offers to clear the filters.
    NoResults,
}

impl<'a> ListingView<'a> {
    #[must_use]
    pub fn featured(&self) -> Option<&'a Post> {
        match self {
            Self::Results { featured, .. } => *featured,
            Self::NoResults => None,
        }
    }

    #[must_use]
    pub fn regular(&self) -> &[&'a Post] {
        match self {
            Self::Results { regular, .. } => regular,
            Self::NoResults => &[],
        }
    }

    #[must_use]
    pub fn is_no_results(&self) -> bool {
        matches!(self, Self::NoResults)
    }

    /// Number of matching posts, featured included.
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.featured().is_some()) + self.regular().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Filter the posts and split off the featured one.
///
/// The first matching post with the featured flag takes the featured slot. Every
/// other match, including further flagged posts, stays in the regular list in
/// the original order.
#[must_use]
pub fn build_listing<'a>(posts: &'a [Post], filter: &ListingFilter) -> ListingView<'a> {
    let needle = filter.search.to_lowercase();
    let mut featured = None;
    let mut regular = Vec::new();

    for post in posts
        .iter()
        .filter(|p| matches_search(p, &needle) && filter.category.matches(p))
    {
        if featured.is_none() && post.featured {
            featured = Some(post);
        } else {
            regular.push(post);
        }
    }

    if featured.is_none() && regular.is_empty() {
        ListingView::NoResults
    } else {
        ListingView::Results { featured, regular }
    }
}

/// `"All"` followed by each distinct category title in first-seen order.
#[must_use]
pub fn categories(posts: &[Post]) -> Vec<&str> {
    let mut out = vec![ALL_CATEGORIES];
    for category in posts.iter().filter_map(|p| p.category.as_deref()) {
        if !out.contains(&category) {
            out.push(category);
        }
    }
    out
}

/// Search and category state for one listing.
///
/// Every mutation is followed by a fresh [`ListingState::view`]; nothing is cached.
#[derive(Debug, Clone, Default)]
pub struct ListingState {
    filter: ListingFilter,
}

impl ListingState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_filter(filter: ListingFilter) -> Self {
        Self { filter }
    }

    #[must_use]
    pub fn filter(&self) -> &ListingFilter {
        &self.filter
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        self.filter.category = category;
    }

    /// Back to empty search and `All`.
    pub fn clear_filters(&mut self) {
        self.filter = ListingFilter::default();
    }

    #[must_use]
    pub fn view<'a>(&self, posts: &'a [Post]) -> ListingView<'a> {
        build_listing(posts, &self.filter)
    }
}

/// Query parameters accepted by the listing routes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingQuery {
    pub q: Option<String>,
    pub category: Option<String>,
}

impl From<&ListingQuery> for ListingFilter {
    fn from(query: &ListingQuery) -> Self {
        Self::new(
            query.q.as_deref().map(str::trim).unwrap_or_default(),
            CategoryFilter::parse(query.category.as_deref()),
        )
    }
}

/// JSON form of a listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse<'a> {
    pub search: &'a str,
    pub category: &'a str,
    pub categories: Vec<&'a str>,
    pub no_results: bool,
    pub fetch_failed: bool,
    pub featured: Option<&'a Post>,
    pub posts: Vec<&'a Post>,
}

impl<'a> ListingResponse<'a> {
    #[must_use]
    pub fn new(
        all_posts: &'a [Post],
        filter: &'a ListingFilter,
        view: &ListingView<'a>,
        fetch_failed: bool,
    ) -> Self {
        Self {
            search: &filter.search,
            category: filter.category.label(),
            categories: categories(all_posts),
            no_results: view.is_no_results(),
            fetch_failed,
            featured: view.featured(),
            posts: view.regular().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_posts() -> Vec<Post> {
        vec![
            Post::new("1", "AI Supply Chain")
                .featured()
                .with_category("Tech"),
            Post::new("2", "Org Design").with_category("Strategy"),
        ]
    }

    fn ids<'a>(posts: &[&'a Post]) -> Vec<&'a str> {
        posts.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_scenario_search_ai() {
        let posts = sample_posts();
        let view = build_listing(&posts, &ListingFilter::new("AI", CategoryFilter::All));
        assert_eq!(view.featured().map(|p| p.id.as_str()), Some("1"));
        assert!(view.regular().is_empty());
    }

    #[test]
    fn test_scenario_search_org() {
        let posts = sample_posts();
        let view = build_listing(&posts, &ListingFilter::new("Org", CategoryFilter::All));
        assert!(view.featured().is_none());
        assert_eq!(ids(view.regular()), vec!["2"]);
    }

    #[test]
    fn test_scenario_no_results() {
        let posts = sample_posts();
        let view = build_listing(&posts, &ListingFilter::new("zzz", CategoryFilter::All));
        assert_eq!(view, ListingView::NoResults);
        assert!(view.is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_over_excerpt_and_tags() {
        let posts = vec![
            Post::new("1", "Quarterly review").with_excerpt("Notes on HYBRID teams"),
            Post::new("2", "Security").with_tags(["Remote Work"]),
            Post::new("3", "Unrelated"),
        ];

        let view = build_listing(&posts, &ListingFilter::new("hybrid", CategoryFilter::All));
        assert_eq!(ids(view.regular()), vec!["1"]);

        let view = build_listing(&posts, &ListingFilter::new("remote", CategoryFilter::All));
        assert_eq!(ids(view.regular()), vec!["2"]);
    }

    #[test]
    fn test_category_is_exact_match() {
        let posts = vec![
            Post::new("1", "A").with_category("Strategy"),
            Post::new("2", "B").with_category("strategy"),
            Post::new("3", "C"),
        ];
        let filter = ListingFilter::new("", CategoryFilter::Named("Strategy".to_string()));
        let view = build_listing(&posts, &filter);
        assert_eq!(ids(view.regular()), vec!["1"]);
    }

    #[test]
    fn test_no_featured_keeps_everything_regular() {
        let posts = vec![Post::new("1", "A"), Post::new("2", "B")];
        let view = build_listing(&posts, &ListingFilter::default());
        assert!(view.featured().is_none());
        assert_eq!(ids(view.regular()), vec!["1", "2"]);
    }

    #[test]
    fn test_extra_featured_posts_stay_in_regular_list() {
        let posts = vec![
            Post::new("1", "A"),
            Post::new("2", "B").featured(),
            Post::new("3", "C").featured(),
        ];
        let view = build_listing(&posts, &ListingFilter::default());
        assert_eq!(view.featured().map(|p| p.id.as_str()), Some("2"));
        assert_eq!(ids(view.regular()), vec!["1", "3"]);
        assert!(view.regular()[1].featured);
    }

    #[test]
    fn test_featured_follows_filter() {
        let posts = vec![
            Post::new("1", "AI").featured().with_category("Tech"),
            Post::new("2", "Retail").featured().with_category("Case Study"),
        ];
        let filter = ListingFilter::new("", CategoryFilter::Named("Case Study".to_string()));
        let view = build_listing(&posts, &filter);
        assert_eq!(view.featured().map(|p| p.id.as_str()), Some("2"));
        assert!(view.regular().is_empty());
    }

    #[test]
    fn test_state_clear_filters_restores_full_list() {
        let posts = vec![
            Post::new("1", "A").with_category("X"),
            Post::new("2", "B").featured().with_category("Y"),
            Post::new("3", "C").with_category("X"),
        ];
        let mut state = ListingState::new();
        state.set_search("zzz");
        state.select_category(CategoryFilter::Named("X".to_string()));
        assert!(state.view(&posts).is_no_results());
        assert!(state.filter().is_active());

        state.clear_filters();
        assert!(!state.filter().is_active());
        let view = state.view(&posts);
        assert_eq!(view.featured().map(|p| p.id.as_str()), Some("2"));
        assert_eq!(ids(view.regular()), vec!["1", "3"]);
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn test_categories_first_seen_order() {
        let posts = vec![
            Post::new("1", "A").with_category("Strategy"),
            Post::new("2", "B").with_category("Tech"),
            Post::new("3", "C").with_category("Strategy"),
            Post::new("4", "D"),
        ];
        assert_eq!(categories(&posts), vec!["All", "Strategy", "Tech"]);
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!(CategoryFilter::parse(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(Some("All")), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(Some("  ")), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse(Some("Strategy")),
            CategoryFilter::Named("Strategy".to_string())
        );
    }

    #[test]
    fn test_listing_filter_from_query() {
        let query = ListingQuery {
            q: Some("  ai ".to_string()),
            category: Some("Tech".to_string()),
        };
        let filter = ListingFilter::from(&query);
        assert_eq!(filter.search, "ai");
        assert_eq!(filter.category, CategoryFilter::Named("Tech".to_string()));
    }

    #[test]
    fn test_every_result_satisfies_filter() {
        let posts = vec![
            Post::new("1", "Alpha").with_category("X").with_tags(["beta"]),
            Post::new("2", "Gamma").with_category("X").with_excerpt("has beta inside"),
            Post::new("3", "Beta release").with_category("Y"),
            Post::new("4", "Delta").with_category("X"),
        ];
        for search in ["", "beta", "BETA", "a", "zz"] {
            for category in [CategoryFilter::All, CategoryFilter::Named("X".to_string())] {
                let filter = ListingFilter::new(search, category);
                let view = build_listing(&posts, &filter);
                for post in view.featured().into_iter().chain(view.regular().iter().copied()) {
                    assert!(filter.matches(post), "{} fails {filter:?}", post.id);
                }
            }
        }
    }
}
