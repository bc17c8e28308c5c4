//! Blog listing page for the web UI.
//!
//! Search box and category chips are plain GET forms, so every filter change
//! is a fresh request that rebuilds the listing.

use maud::{html, Markup, Render};

use crate::components::{
    Alert, BaseLayout, Button, FeaturedPostCard, Form, Input, NoResults, PostGrid,
};
use crate::content::Post;
use crate::listing::{categories, CategoryFilter, ListingFilter, ListingView};
use crate::theme::ThemePreferences;

/// Parameters for rendering the blog page.
#[derive(Debug)]
pub struct BlogPageParams<'a> {
    pub prefs: ThemePreferences,
    pub site_name: &'a str,
    /// The whole catalog, used to build the category chips.
    pub all_posts: &'a [Post],
    pub filter: &'a ListingFilter,
    pub view: &'a ListingView<'a>,
    pub fetch_failed: bool,
}

/// Render the blog listing page.
#[must_use]
pub fn render_blog_page(params: &BlogPageParams<'_>) -> Markup {
    let filter = params.filter;

    let content = html! {
        section class="page-header" {
            div class="container" {
                h1 {
                    "Insights & "
                    span class="accent" { "Innovation" }
                }
                p class="lead" {
                    "Explore our latest thinking, case studies, and research on the trends "
                    "shaping the future of business and technology."
                }
                div class="listing-controls" {
                    (SearchBar::new(filter))
                    (CategoryChips::new(categories(params.all_posts), filter))
                }
            }
        }

        section class="listing" {
            div class="container" {
                @if params.fetch_failed {
                    (Alert::info("We couldn't load the latest insights right now. Please try again later."))
                }
                @match params.view {
                    ListingView::NoResults => {
                        (NoResults::new("/blog"))
                    }
                    ListingView::Results { featured, regular } => {
                        @if let Some(post) = featured {
                            (FeaturedPostCard::new(post))
                        }
                        @if !regular.is_empty() {
                            (PostGrid::new(regular).with_tags())
                        }
                    }
                }
            }
        }
    };

    BaseLayout::new("Insights", params.prefs)
        .with_site_name(params.site_name)
        .with_path("/blog")
        .with_description("Insights, case studies and research from our consultants.")
        .render(content)
}

/// Search form that keeps the selected category.
struct SearchBar<'a> {
    filter: &'a ListingFilter,
}

impl<'a> SearchBar<'a> {
    const fn new(filter: &'a ListingFilter) -> Self {
        Self { filter }
    }
}

impl Render for SearchBar<'_> {
    fn render(&self) -> Markup {
        let fields = html! {
            (Input::search("q")
                .value_non_empty(&self.filter.search)
                .placeholder("Search insights..."))
            @if let CategoryFilter::Named(category) = &self.filter.category {
                (Input::hidden("category", category))
            }
            (Button::primary("Search").r#type("submit"))
        };
        Form::get("/blog", fields).class("search-bar").render()
    }
}

/// One submit button per category, carrying the current search along.
struct CategoryChips<'a> {
    categories: Vec<&'a str>,
    filter: &'a ListingFilter,
}

impl<'a> CategoryChips<'a> {
    const fn new(categories: Vec<&'a str>, filter: &'a ListingFilter) -> Self {
        Self { categories, filter }
    }
}

impl Render for CategoryChips<'_> {
    fn render(&self) -> Markup {
        let selected = self.filter.category.label();
        let fields = html! {
            @if !self.filter.search.is_empty() {
                (Input::hidden("q", &self.filter.search))
            }
            @for category in &self.categories {
                (Button::chip(category, *category == selected)
                    .r#type("submit")
                    .field("category", category))
            }
        };
        Form::get("/blog", fields).class("category-chips").render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::build_listing;

    fn posts() -> Vec<Post> {
        vec![
            Post::new("1", "AI Supply Chain")
                .featured()
                .with_category("Digital Transformation"),
            Post::new("2", "Org Design").with_category("Strategy"),
            Post::new("3", "Retail Case Study").with_category("Case Study"),
        ]
    }

    fn render(posts: &[Post], filter: &ListingFilter, fetch_failed: bool) -> String {
        let view = build_listing(posts, filter);
        render_blog_page(&BlogPageParams {
            prefs: ThemePreferences::default(),
            site_name: "ConsultPro",
            all_posts: posts,
            filter,
            view: &view,
            fetch_failed,
        })
        .into_string()
    }

    #[test]
    fn test_blog_renders_featured_and_grid() {
        let posts = posts();
        let html = render(&posts, &ListingFilter::default(), false);

        assert!(html.contains("featured-post"));
        assert!(html.contains("AI Supply Chain"));
        assert!(html.contains("Org Design"));
        assert!(html.contains("Retail Case Study"));
        assert!(!html.contains("No insights found"));
    }

    #[test]
    fn test_blog_category_chips() {
        let posts = posts();
        let filter = ListingFilter::new("", CategoryFilter::parse(Some("Strategy")));
        let html = render(&posts, &filter, false);

        assert!(html.contains(r#"class="chip chip-selected" type="submit" name="category" value="Strategy""#));
        assert!(html.contains(r#"class="chip" type="submit" name="category" value="All""#));
        assert!(html.contains(r#"name="category" value="Case Study""#));
        assert!(html.contains(r#"<input type="hidden" name="category" value="Strategy">"#));
    }

    #[test]
    fn test_blog_no_results() {
        let posts = posts();
        let filter = ListingFilter::new("zzz", CategoryFilter::All);
        let html = render(&posts, &filter, false);

        assert!(html.contains("No insights found matching your criteria."));
        assert!(html.contains("Clear Filters"));
        assert!(html.contains(r#"value="zzz""#));
        assert!(!html.contains("featured-post"));
    }

    #[test]
    fn test_blog_fetch_failed_notice() {
        let html = render(&[], &ListingFilter::default(), true);
        assert!(html.contains("alert-info"));
        assert!(html.contains("No insights found matching your criteria."));
    }
}
