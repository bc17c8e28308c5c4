//! Card components for displaying posts.
//!
//! Every optional post field is rendered only when present.

use maud::{html, Markup, Render};

use crate::components::badge::{CategoryBadge, FeaturedBadge, TagBadge};
use crate::components::button::Button;
use crate::constants::CARD_TAG_LIMIT;
use crate::content::{Author, Post, Stats};

/// A post card for the blog grid and the home page preview.
///
/// # Example
///
/// ```ignore
/// use crate::components::card::PostCard;
///
/// let card = PostCard::new(&post).with_tags();
/// ```
#[derive(Debug, Clone)]
pub struct PostCard<'a> {
    pub post: &'a Post,
    pub show_tags: bool,
}

impl<'a> PostCard<'a> {
    #[must_use]
    pub const fn new(post: &'a Post) -> Self {
        Self {
            post,
            show_tags: false,
        }
    }

    #[must_use]
    pub const fn with_tags(mut self) -> Self {
        self.show_tags = true;
        self
    }
}

impl Render for PostCard<'_> {
    fn render(&self) -> Markup {
        let post = self.post;
        let anchor = post_anchor(post);

        html! {
            article class="post-card" id=(anchor) {
                @if let Some(image) = &post.image {
                    div class="post-card-image" {
                        img src=(image) alt=(post.title) loading="lazy";
                        @if let Some(category) = &post.category {
                            (CategoryBadge::new(category).solid())
                        }
                    }
                } @else if let Some(category) = &post.category {
                    (CategoryBadge::new(category))
                }
                div class="post-card-body" {
                    h3 { (post.title) }
                    @if let Some(excerpt) = &post.excerpt {
                        p class="excerpt" { (excerpt) }
                    }
                    @if let Some(author) = &post.author {
                        (AuthorLine::new(author))
                    }
                    @if let Some(stats) = &post.stats {
                        (StatsLine::new(stats))
                    }
                    @if self.show_tags && !post.tags.is_empty() {
                        div class="tags" {
                            @for tag in post.tags.iter().take(CARD_TAG_LIMIT) {
                                (TagBadge::new(tag))
                            }
                        }
                    }
                    footer class="post-card-footer" {
                        (MetaLine::new(post))
                        (Button::link("Read \u{2192}").href(&format!("/blog#{anchor}")))
                    }
                }
            }
        }
    }
}

/// The highlighted post at the top of the blog listing.
#[derive(Debug, Clone)]
pub struct FeaturedPostCard<'a> {
    pub post: &'a Post,
}

impl<'a> FeaturedPostCard<'a> {
    #[must_use]
    pub const fn new(post: &'a Post) -> Self {
        Self { post }
    }
}

impl Render for FeaturedPostCard<'_> {
    fn render(&self) -> Markup {
        let post = self.post;
        let anchor = post_anchor(post);

        html! {
            article class="featured-post" id=(anchor) {
                @if let Some(image) = &post.image {
                    div class="featured-image" {
                        img src=(image) alt=(post.title);
                        @if let Some(stats) = &post.stats {
                            div class="featured-stats" {
                                p class="stat-growth" { (stats.growth) }
                                p class="stat-impact" { (stats.impact) }
                            }
                        }
                    }
                }
                div class="featured-content" {
                    div class="badges" {
                        @if let Some(category) = &post.category {
                            (CategoryBadge::new(category))
                        }
                        (FeaturedBadge)
                    }
                    h2 { (post.title) }
                    @if let Some(excerpt) = &post.excerpt {
                        p class="excerpt" { (excerpt) }
                    }
                    @if let Some(author) = &post.author {
                        (AuthorLine::new(author).with_role())
                    }
                    @if post.image.is_none() {
                        @if let Some(stats) = &post.stats {
                            (StatsLine::new(stats))
                        }
                    }
                    div class="featured-footer" {
                        (MetaLine::new(post))
                        (Button::primary("Read Full Article \u{2192}").href(&format!("/blog#{anchor}")))
                    }
                }
            }
        }
    }
}

/// Grid of post cards.
#[derive(Debug, Clone)]
pub struct PostGrid<'a> {
    pub posts: &'a [&'a Post],
    pub show_tags: bool,
}

impl<'a> PostGrid<'a> {
    #[must_use]
    pub const fn new(posts: &'a [&'a Post]) -> Self {
        Self {
            posts,
            show_tags: false,
        }
    }

    #[must_use]
    pub const fn with_tags(mut self) -> Self {
        self.show_tags = true;
        self
    }
}

impl Render for PostGrid<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="post-grid" {
                @for post in self.posts {
                    @if self.show_tags {
                        (PostCard::new(post).with_tags())
                    } @else {
                        (PostCard::new(post))
                    }
                }
            }
        }
    }
}

/// Shown when the listing filters match nothing.
#[derive(Debug, Clone, Copy)]
pub struct NoResults<'a> {
    pub message: &'a str,
    /// Target of the "Clear Filters" action.
    pub reset_href: &'a str,
}

impl<'a> NoResults<'a> {
    #[must_use]
    pub const fn new(reset_href: &'a str) -> Self {
        Self {
            message: "No insights found matching your criteria.",
            reset_href,
        }
    }
}

impl Render for NoResults<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="no-results" {
                p { (self.message) }
                (Button::primary("Clear Filters").href(self.reset_href))
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct AuthorLine<'a> {
    author: &'a Author,
    show_role: bool,
}

impl<'a> AuthorLine<'a> {
    const fn new(author: &'a Author) -> Self {
        Self {
            author,
            show_role: false,
        }
    }

    const fn with_role(mut self) -> Self {
        self.show_role = true;
        self
    }
}

impl Render for AuthorLine<'_> {
    fn render(&self) -> Markup {
        let author = self.author;
        html! {
            div class="author" {
                @if let Some(avatar) = &author.avatar {
                    img class="avatar" src=(avatar) alt=(author.name);
                }
                div {
                    p class="author-name" { (author.name) }
                    @if self.show_role {
                        @if let Some(role) = &author.role {
                            p class="author-role" { (role) }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct StatsLine<'a> {
    stats: &'a Stats,
}

impl<'a> StatsLine<'a> {
    const fn new(stats: &'a Stats) -> Self {
        Self { stats }
    }
}

impl Render for StatsLine<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="stats" {
                span class="stat-growth" { "\u{2197} " (self.stats.growth) } // ↗
                span class="stat-impact" { (self.stats.impact) }
            }
        }
    }
}

/// Date and read time, joined by a bullet when both are present.
#[derive(Debug, Clone, Copy)]
struct MetaLine<'a> {
    post: &'a Post,
}

impl<'a> MetaLine<'a> {
    const fn new(post: &'a Post) -> Self {
        Self { post }
    }
}

impl Render for MetaLine<'_> {
    fn render(&self) -> Markup {
        let date = self.post.published.as_ref().map(|p| p.display());
        let read_time = self.post.read_time.as_deref();
        html! {
            p class="meta" {
                @if let Some(date) = &date {
                    time { (date) }
                }
                @if date.is_some() && read_time.is_some() {
                    " \u{2022} "
                }
                @if let Some(read_time) = read_time {
                    span class="read-time" { (read_time) }
                }
            }
        }
    }
}

/// Fragment id used to link to a post on the listing page.
#[must_use]
pub fn post_anchor(post: &Post) -> String {
    let slug: String = post
        .id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    format!("post-{slug}")
}
