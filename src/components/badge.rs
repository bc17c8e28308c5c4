//! Badge components for post categories, tags, and the featured marker.

use maud::{html, Markup, Render};

/// Category pill shown on post cards.
#[derive(Debug, Clone, Copy)]
pub struct CategoryBadge<'a> {
    pub category: &'a str,
    /// Solid fill for use on top of images; soft tint otherwise.
    pub solid: bool,
}

impl<'a> CategoryBadge<'a> {
    #[must_use]
    pub const fn new(category: &'a str) -> Self {
        Self {
            category,
            solid: false,
        }
    }

    #[must_use]
    pub const fn solid(mut self) -> Self {
        self.solid = true;
        self
    }
}

impl Render for CategoryBadge<'_> {
    fn render(&self) -> Markup {
        let class = if self.solid {
            "badge badge-category badge-solid"
        } else {
            "badge badge-category"
        };
        html! {
            span class=(class) { (self.category) }
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FeaturedBadge;

impl Render for FeaturedBadge {
    fn render(&self) -> Markup {
        html! {
            span class="badge badge-featured" { "Featured" }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TagBadge<'a> {
    pub tag: &'a str,
}

impl<'a> TagBadge<'a> {
    #[must_use]
    pub const fn new(tag: &'a str) -> Self {
        Self { tag }
    }
}

impl Render for TagBadge<'_> {
    fn render(&self) -> Markup {
        html! {
            span class="badge badge-tag" {
                span class="tag-icon" aria-hidden="true" { "\u{1F3F7}" } // 🏷
                (self.tag)
            }
        }
    }
}
