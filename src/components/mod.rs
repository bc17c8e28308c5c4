//! Maud HTML template components for the web UI.
//!
//! Components are organized into submodules by functionality:
//!
//! - `layout`: Base page layout, navigation and the theme toggles
//! - `badge`: Category, tag, and featured badges
//! - `button`: Buttons, link-buttons, and filter chips
//! - `alert`: Form feedback and notices
//! - `card`: Post cards, the featured card, grids, and the no-results state
//! - `form`: Form elements and input components
//!
//! # Example
//!
//! ```ignore
//! use maud::{html, Markup};
//! use crate::components::{Alert, BaseLayout, Button, Input};
//!
//! fn my_page(prefs: ThemePreferences) -> Markup {
//!     let content = html! {
//!         h1 { "Hello World" }
//!         (Alert::success("Page loaded!"))
//!         (Button::primary("Click me"))
//!         (Input::text("name").placeholder("John Smith"))
//!     };
//!     BaseLayout::new("My Page", prefs).render(content)
//! }
//! ```

pub mod alert;
pub mod badge;
pub mod button;
pub mod card;
pub mod form;
pub mod layout;

pub use layout::BaseLayout;

pub use badge::{CategoryBadge, FeaturedBadge, TagBadge};

pub use button::{Button, ButtonVariant};

pub use alert::{Alert, AlertVariant};

pub use card::{post_anchor, FeaturedPostCard, NoResults, PostCard, PostGrid};

pub use form::{Form, FormGroup, Input, Select, SelectOption, TextArea};

/// Re-export maud for convenience
pub use maud::{html, Markup, PreEscaped, DOCTYPE};
