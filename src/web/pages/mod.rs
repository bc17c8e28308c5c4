//! Maud-based page templates for the web UI.
//!
//! Each page module exports a render function that produces the complete HTML.

pub mod blog;
pub mod contact;
pub mod home;

pub use blog::{render_blog_page, BlogPageParams};
pub use contact::{render_contact_page, ContactPageParams, ContactStatus};
pub use home::{render_home_page, HomePageParams, Service, SERVICES};
