//! Base layout components for the web UI.
//!
//! This module provides the main page layout structure including
//! the HTML skeleton, navigation with the theme toggles, and footer.

use maud::{html, Markup, DOCTYPE};

use super::button::Button;
use super::form::{Form, Input};
use crate::theme::{ColorScheme, DocumentAttributes, Theme, ThemePreferences};

const DEFAULT_SITE_NAME: &str = "ConsultPro";
const DEFAULT_DESCRIPTION: &str =
    "Strategic business consulting: AI, data analytics, digital transformation and growth.";

const NAV_LINKS: [(&str, &str); 3] = [("/", "Home"), ("/blog", "Insights"), ("/contact", "Contact")];

/// Base page layout builder.
///
/// The visitor's theme preferences are required so the root element always
/// carries the dark class and the brand palette.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let content = html! { h1 { "Insights" } };
/// let page = BaseLayout::new("Insights", prefs)
///     .with_path("/blog")
///     .render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
    prefs: ThemePreferences,
    path: &'a str,
    site_name: &'a str,
    description: &'a str,
}

impl<'a> BaseLayout<'a> {
    #[must_use]
    pub const fn new(title: &'a str, prefs: ThemePreferences) -> Self {
        Self {
            title,
            prefs,
            path: "/",
            site_name: DEFAULT_SITE_NAME,
            description: DEFAULT_DESCRIPTION,
        }
    }

    /// Path of the current page, used for the active nav link and as the
    /// return target of the theme toggles.
    #[must_use]
    pub const fn with_path(mut self, path: &'a str) -> Self {
        self.path = path;
        self
    }

    #[must_use]
    pub const fn with_site_name(mut self, site_name: &'a str) -> Self {
        self.site_name = site_name;
        self
    }

    #[must_use]
    pub const fn with_description(mut self, description: &'a str) -> Self {
        self.description = description;
        self
    }

    /// Render the complete HTML page with the given content.
    ///
    /// The content will be placed inside the `<main>` element.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        let attrs = DocumentAttributes::from(self.prefs);
        html! {
            (DOCTYPE)
            html lang="en" class=[attrs.class] data-color-scheme=(attrs.color_scheme) {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    meta name="description" content=(self.description);
                    title { (self.title) " - " (self.site_name) }
                    link rel="stylesheet" href="/static/css/style.css";
                }
                body {
                    (self.render_header())
                    main {
                        (content)
                    }
                    (self.render_footer())
                }
            }
        }
    }

    fn render_header(&self) -> Markup {
        html! {
            header class="site-header" {
                nav class="container" {
                    a href="/" class="site-logo" { strong { (self.site_name) } }
                    ul class="nav-links" {
                        @for (href, label) in NAV_LINKS {
                            li {
                                @if self.is_active(href) {
                                    a href=(href) aria-current="page" { (label) }
                                } @else {
                                    a href=(href) { (label) }
                                }
                            }
                        }
                    }
                    div class="nav-toggles" {
                        (self.render_toggles())
                    }
                }
            }
        }
    }

    fn render_toggles(&self) -> Markup {
        let theme_label = match self.prefs.theme {
            Theme::Light => "\u{1F319}", // 🌙
            Theme::Dark => "\u{2600}",   // ☀
        };
        let scheme_label = match self.prefs.color_scheme {
            ColorScheme::Talsom => "Bain",
            ColorScheme::Bain => "Talsom",
        };
        let theme_title = format!("Switch to {} mode", self.prefs.theme.toggled().as_str());
        let scheme_title = format!(
            "Switch to the {} palette",
            self.prefs.color_scheme.toggled().as_str()
        );

        html! {
            (Form::post("/preferences/theme", html! {
                (Input::hidden("return_to", self.path))
                (Button::outline(theme_label).r#type("submit").title(&theme_title).class("theme-toggle"))
            }).class("inline-form"))
            (Form::post("/preferences/color-scheme", html! {
                (Input::hidden("return_to", self.path))
                (Button::outline(scheme_label).r#type("submit").title(&scheme_title).class("scheme-toggle"))
            }).class("inline-form"))
        }
    }

    fn is_active(&self, href: &str) -> bool {
        if href == "/" {
            self.path == "/"
        } else {
            self.path.starts_with(href)
        }
    }

    fn render_footer(&self) -> Markup {
        html! {
            footer class="site-footer" {
                div class="container" {
                    small {
                        (self.site_name) " | Strategic Business Consulting | "
                        a href="/contact" { "Get in touch" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_layout_basic_structure() {
        let content = html! { h1 { "Test Content" } };
        let html = BaseLayout::new("Test Page", ThemePreferences::default())
            .render(content)
            .into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en" data-color-scheme="talsom">"#));
        assert!(html.contains(r#"<meta charset="UTF-8">"#));
        assert!(html.contains("<title>Test Page - ConsultPro</title>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="/static/css/style.css">"#));
        assert!(html.contains("<h1>Test Content</h1>"));
    }

    #[test]
    fn test_dark_bain_root_attributes() {
        let prefs = ThemePreferences {
            theme: Theme::Dark,
            color_scheme: ColorScheme::Bain,
        };
        let html = BaseLayout::new("Dark", prefs).render(html! {}).into_string();
        assert!(html.contains(r#"<html lang="en" class="dark" data-color-scheme="bain">"#));
        assert!(html.contains("Switch to light mode"));
        assert!(html.contains("Switch to the talsom palette"));
    }

    #[test]
    fn test_navigation_and_active_link() {
        let html = BaseLayout::new("Insights", ThemePreferences::default())
            .with_path("/blog")
            .render(html! {})
            .into_string();

        assert!(html.contains(r#"<a href="/">Home</a>"#));
        assert!(html.contains(r#"<a href="/blog" aria-current="page">Insights</a>"#));
        assert!(html.contains(r#"<a href="/contact">Contact</a>"#));
    }

    #[test]
    fn test_toggles_return_to_current_path() {
        let html = BaseLayout::new("Contact", ThemePreferences::default())
            .with_path("/contact")
            .render(html! {})
            .into_string();

        assert!(html.contains(r#"action="/preferences/theme""#));
        assert!(html.contains(r#"action="/preferences/color-scheme""#));
        assert!(html.contains(r#"name="return_to" value="/contact""#));
        assert!(html.contains("Switch to dark mode"));
    }

    #[test]
    fn test_site_name_override() {
        let html = BaseLayout::new("Home", ThemePreferences::default())
            .with_site_name("Acme Advisory")
            .render(html! {})
            .into_string();
        assert!(html.contains("<title>Home - Acme Advisory</title>"));
    }
}
