//! Button component for the web UI.
//!
//! Renders as a `<button>` or, when an href is set, as an `<a>` styled like one.
//! Colors come from the active brand palette via CSS variables.

use maud::{html, Markup, Render};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled with the palette's primary color.
    #[default]
    Primary,
    /// Transparent with a primary-colored border.
    Outline,
    /// Text-only link style, used for "Read" links on cards.
    Link,
    /// Rounded filter chip; `Selected` marks the active one.
    Chip,
    Selected,
}

impl ButtonVariant {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Outline => "btn btn-outline",
            Self::Link => "btn-link",
            Self::Chip => "chip",
            Self::Selected => "chip chip-selected",
        }
    }
}

/// A configurable button component.
///
/// # Example
///
/// ```ignore
/// use crate::components::button::Button;
///
/// let read = Button::primary("Read Full Article").href("/blog#post-1");
/// let send = Button::primary("Send Message").r#type("submit");
/// ```
#[derive(Debug, Clone)]
pub struct Button<'a> {
    pub label: &'a str,
    pub variant: ButtonVariant,
    /// Renders as `<a>` when present.
    pub href: Option<&'a str>,
    /// Button type attribute (for `<button>` elements)
    pub r#type: Option<&'a str>,
    /// Form field name/value carried by a submit button.
    pub name: Option<&'a str>,
    pub value: Option<&'a str>,
    pub title: Option<&'a str>,
    pub class: Option<&'a str>,
}

impl<'a> Button<'a> {
    #[must_use]
    pub fn new(label: &'a str, variant: ButtonVariant) -> Self {
        Self {
            label,
            variant,
            href: None,
            r#type: None,
            name: None,
            value: None,
            title: None,
            class: None,
        }
    }

    #[must_use]
    pub fn primary(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Primary)
    }

    #[must_use]
    pub fn outline(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Outline)
    }

    #[must_use]
    pub fn link(label: &'a str) -> Self {
        Self::new(label, ButtonVariant::Link)
    }

    /// Filter chip, highlighted when `selected`.
    #[must_use]
    pub fn chip(label: &'a str, selected: bool) -> Self {
        let variant = if selected {
            ButtonVariant::Selected
        } else {
            ButtonVariant::Chip
        };
        Self::new(label, variant)
    }

    #[must_use]
    pub fn href(mut self, href: &'a str) -> Self {
        self.href = Some(href);
        self
    }

    #[must_use]
    pub fn r#type(mut self, r#type: &'a str) -> Self {
        self.r#type = Some(r#type);
        self
    }

    /// Submit `name=value` with the enclosing form.
    #[must_use]
    pub fn field(mut self, name: &'a str, value: &'a str) -> Self {
        self.name = Some(name);
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    fn build_class(&self) -> String {
        let mut classes = self.variant.class().to_string();
        if let Some(extra) = self.class {
            classes.push(' ');
            classes.push_str(extra);
        }
        classes
    }
}

impl Render for Button<'_> {
    fn render(&self) -> Markup {
        let classes = self.build_class();

        if let Some(href) = self.href {
            html! {
                a class=(classes) href=(href) title=[self.title] {
                    (self.label)
                }
            }
        } else {
            html! {
                button
                    class=(classes)
                    type=(self.r#type.unwrap_or("button"))
                    name=[self.name]
                    value=[self.value]
                    title=[self.title]
                {
                    (self.label)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_button() {
        let html = Button::primary("Send Message").render().into_string();
        assert!(html.contains("btn btn-primary"));
        assert!(html.contains("Send Message"));
        assert!(html.contains(r#"type="button""#));
    }

    #[test]
    fn test_button_with_href() {
        let html = Button::outline("Clear Filters").href("/blog").render().into_string();
        assert!(html.starts_with("<a"));
        assert!(html.contains(r#"href="/blog""#));
        assert!(html.contains("btn-outline"));
        assert!(!html.contains("<button"));
    }

    #[test]
    fn test_chip_selected() {
        let html = Button::chip("Strategy", true)
            .r#type("submit")
            .field("category", "Strategy")
            .render()
            .into_string();
        assert!(html.contains("chip chip-selected"));
        assert!(html.contains(r#"name="category""#));
        assert!(html.contains(r#"value="Strategy""#));
        assert!(html.contains(r#"type="submit""#));

        let html = Button::chip("Tech", false).render().into_string();
        assert!(html.contains(r#"class="chip""#));
    }

    #[test]
    fn test_button_with_extra_class() {
        let html = Button::link("Read").class("card-read").render().into_string();
        assert!(html.contains("btn-link card-read"));
    }
}
