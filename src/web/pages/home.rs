//! Home page rendering using maud templates.
//!
//! Hero, services grid, and a preview of the latest insights.

use maud::{html, Markup, Render};

use crate::components::{Alert, BaseLayout, Button, PostGrid};
use crate::constants::INSIGHTS_PREVIEW_COUNT;
use crate::content::Post;
use crate::theme::ThemePreferences;

/// A consulting service shown on the home page.
#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [Service; 6] = [
    Service {
        title: "AI & Machine Learning",
        description: "Harness the power of artificial intelligence to transform your business operations and decision-making.",
    },
    Service {
        title: "Data Analytics",
        description: "Turn your data into actionable insights with advanced analytics and visualization solutions.",
    },
    Service {
        title: "Digital Transformation",
        description: "Modernize your business processes and technology infrastructure for the digital age.",
    },
    Service {
        title: "Strategic Consulting",
        description: "Develop winning strategies that drive growth and competitive advantage.",
    },
    Service {
        title: "Organizational Design",
        description: "Build high-performing teams and optimize your organizational structure.",
    },
    Service {
        title: "Global Expansion",
        description: "Navigate international markets and scale your business globally.",
    },
];

const HERO_STATS: [(&str, &str); 4] = [
    ("500+", "Clients Worldwide"),
    ("95%", "Success Rate"),
    ("50+", "Industries Served"),
    ("1000+", "Projects Delivered"),
];

/// Parameters for rendering the home page.
#[derive(Debug)]
pub struct HomePageParams<'a> {
    pub prefs: ThemePreferences,
    pub site_name: &'a str,
    /// Catalog posts in source order; only the first few are shown.
    pub posts: &'a [Post],
    pub fetch_failed: bool,
}

/// Render the home page.
#[must_use]
pub fn render_home_page(params: &HomePageParams<'_>) -> Markup {
    let preview: Vec<&Post> = params.posts.iter().take(INSIGHTS_PREVIEW_COUNT).collect();

    let content = html! {
        section class="hero" {
            div class="container" {
                h1 {
                    "Transform Your"
                    span class="accent" { "Business Future" }
                }
                p class="lead" {
                    "We partner with ambitious leaders to unlock potential, drive innovation, "
                    "and create lasting impact through strategic consulting and digital transformation."
                }
                div class="hero-actions" {
                    (Button::primary("Contact Us Today").href("/contact"))
                    (Button::outline("Explore Services").href("/#services"))
                }
                dl class="hero-stats" {
                    @for (number, label) in HERO_STATS {
                        div {
                            dt { (number) }
                            dd { (label) }
                        }
                    }
                }
            }
        }

        section id="services" class="services" {
            div class="container" {
                h2 { "Our Services" }
                div class="service-grid" {
                    @for service in &SERVICES {
                        (service)
                    }
                }
            }
        }

        section class="insights" {
            div class="container" {
                h2 { "Latest Insights" }
                @if params.fetch_failed {
                    (Alert::info("Insights are temporarily unavailable. Please check back soon."))
                }
                @if !preview.is_empty() {
                    (PostGrid::new(&preview))
                    p class="insights-more" {
                        (Button::outline("View All Insights").href("/blog"))
                    }
                }
            }
        }
    };

    BaseLayout::new("Home", params.prefs)
        .with_site_name(params.site_name)
        .with_path("/")
        .render(content)
}

impl Render for Service {
    fn render(&self) -> Markup {
        html! {
            article class="service-card" {
                h3 { (self.title) }
                p { (self.description) }
            }
        }
    }
}
