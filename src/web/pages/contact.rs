//! Contact page with the enquiry form.

use maud::{html, Markup, Render};

use crate::components::{
    Alert, BaseLayout, Button, Form, FormGroup, Input, Select, TextArea,
};
use crate::contact::{ContactErrors, ContactField, ContactForm, Subject};
use crate::theme::ThemePreferences;

/// Outcome of the last submission, if any.
#[derive(Debug, Clone, Copy)]
pub enum ContactStatus<'a> {
    /// First visit; empty form.
    Fresh,
    /// Accepted; the form is reset.
    Sent,
    /// Rejected; the entered values are shown again with the errors.
    Invalid(&'a ContactErrors),
}

/// Parameters for rendering the contact page.
#[derive(Debug)]
pub struct ContactPageParams<'a> {
    pub prefs: ThemePreferences,
    pub site_name: &'a str,
    pub form: &'a ContactForm,
    pub status: ContactStatus<'a>,
}

/// Render the contact page.
#[must_use]
pub fn render_contact_page(params: &ContactPageParams<'_>) -> Markup {
    let content = html! {
        section class="page-header" {
            div class="container" {
                h1 {
                    "Let's Talk "
                    span class="accent" { "Business" }
                }
                p class="lead" {
                    "Ready to transform your business? We're here to help you unlock new "
                    "opportunities and drive exceptional results."
                }
            }
        }

        section class="contact" {
            div class="container contact-layout" {
                div class="contact-form" {
                    h2 { "Send us a message" }
                    @match params.status {
                        ContactStatus::Sent => {
                            (Alert::success("Thank you for reaching out. We'll be in touch within 24 hours.")
                                .with_title("Message sent."))
                        }
                        ContactStatus::Invalid(_) => {
                            (Alert::error("Please correct the highlighted fields."))
                        }
                        ContactStatus::Fresh => {}
                    }
                    (ContactFormView::new(params))
                }
                (ContactInfo)
            }
        }
    };

    BaseLayout::new("Contact", params.prefs)
        .with_site_name(params.site_name)
        .with_path("/contact")
        .with_description("Get in touch with our consultants.")
        .render(content)
}

struct ContactFormView<'a> {
    form: &'a ContactForm,
    errors: Option<&'a ContactErrors>,
}

impl<'a> ContactFormView<'a> {
    fn new(params: &'a ContactPageParams<'a>) -> Self {
        match params.status {
            ContactStatus::Invalid(errors) => Self {
                form: params.form,
                errors: Some(errors),
            },
            ContactStatus::Fresh | ContactStatus::Sent => Self {
                form: params.form,
                errors: None,
            },
        }
    }

    fn error(&self, field: ContactField) -> Option<&'static str> {
        self.errors.and_then(|errors| errors.for_field(field))
    }
}

impl Render for ContactFormView<'_> {
    fn render(&self) -> Markup {
        let form = self.form;

        let mut subject = Select::new("subject")
            .option("", "Select a service")
            .required();
        for s in Subject::ALL {
            subject = subject.option(s.as_str(), s.label());
        }
        if !form.subject.is_empty() {
            subject = subject.selected(&form.subject);
        }

        let fields = html! {
            div class="form-row" {
                (FormGroup::new("Full Name", "name", Input::text("name")
                    .value_non_empty(&form.name)
                    .placeholder("Your full name")
                    .required()
                    .render())
                    .required()
                    .error(self.error(ContactField::Name)))
                (FormGroup::new("Email Address", "email", Input::email("email")
                    .value_non_empty(&form.email)
                    .placeholder("your.email@company.com")
                    .required()
                    .render())
                    .required()
                    .error(self.error(ContactField::Email)))
            }
            (FormGroup::new("Company", "company", Input::text("company")
                .value_non_empty(&form.company)
                .placeholder("Your company name")
                .render()))
            (FormGroup::new("Service of Interest", "subject", subject.render())
                .required()
                .error(self.error(ContactField::Subject)))
            (FormGroup::new("Message", "message", TextArea::new("message")
                .value(&form.message)
                .placeholder("Tell us about your project and how we can help...")
                .rows(6)
                .required()
                .render())
                .required()
                .error(self.error(ContactField::Message)))
            (Button::primary("Send Message").r#type("submit"))
        };

        Form::post("/contact", fields).class("contact-form-fields").render()
    }
}

struct ContactInfo;

impl Render for ContactInfo {
    fn render(&self) -> Markup {
        html! {
            aside class="contact-info" {
                h2 { "Get in touch" }
                div class="contact-item" {
                    h3 { "Phone" }
                    p { a href="tel:+1234567890" { "+1 (234) 567-890" } }
                    p class="muted" { "Mon-Fri, 9am-6pm EST" }
                }
                div class="contact-item" {
                    h3 { "Email" }
                    p { a href="mailto:hello@consultpro.com" { "hello@consultpro.com" } }
                    p class="muted" { "We'll respond within 24 hours" }
                }
                div class="contact-item" {
                    h3 { "Office" }
                    p {
                        "123 Business Ave, Suite 100"
                        br;
                        "New York, NY 10001"
                    }
                }
            }
        }
    }
}
