//! Contact form validation and submission.
//!
//! Submissions are only logged; there is no delivery endpoint.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Service a visitor can ask about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subject {
    AiMl,
    DataAnalytics,
    DigitalTransformation,
    StrategicConsulting,
    OrganizationalDesign,
    GlobalExpansion,
    Other,
}

impl Subject {
    pub const ALL: [Self; 7] = [
        Self::AiMl,
        Self::DataAnalytics,
        Self::DigitalTransformation,
        Self::StrategicConsulting,
        Self::OrganizationalDesign,
        Self::GlobalExpansion,
        Self::Other,
    ];

    /// Form value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AiMl => "ai-ml",
            Self::DataAnalytics => "data-analytics",
            Self::DigitalTransformation => "digital-transformation",
            Self::StrategicConsulting => "strategic-consulting",
            Self::OrganizationalDesign => "organizational-design",
            Self::GlobalExpansion => "global-expansion",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AiMl => "AI & Machine Learning",
            Self::DataAnalytics => "Data Analytics",
            Self::DigitalTransformation => "Digital Transformation",
            Self::StrategicConsulting => "Strategic Consulting",
            Self::OrganizationalDesign => "Organizational Design",
            Self::GlobalExpansion => "Global Expansion",
            Self::Other => "Other",
        }
    }

    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|subject| subject.as_str() == s)
    }
}

/// Raw form fields as posted by the browser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

/// A validated contact request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub subject: Subject,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: ContactField,
    pub message: &'static str,
}

/// Every field that failed validation, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", describe(.0))]
pub struct ContactErrors(pub Vec<FieldError>);

impl ContactErrors {
    #[must_use]
    pub fn for_field(&self, field: ContactField) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field.as_str(), e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ContactForm {
    /// Check required fields, the email shape, and the subject value.
    ///
    /// # Errors
    ///
    /// Returns every failing field.
    pub fn validate(&self) -> Result<ContactSubmission, ContactErrors> {
        let mut errors = Vec::new();
        let mut fail = |field, message| errors.push(FieldError { field, message });

        let name = self.name.trim();
        if name.is_empty() {
            fail(ContactField::Name, "Full name is required");
        }

        let email = self.email.trim();
        if email.is_empty() {
            fail(ContactField::Email, "Email address is required");
        } else if !looks_like_email(email) {
            fail(ContactField::Email, "Enter a valid email address");
        }

        let subject = self.subject.trim();
        let parsed_subject = Subject::from_str(subject);
        if subject.is_empty() {
            fail(ContactField::Subject, "Select a service");
        } else if parsed_subject.is_none() {
            fail(ContactField::Subject, "Unknown service");
        }

        let message = self.message.trim();
        if message.is_empty() {
            fail(ContactField::Message, "Message is required");
        }

        match parsed_subject {
            Some(subject) if errors.is_empty() => Ok(ContactSubmission {
                name: name.to_string(),
                email: email.to_string(),
                company: Some(self.company.trim())
                    .filter(|c| !c.is_empty())
                    .map(ToString::to_string),
                subject,
                message: message.to_string(),
            }),
            _ => Err(ContactErrors(errors)),
        }
    }
}

/// `local@domain.tld` with no whitespace.
fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

/// Record a submission. Delivery is not wired up.
pub fn submit(submission: &ContactSubmission) {
    info!(
        name = %submission.name,
        email = %submission.email,
        company = submission.company.as_deref().unwrap_or(""),
        subject = submission.subject.as_str(),
        message_len = submission.message.len(),
        "Contact form submitted"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            company: String::new(),
            subject: "data-analytics".to_string(),
            message: "We need a dashboard.".to_string(),
        }
    }

    #[test]
    fn test_valid_submission() {
        let submission = valid_form().validate().unwrap();
        assert_eq!(submission.subject, Subject::DataAnalytics);
        assert_eq!(submission.company, None);
        assert_eq!(submission.name, "Ada Lovelace");
    }

    #[test]
    fn test_company_is_optional_but_kept() {
        let form = ContactForm {
            company: "  Analytical Engines  ".to_string(),
            ..valid_form()
        };
        let submission = form.validate().unwrap();
        assert_eq!(submission.company.as_deref(), Some("Analytical Engines"));
    }

    #[test]
    fn test_reports_every_missing_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        let fields: Vec<ContactField> = errors.0.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                ContactField::Name,
                ContactField::Email,
                ContactField::Subject,
                ContactField::Message
            ]
        );
    }

    #[test]
    fn test_invalid_email_and_subject() {
        let form = ContactForm {
            email: "not-an-email".to_string(),
            subject: "astrology".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.for_field(ContactField::Email),
            Some("Enter a valid email address")
        );
        assert_eq!(errors.for_field(ContactField::Subject), Some("Unknown service"));
        assert!(errors.for_field(ContactField::Name).is_none());
        assert_eq!(
            errors.to_string(),
            "email: Enter a valid email address, subject: Unknown service"
        );
    }

    #[test]
    fn test_looks_like_email() {
        assert!(looks_like_email("a@b.co"));
        assert!(looks_like_email("first.last@sub.example.org"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.com"));
        assert!(!looks_like_email("a@@b.com"));
        assert!(!looks_like_email("a b@c.com"));
        assert!(!looks_like_email("a@.com"));
    }

    #[test]
    fn test_subject_round_trip() {
        for subject in Subject::ALL {
            assert_eq!(Subject::from_str(subject.as_str()), Some(subject));
        }
        assert_eq!(Subject::from_str(""), None);
    }
}
