use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// A blog post as seen by the rest of the site.
///
/// Produced once per fetch by normalizing the wire shape; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub body: Option<String>,
    pub image: Option<String>,
    pub published: Option<PublishedAt>,
    pub author: Option<Author>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub featured: bool,
    pub stats: Option<Stats>,
    pub read_time: Option<String>,
}

impl Post {
    /// Minimal post with only the required fields set.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            excerpt: None,
            body: None,
            image: None,
            published: None,
            author: None,
            category: None,
            tags: Vec::new(),
            featured: false,
            stats: None,
            read_time: None,
        }
    }

    #[must_use]
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
    pub avatar: Option<String>,
    pub role: Option<String>,
}

/// Headline numbers shown on a post card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub growth: String,
    pub impact: String,
}

/// Publication date: either a real timestamp or text already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PublishedAt {
    Timestamp(DateTime<Utc>),
    Display(String),
}

impl PublishedAt {
    /// Parse an ISO-8601 timestamp or date, keeping anything else as display text.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
            return Some(Self::Timestamp(ts.with_timezone(&Utc)));
        }
        if let Some(ts) = NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
        {
            return Some(Self::Timestamp(ts.and_utc()));
        }
        Some(Self::Display(value.to_string()))
    }

    /// Human-readable date, e.g. `March 15, 2024`.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Timestamp(ts) => ts.format("%B %-d, %Y").to_string(),
            Self::Display(text) => text.clone(),
        }
    }
}

/// A field the content store may deliver inline, as an unresolved pointer, or not at all.
///
/// Resolved exactly once while normalizing a fetched record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentRef<T> {
    Inline(T),
    Reference(String),
    Absent,
}

impl<T> ContentRef<T> {
    /// Collapse to the inline value. Unresolved references carry no displayable value.
    pub fn resolve(self) -> Option<T> {
        match self {
            Self::Inline(value) => Some(value),
            Self::Reference(id) => {
                tracing::debug!(reference = %id, "Dropping unresolved content reference");
                None
            }
            Self::Absent => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_at_timestamp() {
        let published = PublishedAt::parse("2024-03-15T10:30:00Z").unwrap();
        assert!(matches!(published, PublishedAt::Timestamp(_)));
        assert_eq!(published.display(), "March 15, 2024");
    }

    #[test]
    fn test_published_at_plain_date() {
        let published = PublishedAt::parse("2024-02-05").unwrap();
        assert_eq!(published.display(), "February 5, 2024");
    }

    #[test]
    fn test_published_at_display_text() {
        let published = PublishedAt::parse("March 10, 2024").unwrap();
        assert_eq!(published, PublishedAt::Display("March 10, 2024".to_string()));
        assert_eq!(published.display(), "March 10, 2024");
        assert!(PublishedAt::parse("   ").is_none());
    }

    #[test]
    fn test_content_ref_resolve() {
        assert_eq!(ContentRef::Inline("Strategy").resolve(), Some("Strategy"));
        assert_eq!(
            ContentRef::<&str>::Reference("category-1".to_string()).resolve(),
            None
        );
        assert_eq!(ContentRef::<&str>::Absent.resolve(), None);
    }
}
