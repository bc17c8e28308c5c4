//! Wire shapes accepted from the content store and the built-in post list.
//!
//! The content store can hand back a field inline, as a dereferenced record, as a
//! bare `_ref` pointer, or not at all. Everything here funnels those variants into
//! [`ContentRef`] and then into the flat [`Post`] record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, warn};

use super::model::{Author, ContentRef, Post, PublishedAt, Stats};

/// Decode an optional field on its own, treating a value of the wrong shape as
/// absent so one bad field never costs the whole record.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(decoded) => Ok(Some(decoded)),
        Err(e) => {
            debug!(
                expected = std::any::type_name::<T>(),
                "Ignoring mistyped field: {e}"
            );
            Ok(None)
        }
    }
}

/// Like [`lenient`], but for lists: bad entries are dropped and the rest kept.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            debug!("Ignoring non-list value where a list was expected: {other}");
            return Ok(Vec::new());
        }
    };
    Ok(items
        .into_iter()
        .filter(|item| !item.is_null())
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                debug!("Ignoring mistyped list entry: {e}");
                None
            }
        })
        .collect())
}

/// Label-like field: a category or a tag.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawLabel {
    Plain(String),
    Record {
        #[serde(default, deserialize_with = "lenient")]
        title: Option<String>,
        #[serde(default, rename = "_ref", deserialize_with = "lenient")]
        reference: Option<String>,
    },
}

impl From<Option<RawLabel>> for ContentRef<String> {
    fn from(raw: Option<RawLabel>) -> Self {
        match raw {
            Some(RawLabel::Plain(title)) => non_blank(title).map_or(Self::Absent, Self::Inline),
            Some(RawLabel::Record { title, reference }) => {
                match (title.and_then(non_blank), reference) {
                    (Some(title), _) => Self::Inline(title),
                    (None, Some(id)) => Self::Reference(id),
                    (None, None) => Self::Absent,
                }
            }
            None => Self::Absent,
        }
    }
}

/// Image field: a direct URL or `{asset: {url}}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawImage {
    Url(String),
    Asset {
        #[serde(default, deserialize_with = "lenient")]
        asset: Option<RawAsset>,
    },
}

#[derive(Debug, Deserialize)]
struct RawAsset {
    #[serde(default, deserialize_with = "lenient")]
    url: Option<String>,
    #[serde(default, rename = "_ref", deserialize_with = "lenient")]
    reference: Option<String>,
}

impl From<Option<RawImage>> for ContentRef<String> {
    fn from(raw: Option<RawImage>) -> Self {
        match raw {
            Some(RawImage::Url(url)) => non_blank(url).map_or(Self::Absent, Self::Inline),
            Some(RawImage::Asset {
                asset: Some(RawAsset { url, reference }),
            }) => match (url.and_then(non_blank), reference) {
                (Some(url), _) => Self::Inline(url),
                (None, Some(id)) => Self::Reference(id),
                (None, None) => Self::Absent,
            },
            Some(RawImage::Asset { asset: None }) | None => Self::Absent,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawAuthor {
    #[serde(default, deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    role: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    avatar: Option<RawImage>,
    #[serde(default, deserialize_with = "lenient")]
    image: Option<RawImage>,
    #[serde(default, rename = "_ref", deserialize_with = "lenient")]
    reference: Option<String>,
}

impl From<Option<RawAuthor>> for ContentRef<Author> {
    fn from(raw: Option<RawAuthor>) -> Self {
        let Some(raw) = raw else {
            return Self::Absent;
        };
        match (raw.name.and_then(non_blank), raw.reference) {
            (Some(name), _) => {
                let avatar = ContentRef::from(raw.avatar.or(raw.image)).resolve();
                Self::Inline(Author {
                    name,
                    avatar,
                    role: raw.role.and_then(non_blank),
                })
            }
            (None, Some(id)) => Self::Reference(id),
            (None, None) => Self::Absent,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawStats {
    #[serde(default, deserialize_with = "lenient")]
    growth: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    impact: Option<String>,
}

/// One post as it appears on the wire.
///
/// Both the content store's names (`_id`, `mainImage`, `publishedAt`) and the
/// built-in list's names (`id`, `image`, `date`) are read. They are separate
/// fields so a record carrying both spellings still decodes; the store's name
/// wins.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPost {
    #[serde(default, rename = "_id", deserialize_with = "lenient")]
    doc_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    excerpt: Option<String>,
    #[serde(default)]
    body: Option<Value>,
    #[serde(default)]
    content: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    main_image: Option<RawImage>,
    #[serde(default, deserialize_with = "lenient")]
    image: Option<RawImage>,
    #[serde(default, deserialize_with = "lenient")]
    published_at: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    date: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    author: Option<RawAuthor>,
    #[serde(default, deserialize_with = "lenient")]
    category: Option<RawLabel>,
    #[serde(default, deserialize_with = "lenient_list")]
    tags: Vec<RawLabel>,
    #[serde(default, deserialize_with = "lenient")]
    featured: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    stats: Option<RawStats>,
    #[serde(default, deserialize_with = "lenient")]
    read_time: Option<String>,
}

impl RawPost {
    /// Flatten into a [`Post`]. Records without an id or title cannot be listed.
    fn normalize(self) -> Option<Post> {
        let id = self.doc_id.and_then(non_blank).or(self.id.and_then(non_blank))?;
        let title = self.title.and_then(non_blank)?;

        let tags = self
            .tags
            .into_iter()
            .filter_map(|tag| ContentRef::from(Some(tag)).resolve())
            .collect();

        let stats = self.stats.and_then(|s| match (s.growth, s.impact) {
            (Some(growth), Some(impact)) => Some(Stats { growth, impact }),
            _ => None,
        });

        Some(Post {
            id,
            title,
            excerpt: self.excerpt.and_then(non_blank),
            body: self.body.and_then(body_text).or(self.content.and_then(body_text)),
            image: ContentRef::from(self.main_image.or(self.image)).resolve(),
            published: self
                .published_at
                .or(self.date)
                .as_deref()
                .and_then(PublishedAt::parse),
            author: ContentRef::from(self.author).resolve(),
            category: ContentRef::from(self.category).resolve(),
            tags,
            featured: self.featured.unwrap_or(false),
            stats,
            read_time: self.read_time.and_then(non_blank),
        })
    }
}

/// Decode a list of wire records, skipping the ones that cannot be used.
///
/// A malformed record never fails the batch.
#[must_use]
pub fn decode_posts(values: Vec<Value>) -> Vec<Post> {
    let total = values.len();
    let posts: Vec<Post> = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<RawPost>(value) {
            Ok(raw) => {
                let post = raw.normalize();
                if post.is_none() {
                    warn!(index, "Skipping post without an id or title");
                }
                post
            }
            Err(e) => {
                warn!(index, "Skipping malformed post record: {e}");
                None
            }
        })
        .collect();

    debug!(total, kept = posts.len(), "Decoded post records");
    posts
}

/// Body text from either a plain string or portable-text blocks.
fn body_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => non_blank(text),
        Value::Array(blocks) => {
            let paragraphs: Vec<String> = blocks
                .iter()
                .filter_map(|block| block.get("children")?.as_array())
                .map(|children| {
                    children
                        .iter()
                        .filter_map(|span| span.get("text")?.as_str())
                        .collect::<String>()
                })
                .filter(|p| !p.trim().is_empty())
                .collect();
            non_blank(paragraphs.join("\n\n"))
        }
        _ => None,
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_decode_dereferenced_post() {
        let posts = decode_posts(vec![json!({
            "_id": "post-1",
            "title": "How AI is Revolutionizing Supply Chain Management",
            "excerpt": "Discover how leading companies...",
            "mainImage": { "asset": { "url": "https://cdn.example.com/ai.jpg" } },
            "publishedAt": "2024-03-15T09:00:00Z",
            "author": {
                "name": "Dr. Emily Johnson",
                "role": "Head of Innovation",
                "image": { "asset": { "url": "https://cdn.example.com/emily.jpg" } }
            },
            "category": { "title": "Digital Transformation" },
            "tags": [{ "title": "AI" }, { "title": "Supply Chain" }],
            "featured": true,
            "stats": { "growth": "+45%", "impact": "Efficiency Gain" },
            "readTime": "8 min read"
        })]);

        assert_eq!(posts.len(), 1);
        let post = &posts[0];
        assert_eq!(post.id, "post-1");
        assert_eq!(post.image.as_deref(), Some("https://cdn.example.com/ai.jpg"));
        assert_eq!(post.category.as_deref(), Some("Digital Transformation"));
        assert_eq!(post.tags, vec!["AI", "Supply Chain"]);
        assert!(post.featured);
        assert_eq!(post.read_time.as_deref(), Some("8 min read"));
        assert_eq!(post.published.as_ref().unwrap().display(), "March 15, 2024");

        let author = post.author.as_ref().unwrap();
        assert_eq!(author.name, "Dr. Emily Johnson");
        assert_eq!(author.avatar.as_deref(), Some("https://cdn.example.com/emily.jpg"));
        assert_eq!(author.role.as_deref(), Some("Head of Innovation"));

        let stats = post.stats.as_ref().unwrap();
        assert_eq!(stats.growth, "+45%");
        assert_eq!(stats.impact, "Efficiency Gain");
    }

    #[test]
    fn test_decode_inline_shapes() {
        let posts = decode_posts(vec![json!({
            "id": "2",
            "title": "Building Resilient Organizations",
            "image": "https://images.example.com/resilient.jpg",
            "date": "March 10, 2024",
            "author": { "name": "Michael Rodriguez", "avatar": "https://images.example.com/m.jpg" },
            "category": "Strategy",
            "tags": ["Strategy", "Resilience"]
        })]);

        let post = &posts[0];
        assert_eq!(post.image.as_deref(), Some("https://images.example.com/resilient.jpg"));
        assert_eq!(
            post.published,
            Some(PublishedAt::Display("March 10, 2024".to_string()))
        );
        assert_eq!(post.category.as_deref(), Some("Strategy"));
        assert_eq!(post.tags, vec!["Strategy", "Resilience"]);
        assert!(!post.featured);
        assert!(post.stats.is_none());
        assert!(post.author.as_ref().unwrap().role.is_none());
    }

    #[test]
    fn test_missing_optional_fields_degrade() {
        let posts = decode_posts(vec![json!({
            "_id": "bare",
            "title": "Only a title",
            "mainImage": { "asset": null },
            "author": null,
            "category": { "_ref": "category-abc" },
            "tags": [null, { "_ref": "tag-1" }, { "title": "Kept" }],
            "stats": { "growth": "+10%" }
        })]);

        let post = &posts[0];
        assert!(post.image.is_none());
        assert!(post.author.is_none());
        assert!(post.category.is_none());
        assert_eq!(post.tags, vec!["Kept"]);
        assert!(post.stats.is_none());
        assert!(post.excerpt.is_none());
        assert!(post.published.is_none());
    }

    #[test]
    fn test_unusable_records_are_skipped() {
        let posts = decode_posts(vec![
            json!({ "title": "No id" }),
            json!({ "_id": "no-title" }),
            json!({ "_id": "bad", "title": 42 }),
            json!("not an object"),
            json!({ "_id": "ok", "title": "Survivor" }),
        ]);

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "ok");
    }

    #[test]
    fn test_mistyped_optional_fields_are_dropped_not_the_post() {
        let posts = decode_posts(vec![
            json!({ "_id": "a", "title": "Tags as a string", "tags": "AI", "excerpt": "Kept" }),
            json!({ "_id": "b", "title": "Numeric read time", "readTime": 8, "featured": "yes" }),
            json!({
                "_id": "c",
                "title": "Numeric growth",
                "stats": { "growth": 45, "impact": "Efficiency Gain" },
                "tags": ["Strategy", 7, { "title": ["nested"] }, "Growth"],
                "author": { "name": "Sam Lee", "role": 3 }
            }),
            json!({
                "_id": "d",
                "title": "Both date spellings",
                "publishedAt": "2024-03-15T09:00:00Z",
                "date": "March 1, 2024",
                "image": "https://images.example.com/fallback.jpg",
                "mainImage": { "asset": { "url": "https://cdn.example.com/main.jpg" } }
            }),
        ]);

        assert_eq!(posts.len(), 4);

        assert!(posts[0].tags.is_empty());
        assert_eq!(posts[0].excerpt.as_deref(), Some("Kept"));

        assert!(posts[1].read_time.is_none());
        assert!(!posts[1].featured);

        assert!(posts[2].stats.is_none());
        assert_eq!(posts[2].tags, vec!["Strategy", "Growth"]);
        let author = posts[2].author.as_ref().unwrap();
        assert_eq!(author.name, "Sam Lee");
        assert!(author.role.is_none());

        assert_eq!(
            posts[3].published.as_ref().unwrap().display(),
            "March 15, 2024"
        );
        assert_eq!(posts[3].image.as_deref(), Some("https://cdn.example.com/main.jpg"));
    }

    #[test]
    fn test_portable_text_body() {
        let posts = decode_posts(vec![json!({
            "_id": "pt",
            "title": "Blocks",
            "body": [
                { "_type": "block", "children": [{ "text": "First " }, { "text": "paragraph." }] },
                { "_type": "image" },
                { "_type": "block", "children": [{ "text": "Second." }] }
            ]
        })]);

        assert_eq!(posts[0].body.as_deref(), Some("First paragraph.\n\nSecond."));
    }
}
