use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::wire::decode_posts;
use super::{ContentError, ContentSource, Post};
use crate::config::Config;
use crate::constants::USER_AGENT;

/// GROQ query for every post, with author, category and tags dereferenced.
pub const POSTS_QUERY: &str = r#"*[_type == "post"] | order(publishedAt desc) {
  _id,
  title,
  excerpt,
  body,
  mainImage{asset->{url}},
  publishedAt,
  featured,
  stats,
  readTime,
  author->{name, role, image{asset->{url}}},
  category->{title},
  tags[]->{title}
}"#;

/// Query API response envelope.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: Option<Vec<Value>>,
}

/// Read-only client for the content store's HTTP query API.
#[derive(Debug, Clone)]
pub struct SanityClient {
    client: Client,
    query_url: String,
    token: Option<String>,
}

impl SanityClient {
    /// Create a client for the dataset named in the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, ContentError> {
        let client = Client::builder()
            .timeout(config.fetch_timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(ContentError::Request)?;

        let query_url = format!(
            "{}/v{}/data/query/{}",
            config.sanity_api_base(),
            config.sanity_api_version.trim_start_matches('v'),
            config.sanity_dataset
        );

        Ok(Self {
            client,
            query_url,
            token: config.sanity_token.clone(),
        })
    }

    #[must_use]
    pub fn query_url(&self) -> &str {
        &self.query_url
    }
}

#[async_trait]
impl ContentSource for SanityClient {
    fn name(&self) -> &'static str {
        "sanity"
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, ContentError> {
        let mut request = self
            .client
            .get(&self.query_url)
            .query(&[("query", POSTS_QUERY)]);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        debug!(url = %self.query_url, "Querying content store");

        let response = request.send().await.map_err(ContentError::Request)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Status {
                status: status.as_u16(),
            });
        }

        let body: QueryResponse = response.json().await.map_err(ContentError::Decode)?;
        Ok(decode_posts(body.result.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_url() {
        let mut config = Config::for_testing();
        config.sanity_project_id = "q6mqeovz".to_string();
        config.sanity_use_cdn = true;
        let client = SanityClient::new(&config).unwrap();
        assert_eq!(
            client.query_url(),
            "https://q6mqeovz.apicdn.sanity.io/v2023-05-03/data/query/production"
        );
    }

    #[test]
    fn test_query_dereferences_nested_fields() {
        assert!(POSTS_QUERY.contains(r#"_type == "post""#));
        assert!(POSTS_QUERY.contains("author->"));
        assert!(POSTS_QUERY.contains("category->{title}"));
        assert!(POSTS_QUERY.contains("tags[]->{title}"));
    }
}
