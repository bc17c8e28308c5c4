//! The built-in insights list, used when no content store is configured.

use async_trait::async_trait;
use serde_json::Value;

use super::wire::decode_posts;
use super::{ContentError, ContentSource, Post};

const STATIC_POSTS: &str = r#"[
  {
    "id": "1",
    "category": "Digital Transformation",
    "title": "How AI is Revolutionizing Supply Chain Management",
    "excerpt": "Discover how leading companies are leveraging artificial intelligence to optimize their supply chains and reduce costs by up to 30%.",
    "content": "Full blog post content would go here...",
    "image": "https://images.unsplash.com/photo-1586528116311-ad8dd3c8310d?w=800&h=600&fit=crop&crop=smart",
    "readTime": "8 min read",
    "date": "March 15, 2024",
    "author": {
      "name": "Dr. Emily Johnson",
      "avatar": "https://images.unsplash.com/photo-1580489944761-15a19d654956?w=100&h=100&fit=crop&crop=face",
      "role": "Head of Innovation"
    },
    "featured": true,
    "stats": { "growth": "+45%", "impact": "Efficiency Gain" },
    "tags": ["AI", "Supply Chain", "Technology", "Innovation"]
  },
  {
    "id": "2",
    "category": "Strategy",
    "title": "Building Resilient Organizations in Uncertain Times",
    "excerpt": "Learn the key strategies that help organizations thrive during economic uncertainty and market volatility.",
    "content": "Full blog post content would go here...",
    "image": "https://images.unsplash.com/photo-1552664730-d307ca884978?w=800&h=600&fit=crop&crop=smart",
    "readTime": "6 min read",
    "date": "March 10, 2024",
    "author": {
      "name": "Michael Rodriguez",
      "avatar": "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face",
      "role": "Chief Strategy Officer"
    },
    "stats": { "growth": "+200%", "impact": "Risk Reduction" },
    "tags": ["Strategy", "Resilience", "Leadership", "Crisis Management"]
  },
  {
    "id": "3",
    "category": "Case Study",
    "title": "Global Retailer Achieves 3x Revenue Growth",
    "excerpt": "How we helped a major retail chain transform their digital presence and triple their online revenue in 18 months.",
    "content": "Full blog post content would go here...",
    "image": "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=800&h=600&fit=crop&crop=smart",
    "readTime": "10 min read",
    "date": "March 5, 2024",
    "author": {
      "name": "Sarah Chen",
      "avatar": "https://images.unsplash.com/photo-1494790108755-2616b332c2a7?w=100&h=100&fit=crop&crop=face",
      "role": "CEO & Managing Partner"
    },
    "featured": true,
    "stats": { "growth": "3x", "impact": "Revenue Growth" },
    "tags": ["Case Study", "Retail", "Digital Transformation", "Growth"]
  },
  {
    "id": "4",
    "category": "Innovation",
    "title": "The Future of Work: Hybrid Models That Actually Work",
    "excerpt": "Insights from our research on successful hybrid work implementations across Fortune 500 companies.",
    "content": "Full blog post content would go here...",
    "image": "https://images.unsplash.com/photo-1497215728101-856f4ea42174?w=800&h=600&fit=crop&crop=smart",
    "readTime": "7 min read",
    "date": "February 28, 2024",
    "author": {
      "name": "David Kim",
      "avatar": "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop&crop=face",
      "role": "Global Operations Director"
    },
    "tags": ["Future of Work", "Hybrid", "Innovation", "HR"]
  },
  {
    "id": "5",
    "category": "Technology",
    "title": "Cybersecurity in the Age of Remote Work",
    "excerpt": "Essential strategies for protecting your organization's data and systems in a distributed work environment.",
    "content": "Full blog post content would go here...",
    "image": "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?w=800&h=600&fit=crop&crop=smart",
    "readTime": "5 min read",
    "date": "February 20, 2024",
    "author": {
      "name": "Dr. Emily Johnson",
      "avatar": "https://images.unsplash.com/photo-1580489944761-15a19d654956?w=100&h=100&fit=crop&crop=face",
      "role": "Head of Innovation"
    },
    "tags": ["Cybersecurity", "Remote Work", "Technology", "Risk Management"]
  },
  {
    "id": "6",
    "category": "Leadership",
    "title": "Leading Through Change: A Framework for Success",
    "excerpt": "A comprehensive guide to leading organizational change initiatives with confidence and clarity.",
    "content": "Full blog post content would go here...",
    "image": "https://images.unsplash.com/photo-1559136555-9303baea8ebd?w=800&h=600&fit=crop&crop=smart",
    "readTime": "9 min read",
    "date": "February 15, 2024",
    "author": {
      "name": "Michael Rodriguez",
      "avatar": "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face",
      "role": "Chief Strategy Officer"
    },
    "tags": ["Leadership", "Change Management", "Strategy", "Culture"]
  }
]"#;

/// Content source backed by the built-in post list.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticContent;

#[async_trait]
impl ContentSource for StaticContent {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, ContentError> {
        let values: Vec<Value> =
            serde_json::from_str(STATIC_POSTS).map_err(ContentError::Parse)?;
        Ok(decode_posts(values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_posts_decode() {
        let posts = StaticContent.fetch_posts().await.unwrap();
        assert_eq!(posts.len(), 6);
        assert_eq!(posts[0].id, "1");
        assert_eq!(
            posts.iter().filter(|p| p.featured).count(),
            2,
            "two posts carry the featured flag"
        );
        assert!(posts.iter().all(|p| p.author.is_some() && p.category.is_some()));
    }
}
