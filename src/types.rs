//! Wire types shared across the client
//!
//! These mirror the JSON documents returned by the top-headlines endpoint.
//! Article fields are passed through untouched; nothing here validates them.

use serde::{Deserialize, Serialize};

// ============================================================================
// Articles
// ============================================================================

/// Publisher of an article
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    /// Source identifier (often null for smaller outlets)
    #[serde(default)]
    pub id: Option<String>,
    /// Human-readable source name
    #[serde(default)]
    pub name: Option<String>,
}

/// A single headline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub source: Option<ArticleSource>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

// ============================================================================
// Pages
// ============================================================================

/// One response of the top-headlines endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Response status as reported by the API ("ok")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Number of results for the whole search, not just this page
    pub total_results: u64,
    /// Articles on this page
    #[serde(default)]
    pub articles: Vec<Article>,
}

impl Page {
    /// Create a page from its parts
    pub fn new(total_results: u64, articles: Vec<Article>) -> Self {
        Self {
            status: None,
            total_results,
            articles,
        }
    }

    /// Number of articles on this page
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Whether this page carries no articles
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Consume the page, keeping only its articles
    pub fn into_articles(self) -> Vec<Article> {
        self.articles
    }
}

// ============================================================================
// Error Envelope
// ============================================================================

/// Error document sent by the API alongside 4xx responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Parse an error body, returning None when it is not the API's envelope
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// Render as `code: message`, or whichever part is present
    pub fn describe(&self) -> Option<String> {
        match (&self.code, &self.message) {
            (Some(code), Some(message)) => Some(format!("{code}: {message}")),
            (None, Some(message)) => Some(message.clone()),
            (Some(code), None) => Some(code.clone()),
            (None, None) => None,
        }
    }
}
