// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]

//! # News Feed Client
//!
//! A client for the News API top-headlines endpoint: builds search queries,
//! fetches pages over HTTP, decodes them into typed articles, and walks
//! through result sets page by page.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use newsfeed_client::{NewsFeedClient, SearchRequest, Result};
//! use newsfeed_client::http::HttpClient;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = NewsFeedClient::new(Arc::new(HttpClient::new()?), "your-api-key");
//!
//!     let search = SearchRequest::builder(["elections"])
//!         .country("us")
//!         .page_size(50)?
//!         .build()?;
//!
//!     for (i, page) in client.first_pages(&search).await?.iter().enumerate() {
//!         println!("page {}: {} articles", i + 1, page.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      NewsFeedClient                        │
//! │  first_pages()      all_pages()      page_by_index()       │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────────┬─────────────┴──────┬────────────────────────┐
//! │    Search    │     Pagination     │         Fetch          │
//! ├──────────────┼────────────────────┼────────────────────────┤
//! │ Request      │ First pages        │ URL + page + apiKey    │
//! │ Builder      │ All pages          │ Status mapping         │
//! │ Query string │ Single page        │ JSON decoding          │
//! └──────────────┴────────────────────┴────────────────────────┘
//!                              │
//!                   HttpTransport (reqwest / stub)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Wire types (articles and pages)
pub mod types;

/// Search requests and query strings
pub mod search;

/// HTTP transport
pub mod http;

/// Single-page fetching
pub mod fetch;

/// Pagination strategies
pub mod pagination;

/// Client facade
pub mod client;

/// Configuration file support
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::NewsFeedClient;
pub use error::{Error, Result};
pub use search::SearchRequest;
pub use types::{Article, ArticleSource, Page};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
