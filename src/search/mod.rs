//! Search module
//!
//! Describes *what* to search for and renders it as a query fragment.
//!
//! # Overview
//!
//! A [`SearchRequest`] is built once through [`SearchRequestBuilder`] and is
//! immutable afterwards. [`query_fragment`] turns it into the part of the
//! query string that does not depend on the page number or the API key.

mod query;
mod request;

pub use query::{query_fragment, KEYWORD_SEPARATOR, PARAM_SEPARATOR};
pub use request::{SearchRequest, SearchRequestBuilder, DEFAULT_PAGES_COUNT, DEFAULT_PAGE_SIZE};
