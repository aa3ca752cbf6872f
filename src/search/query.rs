//! Query fragment rendering
//!
//! Produces `q=a+b&category=c&country=d&pageSize=n&`. The trailing separator
//! is intentional: the fetcher appends `page=` and `apiKey=` directly.

use super::request::SearchRequest;
use url::form_urlencoded::byte_serialize;

/// Separator between query parameters
pub const PARAM_SEPARATOR: &str = "&";

/// Separator between keywords inside the `q` parameter
pub const KEYWORD_SEPARATOR: &str = "+";

/// Render the query fragment for a search
pub fn query_fragment(request: &SearchRequest) -> String {
    let keywords = request
        .keywords()
        .iter()
        .map(|keyword| encode(keyword))
        .collect::<Vec<_>>()
        .join(KEYWORD_SEPARATOR);

    let mut fragment = param("q", &keywords);
    if let Some(category) = non_blank(request.category()) {
        fragment.push_str(&param("category", &encode(category)));
    }
    if let Some(country) = non_blank(request.country()) {
        fragment.push_str(&param("country", &encode(country)));
    }
    fragment.push_str(&param("pageSize", &request.page_size().to_string()));
    fragment
}

fn param(name: &str, value: &str) -> String {
    format!("{name}={value}{PARAM_SEPARATOR}")
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}
