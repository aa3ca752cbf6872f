//! Single-page retrieval
//!
//! Builds the request URL for one page, sends it through the injected
//! transport and maps the response onto a [`Page`] or a typed error.

use crate::error::{Error, Result, COULD_NOT_RETRIEVE};
use crate::http::{HttpTransport, TransportResponse};
use crate::types::{ApiErrorBody, Page};
use std::sync::Arc;
use tracing::{debug, warn};
use url::form_urlencoded::byte_serialize;
use url::Url;

/// Scheme of the top-headlines endpoint
pub const API_ENDPOINT_SCHEME: &str = "http";

/// Host of the top-headlines endpoint
pub const API_ENDPOINT_HOST: &str = "newsapi.org";

/// Path of the top-headlines endpoint
pub const API_ENDPOINT_PATH: &str = "/v2/top-headlines";

/// Full default endpoint URL
pub const DEFAULT_ENDPOINT: &str = "http://newsapi.org/v2/top-headlines";

/// Fetches one page of a search
#[derive(Clone)]
pub struct PageFetcher {
    transport: Arc<dyn HttpTransport>,
    endpoint: Url,
    api_key: String,
}

impl PageFetcher {
    /// Create a fetcher against the default endpoint
    pub fn new(transport: Arc<dyn HttpTransport>, api_key: impl Into<String>) -> Self {
        let endpoint = Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL");

        Self {
            transport,
            endpoint,
            api_key: api_key.into(),
        }
    }

    /// Point the fetcher at another endpoint (a proxy or a local mock)
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self> {
        self.endpoint = Url::parse(endpoint)?;
        Ok(self)
    }

    /// The endpoint requests are sent to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// URL for one page of a search
    pub fn page_url(&self, query_fragment: &str, page: u32) -> Url {
        let api_key: String = byte_serialize(self.api_key.as_bytes()).collect();
        let mut url = self.endpoint.clone();
        url.set_query(Some(&format!(
            "{query_fragment}page={page}&apiKey={api_key}"
        )));
        url
    }

    /// Fetch and decode one page
    pub async fn fetch_page(&self, query_fragment: &str, page: u32) -> Result<Page> {
        let url = self.page_url(query_fragment, page);
        debug!("Fetching page {} for {}", page, query_fragment);

        let response = match self.transport.get(&url).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Transport failure on page {}: {}", page, e);
                return Err(Error::client(COULD_NOT_RETRIEVE));
            }
        };

        map_response(response)
    }
}

impl std::fmt::Debug for PageFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageFetcher")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Map a raw response onto a page or an error
fn map_response(response: TransportResponse) -> Result<Page> {
    match response.status {
        200 => decode_page(&response.body),
        400 => Err(Error::bad_request(api_detail(&response.body))),
        401 => Err(Error::unauthorized(api_detail(&response.body))),
        status => {
            warn!("Unexpected response code {} from news feed service", status);
            Err(Error::UnexpectedStatus { status })
        }
    }
}

/// Decode a page body
pub fn decode_page(body: &str) -> Result<Page> {
    let page: Page =
        serde_json::from_str(body).map_err(|e| Error::decode(format!("invalid page JSON: {e}")))?;
    debug!(
        "Decoded page with {} articles ({} total)",
        page.len(),
        page.total_results
    );
    Ok(page)
}

fn api_detail(body: &str) -> Option<String> {
    ApiErrorBody::parse(body).and_then(|b| b.describe())
}
