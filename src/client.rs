//! News feed client
//!
//! The public entry point. Wraps a [`PageFetcher`] and offers the three
//! retrieval modes:
//!
//! - [`NewsFeedClient::first_pages`]: up to `pages_count` pages
//! - [`NewsFeedClient::all_pages`]: every page until a short one
//! - [`NewsFeedClient::page_by_index`]: one page by number

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::fetch::PageFetcher;
use crate::http::{HttpClient, HttpTransport};
use crate::pagination::{paginate, AllPagesPaginator, FirstPagesPaginator, SinglePagePaginator};
use crate::search::SearchRequest;
use crate::types::{Article, Page};
use std::sync::Arc;
use tracing::debug;

/// Client for the top-headlines endpoint
#[derive(Debug, Clone)]
pub struct NewsFeedClient {
    fetcher: PageFetcher,
}

impl NewsFeedClient {
    /// Create a client over any transport, using the default endpoint
    pub fn new(transport: Arc<dyn HttpTransport>, api_key: impl Into<String>) -> Self {
        Self {
            fetcher: PageFetcher::new(transport, api_key),
        }
    }

    /// Create a client backed by reqwest from a config
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let api_key = config.require_api_key()?;
        let transport = HttpClient::with_config(config.http_config())?;
        Self::new(Arc::new(transport), api_key).with_endpoint(&config.endpoint)
    }

    /// Point the client at another endpoint
    pub fn with_endpoint(self, endpoint: &str) -> Result<Self> {
        Ok(Self {
            fetcher: self.fetcher.with_endpoint(endpoint)?,
        })
    }

    /// The underlying page fetcher
    pub fn fetcher(&self) -> &PageFetcher {
        &self.fetcher
    }

    /// Fetch one page for a raw query fragment
    pub async fn fetch_page(&self, query_fragment: &str, page: u32) -> Result<Page> {
        self.fetcher.fetch_page(query_fragment, page).await
    }

    /// Fetch pages `1..=pages_count`, stopping after the first short page.
    ///
    /// Returns one article list per fetched page, in page order.
    pub async fn first_pages(&self, request: &SearchRequest) -> Result<Vec<Vec<Article>>> {
        request.ensure_keywords()?;

        let paginator = FirstPagesPaginator::new(request.page_size(), request.pages_count());
        let pages = paginate(&self.fetcher, &request.query_fragment(), &paginator).await?;
        Ok(into_article_lists(pages))
    }

    /// Fetch every page until one holds fewer than `page_size` articles.
    ///
    /// `pages_count` is ignored. The short page is included, and at least
    /// one page is always returned.
    pub async fn all_pages(&self, request: &SearchRequest) -> Result<Vec<Vec<Article>>> {
        request.ensure_keywords()?;

        let paginator = AllPagesPaginator::new(request.page_size());
        let pages = paginate(&self.fetcher, &request.query_fragment(), &paginator).await?;
        Ok(into_article_lists(pages))
    }

    /// Fetch page `n` (1-based).
    ///
    /// When the API reports fewer total results than `n`, the page content is
    /// discarded and an empty list returned. Note that this compares the total
    /// article count against a page number, not against `n * page_size`.
    pub async fn page_by_index(&self, request: &SearchRequest, n: u32) -> Result<Vec<Article>> {
        if n == 0 {
            return Err(Error::invalid_argument(
                "There must be a positive number of pages to be viewed",
            ));
        }
        request.ensure_keywords()?;

        let paginator = SinglePagePaginator::new(n);
        let mut pages = paginate(&self.fetcher, &request.query_fragment(), &paginator).await?;
        let Some(page) = pages.pop() else {
            return Ok(Vec::new());
        };

        if page.total_results < u64::from(n) {
            debug!(
                "Page {} is beyond {} total results, returning no articles",
                n, page.total_results
            );
            return Ok(Vec::new());
        }
        Ok(page.into_articles())
    }
}

fn into_article_lists(pages: Vec<Page>) -> Vec<Vec<Article>> {
    pages.into_iter().map(Page::into_articles).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{StubTransport, TransportResponse};
    use crate::types::ArticleSource;
    use pretty_assertions::assert_eq;

    const TOTAL: usize = 237;
    const PAGE_SIZE: usize = 100;

    /// 237 numbered articles split into pages of 100
    fn fixture_pages() -> Vec<Vec<Article>> {
        let articles: Vec<Article> = (1..=TOTAL)
            .map(|i| Article {
                source: Some(ArticleSource {
                    id: Some(format!("id{i}")),
                    name: Some(format!("source{i}")),
                }),
                author: Some(format!("author{i}")),
                title: Some(format!("title{i}")),
                description: Some(format!("description{i}")),
                url: Some(format!("url{i}")),
                url_to_image: Some(format!("urlToImage{i}")),
                published_at: Some(format!("publishedAt{i}")),
                content: Some(format!("content{i}")),
            })
            .collect();
        articles.chunks(PAGE_SIZE).map(<[Article]>::to_vec).collect()
    }

    fn response_for(articles: &[Article]) -> TransportResponse {
        let page = Page::new(TOTAL as u64, articles.to_vec());
        TransportResponse::ok(serde_json::to_string(&page).unwrap())
    }

    fn stub_serving(pages: &[Vec<Article>]) -> Arc<StubTransport> {
        Arc::new(StubTransport::with_responses(
            pages.iter().map(|p| response_for(p)),
        ))
    }

    fn client_over(stub: &Arc<StubTransport>) -> NewsFeedClient {
        NewsFeedClient::new(stub.clone(), "test-key")
    }

    fn unchecked_request(keywords: Vec<String>) -> SearchRequest {
        SearchRequest {
            keywords,
            category: None,
            country: None,
            page_size: 100,
            pages_count: 3,
        }
    }

    #[tokio::test]
    async fn test_empty_keywords_fail_before_network() {
        let stub = Arc::new(StubTransport::new());
        let client = client_over(&stub);
        let request = unchecked_request(Vec::new());

        let err = client.first_pages(&request).await.unwrap_err();
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "At least one keyword is required");

        let err = client.all_pages(&request).await.unwrap_err();
        assert!(err.is_client_error());

        let err = client.page_by_index(&request, 1).await.unwrap_err();
        assert!(err.is_client_error());

        assert_eq!(stub.request_count(), 0);
    }

    #[tokio::test]
    async fn test_first_pages_returns_three_full_pages() {
        let full: Vec<Vec<Article>> = (0..3).map(|_| fixture_pages()[0].clone()).collect();
        let stub = stub_serving(&full);
        let request = SearchRequest::builder(["biden"])
            .page_size(100)
            .unwrap()
            .category("politics")
            .country("us")
            .pages_count(3)
            .unwrap()
            .build()
            .unwrap();

        let result = client_over(&stub).first_pages(&request).await.unwrap();

        assert_eq!(result, full);
        assert_eq!(stub.request_count(), 3);
    }

    #[tokio::test]
    async fn test_first_pages_stops_early_on_short_page() {
        let pages = fixture_pages();
        let served = vec![pages[0].clone(), pages[2].clone(), pages[1].clone()];
        let stub = stub_serving(&served);
        let request = SearchRequest::builder(["biden"]).build().unwrap();

        let result = client_over(&stub).first_pages(&request).await.unwrap();

        assert_eq!(result, vec![pages[0].clone(), pages[2].clone()]);
        assert_eq!(stub.request_count(), 2);
    }

    #[tokio::test]
    async fn test_first_pages_respects_pages_count() {
        let full: Vec<Vec<Article>> = (0..5).map(|_| fixture_pages()[0].clone()).collect();
        let stub = stub_serving(&full);
        let request = SearchRequest::builder(["a"])
            .pages_count(2)
            .unwrap()
            .build()
            .unwrap();

        let result = client_over(&stub).first_pages(&request).await.unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(stub.request_count(), 2);
    }

    #[tokio::test]
    async fn test_all_pages_fetches_until_short_page() {
        let pages = fixture_pages();
        let stub = stub_serving(&pages);
        let request = SearchRequest::builder(["biden"])
            .pages_count(1)
            .unwrap()
            .build()
            .unwrap();

        let result = client_over(&stub).all_pages(&request).await.unwrap();

        assert_eq!(result, pages);
        assert_eq!(
            result.iter().map(Vec::len).collect::<Vec<_>>(),
            vec![100, 100, 37]
        );
        assert_eq!(stub.request_count(), 3);
    }

    #[tokio::test]
    async fn test_all_pages_returns_single_empty_page() {
        let stub = stub_serving(&[Vec::new()]);
        let request = SearchRequest::builder(["nothing"]).build().unwrap();

        let result = client_over(&stub).all_pages(&request).await.unwrap();
        assert_eq!(result, vec![Vec::<Article>::new()]);
        assert_eq!(stub.request_count(), 1);
    }

    #[tokio::test]
    async fn test_page_by_index() {
        let pages = fixture_pages();
        let stub = stub_serving(&[pages[2].clone()]);
        let request = SearchRequest::builder(["ew", "no"])
            .country("uk")
            .category("economy")
            .build()
            .unwrap();

        let result = client_over(&stub).page_by_index(&request, 3).await.unwrap();

        assert_eq!(result, pages[2]);
        assert_eq!(result.len(), 37);
        assert!(stub.requests()[0].as_str().contains("page=3&"));
    }

    #[tokio::test]
    async fn test_page_by_index_past_the_end() {
        let stub = stub_serving(&[Vec::new()]);
        let request = SearchRequest::builder(["a"]).build().unwrap();

        let result = client_over(&stub).page_by_index(&request, 5).await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_page_by_index_total_below_index_discards_content() {
        let page = Page::new(2, vec![Article::default(); 3]);
        let stub = Arc::new(StubTransport::with_responses([TransportResponse::ok(
            serde_json::to_string(&page).unwrap(),
        )]));
        let request = SearchRequest::builder(["a"]).build().unwrap();

        let result = client_over(&stub).page_by_index(&request, 3).await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_page_by_index_rejects_zero() {
        let stub = Arc::new(StubTransport::new());
        let request = SearchRequest::builder(["a"]).build().unwrap();

        let err = client_over(&stub).page_by_index(&request, 0).await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
        assert_eq!(stub.request_count(), 0);
    }

    #[tokio::test]
    async fn test_page_by_index_is_repeatable() {
        let pages = fixture_pages();
        let stub = stub_serving(&[pages[1].clone()]);
        let client = client_over(&stub);
        let request = SearchRequest::builder(["a"]).build().unwrap();

        let first = client.page_by_index(&request, 2).await.unwrap();
        let second = client.page_by_index(&request, 2).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_error_statuses_propagate() {
        let request = SearchRequest::builder(["a"]).country("wakanda").build().unwrap();

        let stub = Arc::new(StubTransport::with_responses([TransportResponse::new(400, "")]));
        let err = client_over(&stub).first_pages(&request).await.unwrap_err();
        assert!(matches!(err, Error::BadRequest { .. }));

        let stub = Arc::new(StubTransport::with_responses([TransportResponse::new(401, "")]));
        let err = client_over(&stub).all_pages(&request).await.unwrap_err();
        assert!(matches!(err, Error::Unauthorized { .. }));

        let stub = Arc::new(StubTransport::with_responses([TransportResponse::new(500, "")]));
        let err = client_over(&stub).page_by_index(&request, 1).await.unwrap_err();
        assert!(err.is_client_error());
        assert!(matches!(err, Error::UnexpectedStatus { status: 500 }));
    }

    #[test]
    fn test_from_config_requires_api_key() {
        let err = NewsFeedClient::from_config(&ClientConfig::default()).unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { .. }));
    }

    #[test]
    fn test_from_config_uses_endpoint() {
        let config = ClientConfig {
            api_key: Some("k".to_string()),
            endpoint: "http://127.0.0.1:9999/v2/top-headlines".to_string(),
            ..Default::default()
        };
        let client = NewsFeedClient::from_config(&config).unwrap();
        assert_eq!(client.fetcher().endpoint().port(), Some(9999));
    }
}
