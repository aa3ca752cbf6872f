//! Pagination strategy implementations
//!
//! Each strategy decides, after every fetched page, whether to go on.
//! [`paginate`] drives a strategy against a [`PageFetcher`].

use super::types::{check_short_page, NextPage, PaginationState, Paginator};
use crate::error::Result;
use crate::fetch::PageFetcher;
use crate::types::Page;
use tracing::debug;

// ============================================================================
// First Pages
// ============================================================================

/// Fetch pages `1..=pages_count`, stopping early on a short page
#[derive(Debug, Clone)]
pub struct FirstPagesPaginator {
    /// Articles per page
    pub page_size: u32,
    /// Upper bound on pages fetched
    pub pages_count: u32,
}

impl FirstPagesPaginator {
    /// Create a new first-pages paginator
    pub fn new(page_size: u32, pages_count: u32) -> Self {
        Self {
            page_size,
            pages_count,
        }
    }
}

impl Paginator for FirstPagesPaginator {
    fn process_page(&self, articles_count: usize, state: &mut PaginationState) -> NextPage {
        state.record_page(articles_count);

        if check_short_page(articles_count, self.page_size).should_stop()
            || state.page >= self.pages_count
        {
            return NextPage::Done;
        }

        state.next_page();
        NextPage::Continue { page: state.page }
    }
}

// ============================================================================
// All Pages
// ============================================================================

/// Fetch pages until one holds anything other than exactly `page_size` articles
#[derive(Debug, Clone)]
pub struct AllPagesPaginator {
    /// Articles per page
    pub page_size: u32,
}

impl AllPagesPaginator {
    /// Create a new all-pages paginator
    pub fn new(page_size: u32) -> Self {
        Self { page_size }
    }
}

impl Paginator for AllPagesPaginator {
    fn process_page(&self, articles_count: usize, state: &mut PaginationState) -> NextPage {
        state.record_page(articles_count);

        if articles_count != self.page_size as usize {
            return NextPage::Done;
        }

        state.next_page();
        NextPage::Continue { page: state.page }
    }
}

// ============================================================================
// Single Page
// ============================================================================

/// Fetch exactly one page
#[derive(Debug, Clone)]
pub struct SinglePagePaginator {
    /// 1-based page number
    pub page: u32,
}

impl SinglePagePaginator {
    /// Create a new single-page paginator
    pub fn new(page: u32) -> Self {
        Self { page }
    }
}

impl Paginator for SinglePagePaginator {
    fn start_page(&self) -> u32 {
        self.page
    }

    fn process_page(&self, articles_count: usize, state: &mut PaginationState) -> NextPage {
        state.record_page(articles_count);
        NextPage::Done
    }
}

// ============================================================================
// Driver
// ============================================================================

/// Fetch pages one after another until the strategy says stop.
///
/// Pages are returned in fetch order. The first error aborts the walk.
pub async fn paginate(
    fetcher: &PageFetcher,
    query_fragment: &str,
    paginator: &dyn Paginator,
) -> Result<Vec<Page>> {
    let mut state = PaginationState::with_page(paginator.start_page());
    let mut pages = Vec::new();

    loop {
        let page = fetcher.fetch_page(query_fragment, state.page).await?;
        let next = paginator.process_page(page.len(), &mut state);
        pages.push(page);

        match next {
            NextPage::Continue { page } => debug!("Continuing with page {}", page),
            NextPage::Done => break,
        }
    }

    debug!(
        "Pagination finished after {} pages ({} articles)",
        state.pages_fetched, state.articles_fetched
    );
    Ok(pages)
}
