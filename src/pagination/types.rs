//! Pagination types and traits
//!
//! Defines the core pagination abstractions used by all strategies.

/// Result of the next page computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPage {
    /// Fetch this page next
    Continue {
        /// 1-based page number
        page: u32,
    },
    /// No more pages
    Done,
}

/// Result of checking a stop condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopResult {
    /// Continue pagination
    Continue,
    /// Stop pagination
    Stop,
}

impl StopResult {
    /// Check if we should stop
    pub fn should_stop(&self) -> bool {
        matches!(self, Self::Stop)
    }
}

/// Tracks pagination state during iteration.
///
/// Completion is signalled only by [`NextPage::Done`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Page about to be fetched, or the last fetched page once done
    pub page: u32,
    /// Pages fetched so far
    pub pages_fetched: u32,
    /// Articles fetched so far
    pub articles_fetched: u64,
}

impl PaginationState {
    /// Create state with a starting page
    pub fn with_page(page: u32) -> Self {
        Self {
            page,
            ..Default::default()
        }
    }

    /// Increment page number
    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Record a fetched page
    pub fn record_page(&mut self, articles_count: usize) {
        self.pages_fetched += 1;
        self.articles_fetched += articles_count as u64;
    }
}

/// Core trait for pagination strategies
pub trait Paginator: Send + Sync {
    /// First page to request
    fn start_page(&self) -> u32 {
        1
    }

    /// Process a fetched page and determine whether another one follows
    fn process_page(&self, articles_count: usize, state: &mut PaginationState) -> NextPage;
}

/// A page shorter than the page size ends the result set
pub fn check_short_page(articles_count: usize, page_size: u32) -> StopResult {
    if articles_count < page_size as usize {
        StopResult::Stop
    } else {
        StopResult::Continue
    }
}
