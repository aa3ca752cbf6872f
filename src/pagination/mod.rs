//! Pagination module
//!
//! Supports: First Pages, All Pages, Single Page
//!
//! # Overview
//!
//! Every strategy walks pages in order, starting at page 1 (or at the
//! requested page for a single-page fetch). A page holding fewer articles
//! than the page size marks the end of the result set.

mod strategies;
mod types;

pub use strategies::{paginate, AllPagesPaginator, FirstPagesPaginator, SinglePagePaginator};
pub use types::{check_short_page, NextPage, PaginationState, Paginator, StopResult};
