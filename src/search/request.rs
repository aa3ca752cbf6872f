//! Search request and its builder

use crate::error::{Error, Result, KEYWORD_REQUIRED};

/// Default number of articles per page (the API maximum)
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Default number of pages fetched by a first-pages search
pub const DEFAULT_PAGES_COUNT: u32 = 3;

/// An immutable top-headlines search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub(crate) keywords: Vec<String>,
    pub(crate) category: Option<String>,
    pub(crate) country: Option<String>,
    pub(crate) page_size: u32,
    pub(crate) pages_count: u32,
}

impl SearchRequest {
    /// Start building a search for the given keywords
    pub fn builder<I, S>(keywords: I) -> SearchRequestBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SearchRequestBuilder::new(keywords)
    }

    /// Keywords, in the order they were given
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Category filter, if any
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Country filter, if any
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Articles per page
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Pages fetched by a first-pages search
    pub fn pages_count(&self) -> u32 {
        self.pages_count
    }

    /// Render the query fragment for this search
    pub fn query_fragment(&self) -> String {
        super::query_fragment(self)
    }

    /// Fail unless at least one keyword is present
    pub(crate) fn ensure_keywords(&self) -> Result<()> {
        if self.keywords.is_empty() {
            return Err(Error::client(KEYWORD_REQUIRED));
        }
        Ok(())
    }
}

/// Builder for [`SearchRequest`]
///
/// Page size and pages count are validated when they are set, keywords when
/// the request is built.
#[derive(Debug, Clone)]
pub struct SearchRequestBuilder {
    keywords: Vec<String>,
    category: Option<String>,
    country: Option<String>,
    page_size: u32,
    pages_count: u32,
}

impl SearchRequestBuilder {
    fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            category: None,
            country: None,
            page_size: DEFAULT_PAGE_SIZE,
            pages_count: DEFAULT_PAGES_COUNT,
        }
    }

    /// Set the category filter
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the country filter
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Set the number of articles per page
    pub fn page_size(mut self, page_size: u32) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::invalid_argument(
                "There must be a positive number of articles per page",
            ));
        }
        self.page_size = page_size;
        Ok(self)
    }

    /// Set the number of pages fetched by a first-pages search
    pub fn pages_count(mut self, pages_count: u32) -> Result<Self> {
        if pages_count == 0 {
            return Err(Error::invalid_argument(
                "There must be a positive number of pages to be viewed",
            ));
        }
        self.pages_count = pages_count;
        Ok(self)
    }

    /// Build the request
    pub fn build(self) -> Result<SearchRequest> {
        let request = SearchRequest {
            keywords: self.keywords,
            category: self.category,
            country: self.country,
            page_size: self.page_size,
            pages_count: self.pages_count,
        };
        request.ensure_keywords()?;
        Ok(request)
    }
}
