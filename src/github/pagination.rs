//! Page requests and page results for GitHub list endpoints.
//!
//! GitHub paginates list endpoints with `page`/`per_page` query parameters
//! and advertises the following page through the `Link` header. Gateways
//! reduce that header to a single integer cursor where `0` means there are
//! no further pages.

use super::models::PullRequest;

/// Items requested per page by lookups.
///
/// GitHub caps `per_page` at 100, so this keeps round trips to a minimum.
pub const PER_PAGE: u8 = 100;

/// Largest `per_page` value GitHub accepts.
pub const MAX_PER_PAGE: u8 = 100;

/// A request for one page of results.
///
/// # Example
///
/// ```
/// use prfind::github::pagination::PageRequest;
///
/// let first = PageRequest::first();
/// assert_eq!(first.page(), 1);
/// assert_eq!(first.per_page(), 100);
/// assert_eq!(first.at(3).page(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u8,
}

impl PageRequest {
    /// Creates a request for `page` (1-based) with `per_page` items.
    #[must_use]
    pub const fn new(page: u32, per_page: u8) -> Self {
        Self { page, per_page }
    }

    /// First page at the lookup page size.
    #[must_use]
    pub const fn first() -> Self {
        Self::new(1, PER_PAGE)
    }

    /// Same page size, different page.
    #[must_use]
    pub const fn at(self, page: u32) -> Self {
        Self::new(page, self.per_page)
    }

    /// Page number (1-based).
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Items per page.
    #[must_use]
    pub const fn per_page(&self) -> u8 {
        self.per_page
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// One page of pull requests and the cursor for the next one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestPage {
    /// Pull requests in API response order.
    pub items: Vec<PullRequest>,
    /// Next page number; `0` when this is the last page.
    pub next_page: u32,
}

impl PullRequestPage {
    /// Creates a page with the given items and cursor.
    #[must_use]
    pub const fn new(items: Vec<PullRequest>, next_page: u32) -> Self {
        Self { items, next_page }
    }

    /// Creates a final page.
    #[must_use]
    pub const fn last(items: Vec<PullRequest>) -> Self {
        Self::new(items, 0)
    }

    /// Page to request next, or `None` once the listing is exhausted.
    #[must_use]
    pub const fn next(&self) -> Option<u32> {
        if self.next_page == 0 {
            None
        } else {
            Some(self.next_page)
        }
    }
}
