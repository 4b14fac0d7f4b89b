//! Shared test utilities for the docs-nav test suite.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let pages = flatten_all(&default_routes(), HrefMode::Normalize);
//! assert_eq!(page_titles(&pages)[0], "Getting Started");
//! let page = find_page(&pages, "/getting-started/introduction");
//! ```

use crate::types::Page;

/// All page titles in output order.
pub fn page_titles(pages: &[Page]) -> Vec<&str> {
    pages.iter().map(|p| p.title.as_str()).collect()
}

/// All page hrefs in output order.
pub fn page_hrefs(pages: &[Page]) -> Vec<&str> {
    pages.iter().map(|p| p.href.as_str()).collect()
}

/// Find a page by resolved href. Panics if not found.
pub fn find_page<'a>(pages: &'a [Page], href: &str) -> &'a Page {
    pages.iter().find(|p| p.href == href).unwrap_or_else(|| {
        let hrefs = page_hrefs(pages);
        panic!("page '{href}' not found. Available: {hrefs:?}")
    })
}
