//! Route tree flattening.
//!
//! Turns the nested route tree into the ordered page list a sidebar renders.
//! Traversal is pre-order: a node comes before its children, children keep
//! their declared order. Group (`no_link`) nodes emit nothing themselves but
//! still prefix their children's hrefs.
//!
//! ```text
//! Dashboard App  /dashboard-app  (group)
//! └── Port Notes /port-notes
//!     └── Routing /routing
//!
//! → Port Notes  /dashboard-app/port-notes
//!   Routing     /dashboard-app/port-notes/routing
//! ```

use crate::href::{self, HrefMode};
use crate::types::{Page, RouteNode};

/// Flatten a single node whose `href` is already absolute.
///
/// The node's own href is emitted verbatim; only descendants are resolved.
pub fn flatten(node: &RouteNode, mode: HrefMode) -> Vec<Page> {
    let mut pages = Vec::new();
    flatten_into(node, &node.href, mode, &mut pages);
    pages
}

/// Flatten every root in order and concatenate the results.
///
/// In `Normalize` mode root hrefs are normalized before their subtrees are
/// resolved.
pub fn flatten_all(roots: &[RouteNode], mode: HrefMode) -> Vec<Page> {
    let mut pages = Vec::new();
    for root in roots {
        let href = match mode {
            HrefMode::Normalize => href::normalize(&root.href),
            HrefMode::Concat => root.href.clone(),
        };
        flatten_into(root, &href, mode, &mut pages);
    }
    pages
}

fn flatten_into(node: &RouteNode, resolved: &str, mode: HrefMode, pages: &mut Vec<Page>) {
    if !node.no_link {
        pages.push(Page::new(node.title.clone(), resolved));
    }
    for child in &node.items {
        let child_href = href::join(resolved, &child.href, mode);
        flatten_into(child, &child_href, mode, pages);
    }
}
