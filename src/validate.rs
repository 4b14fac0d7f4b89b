//! Build-time checks for the authored route tree.
//!
//! Flattening accepts any tree, so mistakes here would otherwise ship as
//! broken sidebar links. Checks run over the whole tree and report every
//! problem at once, in pre-order, each with a breadcrumb of titles:
//!
//! ```text
//! error: Dashboard App > Drafts: group has no items and produces no pages
//! warning: Getting Started > Setup: href "setup" does not start with '/'
//! ```
//!
//! Empty titles and hrefs are always errors. The remaining checks have a
//! configurable [`Level`], see [`ValidationConfig`].

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::config::{Level, ValidationConfig};
use crate::href::{self, HrefMode};
use crate::types::RouteNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => f.write_str("warning"),
            Severity::Error => f.write_str("error"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    #[error("href is empty")]
    EmptyHref,
    #[error("title is empty")]
    EmptyTitle,
    #[error("group has no items and produces no pages")]
    DeadGroup,
    #[error("href {0:?} does not start with '/'")]
    MissingLeadingSlash(String),
    #[error("resolved href {href} is already used by {first}")]
    DuplicateHref { href: String, first: String },
}

/// A single problem found in the route tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub severity: Severity,
    /// Breadcrumb of titles from the root, e.g. `Dashboard App > Port Notes`
    pub location: String,
    pub kind: IssueKind,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.location, self.kind)
    }
}

impl Issue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Check every node in `roots` and return the issues found, in pre-order.
///
/// `mode` must match the mode used for flattening so duplicate detection
/// compares the hrefs the sidebar will actually see.
pub fn validate(roots: &[RouteNode], config: &ValidationConfig, mode: HrefMode) -> Vec<Issue> {
    let mut walker = Walker {
        config,
        mode,
        issues: Vec::new(),
        seen: HashMap::new(),
    };
    for root in roots {
        let resolved = match mode {
            HrefMode::Normalize => href::normalize(&root.href),
            HrefMode::Concat => root.href.clone(),
        };
        walker.visit(root, &resolved, &[]);
    }
    walker.issues
}

struct Walker<'a> {
    config: &'a ValidationConfig,
    mode: HrefMode,
    issues: Vec<Issue>,
    /// Resolved href → breadcrumb of the first page that used it
    seen: HashMap<String, String>,
}

impl Walker<'_> {
    fn visit(&mut self, node: &RouteNode, resolved: &str, parents: &[&str]) {
        let title = if node.title.trim().is_empty() {
            "(untitled)"
        } else {
            node.title.as_str()
        };
        let mut crumbs = parents.to_vec();
        crumbs.push(title);
        let location = crumbs.join(" > ");

        if node.title.trim().is_empty() {
            self.push(Level::Error, &location, IssueKind::EmptyTitle);
        }
        if node.href.trim().is_empty() {
            self.push(Level::Error, &location, IssueKind::EmptyHref);
        } else if !node.href.starts_with('/') {
            self.push(
                self.config.missing_leading_slash,
                &location,
                IssueKind::MissingLeadingSlash(node.href.clone()),
            );
        }
        if node.no_link && node.items.is_empty() {
            self.push(self.config.dead_groups, &location, IssueKind::DeadGroup);
        }
        if !node.no_link {
            match self.seen.get(resolved) {
                Some(first) => {
                    let kind = IssueKind::DuplicateHref {
                        href: resolved.to_string(),
                        first: first.clone(),
                    };
                    self.push(self.config.duplicate_hrefs, &location, kind);
                }
                None => {
                    self.seen.insert(resolved.to_string(), location.clone());
                }
            }
        }

        for child in &node.items {
            let child_href = href::join(resolved, &child.href, self.mode);
            self.visit(child, &child_href, &crumbs);
        }
    }

    fn push(&mut self, level: Level, location: &str, kind: IssueKind) {
        let severity = match level {
            Level::Allow => return,
            Level::Warn => Severity::Warning,
            Level::Error => Severity::Error,
        };
        self.issues.push(Issue {
            severity,
            location: location.to_string(),
            kind,
        });
    }
}
