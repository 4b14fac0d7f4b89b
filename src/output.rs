//! CLI output formatting.
//!
//! Each command has a `format_*` function returning `Vec<String>` for
//! testability and a `print_*` wrapper that writes to stdout.
//!
//! ## Pages
//!
//! ```text
//! 001 Getting Started → /getting-started
//! 002 Introduction → /getting-started/introduction
//! ```
//!
//! ## Tree
//!
//! ```text
//! 001 Getting Started → /getting-started
//!     001 Introduction → /getting-started/introduction
//! 002 Dashboard App (group) → /dashboard-app
//!     001 Port Notes → /dashboard-app/port-notes
//! ```

use crate::href::{self, HrefMode};
use crate::navigation::Navigation;
use crate::types::{Page, RouteNode};
use crate::validate::Issue;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

// ============================================================================
// Pages
// ============================================================================

pub fn format_pages(pages: &[Page]) -> Vec<String> {
    pages
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{} {} → {}", format_index(i + 1), p.title, p.href))
        .collect()
}

pub fn print_pages(nav: &Navigation) {
    for line in format_pages(nav.pages()) {
        println!("{}", line);
    }
}

// ============================================================================
// Tree
// ============================================================================

/// Format the route tree with resolved hrefs, indices per sibling level.
pub fn format_tree(roots: &[RouteNode], mode: HrefMode) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, root) in roots.iter().enumerate() {
        let resolved = match mode {
            HrefMode::Normalize => href::normalize(&root.href),
            HrefMode::Concat => root.href.clone(),
        };
        format_tree_node(root, &resolved, i + 1, 0, mode, &mut lines);
    }
    lines
}

fn format_tree_node(
    node: &RouteNode,
    resolved: &str,
    position: usize,
    depth: usize,
    mode: HrefMode,
    lines: &mut Vec<String>,
) {
    let marker = if node.no_link { " (group)" } else { "" };
    lines.push(format!(
        "{}{} {}{} → {}",
        indent(depth),
        format_index(position),
        node.title,
        marker,
        resolved
    ));
    for (i, child) in node.items.iter().enumerate() {
        let child_href = href::join(resolved, &child.href, mode);
        format_tree_node(child, &child_href, i + 1, depth + 1, mode, lines);
    }
}

pub fn print_tree(nav: &Navigation, mode: HrefMode) {
    for line in format_tree(nav.roots(), mode) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

/// Format validation issues followed by a summary line.
pub fn format_issues(issues: &[Issue], page_count: Option<usize>) -> Vec<String> {
    let mut lines: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
    let errors = issues.iter().filter(|i| i.is_error()).count();
    let warnings = issues.len() - errors;
    match page_count {
        Some(n) => lines.push(format!(
            "{} {}, {} {}",
            n,
            plural(n, "page", "pages"),
            warnings,
            plural(warnings, "warning", "warnings")
        )),
        None => lines.push(format!(
            "{} {}, {} {}",
            errors,
            plural(errors, "error", "errors"),
            warnings,
            plural(warnings, "warning", "warnings")
        )),
    }
    lines
}

pub fn print_issues(issues: &[Issue], page_count: Option<usize>) {
    for line in format_issues(issues, page_count) {
        println!("{}", line);
    }
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}
