//! Href resolution for nested route segments.
//!
//! Each node's `href` is relative to its parent. Resolving a child means
//! joining the parent's absolute href with the child's segment:
//!
//! - `Concat`: raw string concatenation, separators are the author's job.
//!   `"/docs" + "/intro"` → `"/docs/intro"`, `"/docs" + "intro"` → `"/docsintro"`.
//! - `Normalize`: exactly one `/` between segments, a leading `/`, no
//!   repeated or trailing slashes. `"/docs/" + "intro"` → `"/docs/intro"`.
//!
//! For segments written as `/name` both modes agree.

use serde::{Deserialize, Serialize};

/// How child segments are joined onto their parent's href.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HrefMode {
    #[default]
    Normalize,
    Concat,
}

/// Join a parent's absolute href with a child's relative segment.
pub fn join(parent: &str, child: &str, mode: HrefMode) -> String {
    match mode {
        HrefMode::Concat => format!("{parent}{child}"),
        HrefMode::Normalize => normalize(&format!("{parent}/{child}")),
    }
}

/// Collapse an href to `/a/b/c` form.
///
/// Empty segments are dropped, so repeated and trailing slashes disappear.
/// An href with no segments at all becomes `/`.
pub fn normalize(href: &str) -> String {
    let mut out = String::with_capacity(href.len() + 1);
    for segment in href.split('/').filter(|s| !s.is_empty()) {
        out.push('/');
        out.push_str(segment);
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}
