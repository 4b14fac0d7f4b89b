//! # Docs Nav
//!
//! Builds the sidebar page list of a documentation site from a hand-authored
//! route tree. Each node carries a title and an href segment relative to its
//! parent; grouping nodes (`noLink`) organize children under a shared prefix
//! without being pages themselves.
//!
//! ```text
//! nav.toml / built-in tree  →  validate  →  flatten  →  [Page { title, href }]
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | `RouteNode` (authored input) and `Page` (flattened output) |
//! | [`href`] | Joining parent and child href segments, with normalization |
//! | [`flatten`] | Pre-order flattening of the tree into pages |
//! | [`validate`] | Build-time checks: empty hrefs, dead groups, duplicates |
//! | [`navigation`] | `Navigation`: the validated, flattened, immutable result |
//! | [`routes`] | The site's built-in route tree |
//! | [`config`] | `nav.toml` loading, merging over stock defaults, validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Built Once, Passed Explicitly
//!
//! [`navigation::Navigation`] is constructed once at startup and handed to
//! consumers by reference. There is no module-level static holding the tree
//! or the page list.
//!
//! ## Normalized Hrefs
//!
//! By default segments are joined with exactly one `/`, so `"/docs/"` and
//! `"intro"` resolve to `/docs/intro`. `mode = "concat"` in `nav.toml` keeps
//! raw concatenation for trees that depend on it.
//!
//! ## Fail at Build Time
//!
//! Mistakes in the tree would otherwise ship as broken or missing sidebar
//! links. Empty titles and hrefs always fail the build; a `noLink` group with
//! no items fails by default, since it can never produce a page.

pub mod config;
pub mod flatten;
pub mod href;
pub mod navigation;
pub mod output;
pub mod routes;
pub mod types;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_helpers;
