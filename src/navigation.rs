//! The built navigation: a route tree plus its flattened page list.
//!
//! [`Navigation::build`] validates the tree, flattens it once, and returns an
//! immutable value. Callers hold it and pass `&Navigation` to whatever renders
//! the sidebar; nothing here is global or lazily computed.

use std::fmt;

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{ConfigError, NavConfig};
use crate::flatten::flatten_all;
use crate::routes::default_routes;
use crate::types::{Page, RouteNode};
use crate::validate::{Issue, validate};

#[derive(Error, Debug)]
pub enum NavError {
    #[error("invalid route tree:\n{}", IssueList(.0))]
    Invalid(Vec<Issue>),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Formats issues one per line, indented.
struct IssueList<'a>(&'a [Issue]);

impl fmt::Display for IssueList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {issue}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Navigation {
    roots: Vec<RouteNode>,
    pages: Vec<Page>,
    warnings: Vec<Issue>,
}

impl Navigation {
    /// Validate and flatten `roots`.
    ///
    /// Fails with [`NavError::Invalid`] carrying every issue (warnings
    /// included) if any issue is an error. Warnings alone are logged and kept.
    pub fn build(roots: Vec<RouteNode>, config: &NavConfig) -> Result<Self, NavError> {
        let mode = config.hrefs.mode;
        let issues = validate(&roots, &config.validation, mode);
        if issues.iter().any(Issue::is_error) {
            return Err(NavError::Invalid(issues));
        }
        for issue in &issues {
            warn!(location = %issue.location, "{}", issue.kind);
        }

        let pages = flatten_all(&roots, mode);
        debug!(
            roots = roots.len(),
            pages = pages.len(),
            ?mode,
            "built navigation"
        );
        Ok(Self {
            roots,
            pages,
            warnings: issues,
        })
    }

    /// Build from the config's routes, or the built-in tree if it has none.
    pub fn from_config(config: &NavConfig) -> Result<Self, NavError> {
        let roots = if config.routes.is_empty() {
            default_routes()
        } else {
            config.routes.clone()
        };
        Self::build(roots, config)
    }

    pub fn roots(&self) -> &[RouteNode] {
        &self.roots
    }

    /// Flattened pages in sidebar order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn warnings(&self) -> &[Issue] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
