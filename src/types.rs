//! Shared types for the route tree and the flattened page list.
//!
//! `RouteNode` is the authored input; `Page` is what the sidebar consumes.
//! Both serialize with serde so trees can live in `nav.toml` and page lists
//! can be emitted as JSON.

use serde::{Deserialize, Serialize};

/// One node of the hand-authored navigation tree.
///
/// `href` is relative to the parent node. A node with `no_link` set is a
/// grouping header: it is never emitted as a page, but its children are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteNode {
    /// Display label in the sidebar
    pub title: String,
    /// Path segment appended to the parent's resolved href
    pub href: String,
    /// Grouping header, not a navigable page
    #[serde(
        default,
        rename = "noLink",
        alias = "no_link",
        skip_serializing_if = "is_false"
    )]
    pub no_link: bool,
    /// Children in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<RouteNode>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl RouteNode {
    /// A navigable leaf.
    pub fn page(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            no_link: false,
            items: Vec::new(),
        }
    }

    /// A navigable node with children.
    pub fn section(
        title: impl Into<String>,
        href: impl Into<String>,
        items: Vec<RouteNode>,
    ) -> Self {
        Self {
            items,
            ..Self::page(title, href)
        }
    }

    /// A grouping header whose children share its href prefix.
    pub fn group(title: impl Into<String>, href: impl Into<String>, items: Vec<RouteNode>) -> Self {
        Self {
            no_link: true,
            items,
            ..Self::page(title, href)
        }
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.items.iter().map(RouteNode::node_count).sum::<usize>()
    }

    /// Number of nodes in this subtree that produce a page.
    pub fn navigable_count(&self) -> usize {
        let own = usize::from(!self.no_link);
        own + self
            .items
            .iter()
            .map(RouteNode::navigable_count)
            .sum::<usize>()
    }
}

/// A flattened, directly navigable sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Page {
    pub title: String,
    /// Absolute href, resolved from every ancestor segment
    pub href: String,
}

impl Page {
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_no_link() {
        let json = r#"{"title":"Dashboard App","href":"/dashboard-app","noLink":true}"#;
        let node: RouteNode = serde_json::from_str(json).unwrap();
        assert!(node.no_link);
        assert!(node.items.is_empty());
    }

    #[test]
    fn accepts_snake_case_alias() {
        let node: RouteNode = toml::from_str(
            r#"
title = "Group"
href = "/group"
no_link = true
"#,
        )
        .unwrap();
        assert!(node.no_link);
    }

    #[test]
    fn defaults_omitted_on_output() {
        let json = serde_json::to_string(&RouteNode::page("Intro", "/intro")).unwrap();
        assert_eq!(json, r#"{"title":"Intro","href":"/intro"}"#);
    }

    #[test]
    fn unknown_key_rejected() {
        let result: Result<RouteNode, _> =
            serde_json::from_str(r#"{"title":"A","href":"/a","link":false}"#);
        assert!(result.is_err());
    }

    #[test]
    fn missing_href_rejected() {
        let result: Result<RouteNode, _> = serde_json::from_str(r#"{"title":"A"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn counts_nodes_and_navigable_nodes() {
        let tree = RouteNode::group(
            "Dashboard App",
            "/dashboard-app",
            vec![RouteNode::section(
                "Port Notes",
                "/port-notes",
                vec![RouteNode::page("Routing", "/routing")],
            )],
        );
        assert_eq!(tree.node_count(), 3);
        assert_eq!(tree.navigable_count(), 2);
    }
}
