//! Flattening laws checked through the public API.
//!
//! Covers the worked scenarios from the docs sidebar plus the ordering,
//! exclusion, href and count laws over a handful of hand-built trees.

use docs_nav::config::NavConfig;
use docs_nav::flatten::{flatten, flatten_all};
use docs_nav::href::HrefMode;
use docs_nav::navigation::Navigation;
use docs_nav::routes::default_routes;
use docs_nav::types::{Page, RouteNode};
use pretty_assertions::assert_eq;

// ===========================================================================
// Fixture trees
// ===========================================================================

fn sample_trees() -> Vec<Vec<RouteNode>> {
    vec![
        default_routes(),
        vec![RouteNode::page("Introduction", "/introduction")],
        vec![RouteNode::group(
            "A",
            "/a",
            vec![
                RouteNode::group(
                    "B",
                    "/b",
                    vec![
                        RouteNode::page("C", "/c"),
                        RouteNode::section("D", "/d", vec![RouteNode::page("E", "/e")]),
                    ],
                ),
                RouteNode::page("F", "/f"),
            ],
        )],
        vec![
            RouteNode::section(
                "One",
                "/one",
                vec![
                    RouteNode::section(
                        "Two",
                        "/two",
                        vec![RouteNode::section(
                            "Three",
                            "/three",
                            vec![RouteNode::page("Four", "/four")],
                        )],
                    ),
                    RouteNode::page("Five", "/five"),
                ],
            ),
            RouteNode::group("Six", "/six", vec![RouteNode::page("Seven", "/seven")]),
            RouteNode::page("Eight", "/eight"),
        ],
    ]
}

/// Every node in pre-order with its resolved href and group flag.
fn preorder(roots: &[RouteNode]) -> Vec<(String, String, bool)> {
    fn walk(node: &RouteNode, resolved: String, out: &mut Vec<(String, String, bool)>) {
        out.push((node.title.clone(), resolved.clone(), node.no_link));
        for child in &node.items {
            walk(child, format!("{resolved}{}", child.href), out);
        }
    }
    let mut out = Vec::new();
    for root in roots {
        walk(root, root.href.clone(), &mut out);
    }
    out
}

// ===========================================================================
// Scenarios
// ===========================================================================

#[test]
fn scenario_group_root_with_nested_section() {
    let root = RouteNode::group(
        "Dashboard App",
        "/dashboard-app",
        vec![RouteNode::section(
            "Port Notes",
            "/port-notes",
            vec![RouteNode::page("Routing", "/routing")],
        )],
    );
    assert_eq!(
        flatten_all(&[root], HrefMode::Concat),
        vec![
            Page::new("Port Notes", "/dashboard-app/port-notes"),
            Page::new("Routing", "/dashboard-app/port-notes/routing"),
        ]
    );
}

#[test]
fn scenario_single_leaf() {
    let leaf = RouteNode::page("Introduction", "/introduction");
    assert_eq!(
        flatten(&leaf, HrefMode::Concat),
        vec![Page::new("Introduction", "/introduction")]
    );
}

#[test]
fn scenario_childless_group_flattens_to_nothing() {
    let dead = RouteNode::group("Empty", "/empty", vec![]);
    assert!(flatten(&dead, HrefMode::Concat).is_empty());
    assert!(flatten(&dead, HrefMode::Normalize).is_empty());
}

#[test]
fn scenario_components_under_getting_started() {
    let components = RouteNode::section(
        "Components",
        "/components",
        vec![
            RouteNode::page("Stepper", "/stepper"),
            RouteNode::page("Tabs", "/tabs"),
        ],
    );
    // Resolve the node's href as its parent would, then flatten it.
    let resolved = RouteNode {
        href: format!("/getting-started{}", components.href),
        ..components
    };
    assert_eq!(
        flatten(&resolved, HrefMode::Concat),
        vec![
            Page::new("Components", "/getting-started/components"),
            Page::new("Stepper", "/getting-started/components/stepper"),
            Page::new("Tabs", "/getting-started/components/tabs"),
        ]
    );
}

// ===========================================================================
// Laws
// ===========================================================================

#[test]
fn output_is_preorder_of_navigable_nodes() {
    for roots in sample_trees() {
        let expected: Vec<Page> = preorder(&roots)
            .into_iter()
            .filter(|(_, _, group)| !group)
            .map(|(title, href, _)| Page::new(title, href))
            .collect();
        assert_eq!(flatten_all(&roots, HrefMode::Concat), expected);
    }
}

#[test]
fn group_nodes_never_appear() {
    for roots in sample_trees() {
        let pages = flatten_all(&roots, HrefMode::Concat);
        for (title, href, group) in preorder(&roots) {
            if group {
                assert!(
                    !pages.iter().any(|p| p.title == title && p.href == href),
                    "group '{title}' at {href} was emitted"
                );
            }
        }
    }
}

#[test]
fn child_href_is_parent_href_plus_segment() {
    fn check(node: &RouteNode, resolved: &str, pages: &[Page]) {
        for child in &node.items {
            let child_href = format!("{resolved}{}", child.href);
            if !child.no_link {
                assert!(
                    pages.iter().any(|p| p.title == child.title && p.href == child_href),
                    "missing {} at {child_href}",
                    child.title
                );
            }
            check(child, &child_href, pages);
        }
    }
    for roots in sample_trees() {
        let pages = flatten_all(&roots, HrefMode::Concat);
        for root in &roots {
            check(root, &root.href, &pages);
        }
    }
}

#[test]
fn page_count_equals_navigable_node_count() {
    for roots in sample_trees() {
        let navigable: usize = roots.iter().map(RouteNode::navigable_count).sum();
        assert_eq!(flatten_all(&roots, HrefMode::Normalize).len(), navigable);
    }
}

#[test]
fn flattening_is_deterministic() {
    for roots in sample_trees() {
        for mode in [HrefMode::Concat, HrefMode::Normalize] {
            assert_eq!(flatten_all(&roots, mode), flatten_all(&roots, mode));
        }
    }
}

#[test]
fn input_tree_is_not_modified() {
    let roots = default_routes();
    let before = roots.clone();
    let _ = flatten_all(&roots, HrefMode::Normalize);
    assert_eq!(roots, before);
}

// ===========================================================================
// Navigation
// ===========================================================================

#[test]
fn navigation_pages_match_flatten_all() {
    let nav = Navigation::from_config(&NavConfig::default()).unwrap();
    assert_eq!(
        nav.pages(),
        flatten_all(&default_routes(), HrefMode::Normalize).as_slice()
    );
}

#[test]
fn navigation_serializes_pages_as_title_href_json() {
    let config = NavConfig {
        routes: vec![RouteNode::page("Introduction", "/introduction")],
        ..NavConfig::default()
    };
    let nav = Navigation::from_config(&config).unwrap();
    let json = serde_json::to_value(nav.pages()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "title": "Introduction", "href": "/introduction" }])
    );
}
