//! The documentation site's own route tree.
//!
//! Used when `nav.toml` declares no `[[routes]]`. The tree is built by an
//! explicit call, not held in a global, so callers own the value they pass
//! to [`Navigation::build`](crate::navigation::Navigation::build).

use crate::types::RouteNode;

/// Build the default documentation tree.
///
/// ```text
/// Getting Started      /getting-started
/// ├── Introduction     /introduction
/// └── Components       /components
///     ├── Stepper      /stepper
///     └── Tabs         /tabs
/// Dashboard App        /dashboard-app   (group)
/// └── Port Notes       /port-notes
///     ├── Routing      /routing
///     ├── Data Fetching /data-fetching
///     └── Forms        /forms
/// ```
pub fn default_routes() -> Vec<RouteNode> {
    vec![
        RouteNode::section(
            "Getting Started",
            "/getting-started",
            vec![
                RouteNode::page("Introduction", "/introduction"),
                RouteNode::section(
                    "Components",
                    "/components",
                    vec![
                        RouteNode::page("Stepper", "/stepper"),
                        RouteNode::page("Tabs", "/tabs"),
                    ],
                ),
            ],
        ),
        RouteNode::group(
            "Dashboard App",
            "/dashboard-app",
            vec![RouteNode::section(
                "Port Notes",
                "/port-notes",
                vec![
                    RouteNode::page("Routing", "/routing"),
                    RouteNode::page("Data Fetching", "/data-fetching"),
                    RouteNode::page("Forms", "/forms"),
                ],
            )],
        ),
    ]
}
