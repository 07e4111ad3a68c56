//! # teamflow-nav
//!
//! Role-based navigation engine for the TeamFlow dashboard.
//!
//! One static menu definition drives every navigation surface of the app:
//!
//! - **Visible menu**: the tree pruned to what the current user's roles allow
//! - **Route table**: one binding per navigable node, guarded when the node is restricted
//! - **Breadcrumbs**: the trail from the home entry to the current page
//! - **Sidebar**: render-ready entries with active and expanded flags
//!
//! Rendering, translation and auth are collaborators. The engine produces
//! plain data; the caller draws it.
//!
//! # Quick start
//!
//! ```
//! use teamflow_nav::breadcrumbs::Literal;
//! use teamflow_nav::{MenuConfig, MenuNode, Navigator, NavigatorSettings, Role, RoleSet};
//!
//! let config = MenuConfig::new(
//!     NavigatorSettings::default(),
//!     vec![
//!         MenuNode::item("dashboard", "Dashboard", "/dashboard").component("Dashboard"),
//!         MenuNode::collapse("tasks", "Tasks")
//!             .child(MenuNode::item("tasks-table", "Table", "/tasks/table").component("TasksTable"))
//!             .child(MenuNode::item("tasks-board", "Board", "/tasks/board").component("TasksBoard")),
//!     ],
//!     vec![MenuNode::item("profile", "Profile", "/profile").component("Profile")],
//! );
//!
//! let mut nav = Navigator::new(config).unwrap();
//! nav.set_roles(RoleSet::from([Role::Employee]));
//! nav.set_loading(false);
//! nav.navigate("/tasks/board");
//!
//! let trail: Vec<String> = nav.breadcrumbs(&Literal).into_iter().map(|e| e.title).collect();
//! assert_eq!(trail, vec!["TeamFlow", "Tasks", "Board"]);
//! assert!(nav.current_page().is_render());
//! ```
//!
//! # Feature flags
//!
//! | Feature   | Default | Description |
//! |-----------|---------|-------------|
//! | `log`     | yes     | Logging through the `log` crate |
//! | `tracing` | no      | Logging through the `tracing` crate (exclusive with `log`) |
//! | `cache`   | yes     | LRU cache for route lookups |

#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod logging;

pub mod breadcrumbs;
#[cfg(feature = "cache")]
#[cfg_attr(docsrs, doc(cfg(feature = "cache")))]
pub mod cache;
pub mod config;
pub mod error;
pub mod guard;
pub mod matching;
pub mod menu;
pub mod navigator;
pub mod node;
pub mod params;
pub mod path;
pub mod role;
pub mod routes;

pub use breadcrumbs::{resolve_breadcrumbs, BreadcrumbEntry, LabelResolver};
pub use config::{MenuConfig, NavigatorSettings};
pub use error::ConfigError;
pub use guard::{
    guard, AccessState, AuthState, GuardDecision, RoleGuard, RouteGuard, NOT_ACCESS_ROUTE,
};
pub use menu::{
    active_trail, build_sidebar, is_active, project_visible_menu, ChromeState, SidebarEntry,
};
pub use navigator::{Navigator, PageDecision, RouteChange};
pub use node::{walk_forest, ComponentRef, MenuNode, NodeKind};
pub use params::RouteParams;
pub use path::normalize_path;
pub use role::{is_visible, Role, RoleSet, UnknownRoleError};
pub use routes::{build_route_table, RouteBinding, RouteComponent, RouteTable};
