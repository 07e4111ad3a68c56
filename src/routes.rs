//! Route table derivation.
//!
//! The menu tree and the hidden-routes list are flattened into an ordered
//! [`RouteTable`] of [`RouteBinding`]s that the router collaborator mounts.
//!
//! # Derivation rules
//!
//! - Depth-first, parents before children, in configuration order; hidden
//!   routes are appended after the main tree.
//! - Only nodes with both a path and a component become bindings.
//!   `collapse` and `group` nodes without a path are skipped but their
//!   children are still visited.
//! - Bindings with required roles carry a [`RoleGuard`]; the rest are mounted
//!   unwrapped.
//! - The index redirect (`"/"` → settings' default route) is kept apart from
//!   the bindings and always wins at the router root.
//!
//! Construction validates the configuration and fails fast on duplicate
//! paths or ids and on path-less items outside a group.
//!
//! # Example
//!
//! ```
//! use teamflow_nav::{build_route_table, MenuNode, NavigatorSettings, Role};
//!
//! let menu = vec![
//!     MenuNode::item("dashboard", "Dashboard", "/dashboard").component("Dashboard"),
//!     MenuNode::item("users", "Users", "/users").component("Users").roles([Role::Admin]),
//! ];
//! let hidden = vec![MenuNode::item("profile", "Profile", "/profile").component("Profile")];
//!
//! let table = build_route_table(&menu, &hidden, &NavigatorSettings::default()).unwrap();
//! let paths: Vec<&str> = table.iter().map(|b| b.path.as_str()).collect();
//! assert_eq!(paths, vec!["/dashboard", "/users", "/profile"]);
//! assert!(table.get("/users").unwrap().component.is_guarded());
//! ```

use crate::config::NavigatorSettings;
use crate::error::ConfigError;
use crate::guard::{AuthState, GuardDecision, RoleGuard, RouteGuard};
use crate::matching::{is_dynamic, match_pattern};
use crate::node::{walk_forest, ComponentRef, MenuNode, NodeKind};
use crate::params::RouteParams;
use crate::path::relative_mount_path;
use crate::role::RoleSet;
use crate::{debug_log, error_log, trace_log, warn_log};
use std::collections::{HashMap, HashSet};

// ============================================================================
// Bindings
// ============================================================================

/// Page registered for a binding, wrapped by a guard when roles are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteComponent {
    /// Page mounted as-is.
    Page(ComponentRef),
    /// Page mounted behind a role guard.
    Guarded {
        page: ComponentRef,
        guard: RoleGuard,
    },
}

impl RouteComponent {
    /// The underlying page.
    pub fn page(&self) -> &ComponentRef {
        match self {
            RouteComponent::Page(page) | RouteComponent::Guarded { page, .. } => page,
        }
    }

    /// The wrapping guard, if any.
    pub fn guard(&self) -> Option<&RoleGuard> {
        match self {
            RouteComponent::Page(_) => None,
            RouteComponent::Guarded { guard, .. } => Some(guard),
        }
    }

    /// Return `true` if the page is wrapped by a guard.
    pub fn is_guarded(&self) -> bool {
        matches!(self, RouteComponent::Guarded { .. })
    }
}

/// One path → page → required-roles binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteBinding {
    /// Id of the node the binding was derived from.
    pub node_id: String,
    /// Canonical path, with leading `/`.
    pub path: String,
    /// Page to mount.
    pub component: RouteComponent,
    /// Roles required to view the page (any-of). Empty means everyone.
    pub required_roles: RoleSet,
    /// `true` when the binding came from the hidden-routes list.
    pub hidden: bool,
}

impl RouteBinding {
    fn from_node(
        node: &MenuNode,
        path: &str,
        page: &ComponentRef,
        hidden: bool,
        settings: &NavigatorSettings,
    ) -> Self {
        let component = if node.roles.is_empty() {
            RouteComponent::Page(page.clone())
        } else {
            RouteComponent::Guarded {
                page: page.clone(),
                guard: RoleGuard::new(node.roles.clone())
                    .with_redirect(settings.not_access_route.clone()),
            }
        };

        Self {
            node_id: node.id.clone(),
            path: path.to_string(),
            component,
            required_roles: node.roles.clone(),
            hidden,
        }
    }

    /// Path as mounted by a relative router (leading `/` stripped).
    pub fn mount_path(&self) -> &str {
        relative_mount_path(&self.path)
    }

    /// Evaluate the binding's guard. Unguarded pages always render.
    pub fn check(&self, auth: &AuthState) -> GuardDecision {
        match self.component.guard() {
            Some(guard) => guard.check(auth),
            None => GuardDecision::Render,
        }
    }
}

/// Redirect mounted at the router root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRedirect {
    /// Redirect target, e.g. `/dashboard`.
    pub to: String,
}

/// Result of [`RouteTable::find`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch {
    /// The path is the router root.
    Index,
    /// The binding at `position` matched, capturing `params`.
    Binding {
        position: usize,
        params: RouteParams,
    },
}

// ============================================================================
// RouteTable
// ============================================================================

/// Ordered, validated set of route bindings.
#[derive(Debug, Clone)]
pub struct RouteTable {
    index: IndexRedirect,
    bindings: Vec<RouteBinding>,
    by_path: HashMap<String, usize>,
}

impl RouteTable {
    /// The root redirect.
    pub fn index(&self) -> &IndexRedirect {
        &self.index
    }

    /// All bindings, in derivation order.
    pub fn bindings(&self) -> &[RouteBinding] {
        &self.bindings
    }

    /// Iterate over bindings in derivation order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteBinding> {
        self.bindings.iter()
    }

    /// Number of bindings, not counting the index redirect.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Return `true` if there are no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Binding with exactly this canonical path.
    pub fn get(&self, path: &str) -> Option<&RouteBinding> {
        self.by_path.get(path).map(|&i| &self.bindings[i])
    }

    /// Binding at a position returned by [`find`](Self::find).
    pub fn binding(&self, position: usize) -> Option<&RouteBinding> {
        self.bindings.get(position)
    }

    /// Find what to mount for a canonical path.
    ///
    /// The root goes to the index redirect, then exact paths, then the first
    /// `:param` pattern in table order.
    pub fn find(&self, path: &str) -> Option<RouteMatch> {
        if path.is_empty() || path == "/" {
            return Some(RouteMatch::Index);
        }

        if let Some(&position) = self.by_path.get(path) {
            return Some(RouteMatch::Binding {
                position,
                params: RouteParams::new(),
            });
        }

        let found = self
            .bindings
            .iter()
            .enumerate()
            .filter(|(_, binding)| is_dynamic(&binding.path))
            .find_map(|(position, binding)| {
                match_pattern(path, &binding.path)
                    .map(|params| RouteMatch::Binding { position, params })
            });

        if found.is_none() {
            trace_log!("No route binding for path '{}'", path);
        }
        found
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Check the static configuration for programmer errors.
///
/// - every node has a non-empty id, unique across tree and hidden routes
/// - every canonical path appears on at most one node
/// - every `item` has a path unless its direct parent is a `group`
/// - no `group` has a path
pub fn validate_menu(menu: &[MenuNode], hidden: &[MenuNode]) -> Result<(), ConfigError> {
    let mut ids: HashSet<&str> = HashSet::new();
    let mut paths: HashMap<&str, &str> = HashMap::new();

    for roots in [menu, hidden] {
        for root in roots {
            if let Err(err) = validate_node(root, None, &mut ids, &mut paths) {
                error_log!("Menu configuration rejected: {}", err);
                return Err(err);
            }
        }
    }

    Ok(())
}

fn validate_node<'a>(
    node: &'a MenuNode,
    parent: Option<NodeKind>,
    ids: &mut HashSet<&'a str>,
    paths: &mut HashMap<&'a str, &'a str>,
) -> Result<(), ConfigError> {
    if node.id.trim().is_empty() {
        return Err(ConfigError::EmptyId {
            title: node.title.clone(),
        });
    }
    if !ids.insert(node.id.as_str()) {
        return Err(ConfigError::DuplicateId {
            id: node.id.clone(),
        });
    }

    match node.path_str() {
        Some(path) if node.kind == NodeKind::Group => {
            return Err(ConfigError::GroupWithPath {
                id: node.id.clone(),
                path: path.to_string(),
            });
        }
        Some(path) => {
            if let Some(first) = paths.insert(path, node.id.as_str()) {
                return Err(ConfigError::DuplicatePath {
                    path: path.to_string(),
                    first: first.to_string(),
                    second: node.id.clone(),
                });
            }
        }
        None if node.kind == NodeKind::Item && parent != Some(NodeKind::Group) => {
            return Err(ConfigError::MissingPath {
                id: node.id.clone(),
            });
        }
        None => {}
    }

    for child in &node.children {
        validate_node(child, Some(node.kind), ids, paths)?;
    }

    Ok(())
}

// ============================================================================
// Derivation
// ============================================================================

/// Build the route table from the menu tree and the hidden routes.
pub fn build_route_table(
    menu: &[MenuNode],
    hidden: &[MenuNode],
    settings: &NavigatorSettings,
) -> Result<RouteTable, ConfigError> {
    validate_menu(menu, hidden)?;

    let mut bindings = Vec::new();
    collect_bindings(menu, false, settings, &mut bindings);
    collect_bindings(hidden, true, settings, &mut bindings);

    let by_path = bindings
        .iter()
        .enumerate()
        .map(|(i, binding)| (binding.path.clone(), i))
        .collect();

    let guarded = bindings.iter().filter(|b| b.component.is_guarded()).count();
    debug_log!(
        "Route table built: {} bindings ({} guarded), index redirects to '{}'",
        bindings.len(),
        guarded,
        settings.default_route
    );

    Ok(RouteTable {
        index: IndexRedirect {
            to: settings.default_route.clone(),
        },
        bindings,
        by_path,
    })
}

fn collect_bindings(
    roots: &[MenuNode],
    hidden: bool,
    settings: &NavigatorSettings,
    out: &mut Vec<RouteBinding>,
) {
    for node in walk_forest(roots) {
        let Some(path) = node.path_str() else {
            continue;
        };

        if path == "/" {
            warn_log!(
                "Node '{}' is bound to '/', which is shadowed by the index redirect",
                node.id
            );
        }

        match &node.component {
            Some(page) => out.push(RouteBinding::from_node(node, path, page, hidden, settings)),
            None => {
                trace_log!(
                    "Node '{}' has path '{}' but no component; not routed",
                    node.id,
                    path
                );
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
