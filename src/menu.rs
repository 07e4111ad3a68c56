//! Visible-menu projection and active-state detection.
//!
//! [`project_visible_menu`] prunes the menu tree for a role set, bottom-up:
//!
//! - an `item` survives iff its own roles admit the user
//! - a `collapse` survives if it is itself a visible target (roles pass
//!   *and* it has a path) or any of its projected children survived
//! - a `group` survives only if a child survived
//!
//! `disabled` never prunes. Order is preserved. The projection is cheap and
//! is recomputed on every role change; it is never cached.
//!
//! [`build_sidebar`] combines the projection with the current path and the
//! rendering layer's [`ChromeState`] into a ready-to-render tree.

use crate::breadcrumbs::{find_chain, LabelResolver};
use crate::node::{MenuNode, NodeKind};
use crate::role::{is_visible, RoleSet};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

// ============================================================================
// Projection
// ============================================================================

/// Prune the tree down to what `user_roles` may see.
///
/// # Example
///
/// ```
/// use teamflow_nav::{project_visible_menu, MenuNode, Role, RoleSet};
///
/// let menu = vec![MenuNode::collapse("admin", "Admin")
///     .roles([Role::Admin])
///     .child(MenuNode::item("audit", "Audit log", "/audit"))
///     .child(MenuNode::item("users", "Users", "/users").roles([Role::Admin]))];
///
/// let visible = project_visible_menu(&menu, &RoleSet::from([Role::Guest]));
/// assert_eq!(visible.len(), 1);
/// assert_eq!(visible[0].children.len(), 1);
/// assert_eq!(visible[0].children[0].id, "audit");
/// ```
pub fn project_visible_menu(tree: &[MenuNode], user_roles: &RoleSet) -> Vec<MenuNode> {
    tree.iter()
        .filter_map(|node| project_node(node, user_roles))
        .collect()
}

fn project_node(node: &MenuNode, user_roles: &RoleSet) -> Option<MenuNode> {
    let children = project_visible_menu(&node.children, user_roles);

    let survives = match node.kind {
        NodeKind::Item => is_visible(node, user_roles),
        NodeKind::Collapse => {
            (is_visible(node, user_roles) && node.is_navigable()) || !children.is_empty()
        }
        NodeKind::Group => !children.is_empty(),
    };

    survives.then(|| MenuNode {
        id: node.id.clone(),
        title: node.title.clone(),
        kind: node.kind,
        path: node.path.clone(),
        icon: node.icon.clone(),
        roles: node.roles.clone(),
        children,
        component: node.component.clone(),
        breadcrumbs: node.breadcrumbs,
        disabled: node.disabled,
    })
}

// ============================================================================
// Active detection
// ============================================================================

/// Return `true` if the node's own path is `current_path` or any descendant's is.
///
/// Parents are active for highlighting only. Nodes without a path are never
/// active on their own.
pub fn is_active(node: &MenuNode, current_path: &str) -> bool {
    node.path_str() == Some(current_path)
        || node
            .children
            .iter()
            .any(|child| is_active(child, current_path))
}

/// Root-to-node chain of the first node (document order) whose path is
/// `current_path`.
///
/// Used to mark exactly one branch active when two parents could both claim
/// a matching descendant.
pub fn active_trail<'a>(tree: &'a [MenuNode], current_path: &str) -> Vec<&'a MenuNode> {
    find_chain(current_path, tree, &[]).unwrap_or_default()
}

// ============================================================================
// Chrome state
// ============================================================================

/// Sidebar chrome state owned by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChromeState {
    /// Whether the sidebar drawer is open.
    pub drawer_open: bool,
    /// Ids of collapse nodes the user expanded.
    pub expanded: BTreeSet<String>,
}

impl Default for ChromeState {
    fn default() -> Self {
        Self {
            drawer_open: true,
            expanded: BTreeSet::new(),
        }
    }
}

impl ChromeState {
    /// Open drawer, nothing expanded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the drawer.
    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    /// Flip one node's expansion. Returns the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_string());
            true
        }
    }

    /// Set one node's expansion.
    pub fn set_expanded(&mut self, id: &str, expanded: bool) {
        if expanded {
            self.expanded.insert(id.to_string());
        } else {
            self.expanded.remove(id);
        }
    }

    /// Return `true` if the user expanded `id`.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }
}

// ============================================================================
// Sidebar model
// ============================================================================

/// Render-ready sidebar node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarEntry {
    /// Id of the source menu node.
    pub id: String,
    /// Resolved display title.
    pub title: String,
    /// Kind of the source node.
    pub kind: NodeKind,
    /// Link target, if the node is navigable.
    pub path: Option<String>,
    /// Opaque icon reference.
    pub icon: Option<String>,
    /// Shown but not clickable.
    pub disabled: bool,
    /// On the active trail.
    pub active: bool,
    /// Children shown. Always `false` for items.
    pub expanded: bool,
    /// Visible children, in menu order.
    pub children: Vec<SidebarEntry>,
}

/// Build the sidebar for a user, a path and the current chrome state.
///
/// Collapses on the active trail are expanded regardless of `chrome`.
pub fn build_sidebar<L>(
    tree: &[MenuNode],
    user_roles: &RoleSet,
    current_path: &str,
    chrome: &ChromeState,
    labels: &L,
) -> Vec<SidebarEntry>
where
    L: LabelResolver + ?Sized,
{
    let visible = project_visible_menu(tree, user_roles);
    let trail: HashSet<&str> = active_trail(&visible, current_path)
        .into_iter()
        .map(|node| node.id.as_str())
        .collect();

    sidebar_entries(&visible, &trail, chrome, labels)
}

fn sidebar_entries<L>(
    nodes: &[MenuNode],
    trail: &HashSet<&str>,
    chrome: &ChromeState,
    labels: &L,
) -> Vec<SidebarEntry>
where
    L: LabelResolver + ?Sized,
{
    nodes
        .iter()
        .map(|node| {
            let active = trail.contains(node.id.as_str());
            let expanded = node.kind != NodeKind::Item && (active || chrome.is_expanded(&node.id));
            SidebarEntry {
                id: node.id.clone(),
                title: labels.resolve(&node.title),
                kind: node.kind,
                path: node.path.clone(),
                icon: node.icon.clone(),
                disabled: node.disabled,
                active,
                expanded,
                children: sidebar_entries(&node.children, trail, chrome, labels),
            }
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
