//! The canonical menu tree.
//!
//! A [`MenuNode`] describes one navigable unit of the sidebar: a leaf
//! [`item`](NodeKind::Item), a [`collapse`](NodeKind::Collapse) parent that
//! shows and hides its children as a unit, or a purely organisational
//! [`group`](NodeKind::Group) label.
//!
//! Nodes are built either from configuration (see [`config`](crate::config))
//! or directly with the builder methods:
//!
//! ```
//! use teamflow_nav::{MenuNode, Role};
//!
//! let tasks = MenuNode::collapse("tasks", "menu.tasks")
//!     .child(MenuNode::item("tasks-table", "menu.tasks.table", "/tasks/table").component("TasksTable"))
//!     .child(MenuNode::item("tasks-board", "menu.tasks.board", "/tasks/board").component("TasksBoard"));
//!
//! let admin = MenuNode::item("users", "menu.users", "/users")
//!     .component("UsersTable")
//!     .roles([Role::Admin]);
//!
//! assert_eq!(tasks.children.len(), 2);
//! assert!(admin.is_navigable());
//! ```

use crate::path::canonical_path;
use crate::role::{Role, RoleSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a menu node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Leaf with a navigable path.
    Item,
    /// Parent without a path of its own whose children expand as a unit.
    Collapse,
    /// Organisational label. Never a route or breadcrumb entry.
    Group,
}

impl NodeKind {
    /// Lowercase name as used in configuration.
    pub const fn as_str(self) -> &'static str {
        match self {
            NodeKind::Item => "item",
            NodeKind::Collapse => "collapse",
            NodeKind::Group => "group",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque reference to the page rendered when a node's path is visited.
///
/// The engine never interprets it; the router collaborator maps it to a
/// concrete page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentRef(String);

impl ComponentRef {
    /// Create a component reference from its name.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().to_string())
    }

    /// The referenced page name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry in the static navigation tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuNode {
    /// Unique across the whole tree and the hidden-routes list.
    pub id: String,
    /// Literal label or translation key, resolved by the caller.
    pub title: String,
    /// Node kind.
    pub kind: NodeKind,
    /// Canonical path (leading `/`, no trailing `/`). `None` means not navigable.
    pub path: Option<String>,
    /// Opaque decoration reference.
    pub icon: Option<String>,
    /// Roles allowed to see the node (any-of). Empty means everyone.
    pub roles: RoleSet,
    /// Ordered children.
    pub children: Vec<MenuNode>,
    /// Page bound to `path`.
    pub component: Option<ComponentRef>,
    /// When `false` the node is skipped in breadcrumb trails.
    pub breadcrumbs: bool,
    /// Disables interaction. Has no effect on visibility or routing.
    pub disabled: bool,
}

impl MenuNode {
    fn bare(id: impl Into<String>, title: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            path: None,
            icon: None,
            roles: RoleSet::new(),
            children: Vec::new(),
            component: None,
            breadcrumbs: true,
            disabled: false,
        }
    }

    /// Create a navigable item. The path is canonicalised; an empty path
    /// leaves the item without a route.
    pub fn item(id: impl Into<String>, title: impl Into<String>, path: impl AsRef<str>) -> Self {
        Self::bare(id, title, NodeKind::Item).path(path)
    }

    /// Create a collapse parent.
    pub fn collapse(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::bare(id, title, NodeKind::Collapse)
    }

    /// Create a group label.
    pub fn group(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::bare(id, title, NodeKind::Group)
    }

    /// Set (or clear, with `""`) the node's path.
    pub fn path(mut self, path: impl AsRef<str>) -> Self {
        self.path = canonical_path(path.as_ref());
        self
    }

    /// Bind a page to the node.
    pub fn component(mut self, component: impl AsRef<str>) -> Self {
        self.component = Some(ComponentRef::new(component));
        self
    }

    /// Set the decoration reference.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Restrict the node to the given roles.
    pub fn roles<I: IntoIterator<Item = Role>>(mut self, roles: I) -> Self {
        self.roles = roles.into_iter().collect();
        self
    }

    /// Append a child.
    pub fn child(mut self, child: MenuNode) -> Self {
        self.children.push(child);
        self
    }

    /// Replace the children.
    pub fn children(mut self, children: Vec<MenuNode>) -> Self {
        self.children = children;
        self
    }

    /// Include or skip this node in breadcrumb trails.
    pub fn breadcrumbs(mut self, show: bool) -> Self {
        self.breadcrumbs = show;
        self
    }

    /// Mark the node as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// The canonical path, if the node has one.
    pub fn path_str(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Return `true` if the node has a non-empty path.
    pub fn is_navigable(&self) -> bool {
        self.path.is_some()
    }
}

/// Iterator returned by [`walk_forest`].
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<&'a MenuNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a MenuNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Depth-first, parent-first iterator over a list of root nodes, in
/// configuration order.
pub fn walk_forest(roots: &[MenuNode]) -> Walk<'_> {
    Walk {
        stack: roots.iter().rev().collect(),
    }
}
