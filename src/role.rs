//! Roles and the visibility evaluator.
//!
//! A [`Role`] is a closed enumeration of the permission classes a TeamFlow
//! account can hold. Menu nodes and route bindings carry a [`RoleSet`] of
//! roles that may see them, interpreted as **any-of**: a user needs at least
//! one of the listed roles. An empty set means "every authenticated user".
//!
//! # Example
//!
//! ```
//! use teamflow_nav::{Role, RoleSet};
//!
//! let required = RoleSet::from([Role::Admin, Role::Manager]);
//! let user = RoleSet::from([Role::Manager]);
//!
//! assert!(required.permits(&user));
//! assert!(!required.permits(&RoleSet::from([Role::Guest])));
//! assert!(RoleSet::new().permits(&RoleSet::new()));
//! ```

use crate::node::MenuNode;
use crate::warn_log;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Permission class held by a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// Team and declaration management.
    Manager,
    /// Regular staff account.
    Employee,
    /// Read-mostly visitor account.
    Guest,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 4] = [Role::Admin, Role::Manager, Role::Employee, Role::Guest];

    /// Stable lowercase identifier used in configuration and auth payloads.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Employee => "employee",
            Role::Guest => "guest",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known [`Role`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{0}'")]
pub struct UnknownRoleError(pub String);

impl FromStr for Role {
    type Err = UnknownRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownRoleError(s.to_string()))
    }
}

/// Ordered set of roles.
///
/// Used both for the roles a node requires and for the roles the current
/// user holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet {
    roles: BTreeSet<Role>,
}

impl RoleSet {
    /// Create an empty role set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a role set from names supplied by the authentication collaborator.
    ///
    /// Unknown names are dropped with a warning. Dropping can only ever
    /// remove access, never grant it.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for name in names {
            match name.as_ref().parse::<Role>() {
                Ok(role) => {
                    set.insert(role);
                }
                Err(err) => {
                    warn_log!("Ignoring user role: {}", err);
                }
            }
        }
        set
    }

    /// Insert a role. Returns `true` if it was not already present.
    pub fn insert(&mut self, role: Role) -> bool {
        self.roles.insert(role)
    }

    /// Return `true` if the set holds `role`.
    pub fn contains(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Return `true` if the set holds no roles.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Number of roles in the set.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Iterate over roles in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.roles.iter().copied()
    }

    /// Return `true` if the two sets share at least one role.
    pub fn intersects(&self, other: &RoleSet) -> bool {
        self.roles.iter().any(|role| other.roles.contains(role))
    }

    /// Any-of check: treat `self` as a requirement and `user` as the held roles.
    ///
    /// An empty requirement permits everyone, including a user with no roles.
    pub fn permits(&self, user: &RoleSet) -> bool {
        self.is_empty() || self.intersects(user)
    }
}

impl<const N: usize> From<[Role; N]> for RoleSet {
    fn from(roles: [Role; N]) -> Self {
        roles.into_iter().collect()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<T: IntoIterator<Item = Role>>(iter: T) -> Self {
        Self {
            roles: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(Role::as_str).collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

/// Decide whether a single node is visible to a user.
///
/// Only the node's own `roles` are consulted; subtree propagation is done by
/// [`project_visible_menu`](crate::menu::project_visible_menu).
pub fn is_visible(node: &MenuNode, user_roles: &RoleSet) -> bool {
    node.roles.permits(user_roles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_is_case_insensitive() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!(" Manager ".parse::<Role>(), Ok(Role::Manager));
        assert_eq!(
            "root".parse::<Role>(),
            Err(UnknownRoleError("root".to_string()))
        );
    }

    #[test]
    fn test_from_names_drops_unknown() {
        let set = RoleSet::from_names(["guest", "superuser"]);
        assert_eq!(set, RoleSet::from([Role::Guest]));
    }

    #[test]
    fn test_any_of_semantics() {
        let required = RoleSet::from([Role::Admin, Role::Manager]);
        assert!(required.permits(&RoleSet::from([Role::Manager])));
        assert!(required.permits(&RoleSet::from([Role::Guest, Role::Admin])));
        assert!(!required.permits(&RoleSet::from([Role::Guest])));
        assert!(!required.permits(&RoleSet::new()));
    }

    #[test]
    fn test_empty_requirement_permits_everyone() {
        assert!(RoleSet::new().permits(&RoleSet::new()));
        assert!(RoleSet::new().permits(&RoleSet::from([Role::Guest])));
    }

    #[test]
    fn test_is_visible_uses_only_own_roles() {
        let node = MenuNode::collapse("admin-tools", "Admin")
            .roles([Role::Admin])
            .child(MenuNode::item("users", "Users", "/users"));

        assert!(!is_visible(&node, &RoleSet::from([Role::Guest])));
        assert!(is_visible(&node.children[0], &RoleSet::from([Role::Guest])));
    }

    #[test]
    fn test_display() {
        let set = RoleSet::from([Role::Guest, Role::Admin]);
        assert_eq!(set.to_string(), "{admin, guest}");
    }
}
