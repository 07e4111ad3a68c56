//! Configuration errors.
//!
//! The navigation derivations never fail once the menu configuration has
//! been accepted: breadcrumb misses fall back to a heuristic label, denied
//! access becomes a redirect, and an unresolved auth state renders nothing.
//! The only errors are programmer mistakes in the static configuration,
//! surfaced when the configuration is loaded or the route table is built.
//!
//! # Examples
//!
//! ```
//! use teamflow_nav::{build_route_table, ConfigError, MenuNode, NavigatorSettings};
//!
//! let menu = vec![
//!     MenuNode::item("table", "Table", "/tasks/table").component("TasksTable"),
//!     MenuNode::item("table-copy", "Table", "/tasks/table").component("TasksTable"),
//! ];
//!
//! let err = build_route_table(&menu, &[], &NavigatorSettings::default()).unwrap_err();
//! assert!(matches!(err, ConfigError::DuplicatePath { .. }));
//! ```

use crate::role::UnknownRoleError;

// ============================================================================
// ConfigError
// ============================================================================

/// A defect in the static menu configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Two nodes resolve to the same canonical path.
    #[error("duplicate path '{path}' on nodes '{first}' and '{second}'")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },

    /// Two nodes share the same id.
    #[error("duplicate node id '{id}'")]
    DuplicateId { id: String },

    /// A node has an empty id.
    #[error("node titled '{title}' has an empty id")]
    EmptyId { title: String },

    /// An `item` has no path and is not a label inside a `group`.
    #[error("item '{id}' has no path and is not inside a group")]
    MissingPath { id: String },

    /// A `group` carries a path. Groups are labels and never routes.
    #[error("group '{id}' has path '{path}'; groups cannot be routes")]
    GroupWithPath { id: String, path: String },

    /// A role name in the configuration does not name a known role.
    #[error("node '{id}': {source}")]
    UnknownRole {
        id: String,
        #[source]
        source: UnknownRoleError,
    },

    /// A node kind in the configuration is not `item`, `collapse` or `group`.
    #[error("node '{id}' has unknown kind '{kind}'")]
    UnknownKind { id: String, kind: String },

    /// The configuration document could not be parsed.
    #[error("invalid menu configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("failed to read menu configuration: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Id of the offending node, when the error concerns a single node.
    pub fn node_id(&self) -> Option<&str> {
        match self {
            ConfigError::DuplicatePath { second, .. } => Some(second),
            ConfigError::DuplicateId { id }
            | ConfigError::MissingPath { id }
            | ConfigError::GroupWithPath { id, .. }
            | ConfigError::UnknownRole { id, .. }
            | ConfigError::UnknownKind { id, .. } => Some(id),
            ConfigError::EmptyId { .. } | ConfigError::Parse(_) | ConfigError::Io(_) => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
