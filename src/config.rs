//! Menu configuration loading.
//!
//! Menu definitions have drifted over time and use several spellings for the
//! same field. The raw shape accepted here tolerates them and is converted
//! once, at load time, into canonical [`MenuNode`]s:
//!
//! | Canonical | Also accepted |
//! |-----------|---------------|
//! | `path` | `url`, `link` |
//! | `children` | `items` |
//! | `type` | `kind` |
//!
//! Role names must parse into [`Role`]; an unknown name is rejected rather
//! than dropped, since dropping it would make a restricted node public.
//!
//! # Example
//!
//! ```
//! use teamflow_nav::MenuConfig;
//!
//! let config = MenuConfig::from_json_str(r#"{
//!     "settings": { "app_name": "TeamFlow" },
//!     "menu": [
//!         { "id": "dashboard", "title": "menu.dashboard", "type": "item",
//!           "url": "/dashboard", "component": "Dashboard" },
//!         { "id": "tasks", "title": "menu.tasks", "type": "collapse", "items": [
//!             { "id": "tasks-table", "title": "menu.tasks.table", "type": "item",
//!               "link": "/tasks/table", "component": "TasksTable", "roles": ["manager"] }
//!         ]}
//!     ],
//!     "hidden_routes": [
//!         { "id": "profile", "title": "menu.profile", "url": "/profile", "component": "Profile" }
//!     ]
//! }"#).unwrap();
//!
//! assert_eq!(config.menu[1].children[0].path_str(), Some("/tasks/table"));
//! assert_eq!(config.hidden_routes[0].path_str(), Some("/profile"));
//! ```

use crate::error::ConfigError;
use crate::guard::NOT_ACCESS_ROUTE;
use crate::node::{ComponentRef, MenuNode, NodeKind};
use crate::path::canonical_path;
use crate::role::{Role, RoleSet};
use crate::routes::validate_menu;
use crate::{debug_log, info_log};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

// ============================================================================
// Settings
// ============================================================================

/// Application-level navigation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorSettings {
    /// Title of the synthetic home breadcrumb.
    pub app_name: String,
    /// Url of the synthetic home breadcrumb.
    pub home_url: String,
    /// Where the router root redirects to.
    pub default_route: String,
    /// Where denied users are sent.
    pub not_access_route: String,
    /// Breadcrumb label (or label key) used when `/` matches no node.
    pub root_fallback_label: String,
}

impl Default for NavigatorSettings {
    fn default() -> Self {
        Self {
            app_name: "TeamFlow".to_string(),
            home_url: "/".to_string(),
            default_route: "/dashboard".to_string(),
            not_access_route: NOT_ACCESS_ROUTE.to_string(),
            root_fallback_label: "Dashboard".to_string(),
        }
    }
}

// ============================================================================
// Raw shape
// ============================================================================

#[derive(Debug, Deserialize)]
struct RawMenuConfig {
    #[serde(default)]
    settings: NavigatorSettings,
    #[serde(default, alias = "items")]
    menu: Vec<RawMenuNode>,
    #[serde(default, alias = "hidden", alias = "hiddenRoutes")]
    hidden_routes: Vec<RawMenuNode>,
}

#[derive(Debug, Deserialize)]
struct RawMenuNode {
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default, rename = "type", alias = "kind")]
    kind: Option<String>,
    #[serde(default, alias = "url", alias = "link")]
    path: Option<String>,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    roles: Vec<String>,
    #[serde(default, alias = "items")]
    children: Vec<RawMenuNode>,
    #[serde(default, alias = "element")]
    component: Option<String>,
    #[serde(default)]
    breadcrumbs: Option<bool>,
    #[serde(default)]
    disabled: bool,
}

impl RawMenuNode {
    fn into_node(self) -> Result<MenuNode, ConfigError> {
        let kind = match self.kind.as_deref().map(str::trim) {
            None | Some("") | Some("item") => NodeKind::Item,
            Some("collapse") => NodeKind::Collapse,
            Some("group") => NodeKind::Group,
            Some(other) => {
                return Err(ConfigError::UnknownKind {
                    id: self.id,
                    kind: other.to_string(),
                })
            }
        };

        let mut roles = RoleSet::new();
        for name in &self.roles {
            let role = name
                .parse::<Role>()
                .map_err(|source| ConfigError::UnknownRole {
                    id: self.id.clone(),
                    source,
                })?;
            roles.insert(role);
        }

        let children = self
            .children
            .into_iter()
            .map(RawMenuNode::into_node)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MenuNode {
            id: self.id,
            title: self.title,
            kind,
            path: self.path.as_deref().and_then(canonical_path),
            icon: self.icon,
            roles,
            children,
            component: self.component.as_deref().map(ComponentRef::new),
            breadcrumbs: self.breadcrumbs.unwrap_or(true),
            disabled: self.disabled,
        })
    }
}

// ============================================================================
// MenuConfig
// ============================================================================

/// Static navigation configuration: settings, menu tree and hidden routes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuConfig {
    /// Application settings.
    pub settings: NavigatorSettings,
    /// Visible menu tree, in display order.
    pub menu: Vec<MenuNode>,
    /// Routable pages that never appear in the menu.
    pub hidden_routes: Vec<MenuNode>,
}

impl MenuConfig {
    /// Assemble a configuration from already-canonical nodes.
    pub fn new(
        settings: NavigatorSettings,
        menu: Vec<MenuNode>,
        hidden_routes: Vec<MenuNode>,
    ) -> Self {
        Self {
            settings,
            menu,
            hidden_routes,
        }
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: RawMenuConfig = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    /// Parse and validate a JSON document from a reader.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let raw: RawMenuConfig = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    /// Read, parse and validate a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        info_log!(
            "Loaded menu configuration from '{}' ({} top-level nodes, {} hidden routes)",
            path.display(),
            config.menu.len(),
            config.hidden_routes.len()
        );
        Ok(config)
    }

    fn from_raw(raw: RawMenuConfig) -> Result<Self, ConfigError> {
        let menu = raw
            .menu
            .into_iter()
            .map(RawMenuNode::into_node)
            .collect::<Result<Vec<_>, _>>()?;
        let hidden_routes = raw
            .hidden_routes
            .into_iter()
            .map(RawMenuNode::into_node)
            .collect::<Result<Vec<_>, _>>()?;

        let config = Self::new(raw.settings, menu, hidden_routes);
        config.validate()?;
        debug_log!(
            "Parsed menu configuration: {} top-level nodes, {} hidden routes",
            config.menu.len(),
            config.hidden_routes.len()
        );
        Ok(config)
    }

    /// Check ids, paths and item shapes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_menu(&self.menu, &self.hidden_routes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_normalize_to_one_shape() {
        let config = MenuConfig::from_json_str(
            r#"{
                "menu": [
                    { "id": "a", "title": "A", "path": "/a", "component": "A" },
                    { "id": "b", "title": "B", "url": "b/", "component": "B" },
                    { "id": "c", "title": "C", "kind": "collapse", "items": [
                        { "id": "c1", "title": "C1", "link": "/c/1", "element": "C1" }
                    ]}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.menu[0].path_str(), Some("/a"));
        assert_eq!(config.menu[1].path_str(), Some("/b"));
        assert_eq!(config.menu[2].kind, NodeKind::Collapse);
        assert_eq!(config.menu[2].children[0].path_str(), Some("/c/1"));
        assert_eq!(
            config.menu[2].children[0].component.as_ref().map(ComponentRef::name),
            Some("C1")
        );
        assert_eq!(config.settings, NavigatorSettings::default());
    }

    #[test]
    fn test_empty_path_is_absent() {
        let config = MenuConfig::from_json_str(
            r#"{ "menu": [ { "id": "g", "title": "G", "type": "group", "url": "", "children": [
                { "id": "label", "title": "Label", "url": "" }
            ] } ] }"#,
        )
        .unwrap();
        assert_eq!(config.menu[0].path, None);
        assert_eq!(config.menu[0].children[0].path, None);
    }

    #[test]
    fn test_defaults_for_optional_fields() {
        let config =
            MenuConfig::from_json_str(r#"{ "menu": [ { "id": "a", "title": "A", "url": "/a" } ] }"#)
                .unwrap();
        let node = &config.menu[0];
        assert_eq!(node.kind, NodeKind::Item);
        assert!(node.breadcrumbs);
        assert!(!node.disabled);
        assert!(node.roles.is_empty());
    }

    #[test]
    fn test_unknown_role_rejected() {
        let err = MenuConfig::from_json_str(
            r#"{ "menu": [ { "id": "users", "title": "Users", "url": "/users", "roles": ["root"] } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownRole { ref id, .. } if id == "users"));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let err = MenuConfig::from_json_str(
            r#"{ "menu": [ { "id": "x", "title": "X", "type": "divider" } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKind { ref kind, .. } if kind == "divider"));
    }

    #[test]
    fn test_validation_runs_on_load() {
        let err = MenuConfig::from_json_str(
            r#"{ "menu": [
                { "id": "a", "title": "A", "url": "/a" },
                { "id": "b", "title": "B", "url": "/a/" }
            ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicatePath { .. }));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            MenuConfig::from_json_str("{ \"menu\": "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_partial_settings_keep_defaults() {
        let config = MenuConfig::from_json_str(
            r#"{ "settings": { "default_route": "/tasks/table" }, "menu": [] }"#,
        )
        .unwrap();
        assert_eq!(config.settings.default_route, "/tasks/table");
        assert_eq!(config.settings.app_name, "TeamFlow");
        assert_eq!(config.settings.not_access_route, "/not-access");
    }
}
