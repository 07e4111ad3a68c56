//! Breadcrumb trail resolution.
//!
//! The trail for a path is found by a depth-first search over the menu tree
//! and then the hidden routes, looking for the first node whose canonical
//! path equals the current path exactly. The root-to-node chain is turned
//! into titled [`BreadcrumbEntry`]s:
//!
//! - `group` nodes never appear; nodes with `breadcrumbs: false` are skipped
//!   unless they are the matched node itself
//! - the trail starts with a home entry (app name, home url) unless the
//!   chain already starts there
//! - the last entry is the only active one
//!
//! When nothing matches, the trail degrades to a single active entry titled
//! after the last path segment (`/transit/cargo-list` → `Cargo list`), or to
//! the root fallback label for `/`. Resolution never fails and never returns
//! an empty trail.
//!
//! Only configured keys go through the [`LabelResolver`]: node titles and
//! the root fallback label. A segment-derived title is display text already
//! and is used as is; the app name is used as is too.
//!
//! # Example
//!
//! ```
//! use teamflow_nav::{resolve_breadcrumbs, MenuNode, NavigatorSettings};
//! use teamflow_nav::breadcrumbs::Literal;
//!
//! let menu = vec![MenuNode::collapse("tasks", "Tasks")
//!     .child(MenuNode::item("board", "Board", "/tasks/board"))];
//! let settings = NavigatorSettings::default();
//!
//! let trail = resolve_breadcrumbs("/tasks/board", &menu, &[], &settings, &Literal);
//! let titles: Vec<&str> = trail.iter().map(|e| e.title.as_str()).collect();
//! assert_eq!(titles, vec!["TeamFlow", "Tasks", "Board"]);
//! assert!(trail[2].is_active);
//! ```

use crate::config::NavigatorSettings;
use crate::node::{MenuNode, NodeKind};
use crate::path::{last_segment, segment_title};
use crate::{debug_log, trace_log};
use serde::Serialize;

// ============================================================================
// Label resolution
// ============================================================================

/// Turns a node title (literal or translation key) into display text.
///
/// Implemented for any `Fn(&str) -> String`, so an i18n lookup closure can be
/// passed directly.
pub trait LabelResolver {
    /// Resolve a title key.
    fn resolve(&self, key: &str) -> String;
}

impl<F> LabelResolver for F
where
    F: Fn(&str) -> String,
{
    fn resolve(&self, key: &str) -> String {
        self(key)
    }
}

/// Resolver that uses titles verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct Literal;

impl LabelResolver for Literal {
    fn resolve(&self, key: &str) -> String {
        key.to_string()
    }
}

// ============================================================================
// Trail
// ============================================================================

/// One entry of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbEntry {
    /// Display title.
    pub title: String,
    /// Link target; `None` for non-navigable levels and fallback entries.
    pub url: Option<String>,
    /// `true` only for the last entry.
    pub is_active: bool,
}

impl BreadcrumbEntry {
    fn link(title: String, url: Option<String>) -> Self {
        Self {
            title,
            url,
            is_active: false,
        }
    }

    fn active(title: String) -> Self {
        Self {
            title,
            url: None,
            is_active: true,
        }
    }
}

/// Find the root-to-node chain for the first node whose path equals `path`.
///
/// The menu tree is searched before the hidden routes; within each, the
/// order is depth-first, parent-first, in configuration order.
pub fn find_chain<'a>(
    path: &str,
    menu: &'a [MenuNode],
    hidden: &'a [MenuNode],
) -> Option<Vec<&'a MenuNode>> {
    let mut chain = Vec::new();
    if search(menu, path, &mut chain) || search(hidden, path, &mut chain) {
        Some(chain)
    } else {
        None
    }
}

/// Push `node` onto the chain, recurse, pop on a miss.
fn search<'a>(nodes: &'a [MenuNode], path: &str, chain: &mut Vec<&'a MenuNode>) -> bool {
    for node in nodes {
        chain.push(node);
        if node.path_str() == Some(path) || search(&node.children, path, chain) {
            return true;
        }
        chain.pop();
    }
    false
}

/// Resolve the breadcrumb trail for `current_path`.
///
/// `current_path` is compared verbatim; normalise it first.
pub fn resolve_breadcrumbs<L>(
    current_path: &str,
    menu: &[MenuNode],
    hidden: &[MenuNode],
    settings: &NavigatorSettings,
    labels: &L,
) -> Vec<BreadcrumbEntry>
where
    L: LabelResolver + ?Sized,
{
    match find_chain(current_path, menu, hidden) {
        Some(chain) => {
            trace_log!(
                "Breadcrumb match for '{}': {}",
                current_path,
                chain
                    .iter()
                    .map(|n| n.id.as_str())
                    .collect::<Vec<_>>()
                    .join(" > ")
            );
            trail_from_chain(&chain, settings, labels)
        }
        None => {
            debug_log!(
                "No menu node for '{}'; using path fallback breadcrumb",
                current_path
            );
            vec![fallback_entry(current_path, settings, labels)]
        }
    }
}

fn trail_from_chain<L>(
    chain: &[&MenuNode],
    settings: &NavigatorSettings,
    labels: &L,
) -> Vec<BreadcrumbEntry>
where
    L: LabelResolver + ?Sized,
{
    let last = chain.len().saturating_sub(1);
    let mut trail: Vec<BreadcrumbEntry> = chain
        .iter()
        .enumerate()
        .filter(|(i, node)| node.kind != NodeKind::Group && (node.breadcrumbs || *i == last))
        .map(|(_, node)| BreadcrumbEntry::link(labels.resolve(&node.title), node.path.clone()))
        .collect();

    let starts_at_home = trail
        .first()
        .and_then(|entry| entry.url.as_deref())
        .is_some_and(|url| url == settings.home_url);
    if !starts_at_home {
        trail.insert(
            0,
            BreadcrumbEntry::link(settings.app_name.clone(), Some(settings.home_url.clone())),
        );
    }

    if let Some(entry) = trail.last_mut() {
        entry.is_active = true;
    }
    trail
}

/// Segment titles are not label keys and bypass `labels`.
fn fallback_entry<L>(path: &str, settings: &NavigatorSettings, labels: &L) -> BreadcrumbEntry
where
    L: LabelResolver + ?Sized,
{
    match last_segment(path) {
        Some(segment) => BreadcrumbEntry::active(segment_title(segment)),
        None => BreadcrumbEntry::active(labels.resolve(&settings.root_fallback_label)),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> NavigatorSettings {
        NavigatorSettings::default()
    }

    fn titles(trail: &[BreadcrumbEntry]) -> Vec<&str> {
        trail.iter().map(|e| e.title.as_str()).collect()
    }

    fn menu() -> Vec<MenuNode> {
        vec![
            MenuNode::item("dashboard", "Dashboard", "/dashboard"),
            MenuNode::group("declarations", "Declarations").child(
                MenuNode::collapse("cargo", "Cargo")
                    .child(MenuNode::item("cargo-list", "Cargo list", "/cargo/list"))
                    .child(
                        MenuNode::collapse("cargo-forms", "Forms")
                            .breadcrumbs(false)
                            .child(MenuNode::item("cargo-new", "New declaration", "/cargo/new")),
                    ),
            ),
        ]
    }

    #[test]
    fn test_group_is_never_an_entry() {
        let trail = resolve_breadcrumbs("/cargo/list", &menu(), &[], &settings(), &Literal);
        assert_eq!(titles(&trail), vec!["TeamFlow", "Cargo", "Cargo list"]);
        assert_eq!(trail[0].url.as_deref(), Some("/"));
        assert_eq!(trail[1].url, None);
        assert_eq!(trail[2].url.as_deref(), Some("/cargo/list"));
    }

    #[test]
    fn test_breadcrumbs_false_is_skipped_without_breaking_chain() {
        let trail = resolve_breadcrumbs("/cargo/new", &menu(), &[], &settings(), &Literal);
        assert_eq!(titles(&trail), vec!["TeamFlow", "Cargo", "New declaration"]);
        assert_eq!(trail.iter().filter(|e| e.is_active).count(), 1);
        assert!(trail.last().unwrap().is_active);
    }

    #[test]
    fn test_matched_node_kept_even_when_hidden_from_breadcrumbs() {
        let menu = vec![MenuNode::item("settings", "Settings", "/settings").breadcrumbs(false)];
        let trail = resolve_breadcrumbs("/settings", &menu, &[], &settings(), &Literal);
        assert_eq!(titles(&trail), vec!["TeamFlow", "Settings"]);
        assert!(trail[1].is_active);
    }

    #[test]
    fn test_hidden_routes_are_searched() {
        let hidden = vec![MenuNode::item("profile", "Profile", "/profile")];
        let trail = resolve_breadcrumbs("/profile", &menu(), &hidden, &settings(), &Literal);
        assert_eq!(titles(&trail), vec!["TeamFlow", "Profile"]);
    }

    #[test]
    fn test_no_home_prefix_when_chain_starts_at_home() {
        let menu = vec![MenuNode::item("home", "Overview", "/")];
        let trail = resolve_breadcrumbs("/", &menu, &[], &settings(), &Literal);
        assert_eq!(titles(&trail), vec!["Overview"]);
        assert!(trail[0].is_active);
    }

    #[test]
    fn test_labels_are_resolved() {
        let menu = vec![MenuNode::collapse("tasks", "menu.tasks")
            .child(MenuNode::item("board", "menu.tasks.board", "/tasks/board"))];
        let labels = |key: &str| key.rsplit('.').next().unwrap_or(key).to_uppercase();

        let trail = resolve_breadcrumbs("/tasks/board", &menu, &[], &settings(), &labels);
        assert_eq!(titles(&trail), vec!["TeamFlow", "TASKS", "BOARD"]);
    }

    #[test]
    fn test_fallback_uses_last_segment() {
        let trail = resolve_breadcrumbs("/transit/cargo-list", &menu(), &[], &settings(), &Literal);
        assert_eq!(
            trail,
            vec![BreadcrumbEntry {
                title: "Cargo list".to_string(),
                url: None,
                is_active: true,
            }]
        );
    }

    #[test]
    fn test_fallback_root() {
        let trail = resolve_breadcrumbs("/", &menu(), &[], &settings(), &Literal);
        assert_eq!(titles(&trail), vec!["Dashboard"]);
        assert!(trail[0].is_active);
    }

    #[test]
    fn test_first_match_wins() {
        let menu = vec![
            MenuNode::collapse("a", "A").child(MenuNode::item("a1", "First", "/dup")),
            MenuNode::item("b", "Second", "/dup"),
        ];
        let chain = find_chain("/dup", &menu, &[]).unwrap();
        let ids: Vec<&str> = chain.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "a1"]);
    }

    #[test]
    fn test_parent_path_matches_before_children() {
        let menu = vec![MenuNode::item("tasks", "Tasks", "/tasks")
            .child(MenuNode::item("tasks-dup", "Tasks again", "/tasks"))];
        let chain = find_chain("/tasks", &menu, &[]).unwrap();
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].id, "tasks");
    }

    #[test]
    fn test_fallback_resolves_only_root_label() {
        let shout = |key: &str| key.to_uppercase();
        let settings = NavigatorSettings {
            root_fallback_label: "menu.dashboard".to_string(),
            ..NavigatorSettings::default()
        };

        let trail = resolve_breadcrumbs("/reports/weekly-summary", &[], &[], &settings, &shout);
        assert_eq!(titles(&trail), vec!["Weekly summary"]);

        let trail = resolve_breadcrumbs("/", &[], &[], &settings, &shout);
        assert_eq!(titles(&trail), vec!["MENU.DASHBOARD"]);
    }

    #[test]
    fn test_serializes_camel_case() {
        let entry = BreadcrumbEntry::active("Board".to_string());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "title": "Board", "url": null, "isActive": true })
        );
    }
}
