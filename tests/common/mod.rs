//! Test utilities for navigation tests
//!
//! Provides the TeamFlow fixture menu and assertion helpers.

#![allow(dead_code)]

use teamflow_nav::*;

/// The TeamFlow menu as shipped: dashboard, tasks, declarations, admin.
pub fn teamflow_menu() -> Vec<MenuNode> {
    vec![
        MenuNode::item("dashboard", "menu.dashboard", "/dashboard")
            .icon("dashboard")
            .component("Dashboard"),
        MenuNode::collapse("tasks", "menu.tasks")
            .icon("tasks")
            .child(
                MenuNode::item("tasks-table", "menu.tasks.table", "/tasks/table")
                    .component("TasksTable"),
            )
            .child(
                MenuNode::item("tasks-board", "menu.tasks.board", "/tasks/board")
                    .component("TasksBoard"),
            ),
        MenuNode::group("declarations", "menu.declarations")
            .child(
                MenuNode::collapse("cargo", "menu.cargo")
                    .roles([Role::Admin, Role::Manager])
                    .child(
                        MenuNode::item("cargo-list", "menu.cargo.list", "/cargo/list")
                            .component("CargoList"),
                    )
                    .child(
                        MenuNode::item("cargo-new", "menu.cargo.new", "/cargo/new")
                            .component("CargoForm")
                            .roles([Role::Manager]),
                    ),
            )
            .child(
                MenuNode::collapse("auto", "menu.auto")
                    .child(
                        MenuNode::item("auto-list", "menu.auto.list", "/auto/list")
                            .component("AutoList")
                            .roles([Role::Employee, Role::Manager]),
                    )
                    .child(
                        MenuNode::item("auto-archive", "menu.auto.archive", "/auto/archive")
                            .component("AutoArchive")
                            .disabled(),
                    ),
            ),
        MenuNode::group("administration", "menu.administration").child(
            MenuNode::item("users", "menu.users", "/users")
                .component("UsersTable")
                .roles([Role::Admin]),
        ),
    ]
}

/// Routable pages that are not in the menu.
pub fn teamflow_hidden() -> Vec<MenuNode> {
    vec![
        MenuNode::item("profile", "menu.profile", "/profile").component("Profile"),
        MenuNode::item("transit-detail", "menu.transit", "/transit/:id")
            .component("TransitDetail")
            .roles([Role::Manager]),
    ]
}

pub fn teamflow_config() -> MenuConfig {
    MenuConfig::new(
        NavigatorSettings::default(),
        teamflow_menu(),
        teamflow_hidden(),
    )
}

/// The minimal menu from the walkthrough: dashboard plus a tasks collapse.
pub fn walkthrough_menu() -> Vec<MenuNode> {
    vec![
        MenuNode::item("dashboard", "Dashboard", "/dashboard").component("Dashboard"),
        MenuNode::collapse("tasks", "Tasks")
            .path("")
            .child(MenuNode::item("tasks-table", "Table", "/tasks/table").component("TasksTable"))
            .child(MenuNode::item("tasks-board", "Board", "/tasks/board").component("TasksBoard")),
    ]
}

pub fn walkthrough_hidden() -> Vec<MenuNode> {
    vec![MenuNode::item("profile", "Profile", "/profile").component("Profile")]
}

/// Translate `menu.*` keys the way the app's i18n table would.
pub fn english(key: &str) -> String {
    match key {
        "menu.dashboard" => "Dashboard",
        "menu.tasks" => "Tasks",
        "menu.tasks.table" => "Table",
        "menu.tasks.board" => "Board",
        "menu.cargo" => "Cargo",
        "menu.cargo.list" => "Cargo list",
        "menu.cargo.new" => "New cargo declaration",
        "menu.auto" => "Vehicles",
        "menu.auto.list" => "Vehicle list",
        "menu.auto.archive" => "Archive",
        "menu.users" => "Users",
        "menu.profile" => "Profile",
        "menu.transit" => "Transit",
        other => other,
    }
    .to_string()
}

pub fn roles(list: &[Role]) -> RoleSet {
    list.iter().copied().collect()
}

/// Collect ids of a menu tree, depth-first.
pub fn ids(nodes: &[MenuNode]) -> Vec<&str> {
    walk_forest(nodes).map(|n| n.id.as_str()).collect()
}

/// Titles of a breadcrumb trail.
pub fn titles(trail: &[BreadcrumbEntry]) -> Vec<&str> {
    trail.iter().map(|e| e.title.as_str()).collect()
}

/// Assert a trail has exactly one active entry and that it is last.
pub fn assert_single_active_last(trail: &[BreadcrumbEntry]) {
    assert!(!trail.is_empty(), "breadcrumb trail is empty");
    assert_eq!(
        trail.iter().filter(|e| e.is_active).count(),
        1,
        "expected exactly one active entry in {:?}",
        trail
    );
    assert!(trail[trail.len() - 1].is_active, "last entry is not active");
}
