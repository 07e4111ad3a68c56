//! Configuration loading tests.

mod common;

use common::*;
use std::io::Cursor;
use teamflow_nav::*;

const TEAMFLOW_JSON: &str = include_str!("../demos/teamflow_menu.json");

#[test]
fn test_json_matches_builder_fixture() {
    let config = MenuConfig::from_json_str(TEAMFLOW_JSON).unwrap();
    assert_eq!(config.menu, teamflow_menu());
    assert_eq!(config.hidden_routes, teamflow_hidden());
    assert_eq!(config.settings.root_fallback_label, "menu.dashboard");
}

#[test]
fn test_from_reader() {
    let config = MenuConfig::from_json_reader(Cursor::new(TEAMFLOW_JSON.as_bytes())).unwrap();
    assert_eq!(config.menu.len(), 4);
    assert_eq!(config.hidden_routes.len(), 2);
}

#[test]
fn test_from_file() {
    let path = std::env::temp_dir().join(format!("teamflow-nav-{}.json", std::process::id()));
    std::fs::write(&path, TEAMFLOW_JSON).unwrap();

    let config = MenuConfig::from_file(&path);
    std::fs::remove_file(&path).unwrap();

    let nav = Navigator::new(config.unwrap()).unwrap();
    assert_eq!(nav.routes().len(), 10);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = MenuConfig::from_file("/definitely/not/here/menu.json").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_root_fallback_label_is_resolved() {
    let mut nav = Navigator::new(MenuConfig::from_json_str(TEAMFLOW_JSON).unwrap()).unwrap();
    nav.navigate("/");
    assert_eq!(titles(&nav.breadcrumbs(&english)), vec!["Dashboard"]);
}

#[test]
fn test_duplicate_id_rejected() {
    let err = MenuConfig::from_json_str(
        r#"{ "menu": [
            { "id": "a", "title": "A", "url": "/a" },
            { "id": "g", "title": "G", "type": "group", "children": [
                { "id": "a", "title": "Again", "url": "/b" }
            ] }
        ] }"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateId { ref id } if id == "a"));
    assert_eq!(err.node_id(), Some("a"));
}

#[test]
fn test_item_without_path_needs_group_parent() {
    let err = MenuConfig::from_json_str(
        r#"{ "menu": [ { "id": "c", "title": "C", "type": "collapse", "children": [
            { "id": "orphan", "title": "Orphan" }
        ] } ] }"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::MissingPath { ref id } if id == "orphan"));
}

#[test]
fn test_empty_id_rejected() {
    let err = MenuConfig::from_json_str(r#"{ "menu": [ { "id": " ", "title": "Blank", "url": "/x" } ] }"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::EmptyId { .. }));
}

#[test]
fn test_hidden_alias() {
    let config = MenuConfig::from_json_str(
        r#"{ "items": [], "hiddenRoutes": [ { "id": "p", "title": "P", "url": "/p", "component": "P" } ] }"#,
    )
    .unwrap();
    assert!(config.menu.is_empty());
    assert_eq!(config.hidden_routes[0].path_str(), Some("/p"));
}

#[test]
fn test_role_names_are_case_insensitive() {
    let config = MenuConfig::from_json_str(
        r#"{ "menu": [ { "id": "u", "title": "U", "url": "/u", "roles": ["Admin", " MANAGER "] } ] }"#,
    )
    .unwrap();
    assert_eq!(config.menu[0].roles, roles(&[Role::Admin, Role::Manager]));
}

#[test]
fn test_settings_round_trip_through_serde() {
    let settings = NavigatorSettings {
        default_route: "/tasks/board".to_string(),
        ..NavigatorSettings::default()
    };
    let json = serde_json::to_string(&settings).unwrap();
    let back: NavigatorSettings = serde_json::from_str(&json).unwrap();
    assert_eq!(back, settings);
}

#[test]
fn test_group_with_path_rejected() {
    let err = MenuConfig::from_json_str(
        r#"{ "menu": [ { "id": "reports", "title": "Reports", "type": "group", "url": "/reports",
            "component": "ReportsPage", "children": [
                { "id": "r1", "title": "R1", "url": "/reports/r1", "component": "R1" }
            ] } ] }"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::GroupWithPath { ref id, .. } if id == "reports"));
}
