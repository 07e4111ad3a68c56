//! TeamFlow Menu Demo
//!
//! Loads the shipped menu definition and prints what each role sees.
//!
//! ```text
//! RUST_LOG=debug cargo run --example teamflow_menu
//! ```

use teamflow_nav::{ChromeState, MenuConfig, Navigator, PageDecision, Role, RoleSet, SidebarEntry};

const MENU_JSON: &str = include_str!("teamflow_menu.json");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = MenuConfig::from_json_str(MENU_JSON)?;
    let mut nav = Navigator::new(config)?;
    nav.set_loading(false);

    println!("Routes:");
    for binding in nav.routes().iter() {
        let guard = if binding.component.is_guarded() {
            format!(" (roles: {})", binding.required_roles)
        } else {
            String::new()
        };
        println!("  {:<16} -> {}{}", binding.path, binding.component.page(), guard);
    }

    let mut chrome = ChromeState::new();
    chrome.set_expanded("tasks", true);

    for role in Role::ALL {
        nav.set_roles(RoleSet::from([role]));
        println!("\n== {role} ==");
        print_sidebar(&nav.sidebar(&chrome, &label), 1);

        for path in ["/cargo/new", "/users", "/transit/17"] {
            nav.navigate(path);
            let trail: Vec<String> = nav
                .breadcrumbs(&label)
                .into_iter()
                .map(|entry| entry.title)
                .collect();
            println!("  {path}: {} [{}]", describe(&nav.current_page()), trail.join(" / "));
        }
    }

    Ok(())
}

fn print_sidebar(entries: &[SidebarEntry], depth: usize) {
    for entry in entries {
        let marker = match (entry.active, entry.disabled) {
            (true, _) => "*",
            (false, true) => "x",
            (false, false) => " ",
        };
        println!("{}{marker} {}", "  ".repeat(depth), entry.title);
        if entry.expanded {
            print_sidebar(&entry.children, depth + 1);
        }
    }
}

fn describe(decision: &PageDecision) -> String {
    match decision {
        PageDecision::Render { page, params, .. } if params.is_empty() => format!("render {page}"),
        PageDecision::Render { page, params, .. } => {
            let mut pairs: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
            pairs.sort();
            format!("render {page} ({})", pairs.join(", "))
        }
        PageDecision::Redirect { to } => format!("redirect {to}"),
        PageDecision::Blank => "blank".to_string(),
        PageDecision::NotFound { path } => format!("not found {path}"),
    }
}

// Stand-in for the app's translation table.
fn label(key: &str) -> String {
    key.strip_prefix("menu.")
        .unwrap_or(key)
        .replace('.', " ")
}
