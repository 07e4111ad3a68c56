//! Per-session navigation state.
//!
//! [`Navigator`] owns the static [`MenuConfig`] and its validated
//! [`RouteTable`], plus the three inputs that change at runtime: the
//! current path, the active user's roles, and whether auth is still
//! loading. Every derived view (breadcrumbs, visible menu, sidebar, page
//! decision) is recomputed from those inputs on each call, so a role change
//! is reflected immediately and nothing role-dependent is ever stale.
//!
//! # Example
//!
//! ```
//! use teamflow_nav::{MenuConfig, MenuNode, Navigator, NavigatorSettings, PageDecision, Role, RoleSet};
//!
//! let config = MenuConfig::new(
//!     NavigatorSettings::default(),
//!     vec![
//!         MenuNode::item("dashboard", "Dashboard", "/dashboard").component("Dashboard"),
//!         MenuNode::item("users", "Users", "/users").component("Users").roles([Role::Admin]),
//!     ],
//!     vec![],
//! );
//! let mut nav = Navigator::new(config).unwrap();
//! nav.set_roles(RoleSet::from([Role::Guest]));
//! nav.set_loading(false);
//!
//! nav.navigate("/users");
//! assert_eq!(nav.current_page(), PageDecision::Redirect { to: "/not-access".into() });
//!
//! nav.navigate("/");
//! assert_eq!(nav.current_page(), PageDecision::Redirect { to: "/dashboard".into() });
//! ```

use crate::breadcrumbs::{resolve_breadcrumbs, BreadcrumbEntry, LabelResolver};
#[cfg(feature = "cache")]
use crate::cache::RouteCache;
use crate::config::{MenuConfig, NavigatorSettings};
use crate::error::ConfigError;
use crate::guard::{AuthState, GuardDecision};
use crate::menu::{build_sidebar, is_active, project_visible_menu, ChromeState, SidebarEntry};
use crate::node::{ComponentRef, MenuNode};
use crate::params::RouteParams;
use crate::path::normalize_path;
use crate::role::RoleSet;
use crate::routes::{build_route_table, RouteBinding, RouteMatch, RouteTable};
use crate::{debug_log, info_log};

/// Path change produced by [`Navigator::navigate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteChange {
    /// Previous path.
    pub from: String,
    /// New, normalised path.
    pub to: String,
}

impl RouteChange {
    /// Return `true` if the path actually changed.
    pub fn is_change(&self) -> bool {
        self.from != self.to
    }
}

/// What the page-mounting collaborator should do for the current path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageDecision {
    /// Render this page with these params.
    Render {
        page: ComponentRef,
        node_id: String,
        params: RouteParams,
    },
    /// Navigate elsewhere: the index redirect or an access denial.
    Redirect { to: String },
    /// Auth still loading; render nothing.
    Blank,
    /// No binding for the path.
    NotFound { path: String },
}

impl PageDecision {
    /// Check if a page should render.
    pub fn is_render(&self) -> bool {
        matches!(self, PageDecision::Render { .. })
    }

    /// Check if the path has no binding.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PageDecision::NotFound { .. })
    }

    /// Get the redirect target, if any.
    pub fn redirect_path(&self) -> Option<&str> {
        match self {
            PageDecision::Redirect { to } => Some(to),
            _ => None,
        }
    }
}

/// Navigation session over a static menu configuration.
#[derive(Debug, Clone)]
pub struct Navigator {
    config: MenuConfig,
    routes: RouteTable,
    current_path: String,
    auth: AuthState,
    #[cfg(feature = "cache")]
    cache: RouteCache,
}

impl Navigator {
    /// Validate the configuration and build the route table.
    ///
    /// The session starts at `/` with auth loading and no roles.
    pub fn new(config: MenuConfig) -> Result<Self, ConfigError> {
        let routes = build_route_table(&config.menu, &config.hidden_routes, &config.settings)?;
        info_log!(
            "Navigator ready: {} routes, default route '{}'",
            routes.len(),
            config.settings.default_route
        );

        Ok(Self {
            config,
            routes,
            current_path: "/".to_string(),
            auth: AuthState::loading(),
            #[cfg(feature = "cache")]
            cache: RouteCache::new(),
        })
    }

    /// Static configuration.
    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Settings shortcut.
    pub fn settings(&self) -> &NavigatorSettings {
        &self.config.settings
    }

    /// Validated route table.
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Current canonical path.
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Current auth inputs.
    pub fn auth(&self) -> &AuthState {
        &self.auth
    }

    /// Roles of the active user.
    pub fn roles(&self) -> &RoleSet {
        &self.auth.roles
    }

    /// Change the current path.
    pub fn navigate(&mut self, path: &str) -> RouteChange {
        let to = normalize_path(path).into_owned();
        let from = std::mem::replace(&mut self.current_path, to.clone());
        debug_log!("Navigating from '{}' to '{}'", from, to);
        RouteChange { from, to }
    }

    /// Replace the active user's roles (login, logout, refresh).
    pub fn set_roles(&mut self, roles: RoleSet) {
        if self.auth.roles != roles {
            info_log!("User roles changed: {} -> {}", self.auth.roles, roles);
            self.auth.roles = roles;
        }
    }

    /// Replace the active user's roles from raw names; unknown names are dropped.
    pub fn set_role_names<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set_roles(RoleSet::from_names(names));
    }

    /// Mark auth as loading or resolved.
    pub fn set_loading(&mut self, loading: bool) {
        if self.auth.loading != loading {
            info_log!("Auth loading: {} -> {}", self.auth.loading, loading);
            self.auth.loading = loading;
        }
    }

    /// Breadcrumb trail for the current path.
    pub fn breadcrumbs<L>(&self, labels: &L) -> Vec<BreadcrumbEntry>
    where
        L: LabelResolver + ?Sized,
    {
        resolve_breadcrumbs(
            &self.current_path,
            &self.config.menu,
            &self.config.hidden_routes,
            &self.config.settings,
            labels,
        )
    }

    /// Menu tree pruned for the current roles.
    pub fn visible_menu(&self) -> Vec<MenuNode> {
        project_visible_menu(&self.config.menu, &self.auth.roles)
    }

    /// Render-ready sidebar for the current roles and path.
    pub fn sidebar<L>(&self, chrome: &ChromeState, labels: &L) -> Vec<SidebarEntry>
    where
        L: LabelResolver + ?Sized,
    {
        build_sidebar(
            &self.config.menu,
            &self.auth.roles,
            &self.current_path,
            chrome,
            labels,
        )
    }

    /// Return `true` if `node` or a descendant is at the current path.
    pub fn is_active(&self, node: &MenuNode) -> bool {
        is_active(node, &self.current_path)
    }

    /// Decide what to mount for the current path.
    pub fn current_page(&mut self) -> PageDecision {
        let path = self.current_path.clone();
        let Some(found) = self.lookup(&path) else {
            return PageDecision::NotFound { path };
        };

        match found {
            RouteMatch::Index => PageDecision::Redirect {
                to: self.routes.index().to.clone(),
            },
            RouteMatch::Binding { position, params } => match self.routes.binding(position) {
                Some(binding) => decide(binding, &self.auth, params),
                None => PageDecision::NotFound { path },
            },
        }
    }

    #[cfg(feature = "cache")]
    fn lookup(&mut self, path: &str) -> Option<RouteMatch> {
        if let Some(found) = self.cache.get(path) {
            return found;
        }
        let found = self.routes.find(path);
        self.cache.insert(path.to_string(), found.clone());
        found
    }

    #[cfg(not(feature = "cache"))]
    fn lookup(&mut self, path: &str) -> Option<RouteMatch> {
        self.routes.find(path)
    }

    /// Lookup cache counters.
    #[cfg(feature = "cache")]
    pub fn cache_stats(&self) -> &crate::cache::CacheStats {
        self.cache.stats()
    }
}

fn decide(binding: &RouteBinding, auth: &AuthState, params: RouteParams) -> PageDecision {
    match binding.check(auth) {
        GuardDecision::Render => PageDecision::Render {
            page: binding.component.page().clone(),
            node_id: binding.node_id.clone(),
            params,
        },
        GuardDecision::Blank => PageDecision::Blank,
        GuardDecision::Redirect { target } => PageDecision::Redirect { to: target },
    }
}
