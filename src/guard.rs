//! Access guard for role-restricted pages.
//!
//! A guard wraps a page render and decides, from the auth state at the
//! moment of evaluation, whether the page is rendered, replaced by nothing,
//! or redirected to the access-denied route.
//!
//! The guard is a small state machine:
//!
//! | State | Condition | Decision |
//! |-------|-----------|----------|
//! | [`Loading`](AccessState::Loading) | auth/roles not resolved yet | [`Blank`](GuardDecision::Blank) |
//! | [`Authorized`](AccessState::Authorized) | required roles empty or intersect the user's | [`Render`](GuardDecision::Render) |
//! | [`Denied`](AccessState::Denied) | required roles disjoint from the user's | [`Redirect`](GuardDecision::Redirect) |
//!
//! Loading always wins, so a page reload during token refresh never flashes
//! a denial. Evaluation is synchronous and idempotent; callers re-run it
//! whenever the loading flag or the role set changes, which is how a role
//! downgrade on an already open page turns into a redirect.
//!
//! # Example
//!
//! ```
//! use teamflow_nav::{guard, GuardDecision, MenuNode, Role, RoleSet};
//!
//! let users = MenuNode::item("users", "Users", "/users").roles([Role::Admin]);
//! let guest = RoleSet::from([Role::Guest]);
//!
//! assert_eq!(guard(&users, &guest, true), GuardDecision::Blank);
//! assert_eq!(guard(&users, &guest, false).redirect_path(), Some("/not-access"));
//! ```

use crate::debug_log;
use crate::node::MenuNode;
use crate::role::RoleSet;
use serde::Serialize;

/// Default redirect target for denied access.
pub const NOT_ACCESS_ROUTE: &str = "/not-access";

// ============================================================================
// Decisions
// ============================================================================

/// Evaluated guard state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AccessState {
    /// Auth context still resolving.
    Loading,
    /// User may see the page.
    Authorized,
    /// User lacks every required role.
    Denied,
}

impl AccessState {
    /// Evaluate the state from the page's required roles and the auth context.
    pub fn evaluate(required: &RoleSet, user_roles: &RoleSet, is_loading: bool) -> Self {
        if is_loading {
            AccessState::Loading
        } else if required.permits(user_roles) {
            AccessState::Authorized
        } else {
            AccessState::Denied
        }
    }
}

/// What the page-mounting collaborator should do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "render", rename_all = "lowercase")]
pub enum GuardDecision {
    /// Render the guarded page.
    #[serde(rename = "children")]
    Render,
    /// Render nothing yet.
    Blank,
    /// Navigate away.
    Redirect {
        /// Redirect target.
        target: String,
    },
}

impl GuardDecision {
    /// Check if the page should render.
    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render)
    }

    /// Check if nothing should render.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    /// Check if this decision redirects.
    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect { .. })
    }

    /// Get the redirect target, if this is a redirect.
    pub fn redirect_path(&self) -> Option<&str> {
        match self {
            Self::Redirect { target } => Some(target.as_str()),
            _ => None,
        }
    }
}

/// Auth context a guard is evaluated against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    /// Roles held by the active user.
    pub roles: RoleSet,
    /// `true` while the auth collaborator is still resolving the user.
    pub loading: bool,
}

impl AuthState {
    /// Resolved auth state for a user holding `roles`.
    pub fn ready(roles: RoleSet) -> Self {
        Self {
            roles,
            loading: false,
        }
    }

    /// Auth state that has not resolved yet.
    pub fn loading() -> Self {
        Self {
            roles: RoleSet::new(),
            loading: true,
        }
    }
}

// ============================================================================
// RouteGuard trait
// ============================================================================

/// A check evaluated each time a guarded page is about to render.
///
/// All guard methods are synchronous: the only asynchronous input, the auth
/// lookup, is folded into [`AuthState::loading`].
pub trait RouteGuard: Send + Sync + 'static {
    /// Decide whether to render, blank or redirect.
    fn check(&self, auth: &AuthState) -> GuardDecision;

    /// Guard name for debugging.
    fn name(&self) -> &'static str {
        "RouteGuard"
    }
}

// ============================================================================
// RoleGuard
// ============================================================================

/// Any-of role guard that redirects denied users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGuard {
    required: RoleSet,
    redirect_to: String,
}

impl RoleGuard {
    /// Guard requiring any of `required`, redirecting to [`NOT_ACCESS_ROUTE`].
    pub fn new(required: RoleSet) -> Self {
        Self {
            required,
            redirect_to: NOT_ACCESS_ROUTE.to_string(),
        }
    }

    /// Use a different redirect target for denied users.
    #[must_use]
    pub fn with_redirect(mut self, path: impl Into<String>) -> Self {
        self.redirect_to = path.into();
        self
    }

    /// Roles this guard requires.
    pub fn required_roles(&self) -> &RoleSet {
        &self.required
    }

    /// Redirect target for denied users.
    pub fn redirect_to(&self) -> &str {
        &self.redirect_to
    }

    /// Evaluate the guard state without producing a decision.
    pub fn state(&self, auth: &AuthState) -> AccessState {
        AccessState::evaluate(&self.required, &auth.roles, auth.loading)
    }
}

impl RouteGuard for RoleGuard {
    fn check(&self, auth: &AuthState) -> GuardDecision {
        match self.state(auth) {
            AccessState::Loading => GuardDecision::Blank,
            AccessState::Authorized => GuardDecision::Render,
            AccessState::Denied => {
                debug_log!(
                    "Access denied: requires any of {}, user has {}; redirecting to '{}'",
                    self.required,
                    auth.roles,
                    self.redirect_to
                );
                GuardDecision::Redirect {
                    target: self.redirect_to.clone(),
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "RoleGuard"
    }
}

/// Guard a node's page with its own `roles`, redirecting to
/// [`NOT_ACCESS_ROUTE`] on denial.
pub fn guard(node: &MenuNode, user_roles: &RoleSet, is_loading: bool) -> GuardDecision {
    let auth = AuthState {
        roles: user_roles.clone(),
        loading: is_loading,
    };
    RoleGuard::new(node.roles.clone()).check(&auth)
}

// ============================================================================
// Tests
// ============================================================================
