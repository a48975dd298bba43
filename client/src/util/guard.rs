//! Route resolution and role gating.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::route_outlet` calls [`resolve`] on every navigation with the
//! current session. The decision is never cached, so a logout or role change
//! takes effect on the next navigation.
//!
//! Gating is asymmetric. Role-restricted prefixes (`/buyer`, `/seller`,
//! `/admin`) require an exact role match and reject [`Role::Unknown`];
//! `/profile` only requires that some session exists.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::{Role, Session};

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";

/// A mountable page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppView {
    Home,
    Login,
    Signup,
    Profile,
    PropertyDetails { id: String },
    BuyerDashboard,
    SellerDashboard,
    AdminDashboard,
}

/// Outcome of resolving a path against the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Mount(AppView),
    Redirect(&'static str),
    NotFound,
}

/// Resolve `path` for `session`.
///
/// Query strings, fragments, repeated and trailing slashes are ignored.
pub fn resolve(path: &str, session: Option<&Session>) -> RouteDecision {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] => RouteDecision::Mount(AppView::Home),
        ["login"] => RouteDecision::Mount(AppView::Login),
        ["signup"] => RouteDecision::Mount(AppView::Signup),
        ["property", id] => RouteDecision::Mount(AppView::PropertyDetails { id: (*id).to_owned() }),
        ["profile"] => {
            if session.is_some() {
                RouteDecision::Mount(AppView::Profile)
            } else {
                RouteDecision::Redirect(LOGIN_PATH)
            }
        }
        [prefix, ..] => match restricted_role(prefix) {
            Some(required) => gate(required, session),
            None => RouteDecision::NotFound,
        },
    }
}

/// Landing path right after a successful login.
pub fn post_login_path(role: Role) -> &'static str {
    role.dashboard_path().unwrap_or(HOME_PATH)
}

fn restricted_role(prefix: &str) -> Option<Role> {
    match prefix {
        "buyer" => Some(Role::Buyer),
        "seller" => Some(Role::Seller),
        "admin" => Some(Role::Admin),
        _ => None,
    }
}

fn gate(required: Role, session: Option<&Session>) -> RouteDecision {
    let held = session.map_or(Role::Unknown, |s| s.role);
    match (required, held) {
        (Role::Buyer, Role::Buyer) => RouteDecision::Mount(AppView::BuyerDashboard),
        (Role::Seller, Role::Seller) => RouteDecision::Mount(AppView::SellerDashboard),
        (Role::Admin, Role::Admin) => RouteDecision::Mount(AppView::AdminDashboard),
        _ => RouteDecision::Redirect(LOGIN_PATH),
    }
}
