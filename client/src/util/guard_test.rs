use super::*;

fn session(role: Role) -> Session {
    Session {
        id: 1,
        name: "Test User".to_owned(),
        email: "test@example.com".to_owned(),
        role,
        token: "t".to_owned(),
    }
}

const ROLES: [Role; 3] = [Role::Buyer, Role::Seller, Role::Admin];

fn dashboard_for(role: Role) -> AppView {
    match role {
        Role::Buyer => AppView::BuyerDashboard,
        Role::Seller => AppView::SellerDashboard,
        Role::Admin => AppView::AdminDashboard,
        Role::Unknown => unreachable!(),
    }
}

fn prefix_for(role: Role) -> &'static str {
    role.dashboard_path().unwrap()
}

// =============================================================
// Public paths
// =============================================================

#[test]
fn public_paths_resolve_without_session() {
    assert_eq!(resolve("/", None), RouteDecision::Mount(AppView::Home));
    assert_eq!(resolve("", None), RouteDecision::Mount(AppView::Home));
    assert_eq!(resolve("/login", None), RouteDecision::Mount(AppView::Login));
    assert_eq!(resolve("/signup", None), RouteDecision::Mount(AppView::Signup));
    assert_eq!(
        resolve("/property/42", None),
        RouteDecision::Mount(AppView::PropertyDetails { id: "42".to_owned() })
    );
}

#[test]
fn public_paths_resolve_with_any_session() {
    for role in [Role::Buyer, Role::Seller, Role::Admin, Role::Unknown] {
        let s = session(role);
        assert_eq!(resolve("/", Some(&s)), RouteDecision::Mount(AppView::Home));
        assert_eq!(resolve("/login", Some(&s)), RouteDecision::Mount(AppView::Login));
    }
}

#[test]
fn property_without_id_is_not_found() {
    assert_eq!(resolve("/property", None), RouteDecision::NotFound);
    assert_eq!(resolve("/property/1/extra", None), RouteDecision::NotFound);
}

#[test]
fn unknown_paths_are_not_found() {
    assert_eq!(resolve("/reports", None), RouteDecision::NotFound);
    assert_eq!(resolve("/buyers", Some(&session(Role::Buyer))), RouteDecision::NotFound);
}

#[test]
fn query_fragment_and_trailing_slash_are_ignored() {
    assert_eq!(resolve("/login/", None), RouteDecision::Mount(AppView::Login));
    assert_eq!(resolve("/login?next=/buyer", None), RouteDecision::Mount(AppView::Login));
    assert_eq!(resolve("/signup#top", None), RouteDecision::Mount(AppView::Signup));
    assert_eq!(
        resolve("//buyer//wishlist/", Some(&session(Role::Buyer))),
        RouteDecision::Mount(AppView::BuyerDashboard)
    );
}

// =============================================================
// Role-restricted prefixes
// =============================================================

#[test]
fn matching_role_mounts_its_dashboard() {
    for role in ROLES {
        let s = session(role);
        let prefix = prefix_for(role);
        for path in [prefix.to_owned(), format!("{prefix}/"), format!("{prefix}/anything/deeper")] {
            assert_eq!(resolve(&path, Some(&s)), RouteDecision::Mount(dashboard_for(role)), "{path}");
        }
    }
}

#[test]
fn other_role_prefixes_redirect_to_login() {
    for held in ROLES {
        for required in ROLES {
            if held == required {
                continue;
            }
            let path = format!("{}/x", prefix_for(required));
            assert_eq!(resolve(&path, Some(&session(held))), RouteDecision::Redirect(LOGIN_PATH));
        }
    }
}

#[test]
fn unknown_role_is_gated_out_of_every_dashboard() {
    let s = session(Role::Unknown);
    for role in ROLES {
        assert_eq!(resolve(prefix_for(role), Some(&s)), RouteDecision::Redirect(LOGIN_PATH));
    }
}

#[test]
fn no_session_redirects_admin_reports() {
    assert_eq!(resolve("/admin/reports", None), RouteDecision::Redirect(LOGIN_PATH));
}

#[test]
fn seller_cannot_open_buyer_wishlist() {
    assert_eq!(
        resolve("/buyer/wishlist", Some(&session(Role::Seller))),
        RouteDecision::Redirect(LOGIN_PATH)
    );
}

#[test]
fn buyer_opens_buyer_wishlist() {
    assert_eq!(
        resolve("/buyer/wishlist", Some(&session(Role::Buyer))),
        RouteDecision::Mount(AppView::BuyerDashboard)
    );
}

// =============================================================
// Profile
// =============================================================

#[test]
fn profile_requires_any_session() {
    assert_eq!(resolve("/profile", None), RouteDecision::Redirect(LOGIN_PATH));
    for role in [Role::Buyer, Role::Seller, Role::Admin, Role::Unknown] {
        assert_eq!(resolve("/profile", Some(&session(role))), RouteDecision::Mount(AppView::Profile));
    }
}

// =============================================================
// post_login_path
// =============================================================

#[test]
fn post_login_lands_on_role_dashboard() {
    assert_eq!(post_login_path(Role::Buyer), "/buyer");
    assert_eq!(post_login_path(Role::Seller), "/seller");
    assert_eq!(post_login_path(Role::Admin), "/admin");
    assert_eq!(post_login_path(Role::Unknown), HOME_PATH);
}
