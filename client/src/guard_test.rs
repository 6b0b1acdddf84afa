use super::*;
use crate::routes;

fn policy() -> GuardPolicy {
    GuardPolicy::default()
}

#[test]
fn anonymous_visitor_is_sent_to_login_with_return_path() {
    let target = routes::resolve("/user/dashboard");
    let decision = evaluate(target, "/user/dashboard", &Session::anonymous(), &policy());
    assert_eq!(
        decision,
        Decision::Redirect {
            to: RouteName::Login,
            preserve: Some("/user/dashboard".to_owned()),
        }
    );
}

#[test]
fn anonymous_visitor_return_path_can_be_disabled() {
    let target = routes::resolve("/parking");
    let no_preserve = GuardPolicy {
        preserve_redirect: false,
        ..GuardPolicy::default()
    };
    let decision = evaluate(target, "/parking", &Session::anonymous(), &no_preserve);
    assert_eq!(
        decision,
        Decision::Redirect {
            to: RouteName::Login,
            preserve: None,
        }
    );
}

#[test]
fn user_is_redirected_off_admin_dashboard() {
    let target = routes::resolve("/admin/dashboard");
    let session = Session::authenticated("t", Role::User);
    let decision = evaluate(target, "/admin/dashboard", &session, &policy());
    assert_eq!(
        decision,
        Decision::Redirect {
            to: RouteName::UserDashboard,
            preserve: None,
        }
    );
}

#[test]
fn token_without_role_is_treated_as_non_admin() {
    let target = routes::resolve("/admin/dashboard");
    let session = Session {
        token: Some("t".to_owned()),
        role: None,
    };
    let decision = evaluate(target, "/admin/dashboard", &session, &policy());
    assert_eq!(
        decision,
        Decision::Redirect {
            to: RouteName::UserDashboard,
            preserve: None,
        }
    );
}

#[test]
fn admin_is_redirected_off_user_dashboard_by_default() {
    let target = routes::resolve("/user/dashboard");
    let session = Session::authenticated("t", Role::Admin);
    let decision = evaluate(target, "/user/dashboard", &session, &policy());
    assert_eq!(
        decision,
        Decision::Redirect {
            to: RouteName::AdminDashboard,
            preserve: None,
        }
    );
}

#[test]
fn admin_may_enter_user_routes_when_policy_allows() {
    let target = routes::resolve("/user/dashboard");
    let session = Session::authenticated("t", Role::Admin);
    let permissive = GuardPolicy {
        admins_on_user_routes: true,
        ..GuardPolicy::default()
    };
    assert_eq!(
        evaluate(target, "/user/dashboard", &session, &permissive),
        Decision::Allow
    );
}

#[test]
fn authenticated_visitor_never_sees_guest_routes() {
    let login = routes::resolve("/login");
    let register = routes::resolve("/register");

    let user = Session::authenticated("t", Role::User);
    assert_eq!(
        evaluate(login, "/login", &user, &policy()),
        Decision::Redirect {
            to: RouteName::UserDashboard,
            preserve: None,
        }
    );

    let admin = Session::authenticated("t", Role::Admin);
    assert_eq!(
        evaluate(register, "/register", &admin, &policy()),
        Decision::Redirect {
            to: RouteName::AdminDashboard,
            preserve: None,
        }
    );
}

#[test]
fn anonymous_visitor_may_see_guest_routes() {
    let login = routes::resolve("/login");
    assert_eq!(
        evaluate(login, "/login", &Session::anonymous(), &policy()),
        Decision::Allow
    );
}

#[test]
fn role_free_authed_route_admits_both_roles() {
    let parking = routes::resolve("/parking");
    for role in [Role::User, Role::Admin] {
        let session = Session::authenticated("t", role);
        assert_eq!(
            evaluate(parking, "/parking", &session, &policy()),
            Decision::Allow
        );
    }
}

#[test]
fn matching_roles_are_allowed_onto_their_dashboards() {
    let user_dash = routes::resolve("/user/dashboard");
    let admin_dash = routes::resolve("/admin/dashboard");
    assert_eq!(
        evaluate(
            user_dash,
            "/user/dashboard",
            &Session::authenticated("t", Role::User),
            &policy()
        ),
        Decision::Allow
    );
    assert_eq!(
        evaluate(
            admin_dash,
            "/admin/dashboard",
            &Session::authenticated("t", Role::Admin),
            &policy()
        ),
        Decision::Allow
    );
}
