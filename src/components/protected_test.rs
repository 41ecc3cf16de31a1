use super::*;

const HR_ONLY: &[Role] = &[Role::Hr];
const HR_OR_ADMIN: &[Role] = &[Role::Hr, Role::Admin];
const ANY_AUTHENTICATED: &[Role] = &[];

#[test]
fn restoration_in_flight_defers_decision() {
    assert_eq!(authorize(true, None, HR_ONLY), RouteDecision::Checking);
    assert_eq!(authorize(true, Some(Role::Hr), HR_ONLY), RouteDecision::Checking);
}

#[test]
fn unauthenticated_navigation_redirects_to_login() {
    assert_eq!(authorize(false, None, HR_ONLY), RouteDecision::RedirectLogin);
    assert_eq!(authorize(false, None, ANY_AUTHENTICATED), RouteDecision::RedirectLogin);
}

#[test]
fn wrong_role_redirects_to_unauthorized() {
    assert_eq!(
        authorize(false, Some(Role::Employee), HR_ONLY),
        RouteDecision::RedirectUnauthorized
    );
}

#[test]
fn matching_role_renders() {
    assert_eq!(authorize(false, Some(Role::Hr), HR_ONLY), RouteDecision::Render);
}

#[test]
fn member_of_multi_role_allow_list_renders() {
    assert_eq!(authorize(false, Some(Role::Admin), HR_OR_ADMIN), RouteDecision::Render);
    assert_eq!(
        authorize(false, Some(Role::Employee), HR_OR_ADMIN),
        RouteDecision::RedirectUnauthorized
    );
}

#[test]
fn empty_allow_list_admits_every_role() {
    for role in [Role::Employee, Role::Hr, Role::Admin] {
        assert_eq!(authorize(false, Some(role), ANY_AUTHENTICATED), RouteDecision::Render);
    }
}
