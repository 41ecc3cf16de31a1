//! Role-gated route wrapper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every protected view declared in the route table. The decision is a
//! reactive function of the session store, so a logout while a guarded view
//! is mounted redirects immediately, not only on the next navigation.

#[cfg(test)]
#[path = "protected_test.rs"]
mod protected_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::session::SessionStore;

/// Outcome of evaluating one navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session restoration still in flight; render a neutral placeholder.
    Checking,
    /// Authenticated and allowed; render the guarded view.
    Render,
    /// No session; replace history with the login destination.
    RedirectLogin,
    /// Authenticated but the role is not in the allow-list.
    RedirectUnauthorized,
}

/// Pure guard decision. An empty `required` set admits any authenticated
/// identity.
pub fn authorize(loading: bool, current: Option<Role>, required: &[Role]) -> RouteDecision {
    if loading {
        return RouteDecision::Checking;
    }
    let Some(role) = current else {
        return RouteDecision::RedirectLogin;
    };
    if !required.is_empty() && !required.contains(&role) {
        return RouteDecision::RedirectUnauthorized;
    }
    RouteDecision::Render
}

fn replace_history() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}

/// Guard component wrapping a protected view.
#[component]
pub fn Protected(
    /// Roles allowed to render the children; empty admits any authenticated user.
    #[prop(optional)]
    roles: &'static [Role],
    children: ChildrenFn,
) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let decision = move || authorize(session.is_loading(), session.current_role(), roles);

    Effect::new(move || match decision() {
        RouteDecision::RedirectLogin => navigate("/login", replace_history()),
        RouteDecision::RedirectUnauthorized => navigate("/unauthorized", replace_history()),
        RouteDecision::Checking | RouteDecision::Render => {}
    });

    view! {
        {move || match decision() {
            RouteDecision::Render => children(),
            RouteDecision::Checking => {
                view! { <div class="route-guard route-guard--checking">"Loading..."</div> }.into_any()
            }
            RouteDecision::RedirectLogin | RouteDecision::RedirectUnauthorized => {
                view! { <div class="route-guard"></div> }.into_any()
            }
        }}
    }
}
