//! Top navigation bar with session-aware links and the user menu.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::net::auth;
use crate::net::types::Role;
use crate::state::notify::NotifyStore;
use crate::state::session::SessionStore;

/// Landing page for the "Dashboard" link, chosen by role.
pub fn dashboard_target(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Employee) => "/work-sheet",
        Some(Role::Hr) => "/employee-list",
        Some(Role::Admin) => "/all-employee-list",
        None => "/dashboard",
    }
}

/// Application navbar. Shows sign-in/sign-up links when logged out and the
/// avatar menu with a logout action when logged in.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let notify = expect_context::<NotifyStore>();

    let menu_open = RwSignal::new(false);

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                "WorkFlow Pro"
            </a>

            <div class="navbar__links">
                <a class="navbar__link" href="/">
                    "Home"
                </a>
                <Show when=move || session.is_authenticated()>
                    <a class="navbar__link" href=move || dashboard_target(session.current_role())>
                        "Dashboard"
                    </a>
                </Show>
                <a class="navbar__link" href="/contact-us">
                    "Contact Us"
                </a>
            </div>

            <Show
                when=move || session.is_authenticated()
                fallback=|| {
                    view! {
                        <div class="navbar__auth">
                            <a class="navbar__link" href="/login">
                                "Login"
                            </a>
                            <a class="navbar__link navbar__link--primary" href="/register">
                                "Register"
                            </a>
                        </div>
                    }
                }
            >
                <div class="navbar__user">
                    <button
                        class="navbar__avatar"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        {move || {
                            session
                                .identity()
                                .and_then(|identity| identity.photo)
                                .map_or_else(
                                    || view! { <span class="navbar__avatar-initial">"@"</span> }.into_any(),
                                    |photo| view! { <img class="navbar__avatar-photo" src=photo/> }.into_any(),
                                )
                        }}
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class="navbar__menu">
                            <div class="navbar__menu-header">
                                <span class="navbar__menu-name">
                                    {move || session.identity().map(|i| i.name).unwrap_or_default()}
                                </span>
                                <span class="navbar__menu-role">
                                    {move || {
                                        session
                                            .current_role()
                                            .map(|role| role.as_str())
                                            .unwrap_or_default()
                                    }}
                                </span>
                            </div>
                            <button
                                class="navbar__menu-logout"
                                on:click=move |_| {
                                    menu_open.set(false);
                                    auth::logout(session, notify);
                                    #[cfg(feature = "hydrate")]
                                    {
                                        if let Some(window) = web_sys::window() {
                                            let _ = window.location().set_href("/");
                                        }
                                    }
                                }
                            >
                                "Logout"
                            </button>
                        </div>
                    </Show>
                </div>
            </Show>
        </nav>
    }
}
