//! Landing page for authenticated users denied by a route's role gate.

use leptos::prelude::*;

use crate::components::navbar::dashboard_target;
use crate::state::session::SessionStore;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    view! {
        <div class="unauthorized-page">
            <h1>"Access Denied"</h1>
            <p class="unauthorized-page__message">
                "Your account does not have permission to view that page."
            </p>
            <a
                class="unauthorized-page__back"
                href=move || dashboard_target(session.current_role())
            >
                "Back to your dashboard"
            </a>
        </div>
    }
}
