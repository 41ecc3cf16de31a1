//! Login page with email/password sign-in and demo credentials.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::gateway::Gateway;
use crate::net::types::LoginRequest;
use crate::state::notify::NotifyStore;
use crate::state::session::SessionStore;

/// Trim and require both credential fields.
fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(LoginRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let notify = expect_context::<NotifyStore>();
    let gateway = expect_context::<Gateway>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    // Already signed in, skip the form.
    Effect::new(move || {
        if session.is_authenticated() && !session.is_loading() {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.is_loading() {
            return;
        }
        error.set(String::new());
        let request = match validate_login_input(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(failure) = crate::net::auth::login(session, notify, gateway, &request).await {
                error.set(failure.to_string());
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (notify, gateway, request);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Welcome Back"</h1>
                <p class="login-card__subtitle">"Sign in to your WorkFlow Pro account"</p>

                <Show when=move || !error.get().is_empty()>
                    <p class="login-error">{move || error.get()}</p>
                </Show>

                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        "Email Address"
                        <input
                            class="login-input"
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                email.set(event_target_value(&ev));
                                error.set(String::new());
                            }
                        />
                    </label>
                    <label class="login-label">
                        "Password"
                        <input
                            class="login-input"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                error.set(String::new());
                            }
                        />
                    </label>
                    <button
                        class="login-toggle"
                        type="button"
                        on:click=move |_| show_password.update(|shown| *shown = !*shown)
                    >
                        {move || if show_password.get() { "Hide password" } else { "Show password" }}
                    </button>
                    <button class="login-button" type="submit" disabled=move || session.is_loading()>
                        {move || if session.is_loading() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <p class="login-footer">
                    "Don't have an account? " <a href="/register">"Sign up here"</a>
                </p>

                <div class="login-demo">
                    <h2>"Demo Credentials:"</h2>
                    <p>"Admin: admin@workflowpro.com / Password@123"</p>
                    <p>"HR: jane@example.com / Password@123"</p>
                    <p>"Employee: john@example.com / Password@123"</p>
                </div>
            </div>
        </div>
    }
}
