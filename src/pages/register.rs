//! Registration page for new Employee/HR accounts.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::gateway::Gateway;
use crate::net::types::{RegisterRequest, Role};
use crate::state::notify::NotifyStore;
use crate::state::session::SessionStore;
use crate::util::password::validate_password;

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Validate the form fields into a register payload. Admin accounts are not
/// self-service, so only Employee and HR are accepted.
#[allow(clippy::too_many_arguments)]
fn build_register_request(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
    role: &str,
    bank_account: &str,
    salary: &str,
    designation: &str,
    photo: &str,
) -> Result<RegisterRequest, String> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() {
        return Err("Enter your name and email.".to_owned());
    }

    let password_errors = validate_password(password);
    if !password_errors.is_empty() {
        return Err(password_errors.join(" "));
    }
    if password != confirm {
        return Err("Passwords do not match.".to_owned());
    }

    let role = match Role::parse(role) {
        Some(role @ (Role::Employee | Role::Hr)) => role,
        _ => return Err("Select a role.".to_owned()),
    };

    let salary = match salary.trim() {
        "" => None,
        raw => Some(
            raw.parse::<f64>()
                .map_err(|_| "Salary must be a number.".to_owned())?,
        ),
    };

    Ok(RegisterRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        role,
        bank_account: optional(bank_account),
        salary,
        designation: optional(designation),
        photo: optional(photo),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let notify = expect_context::<NotifyStore>();
    let gateway = expect_context::<Gateway>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let bank_account = RwSignal::new(String::new());
    let salary = RwSignal::new(String::new());
    let designation = RwSignal::new(String::new());
    let photo = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    // Live password feedback, mirrored under the field as the user types.
    let password_hints = move || validate_password(&password.get());

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
        let request = match build_register_request(
            &name.get(),
            &email.get(),
            &password.get(),
            &confirm.get(),
            &role.get(),
            &bank_account.get(),
            &salary.get(),
            &designation.get(),
            &photo.get(),
        ) {
            Ok(request) => request,
            Err(message) => {
                error.set(message);
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(failure) =
                crate::net::auth::register(session, notify, gateway, &request).await
            {
                error.set(failure.to_string());
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (notify, gateway, request);
        }
    };

    view! {
        <div class="register-page">
            <div class="register-card">
                <h1>"Create Account"</h1>
                <p class="register-card__subtitle">"Join WorkFlow Pro today"</p>

                <Show when=move || !error.get().is_empty()>
                    <p class="register-error">{move || error.get()}</p>
                </Show>

                <form class="register-form" on:submit=on_submit>
                    <label class="register-label">
                        "Full Name"
                        <input
                            class="register-input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="register-label">
                        "Email Address"
                        <input
                            class="register-input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="register-label">
                        "Password"
                        <input
                            class="register-input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !password.get().is_empty() && !password_hints().is_empty()>
                        <ul class="register-hints">
                            {move || {
                                password_hints()
                                    .into_iter()
                                    .map(|hint| view! { <li>{hint}</li> })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                    <label class="register-label">
                        "Confirm Password"
                        <input
                            class="register-input"
                            type="password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="register-label">
                        "Role"
                        <select
                            class="register-input"
                            prop:value=move || role.get()
                            on:change=move |ev| role.set(event_target_value(&ev))
                        >
                            <option value="">"Select a role"</option>
                            <option value="Employee">"Employee"</option>
                            <option value="HR">"HR"</option>
                        </select>
                    </label>
                    <label class="register-label">
                        "Bank Account Number"
                        <input
                            class="register-input"
                            type="text"
                            prop:value=move || bank_account.get()
                            on:input=move |ev| bank_account.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="register-label">
                        "Monthly Salary"
                        <input
                            class="register-input"
                            type="number"
                            prop:value=move || salary.get()
                            on:input=move |ev| salary.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="register-label">
                        "Designation"
                        <input
                            class="register-input"
                            type="text"
                            placeholder="e.g. Sales Assistant"
                            prop:value=move || designation.get()
                            on:input=move |ev| designation.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="register-label">
                        "Photo URL"
                        <input
                            class="register-input"
                            type="url"
                            prop:value=move || photo.get()
                            on:input=move |ev| photo.set(event_target_value(&ev))
                        />
                    </label>
                    <button
                        class="register-button"
                        type="submit"
                        disabled=move || session.is_loading()
                    >
                        {move || {
                            if session.is_loading() { "Creating account..." } else { "Create Account" }
                        }}
                    </button>
                </form>

                <p class="register-footer">
                    "Already have an account? " <a href="/login">"Sign in here"</a>
                </p>
            </div>
        </div>
    }
}
