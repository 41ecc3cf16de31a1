//! Employee detail view with salary history and admin actions.

#[cfg(test)]
#[path = "employee_details_test.rs"]
mod employee_details_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api;
use crate::net::gateway::Gateway;
use crate::net::types::{Role, SalaryPayment, SalaryUpdate};
use crate::state::notify::NotifyStore;
use crate::state::session::SessionStore;
use crate::util::format::format_currency;

fn max_amount(payments: &[SalaryPayment]) -> f64 {
    payments
        .iter()
        .map(|payment| payment.amount)
        .fold(0.0, f64::max)
}

/// Bar height percentage for one month against the largest payment.
fn bar_percent(amount: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (amount / max * 100.0).clamp(0.0, 100.0)
}

fn parse_new_salary(raw: &str) -> Result<f64, &'static str> {
    let salary: f64 = raw.trim().parse().map_err(|_| "Enter a valid salary.")?;
    if salary <= 0.0 {
        return Err("Enter a valid salary.");
    }
    Ok(salary)
}

#[component]
pub fn EmployeeDetailsPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let notify = expect_context::<NotifyStore>();
    let gateway = expect_context::<Gateway>();
    let params = use_params_map();

    let employee_id = move || params.read().get("id").unwrap_or_default();

    let details = LocalResource::new(move || {
        let id = employee_id();
        async move { api::fetch_employee_details(gateway, &id).await }
    });

    let new_salary = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let is_admin = move || session.current_role() == Some(Role::Admin);

    let on_fire = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let id = employee_id();
            leptos::task::spawn_local(async move {
                match api::fire_employee(gateway, &id).await {
                    Ok(()) => {
                        notify.success("User fired!");
                        details.refetch();
                    }
                    Err(failure) => notify.error(failure.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        busy.set(false);
    };

    let on_promote = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let id = employee_id();
            leptos::task::spawn_local(async move {
                match api::promote_to_hr(gateway, &id).await {
                    Ok(()) => {
                        notify.success("User promoted to HR!");
                        details.refetch();
                    }
                    Err(failure) => notify.error(failure.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        busy.set(false);
    };

    let on_update_salary = move |_| {
        if busy.get() {
            return;
        }
        let salary = match parse_new_salary(&new_salary.get()) {
            Ok(salary) => salary,
            Err(message) => {
                notify.error(message);
                return;
            }
        };
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let id = employee_id();
            leptos::task::spawn_local(async move {
                let update = SalaryUpdate { new_salary: salary };
                match api::update_salary(gateway, &id, &update).await {
                    Ok(()) => {
                        notify.success("Salary updated!");
                        new_salary.set(String::new());
                        details.refetch();
                    }
                    Err(failure) => notify.error(failure.to_string()),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = salary;
            busy.set(false);
        }
    };

    view! {
        <div class="details-page">
            <Suspense fallback=move || view! { <p>"Loading employee..."</p> }>
                {move || {
                    details
                        .get()
                        .map(|result| match result {
                            Ok(employee) => {
                                let max = max_amount(&employee.payments);
                                view! {
                                    <header class="details-header">
                                        {employee
                                            .photo
                                            .clone()
                                            .map(|photo| {
                                                view! { <img class="details-header__photo" src=photo/> }
                                            })}
                                        <div>
                                            <h1>{employee.name.clone()}</h1>
                                            <p class="details-header__designation">
                                                {employee.designation.clone().unwrap_or_default()}
                                            </p>
                                            <p class="details-header__meta">
                                                {format!(
                                                    "Role: {} · Status: {} · Current Salary: {}",
                                                    employee.role,
                                                    if employee.fired { "Fired" } else { "Active" },
                                                    employee
                                                        .salary
                                                        .map(format_currency)
                                                        .unwrap_or_else(|| "—".to_owned()),
                                                )}
                                            </p>
                                        </div>
                                    </header>

                                    <Show when=is_admin>
                                        <div class="details-actions">
                                            <button
                                                class="details-actions__fire"
                                                disabled={
                                                    let fired = employee.fired;
                                                    move || fired || busy.get()
                                                }
                                                on:click=on_fire
                                            >
                                                {if employee.fired { "Fired" } else { "Fire" }}
                                            </button>
                                            <Show when={
                                                let promotable = employee.role != Role::Hr
                                                    && !employee.fired;
                                                move || promotable
                                            }>
                                                <button
                                                    class="details-actions__promote"
                                                    disabled=move || busy.get()
                                                    on:click=on_promote
                                                >
                                                    "Promote to HR"
                                                </button>
                                            </Show>
                                            <div class="details-actions__salary">
                                                <input
                                                    class="details-actions__salary-input"
                                                    type="number"
                                                    placeholder="New salary"
                                                    prop:value=move || new_salary.get()
                                                    on:input=move |ev| new_salary.set(
                                                        event_target_value(&ev),
                                                    )
                                                />
                                                <button
                                                    class="details-actions__salary-save"
                                                    disabled=move || busy.get()
                                                    on:click=on_update_salary
                                                >
                                                    "Update Salary"
                                                </button>
                                            </div>
                                        </div>
                                    </Show>

                                    <section class="details-history">
                                        <h2>"Salary History"</h2>
                                        <div class="details-history__bars">
                                            {employee
                                                .payments
                                                .iter()
                                                .map(|payment| {
                                                    let height = bar_percent(payment.amount, max);
                                                    view! {
                                                        <div class="details-history__column">
                                                            <div
                                                                class="details-history__bar"
                                                                style=format!("height: {height:.0}%")
                                                                title=format_currency(payment.amount)
                                                            ></div>
                                                            <span class="details-history__label">
                                                                {format!("{} {}", payment.month, payment.year)}
                                                            </span>
                                                        </div>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    </section>
                                }
                                    .into_any()
                            }
                            Err(failure) => {
                                view! { <p class="details-error">{failure.to_string()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
