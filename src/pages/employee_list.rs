//! HR employee roster: verification, pay requests, and detail links.

#[cfg(test)]
#[path = "employee_list_test.rs"]
mod employee_list_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::gateway::Gateway;
use crate::net::types::{EmployeeSummary, PayrollRequestInput};
use crate::state::notify::NotifyStore;
use crate::util::format::{MONTHS, format_currency};

fn verified_count(employees: &[EmployeeSummary]) -> usize {
    employees.iter().filter(|employee| employee.verified).count()
}

/// Validate the pay-request dialog fields.
fn validate_pay_request(month: &str, year: &str) -> Result<(String, i32), &'static str> {
    if month.is_empty() {
        return Err("Please select month and year");
    }
    let year: i32 = year
        .trim()
        .parse()
        .map_err(|_| "Please select month and year")?;
    Ok((month.to_owned(), year))
}

#[component]
pub fn EmployeeListPage() -> impl IntoView {
    let notify = expect_context::<NotifyStore>();
    let gateway = expect_context::<Gateway>();

    let employees = LocalResource::new(move || api::fetch_employee_list(gateway));

    // Pay-request dialog; `None` means closed.
    let paying = RwSignal::new(None::<EmployeeSummary>);
    let pay_month = RwSignal::new(String::new());
    let pay_year = RwSignal::new(String::from("2025"));
    let busy = RwSignal::new(false);

    let on_toggle_verified = move |id: String| {
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::toggle_verified(gateway, &id).await {
                Ok(()) => {
                    notify.success("Verification status updated!");
                    employees.refetch();
                }
                Err(failure) => notify.error(failure.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            busy.set(false);
        }
    };

    let on_send_payment = move |_| {
        let Some(employee) = paying.get() else {
            return;
        };
        if busy.get() {
            return;
        }
        let (month, year) = match validate_pay_request(&pay_month.get(), &pay_year.get()) {
            Ok(fields) => fields,
            Err(message) => {
                notify.error(message);
                return;
            }
        };
        let input = PayrollRequestInput {
            employee_id: employee.id.clone(),
            month,
            year,
            amount: employee.salary.unwrap_or_default(),
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::request_payment(gateway, &input).await {
                Ok(()) => {
                    notify.success("Payment request sent!");
                    paying.set(None);
                }
                Err(failure) => notify.error(failure.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = input;
            busy.set(false);
        }
    };

    view! {
        <div class="roster-page">
            <header class="roster-page__header">
                <h1>"Employee Management"</h1>
                <p>"Manage employee verification and payments"</p>
            </header>

            <Suspense fallback=move || view! { <p>"Loading employees..."</p> }>
                {move || {
                    employees
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                let verified = verified_count(&list);
                                view! {
                                    <div class="roster-summary">
                                        <span>{format!("{} employees", list.len())}</span>
                                        <span>{format!("{verified} verified")}</span>
                                        <span>{format!("{} unverified", list.len() - verified)}</span>
                                    </div>
                                    <table class="roster-table">
                                        <thead>
                                            <tr>
                                                <th>"Name"</th>
                                                <th>"Email"</th>
                                                <th>"Verified"</th>
                                                <th>"Bank Account"</th>
                                                <th>"Salary"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|employee| {
                                                    let toggle_id = employee.id.clone();
                                                    let details_href = format!("/details/{}", employee.id);
                                                    let pay_employee = employee.clone();
                                                    let pay_disabled = !employee.verified;
                                                    view! {
                                                        <tr>
                                                            <td>{employee.name.clone()}</td>
                                                            <td>{employee.email.clone()}</td>
                                                            <td>
                                                                <button
                                                                    class="roster-table__verify"
                                                                    disabled=move || busy.get()
                                                                    on:click=move |_| on_toggle_verified(
                                                                        toggle_id.clone(),
                                                                    )
                                                                >
                                                                    {if employee.verified {
                                                                        "Verified"
                                                                    } else {
                                                                        "Unverified"
                                                                    }}
                                                                </button>
                                                            </td>
                                                            <td>
                                                                {employee
                                                                    .bank_account
                                                                    .clone()
                                                                    .unwrap_or_else(|| "—".to_owned())}
                                                            </td>
                                                            <td>
                                                                {employee
                                                                    .salary
                                                                    .map(format_currency)
                                                                    .unwrap_or_else(|| "—".to_owned())}
                                                            </td>
                                                            <td class="roster-table__actions">
                                                                <button
                                                                    class="roster-table__pay"
                                                                    disabled=pay_disabled
                                                                    on:click=move |_| paying.set(
                                                                        Some(pay_employee.clone()),
                                                                    )
                                                                >
                                                                    "Pay"
                                                                </button>
                                                                <a class="roster-table__details" href=details_href>
                                                                    "Details"
                                                                </a>
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                            Err(failure) => {
                                view! { <p class="roster-error">{failure.to_string()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>

            <Show when=move || paying.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| paying.set(None)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>
                            {move || {
                                paying
                                    .get()
                                    .map(|employee| format!("Pay {}", employee.name))
                                    .unwrap_or_default()
                            }}
                        </h2>
                        <p class="dialog__detail">
                            {move || {
                                paying
                                    .get()
                                    .and_then(|employee| employee.salary)
                                    .map(|salary| format!("Amount: {}", format_currency(salary)))
                                    .unwrap_or_default()
                            }}
                        </p>
                        <label class="dialog__label">
                            "Month"
                            <select
                                class="dialog__input"
                                prop:value=move || pay_month.get()
                                on:change=move |ev| pay_month.set(event_target_value(&ev))
                            >
                                <option value="">"Select month"</option>
                                {MONTHS
                                    .iter()
                                    .map(|month| view! { <option value=*month>{*month}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        <label class="dialog__label">
                            "Year"
                            <input
                                class="dialog__input"
                                type="number"
                                prop:value=move || pay_year.get()
                                on:input=move |ev| pay_year.set(event_target_value(&ev))
                            />
                        </label>
                        <div class="dialog__actions">
                            <button class="dialog__cancel" on:click=move |_| paying.set(None)>
                                "Cancel"
                            </button>
                            <button
                                class="dialog__confirm"
                                disabled=move || busy.get()
                                on:click=on_send_payment
                            >
                                "Send Request"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
