//! Admin payroll processing: approve pending salary requests.

#[cfg(test)]
#[path = "payroll_test.rs"]
mod payroll_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::gateway::Gateway;
use crate::net::types::{PayrollRequest, PayrollStatus};
use crate::state::notify::NotifyStore;
use crate::util::format::format_currency;

/// Split requests into (pending, completed), preserving order.
fn split_by_status(requests: Vec<PayrollRequest>) -> (Vec<PayrollRequest>, Vec<PayrollRequest>) {
    requests
        .into_iter()
        .partition(|request| request.status == PayrollStatus::Pending)
}

#[component]
pub fn PayrollPage() -> impl IntoView {
    let notify = expect_context::<NotifyStore>();
    let gateway = expect_context::<Gateway>();

    let requests = LocalResource::new(move || api::fetch_payroll_requests(gateway));

    let busy = RwSignal::new(false);

    let on_approve = move |id: String| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::approve_payroll_request(gateway, &id).await {
                Ok(()) => {
                    notify.success("Payment approved!");
                    requests.refetch();
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

    let request_row = move |request: PayrollRequest, pending: bool| {
        let approve_id = request.id.clone();
        view! {
            <tr>
                <td>
                    <div class="payroll-table__name">{request.employee_name.clone()}</div>
                    <div class="payroll-table__email">{request.employee_email.clone()}</div>
                </td>
                <td>{format_currency(request.salary)}</td>
                <td>{format!("{} {}", request.month, request.year)}</td>
                <td>{request.request_date.clone().unwrap_or_else(|| "—".to_owned())}</td>
                <td>
                    {if pending {
                        view! {
                            <button
                                class="payroll-table__approve"
                                disabled=move || busy.get()
                                on:click=move |_| on_approve(approve_id.clone())
                            >
                                "Approve & Pay"
                            </button>
                        }
                            .into_any()
                    } else {
                        view! {
                            <span class="payroll-table__paid">
                                {format!(
                                    "Paid {}",
                                    request.payment_date.clone().unwrap_or_default(),
                                )}
                            </span>
                        }
                            .into_any()
                    }}
                </td>
            </tr>
        }
    };

    view! {
        <div class="payroll-page">
            <header class="payroll-page__header">
                <h1>"Payroll Management"</h1>
                <p>"Process and approve employee salary payments"</p>
            </header>

            <Suspense fallback=move || view! { <p>"Loading payroll requests..."</p> }>
                {move || {
                    requests
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                let (pending, completed) = split_by_status(list);
                                view! {
                                    <section class="payroll-section">
                                        <h2>{format!("Pending Requests ({})", pending.len())}</h2>
                                        <table class="payroll-table">
                                            <thead>
                                                <tr>
                                                    <th>"Employee"</th>
                                                    <th>"Amount"</th>
                                                    <th>"Period"</th>
                                                    <th>"Requested"</th>
                                                    <th></th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {pending
                                                    .into_iter()
                                                    .map(|request| request_row(request, true))
                                                    .collect::<Vec<_>>()}
                                            </tbody>
                                        </table>
                                    </section>

                                    <section class="payroll-section">
                                        <h2>{format!("Completed ({})", completed.len())}</h2>
                                        <table class="payroll-table">
                                            <thead>
                                                <tr>
                                                    <th>"Employee"</th>
                                                    <th>"Amount"</th>
                                                    <th>"Period"</th>
                                                    <th>"Requested"</th>
                                                    <th></th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {completed
                                                    .into_iter()
                                                    .map(|request| request_row(request, false))
                                                    .collect::<Vec<_>>()}
                                            </tbody>
                                        </table>
                                    </section>
                                }
                                    .into_any()
                            }
                            Err(failure) => {
                                view! { <p class="payroll-error">{failure.to_string()}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
