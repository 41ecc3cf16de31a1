//! Employee salary payment history.

#[cfg(test)]
#[path = "payment_history_test.rs"]
mod payment_history_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::gateway::Gateway;
use crate::net::types::Payment;
use crate::util::format::{format_currency, month_number};

/// Payments in chronological order (earliest first), as the pay-stub view
/// presents them.
fn sort_chronological(mut payments: Vec<Payment>) -> Vec<Payment> {
    payments.sort_by_key(|payment| (payment.year, month_number(&payment.month)));
    payments
}

/// Sum of all payment amounts.
fn total_paid(payments: &[Payment]) -> f64 {
    payments.iter().map(|payment| payment.amount).sum()
}

#[component]
pub fn PaymentHistoryPage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();

    let payments = LocalResource::new(move || api::fetch_payments(gateway));

    view! {
        <div class="payments-page">
            <header class="payments-page__header">
                <h1>"Payment History"</h1>
                <p>"View your salary payment records"</p>
            </header>

            <Suspense fallback=move || view! { <p>"Loading payments..."</p> }>
                {move || {
                    payments
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                let list = sort_chronological(list);
                                let total = total_paid(&list);
                                view! {
                                    <div class="payments-summary">
                                        <span class="payments-summary__count">
                                            {format!("{} payments", list.len())}
                                        </span>
                                        <span class="payments-summary__total">
                                            {format!("Total received: {}", format_currency(total))}
                                        </span>
                                    </div>
                                    <table class="payments-table">
                                        <thead>
                                            <tr>
                                                <th>"Month"</th>
                                                <th>"Amount"</th>
                                                <th>"Transaction Id"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|payment| {
                                                    view! {
                                                        <tr>
                                                            <td>{format!("{} {}", payment.month, payment.year)}</td>
                                                            <td>{format_currency(payment.amount)}</td>
                                                            <td>
                                                                {payment
                                                                    .transaction_id
                                                                    .unwrap_or_else(|| "—".to_owned())}
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
                                view! { <p class="payments-error">{failure.to_string()}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
