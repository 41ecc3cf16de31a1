//! HR progress view: all work entries, filterable by employee and month.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::gateway::Gateway;
use crate::net::types::{EmployeeSummary, WorkSheet};
use crate::util::format::{MONTHS, month_index_from_iso};

/// Apply the employee/month filters. An empty employee filter matches every
/// owner; `month_index` is 0-based.
fn filter_work_sheets(
    sheets: &[WorkSheet],
    employee_email: &str,
    month_index: Option<u32>,
) -> Vec<WorkSheet> {
    sheets
        .iter()
        .filter(|sheet| {
            let matches_employee = employee_email.is_empty()
                || sheet.employee_email.as_deref() == Some(employee_email);
            let matches_month = month_index
                .is_none_or(|selected| month_index_from_iso(&sheet.date) == Some(selected));
            matches_employee && matches_month
        })
        .cloned()
        .collect()
}

fn total_hours(sheets: &[WorkSheet]) -> f64 {
    sheets.iter().map(|sheet| sheet.hours_worked).sum()
}

/// Display name for an owner email, falling back to the email itself.
fn employee_name<'a>(employees: &'a [EmployeeSummary], email: &'a str) -> &'a str {
    employees
        .iter()
        .find(|employee| employee.email == email)
        .map_or(email, |employee| employee.name.as_str())
}

#[component]
pub fn ProgressPage() -> impl IntoView {
    let gateway = expect_context::<Gateway>();

    let sheets = LocalResource::new(move || api::fetch_all_work_sheets(gateway));
    let employees = LocalResource::new(move || api::fetch_all_employees(gateway));

    let selected_employee = RwSignal::new(String::new());
    let selected_month = RwSignal::new(String::new());

    let month_filter = move || selected_month.get().parse::<u32>().ok();

    view! {
        <div class="progress-page">
            <header class="progress-page__header">
                <h1>"Progress Tracking"</h1>
                <p>"Monitor employee work progress"</p>
            </header>

            <div class="progress-filters">
                <select
                    class="progress-filters__field"
                    prop:value=move || selected_employee.get()
                    on:change=move |ev| selected_employee.set(event_target_value(&ev))
                >
                    <option value="">"All employees"</option>
                    {move || {
                        employees
                            .get()
                            .and_then(Result::ok)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|employee| {
                                view! {
                                    <option value=employee.email.clone()>{employee.name.clone()}</option>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
                <select
                    class="progress-filters__field"
                    prop:value=move || selected_month.get()
                    on:change=move |ev| selected_month.set(event_target_value(&ev))
                >
                    <option value="">"All months"</option>
                    {MONTHS
                        .iter()
                        .enumerate()
                        .map(|(index, month)| {
                            view! { <option value=index.to_string()>{*month}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            <Suspense fallback=move || view! { <p>"Loading work entries..."</p> }>
                {move || {
                    sheets
                        .get()
                        .map(|result| match result {
                            Ok(all) => {
                                let filtered = filter_work_sheets(
                                    &all,
                                    &selected_employee.get(),
                                    month_filter(),
                                );
                                let hours = total_hours(&filtered);
                                let roster = employees
                                    .get()
                                    .and_then(Result::ok)
                                    .unwrap_or_default();
                                view! {
                                    <div class="progress-summary">
                                        <span>{format!("{} entries", filtered.len())}</span>
                                        <span>{format!("{hours} total hours")}</span>
                                    </div>
                                    <table class="progress-table">
                                        <thead>
                                            <tr>
                                                <th>"Employee"</th>
                                                <th>"Task"</th>
                                                <th>"Hours"</th>
                                                <th>"Date"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {filtered
                                                .into_iter()
                                                .map(|sheet| {
                                                    let owner = sheet
                                                        .employee_email
                                                        .clone()
                                                        .unwrap_or_default();
                                                    let name = employee_name(&roster, &owner).to_owned();
                                                    view! {
                                                        <tr>
                                                            <td>{name}</td>
                                                            <td>{sheet.task.clone()}</td>
                                                            <td>{sheet.hours_worked}</td>
                                                            <td>{sheet.date.clone()}</td>
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
                                view! { <p class="progress-error">{failure.to_string()}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
