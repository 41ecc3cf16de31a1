//! Admin roster of all verified staff with fire/promote/salary actions.

#[cfg(test)]
#[path = "all_employees_test.rs"]
mod all_employees_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::gateway::Gateway;
use crate::net::types::{Role, SalaryUpdate, StaffMember};
use crate::state::notify::NotifyStore;
use crate::util::format::format_currency;

/// Roster display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum ViewMode {
    #[default]
    Table,
    Grid,
}

fn active_count(staff: &[StaffMember]) -> usize {
    staff.iter().filter(|member| !member.fired).count()
}

#[component]
pub fn AllEmployeesPage() -> impl IntoView {
    let notify = expect_context::<NotifyStore>();
    let gateway = expect_context::<Gateway>();

    let staff = LocalResource::new(move || api::fetch_all_staff(gateway));

    let view_mode = RwSignal::new(ViewMode::default());
    let busy = RwSignal::new(false);

    // Inline salary editor; holds the staff id being edited.
    let editing_salary = RwSignal::new(None::<String>);
    let salary_input = RwSignal::new(String::new());

    let on_fire = move |id: String| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::fire_employee(gateway, &id).await {
                Ok(()) => {
                    notify.success("User fired!");
                    staff.refetch();
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

    let on_promote = move |id: String| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::promote_to_hr(gateway, &id).await {
                Ok(()) => {
                    notify.success("User promoted to HR!");
                    staff.refetch();
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

    let on_save_salary = move |id: String| {
        if busy.get() {
            return;
        }
        let Ok(new_salary) = salary_input.get().trim().parse::<f64>() else {
            notify.error("Enter a valid salary.");
            return;
        };
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let update = SalaryUpdate { new_salary };
            match api::update_salary(gateway, &id, &update).await {
                Ok(()) => {
                    notify.success("Salary updated!");
                    editing_salary.set(None);
                    salary_input.set(String::new());
                    staff.refetch();
                }
                Err(failure) => notify.error(failure.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, new_salary);
            busy.set(false);
        }
    };

    let staff_row = move |member: StaffMember| {
        let fire_id = member.id.clone();
        let promote_id = member.id.clone();
        let save_id = member.id.clone();
        let edit_id = member.id.clone();
        let row_id = member.id.clone();
        let details_href = format!("/details/{}", member.id);
        let promotable = member.role == Role::Employee && !member.fired;
        let fired = member.fired;
        view! {
            <tr class=move || if fired { "staff-row staff-row--fired" } else { "staff-row" }>
                <td>{member.name.clone()}</td>
                <td>{member.email.clone()}</td>
                <td>{member.designation.clone().unwrap_or_default()}</td>
                <td>{member.role.as_str()}</td>
                <td>
                    {move || {
                        if editing_salary.get().as_deref() == Some(row_id.as_str()) {
                            view! {
                                <span class="staff-row__salary-edit">
                                    <input
                                        class="staff-row__salary-input"
                                        type="number"
                                        prop:value=move || salary_input.get()
                                        on:input=move |ev| salary_input.set(event_target_value(&ev))
                                    />
                                    <button
                                        class="staff-row__salary-save"
                                        disabled=move || busy.get()
                                        on:click={
                                            let save_id = save_id.clone();
                                            move |_| on_save_salary(save_id.clone())
                                        }
                                    >
                                        "Save"
                                    </button>
                                </span>
                            }
                                .into_any()
                        } else {
                            let edit_id = edit_id.clone();
                            view! {
                                <button
                                    class="staff-row__salary"
                                    on:click=move |_| {
                                        salary_input.set(String::new());
                                        editing_salary.set(Some(edit_id.clone()));
                                    }
                                >
                                    {member
                                        .salary
                                        .map(format_currency)
                                        .unwrap_or_else(|| "—".to_owned())}
                                </button>
                            }
                                .into_any()
                        }
                    }}
                </td>
                <td class="staff-row__actions">
                    <button
                        class="staff-row__fire"
                        disabled=move || fired || busy.get()
                        on:click=move |_| on_fire(fire_id.clone())
                    >
                        {if fired { "Fired" } else { "Fire" }}
                    </button>
                    <Show when=move || promotable>
                        <button
                            class="staff-row__promote"
                            disabled=move || busy.get()
                            on:click={
                                let promote_id = promote_id.clone();
                                move |_| on_promote(promote_id.clone())
                            }
                        >
                            "Make HR"
                        </button>
                    </Show>
                    <a class="staff-row__details" href=details_href>
                        "Details"
                    </a>
                </td>
            </tr>
        }
    };

    view! {
        <div class="staff-page">
            <header class="staff-page__header">
                <h1>"All Employees"</h1>
                <p>"Manage all employees and HR staff"</p>
                <div class="staff-page__modes">
                    <button
                        class="staff-page__mode"
                        on:click=move |_| view_mode.set(ViewMode::Table)
                    >
                        "Table"
                    </button>
                    <button
                        class="staff-page__mode"
                        on:click=move |_| view_mode.set(ViewMode::Grid)
                    >
                        "Grid"
                    </button>
                </div>
            </header>

            <Suspense fallback=move || view! { <p>"Loading staff..."</p> }>
                {move || {
                    staff
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                let active = active_count(&list);
                                match view_mode.get() {
                                    ViewMode::Table => {
                                        view! {
                                            <div class="staff-summary">
                                                <span>{format!("{} staff", list.len())}</span>
                                                <span>{format!("{active} active")}</span>
                                            </div>
                                            <table class="staff-table">
                                                <thead>
                                                    <tr>
                                                        <th>"Name"</th>
                                                        <th>"Email"</th>
                                                        <th>"Designation"</th>
                                                        <th>"Role"</th>
                                                        <th>"Salary"</th>
                                                        <th></th>
                                                    </tr>
                                                </thead>
                                                <tbody>
                                                    {list
                                                        .into_iter()
                                                        .map(staff_row)
                                                        .collect::<Vec<_>>()}
                                                </tbody>
                                            </table>
                                        }
                                            .into_any()
                                    }
                                    ViewMode::Grid => {
                                        view! {
                                            <div class="staff-grid">
                                                {list
                                                    .into_iter()
                                                    .map(|member| {
                                                        view! {
                                                            <div class="staff-card">
                                                                {member
                                                                    .photo
                                                                    .clone()
                                                                    .map(|photo| {
                                                                        view! {
                                                                            <img class="staff-card__photo" src=photo/>
                                                                        }
                                                                    })}
                                                                <span class="staff-card__name">
                                                                    {member.name.clone()}
                                                                </span>
                                                                <span class="staff-card__designation">
                                                                    {member
                                                                        .designation
                                                                        .clone()
                                                                        .unwrap_or_default()}
                                                                </span>
                                                                <span class="staff-card__role">
                                                                    {member.role.as_str()}
                                                                </span>
                                                            </div>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        }
                                            .into_any()
                                    }
                                }
                            }
                            Err(failure) => {
                                view! { <p class="staff-error">{failure.to_string()}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
