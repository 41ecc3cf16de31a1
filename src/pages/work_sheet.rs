//! Employee worksheet: add, edit, and delete daily work entries.

#[cfg(test)]
#[path = "work_sheet_test.rs"]
mod work_sheet_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::gateway::Gateway;
use crate::net::types::{WorkSheet, WorkSheetInput};
use crate::state::notify::NotifyStore;

/// Task categories offered by the entry form.
pub const TASK_OPTIONS: [&str; 6] = [
    "Sales",
    "Support",
    "Content",
    "Paper-work",
    "Development",
    "Marketing",
];

/// Validate form fields into a worksheet payload.
fn parse_work_sheet_input(task: &str, hours: &str, date: &str) -> Result<WorkSheetInput, &'static str> {
    if task.is_empty() {
        return Err("Select a task.");
    }
    let hours_worked: f64 = hours.trim().parse().map_err(|_| "Hours must be a number.")?;
    if hours_worked <= 0.0 {
        return Err("Hours must be greater than zero.");
    }
    if date.is_empty() {
        return Err("Pick a date.");
    }
    Ok(WorkSheetInput {
        task: task.to_owned(),
        hours_worked,
        date: date.to_owned(),
    })
}

/// Entries sorted newest first by ISO date.
fn sort_newest_first(mut sheets: Vec<WorkSheet>) -> Vec<WorkSheet> {
    sheets.sort_by(|a, b| b.date.cmp(&a.date));
    sheets
}

/// Today's date as ISO `YYYY-MM-DD`, for the form default.
fn today_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        let iso: String = js_sys::Date::new_0().to_iso_string().into();
        iso.chars().take(10).collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

#[component]
pub fn WorkSheetPage() -> impl IntoView {
    let notify = expect_context::<NotifyStore>();
    let gateway = expect_context::<Gateway>();

    let sheets = LocalResource::new(move || api::fetch_work_sheets(gateway));

    let task = RwSignal::new(String::new());
    let hours = RwSignal::new(String::new());
    let date = RwSignal::new(today_iso());
    let busy = RwSignal::new(false);

    // Edit dialog state; `None` means closed.
    let editing = RwSignal::new(None::<WorkSheet>);
    let edit_task = RwSignal::new(String::new());
    let edit_hours = RwSignal::new(String::new());
    let edit_date = RwSignal::new(String::new());

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match parse_work_sheet_input(&task.get(), &hours.get(), &date.get()) {
            Ok(input) => input,
            Err(message) => {
                notify.error(message);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::create_work_sheet(gateway, &input).await {
                Ok(()) => {
                    notify.success("Work entry added!");
                    task.set(String::new());
                    hours.set(String::new());
                    date.set(today_iso());
                    sheets.refetch();
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

    let open_edit = move |sheet: WorkSheet| {
        edit_task.set(sheet.task.clone());
        edit_hours.set(sheet.hours_worked.to_string());
        edit_date.set(sheet.date.clone());
        editing.set(Some(sheet));
    };

    let on_save_edit = move |_| {
        let Some(sheet) = editing.get() else {
            return;
        };
        if busy.get() {
            return;
        }
        let input =
            match parse_work_sheet_input(&edit_task.get(), &edit_hours.get(), &edit_date.get()) {
                Ok(input) => input,
                Err(message) => {
                    notify.error(message);
                    return;
                }
            };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::update_work_sheet(gateway, &sheet.id, &input).await {
                Ok(()) => {
                    notify.success("Entry updated!");
                    editing.set(None);
                    sheets.refetch();
                }
                Err(failure) => notify.error(failure.to_string()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (sheet, input);
            busy.set(false);
        }
    };

    let on_delete = move |id: String| {
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::delete_work_sheet(gateway, &id).await {
                Ok(()) => {
                    notify.success("Entry deleted!");
                    sheets.refetch();
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

    view! {
        <div class="worksheet-page">
            <header class="worksheet-page__header">
                <h1>"Work Sheet"</h1>
                <p>"Track your daily tasks and work hours"</p>
            </header>

            <form class="worksheet-form" on:submit=on_add>
                <select
                    class="worksheet-form__field"
                    prop:value=move || task.get()
                    on:change=move |ev| task.set(event_target_value(&ev))
                >
                    <option value="">"Select a task"</option>
                    {TASK_OPTIONS
                        .iter()
                        .map(|option| view! { <option value=*option>{*option}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <input
                    class="worksheet-form__field"
                    type="number"
                    step="0.5"
                    placeholder="Hours worked"
                    prop:value=move || hours.get()
                    on:input=move |ev| hours.set(event_target_value(&ev))
                />
                <input
                    class="worksheet-form__field"
                    type="date"
                    prop:value=move || date.get()
                    on:input=move |ev| date.set(event_target_value(&ev))
                />
                <button class="worksheet-form__submit" type="submit" disabled=move || busy.get()>
                    "Add Entry"
                </button>
            </form>

            <Suspense fallback=move || view! { <p>"Loading entries..."</p> }>
                {move || {
                    sheets
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                let list = sort_newest_first(list);
                                view! {
                                    <table class="worksheet-table">
                                        <thead>
                                            <tr>
                                                <th>"Task"</th>
                                                <th>"Hours"</th>
                                                <th>"Date"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|sheet| {
                                                    let delete_id = sheet.id.clone();
                                                    let edit_sheet = sheet.clone();
                                                    view! {
                                                        <tr>
                                                            <td>{sheet.task.clone()}</td>
                                                            <td>{sheet.hours_worked}</td>
                                                            <td>{sheet.date.clone()}</td>
                                                            <td class="worksheet-table__actions">
                                                                <button
                                                                    class="worksheet-table__edit"
                                                                    on:click=move |_| open_edit(edit_sheet.clone())
                                                                >
                                                                    "Edit"
                                                                </button>
                                                                <button
                                                                    class="worksheet-table__delete"
                                                                    disabled=move || busy.get()
                                                                    on:click=move |_| on_delete(delete_id.clone())
                                                                >
                                                                    "Delete"
                                                                </button>
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
                                view! { <p class="worksheet-error">{failure.to_string()}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <Show when=move || editing.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| editing.set(None)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Edit Entry"</h2>
                        <label class="dialog__label">
                            "Task"
                            <select
                                class="dialog__input"
                                prop:value=move || edit_task.get()
                                on:change=move |ev| edit_task.set(event_target_value(&ev))
                            >
                                {TASK_OPTIONS
                                    .iter()
                                    .map(|option| view! { <option value=*option>{*option}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        <label class="dialog__label">
                            "Hours"
                            <input
                                class="dialog__input"
                                type="number"
                                step="0.5"
                                prop:value=move || edit_hours.get()
                                on:input=move |ev| edit_hours.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Date"
                            <input
                                class="dialog__input"
                                type="date"
                                prop:value=move || edit_date.get()
                                on:input=move |ev| edit_date.set(event_target_value(&ev))
                            />
                        </label>
                        <div class="dialog__actions">
                            <button class="dialog__cancel" on:click=move |_| editing.set(None)>
                                "Cancel"
                            </button>
                            <button
                                class="dialog__confirm"
                                disabled=move || busy.get()
                                on:click=on_save_edit
                            >
                                "Save"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
