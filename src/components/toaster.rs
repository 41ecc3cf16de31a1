//! Toast overlay rendering the notification queue.

use leptos::prelude::*;

use crate::state::notify::{NotifyStore, Toast, toast_class};

/// Auto-dismiss delay for toasts.
#[cfg(feature = "hydrate")]
const TOAST_LIFETIME_MS: u32 = 4_000;

/// Fixed overlay listing active toasts, newest last.
#[component]
pub fn Toaster() -> impl IntoView {
    let notify = expect_context::<NotifyStore>();

    view! {
        <div class="toaster">
            <For each=move || notify.toasts() key=|toast| toast.id let:toast>
                <ToastCard toast=toast/>
            </For>
        </div>
    }
}

#[component]
fn ToastCard(toast: Toast) -> impl IntoView {
    let notify = expect_context::<NotifyStore>();
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
        notify.dismiss(id);
    });

    view! {
        <div class=toast_class(toast.kind) role="status">
            <span class="toast__message">{toast.message.clone()}</span>
            <button class="toast__close" on:click=move |_| notify.dismiss(id)>
                "\u{00d7}"
            </button>
        </div>
    }
}
