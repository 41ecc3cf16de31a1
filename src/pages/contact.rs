//! Contact page with a local-only message form.

use leptos::prelude::*;

use crate::state::notify::NotifyStore;

#[component]
pub fn ContactPage() -> impl IntoView {
    let notify = expect_context::<NotifyStore>();

    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if email.get().trim().is_empty() || message.get().trim().is_empty() {
            notify.error("Enter your email and a message.");
            return;
        }
        notify.success("Message sent! We'll get back to you soon.");
        email.set(String::new());
        message.set(String::new());
    };

    view! {
        <div class="contact-page">
            <h1>"Contact Us"</h1>
            <p class="contact-page__subtitle">
                "Questions about WorkFlow Pro? Send us a note."
            </p>
            <form class="contact-form" on:submit=on_submit>
                <label class="contact-label">
                    "Email Address"
                    <input
                        class="contact-input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="contact-label">
                    "Message"
                    <textarea
                        class="contact-input contact-input--area"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <button class="contact-button" type="submit">
                    "Send Message"
                </button>
            </form>
        </div>
    }
}
