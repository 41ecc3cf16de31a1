//! Application footer with product blurb and quick links.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__brand">
                <span class="footer__title">"WorkFlow Pro"</span>
                <p class="footer__blurb">
                    "Workforce management for tracking work hours, employee records, and payroll."
                </p>
            </div>
            <div class="footer__column">
                <span class="footer__heading">"Product"</span>
                <a class="footer__link" href="/">
                    "Home"
                </a>
                <a class="footer__link" href="/dashboard">
                    "Dashboard"
                </a>
            </div>
            <div class="footer__column">
                <span class="footer__heading">"Support"</span>
                <a class="footer__link" href="/contact-us">
                    "Contact Us"
                </a>
            </div>
            <div class="footer__legal">"© 2025 WorkFlow Pro. All rights reserved."</div>
        </footer>
    }
}
