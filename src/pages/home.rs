//! Public landing page.

use leptos::prelude::*;

struct Feature {
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        title: "Track Work Hours",
        description: "Employees log daily tasks and hours from a single worksheet.",
    },
    Feature {
        title: "Manage Your Team",
        description: "HR verifies accounts, monitors progress, and raises salary requests.",
    },
    Feature {
        title: "Process Payroll",
        description: "Admins approve requests and keep the payment history auditable.",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="home-hero">
                <h1>"Manage Your Workforce with Ease"</h1>
                <p class="home-hero__subtitle">
                    "WorkFlow Pro keeps work hours, employee records, and payroll in one place."
                </p>
                <div class="home-hero__actions">
                    <a class="home-hero__cta" href="/register">
                        "Get Started"
                    </a>
                    <a class="home-hero__secondary" href="/login">
                        "Sign In"
                    </a>
                </div>
            </section>

            <section class="home-features">
                {FEATURES
                    .iter()
                    .map(|feature| {
                        view! {
                            <div class="home-feature">
                                <h2>{feature.title}</h2>
                                <p>{feature.description}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>
        </div>
    }
}
