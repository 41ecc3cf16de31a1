//! Role-aware dashboard of quick links.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::session::SessionStore;

/// A dashboard card linking to one workflow area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuickLink {
    pub title: &'static str,
    pub description: &'static str,
    pub path: &'static str,
}

const EMPLOYEE_LINKS: [QuickLink; 2] = [
    QuickLink {
        title: "Work Sheet",
        description: "Track your daily tasks and work hours",
        path: "/work-sheet",
    },
    QuickLink {
        title: "Payment History",
        description: "View your salary payment records",
        path: "/payment-history",
    },
];

const HR_LINKS: [QuickLink; 3] = [
    QuickLink {
        title: "Employee List",
        description: "Manage all employees and their details",
        path: "/employee-list",
    },
    QuickLink {
        title: "Progress Tracking",
        description: "Monitor employee work progress",
        path: "/progress",
    },
    QuickLink {
        title: "Work Sheet",
        description: "Track your own tasks and hours",
        path: "/work-sheet",
    },
];

const ADMIN_LINKS: [QuickLink; 2] = [
    QuickLink {
        title: "All Employees",
        description: "Manage all employees and HR staff",
        path: "/all-employee-list",
    },
    QuickLink {
        title: "Payroll Management",
        description: "Process and approve salary payments",
        path: "/payroll",
    },
];

/// Cards shown for a role.
pub fn role_links(role: Role) -> &'static [QuickLink] {
    match role {
        Role::Employee => &EMPLOYEE_LINKS,
        Role::Hr => &HR_LINKS,
        Role::Admin => &ADMIN_LINKS,
    }
}

/// Time-of-day greeting from a 24h clock hour.
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 17 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}

fn current_hour() -> u32 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().get_hours()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        12
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();

    let heading = move || {
        session.identity().map_or_else(String::new, |identity| {
            format!("{}, {}!", greeting_for_hour(current_hour()), identity.name)
        })
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{heading}</h1>
                <p class="dashboard-page__role">
                    {move || {
                        session
                            .current_role()
                            .map(|role| format!("Signed in as {role}"))
                            .unwrap_or_default()
                    }}
                </p>
            </header>

            <div class="dashboard-page__cards">
                {move || {
                    session
                        .current_role()
                        .map(role_links)
                        .unwrap_or_default()
                        .iter()
                        .map(|link| {
                            view! {
                                <a class="dashboard-card" href=link.path>
                                    <span class="dashboard-card__title">{link.title}</span>
                                    <span class="dashboard-card__description">{link.description}</span>
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
