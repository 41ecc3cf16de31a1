//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::protected::Protected;
use crate::components::toaster::Toaster;
use crate::net::gateway::Gateway;
use crate::net::types::Role;
use crate::pages::{
    all_employees::AllEmployeesPage, contact::ContactPage, dashboard::DashboardPage,
    employee_details::EmployeeDetailsPage, employee_list::EmployeeListPage, home::HomePage,
    login::LoginPage, payment_history::PaymentHistoryPage, payroll::PayrollPage,
    progress::ProgressPage, register::RegisterPage, unauthorized::UnauthorizedPage,
    work_sheet::WorkSheetPage,
};
use crate::state::notify::NotifyStore;
use crate::state::session::SessionStore;

// Route allow-lists. An empty list admits any authenticated identity.
const EMPLOYEE_ONLY: &[Role] = &[Role::Employee];
const HR_ONLY: &[Role] = &[Role::Hr];
const HR_OR_ADMIN: &[Role] = &[Role::Hr, Role::Admin];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store, notifier, and request gateway via context,
/// restores the persisted session before the router mounts, and declares the
/// role-gated route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new();
    let notify = NotifyStore::new();
    let gateway = Gateway::new(session);

    // Rehydrate the persisted session before any guard evaluates.
    session.restore();

    provide_context(session);
    provide_context(notify);
    provide_context(gateway);

    view! {
        <Stylesheet id="leptos" href="/pkg/workflow-client.css"/>
        <Title text="WorkFlow Pro"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("contact-us") view=ContactPage/>
                    <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| {
                            view! {
                                <Protected>
                                    <DashboardPage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("work-sheet")
                        view=|| {
                            view! {
                                <Protected roles=EMPLOYEE_ONLY>
                                    <WorkSheetPage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("payment-history")
                        view=|| {
                            view! {
                                <Protected roles=EMPLOYEE_ONLY>
                                    <PaymentHistoryPage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("employee-list")
                        view=|| {
                            view! {
                                <Protected roles=HR_ONLY>
                                    <EmployeeListPage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("details"), ParamSegment("id"))
                        view=|| {
                            view! {
                                <Protected roles=HR_OR_ADMIN>
                                    <EmployeeDetailsPage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("progress")
                        view=|| {
                            view! {
                                <Protected roles=HR_ONLY>
                                    <ProgressPage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("all-employee-list")
                        view=|| {
                            view! {
                                <Protected roles=ADMIN_ONLY>
                                    <AllEmployeesPage/>
                                </Protected>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("payroll")
                        view=|| {
                            view! {
                                <Protected roles=ADMIN_ONLY>
                                    <PayrollPage/>
                                </Protected>
                            }
                        }
                    />
                </Routes>
            </main>
            <Footer/>
            <Toaster/>
        </Router>
    }
}
