use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::domain::analytics::ui::{AnalyticsDashboardPage, BenchReportPage};
use crate::domain::assessments::ui::{AssessmentComparePage, AssignAssessmentPage};
use crate::domain::roster::ui::details::EmployeeProfilePage;
use crate::domain::roster::ui::list::RosterListPage;
use crate::layout::header::AppHeader;
use crate::system::pages::manage_users::ManageUsersPage;
use crate::system::pages::register::RegisterPage;
use crate::system::pages::signin::SignInPage;
use crate::system::pages::unauthorized::UnauthorizedPage;
use crate::system::session::guard::{RequireAdmin, RequireSession};

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <AppHeader />
            <main class="app-main">
                <Routes fallback=|| view! { <Redirect path="/home" /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/home" /> } />
                    <Route path=path!("/signin") view=SignInPage />
                    <Route path=path!("/register") view=RegisterPage />
                    <Route path=path!("/unauthorized") view=UnauthorizedPage />
                    <Route
                        path=path!("/home")
                        view=|| view! {
                            <RequireSession>
                                <RosterListPage />
                            </RequireSession>
                        }
                    />
                    <Route
                        path=path!("/dashboard/:emp_id")
                        view=|| view! {
                            <RequireSession>
                                <EmployeeProfilePage />
                            </RequireSession>
                        }
                    />
                    <Route
                        path=path!("/reports/bench")
                        view=|| view! {
                            <RequireSession>
                                <BenchReportPage />
                            </RequireSession>
                        }
                    />
                    <Route
                        path=path!("/reports/analytics")
                        view=|| view! {
                            <RequireSession>
                                <AnalyticsDashboardPage />
                            </RequireSession>
                        }
                    />
                    <Route
                        path=path!("/assessmentcomp")
                        view=|| view! {
                            <RequireSession>
                                <AssessmentComparePage />
                            </RequireSession>
                        }
                    />
                    <Route
                        path=path!("/assign-assessment")
                        view=|| view! {
                            <RequireAdmin>
                                <AssignAssessmentPage />
                            </RequireAdmin>
                        }
                    />
                    <Route
                        path=path!("/manage-users")
                        view=|| view! {
                            <RequireAdmin>
                                <ManageUsersPage />
                            </RequireAdmin>
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
