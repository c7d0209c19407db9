use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    components::{guard::RequireSession, toast::ToastHost},
    models::Screen,
    pages::{
        approval_requests::ApprovalRequestsPage, dashboard::DashboardPage,
        employees::EmployeesPage, leave_requests::LeaveRequestsPage, projects::ProjectsPage,
        role_select::RoleSelectPage,
    },
    state::{session::SessionProvider, toast::provide_toaster},
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/dashboard",
    "/lists/employees",
    "/lists/projects",
    "/lists/leave-requests",
    "/lists/approval-requests",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/dashboard",
    "/lists/employees",
    "/lists/projects",
    "/lists/leave-requests",
    "/lists/approval-requests",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::api::ApiClient::new());
    provide_toaster();
    view! {
        <Title text="Out of Office"/>
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=RoleSelectPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/lists/employees" view=ProtectedEmployees/>
                    <Route path="/lists/projects" view=ProtectedProjects/>
                    <Route path="/lists/leave-requests" view=ProtectedLeaveRequests/>
                    <Route path="/lists/approval-requests" view=ProtectedApprovalRequests/>
                </Routes>
            </Router>
            <ToastHost/>
        </SessionProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireSession><DashboardPage/></RequireSession> }
}

#[component]
fn ProtectedEmployees() -> impl IntoView {
    view! { <RequireSession screen=Screen::Employees><EmployeesPage/></RequireSession> }
}

#[component]
fn ProtectedProjects() -> impl IntoView {
    view! { <RequireSession screen=Screen::Projects><ProjectsPage/></RequireSession> }
}

#[component]
fn ProtectedLeaveRequests() -> impl IntoView {
    view! { <RequireSession screen=Screen::LeaveRequests><LeaveRequestsPage/></RequireSession> }
}

#[component]
fn ProtectedApprovalRequests() -> impl IntoView {
    view! { <RequireSession screen=Screen::ApprovalRequests><ApprovalRequestsPage/></RequireSession> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use std::collections::HashSet;

    #[test]
    fn every_screen_has_a_route() {
        for role in Role::ALL {
            for screen in role.screens() {
                assert!(ROUTE_PATHS.contains(&screen.path()), "{}", screen.path());
            }
        }
    }

    #[test]
    fn public_and_protected_partition_all_routes() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        let protected: HashSet<&str> = PROTECTED_ROUTE_PATHS.iter().copied().collect();
        let public: HashSet<&str> = PUBLIC_ROUTE_PATHS.iter().copied().collect();
        assert!(protected.is_disjoint(&public));
        assert_eq!(&protected | &public, all);
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
