pub mod approval_requests;
pub mod dashboard;
pub mod employees;
pub mod leave_requests;
pub mod projects;
pub mod role_select;
