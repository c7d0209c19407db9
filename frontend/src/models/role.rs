use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    #[serde(rename = "HR Manager")]
    HrManager,
    #[serde(rename = "Project Manager")]
    ProjectManager,
    Employee,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::HrManager,
        Role::ProjectManager,
        Role::Employee,
        Role::Admin,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::HrManager => "HR Manager",
            Role::ProjectManager => "Project Manager",
            Role::Employee => "Employee",
        }
    }

    pub fn parse(raw: &str) -> Option<Role> {
        let normalized = raw.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "admin" => Some(Role::Admin),
            "hr manager" | "hr" => Some(Role::HrManager),
            "project manager" => Some(Role::ProjectManager),
            "employee" => Some(Role::Employee),
            _ => None,
        }
    }

    pub fn screens(self) -> &'static [Screen] {
        match self {
            Role::Employee => &[Screen::Projects, Screen::LeaveRequests],
            Role::Admin | Role::HrManager | Role::ProjectManager => &[
                Screen::Employees,
                Screen::Projects,
                Screen::LeaveRequests,
                Screen::ApprovalRequests,
            ],
        }
    }

    pub fn can_open(self, screen: Screen) -> bool {
        self.screens().contains(&screen)
    }

    pub fn can(self, capability: Capability) -> bool {
        use Capability::*;
        match self {
            Role::Admin => true,
            Role::HrManager => matches!(
                capability,
                AddEmployee
                    | EditEmployee
                    | ToggleEmployeeActive
                    | UploadEmployeePhoto
                    | DecideApprovalRequest
            ),
            Role::ProjectManager => matches!(
                capability,
                AssignEmployeeToProject
                    | AddProject
                    | EditProject
                    | DeactivateProject
                    | DecideApprovalRequest
            ),
            Role::Employee => matches!(
                capability,
                AddLeaveRequest | EditLeaveRequest | SubmitLeaveRequest | CancelLeaveRequest
            ),
        }
    }

    /// Employees only see records tied to themselves.
    pub fn is_self_scoped(self) -> bool {
        self == Role::Employee
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Employees,
    Projects,
    LeaveRequests,
    ApprovalRequests,
}

impl Screen {
    pub fn path(self) -> &'static str {
        match self {
            Screen::Employees => "/lists/employees",
            Screen::Projects => "/lists/projects",
            Screen::LeaveRequests => "/lists/leave-requests",
            Screen::ApprovalRequests => "/lists/approval-requests",
        }
    }

    pub fn title_for(self, role: Role) -> &'static str {
        match (self, role.is_self_scoped()) {
            (Screen::Employees, _) => "Employees",
            (Screen::Projects, true) => "My Projects",
            (Screen::Projects, false) => "Projects",
            (Screen::LeaveRequests, true) => "My Leave Requests",
            (Screen::LeaveRequests, false) => "Leave Requests",
            (Screen::ApprovalRequests, _) => "Approval Requests",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    AddEmployee,
    EditEmployee,
    DeleteEmployee,
    ToggleEmployeeActive,
    AssignEmployeeToProject,
    UploadEmployeePhoto,
    AddProject,
    EditProject,
    DeleteProject,
    DeactivateProject,
    AddLeaveRequest,
    EditLeaveRequest,
    SubmitLeaveRequest,
    CancelLeaveRequest,
    DeleteLeaveRequest,
    DecideApprovalRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_with_display_labels() {
        assert_eq!(
            serde_json::to_value(Role::HrManager).unwrap(),
            serde_json::json!("HR Manager")
        );
        let parsed: Role = serde_json::from_str("\"Project Manager\"").unwrap();
        assert_eq!(parsed, Role::ProjectManager);
    }

    #[test]
    fn parse_is_case_insensitive_and_accepts_hr_alias() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse(" HR "), Some(Role::HrManager));
        assert_eq!(Role::parse("project MANAGER"), Some(Role::ProjectManager));
        assert_eq!(Role::parse("intern"), None);
        for role in Role::ALL {
            assert_eq!(Role::parse(role.label()), Some(role));
        }
    }

    #[test]
    fn dashboard_screens_per_role() {
        for role in [Role::Admin, Role::HrManager, Role::ProjectManager] {
            assert_eq!(role.screens().len(), 4, "{role}");
        }
        assert_eq!(
            Role::Employee.screens(),
            &[Screen::Projects, Screen::LeaveRequests]
        );
        assert!(!Role::Employee.can_open(Screen::Employees));
        assert!(!Role::Employee.can_open(Screen::ApprovalRequests));
    }

    #[test]
    fn employee_screen_titles_are_personal() {
        assert_eq!(Screen::Projects.title_for(Role::Employee), "My Projects");
        assert_eq!(
            Screen::LeaveRequests.title_for(Role::Employee),
            "My Leave Requests"
        );
        assert_eq!(Screen::Projects.title_for(Role::Admin), "Projects");
    }

    #[test]
    fn delete_capabilities_are_admin_only() {
        let deletes = [
            Capability::DeleteEmployee,
            Capability::DeleteProject,
            Capability::DeleteLeaveRequest,
        ];
        for capability in deletes {
            assert!(Role::Admin.can(capability));
            assert!(!Role::HrManager.can(capability));
            assert!(!Role::ProjectManager.can(capability));
            assert!(!Role::Employee.can(capability));
        }
    }

    #[test]
    fn capability_table_matches_role_responsibilities() {
        assert!(Role::HrManager.can(Capability::AddEmployee));
        assert!(!Role::HrManager.can(Capability::AddProject));
        assert!(Role::ProjectManager.can(Capability::AssignEmployeeToProject));
        assert!(!Role::ProjectManager.can(Capability::EditEmployee));
        assert!(Role::Employee.can(Capability::SubmitLeaveRequest));
        assert!(!Role::Employee.can(Capability::DecideApprovalRequest));
        assert!(!Role::HrManager.can(Capability::SubmitLeaveRequest));
    }
}
