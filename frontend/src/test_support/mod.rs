#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::models::{
        ApprovalRequest, ApprovalStatus, Employee, LeaveRequest, LeaveStatus, Project, Role,
    };
    use crate::state::session::{Session, SessionState};
    use chrono::NaiveDate;
    use leptos::*;

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    pub fn session(role: Role) -> Session {
        Session {
            employee_id: 42,
            full_name: format!("{} User", role.label()),
            role,
        }
    }

    pub fn provide_session(role: Role) -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
        let ctx = create_signal(SessionState {
            session: Some(session(role)),
            loading: false,
        });
        provide_context(ctx);
        ctx
    }

    pub fn employee(id: i64, full_name: &str) -> Employee {
        Employee {
            id,
            full_name: full_name.into(),
            subdivision: "Engineering".into(),
            position: "Employee".into(),
            people_partner_id: Some(2),
            photo: None,
            is_active: true,
            out_of_office_balance: 20.0,
        }
    }

    pub fn project(id: i64, project_type: &str, status: bool) -> Project {
        Project {
            id,
            project_type: project_type.into(),
            start_date: date(2024, 1, 10),
            end_date: Some(date(2024, 12, 20)),
            project_manager_id: Some(3),
            project_manager_name: Some("Taras Melnyk".into()),
            comment: None,
            status,
        }
    }

    pub fn leave_request(id: i64, status: LeaveStatus) -> LeaveRequest {
        LeaveRequest {
            id,
            employee_id: Some(42),
            employee_name: Some("Ada Lovelace".into()),
            absence_reason: "Vacation".into(),
            start_date: date(2024, 7, 1),
            end_date: date(2024, 7, 5),
            comment: None,
            status,
            approval_request_id: None,
            approval_status: None,
        }
    }

    pub fn approval_request(id: i64, status: ApprovalStatus) -> ApprovalRequest {
        ApprovalRequest {
            id,
            approver_id: Some(2),
            approver_name: Some("Olena Shevchenko".into()),
            leave_request_id: 10 + id,
            leave_request_details: Some("Vacation 2024-07-01 - 2024-07-05".into()),
            status,
            comment: None,
            employee_name: Some("Ada Lovelace".into()),
        }
    }
}
