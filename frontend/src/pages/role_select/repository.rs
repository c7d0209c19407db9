use crate::api::{ApiClient, ApiError};
use crate::models::{Role, UserRoleResponse};
use crate::state::{
    session::Session,
    toast::{report_failure, Notify},
};
use std::rc::Rc;

#[derive(Clone)]
pub struct RoleSelectionRepository {
    client: Rc<ApiClient>,
    notifier: Rc<dyn Notify>,
}

impl RoleSelectionRepository {
    pub fn new(client: Rc<ApiClient>, notifier: Rc<dyn Notify>) -> Self {
        Self { client, notifier }
    }

    /// Looks the employee up by name and accepts the selection only when the
    /// stored position matches the requested role.
    pub async fn resolve(&self, full_name: &str, role: Role) -> Result<Session, ApiError> {
        let name = full_name.trim();
        let result = if name.is_empty() {
            Err(ApiError::validation("Enter your full name"))
        } else {
            self.client
                .resolve_user_role(name, role)
                .await
                .and_then(|user| session_for(user, role))
        };
        report_failure(self.notifier.as_ref(), "role selection", result)
    }
}

fn session_for(user: UserRoleResponse, role: Role) -> Result<Session, ApiError> {
    match Role::parse(&user.position) {
        Some(position) if position == role => Ok(Session {
            employee_id: user.id,
            full_name: user.full_name,
            role,
        }),
        _ => Err(ApiError::validation(format!(
            "{} is not registered as {}",
            user.full_name, role
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_position_builds_session() {
        let user = UserRoleResponse {
            id: 7,
            full_name: "Ada Lovelace".into(),
            position: "hr manager".into(),
        };
        let session = session_for(user, Role::HrManager).unwrap();
        assert_eq!(session.employee_id, 7);
        assert_eq!(session.role, Role::HrManager);
    }

    #[test]
    fn mismatched_position_is_rejected() {
        let user = UserRoleResponse {
            id: 7,
            full_name: "Ada Lovelace".into(),
            position: "Employee".into(),
        };
        let err = session_for(user, Role::Admin).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.error, "Ada Lovelace is not registered as Admin");
    }
}
