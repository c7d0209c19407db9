use crate::api::{ApiClient, ApiError};
use crate::models::{
    ActivityFilter, Employee, EmployeeFilter, LeaveRequest, LeaveRequestFilter, LeaveRequestInput,
};
use crate::state::toast::{report_failure, Notify};
use std::rc::Rc;

#[derive(Clone)]
pub struct LeaveRequestsRepository {
    client: Rc<ApiClient>,
    notifier: Rc<dyn Notify>,
}

impl LeaveRequestsRepository {
    pub fn new(client: Rc<ApiClient>, notifier: Rc<dyn Notify>) -> Self {
        Self { client, notifier }
    }

    fn report<T>(&self, action: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
        report_failure(self.notifier.as_ref(), action, result)
    }

    pub async fn list(&self, filter: &LeaveRequestFilter) -> Result<Vec<LeaveRequest>, ApiError> {
        let result = self.client.list_leave_requests(filter).await;
        self.report("list leave requests", result)
    }

    pub async fn get(&self, id: i64) -> Result<LeaveRequest, ApiError> {
        let result = self.client.get_leave_request(id).await;
        self.report("load leave request", result)
    }

    pub async fn save(&self, input: &LeaveRequestInput) -> Result<(), ApiError> {
        let result = match input.id {
            Some(_) => self.client.update_leave_request(input).await,
            None => self.client.create_leave_request(input).await,
        };
        self.report("save leave request", result)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let result = self.client.delete_leave_request(id).await;
        self.report("delete leave request", result)
    }

    pub async fn submit(&self, id: i64) -> Result<(), ApiError> {
        let result = self.client.submit_leave_request(id).await;
        self.report("submit leave request", result)
    }

    pub async fn cancel(&self, id: i64) -> Result<(), ApiError> {
        let result = self.client.cancel_leave_request(id).await;
        self.report("cancel leave request", result)
    }

    /// Active employees an admin can file a request for.
    pub async fn active_employees(&self) -> Vec<Employee> {
        let filter = EmployeeFilter {
            activity: ActivityFilter::Active,
            ..EmployeeFilter::default()
        };
        let result = self.client.list_employees(&filter).await;
        self.report("load employees", result).unwrap_or_default()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::models::LeaveStatus;
    use crate::state::toast::recording::RecordingNotifier;
    use crate::test_support::helpers::date;
    use serde_json::json;

    fn repo(server: &MockServer) -> (LeaveRequestsRepository, Rc<RecordingNotifier>) {
        let notifier = Rc::new(RecordingNotifier::default());
        let repo = LeaveRequestsRepository::new(
            Rc::new(ApiClient::new_with_base_url(server.url("/api"))),
            notifier.clone(),
        );
        (repo, notifier)
    }

    #[tokio::test]
    async fn edit_puts_to_the_request_path() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(PUT).path("/LeaveRequest/8");
            then.status(204);
        });
        let (repo, _) = repo(&server);

        let input = LeaveRequestInput {
            id: Some(8),
            employee_id: 42,
            absence_reason: "Vacation".into(),
            start_date: date(2024, 7, 1),
            end_date: date(2024, 7, 5),
            comment: None,
        };
        repo.save(&input).await.unwrap();
        let request = &server.received()[0];
        assert_eq!(request.method, PUT);
        assert_eq!(
            request.body.as_ref().and_then(|b| b.get("startDate").cloned()),
            Some(json!("2024-07-01"))
        );
    }

    #[tokio::test]
    async fn employee_scope_is_sent_as_employee_id() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/LeaveRequest")
                .query_param("employeeId", "42");
            then.status(200).json_body(json!([{
                "id": 1,
                "employeeId": 42,
                "absenceReason": "Vacation",
                "startDate": "2024-07-01",
                "endDate": "2024-07-05",
                "status": "Submitted"
            }]));
        });
        let (repo, _) = repo(&server);
        let filter = LeaveRequestFilter::starting(date(2024, 8, 1)).for_employee(Some(42));
        let rows = repo.list(&filter).await.unwrap();
        assert_eq!(rows[0].status, LeaveStatus::Submitted);
    }

    #[tokio::test]
    async fn rejected_transition_is_reported() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/LeaveRequest/cancel-leave-request/3");
            then.status(400).json_body(json!({ "message": "Request already approved" }));
        });
        let (repo, notifier) = repo(&server);
        assert!(repo.cancel(3).await.is_err());
        assert_eq!(notifier.errors(), vec!["Request already approved".to_string()]);
    }
}
