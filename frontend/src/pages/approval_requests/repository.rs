use crate::api::{ApiClient, ApiError};
use crate::models::{ApprovalRequest, ApprovalRequestFilter};
use crate::state::toast::{report_failure, Notify};
use std::rc::Rc;

#[derive(Clone)]
pub struct ApprovalRequestsRepository {
    client: Rc<ApiClient>,
    notifier: Rc<dyn Notify>,
}

impl ApprovalRequestsRepository {
    pub fn new(client: Rc<ApiClient>, notifier: Rc<dyn Notify>) -> Self {
        Self { client, notifier }
    }

    fn report<T>(&self, action: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
        report_failure(self.notifier.as_ref(), action, result)
    }

    pub async fn list(
        &self,
        filter: &ApprovalRequestFilter,
    ) -> Result<Vec<ApprovalRequest>, ApiError> {
        let result = self.client.list_approval_requests(filter).await;
        self.report("list approval requests", result)
    }

    pub async fn get(&self, id: i64) -> Result<ApprovalRequest, ApiError> {
        let result = self.client.get_approval_request(id).await;
        self.report("load approval request", result)
    }

    pub async fn approve(&self, id: i64) -> Result<(), ApiError> {
        let result = self.client.approve_request(id).await;
        self.report("approve request", result)
    }

    pub async fn reject(&self, id: i64, comment: &str) -> Result<(), ApiError> {
        let result = self.client.reject_request(id, comment).await;
        self.report("reject request", result)
    }
}
