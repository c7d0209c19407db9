use super::{client::ApiClient, types::ApiError};
use crate::models::{LeaveRequest, LeaveRequestFilter, LeaveRequestInput, ListFilter};

impl ApiClient {
    pub async fn list_leave_requests(
        &self,
        filter: &LeaveRequestFilter,
    ) -> Result<Vec<LeaveRequest>, ApiError> {
        let url = self.endpoint("/LeaveRequest").await;
        let response = self
            .send(self.http_client().get(url).query(&filter.query_pairs()))
            .await?;
        self.map_json_response(response).await
    }

    pub async fn get_leave_request(&self, id: i64) -> Result<LeaveRequest, ApiError> {
        let url = self.endpoint(&format!("/LeaveRequest/{}", id)).await;
        let response = self.send(self.http_client().get(url)).await?;
        self.map_json_response(response).await
    }

    pub async fn create_leave_request(&self, input: &LeaveRequestInput) -> Result<(), ApiError> {
        let url = self.endpoint("/LeaveRequest").await;
        let response = self.send(self.http_client().post(url).json(input)).await?;
        self.map_empty_response(response).await
    }

    pub async fn update_leave_request(&self, input: &LeaveRequestInput) -> Result<(), ApiError> {
        let Some(id) = input.id else {
            return Err(ApiError::validation("Leave request id is required for update"));
        };
        let url = self.endpoint(&format!("/LeaveRequest/{}", id)).await;
        let response = self.send(self.http_client().put(url).json(input)).await?;
        self.map_empty_response(response).await
    }

    pub async fn delete_leave_request(&self, id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/LeaveRequest/{}", id)).await;
        let response = self.send(self.http_client().delete(url)).await?;
        self.map_empty_response(response).await
    }

    pub async fn submit_leave_request(&self, id: i64) -> Result<(), ApiError> {
        self.leave_request_transition("submit-leave-request", id).await
    }

    pub async fn cancel_leave_request(&self, id: i64) -> Result<(), ApiError> {
        self.leave_request_transition("cancel-leave-request", id).await
    }

    async fn leave_request_transition(&self, action: &str, id: i64) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!("/LeaveRequest/{}/{}", action, id))
            .await;
        let response = self.send(self.http_client().post(url)).await?;
        self.map_empty_response(response).await
    }
}
