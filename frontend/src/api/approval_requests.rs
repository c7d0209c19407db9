use super::{client::ApiClient, types::ApiError};
use crate::models::{ApprovalRequest, ApprovalRequestFilter, ListFilter};

impl ApiClient {
    pub async fn list_approval_requests(
        &self,
        filter: &ApprovalRequestFilter,
    ) -> Result<Vec<ApprovalRequest>, ApiError> {
        let url = self.endpoint("/ApprovalRequest").await;
        let response = self
            .send(self.http_client().get(url).query(&filter.query_pairs()))
            .await?;
        self.map_json_response(response).await
    }

    pub async fn get_approval_request(&self, id: i64) -> Result<ApprovalRequest, ApiError> {
        let url = self.endpoint(&format!("/ApprovalRequest/{}", id)).await;
        let response = self.send(self.http_client().get(url)).await?;
        self.map_json_response(response).await
    }

    pub async fn approve_request(&self, id: i64) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!("/ApprovalRequest/approve/{}", id))
            .await;
        let response = self.send(self.http_client().post(url)).await?;
        self.map_empty_response(response).await
    }

    /// The backend binds the comment from a bare JSON string body.
    pub async fn reject_request(&self, id: i64, comment: &str) -> Result<(), ApiError> {
        let comment = comment.trim();
        if comment.is_empty() {
            return Err(ApiError::validation("A comment is required to reject a request"));
        }
        let url = self
            .endpoint(&format!("/ApprovalRequest/reject/{}", id))
            .await;
        let response = self
            .send(self.http_client().post(url).json(comment))
            .await?;
        self.map_empty_response(response).await
    }
}
