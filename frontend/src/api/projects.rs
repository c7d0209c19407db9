use super::{client::ApiClient, types::ApiError};
use crate::models::{ListFilter, Project, ProjectFilter, ProjectInput};

impl ApiClient {
    pub async fn list_projects(&self, filter: &ProjectFilter) -> Result<Vec<Project>, ApiError> {
        let url = self.endpoint("/Projects").await;
        let response = self
            .send(self.http_client().get(url).query(&filter.query_pairs()))
            .await?;
        self.map_json_response(response).await
    }

    pub async fn get_project(&self, id: i64) -> Result<Project, ApiError> {
        let url = self.endpoint(&format!("/Projects/{}", id)).await;
        let response = self.send(self.http_client().get(url)).await?;
        self.map_json_response(response).await
    }

    pub async fn create_project(&self, input: &ProjectInput) -> Result<(), ApiError> {
        let url = self.endpoint("/Projects").await;
        let response = self.send(self.http_client().post(url).json(input)).await?;
        self.map_empty_response(response).await
    }

    pub async fn update_project(&self, input: &ProjectInput) -> Result<(), ApiError> {
        if input.id.is_none() {
            return Err(ApiError::validation("Project id is required for update"));
        }
        let url = self.endpoint("/Projects").await;
        let response = self.send(self.http_client().put(url).json(input)).await?;
        self.map_empty_response(response).await
    }

    pub async fn delete_project(&self, id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/Projects/{}", id)).await;
        let response = self.send(self.http_client().delete(url)).await?;
        self.map_empty_response(response).await
    }

    pub async fn deactivate_project(&self, id: i64) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!("/Projects/{}/deactivate", id))
            .await;
        let response = self.send(self.http_client().patch(url)).await?;
        self.map_empty_response(response).await
    }
}
