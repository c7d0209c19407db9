use reqwest::multipart::{Form, Part};

use super::{client::ApiClient, types::ApiError};
use crate::models::{
    Employee, EmployeeFilter, EmployeeInput, ListFilter, ProjectAssignment, Role, UserRoleResponse,
};
use crate::utils::media::mime_type_for;

impl ApiClient {
    pub async fn list_employees(&self, filter: &EmployeeFilter) -> Result<Vec<Employee>, ApiError> {
        let url = self.endpoint("/Employee").await;
        let response = self
            .send(self.http_client().get(url).query(&filter.query_pairs()))
            .await?;
        self.map_json_response(response).await
    }

    pub async fn get_employee(&self, id: i64) -> Result<Employee, ApiError> {
        let url = self.endpoint(&format!("/Employee/{}", id)).await;
        let response = self.send(self.http_client().get(url)).await?;
        self.map_json_response(response).await
    }

    pub async fn create_employee(&self, input: &EmployeeInput) -> Result<(), ApiError> {
        let url = self.endpoint("/Employee").await;
        let response = self.send(self.http_client().post(url).json(input)).await?;
        self.map_empty_response(response).await
    }

    pub async fn update_employee(&self, input: &EmployeeInput) -> Result<(), ApiError> {
        if input.id.is_none() {
            return Err(ApiError::validation("Employee id is required for update"));
        }
        let url = self.endpoint("/Employee").await;
        let response = self.send(self.http_client().put(url).json(input)).await?;
        self.map_empty_response(response).await
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/Employee/{}", id)).await;
        let response = self.send(self.http_client().delete(url)).await?;
        self.map_empty_response(response).await
    }

    pub async fn toggle_employee_active(&self, id: i64) -> Result<(), ApiError> {
        let url = self
            .endpoint(&format!("/Employee/toggle-deactivate/{}", id))
            .await;
        let response = self.send(self.http_client().post(url)).await?;
        self.map_empty_response(response).await
    }

    pub async fn assign_employee_to_project(
        &self,
        assignment: ProjectAssignment,
    ) -> Result<(), ApiError> {
        let url = self.endpoint("/Employee/assign-to-project").await;
        let response = self
            .send(self.http_client().post(url).json(&assignment))
            .await?;
        self.map_empty_response(response).await
    }

    pub async fn upload_employee_photo(
        &self,
        id: i64,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ApiError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_type_for(file_name))
            .map_err(|e| ApiError::validation(format!("Unsupported file: {}", e)))?;
        let form = Form::new().part("photo", part);
        let url = self
            .endpoint(&format!("/Employee/upload-photo/{}", id))
            .await;
        let response = self
            .send(self.http_client().post(url).multipart(form))
            .await?;
        self.map_empty_response(response).await
    }

    pub async fn list_hr_managers(&self) -> Result<Vec<Employee>, ApiError> {
        let url = self.endpoint("/Employee/get-hrs").await;
        let response = self.send(self.http_client().get(url)).await?;
        self.map_json_response(response).await
    }

    pub async fn list_project_managers(&self) -> Result<Vec<Employee>, ApiError> {
        let url = self.endpoint("/Employee/get-project-managers").await;
        let response = self.send(self.http_client().get(url)).await?;
        self.map_json_response(response).await
    }

    pub async fn resolve_user_role(
        &self,
        full_name: &str,
        role: Role,
    ) -> Result<UserRoleResponse, ApiError> {
        let url = self.endpoint("/Employee/get-user-role").await;
        let params = [("fullName", full_name.trim()), ("position", role.label())];
        let response = self
            .send(self.http_client().get(url).query(&params))
            .await?;
        self.map_json_response(response).await
    }
}
