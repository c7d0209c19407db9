use crate::api::{ApiClient, ApiError};
use crate::models::{Employee, Project, ProjectFilter, ProjectInput};
use crate::state::toast::{report_failure, Notify};
use std::rc::Rc;

#[derive(Clone)]
pub struct ProjectsRepository {
    client: Rc<ApiClient>,
    notifier: Rc<dyn Notify>,
}

impl ProjectsRepository {
    pub fn new(client: Rc<ApiClient>, notifier: Rc<dyn Notify>) -> Self {
        Self { client, notifier }
    }

    fn report<T>(&self, action: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
        report_failure(self.notifier.as_ref(), action, result)
    }

    pub async fn list(&self, filter: &ProjectFilter) -> Result<Vec<Project>, ApiError> {
        let result = self.client.list_projects(filter).await;
        self.report("list projects", result)
    }

    pub async fn get(&self, id: i64) -> Result<Project, ApiError> {
        let result = self.client.get_project(id).await;
        self.report("load project", result)
    }

    pub async fn save(&self, input: &ProjectInput) -> Result<(), ApiError> {
        let result = match input.id {
            Some(_) => self.client.update_project(input).await,
            None => self.client.create_project(input).await,
        };
        self.report("save project", result)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let result = self.client.delete_project(id).await;
        self.report("delete project", result)
    }

    pub async fn deactivate(&self, id: i64) -> Result<(), ApiError> {
        let result = self.client.deactivate_project(id).await;
        self.report("deactivate project", result)
    }

    pub async fn project_managers(&self) -> Vec<Employee> {
        let result = self.client.list_project_managers().await;
        self.report("load project managers", result)
            .unwrap_or_default()
    }
}
