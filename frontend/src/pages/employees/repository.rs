use crate::api::{ApiClient, ApiError};
use crate::models::{
    ActivityFilter, Employee, EmployeeFilter, EmployeeInput, Project, ProjectAssignment,
    ProjectFilter,
};
use crate::state::toast::{report_failure, Notify};
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
    notifier: Rc<dyn Notify>,
}

impl EmployeesRepository {
    pub fn new(client: Rc<ApiClient>, notifier: Rc<dyn Notify>) -> Self {
        Self { client, notifier }
    }

    fn report<T>(&self, action: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
        report_failure(self.notifier.as_ref(), action, result)
    }

    pub async fn list(&self, filter: &EmployeeFilter) -> Result<Vec<Employee>, ApiError> {
        let result = self.client.list_employees(filter).await;
        self.report("list employees", result)
    }

    pub async fn get(&self, id: i64) -> Result<Employee, ApiError> {
        let result = self.client.get_employee(id).await;
        self.report("load employee", result)
    }

    pub async fn save(&self, input: &EmployeeInput) -> Result<(), ApiError> {
        let result = match input.id {
            Some(_) => self.client.update_employee(input).await,
            None => self.client.create_employee(input).await,
        };
        self.report("save employee", result)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let result = self.client.delete_employee(id).await;
        self.report("delete employee", result)
    }

    pub async fn toggle_active(&self, id: i64) -> Result<(), ApiError> {
        let result = self.client.toggle_employee_active(id).await;
        self.report("toggle employee", result)
    }

    pub async fn assign(&self, assignment: ProjectAssignment) -> Result<(), ApiError> {
        let result = self.client.assign_employee_to_project(assignment).await;
        self.report("assign employee", result)
    }

    pub async fn upload_photo(
        &self,
        id: i64,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ApiError> {
        let result = self.client.upload_employee_photo(id, file_name, bytes).await;
        self.report("upload photo", result)
    }

    /// People partners for the employee form; empty when the lookup fails.
    pub async fn people_partners(&self) -> Vec<Employee> {
        let result = self.client.list_hr_managers().await;
        self.report("load HR managers", result).unwrap_or_default()
    }

    /// Active projects offered by the assign dialog; empty when the lookup fails.
    pub async fn active_projects(&self) -> Vec<Project> {
        let filter = ProjectFilter {
            start_date_from: None,
            start_date_to: None,
            activity: ActivityFilter::Active,
            ..ProjectFilter::default()
        };
        let result = self.client.list_projects(&filter).await;
        self.report("load projects", result).unwrap_or_default()
    }
}
