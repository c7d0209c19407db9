use crate::api::ApiError;
use crate::models::{
    ActivityFilter, Capability, Project, ProjectFilter, ProjectInput, ProjectSortKey, Role,
};
use crate::utils::time::{date_input, format_date, parse_date};

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectForm {
    pub id: Option<i64>,
    pub project_type: String,
    pub start_date: String,
    pub end_date: String,
    pub project_manager_id: String,
    pub comment: String,
    pub status: bool,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self {
            id: None,
            project_type: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            project_manager_id: String::new(),
            comment: String::new(),
            status: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProjectFormMsg {
    ProjectType(String),
    StartDate(String),
    EndDate(String),
    ProjectManager(String),
    Comment(String),
    Status(bool),
}

impl ProjectForm {
    pub fn from_project(project: &Project) -> Self {
        Self {
            id: Some(project.id),
            project_type: project.project_type.clone(),
            start_date: format_date(project.start_date),
            end_date: project.end_date.map(format_date).unwrap_or_default(),
            project_manager_id: project
                .project_manager_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            comment: project.comment.clone().unwrap_or_default(),
            status: project.status,
        }
    }

    pub fn apply(&mut self, msg: ProjectFormMsg) {
        match msg {
            ProjectFormMsg::ProjectType(value) => self.project_type = value,
            ProjectFormMsg::StartDate(value) => self.start_date = value,
            ProjectFormMsg::EndDate(value) => self.end_date = value,
            ProjectFormMsg::ProjectManager(value) => self.project_manager_id = value,
            ProjectFormMsg::Comment(value) => self.comment = value,
            ProjectFormMsg::Status(value) => self.status = value,
        }
    }

    pub fn to_payload(&self) -> Result<ProjectInput, ApiError> {
        let project_type = self.project_type.trim();
        if project_type.is_empty() {
            return Err(ApiError::validation("Project type is required"));
        }
        let start_date = parse_date(&self.start_date)
            .ok_or_else(|| ApiError::validation("Start date is required"))?;
        let end_date = match self.end_date.trim() {
            "" => None,
            raw => Some(parse_date(raw).ok_or_else(|| ApiError::validation("End date is invalid"))?),
        };
        if end_date.is_some_and(|end| end < start_date) {
            return Err(ApiError::validation("End date cannot be before start date"));
        }
        let project_manager_id = self
            .project_manager_id
            .trim()
            .parse::<i64>()
            .map_err(|_| ApiError::validation("Project manager is required"))?;
        let comment = self.comment.trim();
        Ok(ProjectInput {
            id: self.id,
            project_type: project_type.to_string(),
            start_date,
            end_date,
            project_manager_id,
            comment: (!comment.is_empty()).then(|| comment.to_string()),
            status: self.status,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ProjectModal {
    #[default]
    Closed,
    Add,
    Edit(Project),
    Details(Project),
    ConfirmDelete(Project),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectAction {
    Edit,
    Deactivate,
    Delete,
}

impl ProjectAction {
    pub fn label(self) -> &'static str {
        match self {
            ProjectAction::Edit => "Edit",
            ProjectAction::Deactivate => "Deactivate",
            ProjectAction::Delete => "Delete",
        }
    }
}

/// Deactivate is offered only while the project is still active.
pub fn row_actions(role: Role, project: &Project) -> Vec<ProjectAction> {
    let mut actions = Vec::new();
    if role.can(Capability::EditProject) {
        actions.push(ProjectAction::Edit);
    }
    if role.can(Capability::DeactivateProject) && project.status {
        actions.push(ProjectAction::Deactivate);
    }
    if role.can(Capability::DeleteProject) {
        actions.push(ProjectAction::Delete);
    }
    actions
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProjectFilterMsg {
    Sort(ProjectSortKey),
    ProjectType(String),
    StartFrom(String),
    StartTo(String),
    Activity(ActivityFilter),
    ProjectNumber(String),
    Reset,
}

/// Blank date or number inputs clear that bound; unparsable input is ignored.
/// Reset keeps the employee scope of "My Projects".
pub fn apply_filter(filter: &mut ProjectFilter, msg: ProjectFilterMsg) {
    match msg {
        ProjectFilterMsg::Sort(column) => filter.sort = filter.sort.toggled(column),
        ProjectFilterMsg::ProjectType(value) => filter.project_type = value,
        ProjectFilterMsg::StartFrom(raw) => {
            if let Some(value) = date_input(&raw) {
                filter.start_date_from = value;
            }
        }
        ProjectFilterMsg::StartTo(raw) => {
            if let Some(value) = date_input(&raw) {
                filter.start_date_to = value;
            }
        }
        ProjectFilterMsg::Activity(value) => filter.activity = value,
        ProjectFilterMsg::ProjectNumber(raw) => match raw.trim() {
            "" => filter.project_number = None,
            number => {
                if let Ok(value) = number.parse() {
                    filter.project_number = Some(value);
                }
            }
        },
        ProjectFilterMsg::Reset => {
            *filter = ProjectFilter::default().assigned_to(filter.assigned_employee_id)
        }
    }
}
