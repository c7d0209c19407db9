use crate::api::ApiError;
use crate::models::{
    ActivityFilter, Capability, Employee, EmployeeFilter, EmployeeInput, EmployeeSortKey,
    ProjectAssignment, Role, MAX_OUT_OF_OFFICE_BALANCE,
};
use crate::utils::media::mime_type_for;

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeForm {
    pub id: Option<i64>,
    pub full_name: String,
    pub subdivision: String,
    pub position: String,
    pub people_partner_id: String,
    pub is_active: bool,
    pub balance: String,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            id: None,
            full_name: String::new(),
            subdivision: String::new(),
            position: String::new(),
            people_partner_id: String::new(),
            is_active: true,
            balance: "0".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeFormMsg {
    FullName(String),
    Subdivision(String),
    Position(String),
    PeoplePartner(String),
    Active(bool),
    Balance(String),
}

impl EmployeeForm {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            id: Some(employee.id),
            full_name: employee.full_name.clone(),
            subdivision: employee.subdivision.clone(),
            position: employee.position.clone(),
            people_partner_id: employee
                .people_partner_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            is_active: employee.is_active,
            balance: employee.balance_label(),
        }
    }

    pub fn apply(&mut self, msg: EmployeeFormMsg) {
        match msg {
            EmployeeFormMsg::FullName(value) => self.full_name = value,
            EmployeeFormMsg::Subdivision(value) => self.subdivision = value,
            EmployeeFormMsg::Position(value) => self.position = value,
            EmployeeFormMsg::PeoplePartner(value) => self.people_partner_id = value,
            EmployeeFormMsg::Active(value) => self.is_active = value,
            EmployeeFormMsg::Balance(value) => self.balance = value,
        }
    }

    pub fn to_payload(&self) -> Result<EmployeeInput, ApiError> {
        let full_name = self.full_name.trim();
        if full_name.is_empty() {
            return Err(ApiError::validation("Full name is required"));
        }
        if self.subdivision.trim().is_empty() {
            return Err(ApiError::validation("Subdivision is required"));
        }
        if self.position.trim().is_empty() {
            return Err(ApiError::validation("Position is required"));
        }
        let people_partner_id = match self.people_partner_id.trim() {
            "" => None,
            raw => Some(
                raw.parse::<i64>()
                    .map_err(|_| ApiError::validation("People partner is invalid"))?,
            ),
        };
        let balance = self
            .balance
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| (0.0..=f64::from(MAX_OUT_OF_OFFICE_BALANCE)).contains(value))
            .ok_or_else(|| {
                ApiError::validation(format!(
                    "Out-of-office balance must be between 0 and {}",
                    MAX_OUT_OF_OFFICE_BALANCE
                ))
            })?;
        Ok(EmployeeInput {
            id: self.id,
            full_name: full_name.to_string(),
            subdivision: self.subdivision.trim().to_string(),
            position: self.position.trim().to_string(),
            people_partner_id,
            is_active: self.is_active,
            out_of_office_balance: balance,
        })
    }
}

/// Which dialog the employees screen shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EmployeeModal {
    #[default]
    Closed,
    Add,
    Edit(Employee),
    Details(Employee),
    Assign(Employee),
    Photo(Employee),
    ConfirmDelete(Employee),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeAction {
    Edit,
    ToggleActive,
    Assign,
    UploadPhoto,
    Delete,
}

impl EmployeeAction {
    pub fn label(self, employee: &Employee) -> &'static str {
        match self {
            EmployeeAction::Edit => "Edit",
            EmployeeAction::ToggleActive if employee.is_active => "Deactivate",
            EmployeeAction::ToggleActive => "Activate",
            EmployeeAction::Assign => "Assign to project",
            EmployeeAction::UploadPhoto => "Upload photo",
            EmployeeAction::Delete => "Delete",
        }
    }
}

pub fn row_actions(role: Role, _employee: &Employee) -> Vec<EmployeeAction> {
    [
        (EmployeeAction::Edit, Capability::EditEmployee),
        (EmployeeAction::ToggleActive, Capability::ToggleEmployeeActive),
        (EmployeeAction::Assign, Capability::AssignEmployeeToProject),
        (EmployeeAction::UploadPhoto, Capability::UploadEmployeePhoto),
        (EmployeeAction::Delete, Capability::DeleteEmployee),
    ]
    .into_iter()
    .filter(|(_, capability)| role.can(*capability))
    .map(|(action, _)| action)
    .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeFilterMsg {
    Sort(EmployeeSortKey),
    Subdivision(String),
    Activity(ActivityFilter),
    BalanceMin(String),
    BalanceMax(String),
    Search(String),
    Reset,
}

/// Applies one filter edit. Unparsable balance bounds leave the filter as is.
pub fn apply_filter(filter: &mut EmployeeFilter, msg: EmployeeFilterMsg) {
    match msg {
        EmployeeFilterMsg::Sort(column) => filter.sort = filter.sort.toggled(column),
        EmployeeFilterMsg::Subdivision(value) => filter.subdivision = value,
        EmployeeFilterMsg::Activity(value) => filter.activity = value,
        EmployeeFilterMsg::BalanceMin(raw) => {
            if let Ok(value) = raw.trim().parse() {
                filter.balance_min = value;
            }
        }
        EmployeeFilterMsg::BalanceMax(raw) => {
            if let Ok(value) = raw.trim().parse() {
                filter.balance_max = value;
            }
        }
        EmployeeFilterMsg::Search(value) => filter.search_by_name = value,
        EmployeeFilterMsg::Reset => *filter = EmployeeFilter::default(),
    }
}

pub fn assignment_for(employee_id: i64, project: &str) -> Result<ProjectAssignment, ApiError> {
    project
        .trim()
        .parse::<i64>()
        .map(|project_id| ProjectAssignment {
            employee_id,
            project_id,
        })
        .map_err(|_| ApiError::validation("Choose a project"))
}

pub fn validate_photo(file_name: &str, bytes: &[u8]) -> Result<(), ApiError> {
    if bytes.is_empty() {
        return Err(ApiError::validation("Choose a photo to upload"));
    }
    if !mime_type_for(file_name).starts_with("image/") {
        return Err(ApiError::validation("Choose a PNG, JPEG, GIF or BMP image"));
    }
    Ok(())
}
