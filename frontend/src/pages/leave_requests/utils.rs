use crate::api::ApiError;
use crate::models::{
    Capability, LeaveRequest, LeaveRequestFilter, LeaveRequestInput, LeaveRequestSortKey,
    LeaveStatus, Role,
};
use crate::utils::time::{date_input, format_date, parse_date};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeaveRequestForm {
    pub id: Option<i64>,
    pub employee_id: String,
    pub absence_reason: String,
    pub start_date: String,
    pub end_date: String,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LeaveRequestFormMsg {
    Employee(String),
    AbsenceReason(String),
    StartDate(String),
    EndDate(String),
    Comment(String),
}

impl LeaveRequestForm {
    /// Blank request, pre-filled with the filer when known.
    pub fn for_employee(employee_id: Option<i64>) -> Self {
        Self {
            employee_id: employee_id.map(|id| id.to_string()).unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn from_request(request: &LeaveRequest) -> Self {
        Self {
            id: Some(request.id),
            employee_id: request
                .employee_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            absence_reason: request.absence_reason.clone(),
            start_date: format_date(request.start_date),
            end_date: format_date(request.end_date),
            comment: request.comment.clone().unwrap_or_default(),
        }
    }

    pub fn apply(&mut self, msg: LeaveRequestFormMsg) {
        match msg {
            LeaveRequestFormMsg::Employee(value) => self.employee_id = value,
            LeaveRequestFormMsg::AbsenceReason(value) => self.absence_reason = value,
            LeaveRequestFormMsg::StartDate(value) => self.start_date = value,
            LeaveRequestFormMsg::EndDate(value) => self.end_date = value,
            LeaveRequestFormMsg::Comment(value) => self.comment = value,
        }
    }

    pub fn to_payload(&self) -> Result<LeaveRequestInput, ApiError> {
        let employee_id = self
            .employee_id
            .trim()
            .parse::<i64>()
            .map_err(|_| ApiError::validation("Employee is required"))?;
        let absence_reason = self.absence_reason.trim();
        if absence_reason.is_empty() {
            return Err(ApiError::validation("Absence reason is required"));
        }
        let start_date = parse_date(&self.start_date)
            .ok_or_else(|| ApiError::validation("Start date is required"))?;
        let end_date = parse_date(&self.end_date)
            .ok_or_else(|| ApiError::validation("End date is required"))?;
        if end_date < start_date {
            return Err(ApiError::validation("End date cannot be before start date"));
        }
        let comment = self.comment.trim();
        Ok(LeaveRequestInput {
            id: self.id,
            employee_id,
            absence_reason: absence_reason.to_string(),
            start_date,
            end_date,
            comment: (!comment.is_empty()).then(|| comment.to_string()),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LeaveRequestModal {
    #[default]
    Closed,
    Add,
    Edit(LeaveRequest),
    Details(LeaveRequest),
    ConfirmDelete(LeaveRequest),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveRequestAction {
    Edit,
    Submit,
    Cancel,
    Delete,
}

impl LeaveRequestAction {
    pub fn label(self) -> &'static str {
        match self {
            LeaveRequestAction::Edit => "Edit",
            LeaveRequestAction::Submit => "Submit",
            LeaveRequestAction::Cancel => "Cancel",
            LeaveRequestAction::Delete => "Delete",
        }
    }
}

/// Edit and Submit only while New; Cancel while New or Submitted.
pub fn row_actions(role: Role, request: &LeaveRequest) -> Vec<LeaveRequestAction> {
    let status = &request.status;
    [
        (
            LeaveRequestAction::Edit,
            Capability::EditLeaveRequest,
            status.is_editable(),
        ),
        (
            LeaveRequestAction::Submit,
            Capability::SubmitLeaveRequest,
            status.is_editable(),
        ),
        (
            LeaveRequestAction::Cancel,
            Capability::CancelLeaveRequest,
            status.is_cancelable(),
        ),
        (LeaveRequestAction::Delete, Capability::DeleteLeaveRequest, true),
    ]
    .into_iter()
    .filter(|(_, capability, allowed)| *allowed && role.can(*capability))
    .map(|(action, _, _)| action)
    .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum LeaveRequestFilterMsg {
    Sort(LeaveRequestSortKey),
    AbsenceReason(String),
    StartDate(String),
    EndDate(String),
    Status(String),
    RequestNumber(String),
    Reset,
}

/// Reset keeps the employee scope of "My Leave Requests".
pub fn apply_filter(filter: &mut LeaveRequestFilter, msg: LeaveRequestFilterMsg) {
    match msg {
        LeaveRequestFilterMsg::Sort(column) => filter.sort = filter.sort.toggled(column),
        LeaveRequestFilterMsg::AbsenceReason(value) => filter.absence_reason = value,
        LeaveRequestFilterMsg::StartDate(raw) => {
            if let Some(value) = date_input(&raw) {
                filter.start_date = value;
            }
        }
        LeaveRequestFilterMsg::EndDate(raw) => {
            if let Some(value) = date_input(&raw) {
                filter.end_date = value;
            }
        }
        LeaveRequestFilterMsg::Status(raw) => {
            filter.status = match raw.trim() {
                "" => None,
                value => Some(LeaveStatus::from(value.to_string())),
            }
        }
        LeaveRequestFilterMsg::RequestNumber(raw) => match raw.trim() {
            "" => filter.request_number = None,
            number => {
                if let Ok(value) = number.parse() {
                    filter.request_number = Some(value);
                }
            }
        },
        LeaveRequestFilterMsg::Reset => {
            *filter = LeaveRequestFilter::default().for_employee(filter.employee_id)
        }
    }
}
