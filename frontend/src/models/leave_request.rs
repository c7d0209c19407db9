use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{push_opt, push_text, ListFilter, SortKey, SortOrder};
use crate::utils::time::{self, date_format};

pub const ABSENCE_REASONS: &[&str] = &["Vacation", "Sick leave", "Personal day", "Other"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LeaveStatus {
    New,
    Submitted,
    Approved,
    Rejected,
    Canceled,
    Other(String),
}

impl LeaveStatus {
    pub const KNOWN: [LeaveStatus; 5] = [
        LeaveStatus::New,
        LeaveStatus::Submitted,
        LeaveStatus::Approved,
        LeaveStatus::Rejected,
        LeaveStatus::Canceled,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            LeaveStatus::New => "New",
            LeaveStatus::Submitted => "Submitted",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
            LeaveStatus::Canceled => "Canceled",
            LeaveStatus::Other(raw) => raw,
        }
    }

    pub fn is_editable(&self) -> bool {
        *self == LeaveStatus::New
    }

    pub fn is_cancelable(&self) -> bool {
        matches!(self, LeaveStatus::New | LeaveStatus::Submitted)
    }
}

impl From<String> for LeaveStatus {
    fn from(raw: String) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "new" => LeaveStatus::New,
            "submitted" => LeaveStatus::Submitted,
            "approved" => LeaveStatus::Approved,
            "rejected" => LeaveStatus::Rejected,
            "canceled" | "cancelled" => LeaveStatus::Canceled,
            _ => LeaveStatus::Other(raw),
        }
    }
}

impl From<LeaveStatus> for String {
    fn from(status: LeaveStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: i64,
    #[serde(default)]
    pub employee_id: Option<i64>,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub absence_reason: String,
    #[serde(with = "date_format")]
    pub start_date: NaiveDate,
    #[serde(with = "date_format")]
    pub end_date: NaiveDate,
    #[serde(default)]
    pub comment: Option<String>,
    pub status: LeaveStatus,
    #[serde(default)]
    pub approval_request_id: Option<i64>,
    #[serde(default)]
    pub approval_status: Option<String>,
}

impl LeaveRequest {
    pub fn period_label(&self) -> String {
        format!(
            "{} – {}",
            time::format_date(self.start_date),
            time::format_date(self.end_date)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequestInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub employee_id: i64,
    pub absence_reason: String,
    #[serde(with = "date_format")]
    pub start_date: NaiveDate,
    #[serde(with = "date_format")]
    pub end_date: NaiveDate,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveRequestSortKey {
    Id,
    EmployeeName,
    AbsenceReason,
    StartDate,
    EndDate,
    Status,
    ApprovalStatus,
}

impl SortKey for LeaveRequestSortKey {
    fn field_name(self) -> &'static str {
        match self {
            LeaveRequestSortKey::Id => "id",
            LeaveRequestSortKey::EmployeeName => "employeeName",
            LeaveRequestSortKey::AbsenceReason => "absenceReason",
            LeaveRequestSortKey::StartDate => "startDate",
            LeaveRequestSortKey::EndDate => "endDate",
            LeaveRequestSortKey::Status => "status",
            LeaveRequestSortKey::ApprovalStatus => "approvalStatus",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeaveRequestFilter {
    pub sort: SortOrder<LeaveRequestSortKey>,
    pub absence_reason: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<LeaveStatus>,
    pub request_number: Option<i64>,
    pub employee_id: Option<i64>,
}

impl LeaveRequestFilter {
    /// Requests from the last eleven months, any status.
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            sort: SortOrder::ascending(LeaveRequestSortKey::StartDate),
            absence_reason: String::new(),
            start_date: Some(time::months_before(today, 11)),
            end_date: Some(today),
            status: None,
            request_number: None,
            employee_id: None,
        }
    }

    pub fn for_employee(mut self, employee_id: Option<i64>) -> Self {
        self.employee_id = employee_id;
        self
    }
}

impl Default for LeaveRequestFilter {
    fn default() -> Self {
        Self::starting(time::today())
    }
}

impl ListFilter for LeaveRequestFilter {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        self.sort.push_query(&mut pairs);
        push_text(&mut pairs, "absenceReason", &self.absence_reason);
        push_opt(&mut pairs, "startDate", self.start_date.map(time::format_date));
        push_opt(&mut pairs, "endDate", self.end_date.map(time::format_date));
        push_opt(&mut pairs, "status", self.status.as_ref());
        push_opt(&mut pairs, "requestNumber", self.request_number);
        push_opt(&mut pairs, "employeeId", self.employee_id);
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn status_parses_known_and_keeps_unknown() {
        assert_eq!(LeaveStatus::from("Submitted".to_string()), LeaveStatus::Submitted);
        assert_eq!(LeaveStatus::from("cancelled".to_string()), LeaveStatus::Canceled);
        assert_eq!(
            LeaveStatus::from("Escalated".to_string()),
            LeaveStatus::Other("Escalated".into())
        );
        assert_eq!(LeaveStatus::Other("Escalated".into()).to_string(), "Escalated");
    }

    #[test]
    fn status_gates_edit_and_cancel() {
        assert!(LeaveStatus::New.is_editable());
        assert!(!LeaveStatus::Submitted.is_editable());
        assert!(LeaveStatus::Submitted.is_cancelable());
        assert!(!LeaveStatus::Approved.is_cancelable());
        assert!(!LeaveStatus::Canceled.is_cancelable());
    }

    #[test]
    fn leave_request_deserializes_backend_shape() {
        let request: LeaveRequest = serde_json::from_value(json!({
            "id": 31,
            "employeeId": 4,
            "employeeName": "Olena Shevchenko",
            "absenceReason": "Vacation",
            "startDate": "2024-07-01T00:00:00",
            "endDate": "2024-07-05T00:00:00",
            "comment": "Seaside",
            "status": "New",
            "approvalRequestId": null,
            "approvalStatus": null
        }))
        .unwrap();
        assert_eq!(request.status, LeaveStatus::New);
        assert_eq!(request.period_label(), "2024-07-01 – 2024-07-05");
    }

    #[test]
    fn starting_filter_covers_last_eleven_months() {
        let filter = LeaveRequestFilter::starting(date(2024, 6, 15));
        assert_eq!(filter.start_date, Some(date(2023, 7, 15)));
        assert_eq!(filter.end_date, Some(date(2024, 6, 15)));
        assert!(!filter.query_pairs().iter().any(|(key, _)| *key == "status"));
    }

    #[test]
    fn filter_query_carries_status_and_employee_scope() {
        let filter = LeaveRequestFilter {
            status: Some(LeaveStatus::Submitted),
            request_number: Some(31),
            ..LeaveRequestFilter::starting(date(2024, 6, 15)).for_employee(Some(4))
        };
        let pairs = filter.query_pairs();
        assert!(pairs.contains(&("status", "Submitted".to_string())));
        assert!(pairs.contains(&("requestNumber", "31".to_string())));
        assert!(pairs.contains(&("employeeId", "4".to_string())));
    }
}
